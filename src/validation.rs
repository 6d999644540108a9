//! Input validation for catalog and layout data.

use crate::error::{GardenError, Result};
use crate::model::{GardenLayout, LayoutDraft, PlacementDraft, Plant};

/// Maximum allowed length for a plant or layout name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Longest crop cycle the harvest projection can represent.
pub const MAX_DAYS_TO_HARVEST: u32 = 365;

/// Largest side of a layout, in feet.
pub const MAX_LAYOUT_FEET: u32 = 1000;

fn validate_name(kind: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(GardenError::Validation(format!("{} name cannot be empty", kind)));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(GardenError::Validation(format!(
            "{} name exceeds maximum length of {} characters",
            kind, MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

/// Validates a month number.
pub fn validate_month(month: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(GardenError::Validation(format!(
            "Month must be between 1 and 12, got {}",
            month
        )));
    }
    Ok(month)
}

/// Validates the scalar fields of a plant record. Date windows are
/// checked when they are parsed.
pub fn validate_plant(plant: &Plant) -> Result<()> {
    validate_name("Plant", &plant.name)?;
    if let Some(days) = plant.days_to_harvest {
        if days > MAX_DAYS_TO_HARVEST {
            return Err(GardenError::Validation(format!(
                "days_to_harvest of '{}' is {}, maximum is {}",
                plant.name, days, MAX_DAYS_TO_HARVEST
            )));
        }
    }
    if let Some(depth) = plant.depth_inches {
        if !depth.is_finite() || depth < 0.0 {
            return Err(GardenError::Validation(format!(
                "depth_inches of '{}' must be a non-negative number",
                plant.name
            )));
        }
    }
    Ok(())
}

/// Validates a layout draft.
pub fn validate_layout(draft: &LayoutDraft) -> Result<()> {
    validate_name("Layout", &draft.name)?;
    for (label, feet) in [("width_feet", draft.width_feet), ("height_feet", draft.height_feet)] {
        if feet == 0 || feet > MAX_LAYOUT_FEET {
            return Err(GardenError::Validation(format!(
                "{} must be between 1 and {}, got {}",
                label, MAX_LAYOUT_FEET, feet
            )));
        }
    }
    if let Some(grid) = &draft.grid_data {
        if !grid.is_object() {
            return Err(GardenError::Validation(
                "grid_data must be a JSON object".to_string(),
            ));
        }
    }
    Ok(())
}

/// Validates that a placement lies inside the layout grid.
pub fn validate_placement(layout: &GardenLayout, placement: &PlacementDraft) -> Result<()> {
    if placement.grid_x >= layout.width_feet || placement.grid_y >= layout.height_feet {
        return Err(GardenError::Validation(format!(
            "Position ({}, {}) is outside the {}x{} layout",
            placement.grid_x, placement.grid_y, layout.width_feet, layout.height_feet
        )));
    }
    Ok(())
}
