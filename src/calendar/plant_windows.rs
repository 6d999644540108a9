use super::harvest::{projected_harvest, sow_window};
use super::window::{MonthRange, in_window, parse_window};
use crate::error::{GardenError, Result};
use crate::model::Plant;

/// A plant's date windows, parsed once when the catalog is loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlantWindows {
    pub start_indoors: Option<MonthRange>,
    pub transplant: Option<MonthRange>,
    pub direct_sow: Option<MonthRange>,
    /// Projected harvest window, when the plant has a sow event and a
    /// known days-to-harvest.
    pub harvest: Option<MonthRange>,
}

impl PlantWindows {
    pub fn from_plant(plant: &Plant) -> Result<Self> {
        let field = |value: &Option<String>, label: &str| {
            parse_window(value.as_deref()).map_err(|e| match e {
                GardenError::Validation(msg) => {
                    GardenError::Validation(format!("{} of '{}': {}", label, plant.name, msg))
                }
                other => other,
            })
        };

        let start_indoors = field(&plant.start_indoors_date, "start_indoors_date")?;
        let transplant = field(&plant.transplant_date, "transplant_date")?;
        let direct_sow = field(&plant.direct_sow_date, "direct_sow_date")?;

        let harvest = match (sow_window(direct_sow, transplant), plant.harvest_days()) {
            (Some(sow), Some(days)) => projected_harvest(sow, days),
            _ => None,
        };

        Ok(Self {
            start_indoors,
            transplant,
            direct_sow,
            harvest,
        })
    }

    pub fn starts_indoors_in(&self, month: u32) -> bool {
        in_window(self.start_indoors, month)
    }

    pub fn goes_outside_in(&self, month: u32) -> bool {
        in_window(self.transplant, month) || in_window(self.direct_sow, month)
    }

    pub fn harvests_in(&self, month: u32) -> bool {
        in_window(self.harvest, month)
    }
}
