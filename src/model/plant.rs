use super::types::{Category, Difficulty, FrostTolerance, Sun, Water};
use serde::{Deserialize, Serialize};

/// A catalog entry describing how and when to grow one plant.
///
/// The three date fields hold windows like `"Mar 22 - Apr 5"`; see
/// [`crate::calendar::parse_window`]. `last_plant_date` is informational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub difficulty: Difficulty,

    #[serde(default)]
    pub days_to_harvest: Option<u32>,

    #[serde(default)]
    pub spacing_inches: Option<u32>,

    #[serde(default)]
    pub depth_inches: Option<f64>,

    #[serde(default)]
    pub sun: Option<Sun>,

    #[serde(default)]
    pub water: Option<Water>,

    #[serde(default)]
    pub companion_plants: Vec<String>,

    #[serde(default)]
    pub incompatible_plants: Vec<String>,

    #[serde(default)]
    pub start_indoors_date: Option<String>,

    #[serde(default)]
    pub transplant_date: Option<String>,

    #[serde(default)]
    pub direct_sow_date: Option<String>,

    #[serde(default)]
    pub last_plant_date: Option<String>,

    #[serde(default)]
    pub frost_tolerance: Option<FrostTolerance>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub tips: Option<String>,
}

impl Plant {
    pub fn new(name: impl Into<String>, category: Category, difficulty: Difficulty) -> Self {
        Self {
            id: 0,
            name: name.into(),
            category,
            difficulty,
            days_to_harvest: None,
            spacing_inches: None,
            depth_inches: None,
            sun: None,
            water: None,
            companion_plants: Vec::new(),
            incompatible_plants: Vec::new(),
            start_indoors_date: None,
            transplant_date: None,
            direct_sow_date: None,
            last_plant_date: None,
            frost_tolerance: None,
            description: None,
            tips: None,
        }
    }

    pub fn with_days_to_harvest(mut self, days: u32) -> Self {
        self.days_to_harvest = Some(days);
        self
    }

    pub fn with_start_indoors(mut self, window: impl Into<String>) -> Self {
        self.start_indoors_date = Some(window.into());
        self
    }

    pub fn with_transplant(mut self, window: impl Into<String>) -> Self {
        self.transplant_date = Some(window.into());
        self
    }

    pub fn with_direct_sow(mut self, window: impl Into<String>) -> Self {
        self.direct_sow_date = Some(window.into());
        self
    }

    /// Days to harvest, treating zero as unknown.
    pub fn harvest_days(&self) -> Option<u32> {
        self.days_to_harvest.filter(|d| *d > 0)
    }

    pub fn is_companion_of(&self, other: &str) -> bool {
        self.companion_plants
            .iter()
            .any(|name| name.eq_ignore_ascii_case(other))
    }

    pub fn is_incompatible_with(&self, other: &str) -> bool {
        self.incompatible_plants
            .iter()
            .any(|name| name.eq_ignore_ascii_case(other))
    }
}
