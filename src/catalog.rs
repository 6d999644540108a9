//! The plant catalog: seed data, load-time validation, and queries.
//!
//! Every record is validated and its date windows parsed when the catalog
//! is built, so a bad month abbreviation rejects the whole catalog before
//! any advisory is computed.

use crate::advisor::TipSource;
use crate::calendar::{FrostDates, PlantWindows};
use crate::config::{ClimateSettings, GardenConfig};
use crate::error::{GardenError, Result};
use crate::model::{Category, FrostTolerance, GardenLayout, Plant};
use crate::validation;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

const SEED_PLANTS: &str = include_str!("../data/plants.toml");
const SEED_TIPS: &str = include_str!("../data/tips.toml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTip {
    pub month: u32,
    pub tip: String,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    plants: Vec<Plant>,
    #[serde(default)]
    tips: Option<Vec<MonthlyTip>>,
}

/// A validated plant together with its parsed date windows.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub plant: Plant,
    pub windows: PlantWindows,
}

/// Filter for [`Catalog::search`]. Empty fields match everything.
#[derive(Debug, Clone, Default)]
pub struct PlantFilter {
    pub category: Option<Category>,
    /// Case-insensitive substring of the plant name.
    pub search: Option<String>,
}

/// Planting-calendar view of the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarOverview {
    pub zone: String,
    pub last_spring_frost: String,
    pub first_fall_frost: String,
    pub growing_season_days: i64,
    pub plants: Vec<CalendarPlant>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarPlant {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub start_indoors_date: Option<String>,
    pub transplant_date: Option<String>,
    pub direct_sow_date: Option<String>,
    pub days_to_harvest: Option<u32>,
    pub frost_tolerance: Option<FrostTolerance>,
}

impl From<&Plant> for CalendarPlant {
    fn from(plant: &Plant) -> Self {
        Self {
            id: plant.id,
            name: plant.name.clone(),
            category: plant.category,
            start_indoors_date: plant.start_indoors_date.clone(),
            transplant_date: plant.transplant_date.clone(),
            direct_sow_date: plant.direct_sow_date.clone(),
            days_to_harvest: plant.days_to_harvest,
            frost_tolerance: plant.frost_tolerance,
        }
    }
}

/// How a plant relates to what is already placed in the cells around it.
#[derive(Debug, Clone, Default)]
pub struct NeighborReport<'a> {
    pub companions: Vec<&'a Plant>,
    pub conflicts: Vec<&'a Plant>,
}

/// Read-only plant catalog, ordered by name.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    tips: BTreeMap<u32, String>,
}

impl Catalog {
    /// The built-in Montana catalog.
    pub fn seeded() -> Result<Self> {
        let plants: CatalogFile = toml::from_str(SEED_PLANTS)?;
        let tips: CatalogFile = toml::from_str(SEED_TIPS)?;
        Self::new(plants.plants, tips.tips.unwrap_or_default())
    }

    /// Load a catalog file. Tips fall back to the built-in set when the
    /// file has none.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: CatalogFile = toml::from_str(&content)?;
        let tips = match file.tips {
            Some(tips) => tips,
            None => toml::from_str::<CatalogFile>(SEED_TIPS)?
                .tips
                .unwrap_or_default(),
        };
        tracing::info!(path = %path.display(), plants = file.plants.len(), "Loading catalog");
        Self::new(file.plants, tips)
    }

    /// The catalog configured for a project: the configured file, or the
    /// built-in seed data.
    pub fn for_project(config: &GardenConfig, project_root: &Path) -> Result<Self> {
        match config.catalog_path(project_root) {
            Some(path) => Self::load(&path),
            None => Self::seeded(),
        }
    }

    /// Build a catalog from raw records.
    ///
    /// Records without an id are numbered by their position, starting at 1.
    /// The result is sorted by name.
    pub fn new(plants: Vec<Plant>, tips: Vec<MonthlyTip>) -> Result<Self> {
        let mut names = HashSet::new();
        let mut ids = HashSet::new();
        let mut entries = Vec::with_capacity(plants.len());

        for (idx, mut plant) in plants.into_iter().enumerate() {
            if plant.id == 0 {
                plant.id = idx as u32 + 1;
            }
            validation::validate_plant(&plant)?;
            if !names.insert(plant.name.to_lowercase()) {
                return Err(GardenError::Validation(format!(
                    "Duplicate plant name: {}",
                    plant.name
                )));
            }
            if !ids.insert(plant.id) {
                return Err(GardenError::Validation(format!(
                    "Duplicate plant id {} ({})",
                    plant.id, plant.name
                )));
            }
            let windows = PlantWindows::from_plant(&plant)?;
            entries.push(CatalogEntry { plant, windows });
        }

        let mut tip_map = BTreeMap::new();
        for MonthlyTip { month, tip } in tips {
            validation::validate_month(month)?;
            if tip_map.insert(month, tip).is_some() {
                return Err(GardenError::Validation(format!(
                    "More than one tip for month {}",
                    month
                )));
            }
        }

        entries.sort_by(|a, b| a.plant.name.cmp(&b.plant.name));
        tracing::debug!(plants = entries.len(), tips = tip_map.len(), "Catalog ready");

        Ok(Self {
            entries,
            tips: tip_map,
        })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn plants(&self) -> impl Iterator<Item = &Plant> {
        self.entries.iter().map(|e| &e.plant)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, id: u32) -> Result<&CatalogEntry> {
        self.entries
            .iter()
            .find(|e| e.plant.id == id)
            .ok_or_else(|| GardenError::NotFound(format!("Plant id: {}", id)))
    }

    pub fn get(&self, id: u32) -> Result<&Plant> {
        self.entry(id).map(|e| &e.plant)
    }

    /// Look an entry up by numeric id or case-insensitive name.
    pub fn find_entry(&self, key: &str) -> Result<&CatalogEntry> {
        if let Ok(id) = key.parse::<u32>() {
            return self.entry(id);
        }
        self.entries
            .iter()
            .find(|e| e.plant.name.eq_ignore_ascii_case(key))
            .ok_or_else(|| GardenError::NotFound(format!("Plant: {}", key)))
    }

    pub fn find(&self, key: &str) -> Result<&Plant> {
        self.find_entry(key).map(|e| &e.plant)
    }

    pub fn search(&self, filter: &PlantFilter) -> Vec<&Plant> {
        let needle = filter
            .search
            .as_deref()
            .map(str::to_lowercase)
            .filter(|s| !s.is_empty());

        self.plants()
            .filter(|p| filter.category.is_none_or(|c| p.category == c))
            .filter(|p| {
                needle
                    .as_deref()
                    .is_none_or(|n| p.name.to_lowercase().contains(n))
            })
            .collect()
    }

    /// Classify the plants placed within one cell of `(x, y)` against
    /// `plant`. A pair counts if either side lists the other.
    pub fn neighbors(
        &self,
        layout: &GardenLayout,
        plant: &Plant,
        x: u32,
        y: u32,
    ) -> NeighborReport<'_> {
        let mut report = NeighborReport::default();
        let mut seen = HashSet::new();

        for placement in &layout.plants {
            if placement.grid_x.abs_diff(x) > 1 || placement.grid_y.abs_diff(y) > 1 {
                continue;
            }
            let Ok(other) = self.get(placement.plant_id) else {
                continue;
            };
            if other.id == plant.id || !seen.insert(other.id) {
                continue;
            }
            if plant.is_incompatible_with(&other.name) || other.is_incompatible_with(&plant.name) {
                report.conflicts.push(other);
            } else if plant.is_companion_of(&other.name) || other.is_companion_of(&plant.name) {
                report.companions.push(other);
            }
        }
        report
    }

    pub fn calendar(&self, climate: &ClimateSettings, frost: &FrostDates) -> CalendarOverview {
        CalendarOverview {
            zone: climate.zone.clone(),
            last_spring_frost: frost.last_spring.to_string(),
            first_fall_frost: frost.first_fall.to_string(),
            growing_season_days: frost.growing_season_days(),
            plants: self.plants().map(CalendarPlant::from).collect(),
        }
    }
}

impl TipSource for Catalog {
    fn tip_for(&self, month: u32) -> Option<&str> {
        self.tips.get(&month).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;
    use tempfile::TempDir;

    #[test]
    fn test_seeded_catalog_loads() {
        let catalog = Catalog::seeded().unwrap();
        assert_eq!(catalog.len(), 53);
        for month in 1..=12 {
            assert!(catalog.tip_for(month).is_some(), "missing tip {}", month);
        }
    }

    #[test]
    fn test_seeded_catalog_sorted_by_name() {
        let catalog = Catalog::seeded().unwrap();
        let names: Vec<_> = catalog.plants().map(|p| p.name.clone()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.first().map(String::as_str), Some("Basil"));
    }

    #[test]
    fn test_ids_follow_seed_order() {
        let catalog = Catalog::seeded().unwrap();
        assert_eq!(catalog.get(1).unwrap().name, "Tomato");
        assert_eq!(catalog.find("tomato").unwrap().id, 1);
        assert_eq!(catalog.find("53").unwrap().name, "Rhubarb");
        assert!(matches!(catalog.get(999), Err(GardenError::NotFound(_))));
    }

    #[test]
    fn test_search_by_category_and_name() {
        let catalog = Catalog::seeded().unwrap();

        let fruit = catalog.search(&PlantFilter {
            category: Some(Category::Fruit),
            search: None,
        });
        let names: Vec<_> = fruit.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Raspberry", "Rhubarb", "Strawberry"]);

        let peas = catalog.search(&PlantFilter {
            category: None,
            search: Some("PEA".to_string()),
        });
        let names: Vec<_> = peas.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Pea", "Sweet Pea"]);

        let both = catalog.search(&PlantFilter {
            category: Some(Category::Flower),
            search: Some("pea".to_string()),
        });
        assert_eq!(both.len(), 1);
    }

    #[test]
    fn test_unknown_month_rejects_catalog() {
        let plant = Plant::new("Bad", Category::Herb, Difficulty::Easy).with_direct_sow("Mai 3");
        let err = Catalog::new(vec![plant], Vec::new()).unwrap_err();
        assert!(matches!(err, GardenError::Validation(_)));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let plants = vec![
            Plant::new("Kale", Category::Vegetable, Difficulty::Easy),
            Plant::new("kale", Category::Vegetable, Difficulty::Easy),
        ];
        assert!(Catalog::new(plants, Vec::new()).is_err());
    }

    #[test]
    fn test_tip_month_validated() {
        let tips = vec![MonthlyTip {
            month: 13,
            tip: "Never".to_string(),
        }];
        assert!(Catalog::new(Vec::new(), tips).is_err());
    }

    #[test]
    fn test_neighbors_flags_conflicts_and_companions() {
        use crate::model::{LayoutDraft, PlacementDraft};

        let catalog = Catalog::seeded().unwrap();
        let tomato = catalog.find("Tomato").unwrap();
        let mut layout = GardenLayout::new(
            1,
            LayoutDraft {
                name: "Bed".to_string(),
                width_feet: 10,
                height_feet: 10,
                grid_data: None,
            },
        );
        for (name, x, y) in [("Cabbage", 4, 4), ("Basil", 6, 6), ("Lettuce", 9, 9)] {
            layout.place(PlacementDraft {
                plant_id: catalog.find(name).unwrap().id,
                grid_x: x,
                grid_y: y,
            });
        }

        let report = catalog.neighbors(&layout, tomato, 5, 5);
        let names = |plants: &Vec<&Plant>| {
            plants.iter().map(|p| p.name.clone()).collect::<Vec<_>>()
        };
        assert_eq!(names(&report.conflicts), vec!["Cabbage"]);
        assert_eq!(names(&report.companions), vec!["Basil"]);

        let far = catalog.neighbors(&layout, tomato, 0, 0);
        assert!(far.conflicts.is_empty());
        assert!(far.companions.is_empty());
    }

    #[test]
    fn test_calendar_overview() {
        let catalog = Catalog::seeded().unwrap();
        let overview = catalog.calendar(&ClimateSettings::default(), &FrostDates::default());
        assert_eq!(overview.zone, "4b-6a");
        assert_eq!(overview.last_spring_frost, "May 17");
        assert_eq!(overview.first_fall_frost, "Sep 22");
        assert_eq!(overview.growing_season_days, 128);
        assert_eq!(overview.plants.len(), catalog.len());
    }

    #[test]
    fn test_load_custom_catalog_uses_seed_tips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plants.toml");
        std::fs::write(
            &path,
            r#"
            [[plants]]
            name = "Huckleberry"
            category = "fruit"
            difficulty = "hard"
            transplant_date = "May 1 - May 15"
            days_to_harvest = 90
            "#,
        )
        .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(1).unwrap().name, "Huckleberry");
        assert!(catalog.tip_for(10).unwrap().contains("garlic"));
    }
}
