use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn empty_grid() -> Value {
    Value::Object(Default::default())
}

/// A rectangular garden bed, measured in feet, with plants placed on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GardenLayout {
    pub id: u64,
    pub name: String,
    pub width_feet: u32,
    pub height_feet: u32,

    /// Free-form editor state, stored as given.
    #[serde(default = "empty_grid")]
    pub grid_data: Value,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(default)]
    pub plants: Vec<LayoutPlacement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutPlacement {
    pub id: u64,
    pub plant_id: u32,
    pub grid_x: u32,
    pub grid_y: u32,
}

/// Fields a client supplies when creating or replacing a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDraft {
    pub name: String,
    pub width_feet: u32,
    pub height_feet: u32,
    #[serde(default)]
    pub grid_data: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementDraft {
    pub plant_id: u32,
    pub grid_x: u32,
    pub grid_y: u32,
}

impl GardenLayout {
    pub fn new(id: u64, draft: LayoutDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: draft.name,
            width_feet: draft.width_feet,
            height_feet: draft.height_feet,
            grid_data: draft.grid_data.unwrap_or_else(empty_grid),
            created_at: now,
            updated_at: now,
            plants: Vec::new(),
        }
    }

    /// Replace the editable fields. A missing `grid_data` resets it to `{}`.
    pub fn apply(&mut self, draft: LayoutDraft) {
        self.name = draft.name;
        self.width_feet = draft.width_feet;
        self.height_feet = draft.height_feet;
        self.grid_data = draft.grid_data.unwrap_or_else(empty_grid);
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn next_placement_id(&self) -> u64 {
        self.plants.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    pub fn place(&mut self, draft: PlacementDraft) -> LayoutPlacement {
        let placement = LayoutPlacement {
            id: self.next_placement_id(),
            plant_id: draft.plant_id,
            grid_x: draft.grid_x,
            grid_y: draft.grid_y,
        };
        self.plants.push(placement);
        placement
    }

    pub fn area_sq_feet(&self) -> u64 {
        u64::from(self.width_feet) * u64::from(self.height_feet)
    }
}
