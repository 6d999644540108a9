//! Flat-file storage for garden layouts.
//!
//! Layouts live in `<data>/layouts/` as pretty-printed JSON, one file per
//! layout named `<id>--<slug>.json`. A `.id` file in the same directory
//! holds the last issued id so ids are never reused.
//!
//! ```json
//! {
//!   "id": 1,
//!   "name": "North Bed",
//!   "width_feet": 4,
//!   "height_feet": 8,
//!   "grid_data": {},
//!   "created_at": "2025-04-02T17:00:00Z",
//!   "updated_at": "2025-04-02T17:00:00Z",
//!   "plants": [{ "id": 1, "plant_id": 1, "grid_x": 0, "grid_y": 3 }]
//! }
//! ```

mod layout_repository;

pub use layout_repository::LayoutRepository;
