//! Data models for the garden planner.
//!
//! - [`Plant`]: a catalog record with growing requirements and date windows
//! - [`Category`], [`Difficulty`], [`Sun`], [`Water`], [`FrostTolerance`]
//! - [`GardenLayout`] and [`LayoutPlacement`]: user-built garden grids

mod layout;
mod plant;
mod types;

pub use layout::{GardenLayout, LayoutDraft, LayoutPlacement, PlacementDraft};
pub use plant::Plant;
pub use types::{Category, Difficulty, FrostTolerance, Sun, Water};
