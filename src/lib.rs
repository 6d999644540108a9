//! # Plant Montana - a garden planner for a short growing season
//!
//! A catalog of plants suited to Montana (USDA zones 4b-6a) with their
//! indoor-start, transplant and direct-sow windows, plus the calendar logic
//! that turns those windows into monthly advice: what to start indoors, what
//! to put in the ground and what should be ready to harvest.
//!
//! ## Quick Start
//!
//! ```bash
//! # Set up a project in the current directory
//! plantmontana init
//!
//! # What to do this month
//! plantmontana now
//!
//! # Days to the next frost boundary
//! plantmontana frost
//!
//! # Serve the JSON API
//! plantmontana serve --port 3000
//! ```
//!
//! ## Modules
//!
//! - [`calendar`]: date windows, harvest projection and frost countdown
//! - [`advisor`]: monthly advice over the catalog
//! - [`catalog`]: the plant catalog and its queries
//! - [`storage`]: file-based garden layouts
//! - [`server`]: axum HTTP API
//! - [`cli`]: command-line interface

/// Monthly advice: start indoors, plant outside, harvest.
pub mod advisor;

/// Date-window parsing, membership, harvest projection and frost countdown.
pub mod calendar;

/// The plant catalog, seeded from built-in Montana data.
pub mod catalog;

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.plantmontana.toml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
pub mod error;

pub mod logging;

/// Plants, layouts and their enums.
pub mod model;

/// JSON HTTP API.
pub mod server;

/// File-based storage for garden layouts.
pub mod storage;

/// Input validation for plants, layouts and placements.
pub mod validation;
