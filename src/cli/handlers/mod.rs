mod calendar;
mod init;
mod layout;
mod now;
mod plants;
mod serve;
mod show;
mod utils;

pub use calendar::handle_calendar;
pub use init::handle_init;
pub use layout::handle_layout;
pub use now::{handle_frost, handle_now};
pub use plants::{PlantsParams, handle_plants};
pub use serve::handle_serve;
pub use show::handle_show;

use crate::calendar::{Clock, FixedClock, FrostDates, SystemClock};
use crate::catalog::Catalog;
use crate::config::GardenConfig;
use crate::error::Result;
use crate::storage::LayoutRepository;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: GardenConfig,
    pub root: PathBuf,
    pub catalog: Catalog,
    pub frost: FrostDates,
}

impl CommandContext {
    pub fn new(config: GardenConfig, root: PathBuf) -> Result<Self> {
        let catalog = Catalog::for_project(&config, &root)?;
        let frost = config.climate.frost_dates()?;
        Ok(Self {
            config,
            root,
            catalog,
            frost,
        })
    }

    pub fn layouts(&self) -> LayoutRepository {
        LayoutRepository::new(&self.config, &self.root)
    }
}

/// The wall clock, or one pinned to midnight of `date`.
fn clock_for(date: Option<NaiveDate>) -> Box<dyn Clock> {
    match date {
        Some(date) => Box::new(FixedClock::on(date)),
        None => Box::new(SystemClock),
    }
}
