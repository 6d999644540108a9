use crate::model::Category;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plantmontana")]
#[command(
    author,
    version,
    about = "A gardening planner for Montana's short growing season"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .plantmontana.toml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to data directory (overrides config)
    #[arg(long, global = true, env = "DATA_DIR")]
    pub data_dir: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new garden project in the current directory
    Init,

    /// List plants in the catalog
    #[command(visible_alias = "ls")]
    Plants {
        /// Only show this category
        #[arg(short, long, value_enum)]
        category: Option<CategoryArg>,

        /// Case-insensitive name filter
        #[arg(short, long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one plant by id or name
    Show {
        /// Plant id or name
        plant: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// What to start, plant and harvest this month
    Now {
        /// Month number (1-12); defaults to the current month
        #[arg(short, long)]
        month: Option<u32>,

        /// Pretend today is this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Planting calendar for every plant
    Calendar {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Days until the next frost boundary
    Frost {
        /// Pretend today is this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage garden layouts
    #[command(subcommand)]
    Layout(LayoutCommand),

    /// Start the HTTP API server
    Serve {
        /// Address to bind (defaults to [server] host)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (defaults to [server] port)
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },
}

#[derive(Subcommand)]
pub enum LayoutCommand {
    /// List layouts, most recently updated first
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a layout
    #[command(visible_alias = "new")]
    Create {
        /// Layout name
        name: String,

        /// Width in feet
        #[arg(short = 'W', long)]
        width: u32,

        /// Height in feet
        #[arg(short = 'H', long)]
        height: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a layout and its placements
    Show {
        id: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rename or resize a layout
    Update {
        id: u64,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New width in feet
        #[arg(short = 'W', long)]
        width: Option<u32>,

        /// New height in feet
        #[arg(short = 'H', long)]
        height: Option<u32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a layout and its placements
    #[command(visible_alias = "rm")]
    Delete { id: u64 },

    /// Place a plant on a layout
    Place {
        /// Layout id
        id: u64,

        /// Plant id or name
        plant: String,

        /// Column, from 0
        #[arg(short, long)]
        x: u32,

        /// Row, from 0
        #[arg(short, long)]
        y: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Vegetable,
    Herb,
    Flower,
    Fruit,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Vegetable => Category::Vegetable,
            CategoryArg::Herb => Category::Herb,
            CategoryArg::Flower => Category::Flower,
            CategoryArg::Fruit => Category::Fruit,
        }
    }
}
