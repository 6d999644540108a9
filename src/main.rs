use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use plantmontana::cli::handlers::{self, CommandContext, PlantsParams};
use plantmontana::cli::{Cli, Commands};
use plantmontana::config::GardenConfig;
use plantmontana::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let context = || load_context(cli.config.as_deref(), cli.data_dir.clone());

    match cli.command {
        Commands::Init => handlers::handle_init(cli.data_dir.clone()),
        Commands::Plants {
            category,
            search,
            json,
        } => handlers::handle_plants(
            &context()?,
            PlantsParams {
                category,
                search,
                json,
            },
        ),
        Commands::Show { plant, json } => handlers::handle_show(&context()?, &plant, json),
        Commands::Now { month, date, json } => {
            handlers::handle_now(&context()?, month, date, json)
        }
        Commands::Calendar { json } => handlers::handle_calendar(&context()?, json),
        Commands::Frost { date, json } => handlers::handle_frost(&context()?, date, json),
        Commands::Layout(command) => handlers::handle_layout(&context()?, command),
        Commands::Serve { host, port } => handlers::handle_serve(context()?, host, port),
    }
}

fn load_context(config_path: Option<&Path>, data_dir: Option<String>) -> Result<CommandContext> {
    let (mut config, root) = match config_path {
        Some(path) => GardenConfig::load_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir()?;
            GardenConfig::load_or_default(&cwd).context("Failed to load garden configuration")?
        }
    };
    if let Some(dir) = data_dir {
        config.garden.path = dir;
    }

    Ok(CommandContext::new(config, root)?)
}
