use crate::config::{CONFIG_FILE, GardenConfig};
use crate::error::GardenError;
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(data_dir: Option<String>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE);

    if config_path.exists() {
        return Err(GardenError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let mut config = GardenConfig::default();
    if let Some(dir) = data_dir {
        config.garden.path = dir;
    }

    let layouts_path = config.layouts_path(&cwd);
    std::fs::create_dir_all(&layouts_path)?;
    config.save(&config_path)?;
    tracing::info!(path = %config_path.display(), "Initialized project");

    println!(
        "{} garden project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    println!("  Data:   {}", config.data_path(&cwd).display());

    Ok(())
}
