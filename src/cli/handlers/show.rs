use crate::catalog::CatalogEntry;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{format_category, format_difficulty, format_window};

pub fn handle_show(ctx: &CommandContext, key: &str, json: bool) -> Result<()> {
    let entry = ctx.catalog.find_entry(key)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entry.plant)?);
    } else {
        print_entry(entry);
    }
    Ok(())
}

fn print_entry(entry: &CatalogEntry) {
    let plant = &entry.plant;
    let windows = &entry.windows;

    println!("{} {}", plant.id.to_string().cyan().bold(), plant.name.bold());
    println!("Category:      {}", format_category(plant.category));
    println!("Difficulty:    {}", format_difficulty(plant.difficulty));

    if let Some(days) = plant.harvest_days() {
        println!("Harvest in:    {} days", days);
    }
    if let Some(spacing) = plant.spacing_inches {
        println!("Spacing:       {}\"", spacing);
    }
    if let Some(depth) = plant.depth_inches {
        println!("Depth:         {}\"", depth);
    }
    if let Some(sun) = plant.sun {
        println!("Sun:           {}", sun);
    }
    if let Some(water) = plant.water {
        println!("Water:         {}", water);
    }
    if let Some(tolerance) = plant.frost_tolerance {
        println!("Frost:         {}", tolerance);
    }

    println!();
    println!("Start indoors: {}", format_window(windows.start_indoors));
    println!("Transplant:    {}", format_window(windows.transplant));
    println!("Direct sow:    {}", format_window(windows.direct_sow));
    println!("Harvest:       {}", format_window(windows.harvest));
    if let Some(ref last) = plant.last_plant_date {
        println!("Plant by:      {}", last);
    }

    if !plant.companion_plants.is_empty() {
        println!("\nCompanions:    {}", plant.companion_plants.join(", ").green());
    }
    if !plant.incompatible_plants.is_empty() {
        println!("Keep apart:    {}", plant.incompatible_plants.join(", ").red());
    }

    if let Some(ref description) = plant.description {
        println!("\n{}", description);
    }
    if let Some(ref tips) = plant.tips {
        println!("\n{} {}", "Tip:".yellow(), tips);
    }
}
