use crate::cli::commands::LayoutCommand;
use crate::model::{GardenLayout, LayoutDraft};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_layout(ctx: &CommandContext, command: LayoutCommand) -> Result<()> {
    let repo = ctx.layouts();

    match command {
        LayoutCommand::List { json } => {
            let layouts = repo.list()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&layouts)?);
            } else if layouts.is_empty() {
                println!("No layouts found.");
            } else {
                for layout in &layouts {
                    println!(
                        "{:>3} {:<30} {}x{} ft, {} plants",
                        layout.id.to_string().cyan(),
                        layout.name,
                        layout.width_feet,
                        layout.height_feet,
                        layout.plants.len()
                    );
                }
            }
        }
        LayoutCommand::Create {
            name,
            width,
            height,
            json,
        } => {
            let layout = repo.create(LayoutDraft {
                name,
                width_feet: width,
                height_feet: height,
                grid_data: None,
            })?;
            if json {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                println!(
                    "{} layout {} {}",
                    "Created".green(),
                    layout.id.to_string().cyan(),
                    layout.name
                );
            }
        }
        LayoutCommand::Show { id, json } => {
            let layout = repo.get(id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                print_layout(ctx, &layout);
            }
        }
        LayoutCommand::Update {
            id,
            name,
            width,
            height,
            json,
        } => {
            let current = repo.get(id)?;
            let layout = repo.update(
                id,
                LayoutDraft {
                    name: name.unwrap_or(current.name),
                    width_feet: width.unwrap_or(current.width_feet),
                    height_feet: height.unwrap_or(current.height_feet),
                    grid_data: Some(current.grid_data),
                },
            )?;
            if json {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                println!(
                    "{} layout {} {}",
                    "Updated".green(),
                    layout.id.to_string().cyan(),
                    layout.name
                );
            }
        }
        LayoutCommand::Delete { id } => {
            repo.delete(id)?;
            println!("{} layout {}", "Deleted".red(), id.to_string().cyan());
        }
        LayoutCommand::Place {
            id,
            plant,
            x,
            y,
            json,
        } => {
            let plant = ctx.catalog.find(&plant)?;
            let layout = repo.get(id)?;
            let neighbors = ctx.catalog.neighbors(&layout, plant, x, y);
            let placement = repo.place_plant(id, plant, x, y)?;

            for other in &neighbors.conflicts {
                eprintln!(
                    "{} {} and {} grow poorly together",
                    "Warning:".yellow(),
                    plant.name,
                    other.name
                );
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&placement)?);
            } else {
                println!(
                    "{} {} at ({}, {}) on layout {}",
                    "Placed".green(),
                    plant.name,
                    x,
                    y,
                    id.to_string().cyan()
                );
                if !neighbors.companions.is_empty() {
                    let names: Vec<_> = neighbors.companions.iter().map(|p| p.name.as_str()).collect();
                    println!("  Good neighbors: {}", names.join(", ").green());
                }
            }
        }
    }
    Ok(())
}

fn print_layout(ctx: &CommandContext, layout: &GardenLayout) {
    println!("{} {}", layout.id.to_string().cyan().bold(), layout.name.bold());
    println!(
        "Size:     {}x{} ft ({} sq ft)",
        layout.width_feet,
        layout.height_feet,
        layout.area_sq_feet()
    );
    println!("Created:  {}", layout.created_at.format("%Y-%m-%d %H:%M"));
    println!("Updated:  {}", layout.updated_at.format("%Y-%m-%d %H:%M"));

    if layout.plants.is_empty() {
        println!("\n{}", "No plants placed.".dimmed());
        return;
    }

    println!();
    for placement in &layout.plants {
        let name = ctx
            .catalog
            .get(placement.plant_id)
            .map(|p| p.name.as_str())
            .unwrap_or("(unknown plant)");
        println!(
            "  ({:>3}, {:>3}) {}",
            placement.grid_x, placement.grid_y, name
        );
    }
}
