use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::format_window;

pub fn handle_calendar(ctx: &CommandContext, json: bool) -> Result<()> {
    let overview = ctx.catalog.calendar(&ctx.config.climate, &ctx.frost);

    if json {
        println!("{}", serde_json::to_string_pretty(&overview)?);
        return Ok(());
    }

    println!("{} {}", "Zone".bold(), overview.zone);
    println!(
        "Last spring frost {}, first fall frost {} ({} day season)",
        overview.last_spring_frost.cyan(),
        overview.first_fall_frost.cyan(),
        overview.growing_season_days
    );
    println!();
    println!(
        "{:<24} {:<9} {:<9} {:<9} {}",
        "Plant".bold(),
        "Indoors".bold(),
        "Outside".bold(),
        "Sow".bold(),
        "Harvest".bold()
    );

    for entry in ctx.catalog.entries() {
        let windows = &entry.windows;
        println!(
            "{:<24} {:<9} {:<9} {:<9} {}",
            entry.plant.name,
            format_window(windows.start_indoors),
            format_window(windows.transplant),
            format_window(windows.direct_sow),
            format_window(windows.harvest)
        );
    }
    Ok(())
}
