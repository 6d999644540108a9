use crate::advisor::{Advisory, MonthlyAdvisor};
use crate::calendar::frost_countdown;
use crate::model::Plant;
use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;

use super::utils::format_countdown;
use super::{CommandContext, clock_for};

pub fn handle_now(
    ctx: &CommandContext,
    month: Option<u32>,
    date: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let clock = clock_for(date);
    let advisor = MonthlyAdvisor::new(
        ctx.catalog.entries(),
        &ctx.catalog,
        clock.as_ref(),
        ctx.frost,
    );
    let advisory = advisor.advise(month)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&advisory)?);
    } else {
        print_advisory(&advisory);
    }
    Ok(())
}

pub fn handle_frost(ctx: &CommandContext, date: Option<NaiveDate>, json: bool) -> Result<()> {
    let clock = clock_for(date);
    let countdown = frost_countdown(clock.now(), &ctx.frost);

    if json {
        println!("{}", serde_json::to_string_pretty(&countdown)?);
    } else {
        println!("{}", format_countdown(&countdown));
    }
    Ok(())
}

fn print_advisory(advisory: &Advisory) {
    println!("{}", advisory.month_name.bold());
    println!("{}", format_countdown(&advisory.frost_countdown));
    if !advisory.tip.is_empty() {
        println!("\n{} {}", "Tip:".yellow(), advisory.tip);
    }

    print_section("Start indoors", &advisory.start_indoors);
    print_section("Plant outside", &advisory.plant_outside);
    print_section("Harvest", &advisory.harvest);
}

fn print_section(title: &str, plants: &[Plant]) {
    println!("\n{} ({})", title.green().bold(), plants.len());
    if plants.is_empty() {
        println!("  {}", "nothing this month".dimmed());
        return;
    }
    for plant in plants {
        println!("  {}", plant.name);
    }
}
