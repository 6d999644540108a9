use crate::calendar::{FrostCountdown, MonthRange};
use crate::model::{Category, Difficulty, Plant};
use colored::Colorize;

pub fn format_category(category: Category) -> colored::ColoredString {
    match category {
        Category::Vegetable => "vegetable".green(),
        Category::Herb => "herb".cyan(),
        Category::Flower => "flower".magenta(),
        Category::Fruit => "fruit".red(),
    }
}

pub fn format_difficulty(difficulty: Difficulty) -> colored::ColoredString {
    match difficulty {
        Difficulty::Easy => "easy".green(),
        Difficulty::Moderate => "moderate".yellow(),
        Difficulty::Hard => "hard".red(),
    }
}

pub fn format_window(window: Option<MonthRange>) -> String {
    window.map(|w| w.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn format_countdown(countdown: &FrostCountdown) -> String {
    if countdown.event == FrostCountdown::SEASON_ENDED {
        return countdown.event.yellow().to_string();
    }
    let unit = if countdown.days == 1 { "day" } else { "days" };
    format!(
        "{} {} until {}",
        countdown.days.to_string().bold(),
        unit,
        countdown.event.cyan()
    )
}

pub fn print_plant_list(plants: &[&Plant]) {
    if plants.is_empty() {
        println!("No plants found.");
        return;
    }

    for plant in plants {
        let days = plant
            .harvest_days()
            .map(|d| format!("{}d", d))
            .unwrap_or_default();
        println!(
            "{:>3} {:<24} [{}] {}",
            plant.id.to_string().dimmed(),
            plant.name,
            format_category(plant.category),
            days.dimmed()
        );
    }
}
