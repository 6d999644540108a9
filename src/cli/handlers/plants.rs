use crate::catalog::PlantFilter;
use crate::cli::commands::CategoryArg;
use anyhow::Result;

use super::CommandContext;
use super::utils::print_plant_list;

/// Parameters for the plants listing
pub struct PlantsParams {
    pub category: Option<CategoryArg>,
    pub search: Option<String>,
    pub json: bool,
}

pub fn handle_plants(ctx: &CommandContext, params: PlantsParams) -> Result<()> {
    let filter = PlantFilter {
        category: params.category.map(Into::into),
        search: params.search,
    };
    let plants = ctx.catalog.search(&filter);

    if params.json {
        println!("{}", serde_json::to_string_pretty(&plants)?);
    } else {
        print_plant_list(&plants);
    }
    Ok(())
}
