//! "What to do this month": indoor starts, outdoor planting, expected
//! harvests, the month's tip, and the frost countdown.

use crate::calendar::{Clock, FrostCountdown, FrostDates, frost_countdown, month_name};
use crate::catalog::CatalogEntry;
use crate::error::Result;
use crate::model::Plant;
use crate::validation;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;

/// Lookup of the advisory tip for a month.
pub trait TipSource {
    fn tip_for(&self, month: u32) -> Option<&str>;
}

impl TipSource for BTreeMap<u32, String> {
    fn tip_for(&self, month: u32) -> Option<&str> {
        self.get(&month).map(String::as_str)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Advisory {
    pub month: u32,
    pub month_name: String,
    pub tip: String,
    pub frost_countdown: FrostCountdown,
    pub start_indoors: Vec<Plant>,
    pub plant_outside: Vec<Plant>,
    pub harvest: Vec<Plant>,
}

/// Build the advisory for `month` over `entries`, in catalog order.
///
/// The frost countdown is taken from `now`, independently of `month`.
pub fn advise(
    entries: &[CatalogEntry],
    month: u32,
    tips: &dyn TipSource,
    now: NaiveDateTime,
    frost: &FrostDates,
) -> Result<Advisory> {
    let month = validation::validate_month(month)?;

    let advisory = Advisory {
        month,
        month_name: month_name(month).unwrap_or_default().to_string(),
        tip: tips.tip_for(month).unwrap_or_default().to_string(),
        frost_countdown: frost_countdown(now, frost),
        start_indoors: select(entries, |e| e.windows.starts_indoors_in(month)),
        plant_outside: select(entries, |e| e.windows.goes_outside_in(month)),
        harvest: select(entries, |e| e.windows.harvests_in(month)),
    };

    tracing::debug!(
        month,
        start_indoors = advisory.start_indoors.len(),
        plant_outside = advisory.plant_outside.len(),
        harvest = advisory.harvest.len(),
        "Built monthly advisory"
    );
    Ok(advisory)
}

fn select(entries: &[CatalogEntry], keep: impl Fn(&CatalogEntry) -> bool) -> Vec<Plant> {
    entries
        .iter()
        .filter(|e| keep(*e))
        .map(|e| e.plant.clone())
        .collect()
}

/// Binds a catalog, tip source, clock and frost dates together so callers
/// only choose the month.
pub struct MonthlyAdvisor<'a> {
    entries: &'a [CatalogEntry],
    tips: &'a dyn TipSource,
    clock: &'a dyn Clock,
    frost: FrostDates,
}

impl<'a> MonthlyAdvisor<'a> {
    pub fn new(
        entries: &'a [CatalogEntry],
        tips: &'a dyn TipSource,
        clock: &'a dyn Clock,
        frost: FrostDates,
    ) -> Self {
        Self {
            entries,
            tips,
            clock,
            frost,
        }
    }

    /// Advisory for `month`, or the clock's current month when `None`.
    pub fn advise(&self, month: Option<u32>) -> Result<Advisory> {
        let month = month.unwrap_or_else(|| self.clock.current_month());
        advise(
            self.entries,
            month,
            self.tips,
            self.clock.now(),
            &self.frost,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Direction, FixedClock};
    use crate::catalog::Catalog;
    use crate::error::GardenError;
    use crate::model::{Category, Difficulty};
    use chrono::NaiveDate;

    fn clock(year: i32, month: u32, day: u32) -> FixedClock {
        FixedClock::on(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    fn names(plants: &[Plant]) -> Vec<&str> {
        plants.iter().map(|p| p.name.as_str()).collect()
    }

    fn small_catalog() -> Catalog {
        let plants = vec![
            Plant::new("Tomato", Category::Vegetable, Difficulty::Moderate)
                .with_days_to_harvest(75)
                .with_start_indoors("Mar 22 - Apr 5")
                .with_transplant("May 31 - Jun 7"),
            Plant::new("Lettuce", Category::Vegetable, Difficulty::Easy)
                .with_days_to_harvest(45)
                .with_start_indoors("Mar 22 - Apr 5")
                .with_direct_sow("Apr 19 - Apr 26"),
            Plant::new("Garlic", Category::Vegetable, Difficulty::Easy)
                .with_days_to_harvest(240)
                .with_direct_sow("Oct 1 - Oct 15"),
            Plant::new("Dahlia", Category::Flower, Difficulty::Moderate)
                .with_transplant("May 31 - Jun 7"),
            Plant::new("Winter Rye", Category::Herb, Difficulty::Easy)
                .with_transplant("Jan 10")
                .with_direct_sow("Nov 15 - Feb 1"),
        ];
        let tips = vec![crate::catalog::MonthlyTip {
            month: 4,
            tip: "Direct sow peas.".to_string(),
        }];
        Catalog::new(plants, tips).unwrap()
    }

    #[test]
    fn test_april_lists() {
        let catalog = small_catalog();
        let advisory = advise(
            catalog.entries(),
            4,
            &catalog,
            clock(2025, 4, 10).now(),
            &FrostDates::default(),
        )
        .unwrap();

        assert_eq!(advisory.month, 4);
        assert_eq!(advisory.month_name, "April");
        assert_eq!(advisory.tip, "Direct sow peas.");
        assert_eq!(names(&advisory.start_indoors), vec!["Lettuce", "Tomato"]);
        assert_eq!(names(&advisory.plant_outside), vec!["Lettuce"]);
        assert!(advisory.harvest.is_empty());
    }

    #[test]
    fn test_plant_outside_lists_each_plant_once() {
        let catalog = small_catalog();
        // Winter Rye matches January through both its transplant date and
        // its wrapping Nov-Feb direct sow window
        let january = advise(
            catalog.entries(),
            1,
            &catalog,
            clock(2025, 1, 5).now(),
            &FrostDates::default(),
        )
        .unwrap();
        assert_eq!(names(&january.plant_outside), vec!["Winter Rye"]);

        let june = advise(
            catalog.entries(),
            6,
            &catalog,
            clock(2025, 6, 5).now(),
            &FrostDates::default(),
        )
        .unwrap();
        assert_eq!(names(&june.plant_outside), vec!["Dahlia", "Tomato"]);
    }

    #[test]
    fn test_harvest_projection() {
        let catalog = small_catalog();
        let harvest_in = |month| {
            let advisory = advise(
                catalog.entries(),
                month,
                &catalog,
                clock(2025, 1, 1).now(),
                &FrostDates::default(),
            )
            .unwrap();
            advisory
                .harvest
                .iter()
                .map(|p| p.name.clone())
                .collect::<Vec<_>>()
        };

        // Lettuce: direct sow Apr + 1 month
        assert_eq!(harvest_in(5), vec!["Lettuce"]);
        // Garlic: Oct + 8 months wraps to June
        assert_eq!(harvest_in(6), vec!["Garlic"]);
        // Tomato: transplant May-Jun + 2 months
        assert_eq!(harvest_in(7), vec!["Tomato"]);
        assert_eq!(harvest_in(8), vec!["Tomato"]);
        // Dahlia has no days to harvest
        assert!((1..=12).all(|m| !harvest_in(m).contains(&"Dahlia".to_string())));
    }

    #[test]
    fn test_missing_tip_is_empty() {
        let catalog = small_catalog();
        let advisory = advise(
            catalog.entries(),
            9,
            &catalog,
            clock(2025, 9, 1).now(),
            &FrostDates::default(),
        )
        .unwrap();
        assert_eq!(advisory.tip, "");
    }

    #[test]
    fn test_month_out_of_range_rejected() {
        let catalog = small_catalog();
        for month in [0, 13] {
            let err = advise(
                catalog.entries(),
                month,
                &catalog,
                clock(2025, 1, 1).now(),
                &FrostDates::default(),
            )
            .unwrap_err();
            assert!(matches!(err, GardenError::Validation(_)));
        }
    }

    #[test]
    fn test_advisor_defaults_to_clock_month() {
        let catalog = small_catalog();
        let clock = clock(2025, 4, 20);
        let advisor = MonthlyAdvisor::new(
            catalog.entries(),
            &catalog,
            &clock,
            FrostDates::default(),
        );

        let advisory = advisor.advise(None).unwrap();
        assert_eq!(advisory.month, 4);
        assert_eq!(advisory.frost_countdown.event, "Last Spring Frost (May 17)");
        assert_eq!(advisory.frost_countdown.days, 27);

        // Frost countdown follows the clock, not the requested month
        let october = advisor.advise(Some(10)).unwrap();
        assert_eq!(october.month_name, "October");
        assert_eq!(october.frost_countdown.direction, Direction::Until);
    }

    #[test]
    fn test_seeded_april_scenario() {
        let catalog = Catalog::seeded().unwrap();
        let clock = clock(2025, 4, 1);
        let advisor = MonthlyAdvisor::new(
            catalog.entries(),
            &catalog,
            &clock,
            FrostDates::default(),
        );
        let advisory = advisor.advise(Some(4)).unwrap();

        assert!(names(&advisory.start_indoors).contains(&"Tomato"));
        assert!(names(&advisory.plant_outside).contains(&"Lettuce"));
        assert!(names(&advisory.plant_outside).contains(&"Pea"));
        assert!(advisory.tip.starts_with("Direct sow peas"));
    }

    #[test]
    fn test_json_shape() {
        let catalog = small_catalog();
        let advisory = advise(
            catalog.entries(),
            4,
            &catalog,
            clock(2025, 9, 23).now(),
            &FrostDates::default(),
        )
        .unwrap();
        let json = serde_json::to_value(&advisory).unwrap();

        assert_eq!(json["monthName"], "April");
        assert_eq!(json["frostCountdown"]["direction"], "past");
        assert_eq!(json["frostCountdown"]["days"], 0);
        assert!(json["startIndoors"].is_array());
        assert!(json["plantOutside"][0]["direct_sow_date"].is_string());
    }
}
