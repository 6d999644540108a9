//! Coarse harvest projection.
//!
//! Every month counts as 30 days, so projections are only good to the
//! month. The projected month wraps into the next year at most once.

use super::window::MonthRange;

pub const DAYS_PER_MONTH: u32 = 30;

/// Month in which a crop sown in `sow_month` is ready after `days`.
///
/// The result is only guaranteed to be a calendar month when
/// `days_to_harvest` is at most a year, which catalog validation enforces.
pub fn harvest_month(sow_month: u32, days: u32) -> u32 {
    let month = sow_month + days / DAYS_PER_MONTH;
    if month > 12 { month - 12 } else { month }
}

/// Project a sow window forward by `days` to get the harvest window.
///
/// Each endpoint is projected on its own, so a sow window that wraps or
/// a projection that crosses December keeps the same wrap convention as
/// [`MonthRange::contains`]. Returns `None` when the projection falls
/// outside the calendar.
pub fn projected_harvest(sow: MonthRange, days: u32) -> Option<MonthRange> {
    MonthRange::new(
        harvest_month(sow.start(), days),
        harvest_month(sow.end(), days),
    )
    .ok()
}

/// The sow event that starts the harvest clock: direct sowing when the
/// plant has one, otherwise transplanting. Indoor starts never count.
pub fn sow_window(
    direct_sow: Option<MonthRange>,
    transplant: Option<MonthRange>,
) -> Option<MonthRange> {
    direct_sow.or(transplant)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: u32, end: u32) -> MonthRange {
        MonthRange::new(start, end).unwrap()
    }

    #[test]
    fn test_harvest_month_same_year() {
        assert_eq!(harvest_month(6, 75), 8);
        assert_eq!(harvest_month(4, 25), 4);
        assert_eq!(harvest_month(5, 29), 5);
        assert_eq!(harvest_month(5, 30), 6);
    }

    #[test]
    fn test_harvest_month_wraps_once() {
        // Garlic: sown in October, 240 days
        assert_eq!(harvest_month(10, 240), 6);
        assert_eq!(harvest_month(12, 30), 1);
        assert_eq!(harvest_month(4, 365), 4);
    }

    #[test]
    fn test_projected_harvest_single_month() {
        assert_eq!(projected_harvest(range(6, 6), 75), Some(range(8, 8)));
        assert_eq!(projected_harvest(range(10, 10), 240), Some(range(6, 6)));
    }

    #[test]
    fn test_projected_harvest_crossing_year_end() {
        let harvest = projected_harvest(range(9, 11), 60).unwrap();
        assert_eq!((harvest.start(), harvest.end()), (11, 1));
        assert!(harvest.wraps());
        assert!(harvest.contains(12));
        assert!(!harvest.contains(2));
    }

    #[test]
    fn test_projected_harvest_beyond_single_wrap() {
        assert_eq!(projected_harvest(range(12, 12), 400), None);
    }

    #[test]
    fn test_sow_window_prefers_direct_sow() {
        let direct = Some(range(4, 5));
        let transplant = Some(range(5, 6));
        assert_eq!(sow_window(direct, transplant), direct);
        assert_eq!(sow_window(None, transplant), transplant);
        assert_eq!(sow_window(None, None), None);
    }
}
