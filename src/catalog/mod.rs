//! Reference data for the HydroShare NWM API: which archives, configurations,
//! geometries and variables exist, and which dates each archive covers.

pub mod clock;

use crate::types::archive::{Archive, DateWindow};
use crate::types::configuration::Configuration;
use crate::types::geometry::{Geometry, Variable};
use chrono::{Days, NaiveDate};
use clock::{Clock, SystemClock};
use std::sync::Arc;

/// Days covered by the rolling archive before today.
pub const ROLLING_LOOKBACK_DAYS: u32 = 24;

/// Lookback of the earlier rolling archive, which kept one week of data.
pub const LEGACY_ROLLING_LOOKBACK_DAYS: u32 = 7;

/// Read-only lookup of valid request values.
///
/// Everything except the rolling archive window is static. The rolling
/// window is recomputed from the injected [`Clock`] on every call to
/// [`Catalog::date_window`].
#[derive(Debug, Clone)]
pub struct Catalog {
    clock: Arc<dyn Clock>,
    rolling_lookback_days: u32,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), ROLLING_LOOKBACK_DAYS)
    }
}

impl Catalog {
    pub fn new(clock: Arc<dyn Clock>, rolling_lookback_days: u32) -> Self {
        Self {
            clock,
            rolling_lookback_days,
        }
    }

    pub fn is_valid_archive(&self, name: &str) -> bool {
        Archive::from_code(name).is_some()
    }

    pub fn is_valid_configuration(&self, name: &str) -> bool {
        Configuration::from_code(name).is_some()
    }

    pub fn is_valid_geometry(&self, name: &str) -> bool {
        Geometry::from_code(name).is_some()
    }

    pub fn valid_variables(&self, geometry: Geometry) -> &'static [Variable] {
        geometry.variables()
    }

    /// The inclusive range of start dates HydroShare serves for `archive`.
    ///
    /// A rolling lookback reaching past the earliest representable date is
    /// clamped to [`NaiveDate::MIN`].
    pub fn date_window(&self, archive: Archive) -> DateWindow {
        match archive.fixed_window() {
            Some(window) => window,
            None => {
                let today = self.clock.today();
                let start = today
                    .checked_sub_days(Days::new(u64::from(self.rolling_lookback_days)))
                    .unwrap_or(NaiveDate::MIN);
                DateWindow::new(start, today)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::clock::FixedClock;
    use super::*;

    fn catalog_at(date: NaiveDate, lookback: u32) -> Catalog {
        Catalog::new(Arc::new(FixedClock(date)), lookback)
    }

    #[test]
    fn test_membership_uses_wire_codes() {
        let catalog = Catalog::default();
        assert!(catalog.is_valid_archive("rolling"));
        assert!(!catalog.is_valid_archive("40-Day Rolling Window"));
        assert!(catalog.is_valid_configuration("analysis_assim"));
        assert!(!catalog.is_valid_configuration("wrong_config"));
        assert!(catalog.is_valid_geometry("channel_rt"));
        assert!(!catalog.is_valid_geometry("channel"));
    }

    #[test]
    fn test_rolling_window_follows_clock() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 30).unwrap();
        let window = catalog_at(today, ROLLING_LOOKBACK_DAYS).date_window(Archive::Rolling);
        assert_eq!(window.end, today);
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());

        let legacy =
            catalog_at(today, LEGACY_ROLLING_LOOKBACK_DAYS).date_window(Archive::Rolling);
        assert_eq!(legacy.start, NaiveDate::from_ymd_opt(2024, 3, 23).unwrap());
    }

    #[test]
    fn test_storm_windows_ignore_clock() {
        let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let window = catalog_at(today, ROLLING_LOOKBACK_DAYS).date_window(Archive::Florence);
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2018, 9, 1).unwrap());
        assert_eq!(window.end, NaiveDate::from_ymd_opt(2019, 10, 19).unwrap());
    }

    #[test]
    fn test_rolling_window_lookback_extremes() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 30).unwrap();

        let same_day = catalog_at(today, 0).date_window(Archive::Rolling);
        assert_eq!(same_day, DateWindow::new(today, today));
        assert!(same_day.contains(today));

        let huge = catalog_at(today, 1_000_000_000).date_window(Archive::Rolling);
        assert_eq!(huge.start, NaiveDate::MIN);
        assert_eq!(huge.end, today);

        let max = catalog_at(today, u32::MAX).date_window(Archive::Rolling);
        assert_eq!(max.start, NaiveDate::MIN);
        assert!(max.start <= max.end);
    }
}
