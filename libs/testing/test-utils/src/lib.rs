//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with migrations applied
//! - `TestDataBuilder`: deterministic titles and dates derived from the test name
//! - `assertions`: small assertion helpers
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let title = builder.title("standup");
//!     let start = builder.at(0, 9, 0);
//! }
//! ```

use chrono::{Days, NaiveDate, NaiveDateTime};

mod postgres;

pub use postgres::TestDatabase;

/// Deterministic test data keyed by a seed.
///
/// Each test gets its own title namespace and its own calendar day, so rows
/// written by different tests never overlap in a date-range query.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from a hash of the test name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_event");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// A title unique to this builder, e.g. `"Test standup 1234"`.
    pub fn title(&self, suffix: &str) -> String {
        format!("Test {} {}", suffix, self.seed % 100_000)
    }

    /// The builder's day: somewhere in 2030, far from seeded demo data.
    pub fn base_date(&self) -> NaiveDate {
        let start = NaiveDate::from_ymd_opt(2030, 1, 1).expect("valid date");
        start + Days::new(self.seed % 360)
    }

    /// A timestamp `day_offset` days after [`base_date`](Self::base_date).
    pub fn at(&self, day_offset: u64, hour: u32, minute: u32) -> NaiveDateTime {
        (self.base_date() + Days::new(day_offset))
            .and_hms_opt(hour, minute, 0)
            .expect("valid time of day")
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that `values` never decrease.
    pub fn assert_non_decreasing<T: PartialOrd + std::fmt::Debug>(values: &[T], context: &str) {
        for pair in values.windows(2) {
            assert!(
                pair[0] <= pair[1],
                "{}: {:?} comes before {:?}",
                context,
                pair[0],
                pair[1]
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let a = TestDataBuilder::from_test_name("my_test");
        let b = TestDataBuilder::from_test_name("my_test");

        assert_eq!(a.title("x"), b.title("x"));
        assert_eq!(a.base_date(), b.base_date());
    }

    #[test]
    fn test_data_builder_dates_stay_in_2030() {
        for seed in [0, 1, 359, 360, u64::MAX] {
            let date = TestDataBuilder::new(seed).base_date();
            assert_eq!(chrono::Datelike::year(&date), 2030);
        }
    }

    #[test]
    fn test_at_builds_time_of_day() {
        let builder = TestDataBuilder::new(0);
        assert_eq!(builder.at(1, 9, 30).to_string(), "2030-01-02 09:30:00");
    }

    #[test]
    #[should_panic(expected = "comes before")]
    fn test_assert_non_decreasing_panics_on_disorder() {
        assertions::assert_non_decreasing(&[1, 3, 2], "numbers");
    }
}
