use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current instant.
///
/// Every use case that reads "now" or "today" takes a clock instead of calling
/// `Utc::now()` directly, so that day boundaries can be pinned in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar day (UTC).
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn should_derive_today_from_now() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 23, 59, 59).unwrap());

        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }
}
