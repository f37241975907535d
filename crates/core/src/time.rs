use chrono::{DateTime, Duration, Utc};

/// Where session timestamps come from.
///
/// Play-throughs are stamped twice: when they start and when the final
/// answer locks. `Fixed` keeps both stamps reproducible in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(at) => *at,
        }
    }
}

/// Seconds after the Unix epoch of the instant used by fixed test clocks.
pub const FIXED_INSTANT_SECS: i64 = 1_700_000_000;

/// The fixed test instant, 2023-11-14T22:13:20Z.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH + Duration::seconds(FIXED_INSTANT_SECS)
}

#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_never_moves() {
        let clock = fixed_clock();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().to_rfc3339(), "2023-11-14T22:13:20+00:00");
    }

    #[test]
    fn system_clock_is_not_fixed() {
        assert_ne!(Clock::system(), fixed_clock());
    }
}
