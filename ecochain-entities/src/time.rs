use std::{fmt, ops};

use time::{format_description::well_known::Rfc3339, OffsetDateTime};

pub use time::Duration;

/// A UTC timestamp with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_milliseconds(milliseconds: i64) -> Self {
        Self(milliseconds)
    }

    pub const fn as_milliseconds(self) -> i64 {
        self.0
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl ops::Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        Self(self.0 + duration.whole_milliseconds() as i64)
    }
}

impl ops::Sub<Timestamp> for Timestamp {
    type Output = Duration;

    fn sub(self, other: Timestamp) -> Duration {
        Duration::milliseconds(self.0 - other.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let formatted = OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.0) * 1_000_000)
            .ok()
            .and_then(|dt| dt.format(&Rfc3339).ok());
        match formatted {
            Some(dt) => f.write_str(&dt),
            None => write!(f, "{}ms", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_from_into_milliseconds() {
        let t1 = Timestamp::now();
        let ms = t1.as_milliseconds();
        let t2 = Timestamp::from_milliseconds(ms);
        assert_eq!(t1, t2);
    }

    #[test]
    fn add_duration() {
        let t = Timestamp::from_milliseconds(1_000);
        assert_eq!(
            Timestamp::from_milliseconds(3_500),
            t + Duration::milliseconds(2_500)
        );
        assert_eq!(t + Duration::hours(24) - t, Duration::hours(24));
    }
}
