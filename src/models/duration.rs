//! Signed hours:minutes duration.
//!
//! This module contains the [`Duration`] type used for every time value the
//! tracker reads from a timesheet: period totals, today's hours, expected
//! hours and the resulting overtime.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{TrackerError, TrackerResult};

/// A signed clock duration made of whole hours and minutes.
///
/// Hours may exceed 24. Minutes are always kept in the range 0–59 and both
/// magnitude fields are non-negative; the sign is carried by a separate flag.
/// Values are immutable: arithmetic always returns a new `Duration`.
///
/// # Example
///
/// ```
/// use overtime_tracker::models::Duration;
///
/// let worked = Duration::parse("08:15").unwrap();
/// assert_eq!(worked.to_string(), "+08:15");
///
/// let total = Duration::new(1, 50) + Duration::new(0, 20);
/// assert_eq!(total.to_string(), "+02:10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Duration {
    hours: u64,
    minutes: u32,
    positive: bool,
}

impl Duration {
    /// A positive zero duration.
    pub const ZERO: Duration = Duration {
        hours: 0,
        minutes: 0,
        positive: true,
    };

    /// Creates a positive duration.
    ///
    /// Minutes of 60 or more are carried into the hours field.
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self::with_sign(hours, minutes, true)
    }

    /// Creates a duration with an explicit sign.
    ///
    /// Minutes of 60 or more are carried into the hours field.
    pub fn with_sign(hours: u32, minutes: u32, positive: bool) -> Self {
        Self {
            hours: u64::from(hours) + u64::from(minutes / 60),
            minutes: minutes % 60,
            positive,
        }
    }

    /// Parses an unsigned `H:MM` or `HH:MM` string into a positive duration.
    ///
    /// Surrounding whitespace is ignored. The text must contain exactly two
    /// colon-separated fields of ASCII digits, and the minutes field must be
    /// below 60.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::MalformedDuration`] when the text does not
    /// have that shape.
    ///
    /// # Example
    ///
    /// ```
    /// use overtime_tracker::models::Duration;
    ///
    /// assert_eq!(Duration::parse("8:05").unwrap(), Duration::new(8, 5));
    /// assert_eq!(Duration::parse("112:45").unwrap().to_string(), "+112:45");
    /// assert!(Duration::parse("8h05").is_err());
    /// assert!(Duration::parse("08:75").is_err());
    /// ```
    pub fn parse(text: &str) -> TrackerResult<Self> {
        let malformed = |message: &str| TrackerError::MalformedDuration {
            input: text.to_string(),
            message: message.to_string(),
        };

        let (hours, minutes) = text
            .trim()
            .split_once(':')
            .ok_or_else(|| malformed("expected HH:MM"))?;

        if minutes.contains(':') {
            return Err(malformed("expected exactly two colon-separated fields"));
        }

        let hours = parse_field(hours, "hours").map_err(|m| malformed(&m))?;
        let minutes = parse_field(minutes, "minutes").map_err(|m| malformed(&m))?;

        if minutes >= 60 {
            return Err(malformed("minutes must be below 60"));
        }

        Ok(Self::new(hours, minutes))
    }

    /// Subtracts `other` from `self` by magnitude.
    ///
    /// Both operands are flattened to total minutes and their signs are
    /// ignored. The result holds the absolute difference and is positive when
    /// `self` is at least as long as `other`, negative otherwise, so
    /// `a.subtract(&b)` and `b.subtract(&a)` differ only in sign.
    ///
    /// # Example
    ///
    /// ```
    /// use overtime_tracker::models::Duration;
    ///
    /// let long = Duration::new(3, 0);
    /// let short = Duration::new(1, 30);
    /// assert_eq!(long.subtract(&short).to_string(), "+01:30");
    /// assert_eq!(short.subtract(&long).to_string(), "-01:30");
    /// ```
    pub fn subtract(&self, other: &Duration) -> Duration {
        let this_total = self.total_minutes();
        let other_total = other.total_minutes();
        let positive = this_total >= other_total;
        let difference = this_total.abs_diff(other_total);

        Self::from_total_minutes(difference, positive)
    }

    /// Returns `true` when both hours and minutes are zero, whatever the sign.
    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0
    }

    /// Returns the hours field.
    pub fn hours(&self) -> u64 {
        self.hours
    }

    /// Returns the minutes field (0–59).
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Returns the stored sign flag.
    pub fn is_positive(&self) -> bool {
        self.positive
    }

    /// Returns the unsigned magnitude in minutes.
    pub fn total_minutes(&self) -> u64 {
        self.hours * 60 + u64::from(self.minutes)
    }

    /// Returns the duration in minutes with its sign applied.
    pub fn signed_minutes(&self) -> i64 {
        let magnitude = i64::try_from(self.total_minutes()).unwrap_or(i64::MAX);
        if self.positive { magnitude } else { -magnitude }
    }

    /// Returns the signed duration as decimal hours, rounded to two places.
    ///
    /// # Example
    ///
    /// ```
    /// use overtime_tracker::models::Duration;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let overtime = Duration::with_sign(1, 30, false);
    /// assert_eq!(overtime.to_decimal_hours(), Decimal::from_str("-1.5").unwrap());
    /// ```
    pub fn to_decimal_hours(&self) -> Decimal {
        (Decimal::from(self.signed_minutes()) / Decimal::from(60)).round_dp(2)
    }

    /// Minute-wise sum with carry into hours, or `None` if the hours
    /// field would overflow. The result is always positive.
    pub fn checked_add(&self, other: &Duration) -> Option<Duration> {
        let total_minutes = self.minutes + other.minutes;
        let hours = self
            .hours
            .checked_add(other.hours)?
            .checked_add(u64::from(total_minutes / 60))?;

        Some(Duration {
            hours,
            minutes: total_minutes % 60,
            positive: true,
        })
    }

    fn from_total_minutes(total: u64, positive: bool) -> Self {
        Self {
            hours: total / 60,
            minutes: (total % 60) as u32,
            positive,
        }
    }
}

fn parse_field(field: &str, name: &str) -> Result<u32, String> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("{} must be digits", name));
    }
    field.parse().map_err(|_| format!("{} out of range", name))
}

impl Default for Duration {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Minute-wise sum with carry into hours. The result is always positive.
///
/// Hours are held in 64 bits, so sums of parsed durations never overflow.
/// Use [`Duration::checked_add`] when folding an unbounded number of values.
impl Add for Duration {
    type Output = Duration;

    fn add(self, other: Duration) -> Duration {
        let total_minutes = self.minutes + other.minutes;

        Duration {
            hours: self.hours + other.hours + u64::from(total_minutes / 60),
            minutes: total_minutes % 60,
            positive: true,
        }
    }
}

/// Same as [`Duration::subtract`].
impl Sub for Duration {
    type Output = Duration;

    fn sub(self, other: Duration) -> Duration {
        self.subtract(&other)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.positive { '+' } else { '-' };
        write!(f, "{}{:02}:{:02}", sign, self.hours, self.minutes)
    }
}

/// Parses `HH:MM` with an optional leading `+` or `-`.
impl FromStr for Duration {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (positive, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (false, rest),
            None => (true, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let unsigned = Duration::parse(rest).map_err(|_| TrackerError::MalformedDuration {
            input: s.to_string(),
            message: "expected [+|-]HH:MM".to_string(),
        })?;

        Ok(Duration {
            positive,
            ..unsigned
        })
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
