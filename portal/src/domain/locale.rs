//! Date/time locale adapter shared by every page.
//!
//! Pages never format timestamps themselves; they ask the locale carried by
//! the [`AppContext`](crate::context::AppContext).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

/// Supported display locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DateTimeLocale {
    /// British English, day first, 24-hour clock.
    #[default]
    EnGb,
    /// American English, month first, 12-hour clock.
    EnUs,
    /// Indian English, day first with dashes, 12-hour clock.
    EnIn,
}

/// Error returned when a locale tag is not supported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{tag}'; expected one of en-GB, en-US, en-IN")]
pub struct UnsupportedLocale {
    tag: String,
}

impl DateTimeLocale {
    /// Every supported locale, in display order.
    pub const ALL: [Self; 3] = [Self::EnGb, Self::EnUs, Self::EnIn];

    /// BCP 47 tag for this locale.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EnGb => "en-GB",
            Self::EnUs => "en-US",
            Self::EnIn => "en-IN",
        }
    }

    const fn date_pattern(self) -> &'static str {
        match self {
            Self::EnGb => "%d/%m/%Y",
            Self::EnUs => "%m/%d/%Y",
            Self::EnIn => "%d-%m-%Y",
        }
    }

    const fn time_pattern(self) -> &'static str {
        match self {
            Self::EnGb => "%H:%M",
            Self::EnUs | Self::EnIn => "%-I:%M %p",
        }
    }

    /// Format the calendar date of `instant`.
    pub fn format_date(self, instant: &DateTime<Utc>) -> String {
        instant.format(self.date_pattern()).to_string()
    }

    /// Format `instant` as date followed by time of day.
    pub fn format_date_time(self, instant: &DateTime<Utc>) -> String {
        format!(
            "{} {}",
            self.format_date(instant),
            instant.format(self.time_pattern())
        )
    }
}

impl fmt::Display for DateTimeLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DateTimeLocale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(&normalised))
            .ok_or_else(|| UnsupportedLocale { tag: s.to_owned() })
    }
}
