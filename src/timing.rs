//! Birth-time profiling
//!
//! Maps an optional clock time onto one of four coarse day bands and a
//! fixed descriptive sentence.

use chrono::{NaiveTime, Timelike};

/// Neutral timing sentence used when no birth time was given
const DEFAULT_PROFILE: &str = "Balanced timing—trust your natural rhythm.";

/// Coarse band of the day a birth time falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthTimeBand {
    /// 05:00-11:59
    Morning,
    /// 12:00-16:59
    Day,
    /// 17:00-20:59
    Evening,
    /// 21:00-04:59, wrapping midnight
    Night,
}

impl BirthTimeBand {
    /// Classify a clock time by minutes since midnight.
    ///
    /// Bands are half-open; a boundary minute belongs to the later band.
    #[must_use]
    pub fn classify(time: NaiveTime) -> Self {
        let minutes = time.hour() * 60 + time.minute();
        match minutes {
            300..=719 => Self::Morning,
            720..=1019 => Self::Day,
            1020..=1259 => Self::Evening,
            _ => Self::Night,
        }
    }

    /// Fixed descriptive sentence for the band
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Morning => "Morning-born: initiator energy & clear starts.",
            Self::Day => "Day-born: steady momentum & consistent build.",
            Self::Evening => "Evening-born: reflective strength & social intuition.",
            Self::Night => "Night-born: deep intuition & creative focus when it’s quiet.",
        }
    }
}

/// Timing sentence for an optional birth time.
///
/// Returns the neutral default when the time is absent.
#[must_use]
pub fn time_profile(time: Option<NaiveTime>) -> &'static str {
    match time {
        Some(t) => BirthTimeBand::classify(t).description(),
        None => DEFAULT_PROFILE,
    }
}
