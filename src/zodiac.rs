//! Sun-sign classification and trait descriptions
//!
//! Implements the Western tropical calendar-day heuristic: every valid
//! (month, day) pair maps to exactly one of the twelve signs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The twelve signs of the Western tropical zodiac
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// All twelve signs in calendar order starting at Aries
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Classify a (month, day) pair into its sun sign.
    ///
    /// Total over all valid calendar dates. Each range is inclusive on
    /// both ends; wrap-around ranges (Capricorn) are two half-conditions.
    /// Pisces (Feb 19 to Mar 20) is the fall-through arm, reachable only
    /// for those dates once input is a real calendar date.
    #[must_use]
    pub fn from_month_day(month: u32, day: u32) -> Self {
        match (month, day) {
            (3, 21..) | (4, ..=19) => Self::Aries,
            (4, 20..) | (5, ..=20) => Self::Taurus,
            (5, 21..) | (6, ..=20) => Self::Gemini,
            (6, 21..) | (7, ..=22) => Self::Cancer,
            (7, 23..) | (8, ..=22) => Self::Leo,
            (8, 23..) | (9, ..=22) => Self::Virgo,
            (9, 23..) | (10, ..=22) => Self::Libra,
            (10, 23..) | (11, ..=21) => Self::Scorpio,
            (11, 22..) | (12, ..=21) => Self::Sagittarius,
            (12, 22..) | (1, ..=19) => Self::Capricorn,
            (1, 20..) | (2, ..=18) => Self::Aquarius,
            _ => Self::Pisces,
        }
    }

    /// Label as displayed to the user
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// One-sentence core trait description for the sign
    #[must_use]
    pub fn trait_description(self) -> &'static str {
        match self {
            Self::Aries => "Bold, action-oriented, competitive; great for kickstarting projects.",
            Self::Taurus => "Grounded, steady, sensual; values comfort, persistence, reliability.",
            Self::Gemini => "Curious, social, adaptable; excels at communication and learning.",
            Self::Cancer => "Nurturing, intuitive, protective; home and family are anchors.",
            Self::Leo => "Confident, expressive, generous; thrives when leading and creating.",
            Self::Virgo => "Detail-oriented, practical, service-driven; sharp at refining systems.",
            Self::Libra => "Diplomatic, harmonious, aesthetic; seeks balance and fair outcomes.",
            Self::Scorpio => "Intense, strategic, transformational; powerful focus and resilience.",
            Self::Sagittarius => {
                "Adventurous, philosophical, optimistic; loves growth and travel."
            }
            Self::Capricorn => "Ambitious, disciplined, patient; builds long-term achievements.",
            Self::Aquarius => {
                "Inventive, independent, humanitarian; forward-thinking and original."
            }
            Self::Pisces => "Empathic, imaginative, healing; creative and spiritually attuned.",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
