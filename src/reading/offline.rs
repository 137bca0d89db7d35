//! Canned guidance used when no completion endpoint is available
//!
//! Deterministic and total: every sign maps to exactly one tip via
//! fixed group membership.

use crate::zodiac::ZodiacSign;

/// Actionable focus tip for a sign, chosen by element group
fn focus_tip(sign: ZodiacSign) -> &'static str {
    use ZodiacSign::{
        Aquarius, Aries, Cancer, Capricorn, Gemini, Leo, Libra, Pisces, Sagittarius, Scorpio,
        Taurus, Virgo,
    };
    match sign {
        Capricorn | Virgo | Taurus => "Build small rituals that compound over weeks.",
        Gemini | Libra | Aquarius => "Say yes to a new idea or conversation today.",
        Cancer | Scorpio | Pisces => "Lead with compassion, then plan the steps.",
        Aries | Leo | Sagittarius => "Take a bold first step, then refine.",
    }
}

/// Offline reading for a sign, wrapped in the offline-mode prefix
#[must_use]
pub fn offline_reading(sign: ZodiacSign) -> String {
    format!(
        "*Offline mode:* Focus for {sign}: **{tip}**",
        tip = focus_tip(sign)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_membership() {
        assert!(offline_reading(ZodiacSign::Capricorn).contains("Build small rituals"));
        assert!(offline_reading(ZodiacSign::Gemini).contains("Say yes"));
        assert!(offline_reading(ZodiacSign::Cancer).contains("Lead with compassion"));
        assert!(offline_reading(ZodiacSign::Aries).contains("Take a bold first step"));
    }

    #[test]
    fn test_total_over_all_signs() {
        for sign in ZodiacSign::ALL {
            let reading = offline_reading(sign);
            assert!(reading.starts_with("*Offline mode:*"));
            assert!(reading.contains(sign.name()));
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            offline_reading(ZodiacSign::Virgo),
            offline_reading(ZodiacSign::Virgo)
        );
    }
}
