//! Reading composition
//!
//! The templated overview shown for every submission, plus the
//! AI-backed ([`remote`]) and canned ([`offline`]) detailed readings.

pub mod offline;
pub mod remote;

pub use offline::offline_reading;
pub use remote::RemoteReadingClient;

use crate::models::BirthInput;
use crate::timing::time_profile;
use crate::zodiac::ZodiacSign;

/// Compose the templated overview reading for a validated submission.
///
/// Pure string assembly: identical inputs always produce identical
/// output. The displayed first name is the first whitespace-delimited
/// token of the name, or "You" when the name is empty; an empty
/// birthplace falls back to "your roots".
#[must_use]
pub fn compose_overview(input: &BirthInput, sign: ZodiacSign) -> String {
    let first = input.name.split_whitespace().next().unwrap_or("You");
    let traits = sign.trait_description();
    let timing = time_profile(input.time_of_birth);
    let place = if input.birthplace.is_empty() {
        "your roots"
    } else {
        input.birthplace.as_str()
    };

    format!(
        "**{first}, your Sun sign is _{sign}_**  \n\
         • Core vibe: {traits}  \n\
         • Timing tint: {timing}  \n\
         • Place influence: *{place}* highlights community and environment themes.\n\
         \n\
         **Weekly nudge:** Lean into your natural {sign_lower} strengths while balancing \
         them with patience and clear boundaries.\n",
        sign_lower = sign.name().to_lowercase(),
    )
}
