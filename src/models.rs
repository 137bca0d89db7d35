//! Request-scoped value types for a single reading submission
//!
//! Nothing here is persisted or shared across submissions; every value
//! lives for one form submission and is then discarded.

use chrono::{Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AstroAiError;
use crate::zodiac::ZodiacSign;

/// Earliest accepted date of birth
fn min_date_of_birth() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
}

/// Raw form submission as posted by the page.
///
/// The date of birth is optional at the wire level so that its absence
/// surfaces as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingRequest {
    /// Full name, free text, may be empty
    #[serde(default)]
    pub name: String,
    /// Date of birth (ISO-8601), required for any derived computation
    pub date_of_birth: Option<NaiveDate>,
    /// Time of birth as "HH:MM", optional, minute granularity
    #[serde(default)]
    pub time_of_birth: Option<String>,
    /// Birth place, free text, may be empty
    #[serde(default)]
    pub birthplace: String,
}

/// A validated submission, ready for classification and composition
#[derive(Debug, Clone)]
pub struct BirthInput {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub time_of_birth: Option<NaiveTime>,
    pub birthplace: String,
}

impl BirthInput {
    /// Validate a raw submission.
    ///
    /// The date of birth must be present and within 1900-01-01..=today;
    /// a present birth time must parse as "HH:MM".
    pub fn from_request(request: ReadingRequest) -> Result<Self, AstroAiError> {
        let date_of_birth = request
            .date_of_birth
            .ok_or_else(|| AstroAiError::validation("Please select your date of birth."))?;

        let min = min_date_of_birth();
        if date_of_birth < min {
            return Err(AstroAiError::validation(format!(
                "Date of birth cannot be before {min}."
            )));
        }
        if date_of_birth > Utc::now().date_naive() {
            return Err(AstroAiError::validation(
                "Date of birth cannot be in the future.",
            ));
        }

        let time_of_birth = match request.time_of_birth.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| {
                AstroAiError::validation(format!(
                    "Invalid time of birth '{raw}', expected HH:MM."
                ))
            })?),
        };

        Ok(Self {
            name: request.name.trim().to_string(),
            date_of_birth,
            time_of_birth,
            birthplace: request.birthplace.trim().to_string(),
        })
    }

    /// Sun sign derived from the date of birth
    #[must_use]
    pub fn sign(&self) -> ZodiacSign {
        ZodiacSign::from_month_day(self.date_of_birth.month(), self.date_of_birth.day())
    }
}

/// Field set sent to the completion endpoint, built once per submission
#[derive(Debug, Clone, Serialize)]
pub struct ReadingPayload {
    /// Name, or "Friend" when none was given
    pub name: String,
    /// Date of birth as an ISO-8601 string
    pub dob: String,
    /// Time of birth as "HH:MM", or the "N/A" sentinel
    pub tob: String,
    /// Birth place, or the "N/A" sentinel
    pub place: String,
    /// Derived sun sign
    pub sign: ZodiacSign,
}

impl ReadingPayload {
    #[must_use]
    pub fn from_input(input: &BirthInput) -> Self {
        Self {
            name: if input.name.is_empty() {
                "Friend".to_string()
            } else {
                input.name.clone()
            },
            dob: input.date_of_birth.format("%Y-%m-%d").to_string(),
            tob: input
                .time_of_birth
                .map_or_else(|| "N/A".to_string(), |t| t.format("%H:%M").to_string()),
            place: if input.birthplace.is_empty() {
                "N/A".to_string()
            } else {
                input.birthplace.clone()
            },
            sign: input.sign(),
        }
    }
}
