//! `AstroAI` - AI-assisted sun-sign astrology readings
//!
//! This library provides the core functionality for sun-sign
//! classification, templated reading composition, and AI-generated
//! readings with an offline fallback.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod reading;
pub mod timing;
pub mod web;
pub mod zodiac;

// Re-export core types for public API
pub use config::{AstroAiConfig, CompletionConfig};
pub use error::AstroAiError;
pub use models::{BirthInput, ReadingPayload, ReadingRequest};
pub use reading::compose_overview;
pub use reading::offline::offline_reading;
pub use reading::remote::RemoteReadingClient;
pub use timing::{BirthTimeBand, time_profile};
pub use zodiac::ZodiacSign;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AstroAiError>;
