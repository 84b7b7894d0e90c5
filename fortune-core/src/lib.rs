//! Core types and functionality for the fortune checker.
//!
//! This crate holds the pure parts of the system: the zodiac catalog and
//! resolver, birthdate parsing, and the pipeline that normalizes a loosely
//! structured horoscope payload into a fixed-shape [`FortuneRecord`].

mod birthdate;
mod display;
mod error;
mod fallback;
mod fortune;
mod normalize;
mod score;
mod sources;
mod zodiac;

// Re-export core types
pub use birthdate::{parse_birthdate, sign_for_birthdate};
pub use display::{display_date, long_date, parse_calendar_date};
pub use error::{FortuneError, Result};
pub use fallback::{fallback_fortune, suggestion_for, Suggestion, DEFAULT_SUGGESTION};
pub use fortune::{FortuneRecord, Scores};
pub use normalize::{lucky_time_action, normalize_horoscope};
pub use score::{normalize_score, SCORE_MAX};
pub use sources::{value_at_path, SourceList};
pub use zodiac::{find_zodiac, sign_by_key, MonthDay, ZodiacSign, ZODIAC_SIGNS};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
