use serde::{Deserialize, Serialize};

/// Ratings on the 0-5 scale; `None` when the payload had no usable value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub overall: Option<f64>,
    pub love: Option<f64>,
    pub work: Option<f64>,
    pub money: Option<f64>,
}

/// Normalized daily fortune, ready for display or caching.
///
/// All text fields are non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FortuneRecord {
    /// Display-formatted date
    pub date: String,
    pub overall: String,
    pub love: String,
    pub work: String,
    pub money: String,
    /// Lucky color
    pub color: String,
    /// Lucky action
    pub action: String,
    #[serde(default)]
    pub scores: Scores,
}
