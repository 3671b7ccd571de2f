use serde::{Deserialize, Serialize};

/// A single labeled value for pie/bar chart rendering.
///
/// The core generates these — the frontend just renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    /// Display name (e.g. "Food", "Jan 2024")
    pub name: String,

    /// Amount in the display currency
    pub value: f64,
}

impl ChartSlice {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
