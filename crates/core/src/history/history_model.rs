use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Time-of-day format used when rendering history lines.
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// One recorded calculation attempt. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub timestamp: NaiveTime,
    pub module_name: String,
    pub input_text: String,
    pub result_text: String,
}

impl HistoryEntry {
    pub fn new(
        timestamp: NaiveTime,
        module_name: &str,
        input_text: &str,
        result_text: &str,
    ) -> Self {
        Self {
            timestamp,
            module_name: module_name.to_string(),
            input_text: input_text.to_string(),
            result_text: result_text.to_string(),
        }
    }

    /// The record text without its timestamp: `[module] input -> result`.
    pub fn record(&self) -> String {
        format!(
            "[{}] {} -> {}",
            self.module_name, self.input_text, self.result_text
        )
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.record()
        )
    }
}
