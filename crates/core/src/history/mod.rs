//! Operation history - timestamped, append-only, in memory only.

mod clock;
mod history_log;
mod history_model;

pub use clock::{Clock, FixedClock, SystemClock};
pub use history_log::HistoryLog;
pub use history_model::{HistoryEntry, TIMESTAMP_FORMAT};
