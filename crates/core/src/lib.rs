//! syscalc Core - calculation modules, history and session control.
//!
//! This crate contains the calculator's business logic. It defines the
//! `AssistantTrait` seam that the `syscalc-assistant` crate implements, so
//! the session can relay explanations without depending on any particular
//! assistant.

pub mod assistant;
pub mod errors;
pub mod expression;
pub mod history;
pub mod modules;
pub mod session;
pub mod settings;

// Re-export the types a presentation layer works with
pub use assistant::{AssistantReply, AssistantTrait};
pub use history::{HistoryEntry, HistoryLog};
pub use modules::{CalcModuleTrait, ModuleKind, ModuleRegistry};
pub use session::{CalculationOutcome, CalculatorSession};
pub use settings::CalculatorSettings;

// Re-export error types
pub use errors::CalculationError;
pub use errors::Error;
pub use errors::Result;
