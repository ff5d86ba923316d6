//! syscalc Assistant - heuristic explanations with simulated latency.
//!
//! There is no model behind this assistant: it classifies the input with
//! fixed keyword and context rules and answers with canned text.
//!
//! # Architecture
//!
//! - `heuristics`: The pure classifier, `(input, module name) -> explanation`
//! - `service`: Delayed delivery on the tokio runtime, implements `AssistantTrait`

pub mod heuristics;
pub mod service;

// Re-export main types for convenience
pub use heuristics::{analyze, ModuleContext};
pub use service::{AssistantConfig, AssistantService};
