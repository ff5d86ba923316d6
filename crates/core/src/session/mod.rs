//! Session controller - active module selection, calculation, history and assistance.

mod calculator_session;

pub use calculator_session::{CalculationOutcome, CalculatorSession};
