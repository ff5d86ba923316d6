//! Keyword and context rules behind the assistant's explanations.
//!
//! Rules are tried in a fixed order and the first match wins:
//! empty input, a literal `/0`, the finance context, the engineering
//! context, then generic syntax analysis with a predicted result.

use syscalc_core::expression;

pub const EMPTY_INPUT: &str = "AI: Enter some data to analyze.";

pub const DIVISION_BY_ZERO: &str =
    "\u{26a0}\u{fe0f} Warning! Attempted division by zero. This is mathematically impossible.";

pub const FINANCE_EXPLANATION: &str = "AI Finance:\n\
    You are calculating a deposit. Formula: A = P(1 + r/100)^t.\n\
    It shows how much money you will get once interest is capitalized.";

pub const FINANCE_HINT: &str =
    "AI Hint: For finance, enter 3 comma-separated numbers: 'Amount, Rate, Years'.";

pub const BALLISTICS_EXPLANATION: &str = "AI Ballistics:\n\
    You are calculating the flight of a projectile.\n\
    I use the equations of motion at an angle to the horizon (g=9.81 m/s\u{b2}).";

pub const BALLISTICS_HINT: &str = "AI Hint: Enter 'Speed, Angle' to calculate the trajectory.";

pub const SYNTAX_HEADER: &str = "AI Syntax analysis:";

pub const INCOMPLETE_EXPRESSION: &str =
    "AI: The expression looks incomplete or contains an error.";

/// Substring checks for the generic context, in reporting order.
const SYNTAX_NOTES: [(&str, &str); 3] = [
    ("**", "\u{2022} Exponentiation is used."),
    ("%", "\u{2022} The remainder (modulo) operator is used."),
    ("*", "\u{2022} Multiplication is performed."),
];

/// Which rule set applies for the active module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleContext {
    Finance,
    Engineering,
    Generic,
}

impl ModuleContext {
    /// Matches the module name by case-insensitive substring, so both keys
    /// (`finance`) and display names (`Engineering (Ballistics)`) work.
    pub fn from_module_name(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("finance") {
            ModuleContext::Finance
        } else if name.contains("engineering") || name.contains("ballistic") {
            ModuleContext::Engineering
        } else {
            ModuleContext::Generic
        }
    }
}

/// Produces the canned explanation for `input`. Never fails.
pub fn analyze(input: &str, module_name: &str) -> String {
    if input.trim().is_empty() {
        return EMPTY_INPUT.to_string();
    }

    // Textual check only: it also fires for "10/05" or "x/0y".
    if input.contains("/0") {
        return DIVISION_BY_ZERO.to_string();
    }

    match ModuleContext::from_module_name(module_name) {
        ModuleContext::Finance => {
            if input.split(',').count() == 3 {
                FINANCE_EXPLANATION.to_string()
            } else {
                FINANCE_HINT.to_string()
            }
        }
        ModuleContext::Engineering => {
            if input.contains(',') {
                BALLISTICS_EXPLANATION.to_string()
            } else {
                BALLISTICS_HINT.to_string()
            }
        }
        ModuleContext::Generic => analyze_syntax(input),
    }
}

fn analyze_syntax(input: &str) -> String {
    let notes: Vec<&str> = SYNTAX_NOTES
        .iter()
        .filter(|(needle, _)| input.contains(*needle))
        .map(|(_, note)| *note)
        .collect();

    if !notes.is_empty() {
        return format!("{}\n{}", SYNTAX_HEADER, notes.join("\n"));
    }

    match expression::evaluate(input) {
        Ok(value) => format!(
            "AI Forecast: The expression is valid. Approximate result \u{2248} {}",
            value
        ),
        Err(_) => INCOMPLETE_EXPRESSION.to_string(),
    }
}
