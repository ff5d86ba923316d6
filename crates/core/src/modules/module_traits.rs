use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{CalculationError, Error};

/// Stable identifier of a calculation module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Basic,
    Finance,
    Engineering,
}

impl ModuleKind {
    pub const ALL: [ModuleKind; 3] = [
        ModuleKind::Basic,
        ModuleKind::Finance,
        ModuleKind::Engineering,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ModuleKind::Basic => "basic",
            ModuleKind::Finance => "finance",
            ModuleKind::Engineering => "engineering",
        }
    }

    /// Name shown to the user and recorded in history.
    pub fn display_name(self) -> &'static str {
        match self {
            ModuleKind::Basic => "Basic",
            ModuleKind::Finance => "Finance",
            ModuleKind::Engineering => "Engineering (Ballistics)",
        }
    }

    /// Input format hint shown when the module becomes active.
    pub fn hint(self) -> &'static str {
        match self {
            ModuleKind::Basic => "Enter an expression (e.g. 2+2*2)",
            ModuleKind::Finance => "Format: Amount, Rate, Years (e.g. 1000, 10, 5)",
            ModuleKind::Engineering => "Format: Speed, Angle (e.g. 50, 45)",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ModuleKind {
    type Err = Error;

    /// Accepts either the key or the display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ModuleKind::ALL
            .into_iter()
            .find(|kind| {
                kind.key().eq_ignore_ascii_case(needle)
                    || kind.display_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| Error::UnknownModule(s.to_string()))
    }
}

/// A stateless calculation strategy.
///
/// `evaluate` reports failures as `CalculationError`; `calculate` is total and
/// always returns the text to display.
pub trait CalcModuleTrait: Send + Sync {
    fn kind(&self) -> ModuleKind;

    fn evaluate(&self, input: &str) -> Result<String, CalculationError>;

    fn name(&self) -> &'static str {
        self.kind().display_name()
    }

    fn hint(&self) -> &'static str {
        self.kind().hint()
    }

    fn calculate(&self, input: &str) -> String {
        match self.evaluate(input) {
            Ok(text) => text,
            Err(e) => {
                debug!("{} rejected {:?}: {}", self.name(), input, e);
                e.to_display_text()
            }
        }
    }
}

/// Splits comma-separated numeric fields, requiring exactly `expected` of them.
pub(crate) fn parse_fields(
    input: &str,
    expected: usize,
    usage: &'static str,
) -> Result<Vec<f64>, CalculationError> {
    let fields: Vec<&str> = input.split(',').collect();
    if fields.len() != expected {
        return Err(CalculationError::WrongArity {
            expected,
            found: fields.len(),
            usage,
        });
    }
    fields
        .into_iter()
        .map(|field| {
            let field = field.trim();
            field
                .parse::<f64>()
                .map_err(|_| CalculationError::InvalidNumber(field.to_string()))
        })
        .collect()
}
