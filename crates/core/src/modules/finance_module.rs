use crate::errors::CalculationError;

use super::module_traits::{parse_fields, CalcModuleTrait, ModuleKind};

const USAGE: &str = "Amount, Rate %, Years";

/// Compound interest, compounded once per year.
#[derive(Debug, Clone)]
pub struct FinanceModule {
    currency: String,
}

impl FinanceModule {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    /// `A = P * (1 + r/100)^t`.
    ///
    /// Negative or zero inputs are evaluated as given. A base that has no real
    /// power (negative base with fractional `t`, or zero base with negative
    /// `t`) is reported as an invalid number.
    pub fn final_amount(principal: f64, rate: f64, years: f64) -> Option<f64> {
        let base = 1.0 + rate / 100.0;
        if base == 0.0 && years < 0.0 {
            return None;
        }
        let growth = base.powf(years);
        if growth.is_nan() && !base.is_nan() && !years.is_nan() {
            return None;
        }
        Some(principal * growth)
    }
}

impl CalcModuleTrait for FinanceModule {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Finance
    }

    fn evaluate(&self, input: &str) -> Result<String, CalculationError> {
        let fields = parse_fields(input, 3, USAGE)?;
        let (principal, rate, years) = (fields[0], fields[1], fields[2]);

        let amount = Self::final_amount(principal, rate, years)
            .ok_or_else(|| CalculationError::InvalidNumber(input.trim().to_string()))?;
        if amount.is_nan() {
            return Ok(format!("Final amount: nan {}", self.currency));
        }
        Ok(format!("Final amount: {:.2} {}", amount, self.currency))
    }
}
