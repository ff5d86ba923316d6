use crate::errors::CalculationError;
use crate::expression;

use super::module_traits::{CalcModuleTrait, ModuleKind};

/// Characters a basic expression may contain.
const ALLOWED_CHARS: &str = "0123456789+-*/(). ";

/// Free-form infix arithmetic.
#[derive(Debug, Clone, Default)]
pub struct BasicModule;

impl BasicModule {
    pub fn new() -> Self {
        Self
    }
}

impl CalcModuleTrait for BasicModule {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Basic
    }

    fn evaluate(&self, input: &str) -> Result<String, CalculationError> {
        if !input.chars().all(|c| ALLOWED_CHARS.contains(c)) {
            return Err(CalculationError::InvalidCharacters);
        }
        expression::evaluate(input).map(|n| n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        let module = BasicModule::new();
        assert_eq!(module.calculate("2+2*2"), "6");
        assert_eq!(module.calculate("(1 + 2) * 3"), "9");
        assert_eq!(module.calculate("10/4"), "2.5");
        assert_eq!(module.calculate("4/2"), "2.0");
    }

    #[test]
    fn test_power_and_floor_division() {
        let module = BasicModule::new();
        assert_eq!(module.calculate("2**8"), "256");
        assert_eq!(module.calculate("7//2"), "3");
    }

    #[test]
    fn test_rejects_characters_outside_the_alphabet() {
        let module = BasicModule::new();
        for input in ["2+x", "2^3", "5%2", "1,5", "2\t+ 2"] {
            assert_eq!(
                module.evaluate(input),
                Err(CalculationError::InvalidCharacters),
                "input: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_division_by_zero() {
        let module = BasicModule::new();
        assert_eq!(module.evaluate("4/0"), Err(CalculationError::DivisionByZero));
        assert_eq!(module.calculate("4/0"), "Error: Division by zero");
    }

    #[test]
    fn test_malformed_expression() {
        let module = BasicModule::new();
        assert_eq!(module.evaluate("2+"), Err(CalculationError::MalformedExpression));
        assert_eq!(module.evaluate(""), Err(CalculationError::MalformedExpression));
        assert_eq!(module.calculate("((2)"), "Error: Malformed expression");
    }

    #[test]
    fn test_deeply_nested_input_is_malformed() {
        let module = BasicModule::new();
        let parens = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
        let signs = format!("{}1", "-".repeat(10_000));
        for input in [parens, signs, "(".repeat(10_000), "-".repeat(10_000)] {
            assert_eq!(module.calculate(&input), "Error: Malformed expression");
        }
    }

    #[test]
    fn test_large_integers_are_exact() {
        let module = BasicModule::new();
        assert_eq!(module.calculate("10**20"), "100000000000000000000");
        assert_eq!(
            module.calculate("99999999999*99999999999"),
            "9999999999800000000001"
        );
        assert_eq!(module.calculate("2**10000").len(), 3011);
        assert_eq!(module.calculate("10**20/1"), "1e+20");
    }

    #[test]
    fn test_leading_zero_integer_is_malformed() {
        let module = BasicModule::new();
        assert_eq!(module.calculate("007+1"), "Error: Malformed expression");
        assert_eq!(module.calculate("00+1"), "1");
        assert_eq!(module.calculate("0.5*2"), "1.0");
    }
}
