//! Arithmetic expression evaluation.
//!
//! Used by the basic calculation module and by the assistant's result
//! prediction. Input is parsed into an AST first and only then evaluated.

mod number;
mod parser;
mod token;

pub use number::Number;
pub use parser::{BinaryOp, Expr, Parser};
pub use token::{Token, Tokenizer};

use crate::errors::CalculationError;

/// Parses and evaluates `input` as an infix arithmetic expression.
pub fn evaluate(input: &str) -> Result<Number, CalculationError> {
    let tokens = Tokenizer::new(input).tokenize()?;
    Parser::new(tokens).parse()?.eval()
}
