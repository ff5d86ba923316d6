//! Tokenizer for infix arithmetic.
//!
//! Recognizes integer and decimal literals (`42`, `3.5`, `.5`, `5.`), the
//! operators `+ - * / ** //` and parentheses. Whitespace separates tokens.

use num_bigint::BigInt;

use crate::errors::CalculationError;

use super::number::Number;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(Number),
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    SlashSlash,
    LParen,
    RParen,
    Eof,
}

pub struct Tokenizer {
    chars: Vec<char>,
    pos: usize,
}

impl Tokenizer {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, CalculationError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let Some(ch) = self.peek() else {
                tokens.push(Token::Eof);
                return Ok(tokens);
            };
            let token = match ch {
                '+' => self.single(Token::Plus),
                '-' => self.single(Token::Minus),
                '*' => self.single_or_double('*', Token::Star, Token::StarStar),
                '/' => self.single_or_double('/', Token::Slash, Token::SlashSlash),
                '(' => self.single(Token::LParen),
                ')' => self.single(Token::RParen),
                c if c.is_ascii_digit() || c == '.' => self.read_number()?,
                _ => return Err(CalculationError::MalformedExpression),
            };
            tokens.push(token);
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn single(&mut self, token: Token) -> Token {
        self.pos += 1;
        token
    }

    fn single_or_double(&mut self, ch: char, single: Token, double: Token) -> Token {
        self.pos += 1;
        if self.peek() == Some(ch) {
            self.pos += 1;
            double
        } else {
            single
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn read_digits(&mut self) -> usize {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn read_number(&mut self) -> Result<Token, CalculationError> {
        let start = self.pos;
        let mut digits = self.read_digits();
        let is_real = self.peek() == Some('.');
        if is_real {
            self.pos += 1;
            digits += self.read_digits();
        }
        if digits == 0 {
            return Err(CalculationError::MalformedExpression);
        }

        let literal: String = self.chars[start..self.pos].iter().collect();
        if is_real {
            return Ok(Token::Number(Number::Real(parse_real(&literal)?)));
        }
        // Leading zeros are only allowed in zero itself (`0`, `00`).
        if literal.starts_with('0') && literal.chars().any(|c| c != '0') {
            return Err(CalculationError::MalformedExpression);
        }
        literal
            .parse::<BigInt>()
            .map(|v| Token::Number(Number::Int(v)))
            .map_err(|_| CalculationError::MalformedExpression)
    }
}

fn parse_real(literal: &str) -> Result<f64, CalculationError> {
    // `f64::from_str` rejects a trailing dot, so "5." is read as "5.0".
    let normalized = match literal.strip_suffix('.') {
        Some(head) => format!("{}.0", head),
        None => literal.to_string(),
    };
    normalized
        .parse::<f64>()
        .map_err(|_| CalculationError::MalformedExpression)
}
