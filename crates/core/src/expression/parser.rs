//! Pratt parser and evaluator for infix arithmetic.
//!
//! Grammar (informal):
//!   expr   = prefix (OP prefix)*     (Pratt-driven)
//!   prefix = ('-' | '+') prefix | atom
//!   atom   = NUMBER | '(' expr ')'
//!
//! Binding powers, loosest first: `+ -`, then `* / //`, then unary sign,
//! then `**` (right-associative). So `-2 ** 2` is `-(2 ** 2)` and
//! `2 ** -1` is `2 ** (-1)`.

use crate::errors::CalculationError;

use super::number::Number;
use super::token::Token;

/// Binding power of the unary sign operators.
const PREFIX_BP: u8 = 5;

/// Deepest parser recursion accepted: parentheses, unary signs and the
/// right operand chain of `**` each add a level.
pub const MAX_NESTING: usize = 200;

/// Deepest syntax tree accepted. Evaluation recurses once per level.
pub const MAX_TREE_DEPTH: usize = 1000;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Number),
    Negate(Box<Expr>),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Pow,
}

impl BinaryOp {
    fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(BinaryOp::Add),
            Token::Minus => Some(BinaryOp::Sub),
            Token::Star => Some(BinaryOp::Mul),
            Token::Slash => Some(BinaryOp::Div),
            Token::SlashSlash => Some(BinaryOp::FloorDiv),
            Token::StarStar => Some(BinaryOp::Pow),
            _ => None,
        }
    }

    /// Left and right binding powers.
    fn binding_power(self) -> (u8, u8) {
        match self {
            BinaryOp::Add | BinaryOp::Sub => (1, 2),
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::FloorDiv => (3, 4),
            BinaryOp::Pow => (7, 6),
        }
    }

    fn apply(self, left: Number, right: Number) -> Result<Number, CalculationError> {
        match self {
            BinaryOp::Add => Ok(left.add(right)),
            BinaryOp::Sub => Ok(left.sub(right)),
            BinaryOp::Mul => Ok(left.mul(right)),
            BinaryOp::Div => left.div(right),
            BinaryOp::FloorDiv => left.floor_div(right),
            BinaryOp::Pow => left.pow(right),
        }
    }
}

impl Expr {
    pub fn eval(&self) -> Result<Number, CalculationError> {
        match self {
            Expr::Literal(n) => Ok(n.clone()),
            Expr::Negate(inner) => Ok(inner.eval()?.negate()),
            Expr::Binary { op, left, right } => op.apply(left.eval()?, right.eval()?),
        }
    }
}

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    nesting: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            nesting: 0,
        }
    }

    pub fn parse(&mut self) -> Result<Expr, CalculationError> {
        let (expr, _) = self.parse_expr(0)?;
        if self.peek() != &Token::Eof {
            return Err(CalculationError::MalformedExpression);
        }
        Ok(expr)
    }

    /// Returns the parsed expression and its tree depth.
    fn parse_expr(&mut self, min_bp: u8) -> Result<(Expr, usize), CalculationError> {
        if self.nesting >= MAX_NESTING {
            return Err(CalculationError::MalformedExpression);
        }
        self.nesting += 1;
        let parsed = self.parse_binary(min_bp);
        self.nesting -= 1;
        parsed
    }

    fn parse_binary(&mut self, min_bp: u8) -> Result<(Expr, usize), CalculationError> {
        let (mut left, mut depth) = self.parse_prefix()?;

        while let Some(op) = BinaryOp::from_token(self.peek()) {
            let (l_bp, r_bp) = op.binding_power();
            if l_bp < min_bp {
                break;
            }
            self.advance();
            let (right, right_depth) = self.parse_expr(r_bp)?;
            depth = checked_depth(depth.max(right_depth))?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok((left, depth))
    }

    fn parse_prefix(&mut self) -> Result<(Expr, usize), CalculationError> {
        match self.advance() {
            Token::Minus => {
                let (inner, depth) = self.parse_expr(PREFIX_BP)?;
                Ok((Expr::Negate(Box::new(inner)), checked_depth(depth)?))
            }
            Token::Plus => self.parse_expr(PREFIX_BP),
            Token::Number(n) => Ok((Expr::Literal(n), 1)),
            Token::LParen => {
                let inner = self.parse_expr(0)?;
                match self.advance() {
                    Token::RParen => Ok(inner),
                    _ => Err(CalculationError::MalformedExpression),
                }
            }
            _ => Err(CalculationError::MalformedExpression),
        }
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }
}

/// Depth of a node placed above a subtree of depth `child`.
fn checked_depth(child: usize) -> Result<usize, CalculationError> {
    if child >= MAX_TREE_DEPTH {
        return Err(CalculationError::MalformedExpression);
    }
    Ok(child + 1)
}
