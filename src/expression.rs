//! arithmetic evaluator for the popup calculator
//!
//! Grammar (commas are stripped first; the space is the only separator):
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/') unary)*
//! unary  := ('+' | '-')* atom
//! atom   := number | '(' expr ')'
//! ```

use crate::errors::{CalculatorError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let chars: Vec<char> = input.chars().filter(|c| *c != ',').collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' => {
                i += 1;
            }
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' => {
                tokens.push(Token::Star);
                i += 1;
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            '0'..='9' | '.' => {
                let start = i;
                let mut seen_dot = false;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    if chars[i] == '.' {
                        if seen_dot {
                            return Err(CalculatorError::expression("number has two decimal points"));
                        }
                        seen_dot = true;
                    }
                    i += 1;
                }
                let literal: String = chars[start..i].iter().collect();
                if literal == "." {
                    return Err(CalculatorError::expression("lone decimal point"));
                }
                let value = literal
                    .parse::<f64>()
                    .map_err(|e| CalculatorError::expression(format!("bad number {literal:?}: {e}")))?;
                tokens.push(Token::Number(value));
            }
            other => {
                return Err(CalculatorError::expression(format!("unexpected character {other:?}")));
            }
        }
    }

    Ok(tokens)
}

/// deepest parenthesis nesting accepted
pub const MAX_NESTING: usize = 256;

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        self.pos += 1;
        token
    }

    fn expr(&mut self) -> Result<f64> {
        let mut value = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            value = if op == Token::Plus { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64> {
        let mut value = self.unary()?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.pos += 1;
            let rhs = self.unary()?;
            value = if op == Token::Star { value * rhs } else { value / rhs };
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64> {
        // sign runs are folded iteratively so long inputs cannot exhaust the stack
        let mut negate = false;
        while let Some(sign @ (Token::Plus | Token::Minus)) = self.peek() {
            self.pos += 1;
            if sign == Token::Minus {
                negate = !negate;
            }
        }
        let value = self.atom()?;
        Ok(if negate { -value } else { value })
    }

    fn atom(&mut self) -> Result<f64> {
        match self.next() {
            Some(Token::Number(n)) => Ok(n),
            Some(Token::LParen) => {
                if self.depth >= MAX_NESTING {
                    return Err(CalculatorError::expression("expression nested too deeply"));
                }
                self.depth += 1;
                let value = self.expr();
                self.depth -= 1;
                let value = value?;
                match self.next() {
                    Some(Token::RParen) => Ok(value),
                    _ => Err(CalculatorError::expression("missing closing parenthesis")),
                }
            }
            Some(token) => Err(CalculatorError::expression(format!("unexpected {token:?}"))),
            None => Err(CalculatorError::expression("unexpected end of expression")),
        }
    }
}

/// evaluate an arithmetic expression
///
/// Fails on anything outside the grammar, and on results that are not finite
/// (division by zero, overflow).
pub fn evaluate(input: &str) -> Result<f64> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(CalculatorError::expression("empty expression"));
    }

    let mut parser = Parser { tokens, pos: 0, depth: 0 };
    let value = parser.expr()?;
    if let Some(token) = parser.peek() {
        return Err(CalculatorError::expression(format!("unexpected trailing {token:?}")));
    }
    if !value.is_finite() {
        return Err(CalculatorError::expression("result is not a finite number"));
    }

    Ok(value)
}
