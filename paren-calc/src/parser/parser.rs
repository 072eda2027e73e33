use log::{debug, error};

use super::lexer::{Lexer, Token, TokenClass};
use crate::error::CompileError;
use crate::ir::ast::{Expression, Operator};

/// Recursive-descent parser for `expr := digit | '(' expr operator expr ')'`.
///
/// Tokens are pulled from the lexer one at a time; there is no lookahead.
pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self::from_lexer(Lexer::new(source))
    }

    pub fn from_lexer(lexer: Lexer) -> Self {
        Self { lexer }
    }

    pub fn current_token(&self) -> Token {
        self.lexer.current_token()
    }

    /// Parses the next top-level expression.
    ///
    /// `Ok(None)` means the source is exhausted. Any other token that cannot
    /// start an expression is a syntax error.
    pub fn next_expression(&mut self) -> Result<Option<Expression>, CompileError> {
        match self.parse_expression()? {
            Some(expression) => {
                debug!("parsed {} at line {}", expression, expression.line());
                Ok(Some(expression))
            }
            None if self.current_token().is_end_of_input() => Ok(None),
            None => Err(CompileError::MissingExpression {
                line: self.current_token().line,
            }),
        }
    }

    /// `+` or `*`. Anything else is `None`, and the token is consumed.
    pub fn parse_operator(&mut self) -> Option<Operator> {
        match self.lexer.next_token().character {
            '+' => Some(Operator::Add),
            '*' => Some(Operator::Mul),
            _ => None,
        }
    }

    /// Parses one expression.
    ///
    /// Returns `Ok(None)` when the first token cannot start an expression.
    /// Once a `(` has been consumed every failure is fatal.
    pub fn parse_expression(&mut self) -> Result<Option<Expression>, CompileError> {
        let token = self.lexer.next_token();
        let line = token.line;

        if token.class == TokenClass::Digit {
            let value = token.character as u8 - b'0';
            return Ok(Some(Expression::digit(value, line)));
        }

        if token.character != '(' || token.class != TokenClass::Char {
            return Ok(None);
        }

        let left = self.parse_expression()?.ok_or_else(|| self.missing_expression())?;

        let op = self.parse_operator().ok_or_else(|| CompileError::MissingOperator {
            line: self.current_token().line,
        })?;

        let right = self.parse_expression()?.ok_or_else(|| self.missing_expression())?;

        let closing = self.lexer.next_token();
        if closing.character != ')' || closing.class != TokenClass::Char {
            let partial = format!("({}{}{}", left, op.symbol(), right);
            error!("expression: {} <- expected ')', found '{}'", partial, closing.character);
            return Err(CompileError::MissingClosingParen {
                line: closing.line,
                partial,
            });
        }

        Ok(Some(Expression::parenthesized(left, op, right, line)))
    }

    fn missing_expression(&self) -> CompileError {
        CompileError::MissingExpression {
            line: self.current_token().line,
        }
    }
}
