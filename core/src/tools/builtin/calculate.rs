//! Arithmetic calculator tool
//!
//! Evaluates arithmetic expressions with a hand-written tokenizer and
//! recursive-descent parser. Only numbers, `+ - * / ^`, parentheses and
//! unary minus are accepted; any other token is rejected. Model-produced
//! text is never executed as code.

use crate::error::{Result, ToolError};
use crate::impl_tool_factory;
use crate::tools::Tool;
use async_trait::async_trait;
use thiserror::Error;

/// Errors produced while evaluating an expression
#[derive(Error, Debug, PartialEq)]
pub enum EvalError {
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("trailing input after expression")]
    TrailingInput,

    #[error("division by zero")]
    DivisionByZero,

    #[error("empty expression")]
    EmptyExpression,
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Number(n) => n.to_string(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::Caret => "^".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
        }
    }
}

fn tokenize(input: &str) -> std::result::Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            ' ' | '\t' => {
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut literal = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        literal.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| EvalError::InvalidNumber(literal))?;
                tokens.push(Token::Number(value));
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '^' => {
                chars.next();
                tokens.push(Token::Caret);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            other => return Err(EvalError::UnexpectedCharacter(other)),
        }
    }

    Ok(tokens)
}

/// Recursive-descent parser over the token stream.
///
/// Grammar:
///   expr    := term { ("+" | "-") term }
///   term    := factor { ("*" | "/") factor }
///   factor  := "-" factor | power
///   power   := primary [ "^" factor ]
///   primary := number | "(" expr ")"
///
/// `^` is right-associative and binds tighter than unary minus, so
/// `-2 ^ 2` evaluates to -4 and `2 ^ 3 ^ 2` to 512.
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expr(&mut self) -> std::result::Result<f64, EvalError> {
        let mut value = self.term()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Plus => {
                    self.advance();
                    value += self.term()?;
                }
                Token::Minus => {
                    self.advance();
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn term(&mut self) -> std::result::Result<f64, EvalError> {
        let mut value = self.factor()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Star => {
                    self.advance();
                    value *= self.factor()?;
                }
                Token::Slash => {
                    self.advance();
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    value /= divisor;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn factor(&mut self) -> std::result::Result<f64, EvalError> {
        if matches!(self.peek(), Some(Token::Minus)) {
            self.advance();
            return Ok(-self.factor()?);
        }
        self.power()
    }

    fn power(&mut self) -> std::result::Result<f64, EvalError> {
        let base = self.primary()?;
        if matches!(self.peek(), Some(Token::Caret)) {
            self.advance();
            let exponent = self.factor()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> std::result::Result<f64, EvalError> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::LParen) => {
                let value = self.expr()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(value),
                    Some(other) => Err(EvalError::UnexpectedToken(other.describe())),
                    None => Err(EvalError::UnexpectedEnd),
                }
            }
            Some(other) => Err(EvalError::UnexpectedToken(other.describe())),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}

/// Evaluate an arithmetic expression
pub fn eval(input: &str) -> std::result::Result<f64, EvalError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    let mut parser = Parser::new(tokens);
    let value = parser.expr()?;
    if parser.peek().is_some() {
        return Err(EvalError::TrailingInput);
    }
    Ok(value)
}

/// Tool that evaluates arithmetic expressions safely
pub struct CalculateTool;

impl CalculateTool {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for CalculateTool {
    fn name(&self) -> &str {
        "calculate"
    }

    fn description(&self) -> &str {
        "e.g. calculate: 4 * 7 / 3\n\
         Runs a calculation and returns the number - only arithmetic expressions \
         are accepted, so be sure to use floating point syntax if necessary"
    }

    async fn execute(&self, argument: &str) -> Result<String> {
        let value = eval(argument).map_err(|e| ToolError::ExecutionFailed {
            name: "calculate".to_string(),
            message: e.to_string(),
        })?;
        Ok(value.to_string())
    }
}

impl Default for CalculateTool {
    fn default() -> Self {
        Self::new()
    }
}

impl_tool_factory!(
    CalculateToolFactory,
    CalculateTool,
    "calculate",
    "Evaluate an arithmetic expression"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_result() {
        let value = eval("4 * 7 / 3").unwrap();
        assert!((value - 9.333333333333334).abs() < 1e-12);
    }

    #[test]
    fn test_operator_precedence() {
        assert_eq!(eval("2 + 3 * 4").unwrap(), 14.0);
        assert_eq!(eval("(2 + 3) * 4").unwrap(), 20.0);
    }

    #[test]
    fn test_exponent_is_right_associative() {
        assert_eq!(eval("2 ^ 3 ^ 2").unwrap(), 512.0);
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(eval("-3 + 5").unwrap(), 2.0);
        assert_eq!(eval("2 * -3").unwrap(), -6.0);
        assert_eq!(eval("-2 ^ 2").unwrap(), -4.0);
    }

    #[test]
    fn test_decimal_numbers() {
        assert_eq!(eval("0.5 + 0.25").unwrap(), 0.75);
    }

    #[test]
    fn test_non_arithmetic_text_is_rejected() {
        assert!(matches!(
            eval("import os"),
            Err(EvalError::UnexpectedCharacter('i'))
        ));
        assert!(matches!(
            eval("4; 5"),
            Err(EvalError::UnexpectedCharacter(';'))
        ));
        assert!(eval("two plus two").is_err());
    }

    #[test]
    fn test_malformed_expressions_are_rejected() {
        assert_eq!(eval(""), Err(EvalError::EmptyExpression));
        assert_eq!(eval("1 +"), Err(EvalError::UnexpectedEnd));
        assert_eq!(eval("(1 + 2"), Err(EvalError::UnexpectedEnd));
        assert_eq!(eval("1 2"), Err(EvalError::TrailingInput));
        assert_eq!(
            eval("1..2"),
            Err(EvalError::InvalidNumber("1..2".to_string()))
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval("1 / 0"), Err(EvalError::DivisionByZero));
    }

    #[tokio::test]
    async fn test_tool_formats_result() {
        let tool = CalculateTool::new();
        let result = tool.execute("2 + 2").await.unwrap();
        assert_eq!(result, "4");
    }

    #[tokio::test]
    async fn test_tool_rejects_code() {
        let tool = CalculateTool::new();
        assert!(tool.execute("__import__('os')").await.is_err());
    }
}
