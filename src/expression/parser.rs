//! Recursive-descent parser for the boolean expression notation accepted by
//! [`BoolExpr::parse`]: `+`/`|` for OR, `*`/`&` for AND, `~`/`!` for NOT,
//! parentheses for grouping, and `0`/`1`/`true`/`false` for constants.
//!
//! Grammar, lowest to highest precedence:
//! ```text
//! expr    := term (('+' | '|') term)*
//! term    := factor (('*' | '&') factor)*
//! factor  := ('~' | '!') factor | primary
//! primary := IDENT | '0' | '1' | "true" | "false" | '(' expr ')'
//! ```

use super::BoolExpr;
use crate::error::ExpressionParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Ident,
    Zero,
    One,
    True,
    False,
    Or,
    And,
    Not,
    LParen,
    RParen,
}

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    kind: TokenKind,
    text: &'a str,
    position: usize,
}

struct Lexer<'a> {
    input: &'a str,
    tokens: Vec<Token<'a>>,
}

impl<'a> Lexer<'a> {
    fn tokenize(input: &'a str) -> Result<Vec<Token<'a>>, ExpressionParseError> {
        let mut lexer = Lexer {
            input,
            tokens: Vec::new(),
        };
        lexer.run()?;
        Ok(lexer.tokens)
    }

    fn run(&mut self) -> Result<(), ExpressionParseError> {
        let bytes = self.input.as_bytes();
        let mut pos = 0;
        while pos < bytes.len() {
            let ch = bytes[pos] as char;
            match ch {
                c if c.is_whitespace() => pos += 1,
                '+' | '|' => {
                    self.tokens.push(Token { kind: TokenKind::Or, text: &self.input[pos..pos + 1], position: pos });
                    pos += 1;
                }
                '*' | '&' => {
                    self.tokens.push(Token { kind: TokenKind::And, text: &self.input[pos..pos + 1], position: pos });
                    pos += 1;
                }
                '~' | '!' => {
                    self.tokens.push(Token { kind: TokenKind::Not, text: &self.input[pos..pos + 1], position: pos });
                    pos += 1;
                }
                '(' => {
                    self.tokens.push(Token { kind: TokenKind::LParen, text: &self.input[pos..pos + 1], position: pos });
                    pos += 1;
                }
                ')' => {
                    self.tokens.push(Token { kind: TokenKind::RParen, text: &self.input[pos..pos + 1], position: pos });
                    pos += 1;
                }
                '0' => {
                    self.tokens.push(Token { kind: TokenKind::Zero, text: &self.input[pos..pos + 1], position: pos });
                    pos += 1;
                }
                '1' => {
                    self.tokens.push(Token { kind: TokenKind::One, text: &self.input[pos..pos + 1], position: pos });
                    pos += 1;
                }
                c if c.is_alphabetic() || c == '_' => {
                    let start = pos;
                    while pos < bytes.len() {
                        let c = bytes[pos] as char;
                        if c.is_alphanumeric() || c == '_' {
                            pos += 1;
                        } else {
                            break;
                        }
                    }
                    let text = &self.input[start..pos];
                    let kind = match text {
                        "true" => TokenKind::True,
                        "false" => TokenKind::False,
                        _ => TokenKind::Ident,
                    };
                    self.tokens.push(Token { kind, text, position: start });
                }
                other => {
                    return Err(ExpressionParseError::InvalidSyntax {
                        message: format!("unexpected character '{}'", other),
                        input: self.input.to_string(),
                        position: Some(pos),
                    });
                }
            }
        }
        Ok(())
    }
}

struct Parser<'a> {
    input: &'a str,
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token<'a>> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn error(&self, message: impl Into<String>, position: Option<usize>) -> ExpressionParseError {
        ExpressionParseError::InvalidSyntax {
            message: message.into(),
            input: self.input.to_string(),
            position,
        }
    }

    fn parse_expr(&mut self) -> Result<BoolExpr, ExpressionParseError> {
        let mut left = self.parse_term()?;
        while let Some(token) = self.peek() {
            if token.kind == TokenKind::Or {
                self.advance();
                let right = self.parse_term()?;
                left = left.or(&right);
            } else {
                break;
            }
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<BoolExpr, ExpressionParseError> {
        let mut left = self.parse_factor()?;
        while let Some(token) = self.peek() {
            if token.kind == TokenKind::And {
                self.advance();
                let right = self.parse_factor()?;
                left = left.and(&right);
            } else {
                break;
            }
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<BoolExpr, ExpressionParseError> {
        if let Some(token) = self.peek() {
            if token.kind == TokenKind::Not {
                self.advance();
                let inner = self.parse_factor()?;
                return Ok(inner.not());
            }
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<BoolExpr, ExpressionParseError> {
        let token = self.advance().ok_or_else(|| self.error("unexpected end of input", Some(self.input.len())))?;
        match token.kind {
            TokenKind::Ident => Ok(BoolExpr::variable(token.text)),
            TokenKind::Zero | TokenKind::False => Ok(BoolExpr::constant(false)),
            TokenKind::One | TokenKind::True => Ok(BoolExpr::constant(true)),
            TokenKind::LParen => {
                let inner = self.parse_expr()?;
                match self.advance() {
                    Some(t) if t.kind == TokenKind::RParen => Ok(inner),
                    Some(t) => Err(self.error(format!("expected ')', found '{}'", t.text), Some(t.position))),
                    None => Err(self.error("expected ')', found end of input", Some(self.input.len()))),
                }
            }
            _ => Err(self.error(format!("unexpected token '{}'", token.text), Some(token.position))),
        }
    }
}

pub(super) fn parse(input: &str) -> Result<BoolExpr, ExpressionParseError> {
    let tokens = Lexer::tokenize(input)?;
    let mut parser = Parser { input, tokens, pos: 0 };
    let expr = parser.parse_expr()?;
    if let Some(token) = parser.peek() {
        return Err(parser.error(format!("unexpected trailing token '{}'", token.text), Some(token.position)));
    }
    Ok(expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_variable() {
        let expr = parse("a").unwrap();
        assert_eq!(expr, BoolExpr::variable("a"));
    }

    #[test]
    fn parses_precedence_and_over_or() {
        let expr = parse("a + b * c").unwrap();
        let a = BoolExpr::variable("a");
        let b = BoolExpr::variable("b");
        let c = BoolExpr::variable("c");
        assert_eq!(expr, a.or(&b.and(&c)));
    }

    #[test]
    fn parses_parentheses() {
        let expr = parse("(a + b) * c").unwrap();
        let a = BoolExpr::variable("a");
        let b = BoolExpr::variable("b");
        let c = BoolExpr::variable("c");
        assert_eq!(expr, a.or(&b).and(&c));
    }

    #[test]
    fn parses_not_and_alternate_operators() {
        let expr = parse("~a & b | !c").unwrap();
        let a = BoolExpr::variable("a");
        let b = BoolExpr::variable("b");
        let c = BoolExpr::variable("c");
        assert_eq!(expr, a.not().and(&b).or(&c.not()));
    }

    #[test]
    fn parses_constants() {
        assert_eq!(parse("1").unwrap(), BoolExpr::constant(true));
        assert_eq!(parse("0").unwrap(), BoolExpr::constant(false));
        assert_eq!(parse("true").unwrap(), BoolExpr::constant(true));
    }

    #[test]
    fn rejects_unbalanced_parens() {
        let err = parse("(a + b").unwrap_err();
        assert!(matches!(err, ExpressionParseError::InvalidSyntax { .. }));
    }

    #[test]
    fn rejects_trailing_garbage() {
        assert!(parse("a b").is_err());
    }
}
