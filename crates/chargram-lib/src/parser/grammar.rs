//! Grammar productions: recursive descent over the token stream.
//!
//! Precedence, loosest to tightest: alternation `|`, concatenation `,`,
//! exception `-`, range `..`, atom. Parentheses group and are
//! transparent: they shape the tree and leave no node behind.

use super::ParseError;
use super::ast::{Expr, Grammar, Name, Rule};
use super::lexer::{Token, TokenKind, lex, token_text};

pub(super) struct Parser<'s> {
    source: &'s str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'s> Parser<'s> {
    pub(super) fn new(source: &'s str) -> Self {
        Self {
            source,
            tokens: lex(source),
            pos: 0,
        }
    }

    pub(super) fn parse_grammar(&mut self) -> Result<Grammar, ParseError> {
        let mut rules = Vec::new();
        while self.peek().is_some() {
            rules.push(self.parse_rule()?);
        }
        Ok(Grammar { rules })
    }

    fn parse_rule(&mut self) -> Result<Rule, ParseError> {
        let ident = self.expect(TokenKind::Ident, "a rule name")?;
        let name = Name::new(token_text(self.source, &ident));
        self.expect(TokenKind::Assign, "`=`")?;
        let body = self.parse_alternative()?;
        self.expect(TokenKind::Semi, "`;`")?;
        Ok(Rule { name, body })
    }

    fn parse_alternative(&mut self) -> Result<Expr, ParseError> {
        let mut operands = vec![self.parse_concatenation()?];
        while self.eat(TokenKind::Pipe) {
            operands.push(self.parse_concatenation()?);
        }
        Ok(match operands.len() {
            1 => operands.remove(0),
            _ => Expr::Alternative(operands),
        })
    }

    fn parse_concatenation(&mut self) -> Result<Expr, ParseError> {
        let mut operands = vec![self.parse_exception()?];
        while self.eat(TokenKind::Comma) {
            operands.push(self.parse_exception()?);
        }
        Ok(match operands.len() {
            1 => operands.remove(0),
            _ => Expr::Concatenation(operands),
        })
    }

    fn parse_exception(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_range()?;
        while self.eat(TokenKind::Minus) {
            let subtrahend = self.parse_range()?;
            expr = Expr::Exception(Box::new(expr), Box::new(subtrahend));
        }
        Ok(expr)
    }

    fn parse_range(&mut self) -> Result<Expr, ParseError> {
        let begin = self.parse_atom()?;
        if self.eat(TokenKind::DotDot) {
            let end = self.parse_atom()?;
            return Ok(Expr::Range(Box::new(begin), Box::new(end)));
        }
        Ok(begin)
    }

    fn parse_atom(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.peek().cloned() else {
            return Err(self.error_here("expected a terminal, identifier, or bracketed expression"));
        };
        match token.kind {
            TokenKind::Terminal => {
                self.pos += 1;
                let text = token_text(self.source, &token);
                // strip the enclosing quotes, keep escapes undecoded
                Ok(Expr::Terminal(text[1..text.len() - 1].into()))
            }
            TokenKind::Ident => {
                self.pos += 1;
                Ok(Expr::Identifier(Name::new(token_text(self.source, &token))))
            }
            TokenKind::LParen => {
                self.pos += 1;
                let inner = self.parse_alternative()?;
                self.expect(TokenKind::RParen, "`)`")?;
                Ok(inner)
            }
            TokenKind::LBracket => {
                self.pos += 1;
                let inner = self.parse_alternative()?;
                self.expect(TokenKind::RBracket, "`]`")?;
                Ok(Expr::Optional(Box::new(inner)))
            }
            TokenKind::LBrace => {
                self.pos += 1;
                let inner = self.parse_alternative()?;
                self.expect(TokenKind::RBrace, "`}`")?;
                Ok(Expr::Repeated(Box::new(inner)))
            }
            _ => Err(self.error_here("expected a terminal, identifier, or bracketed expression")),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek().is_some_and(|t| t.kind == kind) {
            self.pos += 1;
            return true;
        }
        false
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token, ParseError> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                let token = token.clone();
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.error_here(&format!("expected {what}"))),
        }
    }

    fn error_here(&self, expectation: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError {
                message: format!(
                    "{expectation}, found `{}`",
                    token_text(self.source, token)
                ),
                span: token.span.clone(),
            },
            None => ParseError {
                message: format!("{expectation}, found end of grammar"),
                span: self.source.len()..self.source.len(),
            },
        }
    }
}
