//! Lexer for the grammar surface syntax.
//!
//! Produces span-based tokens; text is sliced from the source only when
//! needed. Whitespace and `(* ... *)` comments are trivia and never become
//! tokens. Consecutive unrecognized characters are coalesced into single
//! `Garbage` tokens so malformed input yields one diagnostic, not one per
//! character.

use logos::Logos;
use std::ops::Range;

/// Byte span into the source text.
pub type Span = Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"\(\*[^*]*\*+([^)*][^*]*\*+)*\)")]
pub enum TokenKind {
    #[regex(r"[A-Za-z][A-Za-z0-9_]*")]
    Ident,

    /// A quoted literal, single or double quotes, backslash escapes intact.
    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"'([^'\\]|\\.)*'")]
    Terminal,

    #[token("=")]
    Assign,
    #[token(";")]
    Semi,
    #[token("|")]
    Pipe,
    #[token("-")]
    Minus,
    #[token("..")]
    DotDot,
    #[token(",")]
    Comma,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    /// One or more characters the lexer could not classify.
    Garbage,
}

/// Token: kind plus source span, text retrieved via [`token_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Tokenizes source, coalescing consecutive lexer errors into single
/// `Garbage` tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token {
                        kind: TokenKind::Garbage,
                        span: start..lexer.span().start,
                    });
                }
                tokens.push(Token {
                    kind,
                    span: lexer.span(),
                });
            }
            Err(()) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
        }
    }
    if let Some(start) = error_start {
        tokens.push(Token {
            kind: TokenKind::Garbage,
            span: start..source.len(),
        });
    }

    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[token.span.clone()]
}
