//! Textual front end: grammar source → typed AST.
//!
//! The compiler itself never sees source text; it consumes the [`ast`]
//! tree. This module supplies that tree from the written syntax: rules
//! `NAME = body ;`, terminals in single or double quotes, `|` alternation,
//! `-` exception, `..` ranges, `,` concatenation, `[...]` optional,
//! `{...}` repetition, `(...)` grouping, `(* ... *)` comments.
//!
//! Parsing stops at the first error; there is no recovery. A half-parsed
//! grammar is useless to the compiler, which refuses partial input anyway.

pub mod ast;
pub mod lexer;

mod grammar;

#[cfg(test)]
mod grammar_tests;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

pub use ast::{Expr, Grammar, Name, Rule};
pub use lexer::Span;

/// Parses grammar source into the typed AST.
pub fn parse(source: &str) -> Result<Grammar, ParseError> {
    grammar::Parser::new(source).parse_grammar()
}

/// A syntax error: message plus the byte span it points at.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub(crate) message: String,
    pub(crate) span: Span,
}

impl ParseError {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> Span {
        self.span.clone()
    }

    /// Renders the error against its source text, uncolored.
    pub fn render(&self, source: &str) -> String {
        self.render_with(source, Renderer::plain())
    }

    /// Renders the error against its source text with ANSI styling.
    pub fn render_colored(&self, source: &str) -> String {
        self.render_with(source, Renderer::styled())
    }

    fn render_with(&self, source: &str, renderer: Renderer) -> String {
        let span = self.span.start.min(source.len())..self.span.end.min(source.len());
        let snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(span)
                .label(&self.message),
        );
        let report: Vec<Group> = vec![Level::ERROR.primary_title(&self.message).element(snippet)];
        renderer.render(&report)
    }
}
