//! Typed grammar AST.
//!
//! The parser produces this tree; the compiler consumes it. The node set is
//! closed: the compiler matches exhaustively, and the constructs that cannot
//! become single-character predicates (`Concatenation`, `Optional`,
//! `Repeated`) are carried as variants precisely so the compiler can detect
//! and refuse them instead of approximating.
//!
//! `Display` reconstructs each node's textual form; error messages and
//! predicate labels lean on it.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// A rule identifier: a cheap-to-clone shared string handle.
///
/// Unique among rule definitions within one grammar (enforced during the
/// compiler pre-pass). `Borrow<str>` lets name-keyed maps be queried with
/// plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Arc<str>);

impl Name {
    pub fn new(name: &str) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered sequence of rule definitions.
///
/// Comments and layout never reach the AST; the parser discards them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grammar {
    pub rules: Vec<Rule>,
}

/// One `NAME = expression ;` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: Name,
    pub body: Expr,
}

/// A right-hand-side expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// `a | b | c`, ordered operands, at least one.
    Alternative(Vec<Expr>),
    /// `a , b`. Rejected by the compiler, carried for detection.
    Concatenation(Vec<Expr>),
    /// `a - b`: minuend, subtrahend.
    Exception(Box<Expr>, Box<Expr>),
    /// `a..b`: begin bound, end bound.
    Range(Box<Expr>, Box<Expr>),
    /// `[ a ]`. Rejected by the compiler, carried for detection.
    Optional(Box<Expr>),
    /// `{ a }`. Rejected by the compiler, carried for detection.
    Repeated(Box<Expr>),
    /// A reference to a declared rule or a predefined predicate.
    Identifier(Name),
    /// A quoted literal; holds the raw text between the quotes, escapes
    /// undecoded. The compiler decodes on use.
    Terminal(Box<str>),
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {};", self.name, self.body)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Alternative(operands) => write_joined(f, operands, " | "),
            Expr::Concatenation(operands) => write_joined(f, operands, " , "),
            Expr::Exception(minuend, subtrahend) => write!(f, "{minuend} - {subtrahend}"),
            Expr::Range(begin, end) => write!(f, "{begin}..{end}"),
            Expr::Optional(inner) => write!(f, "[ {inner} ]"),
            Expr::Repeated(inner) => write!(f, "{{ {inner} }}"),
            Expr::Identifier(name) => write!(f, "{name}"),
            Expr::Terminal(raw) => write!(f, "\"{raw}\""),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, operands: &[Expr], sep: &str) -> fmt::Result {
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{operand}")?;
    }
    Ok(())
}
