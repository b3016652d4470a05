//! The predicate compiler: grammar AST → one predicate per rule.
//!
//! Three stages over a call-scoped state, nothing shared between calls:
//!
//! 1. **Pre-pass**: record every declared rule's body and install a
//!    `Pending` slot for its name, before any body is visited. This is
//!    what makes declaration order irrelevant to references.
//! 2. **Reference check**: walk every body and fail on the first
//!    identifier that names neither a declared rule nor a predefined
//!    entry. No predicate is built past a dangling name.
//! 3. **Fold**: resolve every rule in declaration order. Compiling an
//!    identifier whose slot is still `Pending` compiles that rule first,
//!    so forward references resolve to finished predicates; hitting an
//!    `InProgress` slot is a genuine cycle and aborts with the reference
//!    chain.
//!
//! Every slot is `Resolved` before the table is returned. The returned
//! table is immutable and safe for unlimited concurrent reads.

mod error;


use indexmap::{IndexMap, IndexSet};

use chargram_core::{CharPredicate, unescape};

use crate::parser::{Expr, Grammar, Name};

pub use error::CompileError;

/// Ordered name → predicate mapping; iteration follows insertion order.
pub type PredicateTable = IndexMap<Name, CharPredicate>;

/// Compiles a grammar into one predicate per declared rule.
///
/// `predefined` seeds externally defined character classes that rule
/// bodies may reference by name. The returned table holds the predefined
/// entries first, in their given order, then one entry per declared rule
/// in declaration order. Each rule's predicate displays the rule's name.
///
/// Any error aborts the whole compilation; no partial table escapes.
pub fn char_predicates(
    grammar: &Grammar,
    predefined: &PredicateTable,
) -> Result<PredicateTable, CompileError> {
    let mut compiler = Compiler {
        rules: IndexMap::new(),
        slots: IndexMap::new(),
        predefined,
        chain: Vec::new(),
    };

    compiler.collect_rules(grammar)?;
    compiler.check_references(grammar)?;
    for rule in &grammar.rules {
        compiler.resolve_rule(&rule.name)?;
    }

    let mut table = predefined.clone();
    for (name, slot) in compiler.slots {
        match slot {
            Slot::Resolved(predicate) => {
                table.insert(name, predicate);
            }
            Slot::Pending | Slot::InProgress => {
                return Err(CompileError::InternalInvariantViolation {
                    text: name.to_string(),
                });
            }
        }
    }
    Ok(table)
}

/// Forward-reference slot for one declared rule.
#[derive(Debug)]
enum Slot {
    /// Installed by the pre-pass, body not yet compiled.
    Pending,
    /// Body currently being compiled; hitting this is a cycle.
    InProgress,
    /// Finished. Never replaced once installed.
    Resolved(CharPredicate),
}

struct Compiler<'g> {
    /// Declared name → AST body, for bound resolution and on-demand folds.
    rules: IndexMap<Name, &'g Expr>,
    slots: IndexMap<Name, Slot>,
    predefined: &'g PredicateTable,
    /// Active resolution path, for cycle reporting.
    chain: Vec<Name>,
}

impl<'g> Compiler<'g> {
    fn collect_rules(&mut self, grammar: &'g Grammar) -> Result<(), CompileError> {
        for rule in &grammar.rules {
            if self.predefined.contains_key(&rule.name) || self.rules.contains_key(&rule.name) {
                return Err(CompileError::DuplicateIdentifier(rule.name.clone()));
            }
            self.rules.insert(rule.name.clone(), &rule.body);
            self.slots.insert(rule.name.clone(), Slot::Pending);
        }
        Ok(())
    }

    fn check_references(&self, grammar: &Grammar) -> Result<(), CompileError> {
        for rule in &grammar.rules {
            self.check_expr(&rule.body)?;
        }
        Ok(())
    }

    fn check_expr(&self, expr: &Expr) -> Result<(), CompileError> {
        match expr {
            Expr::Identifier(name) => {
                if !self.slots.contains_key(name) && !self.predefined.contains_key(name) {
                    return Err(CompileError::UndefinedIdentifier(name.clone()));
                }
            }
            Expr::Alternative(operands) | Expr::Concatenation(operands) => {
                for operand in operands {
                    self.check_expr(operand)?;
                }
            }
            Expr::Exception(a, b) | Expr::Range(a, b) => {
                self.check_expr(a)?;
                self.check_expr(b)?;
            }
            Expr::Optional(inner) | Expr::Repeated(inner) => self.check_expr(inner)?,
            Expr::Terminal(_) => {}
        }
        Ok(())
    }

    fn resolve_rule(&mut self, name: &Name) -> Result<CharPredicate, CompileError> {
        match self.slots.get(name) {
            Some(Slot::Resolved(predicate)) => return Ok(predicate.clone()),
            Some(Slot::InProgress) => return Err(self.cycle_error(name)),
            Some(Slot::Pending) => {}
            None => return Err(CompileError::UndefinedIdentifier(name.clone())),
        }

        self.slots.insert(name.clone(), Slot::InProgress);
        self.chain.push(name.clone());

        let body = *self
            .rules
            .get(name)
            .ok_or_else(|| CompileError::UndefinedIdentifier(name.clone()))?;
        let predicate = self.compile_expr(body)?.named(name.as_str());

        self.chain.pop();
        self.slots
            .insert(name.clone(), Slot::Resolved(predicate.clone()));
        Ok(predicate)
    }

    fn compile_expr(&mut self, expr: &Expr) -> Result<CharPredicate, CompileError> {
        match expr {
            Expr::Alternative(operands) => {
                let mut compiled = Vec::with_capacity(operands.len());
                for operand in operands {
                    compiled.push(self.compile_expr(operand)?);
                }
                let folded = CharPredicate::or_all(compiled).ok_or_else(|| {
                    CompileError::InternalInvariantViolation {
                        text: expr.to_string(),
                    }
                })?;
                Ok(folded.named(expr.to_string()))
            }
            Expr::Exception(minuend, subtrahend) => {
                let keep = self.compile_expr(minuend)?;
                let drop = self.compile_expr(subtrahend)?;
                Ok(keep.and_not(drop).named(expr.to_string()))
            }
            Expr::Range(begin, end) => {
                let mut visited = IndexSet::new();
                let lo = self.resolve_bound(begin, &mut visited)?;
                visited.clear();
                let hi = self.resolve_bound(end, &mut visited)?;
                if lo > hi {
                    return Err(CompileError::InvalidRangeBound {
                        reason: "begin bound is above the end bound",
                        text: expr.to_string(),
                    });
                }
                Ok(CharPredicate::range(lo, hi).named(expr.to_string()))
            }
            Expr::Identifier(name) => match self.predefined.get(name) {
                Some(predicate) => Ok(predicate.clone()),
                None => self.resolve_rule(name),
            },
            Expr::Terminal(raw) => {
                let decoded = unescape(raw);
                Ok(CharPredicate::any_of(&decoded).named(expr.to_string()))
            }
            Expr::Concatenation(_) => Err(self.unsupported("Concatenation", expr)),
            Expr::Optional(_) => Err(self.unsupported("Optional", expr)),
            Expr::Repeated(_) => Err(self.unsupported("Repeated", expr)),
        }
    }

    /// Reduces a range bound to one literal character.
    ///
    /// Only `Terminal`-or-`Identifier` chains are acceptable: a terminal
    /// must decode to exactly one character, an identifier is chased
    /// through its rule's body. The chase reads bodies, not slots, so
    /// forward declarations work here too; `visited` catches chains that
    /// loop.
    fn resolve_bound(
        &self,
        bound: &Expr,
        visited: &mut IndexSet<Name>,
    ) -> Result<char, CompileError> {
        match bound {
            Expr::Terminal(raw) => {
                let decoded = unescape(raw);
                let mut chars = decoded.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(CompileError::InvalidRangeBound {
                        reason: "terminal must decode to exactly one character",
                        text: bound.to_string(),
                    }),
                }
            }
            Expr::Identifier(name) => {
                if !visited.insert(name.clone()) {
                    let mut parts: Vec<&str> = visited.iter().map(Name::as_str).collect();
                    parts.push(name.as_str());
                    return Err(CompileError::CircularReference {
                        chain: parts.join(" -> "),
                    });
                }
                match self.rules.get(name) {
                    Some(body) => self.resolve_bound(body, visited),
                    None => Err(CompileError::InvalidRangeBound {
                        reason: "identifier does not name a grammar rule",
                        text: bound.to_string(),
                    }),
                }
            }
            other => Err(CompileError::InvalidRangeBound {
                reason: "expected a terminal or an identifier leading to one",
                text: other.to_string(),
            }),
        }
    }

    fn cycle_error(&self, name: &Name) -> CompileError {
        let start = self
            .chain
            .iter()
            .position(|n| n == name)
            .unwrap_or_default();
        let mut parts: Vec<&str> = self.chain[start..].iter().map(Name::as_str).collect();
        parts.push(name.as_str());
        CompileError::CircularReference {
            chain: parts.join(" -> "),
        }
    }

    fn unsupported(&self, construct: &'static str, expr: &Expr) -> CompileError {
        CompileError::UnsupportedConstruct {
            construct,
            text: expr.to_string(),
        }
    }
}
