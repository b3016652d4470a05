//! Compilation error taxonomy.
//!
//! Every variant aborts the whole compilation: a half-built predicate table
//! could silently misclassify characters later, which is strictly worse
//! than a loud upfront failure. Callers treat these as fatal defects in the
//! supplied grammar, never as transient conditions to retry.

use crate::parser::Name;

/// Error during predicate compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// An identifier names neither a declared rule nor a predefined entry.
    #[error("undefined identifier `{0}`")]
    UndefinedIdentifier(Name),

    /// A declared rule name collides with a predefined entry or an earlier
    /// rule of the same grammar.
    #[error("duplicate identifier `{0}`")]
    DuplicateIdentifier(Name),

    /// A construct that cannot be reduced to a single-character predicate.
    #[error("{construct} is not supported in a character predicate grammar: `{text}`")]
    UnsupportedConstruct {
        construct: &'static str,
        text: String,
    },

    /// A range bound does not reduce to exactly one literal character.
    #[error("invalid range bound (`{text}`): {reason}")]
    InvalidRangeBound {
        reason: &'static str,
        text: String,
    },

    /// A rule reference cycle. Self references (`A = A;`) and mutual
    /// cycles are rejected outright; a character predicate has no base
    /// case to escape through.
    #[error("circular reference: {chain}")]
    CircularReference { chain: String },

    /// A composite fold produced no predicate. Guards against
    /// implementation bugs, not against user grammars.
    #[error("internal invariant violated: no predicate produced for `{text}`")]
    InternalInvariantViolation { text: String },
}
