#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Building blocks for chargram predicates.
//!
//! Two pieces:
//! - [`CharPredicate`]: an immutable single-character classification test,
//!   composable via OR and AND-NOT, carrying a human-readable display form
//! - [`unescape`]: backslash-escape decoding for quoted terminal literals
//!
//! The grammar compiler in `chargram-lib` folds grammar rules into these;
//! nothing here knows about grammars.

mod escape;
mod predicate;

pub use escape::unescape;
pub use predicate::CharPredicate;
