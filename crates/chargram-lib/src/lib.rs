#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Chargram: EBNF character-class grammars compiled to char predicates.
//!
//! A grammar names character classes; compiling it yields one predicate per
//! rule, so callers can ask "does character `c` belong to rule `R`" without
//! re-deriving it from grammar text each time. Rules may reference each
//! other regardless of declaration order. Constructs that cannot become a
//! single-character test (concatenation, optional, repetition) are rejected,
//! never approximated.
//!
//! # Example
//!
//! ```
//! use chargram_lib::{PredicateTable, char_predicates, parse};
//!
//! let grammar = parse(
//!     r#"
//!     HEX = DIGIT | "a".."f" | "A".."F";
//!     DIGIT = "0".."9";
//!     "#,
//! )
//! .expect("grammar parses");
//!
//! let predicates = char_predicates(&grammar, &PredicateTable::new()).expect("grammar compiles");
//! assert!(predicates["HEX"].test('b'));
//! assert!(predicates["DIGIT"].test('7'));
//! assert!(!predicates["HEX"].test('g'));
//! ```

pub mod compile;
pub mod parser;

pub use chargram_core::{CharPredicate, unescape};
pub use compile::{CompileError, PredicateTable, char_predicates};
pub use parser::{ParseError, parse};
