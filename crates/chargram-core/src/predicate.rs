//! Single-character classification predicates.
//!
//! A [`CharPredicate`] is an immutable tree of match primitives behind an
//! `Arc`, so clones are cheap and a finished predicate can be tested from
//! any number of threads without synchronization.

use std::fmt;
use std::sync::Arc;

/// A predicate over a single character, paired with a display form.
///
/// Built from the primitives [`any_of`](Self::any_of) and
/// [`range`](Self::range), composed with [`or`](Self::or) /
/// [`or_all`](Self::or_all) and [`and_not`](Self::and_not).
///
/// The display form defaults to a structural rendering; callers that know a
/// better name for the predicate (a rule name, the source text it came from)
/// attach it with [`named`](Self::named). Relabeling never changes accept
/// behavior.
#[derive(Debug, Clone)]
pub struct CharPredicate {
    repr: Arc<Repr>,
    label: Option<Arc<str>>,
}

#[derive(Debug)]
enum Repr {
    /// Matches any single character present in the string.
    AnyOf(Box<str>),
    /// Matches every code point in `lo..=hi`.
    Range { lo: char, hi: char },
    /// Matches if any operand matches.
    Or(Vec<CharPredicate>),
    /// Matches if the first operand matches and the second does not.
    AndNot(CharPredicate, CharPredicate),
}

impl CharPredicate {
    fn from_repr(repr: Repr) -> Self {
        Self {
            repr: Arc::new(repr),
            label: None,
        }
    }

    /// Predicate matching any single character present in `chars`.
    ///
    /// An empty string yields a predicate that matches nothing.
    pub fn any_of(chars: &str) -> Self {
        Self::from_repr(Repr::AnyOf(chars.into()))
    }

    /// Predicate matching every code point in `lo..=hi` inclusive.
    pub fn range(lo: char, hi: char) -> Self {
        Self::from_repr(Repr::Range { lo, hi })
    }

    /// Matches if `self` or `other` matches.
    pub fn or(self, other: Self) -> Self {
        Self::from_repr(Repr::Or(vec![self, other]))
    }

    /// OR-fold over the operands.
    ///
    /// Returns `None` for an empty operand list: there is no meaningful
    /// "fold of nothing" predicate. A single operand is returned unchanged.
    pub fn or_all(operands: Vec<CharPredicate>) -> Option<Self> {
        match operands.len() {
            0 => None,
            1 => operands.into_iter().next(),
            _ => Some(Self::from_repr(Repr::Or(operands))),
        }
    }

    /// Matches if `self` matches and `other` does not.
    pub fn and_not(self, other: Self) -> Self {
        Self::from_repr(Repr::AndNot(self, other))
    }

    /// Replaces the display form without changing accept behavior.
    pub fn named(mut self, label: impl Into<Arc<str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The attached display label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Tests whether `c` belongs to the class this predicate recognizes.
    #[inline]
    pub fn test(&self, c: char) -> bool {
        self.repr.test(c)
    }
}

impl Repr {
    fn test(&self, c: char) -> bool {
        match self {
            Repr::AnyOf(chars) => chars.contains(c),
            Repr::Range { lo, hi } => (*lo..=*hi).contains(&c),
            Repr::Or(operands) => operands.iter().any(|p| p.test(c)),
            Repr::AndNot(keep, drop) => keep.test(c) && !drop.test(c),
        }
    }
}

impl fmt::Display for CharPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            return f.write_str(label);
        }
        match &*self.repr {
            Repr::AnyOf(chars) => write!(f, "\"{}\"", chars.escape_default()),
            Repr::Range { lo, hi } => write!(f, "{lo:?}..{hi:?}"),
            Repr::Or(operands) => {
                f.write_str("(")?;
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{operand}")?;
                }
                f.write_str(")")
            }
            Repr::AndNot(keep, drop) => write!(f, "({keep} - {drop})"),
        }
    }
}
