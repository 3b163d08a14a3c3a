use crate::value::{TextMode, Value};
use std::ops::{BitAnd, BitOr};

///
/// Predicate AST
///
/// Pure, schema-agnostic representation of record predicates.
/// This layer contains no type validation or evaluation semantics;
/// all interpretation occurs in later passes:
///
/// - normalization
/// - validation (schema-aware)
/// - evaluation
///
/// The primitive constructor set is deliberately minimal:
/// `{always, never, not, and}` plus the atoms. Disjunction and every
/// higher combinator are derived from those — `or` is De Morgan
/// (`not(and(not(p), not(q)))`), so the AST carries no `Or` variant.
///

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum CompareOp {
    /// Scalar equality.
    Eq = 0x01,
    /// List membership.
    Contains = 0x02,
    /// Text substring match.
    TextContains = 0x03,
}

impl CompareOp {
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComparePredicate {
    pub field: String,
    pub op: CompareOp,
    pub value: Value,
    pub mode: TextMode,
}

impl ComparePredicate {
    fn new(field: String, op: CompareOp, value: Value) -> Self {
        Self {
            field,
            op,
            value,
            mode: TextMode::Cs,
        }
    }

    /// Construct a comparison predicate with an explicit text mode.
    #[must_use]
    pub fn with_mode(field: impl Into<String>, op: CompareOp, value: Value, mode: TextMode) -> Self {
        Self {
            field: field.into(),
            op,
            value,
            mode,
        }
    }

    #[must_use]
    pub fn eq(field: String, value: Value) -> Self {
        Self::new(field, CompareOp::Eq, value)
    }

    #[must_use]
    pub fn contains(field: String, value: Value) -> Self {
        Self::new(field, CompareOp::Contains, value)
    }

    #[must_use]
    pub fn text_contains(field: String, value: Value) -> Self {
        Self::new(field, CompareOp::TextContains, value)
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Predicate {
    True,
    False,
    And(Vec<Self>),
    Not(Box<Self>),
    Compare(ComparePredicate),
}

impl Predicate {
    // ─────────────────────────────────────────────────────────────
    // Primitives
    // ─────────────────────────────────────────────────────────────

    /// The constant-true predicate; identity of `and`.
    #[must_use]
    pub const fn always() -> Self {
        Self::True
    }

    /// The constant-false predicate; absorbing for `and`, identity of `or`.
    #[must_use]
    pub const fn never() -> Self {
        Self::False
    }

    #[must_use]
    pub fn and(p: Self, q: Self) -> Self {
        Self::And(vec![p, q])
    }

    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(pred: Self) -> Self {
        Self::Not(Box::new(pred))
    }

    // ─────────────────────────────────────────────────────────────
    // Atoms
    // ─────────────────────────────────────────────────────────────

    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::eq(field.into(), value.into()))
    }

    #[must_use]
    pub fn contains(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::contains(field.into(), value.into()))
    }

    #[must_use]
    pub fn text_contains(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::text_contains(field.into(), value.into()))
    }

    #[must_use]
    pub fn text_contains_ci(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::with_mode(
            field.into(),
            CompareOp::TextContains,
            value.into(),
            TextMode::Ci,
        ))
    }

    // ─────────────────────────────────────────────────────────────
    // Derived combinators
    //
    // Each body uses only the primitives above; none of these add
    // expressive power to the AST.
    // ─────────────────────────────────────────────────────────────

    /// Disjunction, derived via De Morgan.
    #[must_use]
    pub fn or(p: Self, q: Self) -> Self {
        Self::not(Self::and(Self::not(p), Self::not(q)))
    }

    /// Exclusive disjunction: exactly one of `p`, `q` holds.
    #[must_use]
    pub fn xor(p: Self, q: Self) -> Self {
        Self::or(
            Self::and(p.clone(), Self::not(q.clone())),
            Self::and(Self::not(p), q),
        )
    }

    /// Conjunction over a sequence; empty input yields `always()`.
    #[must_use]
    pub fn all_of(preds: impl IntoIterator<Item = Self>) -> Self {
        preds
            .into_iter()
            .fold(Self::always(), |acc, pred| Self::and(acc, pred))
    }

    /// Disjunction over a sequence; empty input yields `never()`.
    #[must_use]
    pub fn any_of(preds: impl IntoIterator<Item = Self>) -> Self {
        preds
            .into_iter()
            .fold(Self::never(), |acc, pred| Self::or(acc, pred))
    }

    /// None of the given predicates hold.
    #[must_use]
    pub fn none_of(preds: impl IntoIterator<Item = Self>) -> Self {
        Self::not(Self::any_of(preds))
    }
}

// Operator sugar only; the named combinators are the contract.

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::and(self, rhs)
    }
}

impl BitAnd for &Predicate {
    type Output = Predicate;

    fn bitand(self, rhs: Self) -> Self::Output {
        Predicate::and(self.clone(), rhs.clone())
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::or(self, rhs)
    }
}

impl BitOr for &Predicate {
    type Output = Predicate;

    fn bitor(self, rhs: Self) -> Self::Output {
        Predicate::or(self.clone(), rhs.clone())
    }
}
