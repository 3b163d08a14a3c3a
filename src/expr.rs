use crate::{
    predicate::Predicate,
    value::Value,
};
use serde::{Deserialize, Serialize};

///
/// FilterExpr
///
/// Serialized, evaluation-agnostic predicate language.
///
/// This enum is intentionally isomorphic to the constructor surface of
/// `Predicate` that is:
/// - deterministic
/// - safe across API boundaries
///
/// It carries an explicit `Or` node for callers' convenience; lowering
/// expresses it through the derived `or` combinator, so the core AST
/// stays on its minimal primitive set.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub enum FilterExpr {
    /// Always true.
    True,
    /// Always false.
    False,

    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),

    // ─────────────────────────────────────────────────────────────
    // Atoms
    // ─────────────────────────────────────────────────────────────
    /// Scalar equality.
    Eq { field: String, value: Value },

    /// List field contains value.
    Contains { field: String, value: Value },

    /// Case-sensitive substring match.
    TextContains { field: String, value: Value },

    /// Case-insensitive substring match.
    TextContainsCi { field: String, value: Value },
}

impl FilterExpr {
    // ─────────────────────────────────────────────────────────────
    // Lowering
    // ─────────────────────────────────────────────────────────────

    #[must_use]
    pub fn lower(&self) -> Predicate {
        match self {
            Self::True => Predicate::always(),
            Self::False => Predicate::never(),

            Self::And(xs) => Predicate::all_of(xs.iter().map(Self::lower)),
            Self::Or(xs) => Predicate::any_of(xs.iter().map(Self::lower)),
            Self::Not(x) => Predicate::not(x.lower()),

            Self::Eq { field, value } => Predicate::eq(field.clone(), value.clone()),

            Self::Contains { field, value } => Predicate::contains(field.clone(), value.clone()),

            Self::TextContains { field, value } => {
                Predicate::text_contains(field.clone(), value.clone())
            }

            Self::TextContainsCi { field, value } => {
                Predicate::text_contains_ci(field.clone(), value.clone())
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Boolean
    // ─────────────────────────────────────────────────────────────

    #[must_use]
    pub const fn and(exprs: Vec<Self>) -> Self {
        Self::And(exprs)
    }

    #[must_use]
    pub const fn or(exprs: Vec<Self>) -> Self {
        Self::Or(exprs)
    }

    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(expr: Self) -> Self {
        Self::Not(Box::new(expr))
    }

    // ─────────────────────────────────────────────────────────────
    // Atoms
    // ─────────────────────────────────────────────────────────────

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn contains(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Contains {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn text_contains(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::TextContains {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn text_contains_ci(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::TextContainsCi {
            field: field.into(),
            value: value.into(),
        }
    }
}

///
/// TESTS
///
