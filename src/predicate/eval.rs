use crate::{
    predicate::ast::{CompareOp, ComparePredicate, Predicate},
    record::{FieldPresence, Record},
    value::{TextMode, Value},
};

///
/// Evaluate a predicate against a single record.
///
/// This function performs **pure runtime evaluation**:
/// - no schema access
/// - no validation
///
/// Evaluation is total: every predicate tree yields exactly one boolean
/// for every record. A missing field makes the enclosing atom evaluate
/// to `false`, and any comparison that is undefined for the operand
/// types evaluates to `false`. Conjunction short-circuits left to right.
///
#[must_use]
pub fn eval<R: Record + ?Sized>(record: &R, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::True => true,
        Predicate::False => false,

        Predicate::And(children) => children.iter().all(|child| eval(record, child)),
        Predicate::Not(inner) => !eval(record, inner),

        Predicate::Compare(cmp) => eval_compare(record, cmp),
    }
}

///
/// Evaluate a single comparison atom against a record.
///
/// Returns `false` if:
/// - the field is missing
/// - the comparison is not defined for the operand types
///
fn eval_compare<R: Record + ?Sized>(record: &R, cmp: &ComparePredicate) -> bool {
    let ComparePredicate {
        field,
        op,
        value,
        mode,
    } = cmp;

    let FieldPresence::Present(actual) = record.field(field) else {
        return false;
    };

    match op {
        CompareOp::Eq => eq_values(&actual, value, *mode),

        CompareOp::Contains => contains(&actual, value, *mode),

        // NOTE: Invalid text comparisons are treated as non-matches.
        CompareOp::TextContains => actual.text_contains(value, *mode).unwrap_or(false),
    }
}

///
/// Equality under a text mode. Non-text operands fall back to strict
/// structural equality.
///
fn eq_values(a: &Value, b: &Value, mode: TextMode) -> bool {
    match mode {
        TextMode::Cs => a == b,
        TextMode::Ci => a.text_eq(b, TextMode::Ci).unwrap_or_else(|| a == b),
    }
}

///
/// Check whether a collection contains another value.
///
/// CONTRACT: text substring matching uses the TextContains atom only.
///
fn contains(actual: &Value, needle: &Value, mode: TextMode) -> bool {
    if matches!(actual, Value::Text(_)) {
        return false;
    }

    let Value::List(items) = actual else {
        return false;
    };

    items.iter().any(|item| eq_values(item, needle, mode))
}
