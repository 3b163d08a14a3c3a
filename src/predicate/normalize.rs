use crate::{
    predicate::ast::{ComparePredicate, Predicate},
    value::{TextMode, Value},
};

///
/// Normalize a predicate into a canonical, deterministic form.
///
/// Normalization guarantees:
/// - Logical equivalence is preserved
/// - Nested AND nodes are flattened
/// - Neutral elements are removed (True / False)
/// - Double negation is eliminated
/// - Negated constants are folded
/// - Child predicates are deterministically ordered
///
/// Constructors themselves never normalize: `not(not(p))` built by hand
/// is structurally distinct from `p` until this pass runs.
///
#[must_use]
pub fn normalize(predicate: &Predicate) -> Predicate {
    match predicate {
        Predicate::True => Predicate::True,
        Predicate::False => Predicate::False,

        Predicate::And(children) => normalize_and(children),
        Predicate::Not(inner) => normalize_not(inner),

        Predicate::Compare(cmp) => Predicate::Compare(cmp.clone()),
    }
}

///
/// Normalize a NOT expression.
///
/// Rules:
/// - NOT (NOT x)  →  x
/// - NOT True     →  False
/// - NOT False    →  True
///
fn normalize_not(inner: &Predicate) -> Predicate {
    match normalize(inner) {
        Predicate::Not(double) => *double,
        Predicate::True => Predicate::False,
        Predicate::False => Predicate::True,
        normalized => Predicate::Not(Box::new(normalized)),
    }
}

///
/// Normalize an AND expression.
///
/// Rules:
/// - AND(True, x)        → x
/// - AND(False, x)       → False
/// - AND(AND(a, b), c)   → AND(a, b, c)
/// - AND()               → True
/// - AND(x)              → x
///
/// Children are sorted deterministically.
///
fn normalize_and(children: &[Predicate]) -> Predicate {
    let mut out = Vec::new();

    for child in children {
        let normalized = normalize(child);

        match normalized {
            Predicate::True => {}
            Predicate::False => return Predicate::False,
            Predicate::And(grandchildren) => out.extend(grandchildren),
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return Predicate::True;
    }
    if out.len() == 1 {
        return out.remove(0);
    }

    out.sort_by_cached_key(sort_key);
    Predicate::And(out)
}

///
/// Generate a deterministic, length-prefixed key for a predicate.
///
/// This key is used **only for sorting**, not for display.
/// Ordering ensures stable normalization and predictable equality.
///
fn sort_key(predicate: &Predicate) -> Vec<u8> {
    let mut out = Vec::new();
    encode_predicate_key(&mut out, predicate);
    out
}

const PRED_TRUE: u8 = 0x00;
const PRED_FALSE: u8 = 0x01;
const PRED_AND: u8 = 0x02;
const PRED_NOT: u8 = 0x03;
const PRED_COMPARE: u8 = 0x04;

const VALUE_NULL: u8 = 0x00;
const VALUE_BOOL: u8 = 0x01;
const VALUE_INT: u8 = 0x02;
const VALUE_TEXT: u8 = 0x03;
const VALUE_LIST: u8 = 0x04;

// Encode predicate keys with length-prefixed segments to avoid collisions.
fn encode_predicate_key(out: &mut Vec<u8>, predicate: &Predicate) {
    match predicate {
        Predicate::True => out.push(PRED_TRUE),
        Predicate::False => out.push(PRED_FALSE),
        Predicate::And(children) => {
            out.push(PRED_AND);
            push_len(out, children.len());
            for child in children {
                push_predicate(out, child);
            }
        }
        Predicate::Not(inner) => {
            out.push(PRED_NOT);
            push_predicate(out, inner);
        }
        Predicate::Compare(ComparePredicate {
            field,
            op,
            value,
            mode,
        }) => {
            out.push(PRED_COMPARE);
            push_str(out, field);
            out.push(op.tag());
            push_value(out, value);
            out.push(match mode {
                TextMode::Cs => 0,
                TextMode::Ci => 1,
            });
        }
    }
}

fn encode_value_key(out: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Null => out.push(VALUE_NULL),
        Value::Bool(v) => {
            out.push(VALUE_BOOL);
            out.push(u8::from(*v));
        }
        Value::Int(v) => {
            out.push(VALUE_INT);
            out.extend_from_slice(&v.to_be_bytes());
        }
        Value::Text(v) => {
            out.push(VALUE_TEXT);
            push_str(out, v);
        }
        Value::List(items) => {
            out.push(VALUE_LIST);
            push_len(out, items.len());
            for item in items {
                push_value(out, item);
            }
        }
    }
}

fn push_predicate(out: &mut Vec<u8>, predicate: &Predicate) {
    push_framed(out, |buf| encode_predicate_key(buf, predicate));
}

fn push_value(out: &mut Vec<u8>, value: &Value) {
    push_framed(out, |buf| encode_value_key(buf, value));
}

fn push_len(out: &mut Vec<u8>, len: usize) {
    // NOTE: Sort keys are diagnostics-only; overflow saturates for determinism.
    let len = u64::try_from(len).unwrap_or(u64::MAX);
    out.extend_from_slice(&len.to_be_bytes());
}

// Write one nested deterministic payload as [len:u64be][payload] without
// allocating an intermediate buffer.
fn push_framed(out: &mut Vec<u8>, encode: impl FnOnce(&mut Vec<u8>)) {
    let len_pos = out.len();
    out.extend_from_slice(&0u64.to_be_bytes());
    let payload_start = out.len();

    encode(out);

    let payload_len = out.len().saturating_sub(payload_start);
    let payload_len = u64::try_from(payload_len).unwrap_or(u64::MAX);
    out[len_pos..len_pos + std::mem::size_of::<u64>()].copy_from_slice(&payload_len.to_be_bytes());
}

fn push_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    push_len(out, bytes.len());
    out.extend_from_slice(bytes);
}

fn push_str(out: &mut Vec<u8>, s: &str) {
    push_bytes(out, s.as_bytes());
}

///
/// TESTS
///
