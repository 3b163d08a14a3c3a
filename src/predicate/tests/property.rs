use crate::{
    predicate::{Predicate, eval, normalize},
    value::Value,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

type TestRecord = BTreeMap<String, Value>;

const FIELDS: [&str; 4] = ["a", "b", "c", "d"];

fn arb_field() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(FIELDS[0].to_string()),
        Just(FIELDS[1].to_string()),
        Just(FIELDS[2].to_string()),
        Just(FIELDS[3].to_string()),
    ]
}

fn arb_scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        "[a-zA-Z0-9_]{0,8}".prop_map(Value::Text),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        arb_scalar_value(),
        prop::collection::vec(arb_scalar_value(), 0..4).prop_map(Value::List),
    ]
}

fn arb_atom() -> impl Strategy<Value = Predicate> {
    prop_oneof![
        (arb_field(), arb_value()).prop_map(|(field, value)| Predicate::eq(field, value)),
        (arb_field(), arb_scalar_value())
            .prop_map(|(field, value)| Predicate::contains(field, value)),
        (arb_field(), arb_scalar_value())
            .prop_map(|(field, value)| Predicate::text_contains(field, value)),
        (arb_field(), arb_scalar_value())
            .prop_map(|(field, value)| Predicate::text_contains_ci(field, value)),
    ]
}

fn arb_predicate() -> impl Strategy<Value = Predicate> {
    let leaf = prop_oneof![
        Just(Predicate::always()),
        Just(Predicate::never()),
        arb_atom(),
    ];

    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Predicate::And),
            (inner.clone(), inner.clone())
                .prop_map(|(p, q)| Predicate::or(p, q)),
            inner.prop_map(Predicate::not),
        ]
    })
}

fn arb_record() -> impl Strategy<Value = TestRecord> {
    prop::collection::vec(
        prop_oneof![Just(None), arb_value().prop_map(Some)],
        FIELDS.len(),
    )
    .prop_map(|values| {
        let mut fields = BTreeMap::new();
        for (name, value) in FIELDS.iter().zip(values) {
            if let Some(value) = value {
                fields.insert((*name).to_string(), value);
            }
        }
        fields
    })
}

proptest! {
    // ─────────────────────────────────────────────────────────────
    // Conjunction laws
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn and_is_associative(p in arb_predicate(), q in arb_predicate(), r in arb_predicate(), x in arb_record()) {
        let left = Predicate::and(p.clone(), Predicate::and(q.clone(), r.clone()));
        let right = Predicate::and(Predicate::and(p, q), r);
        prop_assert_eq!(eval(&x, &left), eval(&x, &right));
    }

    #[test]
    fn and_is_commutative(p in arb_predicate(), q in arb_predicate(), x in arb_record()) {
        let left = Predicate::and(p.clone(), q.clone());
        let right = Predicate::and(q, p);
        prop_assert_eq!(eval(&x, &left), eval(&x, &right));
    }

    #[test]
    fn always_is_and_identity(p in arb_predicate(), x in arb_record()) {
        let combined = Predicate::and(p.clone(), Predicate::always());
        prop_assert_eq!(eval(&x, &combined), eval(&x, &p));
    }

    #[test]
    fn never_absorbs_and(p in arb_predicate(), x in arb_record()) {
        let combined = Predicate::and(p, Predicate::never());
        prop_assert!(!eval(&x, &combined));
    }

    // ─────────────────────────────────────────────────────────────
    // Derived disjunction laws
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn or_is_associative(p in arb_predicate(), q in arb_predicate(), r in arb_predicate(), x in arb_record()) {
        let left = Predicate::or(p.clone(), Predicate::or(q.clone(), r.clone()));
        let right = Predicate::or(Predicate::or(p, q), r);
        prop_assert_eq!(eval(&x, &left), eval(&x, &right));
    }

    #[test]
    fn or_is_commutative(p in arb_predicate(), q in arb_predicate(), x in arb_record()) {
        let left = Predicate::or(p.clone(), q.clone());
        let right = Predicate::or(q, p);
        prop_assert_eq!(eval(&x, &left), eval(&x, &right));
    }

    #[test]
    fn never_is_or_identity(p in arb_predicate(), x in arb_record()) {
        let combined = Predicate::or(p.clone(), Predicate::never());
        prop_assert_eq!(eval(&x, &combined), eval(&x, &p));
    }

    #[test]
    fn always_absorbs_or(p in arb_predicate(), x in arb_record()) {
        let combined = Predicate::or(p, Predicate::always());
        prop_assert!(eval(&x, &combined));
    }

    // ─────────────────────────────────────────────────────────────
    // Negation laws
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn double_negation_is_observationally_identity(p in arb_predicate(), x in arb_record()) {
        let wrapped = Predicate::not(Predicate::not(p.clone()));
        prop_assert_eq!(eval(&x, &wrapped), eval(&x, &p));
    }

    #[test]
    fn de_morgan_holds(p in arb_predicate(), q in arb_predicate(), x in arb_record()) {
        let negated_and = Predicate::not(Predicate::and(p.clone(), q.clone()));
        let or_of_negations = Predicate::or(Predicate::not(p), Predicate::not(q));
        prop_assert_eq!(eval(&x, &negated_and), eval(&x, &or_of_negations));
    }

    #[test]
    fn xor_of_self_is_never(p in arb_predicate(), x in arb_record()) {
        prop_assert!(!eval(&x, &Predicate::xor(p.clone(), p)));
    }

    #[test]
    fn xor_of_negation_is_always(p in arb_predicate(), x in arb_record()) {
        let negated = Predicate::not(p.clone());
        prop_assert!(eval(&x, &Predicate::xor(p, negated)));
    }

    // ─────────────────────────────────────────────────────────────
    // Folded combinators agree with pointwise evaluation
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn folds_agree_with_pointwise(preds in prop::collection::vec(arb_predicate(), 0..5), x in arb_record()) {
        let any = preds.iter().any(|pred| eval(&x, pred));
        let all = preds.iter().all(|pred| eval(&x, pred));

        prop_assert_eq!(eval(&x, &Predicate::any_of(preds.clone())), any);
        prop_assert_eq!(eval(&x, &Predicate::all_of(preds.clone())), all);
        prop_assert_eq!(eval(&x, &Predicate::none_of(preds)), !any);
    }

    // ─────────────────────────────────────────────────────────────
    // Normalization
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn normalization_equivalence(predicate in arb_predicate(), x in arb_record()) {
        let normalized = normalize(&predicate);
        prop_assert_eq!(eval(&x, &predicate), eval(&x, &normalized));
    }

    #[test]
    fn normalization_is_idempotent(predicate in arb_predicate()) {
        let once = normalize(&predicate);
        let twice = normalize(&once);
        prop_assert_eq!(once, twice);
    }
}
