use crate::{
    predicate::ast::{CompareOp, ComparePredicate, Predicate},
    schema::{FieldType, RecordSchema},
    value::Value,
};
use thiserror::Error as ThisError;

///
/// ValidateError
///
/// Construction-time rejection of a predicate that cannot be meaningfully
/// evaluated against records of a given schema. Evaluation itself has no
/// error surface; every type question is settled here, before a predicate
/// is ever run.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValidateError {
    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    #[error("field '{field}' has type {expected:?}, which literal {got:?} does not inhabit")]
    TypeMismatch {
        field: String,
        expected: FieldType,
        got: Value,
    },

    #[error("membership test on field '{field}', which is not a list field")]
    NotAList { field: String },

    #[error("substring test on field '{field}', which is not a text field")]
    NotText { field: String },
}

///
/// Validate a predicate against a record schema.
///
/// Walks the tree and checks every atom:
/// - the field must exist in the schema
/// - an equality literal must inhabit the field's type
/// - a membership test requires a list field and an element-compatible literal
/// - a substring test requires a text field and a text literal
///
/// Constants and combinators are always valid; only atoms can fail.
///
pub fn validate(schema: &RecordSchema, predicate: &Predicate) -> Result<(), ValidateError> {
    match predicate {
        Predicate::True | Predicate::False => Ok(()),

        Predicate::And(children) => children.iter().try_for_each(|child| validate(schema, child)),
        Predicate::Not(inner) => validate(schema, inner),

        Predicate::Compare(cmp) => validate_compare(schema, cmp),
    }
}

fn validate_compare(schema: &RecordSchema, cmp: &ComparePredicate) -> Result<(), ValidateError> {
    let field_ty = schema
        .field(&cmp.field)
        .ok_or_else(|| ValidateError::UnknownField {
            field: cmp.field.clone(),
        })?;

    match cmp.op {
        CompareOp::Eq => expect_inhabits(&cmp.field, field_ty, &cmp.value),

        CompareOp::Contains => {
            let elem = field_ty.element().ok_or_else(|| ValidateError::NotAList {
                field: cmp.field.clone(),
            })?;

            expect_inhabits(&cmp.field, elem, &cmp.value)
        }

        CompareOp::TextContains => {
            if !field_ty.is_text() {
                return Err(ValidateError::NotText {
                    field: cmp.field.clone(),
                });
            }

            expect_inhabits(&cmp.field, &FieldType::Text, &cmp.value)
        }
    }
}

fn expect_inhabits(field: &str, expected: &FieldType, got: &Value) -> Result<(), ValidateError> {
    if expected.matches_value(got) {
        Ok(())
    } else {
        Err(ValidateError::TypeMismatch {
            field: field.to_string(),
            expected: expected.clone(),
            got: got.clone(),
        })
    }
}
