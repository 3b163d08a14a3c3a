//! Rowsift: an immutable, composable predicate algebra over typed records —
//! atoms, boolean combinators, a total evaluator, and the ergonomics exported
//! via the `prelude`.
#![warn(unreachable_pub)]

pub mod expr;
pub mod predicate;
pub mod record;
pub mod schema;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, expression forms, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        predicate::Predicate,
        record::{FieldPresence, Record},
        schema::RecordSchema,
        value::Value,
    };
}
