mod ast;
mod eval;
mod normalize;
mod validate;

#[cfg(test)]
mod tests;

pub use ast::{CompareOp, ComparePredicate, Predicate};
pub use eval::eval;
pub use normalize::normalize;
pub use validate::{ValidateError, validate};
