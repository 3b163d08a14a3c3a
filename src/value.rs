use serde::{Deserialize, Serialize};
use std::borrow::Cow;

///
/// TextMode
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum TextMode {
    Cs, // case-sensitive
    Ci, // case-insensitive
}

///
/// Value
/// the structural literal type atoms compare record fields against
///
/// Null → the field's value is Option::None.
///

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
    List(Vec<Self>),
}

impl Value {
    #[must_use]
    pub const fn as_text(&self) -> Option<&String> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    ///
    /// TEXT COMPARISON
    ///

    fn fold_ci(s: &str) -> Cow<'_, str> {
        if s.is_ascii() {
            return Cow::Owned(s.to_ascii_lowercase());
        }
        // NOTE: Unicode fallback — to_lowercase for non-ASCII.
        Cow::Owned(s.to_lowercase())
    }

    fn text_with_mode(s: &'_ str, mode: TextMode) -> Cow<'_, str> {
        match mode {
            TextMode::Cs => Cow::Borrowed(s),
            TextMode::Ci => Self::fold_ci(s),
        }
    }

    fn text_op(&self, other: &Self, mode: TextMode, f: impl Fn(&str, &str) -> bool) -> Option<bool> {
        let (a, b) = (self.as_text()?, other.as_text()?);
        let a = Self::text_with_mode(a, mode);
        let b = Self::text_with_mode(b, mode);
        Some(f(&a, &b))
    }

    /// Case-sensitive/insensitive equality check for text values.
    #[must_use]
    pub fn text_eq(&self, other: &Self, mode: TextMode) -> Option<bool> {
        self.text_op(other, mode, |a, b| a == b)
    }

    /// Check whether `needle` is a substring of `self` under the given text mode.
    #[must_use]
    pub fn text_contains(&self, needle: &Self, mode: TextMode) -> Option<bool> {
        self.text_op(needle, mode, |a, b| a.contains(b))
    }

    ///
    /// MEMBERSHIP
    ///

    /// Check whether a list value contains an element equal to `needle`.
    /// `None` when `self` is not a list.
    #[must_use]
    pub fn contains(&self, needle: &Self) -> Option<bool> {
        self.as_list()
            .map(|items| items.iter().any(|item| item == needle))
    }

}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

///
/// TESTS
///
