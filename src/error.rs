use std::fmt;

/// Returned by [`parse`](crate::parse) when no case matches the given value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCase {
    value: String,
}

impl UnknownCase {
    pub const fn new(value: String) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Gives back the rejected value, e.g. to fall back to it.
    pub fn into_value(self) -> String {
        self.value
    }
}

impl std::error::Error for UnknownCase {}

impl fmt::Display for UnknownCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" does not match any case", self.value)
    }
}
