//! Case-insensitive raw value lookup for enums with `String` raw values.
//!
//! ```
//! use case_insensitive::CaseInsensitive;
//! # use case_insensitive_macros as _;
//!
//! #[derive(Debug, PartialEq, Eq, CaseInsensitive)]
//! #[raw_value(String)]
//! enum Area {
//!     Tokyo,
//!     Nagoya,
//! }
//!
//! assert_eq!(Area::from_raw_value("tokyo"), Some(Area::Tokyo));
//! assert_eq!(Area::from_raw_value("NAGOYA"), Some(Area::Nagoya));
//! assert_eq!(Area::from_raw_value("osaka"), None);
//! assert_eq!(Area::Tokyo.raw_value(), "Tokyo");
//! ```

extern crate self as case_insensitive;

mod error;

pub use case_insensitive_macros::CaseInsensitive;
pub use error::UnknownCase;

/// An enum whose cases can be looked up by their raw value, ignoring case.
///
/// Usually derived, see [`macro@CaseInsensitive`].
pub trait CaseInsensitive: Sized {
    /// Returns the case whose raw value equals `raw_value` after lowercasing
    /// both, or `None` if there is no such case.
    fn from_raw_value(raw_value: &str) -> Option<Self>;

    /// The raw value of this case, which is its name as declared.
    fn raw_value(&self) -> &'static str;
}

/// An enum that can list all of its cases.
pub trait CaseIterable: Sized {
    /// All cases in declaration order.
    fn all_cases() -> Vec<Self>;
}

/// Like [`CaseInsensitive::from_raw_value`], but fails with [`UnknownCase`].
pub fn parse<T: CaseInsensitive>(value: &str) -> Result<T, UnknownCase> {
    T::from_raw_value(value).ok_or_else(|| UnknownCase::new(value.to_owned()))
}
