#![expect(
    clippy::expect_used,
    reason = "expects are fine for proc macros"
)]

use proc_macro::TokenStream;

mod declaration;
mod diagnostic;
mod expand;
mod generate;
mod options;
mod registry;

/// Derives `case_insensitive::CaseInsensitive` for an enum with `String` raw values.
///
/// The enum has to declare its raw value type with `#[raw_value(String)]`.
/// The raw value of each case is its name as written.
///
/// Options, given as `#[case_insensitive(...)]`:
///
/// - `all_cases`: look cases up through a generated `CaseIterable` impl instead
///   of a `match`
/// - `crate = path`: path of the `case_insensitive` crate, for re-exports
///
/// # Panics
///
/// Only if `CaseInsensitive` were missing from the macro registry, which is a
/// fixed table that always contains it.
#[proc_macro_derive(CaseInsensitive, attributes(raw_value, case_insensitive))]
pub fn case_insensitive(input: TokenStream) -> TokenStream {
    let registration =
        registry::lookup("CaseInsensitive").expect("CaseInsensitive is always registered");

    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    registration.run(&input).into()
}
