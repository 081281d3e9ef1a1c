use proc_macro2::TokenStream;
use quote::ToTokens;

use crate::{
    diagnostic::Diagnostic, expand, generate::GeneratedDeclaration, options::ExpansionContext,
};

type Expander =
    fn(&syn::DeriveInput, &ExpansionContext) -> Result<Vec<GeneratedDeclaration>, Diagnostic>;

pub(crate) struct Registration {
    name: &'static str,
    expand: Expander,
}

const MACROS: &[Registration] = &[Registration {
    name: "CaseInsensitive",
    expand: expand::case_insensitive,
}];

pub(crate) fn lookup(name: &str) -> Option<&'static Registration> {
    MACROS.iter().find(|registration| registration.name == name)
}

impl Registration {
    /// Runs the expander and renders its result, either the generated
    /// declarations or a `compile_error!` invocation.
    pub(crate) fn run(&self, input: &syn::DeriveInput) -> TokenStream {
        let context = match ExpansionContext::from_attrs(&input.attrs) {
            Ok(context) => context,
            Err(e) => return e.into_compile_error(),
        };

        match (self.expand)(input, &context) {
            Ok(declarations) => declarations
                .iter()
                .map(ToTokens::to_token_stream)
                .collect(),
            Err(diagnostic) => diagnostic.into_compile_error(),
        }
    }
}
