use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};

use crate::declaration::Case;

/// The type the generated impls are for.
#[derive(Debug, Clone)]
pub(crate) struct Target {
    pub(crate) ident: syn::Ident,
    pub(crate) generics: syn::Generics,
}

/// One arm of the branch table: a lowercased raw value and the case it selects.
#[derive(Debug, Clone)]
pub(crate) struct Branch {
    pattern: String,
    case: syn::Ident,
}

impl Branch {
    /// Builds one branch per case, in declaration order.
    ///
    /// Cases whose lowercased raw value is already taken by an earlier case
    /// get no branch, so the first declared case wins.
    pub(crate) fn table(cases: &[Case]) -> Vec<Self> {
        let mut seen = HashSet::new();
        cases
            .iter()
            .filter_map(|case| {
                let pattern = case.raw_value.to_lowercase();
                if seen.insert(pattern.clone()) {
                    Some(Self {
                        pattern,
                        case: case.ident.clone(),
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Lookup {
    BranchTable(Vec<Branch>),
    AllCases,
}

/// Implementation of `CaseInsensitive`: the failable initializer and the
/// raw value accessor.
#[derive(Debug, Clone)]
pub(crate) struct Initializer {
    pub(crate) target: Target,
    pub(crate) root: syn::Path,
    pub(crate) cases: Vec<Case>,
    pub(crate) lookup: Lookup,
}

/// Implementation of `CaseIterable`.
#[derive(Debug, Clone)]
pub(crate) struct Extension {
    pub(crate) target: Target,
    pub(crate) root: syn::Path,
    pub(crate) cases: Vec<syn::Ident>,
}

#[derive(Debug, Clone)]
pub(crate) enum GeneratedDeclaration {
    Initializer(Initializer),
    Extension(Extension),
}

impl ToTokens for Initializer {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let root = &self.root;
        let ident = &self.target.ident;
        let (impl_generics, ty_generics, where_clause) = self.target.generics.split_for_impl();

        let lookup = match self.lookup {
            Lookup::BranchTable(ref branches) => {
                let patterns = branches.iter().map(|branch| &branch.pattern);
                let cases = branches.iter().map(|branch| &branch.case);
                quote! {
                    match raw_value.to_lowercase().as_str() {
                        #(#patterns => ::std::option::Option::Some(Self::#cases),)*
                        _ => ::std::option::Option::None,
                    }
                }
            }
            Lookup::AllCases => quote! {
                let raw_value = raw_value.to_lowercase();
                <Self as #root::CaseIterable>::all_cases()
                    .into_iter()
                    .find(|case| {
                        <Self as #root::CaseInsensitive>::raw_value(case).to_lowercase() == raw_value
                    })
            },
        };

        let idents = self.cases.iter().map(|case| &case.ident);
        let raw_values = self.cases.iter().map(|case| &case.raw_value);

        tokens.extend(quote! {
            #[automatically_derived]
            impl #impl_generics #root::CaseInsensitive for #ident #ty_generics #where_clause {
                fn from_raw_value(raw_value: &str) -> ::std::option::Option<Self> {
                    #lookup
                }

                fn raw_value(&self) -> &'static str {
                    match *self {
                        #(Self::#idents => #raw_values,)*
                    }
                }
            }
        });
    }
}

impl ToTokens for Extension {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let root = &self.root;
        let ident = &self.target.ident;
        let (impl_generics, ty_generics, where_clause) = self.target.generics.split_for_impl();
        let cases = &self.cases;

        tokens.extend(quote! {
            #[automatically_derived]
            impl #impl_generics #root::CaseIterable for #ident #ty_generics #where_clause {
                fn all_cases() -> ::std::vec::Vec<Self> {
                    ::std::vec![#(Self::#cases),*]
                }
            }
        });
    }
}

impl ToTokens for GeneratedDeclaration {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match *self {
            Self::Initializer(ref initializer) => initializer.to_tokens(tokens),
            Self::Extension(ref extension) => extension.to_tokens(tokens),
        }
    }
}
