use quote::ToTokens as _;
use syn::{ext::IdentExt as _, spanned::Spanned as _};

use crate::diagnostic::{Diagnostic, RawValueProblem};

const RAW_VALUE_ATTRIBUTE: &str = "raw_value";

#[derive(Debug, Clone, Copy)]
pub(crate) enum DeclarationKind<'a> {
    Enum(&'a syn::DataEnum),
    Struct,
    Union,
}

impl<'a> DeclarationKind<'a> {
    pub(crate) const fn of(input: &'a syn::DeriveInput) -> Self {
        match input.data {
            syn::Data::Enum(ref data) => Self::Enum(data),
            syn::Data::Struct(_) => Self::Struct,
            syn::Data::Union(_) => Self::Union,
        }
    }

    pub(crate) const fn describe(self) -> &'static str {
        match self {
            Self::Enum(_) => "enum",
            Self::Struct => "struct",
            Self::Union => "union",
        }
    }
}

/// One enum case together with the raw value it is looked up by.
#[derive(Debug, Clone)]
pub(crate) struct Case {
    pub(crate) ident: syn::Ident,
    pub(crate) raw_value: String,
}

/// Checks that the declaration carries `#[raw_value(String)]`.
///
/// Only the first `raw_value` attribute is considered.
pub(crate) fn require_string_raw_value(input: &syn::DeriveInput) -> Result<(), Diagnostic> {
    let Some(attr) = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident(RAW_VALUE_ATTRIBUTE))
    else {
        return Err(Diagnostic::unsupported_raw_value(
            RawValueProblem::Missing,
            input.ident.span(),
        ));
    };

    let declared = match attr.meta {
        syn::Meta::List(ref list) => list.parse_args::<syn::Type>().ok(),
        syn::Meta::Path(_) | syn::Meta::NameValue(_) => None,
    };

    match declared {
        Some(syn::Type::Path(ref ty)) if ty.qself.is_none() && ty.path.is_ident("String") => {
            Ok(())
        }
        Some(ref ty) => Err(Diagnostic::unsupported_raw_value(
            RawValueProblem::NotString {
                found: ty.to_token_stream().to_string(),
            },
            ty.span(),
        )),
        None => Err(Diagnostic::unsupported_raw_value(
            RawValueProblem::NotString {
                found: attr.meta.to_token_stream().to_string(),
            },
            attr.span(),
        )),
    }
}

/// Collects the cases of the enum in declaration order.
pub(crate) fn cases(data: &syn::DataEnum) -> Result<Vec<Case>, Diagnostic> {
    data.variants
        .iter()
        .map(|variant| {
            let raw_value = variant.ident.unraw().to_string();

            if !matches!(variant.fields, syn::Fields::Unit) {
                return Err(Diagnostic::unsupported_raw_value(
                    RawValueProblem::CaseWithFields { case: raw_value },
                    variant.span(),
                ));
            }

            if let Some((_, ref discriminant)) = variant.discriminant {
                return Err(Diagnostic::unsupported_raw_value(
                    RawValueProblem::CaseWithDiscriminant { case: raw_value },
                    discriminant.span(),
                ));
            }

            Ok(Case {
                ident: variant.ident.clone(),
                raw_value,
            })
        })
        .collect()
}
