use crate::{
    declaration::{self, DeclarationKind},
    diagnostic::Diagnostic,
    generate::{Branch, Extension, GeneratedDeclaration, Initializer, Lookup, Target},
    options::{ExpansionContext, Strategy},
};

/// Expands `#[derive(CaseInsensitive)]`.
///
/// The declaration must be an enum declaring `#[raw_value(String)]` whose
/// cases are all unit cases. Returns the generated declarations in the order
/// they are emitted, or the first violated precondition.
pub(crate) fn case_insensitive(
    input: &syn::DeriveInput,
    context: &ExpansionContext,
) -> Result<Vec<GeneratedDeclaration>, Diagnostic> {
    let data = match DeclarationKind::of(input) {
        DeclarationKind::Enum(data) => data,
        kind @ (DeclarationKind::Struct | DeclarationKind::Union) => {
            return Err(Diagnostic::not_an_enum(
                input.ident.to_string(),
                kind.describe(),
                input.ident.span(),
            ));
        }
    };

    declaration::require_string_raw_value(input)?;

    let cases = declaration::cases(data)?;

    let target = Target {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
    };
    let root = context.root().clone();

    let declarations = match context.strategy() {
        Strategy::BranchTable => vec![GeneratedDeclaration::Initializer(Initializer {
            lookup: Lookup::BranchTable(Branch::table(&cases)),
            target,
            root,
            cases,
        })],
        Strategy::AllCases => {
            let extension = Extension {
                target: target.clone(),
                root: root.clone(),
                cases: cases.iter().map(|case| case.ident.clone()).collect(),
            };
            vec![
                GeneratedDeclaration::Initializer(Initializer {
                    lookup: Lookup::AllCases,
                    target,
                    root,
                    cases,
                }),
                GeneratedDeclaration::Extension(extension),
            ]
        }
    };

    Ok(declarations)
}

#[cfg(test)]
mod tests {
    use proc_macro2::TokenStream;
    use quote::{quote, ToTokens};
    use syn::parse_quote;

    use super::*;
    use crate::diagnostic::{Kind, RawValueProblem};

    fn expand(input: &syn::DeriveInput) -> Result<Vec<GeneratedDeclaration>, Diagnostic> {
        let context = ExpansionContext::from_attrs(&input.attrs).unwrap();
        case_insensitive(input, &context)
    }

    fn render(declarations: &[GeneratedDeclaration]) -> String {
        declarations
            .iter()
            .map(ToTokens::to_token_stream)
            .collect::<TokenStream>()
            .to_string()
    }

    #[test]
    fn branch_table_expansion() {
        let input: syn::DeriveInput = parse_quote! {
            #[raw_value(String)]
            enum Area {
                tokyo,
                nagoya,
            }
        };

        let declarations = expand(&input).unwrap();
        assert_eq!(declarations.len(), 1);
        assert!(matches!(
            declarations[0],
            GeneratedDeclaration::Initializer(_)
        ));

        let expected = quote! {
            #[automatically_derived]
            impl ::case_insensitive::CaseInsensitive for Area {
                fn from_raw_value(raw_value: &str) -> ::std::option::Option<Self> {
                    match raw_value.to_lowercase().as_str() {
                        "tokyo" => ::std::option::Option::Some(Self::tokyo),
                        "nagoya" => ::std::option::Option::Some(Self::nagoya),
                        _ => ::std::option::Option::None,
                    }
                }

                fn raw_value(&self) -> &'static str {
                    match *self {
                        Self::tokyo => "tokyo",
                        Self::nagoya => "nagoya",
                    }
                }
            }
        };

        assert_eq!(render(&declarations), expected.to_string());
    }

    #[test]
    fn branch_patterns_are_lowercased_but_raw_values_keep_their_casing() {
        let input: syn::DeriveInput = parse_quote! {
            #[raw_value(String)]
            enum Area {
                Tokyo,
                nagoya,
            }
        };

        let expected = quote! {
            #[automatically_derived]
            impl ::case_insensitive::CaseInsensitive for Area {
                fn from_raw_value(raw_value: &str) -> ::std::option::Option<Self> {
                    match raw_value.to_lowercase().as_str() {
                        "tokyo" => ::std::option::Option::Some(Self::Tokyo),
                        "nagoya" => ::std::option::Option::Some(Self::nagoya),
                        _ => ::std::option::Option::None,
                    }
                }

                fn raw_value(&self) -> &'static str {
                    match *self {
                        Self::Tokyo => "Tokyo",
                        Self::nagoya => "nagoya",
                    }
                }
            }
        };

        assert_eq!(render(&expand(&input).unwrap()), expected.to_string());
    }

    #[test]
    fn all_cases_expansion() {
        let input: syn::DeriveInput = parse_quote! {
            #[raw_value(String)]
            #[case_insensitive(all_cases)]
            enum Area {
                tokyo,
                nagoya,
            }
        };

        let declarations = expand(&input).unwrap();
        assert_eq!(declarations.len(), 2);
        assert!(matches!(
            declarations[1],
            GeneratedDeclaration::Extension(_)
        ));

        let expected = quote! {
            #[automatically_derived]
            impl ::case_insensitive::CaseInsensitive for Area {
                fn from_raw_value(raw_value: &str) -> ::std::option::Option<Self> {
                    let raw_value = raw_value.to_lowercase();
                    <Self as ::case_insensitive::CaseIterable>::all_cases()
                        .into_iter()
                        .find(|case| {
                            <Self as ::case_insensitive::CaseInsensitive>::raw_value(case).to_lowercase() == raw_value
                        })
                }

                fn raw_value(&self) -> &'static str {
                    match *self {
                        Self::tokyo => "tokyo",
                        Self::nagoya => "nagoya",
                    }
                }
            }

            #[automatically_derived]
            impl ::case_insensitive::CaseIterable for Area {
                fn all_cases() -> ::std::vec::Vec<Self> {
                    ::std::vec![Self::tokyo, Self::nagoya]
                }
            }
        };

        assert_eq!(render(&declarations), expected.to_string());
    }

    #[test]
    fn generics_are_carried_over() {
        let input: syn::DeriveInput = parse_quote! {
            #[raw_value(String)]
            #[case_insensitive(crate = crate::reexport)]
            enum Area<T: Clone> where T: Send {
                Tokyo,
                #[doc(hidden)]
                Phantom,
            }
        };

        let rendered = render(&expand(&input).unwrap());
        let header = quote! {
            impl<T: Clone> crate::reexport::CaseInsensitive for Area<T> where T: Send
        };
        assert!(rendered.contains(&header.to_string()), "{rendered}");
    }

    #[test]
    fn empty_enum_expands() {
        let input: syn::DeriveInput = parse_quote! {
            #[raw_value(String)]
            enum Never {}
        };

        let expected = quote! {
            #[automatically_derived]
            impl ::case_insensitive::CaseInsensitive for Never {
                fn from_raw_value(raw_value: &str) -> ::std::option::Option<Self> {
                    match raw_value.to_lowercase().as_str() {
                        _ => ::std::option::Option::None,
                    }
                }

                fn raw_value(&self) -> &'static str {
                    match *self {}
                }
            }
        };

        assert_eq!(render(&expand(&input).unwrap()), expected.to_string());
    }

    #[test]
    fn expansion_is_deterministic() {
        let input: syn::DeriveInput = parse_quote! {
            #[raw_value(String)]
            enum Area {
                Tokyo,
                nagoya,
                Osaka,
            }
        };

        assert_eq!(
            render(&expand(&input).unwrap()),
            render(&expand(&input).unwrap())
        );
    }

    #[test]
    fn rejects_struct() {
        let input: syn::DeriveInput = parse_quote! {
            #[raw_value(String)]
            struct Area {
                name: String,
            }
        };

        let diagnostic = expand(&input).unwrap_err();
        assert_eq!(
            *diagnostic.kind(),
            Kind::NotAnEnum {
                name: "Area".to_owned(),
                found: "struct",
            }
        );
    }

    #[test]
    fn rejects_union() {
        let input: syn::DeriveInput = parse_quote! {
            union Area {
                a: u32,
                b: f32,
            }
        };

        let diagnostic = expand(&input).unwrap_err();
        assert_eq!(diagnostic.id().to_string(), "CaseInsensitiveMacros::NotAnEnum");
    }

    #[test]
    fn kind_is_checked_before_raw_value() {
        let input: syn::DeriveInput = parse_quote! {
            struct Area;
        };

        let diagnostic = expand(&input).unwrap_err();
        assert!(matches!(*diagnostic.kind(), Kind::NotAnEnum { .. }));
    }

    #[test]
    fn rejects_enum_without_raw_value() {
        let input: syn::DeriveInput = parse_quote! {
            enum Area {
                Tokyo,
                Nagoya,
            }
        };

        let diagnostic = expand(&input).unwrap_err();
        assert_eq!(
            *diagnostic.kind(),
            Kind::UnsupportedRawValueType(RawValueProblem::Missing)
        );
    }

    #[test]
    fn rejects_integer_raw_value() {
        let input: syn::DeriveInput = parse_quote! {
            #[raw_value(Int)]
            enum Area {
                Tokyo,
            }
        };

        let diagnostic = expand(&input).unwrap_err();
        assert_eq!(
            diagnostic.id().to_string(),
            "CaseInsensitiveMacros::UnsupportedRawValueType"
        );
    }

    #[test]
    fn raw_value_is_checked_before_cases() {
        let input: syn::DeriveInput = parse_quote! {
            #[raw_value(f64)]
            enum Area {
                Tokyo(u8),
            }
        };

        let diagnostic = expand(&input).unwrap_err();
        assert!(matches!(
            *diagnostic.kind(),
            Kind::UnsupportedRawValueType(RawValueProblem::NotString { .. })
        ));
    }
}
