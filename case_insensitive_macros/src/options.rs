const OPTIONS_ATTRIBUTE: &str = "case_insensitive";

/// How the generated initializer finds the matching case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Strategy {
    /// A `match` over the lowercased raw values, one arm per case.
    #[default]
    BranchTable,
    /// A linear search over `CaseIterable::all_cases()`.
    AllCases,
}

/// Per-enum configuration, read from `#[case_insensitive(...)]`.
#[derive(Debug, Clone)]
pub(crate) struct ExpansionContext {
    root: syn::Path,
    strategy: Strategy,
}

impl Default for ExpansionContext {
    fn default() -> Self {
        Self {
            root: syn::parse_quote!(::case_insensitive),
            strategy: Strategy::default(),
        }
    }
}

impl ExpansionContext {
    pub(crate) fn from_attrs(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut context = Self::default();

        for attr in attrs
            .iter()
            .filter(|attr| attr.path().is_ident(OPTIONS_ATTRIBUTE))
        {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("all_cases") {
                    context.strategy = Strategy::AllCases;
                    Ok(())
                } else if meta.path.is_ident("crate") {
                    context.root = meta.value()?.parse()?;
                    Ok(())
                } else {
                    Err(meta.error("unknown option, expected `all_cases` or `crate = <path>`"))
                }
            })?;
        }

        Ok(context)
    }

    pub(crate) const fn root(&self) -> &syn::Path {
        &self.root
    }

    pub(crate) const fn strategy(&self) -> Strategy {
        self.strategy
    }
}
