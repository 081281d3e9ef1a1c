use std::fmt;

use proc_macro2::{Span, TokenStream};

const DOMAIN: &str = "CaseInsensitiveMacros";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Severity {
    Error,
}

/// Stable identifier of a diagnostic, independent of its message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DiagnosticId {
    domain: &'static str,
    id: &'static str,
}

impl fmt::Display for DiagnosticId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.domain, self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RawValueProblem {
    Missing,
    NotString { found: String },
    CaseWithFields { case: String },
    CaseWithDiscriminant { case: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Kind {
    NotAnEnum { name: String, found: &'static str },
    UnsupportedRawValueType(RawValueProblem),
}

#[derive(Debug, Clone)]
pub(crate) struct Diagnostic {
    kind: Kind,
    span: Span,
}

impl Diagnostic {
    pub(crate) const fn new(kind: Kind, span: Span) -> Self {
        Self { kind, span }
    }

    pub(crate) const fn not_an_enum(name: String, found: &'static str, span: Span) -> Self {
        Self::new(Kind::NotAnEnum { name, found }, span)
    }

    pub(crate) const fn unsupported_raw_value(problem: RawValueProblem, span: Span) -> Self {
        Self::new(Kind::UnsupportedRawValueType(problem), span)
    }

    #[cfg(test)]
    pub(crate) const fn kind(&self) -> &Kind {
        &self.kind
    }

    pub(crate) const fn id(&self) -> DiagnosticId {
        let id = match self.kind {
            Kind::NotAnEnum { .. } => "NotAnEnum",
            Kind::UnsupportedRawValueType(_) => "UnsupportedRawValueType",
        };
        DiagnosticId { domain: DOMAIN, id }
    }

    pub(crate) const fn severity(&self) -> Severity {
        match self.kind {
            Kind::NotAnEnum { .. } | Kind::UnsupportedRawValueType(_) => Severity::Error,
        }
    }

    pub(crate) fn into_compile_error(self) -> TokenStream {
        match self.severity() {
            Severity::Error => {
                syn::Error::new(self.span, format!("{self} [{}]", self.id())).into_compile_error()
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::NotAnEnum { ref name, found } => write!(
                f,
                "`CaseInsensitive` can only be derived for enums, but `{name}` is a {found}"
            ),
            Kind::UnsupportedRawValueType(ref problem) => match *problem {
                RawValueProblem::Missing => write!(
                    f,
                    "`CaseInsensitive` requires the enum to declare a raw value type with `#[raw_value(String)]`"
                ),
                RawValueProblem::NotString { ref found } => write!(
                    f,
                    "`CaseInsensitive` only supports `String` raw values, found `{found}`"
                ),
                RawValueProblem::CaseWithFields { ref case } => write!(
                    f,
                    "`CaseInsensitive` requires a `String` raw value for every case, but case `{case}` has fields"
                ),
                RawValueProblem::CaseWithDiscriminant { ref case } => write!(
                    f,
                    "`CaseInsensitive` requires a `String` raw value for every case, but case `{case}` declares a discriminant"
                ),
            },
        }
    }
}
