use proc_macro2::Span;
use thiserror::Error;

/// Everything that can abort the synthesis of one property family.
///
/// Each failure is local to its invocation: no members are emitted for the
/// failing property and sibling properties elsewhere are unaffected. There is
/// no retry path; generation is deterministic, so retrying the same input can
/// never succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// The trigger is not a single named field of type `Option<T>`.
    #[error("expected a single named field of type `Option<T>`")]
    InvalidDeclaration,
    /// The identifier survived de-mangling with no usable base name and no
    /// explicit base name was supplied.
    #[error("property name `{0}` does not match any naming rule")]
    InvalidPropertyName(String),
    /// The declaration-level shape was invoked without `base_name`.
    #[error("`property(..)` requires a `base_name` argument")]
    MissingBaseName,
    /// The declaration-level shape was invoked without `ty`. The value type
    /// comes from the trigger field in the field-attached shape; here it has
    /// to be spelled out.
    #[error("`property(..)` requires a `ty` argument")]
    MissingValueType,
}

impl ExpandError {
    /// Attach the error to a source span so the host compiler reports it at
    /// the offending declaration.
    pub fn into_syn(self, span: Span) -> syn::Error {
        crate::common::diag::err_at_span(span, &self.to_string())
    }
}
