use proc_macro2::{Span, TokenStream as TokenStream2};
use syn::{Ident, Type, Visibility};

/// The analyzed trigger declaration: one named field carrying the attribute.
/// Read-only input to the rest of the pipeline.
#[derive(Debug, Clone)]
pub struct PropertyDecl {
    pub ident: Ident,
    pub vis: Visibility,
    /// `T` from the field's declared `Option<T>`.
    pub value_ty: Type,
    pub span: Span,
}

/// One member of the synthesized family, in emission order:
/// [legacy field?, GMT storage field, cached local field, accessor,
/// legacy-alias accessor?].
#[derive(Debug, Clone)]
pub struct MemberDescriptor {
    pub name: Ident,
    pub vis: Visibility,
    pub kind: MemberKind,
}

#[derive(Debug, Clone)]
pub enum MemberKind {
    /// A plain `Option<T>` storage field (the GMT field, or the legacy field
    /// kept around for migration).
    StoredOptionalField { ty: Type },
    /// The memoized local value. Same storage shape as a stored field but
    /// readable only through the accessor; rendered private.
    CachedOptionalField { ty: Type },
    /// The public getter/setter pair. Bodies are already synthesized token
    /// streams; rendering only wraps them in signatures.
    ComputedAccessor {
        ty: Type,
        getter_body: TokenStream2,
        setter_body: TokenStream2,
    },
}
