//! Validation of the trigger declaration before any names are derived.

use syn::{spanned::Spanned, Field};

use crate::common::{diag, type_utils};
use crate::errors::ExpandError;
use crate::ir::PropertyDecl;

/// Check that `field` is a plain named `Option<T>` binding and pull out the
/// pieces the rest of the pipeline needs. Anything else is an
/// `InvalidDeclaration`.
pub fn field_decl(field: &Field) -> syn::Result<PropertyDecl> {
    let Some(ident) = field.ident.clone() else {
        return Err(ExpandError::InvalidDeclaration.into_syn(field.span()));
    };
    let Some(value_ty) = type_utils::unwrap_option(&field.ty) else {
        return Err(diag::suggest_with_note(
            &field.ty,
            &ExpandError::InvalidDeclaration.to_string(),
            "declare the field as `Option<T>`",
        ));
    };
    Ok(PropertyDecl {
        ident,
        vis: field.vis.clone(),
        value_ty: value_ty.clone(),
        span: field.span(),
    })
}
