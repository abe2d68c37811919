use syn::{GenericArgument, PathArguments, Type};

fn single_generic_arg(path: &syn::Path) -> Option<&GenericArgument> {
    path.segments.last().and_then(|seg| match &seg.arguments {
        PathArguments::AngleBracketed(ab) => ab.args.first(),
        _ => None,
    })
}

fn last_ident_is(path: &syn::Path, name: &str) -> bool {
    path.segments.last().is_some_and(|seg| seg.ident == name)
}

/// If type is `Option<T>`, return `T`
pub fn unwrap_option(ty: &Type) -> Option<&Type> {
    if let Type::Path(tp) = ty {
        if last_ident_is(&tp.path, "Option") {
            return single_generic_arg(&tp.path).and_then(|ga| match ga { GenericArgument::Type(t) => Some(t), _ => None });
        }
    }
    None
}
