//! Pipeline driver: analyze the struct, derive names, parse options, emit
//! members, and splice the results back into the item.
//!
//! Two invocation shapes feed the same member family:
//! - `#[local_date(..)]` on a named field derives the base name from the
//!   field identifier and replaces the field with the generated storage;
//! - `property(base_name = .., ty = .., ..)` in the attribute argument list
//!   supplies the base name explicitly and appends its storage fields at the
//!   end of the struct.

use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parenthesized, Expr, Field, Fields, Ident, ItemStruct, Token, Type, Visibility,
};

use crate::analyze;
use crate::common::builders::ImplBuilder;
use crate::common::diag::{self, Collector};
use crate::emit;
use crate::errors::ExpandError;
use crate::names;
use crate::options::PropertyConfig;

const FIELD_ATTR: &str = "local_date";

/// Arguments of the struct-level attribute: zero or more `property(..)`
/// groups. Unknown labels are ignored, mirroring the per-property option
/// parser.
pub struct GmtBackedArgs {
    pub properties: Vec<ExplicitProperty>,
}

/// One declaration-level property request with an explicit base name.
pub struct ExplicitProperty {
    pub base_name: Option<Ident>,
    pub ty: Option<Type>,
    pub config: PropertyConfig,
    pub span: Span,
}

impl Parse for GmtBackedArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut properties = Vec::new();
        while !input.is_empty() {
            let key: Ident = input.parse()?;
            if key == "property" {
                let content;
                parenthesized!(content in input);
                properties.push(content.parse::<ExplicitProperty>()?);
            } else if input.peek(Token![=]) {
                input.parse::<Token![=]>()?;
                let _ignored: Expr = input.parse()?;
            } else if input.peek(syn::token::Paren) {
                let content;
                parenthesized!(content in input);
                let _ignored: TokenStream2 = content.parse()?;
            }
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(Self { properties })
    }
}

impl Parse for ExplicitProperty {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let span = input.span();
        let mut prop = ExplicitProperty {
            base_name: None,
            ty: None,
            config: PropertyConfig::default(),
            span,
        };
        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            match key.to_string().as_str() {
                "base_name" => prop.base_name = Some(input.parse()?),
                // `ty` values are types, not expressions; `Vec<u8>` would not
                // survive an Expr parse.
                "ty" => prop.ty = Some(input.parse()?),
                _ => {
                    let value: Expr = input.parse()?;
                    prop.config.apply(&key, value, true);
                }
            }
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(prop)
    }
}

/// Expand `#[gmt_backed(..)]` over one struct. On any error the whole
/// invocation aborts with no partial output; errors across several
/// properties on the same struct are aggregated and reported together.
pub fn expand_gmt_backed(args: GmtBackedArgs, mut item: ItemStruct) -> syn::Result<TokenStream2> {
    let mut collector = Collector::new();
    let mut methods: Vec<TokenStream2> = Vec::new();

    match &mut item.fields {
        Fields::Named(named) => {
            let original = std::mem::take(&mut named.named);
            for mut field in original {
                let Some(pos) = field.attrs.iter().position(is_trigger) else {
                    named.named.push(field);
                    continue;
                };
                let attr = field.attrs.remove(pos);
                match expand_field(&field, &attr) {
                    Ok((fields, ms)) => {
                        named.named.extend(fields);
                        methods.extend(ms);
                    }
                    Err(e) => collector.push(e),
                }
            }
        }
        Fields::Unnamed(unnamed) => {
            for field in &unnamed.unnamed {
                if field.attrs.iter().any(is_trigger) {
                    collector.push(diag::err_on(
                        field,
                        &ExpandError::InvalidDeclaration.to_string(),
                    ));
                }
            }
        }
        Fields::Unit => {}
    }

    for prop in &args.properties {
        match expand_explicit(prop) {
            Ok((fields, ms)) => {
                match &mut item.fields {
                    Fields::Named(named) => named.named.extend(fields),
                    _ => collector.push(diag::err_on(
                        &item.ident,
                        &ExpandError::InvalidDeclaration.to_string(),
                    )),
                }
                methods.extend(ms);
            }
            Err(e) => collector.push(e),
        }
    }

    collector.into_result(())?;

    if methods.is_empty() {
        return Ok(quote! { #item });
    }

    let accessors = ImplBuilder::new(item.ident.clone(), item.generics.clone())
        .with_docs("Accessors synthesized by `#[gmt_backed]`.")
        .add_methods(methods)
        .build();

    Ok(quote! {
        #item
        #accessors
    })
}

fn is_trigger(attr: &syn::Attribute) -> bool {
    attr.path().is_ident(FIELD_ATTR)
}

/// Field-attached shape: derive the base name from the field identifier.
fn expand_field(
    field: &Field,
    attr: &syn::Attribute,
) -> syn::Result<(Vec<Field>, Vec<TokenStream2>)> {
    let decl = analyze::field_decl(field)?;
    let cfg = PropertyConfig::from_attr(attr)?;
    let names = names::derive_names(&decl.ident.to_string(), None)
        .map_err(|e| e.into_syn(decl.span))?;
    let family = emit::members(&names, &cfg, &decl.value_ty, &decl.vis);
    Ok(emit::render(&family))
}

/// Declaration-level shape: the base name (and value type) are spelled out.
fn expand_explicit(prop: &ExplicitProperty) -> syn::Result<(Vec<Field>, Vec<TokenStream2>)> {
    let base = prop
        .base_name
        .as_ref()
        .ok_or_else(|| ExpandError::MissingBaseName.into_syn(prop.span))?;
    let ty = prop
        .ty
        .as_ref()
        .ok_or_else(|| ExpandError::MissingValueType.into_syn(prop.span))?;
    let base = base.to_string();
    let names = names::derive_names(&base, Some(&base)).map_err(|e| e.into_syn(prop.span))?;
    let vis: Visibility = syn::parse_quote!(pub);
    let family = emit::members(&names, &prop.config, ty, &vis);
    Ok(emit::render(&family))
}
