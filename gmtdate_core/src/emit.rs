//! Accessor body synthesis: derived names + configuration in, member
//! descriptors and their rendered tokens out.
//!
//! The generated code leans on two inherent associated functions the host
//! type must provide:
//!
//! ```ignore
//! fn gmt_date(local: T, with_time: bool, is_due_date: bool) -> T;
//! fn local_date(gmt: T, with_time: bool, is_due_date: bool) -> T;
//! ```
//!
//! The value type `T` must be `Copy`. Getter and setter both take
//! `&mut self`: the getter's check-then-fill memoization writes the cache, so
//! the borrow checker supplies the external synchronization the pattern
//! assumes.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Field, Type, Visibility};

use crate::ir::{MemberDescriptor, MemberKind};
use crate::names::PropertyNames;
use crate::options::{CachePolicy, PropertyConfig};

/// Build the ordered member family for one property.
pub fn members(
    names: &PropertyNames,
    cfg: &PropertyConfig,
    ty: &Type,
    vis: &Visibility,
) -> Vec<MemberDescriptor> {
    let mut out = Vec::new();

    if let Some(legacy) = &cfg.legacy_property_name {
        out.push(MemberDescriptor {
            name: legacy.clone(),
            vis: Visibility::Inherited,
            kind: MemberKind::StoredOptionalField { ty: ty.clone() },
        });
    }

    out.push(MemberDescriptor {
        name: names.gmt_ident(),
        vis: Visibility::Inherited,
        kind: MemberKind::StoredOptionalField { ty: ty.clone() },
    });
    out.push(MemberDescriptor {
        name: names.cached_ident(),
        vis: Visibility::Inherited,
        kind: MemberKind::CachedOptionalField { ty: ty.clone() },
    });
    out.push(MemberDescriptor {
        name: names.public_ident(),
        vis: vis.clone(),
        kind: MemberKind::ComputedAccessor {
            ty: ty.clone(),
            getter_body: getter_body(names, cfg),
            setter_body: setter_body(names, cfg),
        },
    });

    if cfg.include_legacy_alias {
        let public = names.public_ident();
        let setter = names.setter_ident();
        out.push(MemberDescriptor {
            name: names.alias_ident(),
            vis: vis.clone(),
            kind: MemberKind::ComputedAccessor {
                ty: ty.clone(),
                getter_body: quote! { self.#public() },
                setter_body: quote! { self.#setter(value); },
            },
        });
    }

    out
}

/// Render descriptors into struct fields and impl-block methods, preserving
/// member order.
pub fn render(members: &[MemberDescriptor]) -> (Vec<Field>, Vec<TokenStream2>) {
    let mut fields = Vec::new();
    let mut methods = Vec::new();
    for m in members {
        match &m.kind {
            MemberKind::StoredOptionalField { ty } | MemberKind::CachedOptionalField { ty } => {
                fields.push(option_field(m, ty));
            }
            MemberKind::ComputedAccessor { ty, getter_body, setter_body } => {
                let getter = &m.name;
                let setter = format_ident!("set_{}", m.name);
                let vis = &m.vis;
                methods.push(quote! {
                    #vis fn #getter(&mut self) -> ::core::option::Option<#ty> {
                        #getter_body
                    }
                });
                methods.push(quote! {
                    #vis fn #setter(&mut self, value: ::core::option::Option<#ty>) {
                        #setter_body
                    }
                });
            }
        }
    }
    (fields, methods)
}

fn option_field(m: &MemberDescriptor, ty: &Type) -> Field {
    let name = &m.name;
    Field {
        attrs: Vec::new(),
        vis: m.vis.clone(),
        mutability: syn::FieldMutability::None,
        ident: Some(name.clone()),
        colon_token: Some(Default::default()),
        ty: syn::parse_quote!(::core::option::Option<#ty>),
    }
}

fn getter_body(names: &PropertyNames, cfg: &PropertyConfig) -> TokenStream2 {
    let gmt = names.gmt_ident();
    let cached = names.cached_ident();
    let setter = names.setter_ident();
    let is_due = cfg.is_due_date;

    // Legacy migration runs at most once per object: after the first pass the
    // GMT field is populated and the guard never fires again.
    let migrate = cfg
        .legacy_property_name
        .as_ref()
        .map(|legacy| {
            quote! {
                if self.#cached.is_none() && self.#gmt.is_none() {
                    if let ::core::option::Option::Some(value) = self.#legacy.take() {
                        self.#setter(::core::option::Option::Some(value));
                    }
                }
            }
        })
        .unwrap_or_default();

    let refresh = match (cfg.cache_policy(), &cfg.with_time_property) {
        // Dynamic policy: the external flag can change between reads, so the
        // cache is overwritten on every read (and cleared when GMT is unset).
        (CachePolicy::AlwaysFresh, Some(flag)) => quote! {
            self.#cached = self.#gmt.map(|gmt| Self::local_date(gmt, self.#flag, #is_due));
        },
        // Static time-of-day policy: fill the cache once, invalidated only by
        // the setter.
        _ => quote! {
            if self.#cached.is_none() {
                if let ::core::option::Option::Some(gmt) = self.#gmt {
                    self.#cached =
                        ::core::option::Option::Some(Self::local_date(gmt, false, #is_due));
                }
            }
        },
    };

    quote! {
        #migrate
        #refresh
        self.#cached
    }
}

fn setter_body(names: &PropertyNames, cfg: &PropertyConfig) -> TokenStream2 {
    let gmt = names.gmt_ident();
    let cached = names.cached_ident();
    let is_due = cfg.is_due_date;
    let with_time = match &cfg.with_time_property {
        Some(flag) => quote!(self.#flag),
        None => quote!(false),
    };
    // Side effects splice in verbatim after the storage updates; any failure
    // they raise propagates to the caller of the setter.
    let side = cfg
        .setter_side_effects
        .as_ref()
        .map(|expr| quote! { #expr; })
        .unwrap_or_default();
    let trace = trace_stmt(names);

    // The cache is re-derived from the stored GMT value rather than the
    // incoming one, so lossy rounding in the GMT conversion shows up in reads
    // immediately.
    quote! {
        let with_time = #with_time;
        self.#gmt = value.map(|value| Self::gmt_date(value, with_time, #is_due));
        self.#cached = self.#gmt.map(|gmt| Self::local_date(gmt, with_time, #is_due));
        #trace
        #side
    }
}

#[cfg(feature = "log")]
fn trace_stmt(names: &PropertyNames) -> TokenStream2 {
    let name = &names.public_name;
    quote! { log::trace!("{} written, cache refreshed", #name); }
}

#[cfg(not(feature = "log"))]
fn trace_stmt(_names: &PropertyNames) -> TokenStream2 {
    TokenStream2::new()
}
