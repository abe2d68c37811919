//! Suffix-matching rule table that turns one trigger identifier into the
//! canonical family of derived names.
//!
//! Precedence, first match wins:
//! 1. an explicit base name is used verbatim, public = `{base}_local_date`
//! 2. `*_local_date` keeps the identifier as the public name
//! 3. `*_date` keeps the identifier as the public name
//! 4. `*_local` appends `_date`
//! 5. anything else appends `_date`
//!
//! Identifiers ending in `_macro` are dummy-declaration placeholders: the
//! suffix is stripped, rules 2-3 re-apply to the remainder, and one leading
//! underscore is dropped from the public name.

use proc_macro2::Ident;
use quote::format_ident;

use crate::errors::ExpandError;

/// The canonical name family for one property. `public_name` always ends in
/// `_date`; `base_name` never carries that suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyNames {
    pub base_name: String,
    pub public_name: String,
}

impl PropertyNames {
    /// Name of the generated public getter.
    pub fn public_ident(&self) -> Ident {
        format_ident!("{}", self.public_name)
    }

    /// Name of the generated public setter.
    pub fn setter_ident(&self) -> Ident {
        format_ident!("set_{}", self.public_name)
    }

    /// Private GMT storage field. Never user-visible.
    pub fn gmt_ident(&self) -> Ident {
        format_ident!("{}_gmt_date", self.base_name)
    }

    /// Private memoization field. Never user-visible.
    pub fn cached_ident(&self) -> Ident {
        format_ident!("_{}_local_date", self.base_name)
    }

    /// Getter name of the optional backward-compatibility alias accessor.
    pub fn alias_ident(&self) -> Ident {
        format_ident!("{}_date", self.base_name)
    }

    /// Setter name of the optional backward-compatibility alias accessor.
    pub fn alias_setter_ident(&self) -> Ident {
        format_ident!("set_{}_date", self.base_name)
    }
}

/// Apply the rule table. An explicit base name (declaration-level shape)
/// bypasses derivation entirely.
pub fn derive_names(
    identifier: &str,
    explicit_base: Option<&str>,
) -> Result<PropertyNames, ExpandError> {
    if let Some(base) = explicit_base {
        return Ok(PropertyNames {
            base_name: base.to_string(),
            public_name: format!("{base}_local_date"),
        });
    }

    if let Some(rest) = identifier.strip_suffix("_macro") {
        // Placeholder de-mangling: only the date-suffix rules apply to the
        // remainder, and the public name loses one leading underscore.
        let (base, public) = split_date_suffix(rest)
            .ok_or_else(|| ExpandError::InvalidPropertyName(identifier.to_string()))?;
        let public = public.strip_prefix('_').unwrap_or(public).to_string();
        return checked(base, public, identifier);
    }

    if let Some((base, public)) = split_date_suffix(identifier) {
        return checked(base, public.to_string(), identifier);
    }

    if let Some(base) = identifier.strip_suffix("_local") {
        return checked(base, format!("{identifier}_date"), identifier);
    }

    checked(identifier, format!("{identifier}_date"), identifier)
}

/// Rules 2-3: `(base, public)` for identifiers already carrying a date suffix.
fn split_date_suffix(identifier: &str) -> Option<(&str, &str)> {
    if let Some(base) = identifier.strip_suffix("_local_date") {
        return Some((base, identifier));
    }
    identifier.strip_suffix("_date").map(|base| (base, identifier))
}

fn checked(base: &str, public: String, identifier: &str) -> Result<PropertyNames, ExpandError> {
    if base.is_empty() {
        return Err(ExpandError::InvalidPropertyName(identifier.to_string()));
    }
    Ok(PropertyNames {
        base_name: base.to_string(),
        public_name: public,
    })
}
