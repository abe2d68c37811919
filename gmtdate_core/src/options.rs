//! Typed configuration extracted from an invocation's argument list.

use syn::{
    parse::ParseStream, Attribute, Expr, ExprLit, Ident, Lit, Meta, Token,
};

/// How the getter treats the cached local value. Selected by whether
/// `with_time_property` is configured, but carried explicitly so the emitter
/// contract is testable without argument parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Compute the local value once, then serve the cache until the next
    /// write.
    Memoized,
    /// Recompute on every read so the result tracks the current value of the
    /// external time-of-day flag.
    AlwaysFresh,
}

#[derive(Debug, Clone)]
pub struct PropertyConfig {
    /// Name of a `bool` field on the same struct whose current value feeds
    /// the conversions' `with_time` argument.
    pub with_time_property: Option<Ident>,
    pub is_due_date: bool,
    /// Name of a legacy storage field whose value is migrated into the
    /// property on first read.
    pub legacy_property_name: Option<Ident>,
    /// Caller-supplied expression spliced verbatim after every write.
    pub setter_side_effects: Option<Expr>,
    /// Declaration-level shape only: also emit a `{base}_date` accessor pair
    /// forwarding to the primary one.
    pub include_legacy_alias: bool,
}

impl Default for PropertyConfig {
    fn default() -> Self {
        Self {
            with_time_property: None,
            is_due_date: true,
            legacy_property_name: None,
            setter_side_effects: None,
            include_legacy_alias: false,
        }
    }
}

impl PropertyConfig {
    pub fn cache_policy(&self) -> CachePolicy {
        if self.with_time_property.is_some() {
            CachePolicy::AlwaysFresh
        } else {
            CachePolicy::Memoized
        }
    }

    /// Parse the field-attached shape: `#[local_date]` or
    /// `#[local_date(key = value, ..)]`.
    pub fn from_attr(attr: &Attribute) -> syn::Result<Self> {
        if matches!(attr.meta, Meta::Path(_)) {
            return Ok(Self::default());
        }
        attr.parse_args_with(|input: ParseStream| {
            let mut cfg = Self::default();
            parse_option_list(input, |key, value| cfg.apply(key, value, false))?;
            Ok(cfg)
        })
    }

    /// Apply one `key = value` pair. Unknown labels are ignored so call sites
    /// written against a newer option set keep expanding. Boolean values are
    /// read by literal-token inspection only; any other expression form keeps
    /// the default. No expression evaluation happens here.
    pub(crate) fn apply(&mut self, key: &Ident, value: Expr, accept_alias: bool) {
        match key.to_string().as_str() {
            "with_time_property" => self.with_time_property = path_ident(&value),
            "is_due_date" => {
                if let Some(b) = bool_literal(&value) {
                    self.is_due_date = b;
                }
            }
            "legacy_property_name" => self.legacy_property_name = path_ident(&value),
            "setter_side_effects" => self.setter_side_effects = Some(value),
            "include_legacy_computed_property" if accept_alias => {
                if let Some(b) = bool_literal(&value) {
                    self.include_legacy_alias = b;
                }
            }
            _ => {}
        }
    }
}

/// Walk a `key = value, ..` list, handing each pair to `apply`.
pub(crate) fn parse_option_list(
    input: ParseStream,
    mut apply: impl FnMut(&Ident, Expr),
) -> syn::Result<()> {
    while !input.is_empty() {
        let key: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let value: Expr = input.parse()?;
        apply(&key, value);
        if input.is_empty() {
            break;
        }
        input.parse::<Token![,]>()?;
    }
    Ok(())
}

fn bool_literal(value: &Expr) -> Option<bool> {
    if let Expr::Lit(ExprLit { lit: Lit::Bool(b), .. }) = value {
        Some(b.value)
    } else {
        None
    }
}

fn path_ident(value: &Expr) -> Option<Ident> {
    if let Expr::Path(p) = value {
        p.path.get_ident().cloned()
    } else {
        None
    }
}
