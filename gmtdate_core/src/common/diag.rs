use proc_macro2::Span;
use quote::ToTokens;
use syn::{spanned::Spanned, Error as SynError};

/// Create a span-aware error on the given AST node.
pub fn err_on<T: Spanned + ToTokens>(node: &T, msg: &str) -> SynError {
    SynError::new_spanned(node, msg)
}

/// Create a span-aware error with an extra note appended to the message.
pub fn suggest_with_note<T: Spanned + ToTokens>(node: &T, msg: &str, note: &str) -> SynError {
    let combined = format!("{} (note: {})", msg, note);
    SynError::new_spanned(node, combined)
}

/// Create an error at a specific span
pub fn err_at_span(span: Span, msg: &str) -> SynError {
    SynError::new(span, msg)
}

/// Aggregates the syn::Error values produced while expanding several
/// properties on one struct, so every bad declaration is reported in a
/// single compiler pass.
#[derive(Default)]
pub struct Collector {
    agg: Option<SynError>,
}

impl Collector {
    pub fn new() -> Self { Self { agg: None } }
    pub fn push(&mut self, err: SynError) {
        if let Some(ref mut a) = self.agg {
            a.combine(err);
        } else {
            self.agg = Some(err);
        }
    }
    pub fn is_empty(&self) -> bool { self.agg.is_none() }
    pub fn has_errors(&self) -> bool { self.agg.is_some() }
    pub fn into_result<T>(self, ok: T) -> Result<T, SynError> { self.agg.map_or(Ok(ok), Err) }
}
