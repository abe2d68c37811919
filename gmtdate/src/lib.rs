use proc_macro::TokenStream;
use syn::{parse_macro_input, ItemStruct};

/// Attribute macro synthesizing "GMT-stored, local-computed, lazily-cached"
/// date properties on a struct.
///
/// Mark a field with `#[local_date(..)]` and the field is replaced by a
/// private GMT storage field plus a private cache, with a getter/setter pair
/// named after the field:
///
/// ```ignore
/// #[gmt_backed]
/// struct Task {
///     #[local_date]
///     due_local_date: Option<NaiveDate>,
/// }
///
/// impl Task {
///     // conversion contract consumed by the generated accessors
///     fn gmt_date(local: NaiveDate, with_time: bool, is_due_date: bool) -> NaiveDate { .. }
///     fn local_date(gmt: NaiveDate, with_time: bool, is_due_date: bool) -> NaiveDate { .. }
/// }
/// ```
///
/// Options: `with_time_property = <bool field>` (recompute on every read from
/// the flag's current value), `is_due_date = <bool literal>` (default `true`),
/// `legacy_property_name = <field>` (one-shot migration on first read),
/// `setter_side_effects = <expr>` (runs after every write).
///
/// A property can also be declared without a trigger field:
/// `#[gmt_backed(property(base_name = due, ty = NaiveDate, ..))]`, which
/// additionally accepts `include_legacy_computed_property = <bool literal>`
/// to emit a forwarding `{base}_date` accessor pair.
#[proc_macro_attribute]
pub fn gmt_backed(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as gmtdate_core::expand::GmtBackedArgs);
    let item = parse_macro_input!(item as ItemStruct);
    match gmtdate_core::expand::expand_gmt_backed(args, item) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
