use proc_macro2::{Ident, TokenStream as TokenStream2};
use quote::quote;
use syn::Generics;

/// Builder for the inherent impl block that hosts generated accessors.
pub struct ImplBuilder {
    target_type: Ident,
    generics: Generics,
    methods: Vec<TokenStream2>,
    impl_attrs: Vec<TokenStream2>,
}

impl ImplBuilder {
    pub fn new(target_type: Ident, generics: Generics) -> Self {
        Self {
            target_type,
            generics,
            methods: Vec::new(),
            impl_attrs: Vec::new(),
        }
    }

    /// Add a method to the impl block
    pub fn add_method(mut self, method: TokenStream2) -> Self {
        self.methods.push(method);
        self
    }

    /// Add several methods at once, preserving order
    pub fn add_methods<I>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = TokenStream2>,
    {
        self.methods.extend(methods);
        self
    }

    /// Attach a doc comment to the impl block
    pub fn with_docs(mut self, docs: &str) -> Self {
        let d = docs.to_string();
        let attr = quote! { #[doc = #d] };
        self.impl_attrs.push(attr);
        self
    }

    /// Build the final impl block
    pub fn build(self) -> TokenStream2 {
        let target_type = &self.target_type;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let methods = &self.methods;
        let impl_attrs = &self.impl_attrs;

        quote! {
            #( #impl_attrs )*
            impl #impl_generics #target_type #ty_generics #where_clause {
                #( #methods )*
            }
        }
    }
}
