//! Proc-macros for glint-gui.
//!
//! - `#[derive(WithBuilders)]`: generates a `with_<field>(...)` method for every
//!   named field of a config struct (themes, backend settings).
//!
//! ## Field attributes
//! - `#[with_builders(skip)]`: no builder is generated for the field.
//! - `#[with_builders(into)]`: the builder takes `impl Into<FieldType>`.
//!
//! ### Example
//! ```ignore
//! use glint_gui_macros::WithBuilders;
//!
//! #[derive(Clone, Debug, WithBuilders)]
//! pub struct SkiaConfig {
//!     pub font_size: f32,
//!     #[with_builders(into)]
//!     pub font_family: String,
//! }
//!
//! let config = SkiaConfig { font_size: 20.0, font_family: String::new() }
//!     .with_font_size(16.0)
//!     .with_font_family("DejaVu Sans");
//! ```

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Fields};

/// Options collected from `#[with_builders(...)]` on a single field.
#[derive(Default)]
struct FieldOptions {
    skip: bool,
    into: bool,
}

#[proc_macro_derive(WithBuilders, attributes(with_builders))]
pub fn derive_with_builders(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Struct(data) = &input.data else {
        return syn::Error::new(input.span(), "WithBuilders can only be derived for structs")
            .to_compile_error()
            .into();
    };

    let Fields::Named(named) = &data.fields else {
        return syn::Error::new(
            data.fields.span(),
            "WithBuilders requires a struct with named fields",
        )
        .to_compile_error()
        .into();
    };

    let mut methods = Vec::with_capacity(named.named.len());
    for field in &named.named {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };

        let options = match field_options(field) {
            Ok(options) => options,
            Err(err) => return err.to_compile_error().into(),
        };
        if options.skip {
            continue;
        }

        let field_ty = &field.ty;
        let method = format_ident!("with_{}", field_ident);
        let doc = format!("Set `{}` (builder style).", field_ident);

        let body = if options.into {
            quote! {
                #[doc = #doc]
                #[inline]
                pub fn #method(mut self, value: impl ::core::convert::Into<#field_ty>) -> Self {
                    self.#field_ident = value.into();
                    self
                }
            }
        } else {
            quote! {
                #[doc = #doc]
                #[inline]
                pub fn #method(mut self, value: #field_ty) -> Self {
                    self.#field_ident = value;
                    self
                }
            }
        };
        methods.push(body);
    }

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#methods)*
        }
    }
    .into()
}

fn field_options(field: &syn::Field) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions::default();

    for attr in field.attrs.iter().filter(|a| a.path().is_ident("with_builders")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                options.skip = true;
                Ok(())
            } else if meta.path.is_ident("into") {
                options.into = true;
                Ok(())
            } else {
                Err(meta.error("expected `skip` or `into`"))
            }
        })?;
    }

    Ok(options)
}
