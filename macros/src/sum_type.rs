//! Implementation of the `#[derive(SumType)]` macro.
//!
//! Validates the input enum, assigns each variant a slot in declaration
//! order, and assembles the kinds module plus the `SumType` impl from the
//! per-variant pieces built in [`crate::codegen`].

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Ident, Lit, Meta};

use crate::codegen::{
    extract_arm, payload_struct, payload_type, peano, snake_case, vacancies,
};

/// Parse `#[sum_type(...)]` attributes from the enum.
#[derive(Default)]
struct SumTypeAttrs {
    /// Override the kinds module name
    module: Option<String>,
}

impl SumTypeAttrs {
    fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = SumTypeAttrs::default();

        for attr in attrs {
            if !attr.path().is_ident("sum_type") {
                continue;
            }
            let nested = attr.parse_args_with(
                syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated,
            )?;
            for meta in nested {
                match meta {
                    Meta::NameValue(nv) if nv.path.is_ident("module") => {
                        if let syn::Expr::Lit(syn::ExprLit {
                            lit: Lit::Str(lit_str),
                            ..
                        }) = &nv.value
                        {
                            result.module = Some(lit_str.value());
                        } else {
                            return Err(syn::Error::new_spanned(
                                &nv.value,
                                "`module` expects a string literal",
                            ));
                        }
                    }
                    other => {
                        return Err(syn::Error::new_spanned(
                            other,
                            "unknown `sum_type` attribute; expected `module = \"...\"`",
                        ));
                    }
                }
            }
        }

        Ok(result)
    }
}

/// Main entry point for the `#[derive(SumType)]` macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let enum_ident = &input.ident;

    let data = match &input.data {
        Data::Enum(data) => data,
        Data::Struct(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "`SumType` can only be derived for enums",
            ));
        }
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "`SumType` does not support generic enums; kind markers must be concrete types",
        ));
    }

    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "a sum type needs at least one alternative",
        ));
    }

    let attrs = SumTypeAttrs::from_attrs(&input.attrs)?;
    let module_name = attrs
        .module
        .unwrap_or_else(|| format!("{}_kinds", snake_case(&enum_ident.to_string())));
    let module_ident: Ident = syn::parse_str(&module_name).map_err(|_| {
        syn::Error::new(
            Span::call_site(),
            format!("`{}` is not a valid module name", module_name),
        )
    })?;

    let vis = &input.vis;
    let kind_count = data.variants.len();
    let vacancies_ty = vacancies(kind_count);

    let mut module_items = Vec::with_capacity(kind_count * 2);
    let mut slot_arms = Vec::with_capacity(kind_count);

    for (slot, variant) in data.variants.iter().enumerate() {
        let v_ident = &variant.ident;
        let payload_ident = format_ident!("{}Payload", v_ident);

        if let Some(payload) = payload_struct(variant, &payload_ident) {
            module_items.push(payload);
        }

        let payload_ty = payload_type(variant, &payload_ident);
        let arm = extract_arm(enum_ident, variant, &payload_ident);
        let index_ty = peano(slot);
        let marker_doc = format!(
            "Alternative kind marker for `{}::{}` (slot {}).",
            enum_ident, v_ident, slot
        );

        module_items.push(quote! {
            #[doc = #marker_doc]
            #[derive(Clone, Copy, Debug)]
            pub struct #v_ident;

            impl ::switchback::Kind<super::#enum_ident> for #v_ident {
                type Payload = #payload_ty;
                type Index = #index_ty;
                const SLOT: usize = #slot;

                #[allow(unreachable_patterns)]
                fn payload(value: super::#enum_ident) -> Self::Payload {
                    match value {
                        #arm,
                        _ => ::core::unreachable!(
                            "payload requested for an alternative that is not active"
                        ),
                    }
                }
            }
        });

        slot_arms.push(quote! {
            #enum_ident::#v_ident { .. } => #slot,
        });
    }

    let module_doc = format!(
        "Alternative kind markers for [`{}`](super::{}), generated by `#[derive(SumType)]`.",
        enum_ident, enum_ident
    );

    Ok(quote! {
        #[doc = #module_doc]
        #[allow(clippy::wildcard_imports)]
        #vis mod #module_ident {
            use super::*;

            #(#module_items)*
        }

        impl ::switchback::SumType for #enum_ident {
            const KIND_COUNT: usize = #kind_count;
            type Vacancies = #vacancies_ty;

            fn active_slot(&self) -> usize {
                match self {
                    #(#slot_arms)*
                }
            }
        }
    })
}
