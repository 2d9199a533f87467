//! Per-variant code generation helpers for `#[derive(SumType)]`.
//!
//! Payload shapes follow the variant shape:
//!
//! | Variant shape | Payload type |
//! |---------------|--------------|
//! | `V` | `()` |
//! | `V(T)` | `T` |
//! | `V(T0, T1, ...)` | `(T0, T1, ...)` |
//! | `V { a: A, b: B }` | generated `VPayload { a: A, b: B }` |

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Fields, Ident, Variant};

/// Convert a CamelCase identifier to snake_case, keeping acronym runs
/// together: `HTTPResponse` becomes `http_response`.
pub(crate) fn snake_case(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut out = String::with_capacity(ident.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let after_lower = i > 0 && (chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit());
            let acronym_end =
                i > 0 && chars[i - 1].is_uppercase() && chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if after_lower || acronym_end {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// Type-level slot index: `peano(2)` is `S<S<Z>>`.
pub(crate) fn peano(slot: usize) -> TokenStream {
    let mut index = quote!(::switchback::slot::Z);
    for _ in 0..slot {
        index = quote!(::switchback::slot::S<#index>);
    }
    index
}

/// The all-vacant claim state for a sum type with `kind_count` alternatives.
pub(crate) fn vacancies(kind_count: usize) -> TokenStream {
    let mut list = quote!(::switchback::slot::Nil);
    for _ in 0..kind_count {
        list = quote!(::switchback::slot::Cons<::switchback::slot::Vacant, #list>);
    }
    list
}

/// The `Kind::Payload` type for a variant.
pub(crate) fn payload_type(variant: &Variant, payload_ident: &Ident) -> TokenStream {
    match &variant.fields {
        Fields::Unit => quote!(()),
        Fields::Unnamed(unnamed) => {
            let types: Vec<_> = unnamed.unnamed.iter().map(|f| &f.ty).collect();
            match types.as_slice() {
                [] => quote!(()),
                [single] => quote!(#single),
                many => quote!((#(#many),*)),
            }
        }
        Fields::Named(_) => quote!(#payload_ident),
    }
}

/// The generated payload struct for a named-field variant, if any.
///
/// Field names and types are carried over verbatim; the struct lives in the
/// kinds module, whose `use super::*` keeps the field types resolvable.
pub(crate) fn payload_struct(variant: &Variant, payload_ident: &Ident) -> Option<TokenStream> {
    let Fields::Named(named) = &variant.fields else {
        return None;
    };

    let fields = named.named.iter().map(|f| {
        let ident = &f.ident;
        let ty = &f.ty;
        quote!(pub #ident: #ty)
    });
    let doc = format!("Payload of the `{}` alternative.", variant.ident);

    Some(quote! {
        #[doc = #doc]
        pub struct #payload_ident {
            #(#fields),*
        }
    })
}

/// The match arm extracting a variant's payload inside the kinds module.
pub(crate) fn extract_arm(
    enum_ident: &Ident,
    variant: &Variant,
    payload_ident: &Ident,
) -> TokenStream {
    let v_ident = &variant.ident;

    match &variant.fields {
        Fields::Unit => quote!(super::#enum_ident::#v_ident => ()),
        Fields::Unnamed(unnamed) => {
            let bindings: Vec<Ident> = (0..unnamed.unnamed.len())
                .map(|i| quote::format_ident!("p{}", i))
                .collect();
            match bindings.as_slice() {
                [] => quote!(super::#enum_ident::#v_ident() => ()),
                [single] => quote!(super::#enum_ident::#v_ident(#single) => #single),
                many => quote!(super::#enum_ident::#v_ident(#(#many),*) => (#(#many),*)),
            }
        }
        Fields::Named(named) => {
            let bindings: Vec<_> = named
                .named
                .iter()
                .map(|f| f.ident.as_ref().expect("named field has an identifier"))
                .collect();
            quote!(super::#enum_ident::#v_ident { #(#bindings),* } => #payload_ident { #(#bindings),* })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_simple_and_acronym_runs() {
        assert_eq!(snake_case("Color"), "color");
        assert_eq!(snake_case("GoodWeather"), "good_weather");
        assert_eq!(snake_case("HTTPResponse"), "http_response");
        assert_eq!(snake_case("Month2"), "month2");
        assert_eq!(snake_case("ParseHTTPResponse"), "parse_http_response");
    }

    #[test]
    fn peano_nests_one_successor_per_slot() {
        let zero: syn::Type = syn::parse2(peano(0)).unwrap();
        let expected: syn::Type = syn::parse_str("::switchback::slot::Z").unwrap();
        assert_eq!(zero, expected);

        let two: syn::Type = syn::parse2(peano(2)).unwrap();
        let expected: syn::Type =
            syn::parse_str("::switchback::slot::S<::switchback::slot::S<::switchback::slot::Z>>")
                .unwrap();
        assert_eq!(two, expected);
    }

    #[test]
    fn vacancies_lists_one_flag_per_kind() {
        let one: syn::Type = syn::parse2(vacancies(1)).unwrap();
        let expected: syn::Type = syn::parse_str(
            "::switchback::slot::Cons<::switchback::slot::Vacant, ::switchback::slot::Nil>",
        )
        .unwrap();
        assert_eq!(one, expected);
    }

    #[test]
    fn payload_types_follow_variant_shape() {
        let payload_ident: Ident = syn::parse_str("CirclePayload").unwrap();

        let unit: Variant = syn::parse_str("Empty").unwrap();
        let unit_ty: syn::Type = syn::parse2(payload_type(&unit, &payload_ident)).unwrap();
        assert_eq!(unit_ty, syn::parse_str::<syn::Type>("()").unwrap());

        let single: Variant = syn::parse_str("Square(f64)").unwrap();
        let single_ty: syn::Type = syn::parse2(payload_type(&single, &payload_ident)).unwrap();
        assert_eq!(single_ty, syn::parse_str::<syn::Type>("f64").unwrap());

        let pair: Variant = syn::parse_str("Segment(f64, f64)").unwrap();
        let pair_ty: syn::Type = syn::parse2(payload_type(&pair, &payload_ident)).unwrap();
        assert_eq!(pair_ty, syn::parse_str::<syn::Type>("(f64, f64)").unwrap());

        let named: Variant = syn::parse_str("Circle { radius: f64 }").unwrap();
        let named_ty: syn::Type = syn::parse2(payload_type(&named, &payload_ident)).unwrap();
        assert_eq!(named_ty, syn::parse_str::<syn::Type>("CirclePayload").unwrap());
    }
}
