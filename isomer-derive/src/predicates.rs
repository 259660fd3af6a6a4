use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Generates one `is_<variant>()` method per enum variant.
pub fn generate_predicates(data: &syn::DataEnum) -> syn::Result<TokenStream> {
    let mut seen = Vec::with_capacity(data.variants.len());

    let methods: Vec<_> = data
        .variants
        .iter()
        .map(|variant| {
            let ident = &variant.ident;
            let snake = to_snake_case(&ident.to_string());

            if seen.contains(&snake) {
                return Err(syn::Error::new_spanned(
                    ident,
                    format!("variant predicate `is_{}` would be generated twice", snake),
                ));
            }
            seen.push(snake.clone());

            let method = format_ident!("is_{}", snake);
            let doc = format!("Returns true if this is the `{}` variant.", ident);
            Ok(quote! {
                #[doc = #doc]
                pub fn #method(&self) -> bool {
                    ::std::matches!(self, Self::#ident { .. })
                }
            })
        })
        .collect::<syn::Result<_>>()?;

    Ok(quote! { #(#methods)* })
}

/// Converts a CamelCase identifier into snake_case.
///
/// An underscore is inserted before an uppercase letter that follows a
/// lowercase letter or a digit: `WinterOrSpring` -> `winter_or_spring`,
/// `V4` -> `v4`, `V4Mapped` -> `v4_mapped`.
fn to_snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    let mut prev: Option<char> = None;

    for c in ident.chars() {
        if c.is_uppercase() {
            if matches!(prev, Some(p) if p.is_lowercase() || p.is_ascii_digit()) {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_simple() {
        assert_eq!(to_snake_case("V4"), "v4");
        assert_eq!(to_snake_case("V6"), "v6");
        assert_eq!(to_snake_case("Circle"), "circle");
    }

    #[test]
    fn snake_case_compound() {
        assert_eq!(to_snake_case("WinterOrSpring"), "winter_or_spring");
        assert_eq!(to_snake_case("V4Mapped"), "v4_mapped");
        assert_eq!(to_snake_case("IPv6"), "ipv6");
    }

    #[test]
    fn predicates_for_each_variant() {
        let data: syn::DeriveInput = syn::parse_quote! {
            enum IpAddr {
                V4(i32, i32, i32, i32),
                V6(String),
            }
        };
        let syn::Data::Enum(data) = data.data else {
            panic!("expected enum");
        };

        let tokens = generate_predicates(&data).unwrap().to_string();
        assert!(tokens.contains("is_v4"));
        assert!(tokens.contains("is_v6"));
    }

    #[test]
    fn colliding_predicates_rejected() {
        let data: syn::DeriveInput = syn::parse_quote! {
            enum Clash {
                Ab,
                ab,
            }
        };
        let syn::Data::Enum(data) = data.data else {
            panic!("expected enum");
        };

        assert!(generate_predicates(&data).is_err());
    }
}
