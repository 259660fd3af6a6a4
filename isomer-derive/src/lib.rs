use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

mod predicates;

/// Derive macro for the `Tagged` trait.
///
/// Generates `tag()` and `tags()` plus one inherent `is_<variant>()`
/// predicate per variant. Predicate names are the snake_case form of the
/// variant identifier, so `V4` becomes `is_v4()`.
///
/// # Example
///
/// ```ignore
/// use isomer_core::Tagged;
///
/// #[derive(Tagged)]
/// enum Shape {
///     Circle(f64),
///     #[tagged(rename = "rect")]
///     Rectangle { w: f64, h: f64 },
/// }
/// ```
///
/// # Attributes
///
/// - `#[tagged(rename = "name")]` - Use a custom tag string for this variant
#[proc_macro_derive(Tagged, attributes(tagged))]
pub fn derive_tagged(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_tagged_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_tagged_impl(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let data = match &input.data {
        syn::Data::Enum(data) => data,
        syn::Data::Struct(_) | syn::Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Tagged can only be derived for enums",
            ));
        }
    };

    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            input,
            "Tagged cannot be derived for an enum without variants",
        ));
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let tags: Vec<String> = data
        .variants
        .iter()
        .map(|variant| {
            let attrs = parse_variant_attrs(&variant.attrs)?;
            Ok(attrs.rename.unwrap_or_else(|| variant.ident.to_string()))
        })
        .collect::<syn::Result<_>>()?;

    let arms = data.variants.iter().zip(&tags).map(|(variant, tag)| {
        let ident = &variant.ident;
        quote! { Self::#ident { .. } => #tag }
    });

    let predicates = predicates::generate_predicates(data)?;

    Ok(quote! {
        impl #impl_generics ::isomer_core::Tagged for #name #ty_generics #where_clause {
            fn tag(&self) -> &'static str {
                match self {
                    #(#arms),*
                }
            }

            fn tags() -> &'static [&'static str] {
                &[#(#tags),*]
            }
        }

        impl #impl_generics #name #ty_generics #where_clause {
            #predicates
        }
    })
}

#[derive(Default)]
pub(crate) struct VariantAttrs {
    pub rename: Option<String>,
}

pub(crate) fn parse_variant_attrs(attrs: &[syn::Attribute]) -> syn::Result<VariantAttrs> {
    let mut result = VariantAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("tagged") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: syn::LitStr = meta.value()?.parse()?;
                result.rename = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported tagged attribute"))
            }
        })?;
    }

    Ok(result)
}
