use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::{DeriveChoices, DeriveVariant};

impl TryFrom<DeriveChoices> for TokenStream2 {
    type Error = syn::Error;

    fn try_from(value: DeriveChoices) -> Result<Self, Self::Error> {
        let DeriveChoices {
            struct_name,
            variants,
        } = value;
        let choices: Vec<TokenStream2> = variants
            .into_iter()
            .filter(|variant| !variant.hidden)
            .map(|variant| {
                let DeriveVariant {
                    field_name, help, ..
                } = variant;
                let help = help.map_or_else(
                    || quote! { "" },
                    |description| {
                        let tokens = description.tokens;
                        quote! { #tokens }
                    },
                );
                quote! {
                    .choice(#struct_name::#field_name, #help)
                }
            })
            .collect();

        Ok(quote! {
            impl #struct_name {
                fn setup_choices<C>(value: C) -> C
                where
                    C: Choices<#struct_name>,
                {
                    value
                        #( #choices )*
                }
            }
        })
    }
}
