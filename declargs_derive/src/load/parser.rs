use quote::quote;

use crate::model::{
    DeriveParameter, DeriveParser, DeriveSubParser, DeriveValue, IntermediateAttributes,
    ParameterType, Show,
};
use crate::{MACRO_DECLARGS_PARSER, MACRO_DECLARGS_SUB_PARSER};

impl TryFrom<syn::DeriveInput> for DeriveParser {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let mut attributes = IntermediateAttributes::default();

        for attribute in &value.attrs {
            if attribute.path().is_ident("declargs") {
                attributes = IntermediateAttributes::from(attribute);
            }
        }

        let program_name = match attributes.pairs.get("program") {
            Some(values) => {
                let tokens = &values
                    .first()
                    .expect("attribute pair 'program' must contain non-empty values")
                    .tokens;
                DeriveValue {
                    tokens: quote! { #tokens },
                }
            }
            None => DeriveValue {
                tokens: quote! { env!("CARGO_CRATE_NAME") },
            },
        };
        let about = attributes.pairs.get("about").map(|values| {
            let tokens = &values
                .first()
                .expect("attribute pair 'about' must contain non-empty values")
                .tokens;
            DeriveValue {
                tokens: quote! { #tokens },
            }
        });
        let show = match attributes.pairs.get("show") {
            Some(values) => {
                let tokens = &values
                    .first()
                    .expect("attribute pair 'show' must contain non-empty values")
                    .tokens;
                match tokens.to_string().as_str() {
                    "line" => Some(Show::Line),
                    "table" => Some(Show::Table),
                    "tree" => Some(Show::Tree),
                    other => {
                        return Err(syn::Error::new(
                            value.ident.span(),
                            format!(
                                "Invalid - show expecting one of `line`, `table`, `tree`, found `{other}`."
                            ),
                        ));
                    }
                }
            }
            None => None,
        };
        let parser_name = &value.ident;

        match &value.data {
            syn::Data::Struct(ds) => {
                let parameters = load_parameters(ds)?;

                let conditions: Vec<&syn::Ident> = parameters
                    .iter()
                    .filter_map(|p| match &p.parameter_type {
                        ParameterType::Condition { .. } => Some(&p.field_name),
                        _ => None,
                    })
                    .collect();
                if conditions.len() > 1 {
                    return Err(syn::Error::new(
                        value.ident.span(),
                        format!(
                            "Invalid - parser cannot have multiple conditions: {:?}.",
                            conditions.iter().map(|i| i.to_string()).collect::<Vec<_>>(),
                        ),
                    ));
                }

                Ok(DeriveParser {
                    struct_name: parser_name.clone(),
                    program_name,
                    about,
                    show,
                    parameters,
                })
            }
            _ => Err(syn::Error::new(
                value.ident.span(),
                format!("Invalid - {MACRO_DECLARGS_PARSER} only applies to 'struct' data structures."),
            )),
        }
    }
}

impl TryFrom<syn::DeriveInput> for DeriveSubParser {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let parser_name = &value.ident;

        match &value.data {
            syn::Data::Struct(ds) => {
                let parameters = load_parameters(ds)?;

                for parameter in &parameters {
                    if let ParameterType::Condition { .. } = &parameter.parameter_type {
                        let field = &parameter.field_name;
                        return Err(syn::Error::new(
                            field.span(),
                            format!(
                                "Invalid - {MACRO_DECLARGS_SUB_PARSER} cannot branch via `#[declargs(command = ..)]`: `{field}`."
                            ),
                        ));
                    }
                }

                Ok(DeriveSubParser {
                    struct_name: parser_name.clone(),
                    parameters,
                })
            }
            _ => Err(syn::Error::new(
                value.ident.span(),
                format!(
                    "Invalid - {MACRO_DECLARGS_SUB_PARSER} only applies to 'struct' data structures."
                ),
            )),
        }
    }
}

fn load_parameters(ds: &syn::DataStruct) -> Result<Vec<DeriveParameter>, syn::Error> {
    match ds {
        syn::DataStruct {
            fields: syn::Fields::Named(ref fields),
            ..
        } => fields
            .named
            .iter()
            .map(DeriveParameter::try_from)
            .collect::<Result<Vec<_>, _>>(),
        syn::DataStruct { .. } => Ok(Vec::default()),
    }
}
