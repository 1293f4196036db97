use quote::{quote, ToTokens};

use crate::load::incompatible_error;
use crate::model::{Command, DeriveParameter, DeriveValue, IntermediateAttributes, ParameterType};

impl TryFrom<&syn::Field> for DeriveParameter {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let mut attributes = IntermediateAttributes::default();

        for attribute in &value.attrs {
            if attribute.path().is_ident("declargs") {
                attributes = IntermediateAttributes::from(attribute);
            }
        }

        let field_name = value
            .ident
            .clone()
            .expect("parameter fields must be named");
        let explicit_argument = attributes.singletons.contains("argument");
        let explicit_option = attributes.singletons.contains("option");
        let short = single_pair(&attributes, "short");
        let (explicit_collection, nargs) = match single_pair(&attributes, "collection") {
            Some(nargs) => (true, nargs),
            None => (
                false,
                DeriveValue {
                    tokens: quote! { Nargs::AtLeastOne },
                },
            ),
        };
        let help = single_pair(&attributes, "help");
        let factory = single_pair(&attributes, "factory");
        let explicit_choices = attributes.singletons.contains("choices");
        let choices = match single_pair(&attributes, "choices") {
            Some(function) => {
                if explicit_choices {
                    return Err(incompatible_error(
                        &field_name,
                        "#[declargs(choices)]",
                        "#[declargs(choices = ..)]",
                    ));
                }
                Some(function)
            }
            None if explicit_choices => {
                let target = scalar_type(&value.ty);
                Some(DeriveValue {
                    tokens: quote! { #target::setup_choices },
                })
            }
            None => None,
        };
        let commands: Option<&Vec<DeriveValue>> = attributes.pairs.get("command");
        let explicit_command = commands.is_some();

        if explicit_argument && explicit_option {
            return Err(incompatible_error(
                &field_name,
                "#[declargs(argument)]",
                "#[declargs(option)]",
            ));
        }

        if explicit_argument && short.is_some() {
            return Err(incompatible_error(
                &field_name,
                "#[declargs(argument)]",
                "#[declargs(short = ..)]",
            ));
        }

        if explicit_command && explicit_option {
            return Err(incompatible_error(
                &field_name,
                "#[declargs(command = ..)]",
                "#[declargs(option)]",
            ));
        }

        if explicit_command && explicit_collection {
            return Err(incompatible_error(
                &field_name,
                "#[declargs(command = ..)]",
                "#[declargs(collection = ..)]",
            ));
        }

        if explicit_command && factory.is_some() {
            return Err(incompatible_error(
                &field_name,
                "#[declargs(command = ..)]",
                "#[declargs(factory = ..)]",
            ));
        }

        let parameter_type = match &value.ty {
            syn::Type::Path(path) => match &path.path.segments.first() {
                Some(segment) => {
                    let ident = segment.ident.to_string();

                    match ident.as_str() {
                        "Option" => {
                            disallow(
                                &field_name,
                                "Option<..>",
                                &[
                                    (&explicit_argument, "argument"),
                                    (&explicit_collection, "collection = .."),
                                    (&explicit_command, "command = .."),
                                ],
                            )?;

                            ParameterType::OptionalOption { short }
                        }
                        "Vec" | "HashSet" => {
                            disallow(
                                &field_name,
                                format!("{}<..>", ident.as_str()),
                                &[(&explicit_command, "command = ..")],
                            )?;

                            if explicit_option {
                                ParameterType::CollectionOption { nargs, short }
                            } else {
                                ParameterType::CollectionArgument { nargs }
                            }
                        }
                        "bool" => {
                            disallow(
                                &field_name,
                                "bool",
                                &[
                                    (&explicit_command, "command = .."),
                                    (&factory.is_some(), "factory = .."),
                                    (&choices.is_some(), "choices"),
                                ],
                            )?;

                            ParameterType::Switch { short }
                        }
                        _ => {
                            if let Some(cmds) = commands {
                                let commands = cmds
                                    .iter()
                                    .map(|derive_value| build_command(&field_name, derive_value))
                                    .collect::<Result<Vec<_>, _>>()?;
                                ParameterType::Condition { commands }
                            } else if explicit_collection {
                                if explicit_option {
                                    ParameterType::CollectionOption { nargs, short }
                                } else {
                                    ParameterType::CollectionArgument { nargs }
                                }
                            } else if explicit_option {
                                ParameterType::ScalarOption { short }
                            } else {
                                ParameterType::ScalarArgument
                            }
                        }
                    }
                }
                None => {
                    let tts = &value.to_token_stream();
                    panic!("Empty field path: {tts}");
                }
            },
            _ => {
                let tts = &value.ty.to_token_stream();
                panic!("Unparseable field: {tts}");
            }
        };

        Ok(DeriveParameter {
            field_name,
            parameter_type,
            choices,
            factory,
            help,
        })
    }
}

fn single_pair(attributes: &IntermediateAttributes, key: &str) -> Option<DeriveValue> {
    attributes.pairs.get(key).map(|values| {
        let tokens = values
            .first()
            .unwrap_or_else(|| panic!("attribute pair '{key}' must contain non-empty values"))
            .tokens
            .clone();
        DeriveValue { tokens }
    })
}

/// The type over which the parameter converts tokens.
/// Strips the `Option`/`Vec`/`HashSet` container, if any.
fn scalar_type(ty: &syn::Type) -> proc_macro2::TokenStream {
    if let syn::Type::Path(path) = ty {
        if let Some(segment) = path.path.segments.first() {
            match segment.ident.to_string().as_str() {
                "Option" | "Vec" | "HashSet" => {
                    if let syn::PathArguments::AngleBracketed(generics) = &segment.arguments {
                        if let Some(syn::GenericArgument::Type(inner)) = generics.args.first() {
                            return inner.to_token_stream();
                        }
                    }
                }
                _ => {}
            }
        }
    }

    ty.to_token_stream()
}

fn build_command(
    field_name: &syn::Ident,
    derive_value: &DeriveValue,
) -> Result<Command, syn::Error> {
    let invalid = || {
        let tts = &derive_value.tokens;
        syn::Error::new(
            field_name.span(),
            format!(
                "Invalid - command assignment expecting `(BranchVariant, SubCommandStruct)`, found `{tts}`."
            ),
        )
    };
    let expression: syn::Expr =
        syn::parse2(derive_value.tokens.clone()).map_err(|_| invalid())?;

    match expression {
        syn::Expr::Tuple(tuple) => match (tuple.elems.first(), tuple.elems.last()) {
            (Some(syn::Expr::Lit(left)), Some(syn::Expr::Path(right))) => Ok(Command {
                variant: DeriveValue {
                    tokens: left.to_token_stream(),
                },
                command_struct: DeriveValue {
                    tokens: right.to_token_stream(),
                },
            }),
            (Some(syn::Expr::Path(left)), Some(syn::Expr::Path(right))) => Ok(Command {
                variant: DeriveValue {
                    tokens: left.to_token_stream(),
                },
                command_struct: DeriveValue {
                    tokens: right.to_token_stream(),
                },
            }),
            _ => Err(invalid()),
        },
        _ => Err(invalid()),
    }
}

fn disallow(
    field_name: &syn::Ident,
    antecedent: impl Into<String>,
    condition_names: &[(&bool, &str)],
) -> Result<(), syn::Error> {
    for (condition, name) in condition_names {
        if **condition {
            return Err(incompatible_error(
                field_name,
                antecedent,
                format!("#[declargs({name})]").as_str(),
            ));
        }
    }

    Ok(())
}
