use crate::model::{Command, DeriveParameter, DeriveValue, ParameterType};
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};

impl DeriveParameter {
    pub(crate) fn generate(self, parent: &syn::Ident) -> TokenStream2 {
        let DeriveParameter {
            field_name,
            parameter_type,
            choices,
            factory,
            help,
        } = self;
        let argument_name = format!("{field_name}");
        // Field underscores become dashes on the command line.
        let option_name = argument_name.replace('_', "-");

        match parameter_type {
            ParameterType::CollectionArgument { nargs } => {
                let nargs = nargs.tokens;
                let capture = apply_factory(
                    quote! { Collection::new(&mut #parent.#field_name, #nargs) },
                    factory,
                );
                let parameter = apply_choices(
                    quote! { Parameter::argument(#capture, #argument_name) },
                    choices,
                );
                if let Some(help) = help {
                    let help = help.tokens;
                    quote! {
                        clp = clp.add(#parameter.help(#help));
                    }
                } else {
                    quote! {
                        clp = clp.add(#parameter);
                    }
                }
            }
            ParameterType::ScalarArgument => {
                let capture = apply_factory(
                    quote! { Scalar::new(&mut #parent.#field_name) },
                    factory,
                );
                let parameter = apply_choices(
                    quote! { Parameter::argument(#capture, #argument_name) },
                    choices,
                );
                if let Some(help) = help {
                    let help = help.tokens;
                    quote! {
                        clp = clp.add(#parameter.help(#help));
                    }
                } else {
                    quote! {
                        clp = clp.add(#parameter);
                    }
                }
            }

            ParameterType::CollectionOption { nargs, short } => {
                let nargs = nargs.tokens;
                let short = flatten(short);
                let field_default = format_ident!("{field_name}_default");
                let capture = apply_factory(
                    quote! { Collection::new(&mut #parent.#field_name, #nargs) },
                    factory,
                );
                let parameter = apply_choices(
                    quote! { Parameter::option(#capture, #option_name, #short) },
                    choices,
                );

                if let Some(help) = help {
                    let help = help.tokens;
                    quote! {
                        let #field_default = format!("{:?}", #parent.#field_name);
                        clp = clp.add(#parameter.help(format!("{} (default {})", #help, #field_default)));
                    }
                } else {
                    quote! {
                        let #field_default = format!("{:?}", #parent.#field_name);
                        clp = clp.add(#parameter.help(format!("(default {})", #field_default)));
                    }
                }
            }
            ParameterType::ScalarOption { short } => {
                let short = flatten(short);
                let field_default = format_ident!("{field_name}_default");
                let capture = apply_factory(
                    quote! { Scalar::new(&mut #parent.#field_name) },
                    factory,
                );
                let parameter = apply_choices(
                    quote! { Parameter::option(#capture, #option_name, #short) },
                    choices,
                );

                if let Some(help) = help {
                    let help = help.tokens;
                    quote! {
                        let #field_default = #parent.#field_name.to_string();
                        clp = clp.add(#parameter.help(format!("{} (default {})", #help, #field_default)));
                    }
                } else {
                    quote! {
                        let #field_default = #parent.#field_name.to_string();
                        clp = clp.add(#parameter.help(format!("(default {})", #field_default)));
                    }
                }
            }
            ParameterType::OptionalOption { short } => {
                let short = flatten(short);
                let field_default = format_ident!("{field_name}_default");
                let capture = apply_factory(
                    quote! { Optional::new(&mut #parent.#field_name) },
                    factory,
                );
                let parameter = apply_choices(
                    quote! { Parameter::option(#capture, #option_name, #short) },
                    choices,
                );

                if let Some(help) = help {
                    let help = help.tokens;
                    quote! {
                        if let Some(inner) = #parent.#field_name.as_ref() {
                            let #field_default = format!("{inner}");
                            clp = clp.add(#parameter.help(format!("{} (default {})", #help, #field_default)));
                        } else {
                            clp = clp.add(#parameter.help(#help));
                        }
                    }
                } else {
                    quote! {
                        if let Some(inner) = #parent.#field_name.as_ref() {
                            let #field_default = format!("{inner}");
                            clp = clp.add(#parameter.help(format!("(default {})", #field_default)));
                        } else {
                            clp = clp.add(#parameter);
                        }
                    }
                }
            }

            ParameterType::Switch { short } => {
                let short = flatten(short);
                let field_default = format_ident!("{field_name}_default");

                if let Some(help) = help {
                    let help = help.tokens;
                    quote! {
                        let #field_default = format!("{:?}", #parent.#field_name);
                        clp = clp.add(Parameter::option(Switch::new(&mut #parent.#field_name, true).negation(false), #option_name, #short)
                            .help(format!("{} (default {})", #help, #field_default)));
                    }
                } else {
                    quote! {
                        let #field_default = format!("{:?}", #parent.#field_name);
                        clp = clp.add(Parameter::option(Switch::new(&mut #parent.#field_name, true).negation(false), #option_name, #short)
                            .help(format!("(default {})", #field_default)));
                    }
                }
            }
            ParameterType::Condition { commands } => {
                let commands: Vec<_> = commands
                    .into_iter()
                    .map(|command| {
                        let Command {
                            variant,
                            command_struct,
                        } = command;
                        let variant = variant.tokens;
                        let command_struct = &command_struct.tokens;
                        let command_struct_target = format_ident!("{command_struct}_target");
                        quote! {
                            clp = clp.command(#variant, #command_struct::setup_command(&mut #command_struct_target));
                        }
                    })
                    .collect();
                let condition = apply_choices(
                    quote! { Condition::new(Scalar::new(&mut #parent.#field_name), #argument_name) },
                    choices,
                );
                if let Some(help) = help {
                    let help = help.tokens;
                    quote! {
                        let mut clp = clp.branch(#condition.help(#help));
                        #( #commands )*
                    }
                } else {
                    quote! {
                        let mut clp = clp.branch(#condition);
                        #( #commands )*
                    }
                }
            }
        }
    }
}

fn flatten(value: Option<DeriveValue>) -> TokenStream2 {
    value.map_or_else(
        || quote! { None },
        |s| {
            let tokens = s.tokens;
            quote! { Some(#tokens) }
        },
    )
}

fn apply_factory(capture: TokenStream2, factory: Option<DeriveValue>) -> TokenStream2 {
    match factory {
        Some(function) => {
            let function = function.tokens;
            quote! { #capture.factory(#function) }
        }
        None => capture,
    }
}

fn apply_choices(parameter: TokenStream2, choices: Option<DeriveValue>) -> TokenStream2 {
    match choices {
        Some(function) => {
            let function = function.tokens;
            quote! { #function(#parameter) }
        }
        None => parameter,
    }
}
