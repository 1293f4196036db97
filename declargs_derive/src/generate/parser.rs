use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};

use crate::model::{DeriveParameter, DeriveParser, DeriveSubParser, ParameterType, Show};

impl TryFrom<DeriveParser> for TokenStream2 {
    type Error = syn::Error;

    fn try_from(value: DeriveParser) -> Result<Self, Self::Error> {
        let DeriveParser {
            struct_name,
            program_name,
            about,
            show,
            parameters,
        } = value;
        let struct_name_str = format!("{struct_name}");
        let program = program_name.tokens;
        let about = about.map_or_else(
            || quote! {},
            |description| {
                let description = description.tokens;
                quote! { .about(#description) }
            },
        );
        let summary = summary_impl(&struct_name, &parameters);

        let mut plains = Vec::default();
        let mut conditions = Vec::default();
        for parameter in parameters {
            match &parameter.parameter_type {
                ParameterType::Condition { .. } => conditions.push(parameter),
                _ => plains.push(parameter),
            }
        }

        // The condition fans out into sub-command structures, which parse into
        // their own `default()` instances and return alongside the root.
        let mut sub_inits = Vec::default();
        let mut sub_targets = Vec::default();
        let mut sub_types = Vec::default();
        let mut show_groups = Vec::default();

        if let Some(condition) = conditions.first() {
            let cond_field = &condition.field_name;
            let cond_name = format!("{cond_field}");

            if let ParameterType::Condition { commands } = &condition.parameter_type {
                for command in commands {
                    let variant = &command.variant.tokens;
                    let command_struct = format_ident!("{}", command.command_struct.tokens.to_string());
                    let command_struct_target = format_ident!("{command_struct}_target");
                    let command_struct_str = format!("{command_struct}");
                    sub_inits.push(quote! {
                        let mut #command_struct_target = #command_struct::default();
                    });
                    show_groups.push(quote! {
                        if target.#cond_field == #variant {
                            entries.push(Entry::Group {
                                name: #cond_name.to_string(),
                                type_name: #command_struct_str.to_string(),
                                entries: Summary::entries(&#command_struct_target),
                            });
                        }
                    });
                    sub_targets.push(command_struct_target);
                    sub_types.push(command_struct);
                }
            }
        }

        let target = format_ident!("target");
        let fields = plains
            .into_iter()
            .chain(conditions)
            .map(|p| p.generate(&target))
            .collect::<Vec<_>>();

        let clp = if fields.is_empty() {
            quote! {
                let clp = CommandLineParser::new(#program)#about;
            }
        } else if sub_targets.is_empty() {
            quote! {
                let mut clp = CommandLineParser::new(#program)#about;
                #( #fields )*
            }
        } else if fields.len() == 1 {
            // The lone condition rebinds `clp` itself.
            quote! {
                let clp = CommandLineParser::new(#program)#about;
                #( #fields )*
            }
        } else {
            quote! {
                let mut clp = CommandLineParser::new(#program)#about;
                #( #fields )*
            }
        };

        let rendering = match show {
            None => quote! {},
            Some(show) => {
                let render_fn = match show {
                    Show::Line => quote! { render_line },
                    Show::Table => quote! { render_table },
                    Show::Tree => quote! { render_tree },
                };

                if sub_targets.is_empty() {
                    quote! {
                        println!("{}", #render_fn(&target));
                    }
                } else {
                    quote! {
                        let mut entries = Summary::entries(&target);
                        #( #show_groups )*
                        struct Rendering {
                            entries: Vec<Entry>,
                        }
                        impl Summary for Rendering {
                            fn type_name(&self) -> &'static str {
                                #struct_name_str
                            }
                            fn entries(&self) -> Vec<Entry> {
                                self.entries.clone()
                            }
                        }
                        println!("{}", #render_fn(&Rendering { entries }));
                    }
                }
            }
        };

        let (return_type, return_value) = if sub_targets.is_empty() {
            (quote! { #struct_name }, quote! { target })
        } else {
            (
                quote! { (#struct_name, #( #sub_types ),*) },
                quote! { (target, #( #sub_targets ),*) },
            )
        };

        Ok(quote! {
            impl #struct_name {
                fn declargs_parse() -> #return_type {
                    let mut target = #struct_name::default();
                    #( #sub_inits )*
                    #clp
                    let parser = clp.build();
                    parser.parse();
                    #rendering
                    #return_value
                }
            }

            #summary
        })
    }
}

impl TryFrom<DeriveSubParser> for TokenStream2 {
    type Error = syn::Error;

    fn try_from(value: DeriveSubParser) -> Result<Self, Self::Error> {
        let DeriveSubParser {
            struct_name,
            parameters,
        } = value;
        let summary = summary_impl(&struct_name, &parameters);

        let setup_command = if parameters.is_empty() {
            quote! {
                fn setup_command<'a>(_target: &'a mut #struct_name) -> impl FnOnce(SubCommand<'a>) -> SubCommand<'a> {
                    |clp: SubCommand<'a>| clp
                }
            }
        } else {
            let target = format_ident!("target");
            let fields = parameters
                .into_iter()
                .map(|p| p.generate(&target))
                .collect::<Vec<_>>();

            quote! {
                fn setup_command<'a>(target: &'a mut #struct_name) -> impl FnOnce(SubCommand<'a>) -> SubCommand<'a> {
                    move |mut clp: SubCommand<'a>| {
                        #( #fields )*
                        clp
                    }
                }
            }
        };

        Ok(quote! {
            impl #struct_name {
                #setup_command
            }

            #summary
        })
    }
}

/// The `Summary` implementation over the plain parameters.
/// The condition discriminator is covered by the sub-command group instead.
fn summary_impl(struct_name: &syn::Ident, parameters: &[DeriveParameter]) -> TokenStream2 {
    let struct_name_str = format!("{struct_name}");
    let entries: Vec<TokenStream2> = parameters
        .iter()
        .filter(|parameter| {
            !matches!(parameter.parameter_type, ParameterType::Condition { .. })
        })
        .map(|parameter| {
            let field_name = &parameter.field_name;
            let name = format!("{field_name}");
            quote! {
                Entry::Value {
                    name: #name.to_string(),
                    value: format!("{:?}", self.#field_name),
                },
            }
        })
        .collect();

    quote! {
        impl Summary for #struct_name {
            fn type_name(&self) -> &'static str {
                #struct_name_str
            }

            fn entries(&self) -> Vec<Entry> {
                vec![
                    #( #entries )*
                ]
            }
        }
    }
}
