use quote::ToTokens;
use syn::Token;

use crate::model::{DeriveValue, IntermediateAttributes};

impl From<&syn::Attribute> for IntermediateAttributes {
    fn from(value: &syn::Attribute) -> Self {
        let mut attributes = IntermediateAttributes::default();
        let expressions = value
            .parse_args_with(
                syn::punctuated::Punctuated::<syn::Expr, Token![,]>::parse_terminated,
            )
            .unwrap_or_else(|_| {
                panic!("Unparseable attribute: {}", value.to_token_stream())
            });

        for expression in expressions {
            match expression {
                syn::Expr::Assign(assign) => {
                    let key = assign.left.to_token_stream().to_string();
                    let value = DeriveValue {
                        tokens: assign.right.to_token_stream(),
                    };
                    attributes.pairs.entry(key).or_default().push(value);
                }
                syn::Expr::Path(path) => {
                    attributes
                        .singletons
                        .insert(path.to_token_stream().to_string());
                }
                _ => panic!(
                    "Unparseable attribute expression: {}",
                    expression.to_token_stream()
                ),
            }
        }

        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Literal;
    use quote::ToTokens;
    use syn::parse_quote;

    #[test]
    fn construct_singletons() {
        // Setup
        let attribute: syn::Attribute = parse_quote! { #[declargs(argument, option)] };

        // Execute
        let attributes = IntermediateAttributes::from(&attribute);

        // Verify
        assert_eq!(
            attributes.singletons,
            ["argument".to_string(), "option".to_string()]
                .into_iter()
                .collect()
        );
        assert!(attributes.pairs.is_empty());
    }

    #[test]
    fn construct_pairs() {
        // Setup
        let attribute: syn::Attribute = parse_quote! { #[declargs(help = "abc", short = 'c')] };

        // Execute
        let attributes = IntermediateAttributes::from(&attribute);

        // Verify
        assert!(attributes.singletons.is_empty());
        assert_eq!(
            attributes.pairs.get("help"),
            Some(&vec![DeriveValue {
                tokens: Literal::string("abc").into_token_stream(),
            }])
        );
        assert_eq!(
            attributes.pairs.get("short"),
            Some(&vec![DeriveValue {
                tokens: Literal::character('c').into_token_stream(),
            }])
        );
    }

    #[test]
    fn construct_repeated_pairs() {
        // Setup
        let attribute: syn::Attribute =
            parse_quote! { #[declargs(command = (0, Abc), command = (1, Def))] };

        // Execute
        let attributes = IntermediateAttributes::from(&attribute);

        // Verify
        let commands = attributes.pairs.get("command").unwrap();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].tokens.to_string(), "(0 , Abc)");
        assert_eq!(commands[1].tokens.to_string(), "(1 , Def)");
    }

    #[test]
    fn construct_mixed() {
        // Setup
        let attribute: syn::Attribute = parse_quote! { #[declargs(option, help = "abc")] };

        // Execute
        let attributes = IntermediateAttributes::from(&attribute);

        // Verify
        assert_eq!(
            attributes.singletons,
            ["option".to_string()].into_iter().collect()
        );
        assert_eq!(
            attributes.pairs.get("help"),
            Some(&vec![DeriveValue {
                tokens: Literal::string("abc").into_token_stream(),
            }])
        );
    }

    #[test]
    #[should_panic]
    fn construct_empty() {
        // Setup
        let attribute: syn::Attribute = parse_quote! { #[declargs] };

        // Execute & verify
        let _ = IntermediateAttributes::from(&attribute);
    }

    #[test]
    #[should_panic]
    fn construct_unparseable_expression() {
        // Setup
        let attribute: syn::Attribute = parse_quote! { #[declargs(let x = 0)] };

        // Execute & verify
        let _ = IntermediateAttributes::from(&attribute);
    }
}
