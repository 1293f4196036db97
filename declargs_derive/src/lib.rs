//! Derive macros for `declargs`.
//! See [documentation root](https://docs.rs/declargs/latest/declargs/index.html) for full details.
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

mod generate;
mod load;
mod model;

pub(crate) const MACRO_DECLARGS_PARSER: &str = "DeclargsParser";
pub(crate) const MACRO_DECLARGS_SUB_PARSER: &str = "DeclargsSubParser";
pub(crate) const MACRO_DECLARGS_CHOICES: &str = "DeclargsChoices";

/// Instrument the structure with a `declargs` command line parser.
#[proc_macro_derive(DeclargsParser, attributes(declargs))]
pub fn declargs_parser(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);
    expand(model::DeriveParser::try_from(derive_input).and_then(TokenStream2::try_from))
}

/// Instrument the structure as a sub-command for a `declargs` command line parser.
#[proc_macro_derive(DeclargsSubParser, attributes(declargs))]
pub fn declargs_sub_parser(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);
    expand(model::DeriveSubParser::try_from(derive_input).and_then(TokenStream2::try_from))
}

/// Instrument the enum so its variants surface as parameter choices.
#[proc_macro_derive(DeclargsChoices, attributes(declargs))]
pub fn declargs_choices(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);
    expand(model::DeriveChoices::try_from(derive_input).and_then(TokenStream2::try_from))
}

fn expand(result: Result<TokenStream2, syn::Error>) -> TokenStream {
    match result {
        Ok(tokens) => tokens.into(),
        Err(error) => error.to_compile_error().into(),
    }
}

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
