use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

/// An opaque value lifted out of the macro input tokens.
#[derive(Debug, Clone)]
pub(crate) struct DeriveValue {
    pub tokens: TokenStream2,
}

// `TokenStream` is not `PartialEq`; compare via the token representation.
impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        self.tokens.to_string() == other.tokens.to_string()
    }
}

impl Eq for DeriveValue {}

/// The contents of a `#[declargs(..)]` attribute, before semantic interpretation.
#[derive(Debug, Default)]
pub(crate) struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

/// A single `command = (variant, SubStruct)` assignment.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Command {
    pub variant: DeriveValue,
    pub command_struct: DeriveValue,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ParameterType {
    CollectionArgument {
        nargs: DeriveValue,
    },
    ScalarArgument,

    CollectionOption {
        nargs: DeriveValue,
        short: Option<DeriveValue>,
    },
    OptionalOption {
        short: Option<DeriveValue>,
    },
    ScalarOption {
        short: Option<DeriveValue>,
    },
    Switch {
        short: Option<DeriveValue>,
    },

    Condition {
        commands: Vec<Command>,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveParameter {
    pub field_name: syn::Ident,
    pub parameter_type: ParameterType,
    /// The choices setup function, either user supplied or `T::setup_choices`.
    pub choices: Option<DeriveValue>,
    /// The token conversion function, overriding `FromStr`.
    pub factory: Option<DeriveValue>,
    pub help: Option<DeriveValue>,
}

/// The rendering style selected by `show = ..`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Show {
    Line,
    Table,
    Tree,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveParser {
    pub struct_name: syn::Ident,
    pub program_name: DeriveValue,
    pub about: Option<DeriveValue>,
    pub show: Option<Show>,
    pub parameters: Vec<DeriveParameter>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveSubParser {
    pub struct_name: syn::Ident,
    pub parameters: Vec<DeriveParameter>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveVariant {
    pub field_name: syn::Ident,
    pub hidden: bool,
    pub help: Option<DeriveValue>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveChoices {
    pub struct_name: syn::Ident,
    pub variants: Vec<DeriveVariant>,
}
