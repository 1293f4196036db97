use thiserror::Error;

use crate::model::Nargs;

/// Marker trait for capture fields usable as a Cli option.
pub trait CliOption {}

/// Marker trait for capture fields usable as a Cli argument.
pub trait CliArgument {}

/// Conversion of raw `&str` input into the field's concrete type T.
///
/// Sits at the leaves of the command line parser object graph, keeping each field typed through the compiler.
#[doc(hidden)]
pub trait GenericCapturable<'a, T> {
    /// Record that the parameter matched on the Cli.
    /// `negated` is set when the match came through the inverted `no-` long form.
    fn matched(&mut self, negated: bool);

    /// Convert the token and store it into the bound field.
    fn capture(&mut self, token: &str) -> Result<(), InvalidCapture>;

    /// The `Nargs` cardinality of this field.
    fn nargs(&self) -> Nargs;

    /// Whether the parameter accepts the inverted `no-` long form.
    fn negatable(&self) -> bool {
        false
    }
}

#[derive(Debug, Error)]
#[doc(hidden)]
pub enum InvalidCapture {
    #[error("cannot convert '{token}' to {type_name}.")]
    InvalidConversion {
        token: String,
        type_name: &'static str,
    },
    #[error("cannot convert '{token}' to {type_name}: {message}.")]
    InvalidFactory {
        token: String,
        type_name: &'static str,
        message: String,
    },
}
