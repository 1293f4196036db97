use crate::api::{CliArgument, CliOption, GenericCapturable, Scalar};
use crate::matcher::{ArgumentConfig, Bound, OptionConfig};
use crate::model::Nargs;
use crate::parser::{
    AnonymousCapturable, ArgumentCapture, ArgumentParameter, OptionCapture, OptionParameter,
};
use crate::prelude::Choices;
use crate::InvalidCapture;
use std::collections::HashMap;

pub(crate) struct AnonymousCapture<'a, T: 'a> {
    field: Box<dyn GenericCapturable<'a, T> + 'a>,
}

impl<'a, T> AnonymousCapture<'a, T> {
    pub(crate) fn bind(field: impl GenericCapturable<'a, T> + 'a) -> Self {
        Self {
            field: Box::new(field),
        }
    }
}

impl<'a, T> AnonymousCapturable for AnonymousCapture<'a, T> {
    fn matched(&mut self, negated: bool) {
        self.field.matched(negated);
    }

    fn capture(&mut self, value: &str) -> Result<(), InvalidCapture> {
        self.field.capture(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ParameterClass {
    Opt,
    Arg,
}

pub(super) struct ParameterInner<'a, T> {
    class: ParameterClass,
    field: AnonymousCapture<'a, T>,
    nargs: Nargs,
    name: String,
    short: Option<char>,
    negatable: bool,
    help: Option<String>,
    meta: Option<Vec<String>>,
    choices: HashMap<String, String>,
}

impl<'a, T> ParameterInner<'a, T> {
    pub(super) fn class(&self) -> ParameterClass {
        self.class
    }
}

impl<'a, T> std::fmt::Debug for ParameterInner<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let class = match &self.class {
            ParameterClass::Opt => "Opt",
            ParameterClass::Arg => "Arg",
        };
        let name = match &self.class {
            ParameterClass::Opt => format!("--{n}", n = self.name),
            ParameterClass::Arg => format!("{n}", n = self.name),
        };
        let short = match &self.class {
            ParameterClass::Opt => match &self.short {
                Some(s) => format!(" -{s},"),
                None => "".to_string(),
            },
            ParameterClass::Arg => "".to_string(),
        };
        let help = if let Some(d) = &self.help {
            format!(", {d}")
        } else {
            "".to_string()
        };

        write!(
            f,
            "{class}[{t}, {nargs}, {name},{short} {help}]",
            t = std::any::type_name::<T>(),
            nargs = self.nargs,
        )
    }
}

impl<'a, T> From<&ParameterInner<'a, T>> for OptionConfig {
    fn from(value: &ParameterInner<'a, T>) -> Self {
        let config = OptionConfig::new(value.name.clone(), value.short, Bound::from(value.nargs));

        if value.negatable {
            config.negated()
        } else {
            config
        }
    }
}

impl<'a, T> From<ParameterInner<'a, T>> for OptionCapture<'a> {
    fn from(value: ParameterInner<'a, T>) -> Self {
        let config = OptionConfig::from(&value);
        let ParameterInner { field, .. } = value;
        (config, Box::new(field))
    }
}

impl<'a, T> From<&ParameterInner<'a, T>> for OptionParameter {
    fn from(value: &ParameterInner<'a, T>) -> Self {
        OptionParameter::new(
            value.name.clone(),
            value.short,
            value.negatable,
            value.nargs,
            value.help.clone(),
            value.meta.clone(),
            value.choices.clone(),
        )
    }
}

impl<'a, T> From<&ParameterInner<'a, T>> for ArgumentConfig {
    fn from(value: &ParameterInner<'a, T>) -> Self {
        ArgumentConfig::new(value.name.clone(), Bound::from(value.nargs))
    }
}

impl<'a, T> From<ParameterInner<'a, T>> for ArgumentCapture<'a> {
    fn from(value: ParameterInner<'a, T>) -> Self {
        let config = ArgumentConfig::from(&value);
        let ParameterInner { field, .. } = value;
        (config, Box::new(field))
    }
}

impl<'a, T> From<&ParameterInner<'a, T>> for ArgumentParameter {
    fn from(value: &ParameterInner<'a, T>) -> Self {
        ArgumentParameter::new(
            value.name.clone(),
            value.nargs,
            value.help.clone(),
            value.meta.clone(),
            value.choices.clone(),
        )
    }
}

/// The discriminating argument on which the parser branches.
/// Passed to [`CommandLineParser::branch`](./struct.CommandLineParser.html#method.branch).
///
/// The type `T` of a `Condition` carries an implicit requirement (checked at build time, not compile time):
/// > `std::str::FromStr` must invert `std::fmt::Display`.
///
/// Most types satisfy this without any effort.
/// Take rusts `bool`, where the requirement holds:
/// ```
/// # use std::str::FromStr;
/// assert_eq!(bool::from_str("true").unwrap().to_string(), "true");
/// assert_eq!(bool::from_str("false").unwrap().to_string(), "false");
/// ```
///
/// Not every type holds up, though.
/// Take the following enum:
/// ```
/// # use std::str::FromStr;
/// // Implement FromStr to be case-insensitive.
/// // Implement Display.
/// enum FooBar {
///     Foo,
///     Bar,
/// }
/// # impl FromStr for FooBar {
/// #    type Err = String;
/// #    fn from_str(value: &str) -> Result<Self, Self::Err> {
/// #        match value.to_lowercase().as_str() {
/// #            "foo" => Ok(FooBar::Foo),
/// #            "bar" => Ok(FooBar::Bar),
/// #            _ => Err(format!("unknown: {}", value)),
/// #        }
/// #    }
/// # }
/// # impl std::fmt::Display for FooBar {
/// #   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
/// #       match self {
/// #           FooBar::Foo => write!(f, "Foo"),
/// #           FooBar::Bar => write!(f, "Bar"),
/// #       }
/// #   }
/// # }
/// assert_eq!(FooBar::from_str("Foo").unwrap().to_string(), "Foo");
/// // FromStr does not invert Display!
/// assert_ne!(FooBar::from_str("foo").unwrap().to_string(), "foo");
/// ```
pub struct Condition<'a, T>(Parameter<'a, T>);

impl<'a, T: std::str::FromStr + std::fmt::Display> Condition<'a, T> {
    /// Build a condition parameter over the scalar `value`.
    ///
    /// ### Example
    /// ```
    /// # use declargs_builder as declargs;
    /// use declargs::{Condition, Scalar};
    /// use std::str::FromStr;
    ///
    /// // Be sure to implement `std::str::FromStr` so that it inverts `std::fmt::Display`.
    /// enum FooBar {
    ///     Foo,
    ///     Bar,
    /// }
    /// # impl std::fmt::Display for FooBar {
    /// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    /// #         match self {
    /// #              FooBar::Foo => write!(f, "foo"),
    /// #             FooBar::Bar => write!(f, "bar"),
    /// #         }
    /// #     }
    /// # }
    /// # impl FromStr for FooBar {
    /// #     type Err = String;
    /// #
    /// #     fn from_str(value: &str) -> Result<Self, Self::Err> {
    /// #         match value.to_lowercase().as_str() {
    /// #             "foo" => Ok(FooBar::Foo),
    /// #             "bar" => Ok(FooBar::Bar),
    /// #             _ => Err(format!("unknown: {}", value)),
    /// #         }
    /// #     }
    /// # }
    ///
    /// let mut foo_bar: FooBar = FooBar::Foo;
    /// Condition::new(Scalar::new(&mut foo_bar), "foo_bar");
    /// // .. parse()
    /// match foo_bar {
    ///     FooBar::Foo => println!("Do foo'y things."),
    ///     FooBar::Bar => println!("Do bar'y things."),
    /// };
    /// ```
    pub fn new(value: Scalar<'a, T>, name: &'static str) -> Self {
        Condition(Parameter::argument(value, name))
    }

    /// Set the help message for this sub-command condition.
    /// Repeated calls overwrite; only the final message sticks.
    ///
    /// Help messages are full sentence/paragraph prose.
    /// Leave the layout to `declargs` (ex: avoid embedding line breaks `'\n'`).
    ///
    /// See also:
    /// * [`Condition::meta`]
    /// * [`Condition::choice`]
    ///
    /// ### Example
    /// ```
    /// # use declargs_builder as declargs;
    /// use declargs::{Condition, Scalar};
    ///
    /// let mut case: u32 = 0;
    /// Condition::new(Scalar::new(&mut case), "case")
    ///     .help("--this will get discarded--")
    ///     .help("Choose the 'case' to execute.  Description may include multiple sentences.");
    /// ```
    pub fn help(self, description: impl Into<String>) -> Self {
        let inner = self.0;
        Self(inner.help(description))
    }

    /// Set the meta message(s) for this sub-command condition.
    /// Repeated calls overwrite; only the final message(s) stick.
    ///
    /// Meta messages carry short-form annotations about the condition.
    /// Keep them to non-sentence fragments.
    ///
    /// See also:
    /// * [`Condition::help`]
    /// * [`Condition::choice`]
    ///
    /// ### Example
    /// ```
    /// # use declargs_builder as declargs;
    /// use declargs::{Condition, Scalar};
    ///
    /// let mut case: u32 = 0;
    /// Condition::new(Scalar::new(&mut case), "case")
    ///     .meta(vec!["--this will get discarded--"])
    ///     .meta(vec!["final extra", "details"]);
    /// ```
    pub fn meta(self, description: Vec<impl Into<String>>) -> Self {
        let inner = self.0;
        Self(inner.meta(description))
    }

    pub(super) fn consume(self) -> Parameter<'a, T> {
        self.0
    }
}

impl<'a, T: std::str::FromStr + std::fmt::Display> Choices<T> for Condition<'a, T> {
    /// Describe one choice of the sub-command condition.
    /// Calling again with the same `variant` of `T` overwrites the earlier message.
    /// Call with different variants to describe multiple choices; coverage needn't be exhaustive.
    ///
    /// Choice messages are full sentence/paragraph prose.
    /// Leave the layout to `declargs` (ex: avoid embedding line breaks `'\n'`).
    ///
    /// Documenting (or not documenting) a choice changes only the help output, never what the parser accepts.
    /// To restrict what the parser accepts, make `T` an enum.
    ///
    /// See also:
    /// * [`Condition::help`]
    /// * [`Condition::meta`]
    ///
    /// ### Example
    /// ```
    /// # use declargs_builder as declargs;
    /// use declargs::{prelude::*, Condition, Scalar};
    /// use std::str::FromStr;
    ///
    /// // Be sure to implement `std::str::FromStr` so that it inverts `std::fmt::Display`.
    /// enum FooBar {
    ///     Foo,
    ///     Bar,
    /// }
    /// # impl std::fmt::Display for FooBar {
    /// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    /// #         match self {
    /// #              FooBar::Foo => write!(f, "foo"),
    /// #             FooBar::Bar => write!(f, "bar"),
    /// #         }
    /// #     }
    /// # }
    /// # impl FromStr for FooBar {
    /// #     type Err = String;
    /// #
    /// #     fn from_str(value: &str) -> Result<Self, Self::Err> {
    /// #         match value.to_lowercase().as_str() {
    /// #             "foo" => Ok(FooBar::Foo),
    /// #             "bar" => Ok(FooBar::Bar),
    /// #             _ => Err(format!("unknown: {}", value)),
    /// #         }
    /// #     }
    /// # }
    ///
    /// let mut foo_bar: FooBar = FooBar::Foo;
    /// Condition::new(Scalar::new(&mut foo_bar), "foo_bar")
    ///     .choice(FooBar::Foo, "--this will get discarded--")
    ///     .choice(FooBar::Foo, "Do foo'y things.")
    ///     .choice(FooBar::Bar, "Do bar'y things.  Description may include multiple sentences.");
    /// ```
    fn choice(self, variant: T, description: impl Into<String>) -> Self {
        let inner = self.0;
        Self(inner.choice(variant, description))
    }
}

/// A single argument/option declaration for the command parser.
/// Passed to [`CommandLineParser::add`](./struct.CommandLineParser.html#method.add) and [`SubCommand::add`](./struct.SubCommand.html#method.add).
pub struct Parameter<'a, T>(ParameterInner<'a, T>);

impl<'a, T> Parameter<'a, T> {
    /// Build an option parameter, named `--NAME` (plus `-S` when `short` is given).
    ///
    /// ### Example
    /// ```
    /// # use declargs_builder as declargs;
    /// use declargs::{Parameter, Switch};
    ///
    /// let mut verbose: bool = false;
    /// Parameter::option(Switch::new(&mut verbose, true), "verbose", Some('v'));
    /// ```
    pub fn option(
        field: impl GenericCapturable<'a, T> + CliOption + 'a,
        name: impl Into<String>,
        short: Option<char>,
    ) -> Self {
        let nargs = field.nargs();
        let negatable = field.negatable();
        Self(ParameterInner {
            class: ParameterClass::Opt,
            field: AnonymousCapture::bind(field),
            nargs,
            name: name.into(),
            short,
            negatable,
            help: None,
            meta: None,
            choices: HashMap::default(),
        })
    }

    /// Build a positional argument parameter.
    ///
    /// ### Example
    /// ```
    /// # use declargs_builder as declargs;
    /// use declargs::{Parameter, Scalar};
    ///
    /// let mut verbose: bool = false;
    /// Parameter::argument(Scalar::new(&mut verbose), "verbose");
    /// ```
    pub fn argument(
        field: impl GenericCapturable<'a, T> + CliArgument + 'a,
        name: impl Into<String>,
    ) -> Self {
        let nargs = field.nargs();
        Self(ParameterInner {
            class: ParameterClass::Arg,
            field: AnonymousCapture::bind(field),
            nargs,
            name: name.into(),
            short: None,
            negatable: false,
            help: None,
            meta: None,
            choices: HashMap::default(),
        })
    }

    /// Set the help message for this parameter.
    /// Repeated calls overwrite; only the final message sticks.
    ///
    /// Help messages are full sentence/paragraph prose.
    /// Leave the layout to `declargs` (ex: avoid embedding line breaks `'\n'`).
    ///
    /// See also:
    /// * [`Parameter::meta`]
    /// * [`Parameter::choice`]
    ///
    /// ### Example
    /// ```
    /// # use declargs_builder as declargs;
    /// use declargs::{Parameter, Scalar};
    ///
    /// let mut verbose: bool = false;
    /// Parameter::argument(Scalar::new(&mut verbose), "verbose")
    ///     .help("--this will get discarded--")
    ///     .help("Make the program output verbose.  Description may include multiple sentences.");
    /// ```
    pub fn help(self, description: impl Into<String>) -> Self {
        let mut inner = self.0;
        inner.help = Some(description.into());
        Self(inner)
    }

    /// Set the meta message(s) for this parameter.
    /// Repeated calls overwrite; only the final message(s) stick.
    ///
    /// Meta messages carry short-form annotations about the parameter.
    /// Keep them to non-sentence fragments.
    ///
    /// See also:
    /// * [`Parameter::help`]
    /// * [`Parameter::choice`]
    ///
    /// ### Example
    /// ```
    /// # use declargs_builder as declargs;
    /// use declargs::{Parameter, Scalar};
    ///
    /// let mut verbose: bool = false;
    /// Parameter::argument(Scalar::new(&mut verbose), "verbose")
    ///     .meta(vec!["--this will be discarded--"])
    ///     .meta(vec!["final extra", "details"]);
    /// ```
    pub fn meta(self, descriptions: Vec<impl Into<String>>) -> Self {
        let mut inner = self.0;
        inner.meta = Some(descriptions.into_iter().map(|s| s.into()).collect());
        Self(inner)
    }

    pub(super) fn name(&self) -> String {
        self.0.name.clone()
    }

    pub(super) fn consume(self) -> ParameterInner<'a, T> {
        self.0
    }
}

impl<'a, T: std::fmt::Display> Choices<T> for Parameter<'a, T> {
    /// Describe one choice of this parameter.
    /// Calling again with the same `variant` of `T` overwrites the earlier message.
    /// Call with different variants to describe multiple choices; coverage needn't be exhaustive.
    ///
    /// Choice messages are full sentence/paragraph prose.
    /// Leave the layout to `declargs` (ex: avoid embedding line breaks `'\n'`).
    ///
    /// Documenting (or not documenting) a choice changes only the help output, never what the parser accepts.
    /// To restrict what the parser accepts, make `T` an enum.
    ///
    /// See also:
    /// * [`Parameter::help`]
    /// * [`Parameter::meta`]
    ///
    /// ### Example
    /// ```
    /// # use declargs_builder as declargs;
    /// use declargs::{prelude::*, Parameter, Scalar};
    /// use std::str::FromStr;
    ///
    /// let mut door: u32 = 0;
    /// Parameter::argument(Scalar::new(&mut door), "door")
    ///     .choice(1, "--this will get discarded--")
    ///     .choice(1, "Enter door #1.")
    ///     .choice(2, "Enter door #2.  Description may include multiple sentences.");
    /// ```
    fn choice(self, variant: T, description: impl Into<String>) -> Self {
        let mut inner = self.0;
        inner
            .choices
            .insert(variant.to_string(), description.into());
        Self(inner)
    }
}
