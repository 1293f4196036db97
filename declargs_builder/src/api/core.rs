use std::collections::{HashMap, HashSet};
use std::marker::PhantomData;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::{Condition, Parameter, ParameterClass};
use crate::constant::{HELP_NAME, HELP_SHORT};
use crate::parser::{
    ArgumentCapture, ArgumentParameter, ConfigError, ConsoleInterface, GeneralParser,
    OptionCapture, UserInterface,
};
use crate::parser::{OptionParameter, ParseUnit, Parser, Printer};

/// The root command line parser.
///
/// ### Example
/// ```
/// # use declargs_builder as declargs;
/// use declargs::{CommandLineParser};
///
/// let parser = CommandLineParser::new("program")
///     // Configure with CommandLineParser::add and CommandLineParser::branch.
///     .build();
/// parser.parse_tokens(empty::slice()).unwrap();
/// ```
pub struct CommandLineParser<'a> {
    program: String,
    about: Option<String>,
    option_parameters: Vec<OptionParameter>,
    argument_parameters: Vec<ArgumentParameter>,
    option_captures: Vec<OptionCapture<'a>>,
    argument_captures: Vec<ArgumentCapture<'a>>,
    discriminator: Option<String>,
}

impl<'a> CommandLineParser<'a> {
    /// Start declaring a command line parser for `program`.
    ///
    /// ### Example
    /// ```
    /// # use declargs_builder as declargs;
    /// use declargs::CommandLineParser;
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .build();
    ///
    /// parser.parse_tokens(vec![].as_slice()).unwrap();
    /// ```
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: None,
            option_parameters: Vec::default(),
            argument_parameters: Vec::default(),
            option_captures: Vec::default(),
            argument_captures: Vec::default(),
            discriminator: None,
        }
    }

    /// Set the about message for this command line parser.
    /// Repeated calls overwrite; only the final message sticks.
    ///
    /// The about message describes the program in full sentence/paragraph prose.
    /// Leave the layout to `declargs` (ex: avoid embedding line breaks `'\n'`).
    ///
    /// ### Example
    /// ```
    /// # use declargs_builder as declargs;
    /// use declargs::CommandLineParser;
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .about("--this will get discarded--")
    ///     .about("My program that does awesome stuff.  Check it out!")
    ///     .build();
    ///
    /// parser.parse_tokens(vec![].as_slice()).unwrap();
    /// ```
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Declare an argument/option on the command line parser.
    ///
    /// Argument parameters fill in the order they are added.
    /// Option parameter order is irrelevant to the parse semantics.
    ///
    /// ### Example
    /// ```
    /// # use declargs_builder as declargs;
    /// use declargs::{CommandLineParser, Parameter, Scalar};
    ///
    /// let mut a: u32 = 0;
    /// let mut b: u32 = 0;
    /// let parser = CommandLineParser::new("program")
    ///     .add(Parameter::argument(Scalar::new(&mut a), "a"))
    ///     .add(Parameter::argument(Scalar::new(&mut b), "b"))
    ///     .build();
    ///
    /// parser.parse_tokens(vec!["1", "2"].as_slice()).unwrap();
    ///
    /// assert_eq!(a, 1);
    /// assert_eq!(b, 2);
    /// ```
    ///
    /// When built, each option parameter derives a shortcut from the initials of its name.
    /// A single initial becomes the short form, as long as the option does not already declare one (ex: `--verbose` gains `-v`).
    /// Multiple initials become an additional long form (ex: `--dry-run` gains `--dr`).
    /// Derivation is skipped silently whenever the shortcut would collide with any other parameter.
    ///
    /// ### Example
    /// ```
    /// # use declargs_builder as declargs;
    /// use declargs::{CommandLineParser, Parameter, Switch};
    ///
    /// let mut verbose: bool = false;
    /// let mut dry_run: bool = false;
    /// let parser = CommandLineParser::new("program")
    ///     .add(Parameter::option(Switch::new(&mut verbose, true), "verbose", None))
    ///     .add(Parameter::option(Switch::new(&mut dry_run, true), "dry-run", None))
    ///     .build();
    ///
    /// parser.parse_tokens(vec!["-v", "--dr"].as_slice()).unwrap();
    ///
    /// assert_eq!(verbose, true);
    /// assert_eq!(dry_run, true);
    /// ```
    pub fn add<T>(mut self, parameter: Parameter<'a, T>) -> Self {
        let inner = parameter.consume();
        match inner.class() {
            ParameterClass::Opt => {
                self.option_parameters.push(OptionParameter::from(&inner));
                self.option_captures.push(OptionCapture::from(inner));
            }
            ParameterClass::Arg => {
                self.argument_parameters
                    .push(ArgumentParameter::from(&inner));
                self.argument_captures.push(ArgumentCapture::from(inner));
            }
        }

        self
    }

    /// Branch into a sub-command parser.
    ///
    /// After this point the command line parser follows the sub-command style.
    /// Parameters added before the branch stay on the root parser.
    ///
    /// The branch pivots on a dedicated `Scalar` argument: the [`Condition`].
    ///
    /// ### Example
    /// ```
    /// # use declargs_builder as declargs;
    /// use declargs::{CommandLineParser, Parameter, Scalar, Condition};
    ///
    /// let mut belongs_to_root: u32 = 0;
    /// let mut sub_command: String = "".to_string();
    /// let mut belongs_to_sub_command: u32 = 0;
    /// let parser = CommandLineParser::new("program")
    ///     .add(Parameter::argument(Scalar::new(&mut belongs_to_root), "belongs_to_root"))
    ///     .branch(Condition::new(Scalar::new(&mut sub_command), "sub_command"))
    ///     .command("the-command".to_string(), |sub| {
    ///         sub.add(Parameter::argument(Scalar::new(&mut belongs_to_sub_command), "belongs_to_sub_command"))
    ///     })
    ///     .build();
    ///
    /// parser.parse_tokens(vec!["1", "the-command", "2"].as_slice()).unwrap();
    ///
    /// assert_eq!(belongs_to_root, 1);
    /// assert_eq!(&sub_command, "the-command");
    /// assert_eq!(belongs_to_sub_command, 2);
    /// ```
    pub fn branch<T: std::str::FromStr + std::fmt::Display + PartialEq>(
        mut self,
        condition: Condition<'a, T>,
    ) -> SubCommandParser<'a, T> {
        let parameter = condition.consume();
        if self.discriminator.replace(parameter.name()).is_some() {
            unreachable!("internal error - cannot setup multiple discriminators");
        }

        SubCommandParser::new(self.add(parameter))
    }

    fn generate_shortcuts(&mut self) {
        let mut used_longs: HashSet<String> = HashSet::default();
        used_longs.insert(HELP_NAME.to_string());
        let mut used_shorts: HashSet<char> = HashSet::default();
        used_shorts.insert(HELP_SHORT);

        for (config, _) in &self.option_captures {
            used_longs.insert(config.name().to_string());

            for alias in config.aliases() {
                used_longs.insert(alias.clone());
            }

            if let Some(negation) = config.negation() {
                used_longs.insert(negation);
            }

            if let Some(short) = config.short() {
                used_shorts.insert(*short);
            }
        }

        for (parameter, (config, _)) in self
            .option_parameters
            .iter_mut()
            .zip(self.option_captures.iter_mut())
        {
            let shortcut: String = config
                .name()
                .split(['-', '_'])
                .filter_map(|part| part.chars().next())
                .collect();

            if shortcut.is_empty() || shortcut == config.name() {
                continue;
            }

            let mut initials = shortcut.chars();
            match (initials.next(), initials.next()) {
                (Some(initial), None) => {
                    if config.short().is_none() && used_shorts.insert(initial) {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!(
                                "Derived short '-{initial}' for option '{name}'.",
                                name = config.name()
                            );
                        }

                        config.set_short(initial);
                        parameter.set_short(initial);
                    }
                }
                _ => {
                    if used_longs.insert(shortcut.clone()) {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!(
                                "Derived alias '--{shortcut}' for option '{name}'.",
                                name = config.name()
                            );
                        }

                        config.add_alias(shortcut.clone());
                        parameter.add_alias(shortcut);
                    }
                }
            }
        }
    }

    fn build_with_interface(
        mut self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser<'a>, ConfigError> {
        self.generate_shortcuts();
        let parser = Parser::new(
            self.option_captures,
            self.argument_captures,
            self.discriminator,
        )?;
        let mut printer = Printer::terminal(self.option_parameters, self.argument_parameters);

        if let Some(about) = self.about {
            printer.set_about(about);
        }

        let command = ParseUnit::new(parser, printer);
        Ok(GeneralParser::command(self.program, command, user_interface))
    }

    /// Build the command line parser, surfacing configuration errors as a Result.
    /// Finalizes the declarations and validates them (ex: a repeated parameter name).
    pub fn build_parser(self) -> Result<GeneralParser<'a>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// Finalizes the declarations and validates them (ex: a repeated parameter name).
    /// On a configuration error, prints the error and exits with code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser<'a> {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

/// The sub-command style command line parser, produced by branching.
pub struct SubCommandParser<'a, B: std::fmt::Display> {
    root: CommandLineParser<'a>,
    commands: HashMap<String, CommandLineParser<'a>>,
    deferred_error: Option<ConfigError>,
    _phantom: PhantomData<B>,
}

impl<'a, B: std::str::FromStr + std::fmt::Display + PartialEq> SubCommandParser<'a, B> {
    fn new(root: CommandLineParser<'a>) -> Self {
        Self {
            root,
            commands: HashMap::default(),
            deferred_error: None,
            _phantom: PhantomData,
        }
    }

    /// Register a sub-command.
    ///
    /// Any number of sub-commands may be registered, so long as they correspond to the branching type `B`.
    /// Registering the same `variant` of `B` again replaces the earlier registration.
    /// Sub-command order is irrelevant to the parse semantics.
    ///
    /// ### Example
    /// ```
    /// # use declargs_builder as declargs;
    /// use declargs::{CommandLineParser, Condition, Parameter, Scalar};
    ///
    /// let mut value_a: u32 = 0;
    /// let mut value_b: u32 = 0;
    /// let mut sub_command: String = "".to_string();
    /// let parser = CommandLineParser::new("program")
    ///     .branch(Condition::new(Scalar::new(&mut sub_command), "sub_command"))
    ///     .command("a".to_string(), |sub| sub.add(Parameter::argument(Scalar::new(&mut value_a), "value_a")))
    ///     .command("b".to_string(), |sub| {
    ///         sub.about("Description for the sub-command 'b'.")
    ///             .add(Parameter::argument(Scalar::new(&mut value_b), "value_b"))
    ///     })
    ///     .build();
    ///
    /// parser.parse_tokens(vec!["a", "1"].as_slice()).unwrap();
    ///
    /// assert_eq!(&sub_command, "a");
    /// assert_eq!(value_a, 1);
    /// assert_eq!(value_b, 0);
    /// ```
    pub fn command(
        mut self,
        variant: B,
        setup_fn: impl FnOnce(SubCommand<'a>) -> SubCommand<'a>,
    ) -> Self {
        let command_str = variant.to_string();

        // Flag any variant violating the FromStr-inverts-Display invariant.
        match B::from_str(&command_str) {
            // Sneaky case: from_str lands on a valid `B`, just not this variant.
            Ok(value) if value != variant => {
                self.deferred_error.replace(ConfigError(format!(
                    "parameter '{}' contains invalid sub-command '{command_str}': FromStr does not invert Display.",
                    self.root.discriminator.as_ref().expect("internal error - root must have a discriminator"),
                )));
            }
            // Plain case: from_str fails outright on the rendered variant.
            Err(_) => {
                self.deferred_error.replace(ConfigError(format!(
                    "parameter '{}' contains invalid sub-command '{command_str}': FromStr does not invert Display.",
                    self.root.discriminator.as_ref().expect("internal error - root must have a discriminator"),
                )));
            }
            _ => {
                // Do nothing.
            }
        }

        let inner = CommandLineParser::new(command_str.clone());
        let sub_command = setup_fn(SubCommand { inner });
        self.commands.insert(command_str, sub_command.inner);
        self
    }

    fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser<'a>, ConfigError> {
        if let Some(error) = self.deferred_error {
            return Err(error);
        }

        let mut sub_commands = HashMap::default();

        for (discriminee, mut cp) in self.commands.into_iter() {
            cp.generate_shortcuts();
            let sub_parser = Parser::new(cp.option_captures, cp.argument_captures, None)?;
            let mut sub_printer = Printer::terminal(cp.option_parameters, cp.argument_parameters);

            if let Some(about) = cp.about {
                sub_printer.set_about(about);
            }

            sub_commands.insert(discriminee, ParseUnit::new(sub_parser, sub_printer));
        }

        let mut root = self.root;
        root.generate_shortcuts();
        let parser = Parser::new(
            root.option_captures,
            root.argument_captures,
            root.discriminator,
        )?;
        let mut printer = Printer::terminal(root.option_parameters, root.argument_parameters);

        if let Some(about) = root.about {
            printer.set_about(about);
        }

        let command = ParseUnit::new(parser, printer);
        Ok(GeneralParser::sub_command(
            root.program,
            command,
            sub_commands,
            user_interface,
        ))
    }

    /// Build the sub-command style parser, surfacing configuration errors as a Result.
    /// Finalizes the declarations and validates them (ex: a repeated parameter name).
    pub fn build_parser(self) -> Result<GeneralParser<'a>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the sub-command style parser.
    /// Finalizes the declarations and validates them (ex: a repeated parameter name).
    /// On a configuration error, prints the error and exits with code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser<'a> {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

/// The parser declarations of a single sub-command.
///
/// Handed to the `setup_fn` of [`SubCommandParser::command`].
pub struct SubCommand<'a> {
    inner: CommandLineParser<'a>,
}

impl<'a> SubCommand<'a> {
    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Produce a stand-in [`SubCommand`] so test code can exercise a `setup_fn` directly.
    ///
    /// ### Example
    /// ```
    /// # use declargs_builder as declargs;
    /// use declargs::{Parameter, Scalar, SubCommand};
    ///
    /// // Function under test.
    /// // We want to make sure the setup_fn is wired up correctly.
    /// pub fn setup_fn<'a>(value: &'a mut u32) -> impl FnOnce(SubCommand<'a>) -> SubCommand<'a> {
    ///     |sub| sub.add(Parameter::argument(Scalar::new(value), "value"))
    /// }
    ///
    /// let mut x: u32 = 1;
    /// let parser = setup_fn(&mut x)(SubCommand::test_dummy()).build_parser().unwrap();
    /// parser.parse_tokens(vec!["2"].as_slice()).unwrap();
    /// assert_eq!(x, 2);
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn test_dummy() -> Self {
        SubCommand {
            inner: CommandLineParser::new("test-dummy"),
        }
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Build this sub-command into a [`GeneralParser`] so test code can drive it.
    /// [`SubCommand::test_dummy`] shows the full pattern.
    #[cfg(feature = "unit_test")]
    pub fn build_parser(self) -> Result<GeneralParser<'a>, ConfigError> {
        self.inner
            .build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Set the about message for this sub-command.
    /// Repeated calls overwrite; only the final message sticks.
    ///
    /// The about message describes the sub-command in full sentence/paragraph prose.
    /// Leave the layout to `declargs` (ex: avoid embedding line breaks `'\n'`).
    ///
    /// See [`SubCommandParser::command`] for usage.
    pub fn about(self, description: impl Into<String>) -> Self {
        SubCommand {
            inner: self.inner.about(description),
        }
    }

    /// Declare an argument/option on the sub-command.
    ///
    /// Argument parameters fill in the order they are added.
    /// Option parameter order is irrelevant to the parse semantics.
    ///
    /// See [`SubCommandParser::command`] for usage.
    pub fn add<T>(self, parameter: Parameter<'a, T>) -> Self {
        SubCommand {
            inner: self.inner.add(parameter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Collection, Parameter, Scalar, Switch};
    use crate::model::Nargs;
    use crate::parser::util::channel_interface;
    use crate::prelude::Choices;
    use crate::test::assert_contains;
    use rstest::rstest;

    #[test]
    fn empty_build() {
        // Setup
        let clp = CommandLineParser::new("program");

        // Execute
        let parser = clp.build_parser().unwrap();

        // Verify
        parser.parse_tokens(empty::slice()).unwrap();
    }

    #[rstest]
    #[case(vec![], false, vec![])]
    #[case(vec!["1"], false, vec![1])]
    #[case(vec!["01"], false, vec![1])]
    #[case(vec!["1", "3", "2"], false, vec![1, 3, 2])]
    #[case(vec!["--flag"], true, vec![])]
    #[case(vec!["--flag", "1"], true, vec![1])]
    #[case(vec!["--flag", "01"], true, vec![1])]
    #[case(vec!["--flag", "1", "3", "2"], true, vec![1, 3, 2])]
    fn build(
        #[case] tokens: Vec<&str>,
        #[case] expected_flag: bool,
        #[case] expected_items: Vec<u32>,
    ) {
        // Setup
        let mut flag: bool = false;
        let mut items: Vec<u32> = Vec::default();
        let clp = CommandLineParser::new("program")
            .about("abc def")
            .add(Parameter::option(
                Switch::new(&mut flag, true),
                "flag",
                Some('f'),
            ))
            .add(Parameter::argument(
                Collection::new(&mut items, Nargs::Any),
                "item",
            ));

        // Execute
        let parser = clp.build_parser().unwrap();

        // Verify
        // Build wiring is under test here.
        // Verify by driving the built parser through the token permutations.
        parser.parse_tokens(tokens.as_slice()).unwrap();
        assert_eq!(flag, expected_flag);
        assert_eq!(items, expected_items);
    }

    #[rstest]
    #[case(vec!["--verbose"], true)]
    #[case(vec!["-v"], true)]
    #[case(vec![], false)]
    fn generated_short_build(#[case] tokens: Vec<&str>, #[case] expected: bool) {
        // Setup
        let mut verbose: bool = false;
        let clp = CommandLineParser::new("program").add(Parameter::option(
            Switch::new(&mut verbose, true),
            "verbose",
            None,
        ));

        // Execute
        let parser = clp.build_parser().unwrap();

        // Verify
        parser.parse_tokens(tokens.as_slice()).unwrap();
        assert_eq!(verbose, expected);
    }

    #[rstest]
    #[case(vec!["--daikon-root", "abc"], "abc")]
    #[case(vec!["--dr", "abc"], "abc")]
    #[case(vec![], "")]
    fn generated_alias_build(#[case] tokens: Vec<&str>, #[case] expected: &str) {
        // Setup
        let mut daikon_root: String = String::default();
        let clp = CommandLineParser::new("program").add(Parameter::option(
            Scalar::new(&mut daikon_root),
            "daikon-root",
            None,
        ));

        // Execute
        let parser = clp.build_parser().unwrap();

        // Verify
        parser.parse_tokens(tokens.as_slice()).unwrap();
        assert_eq!(&daikon_root, expected);
    }

    #[test]
    fn generated_short_collision_build_help() {
        // Setup
        let mut verbose: bool = false;
        let mut value: bool = false;
        let clp = CommandLineParser::new("program")
            .add(Parameter::option(
                Switch::new(&mut verbose, true),
                "verbose",
                None,
            ))
            .add(Parameter::option(
                Switch::new(&mut value, true),
                "value",
                None,
            ));
        let (sender, receiver) = channel_interface();

        // Execute
        let parser = clp.build_with_interface(Box::new(sender)).unwrap();

        // Verify
        // The first option to derive 'v' keeps it.
        let error_code = parser.parse_tokens(&["--help"]).unwrap_err();
        assert_eq!(error_code, 0);

        let message = receiver.consume_message();
        assert_contains!(message, "-v, --verbose");
        assert!(!message.contains("-v, --value"));
    }

    #[rstest]
    #[case(vec!["--verbose"], true)]
    #[case(vec!["--no-verbose"], false)]
    fn negation_build(#[case] tokens: Vec<&str>, #[case] expected: bool) {
        // Setup
        let mut verbose: bool = false;
        let clp = CommandLineParser::new("program").add(Parameter::option(
            Switch::new(&mut verbose, true).negation(false),
            "verbose",
            None,
        ));

        // Execute
        let parser = clp.build_parser().unwrap();

        // Verify
        parser.parse_tokens(tokens.as_slice()).unwrap();
        assert_eq!(verbose, expected);
    }

    #[rstest]
    #[case(vec!["0"], false, 0, vec![], vec![])]
    #[case(vec!["0", "1"], false, 0, vec![1], vec![])]
    #[case(vec!["0", "1", "3", "2"], false, 0, vec![1, 3, 2], vec![])]
    #[case(vec!["1"], false, 1, vec![], vec![])]
    #[case(vec!["1", "1"], false, 1, vec![], vec![1])]
    #[case(vec!["1", "1", "3", "2"], false, 1, vec![], vec![1, 3, 2])]
    #[case(vec!["--flag", "0"], true, 0, vec![], vec![])]
    #[case(vec!["--flag", "0", "1"], true, 0, vec![1], vec![])]
    #[case(vec!["--flag", "0", "1", "3", "2"], true, 0, vec![1, 3, 2], vec![])]
    #[case(vec!["--flag", "1"], true, 1, vec![], vec![])]
    #[case(vec!["--flag", "1", "1"], true, 1, vec![], vec![1])]
    #[case(vec!["--flag", "1", "1", "3", "2"], true, 1, vec![], vec![1, 3, 2])]
    fn branch_build(
        #[case] tokens: Vec<&str>,
        #[case] expected_flag: bool,
        #[case] expected_sub: u32,
        #[case] expected_items_0: Vec<u32>,
        #[case] expected_items_1: Vec<u32>,
    ) {
        // Setup
        let mut flag: bool = false;
        let mut sub: u32 = 0;
        let mut items_0: Vec<u32> = Vec::default();
        let mut items_1: Vec<u32> = Vec::default();
        let clp = CommandLineParser::new("program");
        let scp = clp
            .add(Parameter::option(
                Switch::new(&mut flag, true),
                "flag",
                Some('f'),
            ))
            .branch(Condition::new(Scalar::new(&mut sub), "sub"))
            .command(0, |sub| {
                sub.add(Parameter::argument(
                    Collection::new(&mut items_0, Nargs::Any),
                    "item0",
                ))
            })
            .command(1, |sub| {
                sub.about("abc def").add(Parameter::argument(
                    Collection::new(&mut items_1, Nargs::Any),
                    "item1",
                ))
            });

        // Execute
        let parser = scp.build_parser().unwrap();

        // Verify
        // Build wiring is under test here.
        // Verify by driving the built parser through the token permutations.
        parser.parse_tokens(tokens.as_slice()).unwrap();
        assert_eq!(flag, expected_flag);
        assert_eq!(sub, expected_sub);
        assert_eq!(items_0, expected_items_0);
        assert_eq!(items_1, expected_items_1);
    }

    #[test]
    fn repeat_command_build() {
        // Setup
        let mut sub: u32 = 0;
        let mut items_0: Vec<u32> = Vec::default();
        let mut items_1: Vec<u32> = Vec::default();
        let clp = CommandLineParser::new("program");
        let scp = clp
            .branch(Condition::new(Scalar::new(&mut sub), "sub"))
            .command(0, |sub| {
                sub.add(Parameter::argument(
                    Collection::new(&mut items_0, Nargs::Any),
                    "item0",
                ))
            })
            .command(0, |sub| {
                sub.add(Parameter::argument(
                    Collection::new(&mut items_1, Nargs::Any),
                    "item1",
                ))
            });

        // Execute
        let parser = scp.build_parser().unwrap();

        // Verify
        // Build wiring is under test here.
        // Verify by driving the built parser through the token permutations.
        parser.parse_tokens(&["0", "1", "2", "3"]).unwrap();
        assert_eq!(sub, 0);
        assert_eq!(items_0, Vec::default());
        assert_eq!(items_1, vec![1, 2, 3]);
    }

    #[rstest]
    #[case(vec!["abc", "0"], false, "abc", 0, vec![])]
    #[case(vec!["abc", "0", "1"], false, "abc", 0, vec![1])]
    #[case(vec!["abc", "0", "1", "3", "2"], false, "abc", 0, vec![1, 3, 2])]
    #[case(vec!["--flag", "abc", "0"], true, "abc", 0, vec![])]
    #[case(vec!["--flag", "abc", "0", "1"], true, "abc", 0, vec![1])]
    #[case(vec!["--flag", "abc", "0", "1", "3", "2"], true, "abc", 0, vec![1, 3, 2])]
    #[case(vec!["abc", "--flag", "0"], true, "abc", 0, vec![])]
    #[case(vec!["abc", "--flag", "0", "1"], true, "abc", 0, vec![1])]
    #[case(vec!["abc", "--flag", "0", "1", "3", "2"], true, "abc", 0, vec![1, 3, 2])]
    fn root_arguments_branch_build(
        #[case] tokens: Vec<&str>,
        #[case] expected_flag: bool,
        #[case] expected_root: &str,
        #[case] expected_sub: u32,
        #[case] expected_items: Vec<u32>,
    ) {
        // Setup
        let mut flag: bool = false;
        let mut root: String = String::default();
        let mut sub: u32 = 0;
        let mut items: Vec<u32> = Vec::default();
        let clp = CommandLineParser::new("program");
        let scp = clp
            .add(Parameter::option(
                Switch::new(&mut flag, true),
                "flag",
                Some('f'),
            ))
            .add(Parameter::argument(Scalar::new(&mut root), "root"))
            .branch(Condition::new(Scalar::new(&mut sub), "sub"))
            .command(0, |sub| {
                sub.add(Parameter::argument(
                    Collection::new(&mut items, Nargs::Any),
                    "item0",
                ))
            });

        // Execute
        let parser = scp.build_parser().unwrap();

        // Verify
        // Build wiring is under test here.
        // Verify by driving the built parser through the token permutations.
        parser.parse_tokens(tokens.as_slice()).unwrap();
        assert_eq!(flag, expected_flag);
        assert_eq!(&root, expected_root);
        assert_eq!(sub, expected_sub);
        assert_eq!(items, expected_items);
    }

    #[test]
    fn empty_build_help() {
        // Setup
        let clp = CommandLineParser::new("program");
        let (sender, receiver) = channel_interface();

        // Execute
        let parser = clp.build_with_interface(Box::new(sender)).unwrap();

        // Verify
        // Build wiring is under test here.
        // Verify by requesting --help and spot-checking the rendered output.
        let error_code = parser.parse_tokens(&["--help"]).unwrap_err();
        assert_eq!(error_code, 0);

        let message = receiver.consume_message();
        assert_contains!(message, "usage: program [-h]\n");
    }

    #[test]
    fn build_help() {
        // Setup
        let mut flag: bool = false;
        let mut items: Vec<u32> = Vec::default();
        let mut clp = CommandLineParser::new("program");
        clp = clp
            .add(Parameter::option(
                Switch::new(&mut flag, true),
                "flag",
                Some('f'),
            ))
            .add(Parameter::argument(
                Collection::new(&mut items, Nargs::Any),
                "item",
            ));
        let (sender, receiver) = channel_interface();

        // Execute
        let parser = clp.build_with_interface(Box::new(sender)).unwrap();

        // Verify
        // Build wiring is under test here.
        // Verify by requesting --help and spot-checking the rendered output.
        let error_code = parser.parse_tokens(&["--help"]).unwrap_err();
        assert_eq!(error_code, 0);

        let message = receiver.consume_message();
        assert_contains!(message, "usage: program [-h] [-f] [ITEM ...]\n");
        assert_contains!(message, "-f, --flag");
    }

    #[test]
    fn build_about_help() {
        // Setup
        let clp = CommandLineParser::new("program").about("My program that does awesome stuff.");
        let (sender, receiver) = channel_interface();

        // Execute
        let parser = clp.build_with_interface(Box::new(sender)).unwrap();

        // Verify
        // Build wiring is under test here.
        // Verify by requesting --help and spot-checking the rendered output.
        let error_code = parser.parse_tokens(&["--help"]).unwrap_err();
        assert_eq!(error_code, 0);

        let message = receiver.consume_message();
        assert_contains!(message, "usage: program [-h]\n");
        assert_contains!(message, "My program that does awesome stuff.");
    }

    #[test]
    fn branch_build_help() {
        // Setup
        let mut flag: bool = false;
        let mut sub: u32 = 0;
        let clp = CommandLineParser::new("program");
        let scp = clp
            .add(Parameter::option(
                Switch::new(&mut flag, true),
                "flag",
                Some('f'),
            ))
            .branch(
                Condition::new(Scalar::new(&mut sub), "sub")
                    .choice(0, "zero")
                    .choice(1, "one"),
            )
            .command(0, |sub| sub)
            .command(1, |sub| sub);
        let (sender, receiver) = channel_interface();

        // Execute
        let parser = scp.build_with_interface(Box::new(sender)).unwrap();

        // Verify
        // Build wiring is under test here.
        // Verify by requesting --help and spot-checking the rendered output.
        let error_code = parser.parse_tokens(&["--help"]).unwrap_err();
        assert_eq!(error_code, 0);

        let message = receiver.consume_message();
        assert_contains!(message, "usage: program [-h] [-f] SUB\n");
        assert_contains!(message, "SUB          {0, 1}");
        assert_contains!(message, "0            zero");
        assert_contains!(message, "1            one");
        assert_contains!(message, "-f, --flag");
    }

    #[test]
    fn sub0_command_build_help() {
        // Setup
        let mut flag: bool = false;
        let mut sub: u32 = 0;
        let mut items: Vec<u32> = Vec::default();
        let mut extra: bool = false;
        let clp = CommandLineParser::new("program");
        let scp = clp
            .add(Parameter::option(
                Switch::new(&mut flag, true),
                "flag",
                Some('f'),
            ))
            .branch(
                Condition::new(Scalar::new(&mut sub), "sub")
                    .choice(0, "zero")
                    .choice(1, "one"),
            )
            .command(0, |sub| sub)
            .command(1, |sub| {
                sub.add(Parameter::argument(
                    Collection::new(&mut items, Nargs::Any),
                    "item",
                ))
                .add(Parameter::option(
                    Switch::new(&mut extra, true),
                    "extra",
                    Some('e'),
                ))
            });
        let (sender, receiver) = channel_interface();

        // Execute
        let parser = scp.build_with_interface(Box::new(sender)).unwrap();

        // Verify
        // Build wiring is under test here.
        // Verify by requesting --help and spot-checking the rendered output.
        let error_code = parser.parse_tokens(&["0", "--help"]).unwrap_err();
        assert_eq!(error_code, 0);

        let message = receiver.consume_message();
        assert_contains!(message, "usage: program 0 [-h]\n");
    }

    #[test]
    fn sub1_command_build_help() {
        // Setup
        let mut flag: bool = false;
        let mut sub: u32 = 0;
        let mut items: Vec<u32> = Vec::default();
        let mut extra: bool = false;
        let clp = CommandLineParser::new("program");
        let scp = clp
            .add(Parameter::option(
                Switch::new(&mut flag, true),
                "flag",
                Some('f'),
            ))
            .branch(
                Condition::new(Scalar::new(&mut sub), "sub")
                    .choice(0, "zero")
                    .choice(1, "one"),
            )
            .command(0, |sub| sub)
            .command(1, |sub| {
                sub.add(Parameter::argument(
                    Collection::new(&mut items, Nargs::Any),
                    "item",
                ))
                .add(Parameter::option(
                    Switch::new(&mut extra, true),
                    "extra",
                    Some('e'),
                ))
            });
        let (sender, receiver) = channel_interface();

        // Execute
        let parser = scp.build_with_interface(Box::new(sender)).unwrap();

        // Verify
        // Build wiring is under test here.
        // Verify by requesting --help and spot-checking the rendered output.
        let error_code = parser.parse_tokens(&["1", "--help"]).unwrap_err();
        assert_eq!(error_code, 0);

        let message = receiver.consume_message();
        assert_contains!(message, "usage: program 1 [-h] [-e] [ITEM ...]\n");
        assert_contains!(message, "-e, --extra");
    }

    #[test]
    fn root_arguments_branch_build_help() {
        // Setup
        let mut flag: bool = false;
        let mut root: String = String::default();
        let mut sub: u32 = 0;
        let mut items: Vec<u32> = Vec::default();
        let clp = CommandLineParser::new("program");
        let scp = clp
            .add(Parameter::option(
                Switch::new(&mut flag, true),
                "flag",
                Some('f'),
            ))
            .add(Parameter::argument(Scalar::new(&mut root), "root"))
            .branch(Condition::new(Scalar::new(&mut sub), "sub"))
            .command(0, |sub| {
                sub.add(Parameter::argument(
                    Collection::new(&mut items, Nargs::Any),
                    "item0",
                ))
            });
        let (sender, receiver) = channel_interface();

        // Execute
        let parser = scp.build_with_interface(Box::new(sender)).unwrap();

        // Verify
        // Build wiring is under test here.
        // Verify by requesting --help and spot-checking the rendered output.
        let error_code = parser.parse_tokens(&["--help"]).unwrap_err();
        assert_eq!(error_code, 0);

        let message = receiver.consume_message();
        assert_contains!(message, "usage: program [-h] [-f] ROOT SUB\n");
    }

    #[test]
    #[cfg(feature = "unit_test")]
    fn test_dummies() {
        // Setup
        pub fn setup_fn<'a>(value: &'a mut u32) -> impl FnOnce(SubCommand<'a>) -> SubCommand<'a> {
            |sub| sub.add(Parameter::argument(Scalar::new(value), "value"))
        }

        let mut x: u32 = 1;
        let parser = setup_fn(&mut x)(SubCommand::test_dummy())
            .build_parser()
            .unwrap();
        let tokens = vec!["2"];

        // Execute
        parser.parse_tokens(tokens.as_slice()).unwrap();

        // Verify
        assert_eq!(x, 2);
    }

    #[derive(PartialEq)]
    enum Nefarious {
        Foo,
        Bar,
    }

    impl std::fmt::Display for Nefarious {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Nefarious::Foo => write!(f, "foo"),
                Nefarious::Bar => write!(f, "bar"),
            }
        }
    }

    impl std::str::FromStr for Nefarious {
        type Err = String;

        fn from_str(value: &str) -> Result<Self, Self::Err> {
            match value.to_lowercase().as_str() {
                "bar" => Ok(Nefarious::Foo),
                _ => Err(format!("unknown: {}", value)),
            }
        }
    }

    #[test]
    fn not_invertable_command() {
        // Setup
        let mut nefarious = Nefarious::Bar;
        let clp = CommandLineParser::new("program");
        let scp = clp
            .branch(Condition::new(Scalar::new(&mut nefarious), "abc"))
            .command(Nefarious::Foo, |sub| sub);
        let (sender, _receiver) = channel_interface();

        // Execute
        let result = scp.build_with_interface(Box::new(sender)).unwrap_err();

        // Verify
        assert_matches!(result, ConfigError(message) => {
            assert_eq!(message, "parameter 'abc' contains invalid sub-command 'foo': FromStr does not invert Display.".to_string());
        });
    }

    #[test]
    fn nefarious_command() {
        // Setup
        let mut nefarious = Nefarious::Bar;
        let clp = CommandLineParser::new("program");
        let scp = clp
            .branch(Condition::new(Scalar::new(&mut nefarious), "abc"))
            .command(Nefarious::Bar, |sub| sub);
        let (sender, _receiver) = channel_interface();

        // Execute
        let result = scp.build_with_interface(Box::new(sender)).unwrap_err();

        // Verify
        assert_matches!(result, ConfigError(message) => {
            assert_eq!(message, "parameter 'abc' contains invalid sub-command 'bar': FromStr does not invert Display.".to_string());
        });
    }
}
