use std::collections::HashMap;
use std::env;

use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;
use crate::parser::ErrorContext;

/// The fully declared, ready-to-run command line parser.
/// Produced by `CommandLineParser::build` or `SubCommandParser::build`.
pub struct GeneralParser<'a> {
    program: String,
    command: ParseUnit<'a>,
    sub_commands: HashMap<String, ParseUnit<'a>>,
    user_interface: Box<dyn UserInterface>,
}

impl<'a> GeneralParser<'a> {
    pub(crate) fn command(
        program: impl Into<String>,
        command: ParseUnit<'a>,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            program: program.into(),
            command,
            sub_commands: HashMap::default(),
            user_interface,
        }
    }

    pub(crate) fn sub_command(
        program: impl Into<String>,
        command: ParseUnit<'a>,
        sub_commands: HashMap<String, ParseUnit<'a>>,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            program: program.into(),
            command,
            sub_commands,
            user_interface,
        }
    }
}

pub(crate) struct ParseUnit<'a> {
    parser: Parser<'a>,
    printer: Printer,
}

impl<'a> ParseUnit<'a> {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(Parser::empty(), Printer::empty())
    }

    pub(crate) fn new(parser: Parser<'a>, printer: Printer) -> Self {
        Self { parser, printer }
    }

    fn invoke(
        self,
        tokens: &[&str],
        program: impl Into<String>,
        user_interface: &(impl UserInterface + ?Sized),
    ) -> ParseResult {
        let ParseUnit { parser, printer } = self;

        match parser.consume(tokens) {
            Ok(Action::Continue {
                discriminee,
                remaining,
            }) => match discriminee {
                Some((name, (offset, variant))) => ParseResult::Incomplete {
                    name: name.to_ascii_uppercase(),
                    variant_offset: offset,
                    variant,
                    remaining,
                },
                None => ParseResult::Complete,
            },
            Ok(Action::PrintHelp) => {
                printer.print_help(program, user_interface);
                ParseResult::Exit(0)
            }
            Err((offset, parse_error)) => {
                user_interface.print_error(parse_error);
                user_interface.print_error_context(ErrorContext::new(offset, tokens));
                ParseResult::Exit(1)
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum ParseResult {
    Complete,
    Incomplete {
        name: String,
        variant_offset: usize,
        variant: String,
        remaining: Vec<String>,
    },
    Exit(i32),
}

impl<'a> GeneralParser<'a> {
    /// Execute the command line parser over the given tokens.
    ///
    /// The tokens are processed against the declared `CommandLineParser` structure, in two phases:
    /// 1. Matching: every token is aligned to an argument or option.
    /// Phase #2 only runs once every token has matched.
    /// 2. Capturing: the matched tokens are converted through their respective types `T`.
    /// This is the phase that writes into your program variables.
    ///
    /// Any error along the way (ex: un-matched token, un-capturable token, etc) returns `Err(1)`.
    ///
    /// The help switch (`-h` or `--help`) prints the help message and returns `Err(0)`, skipping phase #2 entirely.
    ///
    /// A sub-command style parser runs the two phases twice over.
    /// First for the root parser, then again for the matched sub-command.
    /// The `Condition` parameter decides where the tokens split between the two.
    pub fn parse_tokens(self, tokens: &[&str]) -> Result<(), i32> {
        let GeneralParser {
            program,
            command,
            mut sub_commands,
            user_interface,
        } = self;
        let command_result = command.invoke(tokens, program.clone(), &*user_interface);

        match command_result {
            ParseResult::Complete => Ok(()),
            ParseResult::Incomplete {
                name,
                variant_offset,
                variant,
                remaining,
            } => {
                match sub_commands.remove(&variant) {
                    Some(sub_command) => {
                        match sub_command.invoke(
                            remaining
                                .iter()
                                .map(AsRef::as_ref)
                                .collect::<Vec<&str>>()
                                .as_slice(),
                            format!("{program} {variant}"),
                            &*user_interface,
                        ) {
                            ParseResult::Complete => Ok(()),
                            ParseResult::Incomplete { .. } => {
                                unreachable!(
                                    "internal error - sub-command parse must complete/exit."
                                )
                            }
                            ParseResult::Exit(code) => Err(code),
                        }
                    }
                    None => {
                        // No sub-command registered under this variant.
                        // Either the user typed an invalid variant, or the program breaks
                        // the 'Display'-'FromStr' requirement:
                        //    ∀(s, T::S), T::from(s) == T::S ⟹ T::S.to_string() == s
                        user_interface.print_error(ParseError(format!(
                            "Unknown sub-command '{variant}' for parameter '{name}'."
                        )));
                        user_interface
                            .print_error_context(ErrorContext::new(variant_offset, tokens));
                        Err(1)
                    }
                }
            }
            ParseResult::Exit(code) => Err(code),
        }
    }

    /// Execute the command line parser over the Cli [`env::args`].
    ///
    /// Follows the same two-phase process as [`GeneralParser::parse_tokens`], except that
    /// any error exits the process with code `1` (via `std::process::exit`), and the help
    /// switch (`-h` or `--help`) prints the help message and exits with code `0`.
    pub fn parse(self) {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(()) => {}
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        };
    }
}
