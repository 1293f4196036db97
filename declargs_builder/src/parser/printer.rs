use colored::Colorize;
use std::collections::HashMap;
use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::model::Nargs;
use crate::parser::interface::UserInterface;
use crate::parser::{ColumnRenderer, LeftWidth, MiddleWidth, PaddingWidth, RightWidth, TotalWidth};

pub(crate) struct OptionParameter {
    name: String,
    short: Option<char>,
    negatable: bool,
    aliases: Vec<String>,
    nargs: Nargs,
    help: Option<String>,
    meta: Option<Vec<String>>,
    choices: HashMap<String, String>,
}

impl OptionParameter {
    #[cfg(test)]
    fn basic(
        name: String,
        short: Option<char>,
        nargs: Nargs,
        help: Option<String>,
        meta: Option<Vec<String>>,
    ) -> Self {
        Self {
            name,
            short,
            negatable: false,
            aliases: Vec::default(),
            nargs,
            help,
            meta,
            choices: HashMap::default(),
        }
    }

    pub(crate) fn new(
        name: String,
        short: Option<char>,
        negatable: bool,
        nargs: Nargs,
        help: Option<String>,
        meta: Option<Vec<String>>,
        choices: HashMap<String, String>,
    ) -> Self {
        Self {
            name,
            short,
            negatable,
            aliases: Vec::default(),
            nargs,
            help,
            meta,
            choices,
        }
    }

    pub(crate) fn set_short(&mut self, short: char) {
        self.short = Some(short);
    }

    pub(crate) fn add_alias(&mut self, alias: impl Into<String>) {
        self.aliases.push(alias.into());
    }
}

pub(crate) struct ArgumentParameter {
    name: String,
    nargs: Nargs,
    help: Option<String>,
    meta: Option<Vec<String>>,
    choices: HashMap<String, String>,
}

impl ArgumentParameter {
    #[cfg(test)]
    fn basic(name: String, nargs: Nargs, help: Option<String>, meta: Option<Vec<String>>) -> Self {
        Self {
            name,
            nargs,
            help,
            meta,
            choices: HashMap::default(),
        }
    }

    pub(crate) fn new(
        name: String,
        nargs: Nargs,
        help: Option<String>,
        meta: Option<Vec<String>>,
        choices: HashMap<String, String>,
    ) -> Self {
        Self {
            name,
            nargs,
            help,
            meta,
            choices,
        }
    }
}

// `colored` already handles NO_COLOR and tty detection when it formats.
struct Palette {
    enabled: bool,
}

impl Palette {
    fn plain() -> Self {
        Self { enabled: false }
    }

    fn colored() -> Self {
        Self { enabled: true }
    }

    fn program(&self, text: &str) -> String {
        if self.enabled {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn header(&self, text: &str) -> String {
        if self.enabled {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn invocation(&self, text: &str) -> String {
        if self.enabled {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }
}

pub(crate) struct Printer {
    about: Option<String>,
    options: Vec<OptionParameter>,
    arguments: Vec<ArgumentParameter>,
    terminal_width: Option<usize>,
    palette: Palette,
}

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const DEFAULT_MIDDLE_WIDTH: usize = 17;
const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;
const CHOICE_INDENT: usize = 2;

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(Vec::default(), Vec::default(), None)
    }

    pub(crate) fn terminal(
        options: Vec<OptionParameter>,
        arguments: Vec<ArgumentParameter>,
    ) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        let mut printer = Self::new(options, arguments, terminal_width);
        printer.palette = Palette::colored();
        printer
    }

    pub(crate) fn new(
        mut options: Vec<OptionParameter>,
        arguments: Vec<ArgumentParameter>,
        terminal_width: Option<usize>,
    ) -> Self {
        options.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            about: None,
            options,
            arguments,
            terminal_width,
            palette: Palette::plain(),
        }
    }

    pub(crate) fn set_about(&mut self, about: impl Into<String>) {
        self.about.replace(about.into());
    }

    pub(crate) fn print_help(
        &self,
        program: impl Into<String>,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        let help_flags = format!("-{HELP_SHORT}, --{HELP_NAME}");
        let mut summary = vec![format!("[-{HELP_SHORT}]")];
        let mut left_column_width = help_flags.len();
        let mut middle_column_width = HELP_MESSAGE.len() + MAIN_INDENT;
        let mut right_columns_widths = Vec::default();
        let mut invocations: HashMap<String, String> = HashMap::default();

        for OptionParameter {
            name,
            short,
            negatable,
            aliases,
            nargs,
            choices,
            help,
            meta,
        } in &self.options
        {
            let name_example = name.to_ascii_uppercase().replace("-", "_");
            let grammar = match nargs {
                Nargs::Precisely(0) => "".to_string(),
                Nargs::Precisely(n) => format!(
                    " {}",
                    (0..*n)
                        .map(|_| name_example.clone())
                        .collect::<Vec<String>>()
                        .join(" ")
                ),
                Nargs::Any => format!(" [{} ...]", name_example),
                Nargs::AtLeastOne => {
                    format!(" {} [...]", name_example)
                }
            };

            // The inverted spelling only appears in the per-option row, never the summary.
            let long_form = if *negatable {
                format!("--[{NEGATION_PREFIX}]{name}{grammar}")
            } else {
                format!("--{name}{grammar}")
            };
            let mut invocation = match short {
                Some(s) => {
                    summary.push(format!("[-{s}{grammar}]"));
                    format!("-{s}{grammar}, {long_form}")
                }
                None => {
                    summary.push(format!("[--{name}{grammar}]"));
                    long_form
                }
            };

            for alias in aliases {
                invocation.push_str(&format!(", --{alias}"));
            }

            if left_column_width < invocation.len() {
                left_column_width = invocation.len();
            }

            invocations.insert(name.clone(), invocation);

            for (choice, description) in choices.iter() {
                if left_column_width < choice.len() + CHOICE_INDENT {
                    left_column_width = choice.len() + CHOICE_INDENT;
                }

                if middle_column_width < description.len() + MAIN_INDENT {
                    middle_column_width = description.len() + MAIN_INDENT;
                }
            }

            if let Some(help) = help {
                let choices_length = choices.keys().map(|c| c.len()).sum::<usize>();
                // `* 2` for the comma + space.
                // `+ 3` for the brackets + space
                let help_width =
                    help.len() + choices_length + ((std::cmp::max(1, choices.len()) - 1) * 2) + 3;

                if middle_column_width < help_width + MAIN_INDENT {
                    middle_column_width = help_width + MAIN_INDENT;
                }
            }

            if let Some(meta) = meta {
                for (i, m) in meta.iter().enumerate() {
                    if i >= right_columns_widths.len() {
                        right_columns_widths
                            .push(RightWidth::new(std::cmp::max(1, m.len())).unwrap());
                    } else if right_columns_widths[i].value() < m.len() {
                        right_columns_widths[i] = RightWidth::new(m.len()).unwrap();
                    }
                }
            }
        }

        for ArgumentParameter {
            name,
            nargs,
            choices,
            help,
            meta,
        } in &self.arguments
        {
            let name_example = name.to_ascii_uppercase().replace("-", "_");
            let grammar = match nargs {
                Nargs::Precisely(n) => (0..*n)
                    .map(|_| name_example.clone())
                    .collect::<Vec<String>>()
                    .join(" "),
                Nargs::Any => format!("[{} ...]", name_example),
                Nargs::AtLeastOne => {
                    format!("{} [...]", name_example)
                }
            };

            if left_column_width < grammar.len() {
                left_column_width = grammar.len();
            }

            summary.push(grammar.clone());
            invocations.insert(name.clone(), grammar);

            for (choice, description) in choices.iter() {
                if left_column_width < choice.len() + CHOICE_INDENT {
                    left_column_width = choice.len() + CHOICE_INDENT;
                }

                if middle_column_width < description.len() + MAIN_INDENT {
                    middle_column_width = description.len() + MAIN_INDENT;
                }
            }

            if let Some(help) = help {
                let choices_length = choices.keys().map(|c| c.len()).sum::<usize>();
                // `* 2` for the comma + space.
                // `+ 3` for the brackets + space
                let help_width =
                    help.len() + choices_length + ((std::cmp::max(1, choices.len()) - 1) * 2) + 3;

                if middle_column_width < help_width + MAIN_INDENT {
                    middle_column_width = help_width + MAIN_INDENT;
                }
            }

            if let Some(meta) = meta {
                for (i, m) in meta.iter().enumerate() {
                    if i >= right_columns_widths.len() {
                        right_columns_widths
                            .push(RightWidth::new(std::cmp::max(1, m.len())).unwrap());
                    } else if right_columns_widths[i].value() < m.len() {
                        right_columns_widths[i] = RightWidth::new(m.len()).unwrap();
                    }
                }
            }
        }

        let column_renderer = match &self.terminal_width {
            Some(tw) => ColumnRenderer::guided(
                PaddingWidth::new(PADDING_WIDTH).unwrap(),
                LeftWidth::new(left_column_width).unwrap(),
                MiddleWidth::new(middle_column_width).unwrap(),
                right_columns_widths,
                TotalWidth(*tw),
            ),
            None => ColumnRenderer::new(
                PaddingWidth::new(PADDING_WIDTH).unwrap(),
                LeftWidth::new(left_column_width).unwrap(),
                MiddleWidth::new(std::cmp::min(middle_column_width, DEFAULT_MIDDLE_WIDTH)).unwrap(),
                right_columns_widths,
            ),
        };

        user_interface.print(format!(
            "usage: {p} {s}",
            p = self.palette.program(&program.into()),
            s = summary.join(" ")
        ));

        if let Some(about) = &self.about {
            user_interface.print("".to_string());
            user_interface.print(about.clone());
        }

        if !self.arguments.is_empty() {
            user_interface.print("".to_string());
            user_interface.print(self.palette.header("positional arguments:"));

            for ArgumentParameter {
                name,
                help,
                choices,
                meta,
                ..
            } in &self.arguments
            {
                let invocation = invocations
                    .remove(name)
                    .expect("internal error - must have been set");
                let argument_help = match help {
                    Some(message) => format!("{message}"),
                    None => "".to_string(),
                };
                let (argument_choices, choices_ordered) = if choices.is_empty() {
                    ("".to_string(), None)
                } else {
                    let mut choices_ordered: Vec<String> = choices.keys().cloned().collect();
                    choices_ordered.sort();
                    (
                        format!("{{{}}} ", choices_ordered.join(", ")),
                        Some(choices_ordered),
                    )
                };
                self.print_parameter(
                    user_interface,
                    &column_renderer,
                    &invocation,
                    format!("{argument_choices}{argument_help}").as_str(),
                    meta.as_ref().unwrap_or(&Vec::default()),
                );

                if let Some(choice_keys) = choices_ordered {
                    for choice in choice_keys {
                        let description = choices
                            .get(&choice)
                            .expect("internal error - choice must exist");
                        for line in column_renderer.render(
                            MAIN_INDENT + CHOICE_INDENT,
                            &choice,
                            description,
                            &vec![],
                        ) {
                            user_interface.print(line);
                        }
                    }
                }
            }
        }

        user_interface.print("".to_string());
        user_interface.print(self.palette.header("options:"));
        self.print_parameter(
            user_interface,
            &column_renderer,
            &help_flags,
            HELP_MESSAGE,
            &vec![],
        );

        for OptionParameter {
            name,
            help,
            choices,
            meta,
            ..
        } in &self.options
        {
            let invocation = invocations
                .remove(name)
                .expect("internal error - must have been set");
            let option_help = match help {
                Some(message) => format!("{message}"),
                None => "".to_string(),
            };
            let (option_choices, choices_ordered) = if choices.is_empty() {
                ("".to_string(), None)
            } else {
                let mut choices_ordered: Vec<String> = choices.keys().cloned().collect();
                choices_ordered.sort();
                (
                    format!("{{{}}} ", choices_ordered.join(", ")),
                    Some(choices_ordered),
                )
            };
            self.print_parameter(
                user_interface,
                &column_renderer,
                &invocation,
                format!("{option_choices}{option_help}").as_str(),
                meta.as_ref().unwrap_or(&Vec::default()),
            );

            if let Some(choice_keys) = choices_ordered {
                for choice in choice_keys {
                    let description = choices
                        .get(&choice)
                        .expect("internal error - choice must exist");
                    for line in column_renderer.render(
                        MAIN_INDENT + CHOICE_INDENT,
                        &choice,
                        description,
                        &vec![],
                    ) {
                        user_interface.print(line);
                    }
                }
            }
        }
    }

    fn print_parameter(
        &self,
        user_interface: &(impl UserInterface + ?Sized),
        column_renderer: &ColumnRenderer,
        invocation: &str,
        middle: &str,
        rights: &Vec<String>,
    ) {
        let mut lines = column_renderer
            .render(MAIN_INDENT, invocation, middle, rights)
            .into_iter();

        if let Some(mut line) = lines.next() {
            if self.palette.enabled {
                // The invocation sits directly after the indent on the first rendered line.
                line.replace_range(
                    MAIN_INDENT..MAIN_INDENT + invocation.len(),
                    &self.palette.invocation(invocation),
                );
            }

            user_interface.print(line);
        }

        for line in lines {
            user_interface.print(line);
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    offset: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    pub(crate) fn new(offset: usize, tokens: &[&str]) -> Self {
        Self {
            offset,
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tokens_length = 0;
        let mut projection = String::default();
        let mut projection_offset = 0;

        for (i, token) in self.tokens.iter().enumerate() {
            tokens_length += token.len();
            projection.push_str(token);

            if i + 1 < self.tokens.len() {
                projection.push_str(" ");

                if tokens_length <= self.offset {
                    projection_offset += 1;
                }
            }
        }

        write!(
            f,
            "{projection}\n{:width$}^",
            "",
            width = std::cmp::min(self.offset, tokens_length.saturating_sub(1)) + projection_offset
        )
    }
}
