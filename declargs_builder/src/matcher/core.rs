use std::collections::{HashMap, HashSet, VecDeque};
use thiserror::Error;

use crate::matcher::api::*;
use crate::matcher::model::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum TokenMatcherError {
    #[error("Cannot duplicate the option '{0}'.")]
    DuplicateOption(String),

    #[error("Cannot duplicate the short option '{0}'.")]
    DuplicateShortOption(char),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum MatchError {
    #[error("Not enough tokens provided to parameter '{0}'.")]
    Undercomplete(String),

    #[error("Too many tokens provided to parameter '{0}'.")]
    Overcomplete(String),

    #[error("No more arguments to match against.")]
    ArgumentsExhausted,

    #[error("Option '{0}' does not exist.")]
    InvalidOption(String),

    #[error("Short option '{0}' does not exist.")]
    InvalidShortOption(char),
}

impl From<CloseError> for MatchError {
    fn from(error: CloseError) -> Self {
        match error {
            CloseError::TooFewValues { name, .. } => MatchError::Undercomplete(name),
            CloseError::TooManyValues { name, .. } => MatchError::Overcomplete(name),
        }
    }
}

#[derive(Debug)]
pub(crate) struct TokenMatcher {
    option_bounds: HashMap<String, Bound>,
    // Every long spelling (canonical, alias, or inversion) maps back to the canonical name.
    long_names: HashMap<String, (String, bool)>,
    short_options: HashMap<char, String>,
    arguments: VecDeque<ArgumentConfig>,
    fed: usize,
    matches: Vec<MatchTokens>,
    buffer: Option<MatchBuffer>,
}

impl TokenMatcher {
    pub(crate) fn new(
        options: HashSet<OptionConfig>,
        arguments: VecDeque<ArgumentConfig>,
    ) -> Result<Self, TokenMatcherError> {
        let mut option_bounds = HashMap::default();
        let mut long_names: HashMap<String, (String, bool)> = HashMap::default();
        let mut short_options = HashMap::default();

        for option_config in options.into_iter() {
            if option_bounds
                .insert(option_config.name().to_string(), option_config.bound())
                .is_some()
            {
                return Err(TokenMatcherError::DuplicateOption(
                    option_config.name().to_string(),
                ));
            }

            let mut spellings = vec![(option_config.name().to_string(), false)];

            for alias in option_config.aliases() {
                spellings.push((alias.clone(), false));
            }

            if let Some(negation) = option_config.negation() {
                spellings.push((negation, true));
            }

            for (spelling, negated) in spellings {
                if long_names
                    .insert(
                        spelling.clone(),
                        (option_config.name().to_string(), negated),
                    )
                    .is_some()
                {
                    return Err(TokenMatcherError::DuplicateOption(spelling));
                }
            }

            if let Some(short) = option_config.short() {
                if short_options
                    .insert(*short, option_config.name().to_string())
                    .is_some()
                {
                    return Err(TokenMatcherError::DuplicateShortOption(*short));
                }
            }
        }

        Ok(Self {
            option_bounds,
            long_names,
            short_options,
            arguments,
            fed: 0,
            matches: Vec::default(),
            buffer: None,
        })
    }

    pub(crate) fn feed(&mut self, token: &str) -> Result<(), MatchError> {
        let token_length = token.len();
        // 1. Find a 'long' flag, such as:
        //  --initial
        //  --initial ..
        //  --initial=..
        // 2. Find 'short' flag(s), such as (both -i and -v are example short flags):
        //  -i
        //  -i..
        //  -i ..
        //  -i=..
        //  -iv..
        //  -iv ..
        //  -iv=..
        // 3. Match against an argument.
        let result = if let Some(token) = token.strip_prefix("--") {
            self.match_option(split_equals_delimiter(token))
        } else if let Some(token) = token.strip_prefix("-") {
            self.match_option_short(split_equals_delimiter(token))
        } else {
            self.match_argument(token)
        };

        self.fed += token_length;
        result
    }

    fn match_argument(&mut self, token: &str) -> Result<(), MatchError> {
        let mut match_buffer = match self.buffer.take() {
            Some(match_buffer) => {
                if match_buffer.is_open() {
                    match_buffer
                } else {
                    // Flip to the next argument
                    let match_tokens = match_buffer.close().expect(
                        "internal error - by definition, a non-open buffer must be able to close",
                    );
                    self.matches.push(match_tokens);
                    self.next_argument()?
                }
            }
            None => {
                // Flip to the next argument.
                self.next_argument()?
            }
        };

        match_buffer.push(self.fed, token.to_string());

        if let Some(_) = self.buffer.replace(match_buffer) {
            unreachable!("internal error - the buffer is expected to be None");
        }

        Ok(())
    }

    fn next_argument(&mut self) -> Result<MatchBuffer, MatchError> {
        match self.arguments.pop_front() {
            Some(argument_config) => Ok(MatchBuffer::new(
                argument_config.name(),
                argument_config.bound(),
            )),
            None => Err(MatchError::ArgumentsExhausted),
        }
    }

    fn match_option(
        &mut self,
        (option_name, single_argument): (&str, Option<&str>),
    ) -> Result<(), MatchError> {
        let (canonical, negated) = match self.long_names.get(option_name) {
            Some((canonical, negated)) => (canonical.clone(), *negated),
            None => return Err(MatchError::InvalidOption(option_name.to_string())),
        };

        if let Some(bound) = self.option_bounds.remove(&canonical) {
            let mut match_buffer = if negated {
                MatchBuffer::negation(canonical)
            } else {
                MatchBuffer::new(canonical, bound)
            };

            let next_buffer = match single_argument {
                Some(value) => {
                    // The 3 comes from the option specifier '--' and argument specifier '='.
                    match_buffer.push(self.fed + option_name.len() + 3, value.to_string());

                    // Options using k=v syntax cannot follow up with more values afterwards.
                    let match_tokens = match_buffer.close()?;
                    self.matches.push(match_tokens);
                    None
                }
                None => Some(match_buffer),
            };
            self.update_buffer(next_buffer)
        } else {
            Err(MatchError::InvalidOption(option_name.to_string()))
        }
    }

    fn match_option_short(
        &mut self,
        (short_option_name, single_argument): (&str, Option<&str>),
    ) -> Result<(), MatchError> {
        for (index, single) in short_option_name.chars().enumerate() {
            if let Some(name) = self.short_options.get(&single).cloned() {
                if let Some(bound) = self.option_bounds.remove(&name) {
                    // If this is the final character from the short option token (the variable 'short_option_name').
                    if index + 1 == short_option_name.len() {
                        // Only the final option may accept values.
                        let mut match_buffer = MatchBuffer::new(name, bound);

                        match single_argument {
                            // If an equals delimited value was specified, use it.
                            Some(value) => {
                                // The 2 comes from the short option specifier '-' and argument specifier '='.
                                match_buffer.push(
                                    self.fed + short_option_name.len() + 2,
                                    value.to_string(),
                                );

                                // Options using k=v syntax cannot follow up with more values afterwards.
                                let match_tokens = match_buffer.close()?;
                                self.matches.push(match_tokens);
                            }
                            // If no equals delimited value was specified, allow the values to be fed as subsequent tokens.
                            None => {
                                self.update_buffer(Some(match_buffer))?;
                            }
                        };
                    } else {
                        // All characters in the head of the short option token (the variable 'short_option_name') must allow no values.
                        let match_tokens = MatchBuffer::new(name, bound).close()?;
                        self.matches.push(match_tokens);
                    }
                } else {
                    unreachable!("internal error - mis-aligned short option.");
                }

                self.short_options
                    .remove(&single)
                    .expect("internal error - must be able to remove the selected short option");
            } else {
                return Err(MatchError::InvalidShortOption(single));
            }
        }

        Ok(())
    }

    fn update_buffer(&mut self, next_buffer: Option<MatchBuffer>) -> Result<(), MatchError> {
        let previous_buffer = std::mem::replace(&mut self.buffer, next_buffer);

        if let Some(match_buffer) = previous_buffer {
            let match_tokens = match_buffer.close()?;
            self.matches.push(match_tokens);
        }

        Ok(())
    }

    pub(crate) fn can_close(&self) -> bool {
        if let Some(match_buffer) = &self.buffer {
            if !match_buffer.can_close() {
                return false;
            }
        }

        for argument_config in &self.arguments {
            let match_buffer = MatchBuffer::new(argument_config.name(), argument_config.bound());
            if !match_buffer.can_close() {
                return false;
            }
        }

        true
    }

    pub(crate) fn close(mut self) -> Result<Matches, (usize, MatchError, Matches)> {
        let mut close_error: Option<CloseError> = None;

        if let Some(match_buffer) = self.buffer {
            match match_buffer.close() {
                Ok(match_tokens) => {
                    self.matches.push(match_tokens);
                }
                Err(error) => {
                    close_error.replace(error);
                }
            };
        }

        for argument_config in self.arguments {
            let match_buffer = MatchBuffer::new(argument_config.name(), argument_config.bound());
            match match_buffer.close() {
                Ok(match_tokens) => {
                    self.matches.push(match_tokens);
                }
                Err(error) => {
                    // Only track the first error.
                    if close_error.is_none() {
                        close_error.replace(error);
                    }
                }
            };
        }

        let matches = Matches {
            values: self.matches,
        };

        if let Some(error) = close_error {
            Err((self.fed, MatchError::from(error), matches))
        } else {
            Ok(matches)
        }
    }
}

fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once("=") {
        Some((n, v)) => (n, Some(v)),
        None => (token, None),
    }
}

impl Matches {
    pub(crate) fn contains(&self, name: &str) -> bool {
        self.values.iter().any(|mt| &mt.name == name)
    }
}
