use std::collections::{HashMap, HashSet, VecDeque};
use thiserror::Error;

use crate::api::InvalidCapture;
use crate::constant::*;
use crate::matcher::*;

// We need a (dyn .. [ignoring T] ..) here in order to put all the fields of varying types T under one collection.
// In other words, we want the bottom of the object graph to include the types T, but up here we want to work across all T.
pub(crate) type OptionCapture<'a> = (OptionConfig, Box<(dyn AnonymousCapturable + 'a)>);
pub(crate) type ArgumentCapture<'a> = (ArgumentConfig, Box<(dyn AnonymousCapturable + 'a)>);

#[derive(Debug, Error)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

impl From<TokenMatcherError> for ConfigError {
    fn from(error: TokenMatcherError) -> Self {
        // A negation spelling may collide with an explicitly declared option,
        // which the capture names alone cannot detect.
        ConfigError(error.to_string())
    }
}

#[derive(Debug, Error)]
#[error("Parse error: {0}")]
pub(crate) struct ParseError(pub(crate) String);

impl From<MatchError> for ParseError {
    fn from(error: MatchError) -> Self {
        ParseError(error.to_string())
    }
}

impl From<InvalidCapture> for ParseError {
    fn from(error: InvalidCapture) -> Self {
        ParseError(error.to_string())
    }
}

/// Behaviour to capture an implicit generic type T from an input `&str`.
///
/// We use this at the middle/top of the command line parser object graph so that different types may all be 'captured' in a single parser.
pub(crate) trait AnonymousCapturable {
    /// Declare that the parameter has been matched.
    /// `negated` is set when the match came through the inverted `no-` long form.
    fn matched(&mut self, negated: bool);

    /// Capture a value anonymously for this parameter.
    fn capture(&mut self, value: &str) -> Result<(), InvalidCapture>;
}


pub(crate) struct Parser<'a> {
    token_matcher: TokenMatcher,
    captures: HashMap<String, Box<(dyn AnonymousCapturable + 'a)>>,
    discriminator: Option<String>,
}

impl<'a> std::fmt::Debug for Parser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl<'a> Parser<'a> {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(Vec::default(), Vec::default(), None).unwrap()
    }

    pub(crate) fn new(
        options: Vec<OptionCapture<'a>>,
        arguments: Vec<ArgumentCapture<'a>>,
        discriminator: Option<String>,
    ) -> Result<Self, ConfigError> {
        let help_config = OptionConfig::new(HELP_NAME, Some(HELP_SHORT), Bound::Range(0, 0));
        let mut option_configs = HashSet::from([help_config]);
        let mut argument_configs = VecDeque::default();
        let mut captures: HashMap<String, Box<(dyn AnonymousCapturable + 'a)>> =
            HashMap::default();

        for (oc, f) in options.into_iter() {
            if captures.insert(oc.name().to_string(), f).is_some() {
                return Err(ConfigError(format!(
                    "Cannot duplicate the parameter '{}'.",
                    oc.name()
                )));
            }

            option_configs.insert(oc);
        }

        for (ac, f) in arguments.into_iter() {
            if captures.insert(ac.name().to_string(), f).is_some() {
                return Err(ConfigError(format!(
                    "Cannot duplicate the parameter '{}'.",
                    ac.name()
                )));
            }

            argument_configs.push_back(ac);
        }

        let token_matcher = TokenMatcher::new(option_configs, argument_configs)?;

        Ok(Self {
            token_matcher,
            captures,
            discriminator,
        })
    }

    pub(crate) fn consume(self, tokens: &[&str]) -> Result<Action, (usize, ParseError)> {
        let Parser {
            mut token_matcher,
            mut captures,
            discriminator,
        } = self;

        let mut token_iter = tokens.iter();
        let minimal_consume = discriminator.is_some();
        // 1. Feed the raw token strings to the matcher.
        let mut fed = 0;

        loop {
            match token_iter.next() {
                Some(token) => {
                    let token_length = token.len();
                    token_matcher
                        .feed(token)
                        .map_err(|e| (fed, ParseError::from(e)))?;
                    fed += token_length;

                    if minimal_consume && token_matcher.can_close() {
                        break;
                    }
                }
                None => break,
            }
        }

        let matches = match token_matcher.close() {
            Ok(matches) | Err((_, _, matches)) if matches.contains(HELP_NAME) => {
                return Ok(Action::PrintHelp);
            }
            Ok(matches) => Ok(matches),
            Err((offset, e, _)) => Err((offset, ParseError::from(e))),
        }?;

        let mut discriminee: Option<(String, OffsetValue)> = None;

        // 2. Get the matching between tokens-parameter/options, still as raw strings.
        for match_tokens in matches.values {
            // 3. Find the corresponding capture.
            let mut box_capture = captures
                .remove(&match_tokens.name)
                .expect("internal error - mismatch between matches and captures");
            // 4. Let the capture know it has been matched, and through which spelling.
            // Some captures may do something based off the fact they were simply matched.
            box_capture.matched(match_tokens.negated);

            // 5. Convert each of the raw value strings into the capture type.
            for (offset, value) in &match_tokens.values {
                box_capture
                    .capture(value)
                    .map_err(|error| (*offset, ParseError::from(error)))?;
            }

            if let Some(ref target) = &discriminator {
                if target == &match_tokens.name {
                    match &match_tokens.values[..] {
                        [(offset, value)] => {
                            if discriminee
                                .replace((target.clone(), (*offset, value.clone())))
                                .is_some()
                            {
                                unreachable!(
                                    "internal error - discriminator cannot have multiple matches"
                                );
                            }
                        }
                        _ => {
                            unreachable!(
                                "internal error - discriminator must result it precisely 1 token"
                            );
                        }
                    }
                }
            }
        }

        Ok(Action::Continue {
            discriminee,
            remaining: token_iter.map(|s| s.to_string()).collect(),
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Continue {
        discriminee: Option<(String, OffsetValue)>,
        remaining: Vec<String>,
    },
    PrintHelp,
}
