use thiserror::Error;

use crate::matcher::api::*;

#[derive(Debug, PartialEq, Eq, Hash)]
pub(crate) struct MatchTokens {
    pub name: String,
    pub negated: bool,
    pub values: Vec<OffsetValue>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(super) enum CloseError {
    #[error("too few values provided for '{name}' (provided={provided}, expected={expected}).")]
    TooFewValues {
        name: String,
        provided: usize,
        expected: u8,
    },

    #[error("too many values provided for '{name}' (provided={provided}, expected={expected}).")]
    TooManyValues {
        name: String,
        provided: usize,
        expected: u8,
    },
}

#[derive(Debug)]
pub(super) struct MatchBuffer {
    name: String,
    negated: bool,
    bound: Bound,
    values: Vec<OffsetValue>,
}

impl MatchBuffer {
    pub(super) fn new(name: impl Into<String>, bound: Bound) -> Self {
        Self {
            name: name.into(),
            negated: false,
            bound,
            values: Vec::default(),
        }
    }

    // An inverted match never takes values.
    pub(super) fn negation(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            negated: true,
            bound: Bound::Range(0, 0),
            values: Vec::default(),
        }
    }

    pub(super) fn push(&mut self, offset: usize, value: String) {
        self.values.push((offset, value));
    }

    pub(super) fn is_open(&self) -> bool {
        match self.bound {
            Bound::Range(_, n) => self.values.len() < n as usize,
            Bound::Lower(_) => true,
        }
    }

    pub(super) fn can_close(&self) -> bool {
        let n = match self.bound {
            Bound::Range(n, _) => n,
            Bound::Lower(n) => n,
        };
        self.values.len() >= n as usize
    }

    pub(super) fn close(self) -> Result<MatchTokens, CloseError> {
        match self.bound {
            Bound::Lower(n) => {
                if self.values.len() < n as usize {
                    return Err(CloseError::TooFewValues {
                        name: self.name,
                        provided: self.values.len(),
                        expected: n,
                    });
                }
            }
            Bound::Range(i, j) => {
                if self.values.len() < i as usize {
                    return Err(CloseError::TooFewValues {
                        name: self.name,
                        provided: self.values.len(),
                        expected: i,
                    });
                } else if self.values.len() > j as usize {
                    return Err(CloseError::TooManyValues {
                        name: self.name,
                        provided: self.values.len(),
                        expected: j,
                    });
                }
            }
        };

        Ok(MatchTokens {
            name: self.name,
            negated: self.negated,
            values: self.values,
        })
    }
}
