pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_MESSAGE: &str = "Show this help message and exit.";

// Prefix for the automatically generated inversion of a negatable option.
pub(crate) const NEGATION_PREFIX: &str = "no-";
