mod base;
mod interface;
mod middleware;
mod printer;

pub(crate) use base::*;
pub(crate) use interface::*;
pub use middleware::GeneralParser;
pub(crate) use middleware::ParseUnit;
pub(crate) use printer::*;

#[cfg(test)]
pub(crate) use base::test;
#[cfg(test)]
pub(crate) use interface::util;
