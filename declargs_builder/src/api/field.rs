use std::cell::RefCell;
use std::collections::HashSet;
use std::marker::PhantomData;
use std::rc::Rc;
use std::str::FromStr;

use crate::api::capture::*;
use crate::model::Nargs;
use crate::prelude::Collectable;

type ValueFactory<'a, T> = Box<dyn Fn(&str) -> Result<T, String> + 'a>;

fn convert<'a, T: FromStr>(
    token: &str,
    factory: &Option<ValueFactory<'a, T>>,
) -> Result<T, InvalidCapture> {
    match factory {
        Some(factory) => factory(token).map_err(|message| InvalidCapture::InvalidFactory {
            token: token.to_string(),
            type_name: std::any::type_name::<T>(),
            message,
        }),
        None => T::from_str(token).map_err(|_| InvalidCapture::InvalidConversion {
            token: token.to_string(),
            type_name: std::any::type_name::<T>(),
        }),
    }
}

/// A capture field holding exactly one value (precisely 1).
pub struct Scalar<'a, T> {
    variable: Rc<RefCell<&'a mut T>>,
    factory: Option<ValueFactory<'a, T>>,
}

impl<'a, T> CliOption for Scalar<'a, T> {}
impl<'a, T> CliArgument for Scalar<'a, T> {}

impl<'a, T> Scalar<'a, T> {
    /// Bind a scalar capture onto `variable`.
    pub fn new(variable: &'a mut T) -> Self {
        Self {
            variable: Rc::new(RefCell::new(variable)),
            factory: None,
        }
    }

    /// Convert tokens via the supplied function instead of `FromStr`.
    /// If repeated, only the final factory will apply.
    ///
    /// ### Example
    /// ```
    /// # use declargs_builder as declargs;
    /// use declargs::Scalar;
    ///
    /// let mut percent: u32 = 0;
    /// Scalar::new(&mut percent)
    ///     .factory(|token| token.trim_end_matches('%').parse::<u32>().map_err(|e| e.to_string()));
    /// ```
    pub fn factory(mut self, factory: impl Fn(&str) -> Result<T, String> + 'a) -> Self {
        self.factory.replace(Box::new(factory));
        self
    }
}

impl<'a, T> GenericCapturable<'a, T> for Scalar<'a, T>
where
    T: FromStr,
{
    fn matched(&mut self, _negated: bool) {
        // Do nothing.
    }

    fn capture(&mut self, token: &str) -> Result<(), InvalidCapture> {
        let value = convert(token, &self.factory)?;
        **self.variable.borrow_mut() = value;
        Ok(())
    }

    fn nargs(&self) -> Nargs {
        Nargs::Precisely(1)
    }
}

/// A value-less capture field (precisely 0); matching assigns `target`.
pub struct Switch<'a, T> {
    variable: Rc<RefCell<&'a mut T>>,
    target: Option<T>,
    negation: Option<T>,
}

impl<'a, T> CliOption for Switch<'a, T> {}

impl<'a, T> Switch<'a, T> {
    /// Bind a switch capture onto `variable`.
    pub fn new(variable: &'a mut T, target: T) -> Self {
        Self {
            variable: Rc::new(RefCell::new(variable)),
            target: Some(target),
            negation: None,
        }
    }

    /// Declare the value assigned when the inverted `no-` long form is matched.
    /// Also enables the inverted form on the option.
    ///
    /// ### Example
    /// ```
    /// # use declargs_builder as declargs;
    /// use declargs::Switch;
    ///
    /// let mut verbose: bool = false;
    /// // '--verbose' assigns true, '--no-verbose' assigns false.
    /// Switch::new(&mut verbose, true).negation(false);
    /// ```
    pub fn negation(mut self, value: T) -> Self {
        self.negation.replace(value);
        self
    }
}

impl<'a, T> GenericCapturable<'a, T> for Switch<'a, T> {
    fn matched(&mut self, negated: bool) {
        let value = if negated {
            self.negation
                .take()
                .expect("internal error - must be able to take the Switch#negation")
        } else {
            self.target
                .take()
                .expect("internal error - must be able to take the Switch#target")
        };
        **self.variable.borrow_mut() = value;
    }

    fn capture(&mut self, _token: &str) -> Result<(), InvalidCapture> {
        unreachable!("internal error - must not capture on a Switch");
    }

    fn nargs(&self) -> Nargs {
        Nargs::Precisely(0)
    }

    fn negatable(&self) -> bool {
        self.negation.is_some()
    }
}

/// A capture field over [`Option`], holding zero-or-one value (precisely 1 when matched).
pub struct Optional<'a, T> {
    variable: Rc<RefCell<&'a mut Option<T>>>,
    factory: Option<ValueFactory<'a, T>>,
}

impl<'a, T> CliOption for Optional<'a, T> {}

impl<'a, T> Optional<'a, T> {
    /// Bind an optional capture onto `variable`.
    pub fn new(variable: &'a mut Option<T>) -> Self {
        Self {
            variable: Rc::new(RefCell::new(variable)),
            factory: None,
        }
    }

    /// Convert tokens via the supplied function instead of `FromStr`.
    /// If repeated, only the final factory will apply.
    pub fn factory(mut self, factory: impl Fn(&str) -> Result<T, String> + 'a) -> Self {
        self.factory.replace(Box::new(factory));
        self
    }
}

impl<'a, T> GenericCapturable<'a, T> for Optional<'a, T>
where
    T: FromStr,
{
    fn matched(&mut self, _negated: bool) {
        // Do nothing
    }

    fn capture(&mut self, token: &str) -> Result<(), InvalidCapture> {
        let value = convert(token, &self.factory)?;
        self.variable.borrow_mut().replace(value);
        Ok(())
    }

    fn nargs(&self) -> Nargs {
        Nargs::Precisely(1)
    }
}

/// A capture field accumulating multiple values, with a caller-chosen [`Nargs`].
pub struct Collection<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    variable: Rc<RefCell<&'a mut C>>,
    nargs: Nargs,
    factory: Option<ValueFactory<'a, T>>,
    _phantom: PhantomData<T>,
}

impl<'a, C, T> CliOption for Collection<'a, C, T> where C: 'a + Collectable<T> {}

impl<'a, C, T> CliArgument for Collection<'a, C, T> where C: 'a + Collectable<T> {}

impl<'a, C, T> Collection<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    /// Bind a collection capture onto `variable`, bounded by `nargs`.
    pub fn new(variable: &'a mut C, nargs: Nargs) -> Self {
        Self {
            variable: Rc::new(RefCell::new(variable)),
            nargs,
            factory: None,
            _phantom: PhantomData,
        }
    }

    /// Convert tokens via the supplied function instead of `FromStr`.
    /// If repeated, only the final factory will apply.
    pub fn factory(mut self, factory: impl Fn(&str) -> Result<T, String> + 'a) -> Self {
        self.factory.replace(Box::new(factory));
        self
    }
}

impl<'a, C, T> GenericCapturable<'a, T> for Collection<'a, C, T>
where
    T: FromStr,
    C: 'a + Collectable<T>,
{
    fn matched(&mut self, _negated: bool) {
        // Do nothing.
    }

    fn capture(&mut self, token: &str) -> Result<(), InvalidCapture> {
        let value = convert(token, &self.factory)?;
        (**self.variable.borrow_mut()).add(value);
        Ok(())
    }

    fn nargs(&self) -> Nargs {
        self.nargs
    }
}

impl<T> Collectable<T> for Vec<T> {
    fn add(&mut self, item: T) {
        self.push(item);
    }
}

impl<T: Eq + std::hash::Hash> Collectable<T> for HashSet<T> {
    fn add(&mut self, item: T) {
        self.insert(item);
    }
}
