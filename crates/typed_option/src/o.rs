use crate::{NoneError, Nullable};

/// Either a value (`Some`) or its absence (`None`).
///
/// The variant is fixed at construction. Combinators consume `self` and hand
/// back a new `O`; borrowing access goes through [`O::as_ref`] and
/// [`O::as_mut`]. `None` orders before any `Some`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum O<T> {
    #[default]
    None,
    Some(T),
}

/// Wraps `val` in `O::Some`.
#[inline]
pub fn some<T>(val: T) -> O<T> {
    O::Some(val)
}

/// `O::None` at any `T`.
#[inline]
pub fn none<T>() -> O<T> {
    O::None
}

impl<T> O<T> {
    /// Constructs an `O::Some(val)` variant.
    pub fn some(val: T) -> Self {
        O::Some(val)
    }

    /// Constructs an `O::None` variant.
    pub fn none() -> Self {
        O::None
    }

    /// Converts a host value with its own absent sentinel into an `O`.
    ///
    /// Only the sentinel maps to `None` (a std `None`, a null pointer).
    /// Values like `0`, `""` or `false` are present and map to `Some`.
    pub fn from_nullable<N>(value: N) -> Self
    where
        N: Nullable<Value = T>,
    {
        value.into_o()
    }

    /// Returns true if the value is `Some`.
    pub fn is_some(&self) -> bool {
        matches!(self, O::Some(_))
    }

    /// Returns true if the value is `None`.
    pub fn is_none(&self) -> bool {
        matches!(self, O::None)
    }

    /// Returns true if the value is `Some` and `f` holds for it.
    pub fn is_some_and<F: FnOnce(&T) -> bool>(&self, f: F) -> bool {
        match self {
            O::Some(val) => f(val),
            O::None => false,
        }
    }

    /// Maps `O<T>` to `O<U>` by applying `f` to the contained value.
    ///
    /// `f` is not called on `None`.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> O<U> {
        match self {
            O::Some(val) => O::Some(f(val)),
            O::None => O::None,
        }
    }

    /// Chains into another `O`-producing computation.
    ///
    /// The result of `f` is returned as is, so `some(v).flat_map(f) == f(v)`.
    /// `f` is not called on `None`.
    pub fn flat_map<U, F: FnOnce(T) -> O<U>>(self, f: F) -> O<U> {
        match self {
            O::Some(val) => f(val),
            O::None => O::None,
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        if let O::Some(val) = self {
            if predicate(&val) {
                return O::Some(val);
            }
        }
        O::None
    }

    /// Calls `f` with the value, if any.
    pub fn for_each<F: FnOnce(T)>(self, f: F) {
        if let O::Some(val) = self {
            f(val);
        }
    }

    /// Collapses both variants into a `U`. Exactly one of the closures runs.
    pub fn fold<U, N, S>(self, on_none: N, on_some: S) -> U
    where
        N: FnOnce() -> U,
        S: FnOnce(T) -> U,
    {
        match self {
            O::Some(val) => on_some(val),
            O::None => on_none(),
        }
    }

    /// Returns the contained value, or `fallback` on `None`.
    ///
    /// `fallback` is evaluated eagerly by the caller. Use
    /// [`O::get_or_else_with`] when producing it is expensive or has effects.
    pub fn get_or_else(self, fallback: T) -> T {
        match self {
            O::Some(val) => val,
            O::None => fallback,
        }
    }

    /// Returns the contained value, or the result of `f` on `None`.
    pub fn get_or_else_with<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            O::Some(val) => val,
            O::None => f(),
        }
    }

    /// Returns `self` if it holds a value, otherwise `alternative`.
    pub fn or_else(self, alternative: O<T>) -> O<T> {
        match self {
            O::Some(_) => self,
            O::None => alternative,
        }
    }

    /// Returns `self` if it holds a value, otherwise the result of `f`.
    pub fn or_else_with<F: FnOnce() -> O<T>>(self, f: F) -> O<T> {
        match self {
            O::Some(_) => self,
            O::None => f(),
        }
    }

    /// Extracts the value, failing with [`NoneError`] on `None`.
    pub fn get(self) -> Result<T, NoneError> {
        self.ok_or(NoneError)
    }

    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            O::Some(val) => Ok(val),
            O::None => Err(err),
        }
    }

    pub fn ok_or_else<E, F: FnOnce() -> E>(self, err: F) -> Result<T, E> {
        match self {
            O::Some(val) => Ok(val),
            O::None => Err(err()),
        }
    }

    /// Unwraps the value or panics.
    ///
    /// # Panics
    /// Panics on `None`.
    pub fn unwrap_or_panic(self, msg: &'static str) -> T {
        match self {
            O::Some(val) => val,
            O::None => panic!("could not unwrap 'O': {}", msg),
        }
    }

    /// Expects the value to be `Some`.
    ///
    /// # Panics
    /// Panics with `msg` on `None`.
    pub fn expect(self, msg: &str) -> T {
        match self {
            O::Some(val) => val,
            O::None => panic!("{}", msg),
        }
    }

    /// Converts from `&O<T>` to `O<&T>`.
    pub fn as_ref(&self) -> O<&T> {
        match self {
            O::Some(val) => O::Some(val),
            O::None => O::None,
        }
    }

    /// Converts from `&mut O<T>` to `O<&mut T>`.
    pub fn as_mut(&mut self) -> O<&mut T> {
        match self {
            O::Some(val) => O::Some(val),
            O::None => O::None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            O::Some(val) => Some(val),
            O::None => None,
        }
    }
}

impl<T> O<O<T>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> O<T> {
        self.flat_map(|inner| inner)
    }
}

impl<T> From<Option<T>> for O<T> {
    fn from(value: Option<T>) -> Self {
        O::from_nullable(value)
    }
}

impl<T> From<O<T>> for Option<T> {
    fn from(value: O<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for O<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}
