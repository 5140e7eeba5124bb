//! The second stage of a value decision.

use std::fmt;
use std::marker::PhantomData;

use crate::trace::trace_branch;

/// A value decision with its `True` branch attached.
///
/// Holds the `True` producer only when the clause was `True`. It is
/// consumed by [`ValueSupplier::otherwise`] or [`ValueSupplier::optional`],
/// each of which calls at most one producer.
///
/// # Examples
///
/// ```rust
/// use conditional::prelude::*;
///
/// let name: Option<&str> = None;
/// let greeting = value::when(name.is_some())
///     .then(|| format!("hello, {}", name.unwrap_or_default()))
///     .otherwise(|| "hello, stranger".to_string());
/// assert_eq!(greeting, "hello, stranger");
/// ```
#[must_use = "a value supplier does nothing until `otherwise` or `optional` is called"]
pub struct ValueSupplier<T, F> {
    producer: Option<F>,
    marker: PhantomData<fn() -> T>,
}

impl<T, F> ValueSupplier<T, F> {
    /// Returns `true` if the decision selected the `True` branch.
    #[inline]
    pub const fn is_true(&self) -> bool {
        self.producer.is_some()
    }
}

impl<T, F> ValueSupplier<T, F>
where
    F: FnOnce() -> T,
{
    #[inline]
    pub(super) const fn holding(producer: F) -> Self {
        Self {
            producer: Some(producer),
            marker: PhantomData,
        }
    }

    #[inline]
    pub(super) const fn empty() -> Self {
        Self {
            producer: None,
            marker: PhantomData,
        }
    }

    /// Resolves the decision, calling exactly one of the two producers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conditional::prelude::*;
    ///
    /// let parity = value::when(7 % 2 == 0)
    ///     .then(|| "even")
    ///     .otherwise(|| "odd");
    /// assert_eq!(parity, "odd");
    /// ```
    #[inline]
    pub fn otherwise<G>(self, producer: G) -> T
    where
        G: FnOnce() -> T,
    {
        trace_branch!("value.otherwise", self.is_true());
        match self.producer {
            Some(true_producer) => true_producer(),
            None => producer(),
        }
    }

    /// Resolves the decision into an `Option`.
    ///
    /// Returns `Some` with the `True` value, or `None` without calling
    /// anything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conditional::prelude::*;
    ///
    /// assert_eq!(value::when(true).then(|| 42).optional(), Some(42));
    /// assert_eq!(value::when(false).then(|| 42).optional(), None);
    /// ```
    #[inline]
    pub fn optional(self) -> Option<T> {
        trace_branch!("value.optional", self.is_true());
        self.producer.map(|true_producer| true_producer())
    }
}

impl<T, F> fmt::Debug for ValueSupplier<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ValueSupplier")
            .field("holds_producer", &self.producer.is_some())
            .finish()
    }
}
