//! The first stage of a value decision.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::ValueSupplier;
use crate::clause::{Clause, Predicate, TruthState};

/// A decided clause that will produce a value of type `T`.
///
/// `ValueClause<T>` combines like any other [`Clause`] and then moves to
/// the second stage with [`ValueClause::then`]. It has no `otherwise`, so
/// a value can only be resolved once both branches are known.
///
/// The phantom type is `fn() -> T`, which keeps the clause `Copy`, `Send`
/// and `Sync` whatever `T` is.
///
/// # Examples
///
/// ```rust
/// use conditional::prelude::*;
///
/// let size = 12;
/// let label = ValueClause::<&str>::when(size > 10)
///     .and(|| size < 100)
///     .then(|| "medium")
///     .otherwise(|| "other");
/// assert_eq!(label, "medium");
/// ```
pub struct ValueClause<T> {
    truth: TruthState,
    marker: PhantomData<fn() -> T>,
}

static_assertions::assert_impl_all!(ValueClause<String>: Copy, Send, Sync);
static_assertions::assert_impl_all!(ValueClause<std::rc::Rc<i32>>: Copy, Send, Sync);

impl<T> ValueClause<T> {
    /// Creates a value clause from a predicate.
    #[inline]
    pub fn when<P: Predicate>(predicate: P) -> Self {
        Self::from_truth(TruthState::from_bool(predicate.evaluate()))
    }

    /// Supplies the producer for the `True` branch.
    ///
    /// `producer` is stored, not called. It runs only if the final step asks
    /// for the `True` value and the clause is `True`; when the clause is
    /// `False` it is dropped straight away.
    #[inline]
    pub fn then<F>(self, producer: F) -> ValueSupplier<T, F>
    where
        F: FnOnce() -> T,
    {
        match self.truth {
            TruthState::True => ValueSupplier::holding(producer),
            TruthState::False => ValueSupplier::empty(),
        }
    }
}

impl<T> Clause for ValueClause<T> {
    #[inline]
    fn truth(&self) -> TruthState {
        self.truth
    }

    #[inline]
    fn from_truth(truth: TruthState) -> Self {
        Self {
            truth,
            marker: PhantomData,
        }
    }
}

impl<T> Predicate for ValueClause<T> {
    #[inline]
    fn evaluate(self) -> bool {
        self.truth.as_bool()
    }
}

#[cfg(feature = "condition")]
impl<T> From<crate::condition::Condition> for ValueClause<T> {
    #[inline]
    fn from(condition: crate::condition::Condition) -> Self {
        Self::from_truth(condition.truth_state())
    }
}

impl<T> From<bool> for ValueClause<T> {
    #[inline]
    fn from(value: bool) -> Self {
        Self::from_truth(TruthState::from_bool(value))
    }
}

// Hand-written so that no bounds are placed on `T`.

impl<T> Clone for ValueClause<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ValueClause<T> {}

impl<T> PartialEq for ValueClause<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.truth == other.truth
    }
}

impl<T> Eq for ValueClause<T> {}

impl<T> Hash for ValueClause<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.truth.hash(state);
    }
}

impl<T> fmt::Debug for ValueClause<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ValueClause")
            .field("truth", &self.truth)
            .finish()
    }
}
