//! The clause evaluator shared by [`Condition`](crate::condition::Condition)
//! and [`ValueClause`](crate::value::ValueClause).
//!
//! A clause holds one [`TruthState`] and combines it with further
//! [`Predicate`]s. Combinators short-circuit: a predicate is never
//! evaluated when the current state already decides the result.
//!
//! | receiver | `and(p)`        | `or(p)`         |
//! |----------|-----------------|-----------------|
//! | `True`   | evaluates `p`   | `True`, skips `p` |
//! | `False`  | `False`, skips `p` | evaluates `p` |
//!
//! # Examples
//!
//! ```rust
//! use conditional::prelude::*;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let condition = Condition::when(false).and(|| {
//!     calls.set(calls.get() + 1);
//!     true
//! });
//!
//! assert!(condition.is_false());
//! assert_eq!(calls.get(), 0);
//! ```

mod predicate;
mod truth;

pub(crate) use predicate::Negated;
pub use predicate::Predicate;
pub use truth::TruthState;

/// The combinator algebra over a [`TruthState`].
///
/// Implementors only say how to read their state and how to build a new
/// instance from one; `and`, `or`, `and_not`, `or_not` and `not` are
/// provided and carry the short-circuit rules.
pub trait Clause: Sized {
    /// Returns the current truth state.
    fn truth(&self) -> TruthState;

    /// Builds a clause in the given state.
    fn from_truth(truth: TruthState) -> Self;

    /// Returns `true` when the clause is in the `True` state.
    #[inline]
    fn is_true(&self) -> bool {
        self.truth().is_true()
    }

    /// Returns `true` when the clause is in the `False` state.
    #[inline]
    fn is_false(&self) -> bool {
        self.truth().is_false()
    }

    /// Logical AND with `predicate`.
    ///
    /// A `False` receiver stays `False` and `predicate` is not evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conditional::prelude::*;
    ///
    /// assert!(Condition::when(true).and(|| true).is_true());
    /// assert!(Condition::when(true).and(false).is_false());
    /// assert!(Condition::when(false).and(|| 2 > 1).is_false());
    /// ```
    #[inline]
    fn and<P: Predicate>(self, predicate: P) -> Self {
        match self.truth() {
            TruthState::False => self,
            TruthState::True => Self::from_truth(TruthState::from_bool(predicate.evaluate())),
        }
    }

    /// Logical OR with `predicate`.
    ///
    /// A `True` receiver stays `True` and `predicate` is not evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conditional::prelude::*;
    ///
    /// assert!(Condition::when(false).or(|| true).is_true());
    /// assert!(Condition::when(false).or(false).is_false());
    /// assert!(Condition::when(true).or(|| 1 > 2).is_true());
    /// ```
    #[inline]
    fn or<P: Predicate>(self, predicate: P) -> Self {
        match self.truth() {
            TruthState::True => self,
            TruthState::False => Self::from_truth(TruthState::from_bool(predicate.evaluate())),
        }
    }

    /// Logical AND with the negation of `predicate`.
    #[inline]
    fn and_not<P: Predicate>(self, predicate: P) -> Self {
        self.and(Negated(predicate))
    }

    /// Logical OR with the negation of `predicate`.
    #[inline]
    fn or_not<P: Predicate>(self, predicate: P) -> Self {
        self.or(Negated(predicate))
    }

    /// Returns a clause in the opposite state.
    #[inline]
    #[must_use]
    fn not(self) -> Self {
        Self::from_truth(self.truth().negate())
    }
}

impl Clause for TruthState {
    #[inline]
    fn truth(&self) -> TruthState {
        *self
    }

    #[inline]
    fn from_truth(truth: TruthState) -> Self {
        truth
    }
}
