//! If-then-else in a functional style.
//!
//! This module provides [`Condition`], a two-state value that drives
//! deferred actions instead of branching with `if`/`else`:
//!
//! - [`Condition::then`] runs an action when the condition holds
//! - [`Condition::otherwise`] runs an action when it does not
//! - [`Condition::otherwise_when`] continues an `else if` chain
//! - [`Condition::then_throw`] / [`Condition::otherwise_throw`] turn the
//!   decision into a `Result`
//! - [`Condition::flat_map`] binds the decision to a new `Condition`
//!
//! Clauses are combined lazily through [`Clause`]: `and`, `or`, `and_not`,
//! `or_not` and `not`.
//!
//! # Examples
//!
//! ```rust
//! use conditional::prelude::*;
//!
//! let mut log = Vec::new();
//! let temperature = 31;
//!
//! Condition::when(temperature > 30)
//!     .and(|| temperature < 40)
//!     .then(|| log.push("hot"))
//!     .otherwise(|| log.push("mild"));
//!
//! assert_eq!(log, vec!["hot"]);
//! ```
//!
//! ## Else-if chains
//!
//! ```rust
//! use conditional::prelude::*;
//!
//! let score = 72;
//! let mut grade = "";
//!
//! Condition::when(score >= 90)
//!     .then(|| grade = "A")
//!     .otherwise_when(|| score >= 70)
//!     .then(|| grade = "B")
//!     .otherwise(|| grade = "C");
//!
//! assert_eq!(grade, "B");
//! ```

mod ops;

use std::fmt;

use crate::clause::{Clause, Predicate, TruthState};
use crate::trace::trace_branch;

/// A boolean decision that drives deferred actions.
///
/// A `Condition` is always exactly `True` or `False`. Every combinator
/// returns a new `Condition`; nothing is mutated in place. Two conditions
/// are equal when their states are equal.
///
/// # Examples
///
/// ```rust
/// use conditional::prelude::*;
///
/// let ran = std::cell::Cell::new(false);
/// Condition::when(true).then(|| ran.set(true));
/// assert!(ran.get());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Condition {
    truth: TruthState,
}

static_assertions::assert_impl_all!(Condition: Copy, Send, Sync);

impl Condition {
    /// The condition that holds.
    pub const TRUE: Self = Self {
        truth: TruthState::True,
    };

    /// The condition that does not hold.
    pub const FALSE: Self = Self {
        truth: TruthState::False,
    };

    /// Creates a condition from a predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conditional::prelude::*;
    ///
    /// assert!(Condition::when(true).is_true());
    /// assert!(Condition::when(|| 3 > 4).is_false());
    /// ```
    #[inline]
    pub fn when<P: Predicate>(predicate: P) -> Self {
        Self::pure(predicate.evaluate())
    }

    /// Creates a condition from the negation of a predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conditional::prelude::*;
    ///
    /// assert!(Condition::when_not(false).is_true());
    /// ```
    #[inline]
    pub fn when_not<P: Predicate>(predicate: P) -> Self {
        Self::pure(!predicate.evaluate())
    }

    /// Lifts a `bool` into a condition.
    ///
    /// This is the `return` of [`Condition::flat_map`].
    #[inline]
    pub const fn pure(value: bool) -> Self {
        if value { Self::TRUE } else { Self::FALSE }
    }

    /// Returns the truth state of this condition.
    #[inline]
    pub const fn truth_state(self) -> TruthState {
        self.truth
    }

    /// Runs `action` if the condition holds.
    ///
    /// Returns the same condition, so further `then` calls run as well when
    /// it holds and are all skipped when it does not.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conditional::prelude::*;
    ///
    /// let mut steps = Vec::new();
    /// Condition::when(true)
    ///     .then(|| steps.push(1))
    ///     .then(|| steps.push(2));
    /// assert_eq!(steps, vec![1, 2]);
    /// ```
    #[inline]
    pub fn then<A>(self, action: A) -> Self
    where
        A: FnOnce(),
    {
        trace_branch!("then", self.truth);
        if self.truth.is_true() {
            action();
        }
        self
    }

    /// Runs a fallible `action` if the condition holds.
    ///
    /// An error from `action` is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `action`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conditional::prelude::*;
    ///
    /// let result = Condition::when(true).try_then(|| Err::<(), _>("disk full"));
    /// assert_eq!(result, Err("disk full"));
    ///
    /// let skipped = Condition::when(false).try_then(|| Err::<(), _>("disk full"));
    /// assert_eq!(skipped, Ok(Condition::FALSE));
    /// ```
    #[inline]
    pub fn try_then<A, E>(self, action: A) -> Result<Self, E>
    where
        A: FnOnce() -> Result<(), E>,
    {
        trace_branch!("try_then", self.truth);
        if self.truth.is_true() {
            action()?;
        }
        Ok(self)
    }

    /// Runs `action` if the condition does not hold.
    ///
    /// This ends the chain.
    #[inline]
    pub fn otherwise<A>(self, action: A)
    where
        A: FnOnce(),
    {
        trace_branch!("otherwise", self.truth);
        if self.truth.is_false() {
            action();
        }
    }

    /// Runs a fallible `action` if the condition does not hold.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `action`.
    #[inline]
    pub fn try_otherwise<A, E>(self, action: A) -> Result<(), E>
    where
        A: FnOnce() -> Result<(), E>,
    {
        trace_branch!("try_otherwise", self.truth);
        if self.truth.is_false() {
            action()
        } else {
            Ok(())
        }
    }

    /// Continues an `else if` chain.
    ///
    /// When the condition does not hold, `predicate` is evaluated and seeds
    /// the returned condition. When it holds, a branch has already matched:
    /// `predicate` is not evaluated and the result still holds, so any
    /// `then` that follows runs again for the branch that matched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conditional::prelude::*;
    ///
    /// let mut ran = Vec::new();
    /// Condition::when(false)
    ///     .then(|| ran.push("first"))
    ///     .otherwise_when(|| true)
    ///     .then(|| ran.push("second"));
    /// assert_eq!(ran, vec!["second"]);
    /// ```
    #[inline]
    pub fn otherwise_when<P: Predicate>(self, predicate: P) -> Self {
        trace_branch!("otherwise_when", self.truth);
        match self.truth {
            TruthState::True => self,
            TruthState::False => Self::when(predicate),
        }
    }

    /// Returns `Err(error)` if the condition holds.
    ///
    /// # Errors
    ///
    /// Returns `error` when the condition is `True`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conditional::prelude::*;
    ///
    /// fn withdraw(balance: u32, amount: u32) -> Result<u32, String> {
    ///     Condition::when(amount > balance).then_throw("insufficient funds".to_string())?;
    ///     Ok(balance - amount)
    /// }
    ///
    /// assert_eq!(withdraw(10, 4), Ok(6));
    /// assert!(withdraw(1, 4).is_err());
    /// ```
    #[inline]
    pub fn then_throw<E>(self, error: E) -> Result<(), E> {
        self.then_throw_with(|| error)
    }

    /// Returns the error built by `supplier` if the condition holds.
    ///
    /// `supplier` is only called when the condition is `True`.
    ///
    /// # Errors
    ///
    /// Returns the supplied error when the condition is `True`.
    #[inline]
    pub fn then_throw_with<E, S>(self, supplier: S) -> Result<(), E>
    where
        S: FnOnce() -> E,
    {
        trace_branch!("then_throw", self.truth);
        match self.truth {
            TruthState::True => Err(supplier()),
            TruthState::False => Ok(()),
        }
    }

    /// Returns `Err(error)` if the condition does not hold.
    ///
    /// # Errors
    ///
    /// Returns `error` when the condition is `False`.
    #[inline]
    pub fn otherwise_throw<E>(self, error: E) -> Result<(), E> {
        self.otherwise_throw_with(|| error)
    }

    /// Returns the error built by `supplier` if the condition does not hold.
    ///
    /// `supplier` is only called when the condition is `False`.
    ///
    /// # Errors
    ///
    /// Returns the supplied error when the condition is `False`.
    #[inline]
    pub fn otherwise_throw_with<E, S>(self, supplier: S) -> Result<(), E>
    where
        S: FnOnce() -> E,
    {
        trace_branch!("otherwise_throw", self.truth);
        match self.truth {
            TruthState::True => Ok(()),
            TruthState::False => Err(supplier()),
        }
    }

    /// Applies `function` to the decision and returns its condition.
    ///
    /// Together with [`Condition::pure`] this satisfies the monad laws:
    ///
    /// ```text
    /// pure(v).flat_map(f)               == f(v)
    /// m.flat_map(pure)                  == m
    /// m.flat_map(f).flat_map(g)         == m.flat_map(|x| f(x).flat_map(g))
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conditional::prelude::*;
    ///
    /// let inverted = Condition::when(true).flat_map(|value| Condition::when(!value));
    /// assert!(inverted.is_false());
    /// ```
    #[inline]
    pub fn flat_map<F>(self, function: F) -> Self
    where
        F: FnOnce(bool) -> Self,
    {
        function(self.truth.as_bool())
    }

    /// Maps the decision through `function`.
    #[inline]
    #[must_use]
    pub fn map<F>(self, function: F) -> Self
    where
        F: FnOnce(bool) -> bool,
    {
        self.flat_map(|value| Self::pure(function(value)))
    }
}

impl Clause for Condition {
    #[inline]
    fn truth(&self) -> TruthState {
        self.truth
    }

    #[inline]
    fn from_truth(truth: TruthState) -> Self {
        Self { truth }
    }
}

impl Predicate for Condition {
    #[inline]
    fn evaluate(self) -> bool {
        self.truth.as_bool()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.truth, formatter)
    }
}
