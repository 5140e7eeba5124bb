//! Values chosen by a boolean decision.
//!
//! A value decision runs in two stages:
//!
//! 1. [`when`] builds a [`ValueClause<T>`], which combines with further
//!    predicates through [`Clause`](crate::clause::Clause).
//! 2. [`ValueClause::then`] attaches the `True` producer and yields a
//!    [`ValueSupplier`], resolved by [`ValueSupplier::otherwise`] or
//!    [`ValueSupplier::optional`].
//!
//! Producers are only called by the final step, and never both.
//!
//! # Examples
//!
//! ```rust
//! use conditional::prelude::*;
//!
//! let retries = 3;
//! let policy = value::when(retries > 0)
//!     .and_not(|| retries > 5)
//!     .then(|| "retry")
//!     .otherwise(|| "give up");
//! assert_eq!(policy, "retry");
//!
//! assert_eq!(value::select(false, || 1, || 2), 2);
//! assert_eq!(value::optional(true, || 1), Some(1));
//! ```
//!
//! The stages are distinct types, so a clause cannot be resolved before its
//! `True` branch is attached:
//!
//! ```compile_fail
//! use conditional::prelude::*;
//!
//! let _ = value::when::<i32>(true).otherwise(|| 1);
//! ```
//!
//! and a supplier is moved when it is resolved:
//!
//! ```compile_fail
//! use conditional::prelude::*;
//!
//! let supplier = value::when(true).then(|| 1);
//! let first = supplier.optional();
//! let second = supplier.optional();
//! ```

mod clause;
mod supplier;

pub use clause::ValueClause;
pub use supplier::ValueSupplier;

use crate::clause::{Clause, Predicate};

/// Starts a value decision from a predicate.
///
/// # Examples
///
/// ```rust
/// use conditional::prelude::*;
///
/// let clause = value::when::<u8>(true);
/// assert!(clause.is_true());
/// ```
#[inline]
pub fn when<T>(predicate: impl Predicate) -> ValueClause<T> {
    ValueClause::when(predicate)
}

/// Starts a value decision from the negation of a predicate.
#[inline]
pub fn when_not<T>(predicate: impl Predicate) -> ValueClause<T> {
    ValueClause::when(predicate).not()
}

/// Returns the value of `on_true` or `on_false`, depending on `predicate`.
///
/// Exactly one of the two producers is called.
///
/// # Examples
///
/// ```rust
/// use conditional::prelude::*;
///
/// let stock = 0;
/// let label = value::select(Condition::when(stock > 0), || "in stock", || "sold out");
/// assert_eq!(label, "sold out");
/// ```
#[inline]
pub fn select<T, P, F, G>(predicate: P, on_true: F, on_false: G) -> T
where
    P: Predicate,
    F: FnOnce() -> T,
    G: FnOnce() -> T,
{
    when(predicate).then(on_true).otherwise(on_false)
}

/// Returns `Some` with the value of `on_true` if `predicate` holds, or `None`.
#[inline]
pub fn optional<T, P, F>(predicate: P, on_true: F) -> Option<T>
where
    P: Predicate,
    F: FnOnce() -> T,
{
    when(predicate).then(on_true).optional()
}
