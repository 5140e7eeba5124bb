//! Sources of a single boolean decision.

use super::TruthState;

/// Anything that can be evaluated exactly once to a `bool`.
///
/// Closures are the lazy form: the clause combinators only call them when
/// the current state does not already decide the result. A plain `bool`
/// is the eager form, already evaluated by the caller.
///
/// Evaluation consumes the predicate, so it can never run twice.
///
/// # Examples
///
/// ```rust
/// use conditional::clause::Predicate;
///
/// assert!(true.evaluate());
/// assert!(!(|| 1 > 2).evaluate());
/// ```
pub trait Predicate {
    /// Evaluates the predicate.
    fn evaluate(self) -> bool;
}

impl<F> Predicate for F
where
    F: FnOnce() -> bool,
{
    #[inline]
    fn evaluate(self) -> bool {
        self()
    }
}

impl Predicate for bool {
    #[inline]
    fn evaluate(self) -> bool {
        self
    }
}

impl Predicate for TruthState {
    #[inline]
    fn evaluate(self) -> bool {
        self.as_bool()
    }
}

/// Negates a predicate without evaluating it.
///
/// Used by `and_not` / `or_not` so the wrapped predicate is still only
/// evaluated when the combinator asks for it.
pub(crate) struct Negated<P>(pub(crate) P);

impl<P: Predicate> Predicate for Negated<P> {
    #[inline]
    fn evaluate(self) -> bool {
        !self.0.evaluate()
    }
}
