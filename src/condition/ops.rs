//! Conversions and operators for [`Condition`].

use std::ops::Not;

use super::Condition;
use crate::clause::{Clause, TruthState};

impl From<bool> for Condition {
    #[inline]
    fn from(value: bool) -> Self {
        Self::pure(value)
    }
}

impl From<TruthState> for Condition {
    #[inline]
    fn from(truth: TruthState) -> Self {
        Self::from_truth(truth)
    }
}

impl From<Condition> for bool {
    #[inline]
    fn from(condition: Condition) -> Self {
        condition.truth_state().as_bool()
    }
}

impl From<Condition> for TruthState {
    #[inline]
    fn from(condition: Condition) -> Self {
        condition.truth_state()
    }
}

impl Not for Condition {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self::from_truth(self.truth_state().negate())
    }
}
