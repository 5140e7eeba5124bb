//! The two-valued truth state shared by every clause.

use std::fmt;
use std::ops::Not;

/// The evaluated state of a clause: either `True` or `False`.
///
/// `TruthState` carries no payload, so both variants are plain constants
/// that can be copied and shared freely, including across threads.
///
/// # Examples
///
/// ```rust
/// use conditional::clause::TruthState;
///
/// let state = TruthState::from_bool(true);
/// assert!(state.is_true());
/// assert_eq!(!state, TruthState::False);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "bool", into = "bool"))]
pub enum TruthState {
    /// The clause evaluated to `false`.
    #[default]
    False,
    /// The clause evaluated to `true`.
    True,
}

static_assertions::assert_impl_all!(TruthState: Copy, Send, Sync);

impl TruthState {
    /// Maps a `bool` onto its truth state.
    #[inline]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }

    /// Returns the state as a `bool`.
    #[inline]
    pub const fn as_bool(self) -> bool {
        matches!(self, Self::True)
    }

    /// Returns `true` for the `True` variant.
    #[inline]
    pub const fn is_true(self) -> bool {
        self.as_bool()
    }

    /// Returns `true` for the `False` variant.
    #[inline]
    pub const fn is_false(self) -> bool {
        !self.as_bool()
    }

    /// Returns the opposite variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conditional::clause::TruthState;
    ///
    /// assert_eq!(TruthState::True.negate(), TruthState::False);
    /// assert_eq!(TruthState::False.negate(), TruthState::True);
    /// ```
    #[inline]
    pub const fn negate(self) -> Self {
        match self {
            Self::True => Self::False,
            Self::False => Self::True,
        }
    }
}

impl From<bool> for TruthState {
    #[inline]
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

impl From<TruthState> for bool {
    #[inline]
    fn from(state: TruthState) -> Self {
        state.as_bool()
    }
}

impl Not for TruthState {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl fmt::Display for TruthState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => formatter.write_str("true"),
            Self::False => formatter.write_str("false"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, TruthState::True)]
    #[case(false, TruthState::False)]
    fn truth_state_from_bool(#[case] value: bool, #[case] expected: TruthState) {
        assert_eq!(TruthState::from_bool(value), expected);
        assert_eq!(TruthState::from(value), expected);
        assert_eq!(bool::from(expected), value);
    }

    #[rstest]
    fn truth_state_negate_is_involutive() {
        assert_eq!(TruthState::True.negate().negate(), TruthState::True);
        assert_eq!(!!TruthState::False, TruthState::False);
    }

    #[rstest]
    fn truth_state_default_is_false() {
        assert_eq!(TruthState::default(), TruthState::False);
    }

    #[rstest]
    #[case(TruthState::True, "true")]
    #[case(TruthState::False, "false")]
    fn truth_state_display(#[case] state: TruthState, #[case] expected: &str) {
        assert_eq!(state.to_string(), expected);
    }
}
