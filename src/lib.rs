//! # conditional
//!
//! If-then-else in a functional style for Rust.
//!
//! ## Overview
//!
//! This library replaces imperative `if`/`else` chains with chainable
//! values that compose lazily and short-circuit:
//!
//! - **Clauses**: the shared `and` / `or` / `and_not` / `or_not` / `not`
//!   algebra over a two-valued [`TruthState`](clause::TruthState)
//! - **Condition**: runs deferred actions with `then` / `otherwise`,
//!   continues `else if` chains, turns a decision into a `Result`, and
//!   binds decisions with `flat_map`
//! - **Value**: chooses a typed result through a two-stage
//!   `when(..).then(..).otherwise(..)` builder
//!
//! ## Feature Flags
//!
//! - `condition`: the [`Condition`](condition::Condition) type (default)
//! - `value`: value decisions (default)
//! - `serde`: `Serialize`/`Deserialize` for truth states and conditions
//! - `tracing`: trace events for branch selection
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use conditional::prelude::*;
//!
//! let age = 20;
//! let mut admitted = false;
//!
//! Condition::when(age >= 18)
//!     .then(|| admitted = true)
//!     .otherwise(|| admitted = false);
//! assert!(admitted);
//!
//! let ticket = value::when(age < 12).then(|| "child").otherwise(|| "adult");
//! assert_eq!(ticket, "adult");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the public types together with the [`Clause`](crate::clause::Clause)
/// and [`Predicate`](crate::clause::Predicate) traits, which must be in
/// scope for the combinators.
///
/// # Usage
///
/// ```rust
/// use conditional::prelude::*;
/// ```
pub mod prelude {
    pub use crate::clause::{Clause, Predicate, TruthState};

    #[cfg(feature = "condition")]
    pub use crate::condition::Condition;

    #[cfg(feature = "value")]
    pub use crate::value::{self, ValueClause, ValueSupplier};
}

pub mod clause;

#[cfg(feature = "condition")]
pub mod condition;

#[cfg(feature = "value")]
pub mod value;

mod trace;
