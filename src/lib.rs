//! # quickprop
//!
//! A small, purely functional property-based testing toolkit.
//!
//! ## Overview
//!
//! quickprop is built from three layered abstractions plus an independent
//! algebraic one:
//!
//! - **[`SimpleRng`]**: a deterministic, immutable pseudo-random source —
//!   every draw returns the value together with the successor state.
//! - **[`State`]**: a generic "compute a value while threading a state"
//!   combinator; generators are built on top of it.
//! - **[`Gen`]**: composable recipes for producing pseudo-random values
//!   (ranges, lists, union, weighted choice, dependent generation).
//! - **[`Prop`]**: properties over generated values with conjunction,
//!   disjunction, and failure tagging; falsification is reported as data,
//!   never thrown.
//! - **[`Monoid`] / [`fold_map`]**: an associative-combination contract with
//!   a balanced divide-and-conquer reducer, demonstrated by the
//!   [`word_count`](algebra::word_count) example.
//!
//! ## Example
//!
//! ```rust
//! use quickprop::prelude::*;
//!
//! let digits = Gen::choose(0, 10);
//! let in_range = Prop::for_all(&digits, |&n| (0..10).contains(&n));
//!
//! let result = in_range.run(100, SimpleRng::new(42));
//! assert_eq!(result, CheckResult::Passed);
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon`: parallel `par_fold_map` evaluating both halves of the
//!   balanced fold concurrently.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod algebra;
pub mod generator;
pub mod property;
pub mod random;
pub mod state;

pub use algebra::{Monoid, Sum, WordCount, fold_map, word_count};
#[cfg(feature = "rayon")]
pub use algebra::par_fold_map;
pub use generator::Gen;
pub use property::{CheckResult, Prop};
pub use random::SimpleRng;
pub use state::State;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use quickprop::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algebra::{Monoid, Sum, WordCount, fold_map, word_count};
    pub use crate::generator::Gen;
    pub use crate::property::{CheckResult, Prop};
    pub use crate::random::SimpleRng;
    pub use crate::state::State;

    #[cfg(feature = "rayon")]
    pub use crate::algebra::par_fold_map;
}
