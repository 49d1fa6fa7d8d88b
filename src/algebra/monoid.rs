//! Monoid contract - an associative binary operation with an identity.
//!
//! A type `T` is a monoid if it has an associative `combine: (T, T) -> T`
//! and an identity element `empty: T`. The contract carries no run-time
//! state; it is purely a promise the implementation makes, and nothing here
//! validates it — a law-breaking instance is a defect in the instance, not a
//! recoverable data condition.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Associativity is what makes the balanced, parallelizable
//! [`fold_map`](super::fold_map) interchangeable with a sequential left
//! fold.
//!
//! # Examples
//!
//! ```rust
//! use quickprop::Monoid;
//!
//! assert_eq!(String::empty(), "");
//! assert_eq!(String::from("lorem ").combine(String::from("ipsum")), "lorem ipsum");
//!
//! let vec: Vec<i32> = Vec::empty();
//! assert!(vec.is_empty());
//! ```

use std::ops::Add;

/// A type with an associative binary operation and an identity element.
///
/// # Laws
///
/// All implementations must satisfy, for all `a`, `b`, `c`:
///
/// - `Self::empty().combine(a) == a`
/// - `a.combine(Self::empty()) == a`
/// - `(a.combine(b)).combine(c) == a.combine(b.combine(c))`
pub trait Monoid {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines two values into one.
    ///
    /// This operation must be associative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quickprop::Monoid;
    ///
    /// assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
    /// ```
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines all elements in an iterator, starting from the identity.
    ///
    /// The empty iterator yields `Self::empty()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quickprop::Monoid;
    ///
    /// let parts = vec![String::from("a"), String::from("b"), String::from("c")];
    /// assert_eq!(String::combine_all(parts), "abc");
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

/// String concatenation with the empty string as identity.
impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }

    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

/// Vec concatenation with the empty vec as identity.
impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }

    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// The trivial monoid.
impl Monoid for () {
    fn empty() -> Self {}

    fn combine(self, (): Self) -> Self {}
}

/// A numeric value combined by addition, with the additive zero as identity.
///
/// # Examples
///
/// ```rust
/// use quickprop::{Monoid, Sum};
///
/// let total = Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]);
/// assert_eq!(total, Sum(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Monoid for Sum<A>
where
    A: Add<Output = A> + Default,
{
    fn empty() -> Self {
        Self(A::default())
    }

    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}
