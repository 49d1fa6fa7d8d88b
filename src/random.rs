//! Deterministic pseudo-random source.
//!
//! [`SimpleRng`] is an immutable 48-bit linear congruential generator. It is
//! never mutated: every draw is a pure function from the current state to a
//! `(value, successor)` pair, so constructing two generators from the same
//! seed and drawing the same number of values always yields identical
//! sequences.
//!
//! # Examples
//!
//! ```rust
//! use quickprop::SimpleRng;
//!
//! let rng = SimpleRng::new(42);
//! let (first, rng2) = rng.next_i32();
//!
//! // The original state is untouched; re-drawing reproduces the value.
//! assert_eq!(rng.next_i32().0, first);
//!
//! let (second, _) = rng2.next_i32();
//! assert_ne!(first, second);
//! ```

/// LCG multiplier (the 48-bit `java.util.Random` family of constants).
const MULTIPLIER: i64 = 0x5_DEEC_E66D;

/// LCG increment.
const INCREMENT: i64 = 0xB;

/// Mask keeping the internal state at 48 bits.
const MASK: i64 = 0xFFFF_FFFF_FFFF;

/// An immutable, deterministic pseudo-random generator state.
///
/// Each drawing operation consumes the state by value (the type is `Copy`,
/// one machine word) and returns the drawn value together with the successor
/// state. Identical states always produce identical pairs; there is no
/// hidden counter and no shared mutation.
///
/// # Examples
///
/// ```rust
/// use quickprop::SimpleRng;
///
/// let (a, rng) = SimpleRng::new(7).next_i32();
/// let (b, _) = rng.next_i32();
/// let (a2, rng2) = SimpleRng::new(7).next_i32();
/// assert_eq!((a, b), (a2, rng2.next_i32().0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimpleRng {
    seed: i64,
}

impl SimpleRng {
    /// Creates a generator state from a seed.
    ///
    /// Any integer is a valid seed; equal seeds yield equal sequences.
    #[must_use]
    pub const fn new(seed: i64) -> Self {
        Self { seed }
    }

    /// Draws a 32-bit signed integer and returns it with the successor state.
    ///
    /// This is a total function over all states.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quickprop::SimpleRng;
    ///
    /// let (value, next) = SimpleRng::new(42).next_i32();
    /// assert_eq!(SimpleRng::new(42).next_i32(), (value, next));
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn next_i32(self) -> (i32, Self) {
        let seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) & MASK;
        let value = (seed >> 16) as i32;
        (value, Self { seed })
    }

    /// Draws an integer in `[0, i32::MAX]`.
    ///
    /// The raw draw's sign bit is cleared, so `i32::MIN` maps to 0 rather
    /// than to an out-of-range negative.
    #[must_use]
    pub const fn non_negative_i32(self) -> (i32, Self) {
        let (value, next) = self.next_i32();
        (value & i32::MAX, next)
    }

    /// Draws a floating value in `[0, 1)`.
    ///
    /// A non-negative integer draw divided by `i32::MAX + 1`, so 1.0 itself
    /// is never produced.
    #[must_use]
    pub fn next_f64(self) -> (f64, Self) {
        let (value, next) = self.non_negative_i32();
        (f64::from(value) / (f64::from(i32::MAX) + 1.0), next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn same_seed_same_sequence() {
        let mut left = SimpleRng::new(42);
        let mut right = SimpleRng::new(42);
        for _ in 0..100 {
            let (a, next_left) = left.next_i32();
            let (b, next_right) = right.next_i32();
            assert_eq!(a, b);
            left = next_left;
            right = next_right;
        }
    }

    #[rstest]
    fn state_is_not_mutated_by_drawing() {
        let rng = SimpleRng::new(1);
        let (first, _) = rng.next_i32();
        let (again, _) = rng.next_i32();
        assert_eq!(first, again);
    }

    #[rstest]
    fn successor_differs_from_origin() {
        let rng = SimpleRng::new(1);
        let (_, next) = rng.next_i32();
        assert_ne!(rng, next);
    }

    #[rstest]
    fn non_negative_is_in_range() {
        let mut rng = SimpleRng::new(-987_654_321);
        for _ in 0..1_000 {
            let (value, next) = rng.non_negative_i32();
            assert!(value >= 0);
            rng = next;
        }
    }

    #[rstest]
    #[case(i32::MIN, 0)]
    #[case(i32::MAX, i32::MAX)]
    #[case(-1, i32::MAX)]
    #[case(0, 0)]
    #[case(5, 5)]
    fn sign_bit_clearing(#[case] raw: i32, #[case] expected: i32) {
        assert_eq!(raw & i32::MAX, expected);
    }

    #[rstest]
    fn f64_is_in_unit_interval() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1_000 {
            let (value, next) = rng.next_f64();
            assert!((0.0..1.0).contains(&value));
            rng = next;
        }
    }
}
