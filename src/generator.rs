//! Composable pseudo-random value generators.
//!
//! A [`Gen<A>`] is a [`State`] computation over [`SimpleRng`]: a recipe for
//! drawing a value of type `A` from a random source while producing the
//! successor source. Because the source is threaded immutably, generators
//! are deterministic — running the same generator on the same source always
//! yields the same value and successor.
//!
//! # Examples
//!
//! ```rust
//! use quickprop::{Gen, SimpleRng};
//!
//! let die = Gen::choose(1, 7);
//! let pair_of_dice = Gen::list_of_n(2, &die);
//!
//! let (rolls, _) = pair_of_dice.run(SimpleRng::new(2026));
//! assert_eq!(rolls.len(), 2);
//! assert!(rolls.iter().all(|roll| (1..7).contains(roll)));
//! ```

use crate::random::SimpleRng;
use crate::state::State;

/// A composable recipe for producing pseudo-random values of type `A`.
///
/// Generators are built from and compose via [`State`]'s combinators, with
/// domain-specific constructors for ranges, lists, union, and weighted
/// choice. Cloning is cheap (the underlying transition function is shared).
pub struct Gen<A>
where
    A: 'static,
{
    sample: State<SimpleRng, A>,
}

impl<A> Gen<A>
where
    A: 'static,
{
    /// Wraps a raw `State` computation over the random source.
    #[must_use]
    pub const fn from_state(sample: State<SimpleRng, A>) -> Self {
        Self { sample }
    }

    /// Unwraps the generator into its underlying `State` computation.
    #[must_use]
    pub fn into_state(self) -> State<SimpleRng, A> {
        self.sample
    }

    /// Draws one value, returning it with the successor source.
    pub fn run(&self, rng: SimpleRng) -> (A, SimpleRng) {
        self.sample.run(rng)
    }

    /// A generator that always produces `value` without consuming a draw.
    pub fn unit(value: A) -> Self
    where
        A: Clone,
    {
        Self::from_state(State::pure(value))
    }

    /// Transforms every generated value with `function`.
    pub fn fmap<B, F>(self, function: F) -> Gen<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        Gen::from_state(self.sample.fmap(function))
    }

    /// Dependent generation: later draws may depend on the value produced by
    /// this generator.
    ///
    /// The receiver draws first; `function` turns its value into the
    /// generator that continues from the successor source. Earlier draws are
    /// never re-run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quickprop::{Gen, SimpleRng};
    ///
    /// // A list whose length is itself drawn at random.
    /// let sized = Gen::choose(0, 4)
    ///     .flat_map(|n| Gen::list_of_n(n.unsigned_abs() as usize, &Gen::choose(0, 100)));
    /// let (values, _) = sized.run(SimpleRng::new(1));
    /// assert!(values.len() < 4);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Gen<B>
    where
        F: Fn(A) -> Gen<B> + 'static,
        B: 'static,
    {
        Gen::from_state(self.sample.flat_map(move |value| function(value).sample))
    }

    /// Generates an ordered sequence of exactly `n` values by running
    /// `element` `n` times, preserving draw order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quickprop::{Gen, SimpleRng};
    ///
    /// let triple = Gen::list_of_n(3, &Gen::choose(0, 10));
    /// let (values, _) = triple.run(SimpleRng::new(5));
    /// assert_eq!(values.len(), 3);
    /// ```
    #[must_use]
    pub fn list_of_n(n: usize, element: &Self) -> Gen<Vec<A>> {
        Gen::from_state(State::sequence(vec![element.sample.clone(); n]))
    }

    /// Generates a sequence whose length is drawn from `count` first; the
    /// element draws follow sequentially, so the length is fixed before any
    /// element is generated.
    ///
    /// Counts must be non-negative; a generator producing negative counts is
    /// a caller defect.
    #[must_use]
    pub fn list_of(count: &Gen<i32>, element: &Self) -> Gen<Vec<A>> {
        let element = element.clone();
        count.clone().flat_map(move |n| {
            debug_assert!(n >= 0, "list_of requires a non-negative count");
            Self::list_of_n(n.unsigned_abs() as usize, &element)
        })
    }

    /// Chooses between two generators with equal probability.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quickprop::{Gen, SimpleRng};
    ///
    /// let coin = Gen::union(Gen::unit("heads"), Gen::unit("tails"));
    /// let (face, _) = coin.run(SimpleRng::new(3));
    /// assert!(face == "heads" || face == "tails");
    /// ```
    #[must_use]
    pub fn union(left: Self, right: Self) -> Self {
        Gen::boolean().flat_map(move |heads| {
            if heads {
                left.clone()
            } else {
                right.clone()
            }
        })
    }

    /// Chooses between two generators with probability proportional to the
    /// magnitude of the attached weights.
    ///
    /// A uniform `p` is drawn from `[0, 1)` and `left` is selected when
    /// `p < |w_left| / (|w_left| + |w_right|)`. Weights need not be
    /// normalized; signs are ignored.
    ///
    /// # Panics
    ///
    /// Panics when both weight magnitudes sum to zero — there is no
    /// distribution to draw from, and failing fast beats dividing by zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quickprop::{Gen, SimpleRng};
    ///
    /// let always_left = Gen::weighted((Gen::unit(1), 1.0), (Gen::unit(2), 0.0));
    /// assert_eq!(always_left.run(SimpleRng::new(11)).0, 1);
    /// ```
    #[must_use]
    pub fn weighted(left: (Self, f64), right: (Self, f64)) -> Self {
        let (left_gen, left_weight) = left;
        let (right_gen, right_weight) = right;
        let total = left_weight.abs() + right_weight.abs();
        assert!(total > 0.0, "weighted requires a non-zero total weight");
        let threshold = left_weight.abs() / total;

        Gen::double().flat_map(move |p| {
            if p < threshold {
                left_gen.clone()
            } else {
                right_gen.clone()
            }
        })
    }
}

impl Gen<i32> {
    /// Draws a raw 32-bit signed integer.
    #[must_use]
    pub fn int() -> Self {
        Self::from_state(State::new(SimpleRng::next_i32))
    }

    /// Draws an integer in `[0, i32::MAX]`.
    #[must_use]
    pub fn non_negative_int() -> Self {
        Self::from_state(State::new(SimpleRng::non_negative_i32))
    }

    /// Draws an integer uniformly from `[lo, hi)`.
    ///
    /// `hi` must be strictly greater than `lo`; every draw satisfies
    /// `lo <= value < hi`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quickprop::{Gen, SimpleRng};
    ///
    /// let (digit, _) = Gen::choose(0, 10).run(SimpleRng::new(8));
    /// assert!((0..10).contains(&digit));
    /// ```
    #[must_use]
    pub fn choose(lo: i32, hi: i32) -> Self {
        Self::from_state(State::new(move |rng: SimpleRng| {
            let (value, next) = rng.non_negative_i32();
            (value % (hi - lo) + lo, next)
        }))
    }
}

impl Gen<f64> {
    /// Draws a floating value uniformly from `[0, 1)`.
    #[must_use]
    pub fn double() -> Self {
        Self::from_state(State::new(SimpleRng::next_f64))
    }
}

impl Gen<bool> {
    /// Draws a boolean with equal probability.
    #[must_use]
    pub fn boolean() -> Self {
        Gen::choose(0, 2).fmap(|bit| bit == 1)
    }
}

impl<A> Clone for Gen<A>
where
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            sample: self.sample.clone(),
        }
    }
}
