//! State-threading combinator.
//!
//! A `State<S, A>` encapsulates a transition function `S -> (A, S)`: given a
//! current state it produces a value and a successor state. Composition
//! (`fmap`, `flat_map`, `map2`, `sequence`) builds new transition functions
//! out of old ones without executing anything; running the same `State` on
//! the same initial state always yields the same `(value, state)` pair.
//!
//! This is the discipline that lets a stateful-looking random generator stay
//! a pure value transformation: the generator types in
//! [`crate::generator`] are `State` computations over
//! [`SimpleRng`](crate::SimpleRng).
//!
//! # Laws
//!
//! - Functor identity: `state.fmap(|x| x)` runs like `state`
//! - Functor composition: `state.fmap(f).fmap(g)` runs like
//!   `state.fmap(|x| g(f(x)))`
//! - Monad left identity: `State::pure(a).flat_map(f)` runs like `f(a)`
//! - Monad right identity: `m.flat_map(State::pure)` runs like `m`
//! - Monad associativity: `m.flat_map(f).flat_map(g)` runs like
//!   `m.flat_map(|x| f(x).flat_map(g))`
//!
//! # Examples
//!
//! ```rust
//! use quickprop::State;
//!
//! let tick: State<i32, i32> = State::new(|s: i32| (s, s + 1));
//! let labelled = tick.fmap(|n| format!("draw #{n}"));
//! let (value, next) = labelled.run(7);
//! assert_eq!(value, "draw #7");
//! assert_eq!(next, 8);
//! ```

use std::rc::Rc;

/// A computation that produces a value of type `A` while threading a state
/// of type `S`.
///
/// The wrapped transition function is shared behind an `Rc`, so cloning a
/// `State` is cheap and running it never consumes it. Sequencing is
/// left-to-right and single-threaded: each step owns the state value until
/// it produces the successor, so no step can observe a stale state.
///
/// # Examples
///
/// ```rust
/// use quickprop::State;
///
/// let step: State<u64, u64> = State::new(|s: u64| (s * 2, s + 1));
/// let chained = step.flat_map(|doubled| {
///     State::new(move |s: u64| (doubled + s, s))
/// });
/// let (value, final_state) = chained.run(10);
/// assert_eq!(value, 31); // 10 * 2 + 11
/// assert_eq!(final_state, 11);
/// ```
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// The wrapped transition function. `Rc` so composition can share it.
    transition: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a `State` from a transition function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quickprop::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.run(10), (20, 11));
    /// ```
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            transition: Rc::new(transition),
        }
    }

    /// Runs the computation with the given initial state, returning the
    /// produced value and the successor state.
    pub fn run(&self, initial: S) -> (A, S) {
        (self.transition)(initial)
    }

    /// Runs the computation and keeps only the produced value.
    pub fn eval(&self, initial: S) -> A {
        self.run(initial).0
    }

    /// Runs the computation and keeps only the final state.
    pub fn exec(&self, initial: S) -> S {
        self.run(initial).1
    }

    /// Creates a `State` that returns a constant value and leaves the state
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quickprop::State;
    ///
    /// let state: State<i32, &str> = State::pure("constant");
    /// assert_eq!(state.run(42), ("constant", 42));
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Transforms the produced value, propagating the state unchanged in
    /// position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quickprop::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    /// let doubled = state.fmap(|value| value * 2);
    /// assert_eq!(doubled.run(21), (42, 22));
    /// ```
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (value, next) = (transition)(state);
            (function(value), next)
        })
    }

    /// Chains this computation into one produced from its value.
    ///
    /// The receiver runs first, yielding `(a, s1)`; `function(a)` then runs
    /// on `s1`. Sequencing is strictly left-to-right — later steps may
    /// depend on earlier values, and earlier steps are never re-run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quickprop::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    /// let chained = state.flat_map(|value| {
    ///     State::new(move |s: i32| (value + s, s))
    /// });
    /// assert_eq!(chained.run(10), (21, 11));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (value, intermediate) = (transition)(state);
            function(value).run(intermediate)
        })
    }

    /// Combines two computations with a binary function, threading the state
    /// through the receiver first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quickprop::State;
    ///
    /// let first: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    /// let second: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// let combined = first.map2(second, |a, b| a + b);
    /// assert_eq!(combined.run(10), (32, 12)); // 10 + 22
    /// ```
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let left = self.transition;
        let right = other.transition;
        State::new(move |state| {
            let (a, intermediate) = (left)(state);
            let (b, next) = (right)(intermediate);
            (function(a, b), next)
        })
    }

    /// Combines two computations into a pair.
    #[must_use]
    pub fn product<B>(self, other: State<S, B>) -> State<S, (A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Threads the state through every computation in order, collecting the
    /// produced values in input order.
    ///
    /// The empty list produces `(vec![], s)` with the state unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quickprop::State;
    ///
    /// let steps = vec![
    ///     State::new(|s: i32| (s, s + 1)),
    ///     State::new(|s: i32| (s, s + 1)),
    ///     State::new(|s: i32| (s, s + 1)),
    /// ];
    /// let (values, final_state) = State::sequence(steps).run(0);
    /// assert_eq!(values, vec![0, 1, 2]);
    /// assert_eq!(final_state, 3);
    /// ```
    #[must_use]
    pub fn sequence(computations: Vec<Self>) -> State<S, Vec<A>> {
        State::new(move |initial| {
            let mut state = initial;
            let mut values = Vec::with_capacity(computations.len());
            for computation in &computations {
                let (value, next) = computation.run(state);
                values.push(value);
                state = next;
            }
            (values, state)
        })
    }
}

impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            transition: self.transition.clone(),
        }
    }
}

impl<S, A> std::fmt::Display for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<State>")
    }
}
