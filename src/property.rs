//! Properties: repeated generation in search of counterexamples.
//!
//! A [`Prop`] wraps a function from a test-case budget and a random source
//! to a [`CheckResult`]. Falsification is a normal, expected value — it is
//! the very thing the framework exists to detect — so nothing here panics or
//! returns errors. Evaluating the same property twice with the same inputs
//! yields the same result; the combinators only route the `(test_cases,
//! rng)` pair to sub-properties, never drawing randomness of their own.
//!
//! # Examples
//!
//! ```rust
//! use quickprop::{CheckResult, Gen, Prop, SimpleRng};
//!
//! let small = Gen::choose(0, 100);
//! let non_negative = Prop::for_all(&small, |&n| n >= 0);
//! assert_eq!(non_negative.run(100, SimpleRng::new(0)), CheckResult::Passed);
//!
//! let broken = Prop::for_all(&small, |&n| n < 50);
//! assert!(broken.run(100, SimpleRng::new(0)).is_falsified());
//! ```

use std::fmt::Debug;
use std::rc::Rc;

use crate::generator::Gen;
use crate::random::SimpleRng;

/// The outcome of evaluating a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    /// No counterexample was found within the test-case budget.
    Passed,
    /// A counterexample was found.
    Falsified {
        /// Human-readable description of the failing input or context.
        failure: String,
        /// Number of cases that passed before the failure.
        successes: usize,
    },
}

impl CheckResult {
    /// Returns whether this result is a falsification.
    #[must_use]
    pub const fn is_falsified(&self) -> bool {
        matches!(self, Self::Falsified { .. })
    }
}

/// A checkable property over generated values.
///
/// Wraps a pure function `(test_cases, rng) -> CheckResult`. Properties are
/// stateless values: cloning is cheap and evaluation has no side effects.
pub struct Prop {
    check: Rc<dyn Fn(usize, SimpleRng) -> CheckResult>,
}

impl Prop {
    /// Creates a property from a raw check function.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(usize, SimpleRng) -> CheckResult + 'static,
    {
        Self {
            check: Rc::new(check),
        }
    }

    /// Evaluates the property: draws up to `test_cases` cases from `rng`,
    /// stopping early at the first falsification.
    #[must_use]
    pub fn run(&self, test_cases: usize, rng: SimpleRng) -> CheckResult {
        (self.check)(test_cases, rng)
    }

    /// Builds a property asserting `predicate` for every value `generator`
    /// produces.
    ///
    /// Evaluation generates one case per iteration, threading the random
    /// source through the generator, and short-circuits on the first
    /// counterexample. The falsification carries the `Debug` rendering of
    /// the failing value and the number of cases that passed before it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quickprop::{CheckResult, Gen, Prop, SimpleRng};
    ///
    /// let lists = Gen::list_of_n(3, &Gen::choose(0, 10));
    /// let prop = Prop::for_all(&lists, |list| list.len() == 3);
    /// assert_eq!(prop.run(50, SimpleRng::new(1)), CheckResult::Passed);
    /// ```
    pub fn for_all<A, F>(generator: &Gen<A>, predicate: F) -> Self
    where
        A: Debug + 'static,
        F: Fn(&A) -> bool + 'static,
    {
        let generator = generator.clone();
        Self::new(move |test_cases, rng| {
            let mut rng = rng;
            for successes in 0..test_cases {
                let (value, next) = generator.run(rng);
                if !predicate(&value) {
                    return CheckResult::Falsified {
                        failure: format!("{value:?}"),
                        successes,
                    };
                }
                rng = next;
            }
            CheckResult::Passed
        })
    }

    /// Conjunction: both properties must hold.
    ///
    /// The receiver runs first; if it passes, `other` runs with the same
    /// `(test_cases, rng)` pair. A falsification of the receiver
    /// short-circuits — `other` is never evaluated.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::new(move |test_cases, rng| match self.run(test_cases, rng) {
            CheckResult::Passed => other.run(test_cases, rng),
            falsified => falsified,
        })
    }

    /// Disjunction: at least one property must hold.
    ///
    /// If the receiver passes, `other` is never evaluated. If both falsify,
    /// the result is `other`'s falsification with its description prefixed
    /// by the receiver's failure text (a diagnostic aid; the two failures
    /// need not be related) and `other`'s success count preserved.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::new(move |test_cases, rng| match self.run(test_cases, rng) {
            CheckResult::Passed => CheckResult::Passed,
            CheckResult::Falsified { failure, .. } => {
                other.clone().tag(failure).run(test_cases, rng)
            }
        })
    }

    /// Prefixes any falsification's description with `label`.
    ///
    /// Passing results are untouched; a falsified description becomes
    /// `"{label}: {original}"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quickprop::{Gen, Prop, SimpleRng};
    ///
    /// let broken = Prop::for_all(&Gen::choose(0, 10), |_| false).tag("digits");
    /// match broken.run(10, SimpleRng::new(0)) {
    ///     quickprop::CheckResult::Falsified { failure, .. } => {
    ///         assert!(failure.starts_with("digits: "));
    ///     }
    ///     quickprop::CheckResult::Passed => unreachable!(),
    /// }
    /// ```
    #[must_use]
    pub fn tag(self, label: impl Into<String>) -> Self {
        let label = label.into();
        Self::new(move |test_cases, rng| match self.run(test_cases, rng) {
            CheckResult::Falsified { failure, successes } => CheckResult::Falsified {
                failure: format!("{label}: {failure}"),
                successes,
            },
            CheckResult::Passed => CheckResult::Passed,
        })
    }
}

impl Clone for Prop {
    fn clone(&self) -> Self {
        Self {
            check: self.check.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn always_pass() -> Prop {
        Prop::new(|_, _| CheckResult::Passed)
    }

    fn always_fail(message: &str) -> Prop {
        let message = message.to_owned();
        Prop::new(move |_, _| CheckResult::Falsified {
            failure: message.clone(),
            successes: 0,
        })
    }

    #[rstest]
    fn for_all_passes_when_predicate_holds() {
        let prop = Prop::for_all(&Gen::choose(0, 10), |&n| (0..10).contains(&n));
        assert_eq!(prop.run(100, SimpleRng::new(42)), CheckResult::Passed);
    }

    #[rstest]
    fn for_all_reports_failing_value_and_success_count() {
        let prop = Prop::for_all(&Gen::unit(7), |&n| n != 7);
        match prop.run(100, SimpleRng::new(42)) {
            CheckResult::Falsified { failure, successes } => {
                assert_eq!(failure, "7");
                assert_eq!(successes, 0);
            }
            CheckResult::Passed => panic!("expected a falsification"),
        }
    }

    #[rstest]
    fn for_all_counts_successes_before_the_failure() {
        // Fails on the first draw >= 500; everything before it counts.
        let generator = Gen::choose(0, 1_000);
        let prop = Prop::for_all(&generator, |&n| n < 500);

        let mut rng = SimpleRng::new(3);
        let mut expected = 0;
        loop {
            let (value, next) = generator.run(rng);
            if value >= 500 {
                break;
            }
            expected += 1;
            rng = next;
        }

        match prop.run(1_000, SimpleRng::new(3)) {
            CheckResult::Falsified { successes, .. } => assert_eq!(successes, expected),
            CheckResult::Passed => panic!("expected a falsification"),
        }
    }

    #[rstest]
    fn for_all_with_zero_budget_passes() {
        let prop = Prop::for_all(&Gen::unit(1), |_| false);
        assert_eq!(prop.run(0, SimpleRng::new(0)), CheckResult::Passed);
    }

    #[rstest]
    fn evaluation_is_deterministic() {
        let prop = Prop::for_all(&Gen::choose(0, 100), |&n| n < 90);
        let rng = SimpleRng::new(8);
        assert_eq!(prop.run(200, rng), prop.run(200, rng));
    }

    #[rstest]
    fn and_short_circuits_on_first_falsification() {
        let first = always_fail("left");
        let second = Prop::new(|_, _| panic!("must not be evaluated"));
        match first.and(second).run(10, SimpleRng::new(0)) {
            CheckResult::Falsified { failure, .. } => assert_eq!(failure, "left"),
            CheckResult::Passed => panic!("expected a falsification"),
        }
    }

    #[rstest]
    fn and_runs_second_with_the_same_inputs() {
        let prop = always_pass().and(Prop::for_all(&Gen::choose(0, 10), |&n| n < 10));
        assert_eq!(prop.run(100, SimpleRng::new(5)), CheckResult::Passed);
    }

    #[rstest]
    fn or_short_circuits_on_first_pass() {
        let second = Prop::new(|_, _| panic!("must not be evaluated"));
        let prop = always_pass().or(second);
        assert_eq!(prop.run(10, SimpleRng::new(0)), CheckResult::Passed);
    }

    #[rstest]
    fn or_recovers_when_second_passes() {
        let prop = always_fail("left").or(always_pass());
        assert_eq!(prop.run(10, SimpleRng::new(0)), CheckResult::Passed);
    }

    #[rstest]
    fn or_tags_second_failure_with_first_description() {
        let second = Prop::new(|_, _| CheckResult::Falsified {
            failure: "right".to_owned(),
            successes: 4,
        });
        match always_fail("left").or(second).run(10, SimpleRng::new(0)) {
            CheckResult::Falsified { failure, successes } => {
                assert_eq!(failure, "left: right");
                assert_eq!(successes, 4);
            }
            CheckResult::Passed => panic!("expected a falsification"),
        }
    }

    #[rstest]
    fn tag_prefixes_falsifications_only() {
        let tagged_pass = always_pass().tag("context");
        assert_eq!(tagged_pass.run(10, SimpleRng::new(0)), CheckResult::Passed);

        match always_fail("boom").tag("context").run(10, SimpleRng::new(0)) {
            CheckResult::Falsified { failure, .. } => assert_eq!(failure, "context: boom"),
            CheckResult::Passed => panic!("expected a falsification"),
        }
    }

    #[rstest]
    fn is_falsified_distinguishes_outcomes() {
        assert!(!CheckResult::Passed.is_falsified());
        assert!(
            CheckResult::Falsified {
                failure: String::new(),
                successes: 0
            }
            .is_falsified()
        );
    }
}
