//! Balanced, divide-and-conquer monoidal folding.
//!
//! [`fold_map`] maps every element of a slice into a [`Monoid`] and combines
//! the results pairwise in a tree shape rather than strictly left-to-right.
//! For any lawful monoid the balanced and sequential folds are equal — that
//! equality is exactly what the associativity law buys, and it is also what
//! makes the two halves of the recursion independent: nothing below the
//! final `combine` shares data, so a parallel evaluation only synchronizes
//! once per node.
//!
//! # Examples
//!
//! ```rust
//! use quickprop::fold_map;
//!
//! let words = ["lorem", "ipsum", "dolor", "sit"];
//! let joined: String = fold_map(&words, |w| (*w).to_owned());
//! assert_eq!(joined, "loremipsumdolorsit");
//! ```

use super::monoid::Monoid;

/// Maps each element into a monoid and reduces with a balanced fold.
///
/// The slice is split at the midpoint (the left half takes the floor-half
/// count), each half is folded recursively, and the two results are
/// combined. An empty slice yields `M::empty()` without calling `function`;
/// a single element yields `function(&items[0])` without recursing.
///
/// Operating on slice halves keeps the recursion allocation-free: no
/// sub-list is ever copied.
///
/// # Examples
///
/// ```rust
/// use quickprop::{Sum, fold_map};
///
/// let total: Sum<i64> = fold_map(&[1i64, 2, 3, 4, 5], |&n| Sum(n));
/// assert_eq!(total, Sum(15));
/// ```
pub fn fold_map<A, M, F>(items: &[A], function: F) -> M
where
    M: Monoid,
    F: Fn(&A) -> M,
{
    balanced(items, &function)
}

fn balanced<A, M, F>(items: &[A], function: &F) -> M
where
    M: Monoid,
    F: Fn(&A) -> M,
{
    match items {
        [] => M::empty(),
        [sole] => function(sole),
        _ => {
            let (left, right) = items.split_at(items.len() / 2);
            balanced(left, function).combine(balanced(right, function))
        }
    }
}

/// Below this length the parallel fold falls back to the sequential one;
/// spawning is not worth it for a handful of elements.
#[cfg(feature = "rayon")]
const PARALLEL_CUTOFF: usize = 1024;

/// Parallel [`fold_map`]: the two halves of each split are evaluated
/// concurrently via [`rayon::join`], synchronizing only at the final
/// `combine` per node.
///
/// Equality with the sequential fold depends entirely on the monoid's
/// associativity law holding; there is no run-time check, so a law-breaking
/// instance yields nondeterministic results here.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "rayon")] {
/// use quickprop::{Sum, fold_map, par_fold_map};
///
/// let numbers: Vec<i64> = (0..10_000).collect();
/// let parallel: Sum<i64> = par_fold_map(&numbers, |&n| Sum(n));
/// let sequential: Sum<i64> = fold_map(&numbers, |&n| Sum(n));
/// assert_eq!(parallel, sequential);
/// # }
/// ```
#[cfg(feature = "rayon")]
pub fn par_fold_map<A, M, F>(items: &[A], function: F) -> M
where
    A: Sync,
    M: Monoid + Send,
    F: Fn(&A) -> M + Sync,
{
    par_balanced(items, &function)
}

#[cfg(feature = "rayon")]
fn par_balanced<A, M, F>(items: &[A], function: &F) -> M
where
    A: Sync,
    M: Monoid + Send,
    F: Fn(&A) -> M + Sync,
{
    if items.len() < PARALLEL_CUTOFF {
        return balanced(items, function);
    }
    let (left, right) = items.split_at(items.len() / 2);
    let (left_result, right_result) = rayon::join(
        || par_balanced(left, function),
        || par_balanced(right, function),
    );
    left_result.combine(right_result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::monoid::Sum;
    use rstest::rstest;

    #[rstest]
    fn folds_even_length_lists() {
        let words = ["lorem", "ipsum", "dolor", "sit"];
        let joined: String = fold_map(&words, |w| (*w).to_owned());
        assert_eq!(joined, "loremipsumdolorsit");
    }

    #[rstest]
    fn folds_odd_length_lists() {
        let words = ["lorem", "ipsum", "dolor"];
        let joined: String = fold_map(&words, |w| (*w).to_owned());
        assert_eq!(joined, "loremipsumdolor");
    }

    #[rstest]
    fn single_element_is_mapped_without_recursing() {
        let joined: String = fold_map(&["lorem"], |w| (*w).to_owned());
        assert_eq!(joined, "lorem");
    }

    #[rstest]
    fn empty_slice_never_calls_the_mapper() {
        let empty: [&str; 0] = [];
        let joined: String = fold_map(&empty, |_| panic!("mapper must not run"));
        assert_eq!(joined, "");
    }

    #[rstest]
    fn balanced_fold_matches_sequential_fold() {
        let numbers: Vec<i64> = (0..257).collect();
        let balanced: Sum<i64> = fold_map(&numbers, |&n| Sum(n));
        let sequential = Sum::combine_all(numbers.iter().map(|&n| Sum(n)));
        assert_eq!(balanced, sequential);
    }

    #[rstest]
    fn mapper_is_applied_to_every_element() {
        let lengths: Sum<usize> = fold_map(&["a", "bb", "ccc"], |w| Sum(w.len()));
        assert_eq!(lengths, Sum(6));
    }

    #[cfg(feature = "rayon")]
    #[rstest]
    fn parallel_fold_matches_sequential_fold() {
        let numbers: Vec<i64> = (0..50_000).collect();
        let parallel: Sum<i64> = par_fold_map(&numbers, |&n| Sum(n));
        let sequential: Sum<i64> = fold_map(&numbers, |&n| Sum(n));
        assert_eq!(parallel, sequential);
    }
}
