//! Associative-combination algebra: the [`Monoid`] contract, the balanced
//! [`fold_map`] reducer, and the [`word_count`] example instance.
//!
//! This subsystem is independent of the generator/property layers: it is a
//! pure contract (associativity plus identity) and a divide-and-conquer fold
//! whose correctness — and safe parallelizability — rests entirely on that
//! contract holding.

pub mod fold;
pub mod monoid;
pub mod wordcount;

#[cfg(feature = "rayon")]
pub use fold::par_fold_map;
pub use fold::fold_map;
pub use monoid::{Monoid, Sum};
pub use wordcount::{WordCount, word_count};
