//! Word counting as a monoid: associative merging of partial parse state.
//!
//! Counting words looks inherently sequential, but the partial state of a
//! scan — "some complete words, plus unfinished fragments at each edge" —
//! merges associatively. That makes the count a [`fold_map`] over
//! characters, and therefore splittable at any point: two halves of a text
//! can be counted independently and their [`WordCount`] states combined.
//!
//! # Examples
//!
//! ```rust
//! use quickprop::word_count;
//!
//! assert_eq!(word_count("lorem ipsum dolor"), 3);
//! assert_eq!(word_count("   "), 0);
//! ```

use super::fold::fold_map;
use super::monoid::Monoid;

/// Partial word-count state for a scanned region of text.
///
/// Invariants: fragment strings never contain whitespace, and the internal
/// count is the number of complete words strictly between the two edge
/// fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordCount {
    /// A run of non-whitespace characters with no confirmed word boundary
    /// seen yet.
    Stub(String),
    /// A region with confirmed complete words between two edge fragments.
    Part {
        /// Unfinished fragment bordering the left edge of the region.
        left: String,
        /// Number of complete words strictly between the fragments.
        words: usize,
        /// Unfinished fragment bordering the right edge of the region.
        right: String,
    },
}

impl Monoid for WordCount {
    fn empty() -> Self {
        Self::Stub(String::new())
    }

    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Stub(a), Self::Stub(b)) => Self::Stub(a.combine(b)),
            (Self::Stub(a), Self::Part { left, words, right }) => Self::Part {
                left: a.combine(left),
                words,
                right,
            },
            (Self::Part { left, words, right }, Self::Stub(b)) => Self::Part {
                left,
                words,
                right: right.combine(b),
            },
            (
                Self::Part {
                    left,
                    words: left_words,
                    right: inner_right,
                },
                Self::Part {
                    left: inner_left,
                    words: right_words,
                    right,
                },
            ) => {
                // The two inner fragments meet; together they form one more
                // word unless both are empty.
                let joined = usize::from(!inner_right.is_empty() || !inner_left.is_empty());
                Self::Part {
                    left,
                    words: left_words + right_words + joined,
                    right,
                }
            }
        }
    }
}

/// Maps one character into its word-count state: whitespace becomes an empty
/// boundary, anything else a one-character fragment.
fn classify(character: char) -> WordCount {
    if character.is_whitespace() {
        WordCount::Part {
            left: String::new(),
            words: 0,
            right: String::new(),
        }
    } else {
        WordCount::Stub(character.to_string())
    }
}

/// Counts one for a fragment that turned out to be a whole word.
fn unstub(fragment: &str) -> usize {
    usize::from(!fragment.is_empty())
}

/// Counts the words in `text` by balanced monoidal folding.
///
/// Every character is classified through the [`WordCount`] monoid and folded
/// with [`fold_map`]; the total is the internal word count plus one per
/// non-empty edge fragment.
///
/// # Examples
///
/// ```rust
/// use quickprop::word_count;
///
/// assert_eq!(word_count("lorem ipsum dolor"), 3);
/// assert_eq!(word_count("lorem"), 1);
/// assert_eq!(word_count(""), 0);
/// ```
#[must_use]
pub fn word_count(text: &str) -> usize {
    let characters: Vec<char> = text.chars().collect();
    match fold_map(&characters, |&c| classify(c)) {
        WordCount::Stub(fragment) => unstub(&fragment),
        WordCount::Part { left, words, right } => unstub(&left) + words + unstub(&right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn part(left: &str, words: usize, right: &str) -> WordCount {
        WordCount::Part {
            left: left.to_owned(),
            words,
            right: right.to_owned(),
        }
    }

    fn stub(chars: &str) -> WordCount {
        WordCount::Stub(chars.to_owned())
    }

    // =========================================================================
    // Combine Table Tests
    // =========================================================================

    #[rstest]
    fn stub_with_stub_concatenates() {
        assert_eq!(stub("lo").combine(stub("rem")), stub("lorem"));
    }

    #[rstest]
    fn stub_with_part_extends_left_fragment() {
        assert_eq!(
            stub("lo").combine(part("rem", 2, "do")),
            part("lorem", 2, "do")
        );
    }

    #[rstest]
    fn part_with_stub_extends_right_fragment() {
        assert_eq!(
            part("lo", 2, "do").combine(stub("lor")),
            part("lo", 2, "dolor")
        );
    }

    #[rstest]
    fn part_with_part_joins_inner_fragments_into_a_word() {
        assert_eq!(
            part("lo", 1, "ip").combine(part("sum", 2, "do")),
            part("lo", 4, "do")
        );
    }

    #[rstest]
    fn part_with_part_empty_inner_fragments_add_no_word() {
        assert_eq!(
            part("lo", 1, "").combine(part("", 2, "do")),
            part("lo", 3, "do")
        );
    }

    #[rstest]
    fn part_with_part_one_sided_inner_fragment_still_counts() {
        assert_eq!(
            part("", 0, "ip").combine(part("", 1, "")),
            part("", 2, "")
        );
        assert_eq!(
            part("", 1, "").combine(part("sum", 0, "")),
            part("", 2, "")
        );
    }

    #[rstest]
    fn identity_is_the_empty_stub() {
        let value = part("lo", 3, "do");
        assert_eq!(WordCount::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(WordCount::empty()), value);
    }

    // =========================================================================
    // Classification Tests
    // =========================================================================

    #[rstest]
    fn whitespace_classifies_as_empty_boundary() {
        assert_eq!(classify(' '), part("", 0, ""));
        assert_eq!(classify('\t'), part("", 0, ""));
        assert_eq!(classify('\n'), part("", 0, ""));
    }

    #[rstest]
    fn other_characters_classify_as_one_char_stubs() {
        assert_eq!(classify('x'), stub("x"));
        assert_eq!(classify(','), stub(","));
    }

    // =========================================================================
    // word_count Tests
    // =========================================================================

    #[rstest]
    #[case("lorem ipsum dolor", 3)]
    #[case("", 0)]
    #[case("   ", 0)]
    #[case("lorem", 1)]
    #[case(" lorem ", 1)]
    #[case("lorem  ipsum", 2)]
    #[case("lorem ipsum dolor sit amet", 5)]
    fn word_count_scenarios(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(word_count(text), expected);
    }
}
