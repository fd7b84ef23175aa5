//! Edit distance between phoneme sequences.
//!
//! The distance is the classic Levenshtein metric computed with the
//! Wagner–Fischer dynamic program, applied to whole phonemes instead of
//! characters: inserting, deleting or substituting one phoneme each cost 1.

use smallvec::SmallVec;

/// The number of phoneme edits separating two sequences.
pub type Distance = usize;

/// Row length kept inline before spilling to the heap.
///
/// Pronunciations in the CMU dictionary are well under this many phonemes.
const INLINE_ROW: usize = 32;

/// Compute the Levenshtein distance between two phoneme sequences.
///
/// Returns the minimum number of single-element insertions, deletions and
/// substitutions required to transform `source` into `target`. Elements are
/// compared only for equality, so any `Eq` symbol works, though the rhymer
/// passes slices of [`Phoneme`](crate::Phoneme). Equality must be reflexive
/// for `d(a, a) == 0` to hold; map floats to their bit patterns first.
///
/// Runs in `O(m·n)` time and `O(min(m, n))` space. Callers comparing very long
/// sequences should bound their length; the function itself never fails.
///
/// # Example
///
/// ```rust
/// use extended_rhymer::{levenshtein_distance, parse_pronunciation};
///
/// let cat = parse_pronunciation("K AE1 T").unwrap();
/// let hat = parse_pronunciation("HH AE1 T").unwrap();
/// let cast = parse_pronunciation("K AE1 S T").unwrap();
///
/// assert_eq!(levenshtein_distance(&cat, &hat), 1);
/// assert_eq!(levenshtein_distance(&cat, &cast), 1);
/// assert_eq!(levenshtein_distance(&cat, &cat), 0);
/// ```
pub fn levenshtein_distance<T: Eq>(source: &[T], target: &[T]) -> Distance {
    // The metric is symmetric, so iterate over the longer input and keep rows
    // the length of the shorter one.
    let (outer, inner) = if source.len() >= target.len() {
        (source, target)
    } else {
        (target, source)
    };

    let distance = wagner_fischer(outer, inner);

    tracing::trace!(
        source_len = source.len(),
        target_len = target.len(),
        distance,
        "computed phoneme edit distance"
    );

    distance
}

fn wagner_fischer<T: Eq>(outer: &[T], inner: &[T]) -> Distance {
    let m = outer.len();
    let n = inner.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // dp[0][j] = j
    let mut prev_row: SmallVec<[Distance; INLINE_ROW]> = (0..=n).collect();
    let mut curr_row: SmallVec<[Distance; INLINE_ROW]> = SmallVec::from_elem(0, n + 1);

    for (i, outer_item) in outer.iter().enumerate() {
        // dp[i][0] = i
        curr_row[0] = i + 1;

        for (j, inner_item) in inner.iter().enumerate() {
            curr_row[j + 1] = if outer_item == inner_item {
                prev_row[j]
            } else {
                1 + prev_row[j + 1] // deletion
                    .min(curr_row[j]) // insertion
                    .min(prev_row[j]) // substitution
            };
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}
