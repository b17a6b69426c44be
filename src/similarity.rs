//! Sequence-similarity ratio primitive
//!
//! Longest-matching-blocks ratio: `2.0 * M / T` where M is the total length
//! of matching blocks and T the combined length of both sequences. Kept as
//! its own module with its own tests, since the exact block selection decides
//! which evidence layer clears its threshold first.

/// Similarity ratio between two strings, in [0.0, 1.0].
///
/// Comparison is at char level. Two empty strings are identical (1.0); one
/// empty side shares nothing (0.0).
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_total(&a, &b) as f64 / total as f64
}

/// Total length of matching blocks: take the longest common block, then
/// recurse into the unmatched regions on either side of it.
fn matching_total(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut regions = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = regions.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size > 0 {
            total += size;
            regions.push((alo, i, blo, j));
            regions.push((i + size, ahi, j + size, bhi));
        }
    }
    total
}

/// Longest run of equal chars within `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns (start in a, start in b, length). Ties resolve to the earliest
/// start in a, then the earliest start in b.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best_i = alo;
    let mut best_j = blo;
    let mut best_size = 0;

    // Two-row DP: run length of the match ending at (i, j)
    let width = bhi - blo;
    let mut prev = vec![0usize; width];
    let mut curr = vec![0usize; width];

    for i in alo..ahi {
        for j in blo..bhi {
            if a[i] == b[j] {
                let k = if j > blo { prev[j - blo - 1] + 1 } else { 1 };
                curr[j - blo] = k;
                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            } else {
                curr[j - blo] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    (best_i, best_j, best_size)
}
