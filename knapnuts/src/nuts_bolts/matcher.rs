use std::cmp::Ordering;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::nuts_bolts::partition;
use crate::util::assertions;
use crate::{Error, Result, Violation};

/// Reorders `nuts` and `bolts` in place so that `nuts[i]` fits `bolts[i]` for every `i`.
///
/// Nuts can only be compared to bolts: `cmp(nut, bolt)` tells whether the nut is smaller than,
/// larger than or fits the bolt. Two nuts (or two bolts) are never compared to each other.
/// Both sequences end up sorted in the same order.
///
/// Randomized quicksort-like divide and conquer: the bolts are shuffled first, then every range is
/// split by partitioning the nuts around one of its bolts and the bolts around the nut that fits it.
/// Expected O(n log n) comparisons, O(n²) in the worst case.
/// Ranges are kept on an explicit work list, smallest range first, so no recursion is involved.
///
/// # Errors
/// * [`Error::InvalidInput`] if the sequences differ in length. Neither sequence is touched.
/// * [`Error::MatchingViolation`] if the nuts and bolts do not form a one-to-one correspondence.
///   The order of both sequences is unspecified afterwards.
pub fn match_nuts_bolts<N, B, F, R>(
    nuts: &mut [N],
    bolts: &mut [B],
    cmp: F,
    rng: &mut R,
) -> Result<()>
where
    F: Fn(&N, &B) -> Ordering,
    R: Rng + ?Sized,
{
    if nuts.len() != bolts.len() {
        return Err(Error::InvalidInput(format!(
            "{} nuts cannot be matched with {} bolts",
            nuts.len(),
            bolts.len()
        )));
    }

    //avoid the quadratic worst case on (adversarially) ordered input
    bolts.shuffle(rng);

    let mut pending = vec![(0, nuts.len())];
    let mut n_partitions = 0;
    while let Some((start, end)) = pending.pop() {
        match end - start {
            0 => continue,
            1 => {
                if cmp(&nuts[start], &bolts[start]).is_ne() {
                    return Err(Violation::PivotMismatch {
                        nut: start,
                        bolt: start,
                    }
                    .into());
                }
                continue;
            }
            _ => {}
        }

        let mid = start + (end - start - 1) / 2;
        let n = {
            let pivot = &bolts[mid];
            start + partition(&mut nuts[start..end], start, |nut| cmp(nut, pivot))?
        };
        let b = {
            let pivot = &nuts[n];
            start + partition(&mut bolts[start..end], start, |bolt| cmp(pivot, bolt).reverse())?
        };
        n_partitions += 2;

        if n != b {
            return Err(Violation::PivotMismatch { nut: n, bolt: b }.into());
        }

        let (left, right) = ((start, n), (n + 1, end));
        if left.1 - left.0 < right.1 - right.0 {
            pending.extend([right, left]);
        } else {
            pending.extend([left, right]);
        }
    }

    debug!("[NB] matched {} pairs in {} partitions", nuts.len(), n_partitions);
    debug_assert!(assertions::is_matched(nuts, bolts, &cmp));

    Ok(())
}

/// [`match_nuts_bolts`] for nuts and bolts of the same type, fitting when they are equal.
pub fn match_nuts_bolts_ord<T, R>(nuts: &mut [T], bolts: &mut [T], rng: &mut R) -> Result<()>
where
    T: Ord,
    R: Rng + ?Sized,
{
    match_nuts_bolts(nuts, bolts, T::cmp, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[derive(Debug)]
    struct Nut(u32);

    #[derive(Debug)]
    struct Bolt(u32);

    fn fits(nut: &Nut, bolt: &Bolt) -> Ordering {
        nut.0.cmp(&bolt.0)
    }

    #[test]
    fn distinct_types() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut nuts = [4, 0, 3, 1, 2].map(Nut);
        let mut bolts = [2, 3, 0, 4, 1].map(Bolt);
        match_nuts_bolts(&mut nuts, &mut bolts, fits, &mut rng).unwrap();
        assert!(nuts.iter().zip(&bolts).all(|(n, b)| n.0 == b.0));
        assert!(nuts.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn empty_and_single() {
        let mut rng = SmallRng::seed_from_u64(0);
        match_nuts_bolts_ord::<u8, _>(&mut [], &mut [], &mut rng).unwrap();

        let (mut nuts, mut bolts) = ([7], [7]);
        match_nuts_bolts_ord(&mut nuts, &mut bolts, &mut rng).unwrap();
        assert_eq!(nuts, bolts);
    }

    #[test]
    fn single_mismatch() {
        let mut rng = SmallRng::seed_from_u64(0);
        let err = match_nuts_bolts_ord(&mut [1], &mut [2], &mut rng).unwrap_err();
        assert!(matches!(err, Error::MatchingViolation(_)));
    }

    #[test]
    fn length_mismatch_leaves_input_untouched() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut nuts = vec![0, 1, 2];
        let mut bolts = vec![2, 1];
        let err = match_nuts_bolts_ord(&mut nuts, &mut bolts, &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(bolts, vec![2, 1]);
    }

    #[test]
    fn unmatched_tail_is_detected() {
        // 0 pairs up, 5 and 7 have no partner
        for seed in 0..16 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let err = match_nuts_bolts_ord(&mut [0, 5], &mut [7, 0], &mut rng).unwrap_err();
            assert!(matches!(err, Error::MatchingViolation(_)));
        }
    }
}
