use std::cmp::Ordering;

use crate::Violation;

/// Partitions `seq` in place around a pivot which is only known through `probe`.
///
/// `probe(x)` reports how `x` compares to the pivot. Exactly one element of `seq` has to compare
/// `Equal`; on success it ends up at the returned index, with every `Less` element before it and
/// every `Greater` element after it.
///
/// `offset` is the position of `seq` within the full sequence and only serves to report absolute
/// indices in the returned [`Violation`].
///
/// # Errors
/// [`Violation::MissingPivot`] if no element matches the pivot,
/// [`Violation::DuplicatePivot`] if more than one does. `seq` is left unmodified in both cases.
pub fn partition<T, F>(seq: &mut [T], offset: usize, probe: F) -> Result<usize, Violation>
where
    F: Fn(&T) -> Ordering,
{
    let mut found = None;
    for (i, x) in seq.iter().enumerate() {
        if probe(x).is_eq() {
            if let Some(first) = found {
                return Err(Violation::DuplicatePivot {
                    first: offset + first,
                    second: offset + i,
                });
            }
            found = Some(i);
        }
    }
    let Some(pivot) = found else {
        return Err(Violation::MissingPivot {
            start: offset,
            end: offset + seq.len(),
        });
    };

    //park the pivot in front, out of the way of the two pointers
    seq.swap(0, pivot);

    //invariant: seq[1..lo] < pivot and seq[hi..] > pivot
    let (mut lo, mut hi) = (1, seq.len());
    loop {
        while lo < hi && probe(&seq[lo]).is_lt() {
            lo += 1;
        }
        while lo < hi && probe(&seq[hi - 1]).is_gt() {
            hi -= 1;
        }
        if lo >= hi {
            break;
        }
        //seq[lo] > pivot and seq[hi - 1] < pivot, they cannot be the same element
        seq.swap(lo, hi - 1);
        lo += 1;
        hi -= 1;
    }

    let index = lo - 1;
    seq.swap(0, index);
    Ok(index)
}
