//! Longest strictly increasing subsequence.

use log::debug;

use crate::cs::error::{Error, Result};

/// Returns the length of the Longest Increasing Subsequence (LIS) in `numbers`.
///
/// Patience sorting: `tails[k]` is the smallest value that can end an
/// increasing subsequence of length `k + 1`. Empty input has length 0.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::longest_increasing_subsequence::longest_increasing_subsequence_length;
///
/// let arr = vec![10, 9, 2, 5, 3, 7, 101, 18];
/// assert_eq!(longest_increasing_subsequence_length(&arr), 4);
/// ```
///
/// # Complexity
/// * Time: O(n log n)
/// * Space: O(n)
pub fn longest_increasing_subsequence_length<T: Ord>(numbers: &[T]) -> usize {
    let mut tails: Vec<&T> = Vec::with_capacity(numbers.len());

    for num in numbers {
        // An equal element replaces its twin, so runs of duplicates never
        // lengthen the subsequence.
        let pos = match tails.binary_search(&num) {
            Ok(pos) | Err(pos) => pos,
        };
        if pos == tails.len() {
            tails.push(num);
        } else {
            tails[pos] = num;
        }
    }
    tails.len()
}

/// Returns one Longest Increasing Subsequence (LIS) of `numbers`.
///
/// When several subsequences share the maximum length the choice is
/// deterministic:
///
/// * each element extends the first earlier, smaller element whose own
///   subsequence is strictly longer than any seen before it;
/// * the subsequence returned is the one ending at the first index that
///   reaches the maximum length.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `numbers` is empty.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::longest_increasing_subsequence::longest_increasing_subsequence;
///
/// let arr = vec![10, 9, 2, 5, 3, 7, 101, 18];
/// assert_eq!(longest_increasing_subsequence(&arr), Ok(vec![2, 5, 7, 101]));
/// ```
///
/// # Complexity
/// * Time: O(n^2)
/// * Space: O(n)
pub fn longest_increasing_subsequence<T: Ord + Clone>(numbers: &[T]) -> Result<Vec<T>> {
    let indices = longest_increasing_subsequence_indices(numbers)?;
    Ok(indices.into_iter().map(|i| numbers[i].clone()).collect())
}

/// Same selection as [`longest_increasing_subsequence`], reported as
/// ascending positions into `numbers`.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::longest_increasing_subsequence::longest_increasing_subsequence_indices;
///
/// assert_eq!(longest_increasing_subsequence_indices(&[3, 1, 2, 1, 8, 6, 7]), Ok(vec![1, 2, 5, 6]));
/// ```
pub fn longest_increasing_subsequence_indices<T: Ord>(numbers: &[T]) -> Result<Vec<usize>> {
    if numbers.is_empty() {
        return Err(Error::invalid_argument(
            "longest increasing subsequence of an empty sequence",
        ));
    }

    let n = numbers.len();
    // lengths[i]: length of the chosen subsequence ending at i
    // prev[i]: index preceding i in that subsequence
    let mut lengths = vec![1_usize; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];

    for i in 1..n {
        let mut extends = 0;
        for j in 0..i {
            if numbers[j] < numbers[i] && lengths[j] > extends {
                extends = lengths[j];
                prev[i] = Some(j);
            }
        }
        lengths[i] = extends + 1;
    }

    let mut end = 0;
    for i in 1..n {
        if lengths[i] > lengths[end] {
            end = i;
        }
    }

    let mut indices = Vec::with_capacity(lengths[end]);
    let mut current = Some(end);
    while let Some(i) = current {
        indices.push(i);
        current = prev[i];
    }
    indices.reverse();

    debug!(
        "lis: {} of {} elements, ending at index {}",
        indices.len(),
        n,
        end
    );
    Ok(indices)
}
