
//! Various utility functions.

pub mod point;

/// Returns a count of the number of elements at the end of this
/// (double-ended) iterator which satisfy the predicate.
pub fn count_suffix<I, F>(iter: I, mut predicate: F) -> usize
where F: FnMut(I::Item) -> bool,
      I: Iterator + DoubleEndedIterator {
  let mut count = 0;
  for item in iter.rev() {
    if predicate(item) {
      count += 1;
    } else {
      break;
    }
  }
  count
}
