//! Various utility functions.

/// Combines two arrays of the same length pointwise.
pub fn zip_with<const C: usize, T, S, U, F>(left: [T; C], right: [S; C], mut f: F) -> [U; C]
where T: Copy,
      S: Copy,
      F: FnMut(T, S) -> U {
  std::array::from_fn(|index| f(left[index], right[index]))
}
