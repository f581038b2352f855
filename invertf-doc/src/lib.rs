//! Inversion of monotone two-argument integer functions.
//!
//! Given `f(x, y)` non-decreasing in each argument over the non-negative
//! quadrant and a target `V`, [`algo::invert`] enumerates every pair with
//! `f(x, y) = V` in `O(sqrt(V) log V)`-ish evaluations instead of the
//! `O(V^2)` of the brute-force scan kept in [`naive`].
//!
//! ```
//! let mut result = algo::invert(|x: &i64, y: &i64| x * x + y * y, &25);
//! result.sort_unstable();
//! assert_eq!(result, [(0, 5), (3, 4), (4, 3), (5, 0)]);
//! ```

#[doc(inline)]
pub use {algo, naive};
