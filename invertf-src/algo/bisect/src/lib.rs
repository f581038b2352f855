use std::ops::{Add, Div, Sub};

pub trait SearchInt: Clone + Ord {
    fn const_0() -> Self;
    fn const_1() -> Self;
    fn const_2() -> Self;
}

macro_rules! impl_int {
    ( $($ty:ty)* ) => { $(
        impl SearchInt for $ty {
            fn const_0() -> $ty { 0 }
            fn const_1() -> $ty { 1 }
            fn const_2() -> $ty { 2 }
        }
    )* }
}

impl_int! { i8 i16 i32 i64 i128 isize }

#[cfg(feature = "bigint")]
impl SearchInt for num_bigint::BigInt {
    fn const_0() -> Self { Self::from(0) }
    fn const_1() -> Self { Self::from(1) }
    fn const_2() -> Self { Self::from(2) }
}

/// Last point of the half-open `range` at which `pred` holds, assuming
/// `pred` is true at the start of the range and monotonically turns false.
///
/// ```
/// # use bisect::bisect;
/// assert_eq!(bisect((0_i64, 200), |&x| x * x <= 200), 14);
/// ```
pub fn bisect<I, P>(range: (I, I), mut pred: P) -> I
where
    I: SearchInt,
    for<'a> &'a I: Add<&'a I, Output = I>
        + Sub<&'a I, Output = I>
        + Div<&'a I, Output = I>,
    P: FnMut(&I) -> bool,
{
    let (mut left, mut right) = range;
    while &right - &left > I::const_1() {
        let middle = &left + &(&(&right - &left) / &I::const_2());
        if pred(&middle) { left = middle } else { right = middle }
    }
    left
}

/// Widens a half-open interval by one unit on each side, so crossings
/// exactly at the original endpoints are still found.
pub fn extend<I>(range: (I, I)) -> (I, I)
where
    I: SearchInt,
    for<'a> &'a I: Add<&'a I, Output = I> + Sub<&'a I, Output = I>,
{
    let one = I::const_1();
    (&range.0 - &one, &range.1 + &one)
}

#[test]
fn sanity_check() {
    assert_eq!(bisect((0_i64, 200), |&x| x < 100), 99);
    assert_eq!(bisect((0_i64, 200), |&x| x * x <= 200), 14);
    assert_eq!(bisect((-1_i64, 10), |&x| x < 0), -1);
    assert_eq!(extend((0_i64, 10)), (-1, 11));
}

#[cfg(feature = "bigint")]
#[test]
fn bigint_boundary() {
    use num_bigint::BigInt;

    // isqrt(10^40) = 10^20
    let value: BigInt =
        "10000000000000000000000000000000000000000".parse().unwrap();
    let hi: BigInt = "1000000000000000000000".parse().unwrap();
    let expected: BigInt = "100000000000000000000".parse().unwrap();
    assert_eq!(bisect((BigInt::from(0), hi), |x| x * x <= value), expected);
}

#[test]
fn randomized_boundary() {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::from_seed([0; 32]);
    for _ in 0..1000 {
        let n = rng.gen_range(1..50_i64);
        let mut a: Vec<i64> =
            (0..n).map(|_| rng.gen_range(-100..100)).collect();
        a.sort_unstable();
        let value = rng.gen_range(-120..120);

        let g = |m: i64| {
            if m < 0 {
                i64::MIN
            } else if m >= n {
                i64::MAX
            } else {
                a[m as usize]
            }
        };
        let m = bisect((-1, n), |&m| g(m) <= value);

        assert!(g(m) <= value);
        assert!(g(m + 1) > value);
    }
}
