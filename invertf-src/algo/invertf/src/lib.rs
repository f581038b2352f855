use std::ops::{Add, Div, Sub};

use bisect::{bisect, extend, SearchInt};

pub type Point<I> = (I, I);

/// Wraps a two-argument callable and counts how often it is evaluated.
///
/// Apply it outside [`invert`], which guards negative coordinates before
/// they reach the wrapped callable, so the count reflects only genuine
/// evaluations of the underlying function.
pub struct Counted<F> {
    f: F,
    count: u64,
}

impl<F> Counted<F> {
    pub fn new(f: F) -> Self { Self { f, count: 0 } }

    pub fn count(&self) -> u64 { self.count }

    pub fn call<I>(&mut self, x: &I, y: &I) -> I
    where
        F: FnMut(&I, &I) -> I,
    {
        self.count += 1;
        (self.f)(x, y)
    }
}

fn find_in_rectangle<I, F>(
    f: &mut F,
    x_range: (I, I),
    y_range: (I, I),
    value: &I,
    result: &mut Vec<Point<I>>,
) where
    I: SearchInt,
    for<'a> &'a I: Add<&'a I, Output = I>
        + Sub<&'a I, Output = I>
        + Div<&'a I, Output = I>,
    F: FnMut(&I, &I) -> I,
{
    let x_size = &x_range.1 - &x_range.0;
    let y_size = &y_range.1 - &y_range.0;
    if x_size <= I::const_0() || y_size <= I::const_0() {
        return;
    }

    let one = I::const_1();
    if x_size >= y_size {
        let y_split = &(&y_range.0 + &y_range.1) / &I::const_2();
        let x_split =
            bisect(extend(x_range.clone()), |x| f(x, &y_split) <= *value);
        if f(&x_split, &y_split) == *value {
            result.push((x_split.clone(), y_split.clone()));
            find_in_rectangle(
                f,
                (x_range.0.clone(), x_split.clone()),
                (&y_split + &one, y_range.1.clone()),
                value,
                result,
            );
        } else {
            // x_split itself did not hit, so it still has to be checked
            // against the smaller y half; hence the one-column-wider range.
            find_in_rectangle(
                f,
                (x_range.0.clone(), &x_split + &one),
                (&y_split + &one, y_range.1.clone()),
                value,
                result,
            );
        }
        find_in_rectangle(
            f,
            (&x_split + &one, x_range.1),
            (y_range.0, y_split),
            value,
            result,
        );
    } else {
        let x_split = &(&x_range.0 + &x_range.1) / &I::const_2();
        let y_split =
            bisect(extend(y_range.clone()), |y| f(&x_split, y) <= *value);
        if f(&x_split, &y_split) == *value {
            result.push((x_split.clone(), y_split.clone()));
            find_in_rectangle(
                f,
                (&x_split + &one, x_range.1.clone()),
                (y_range.0.clone(), y_split.clone()),
                value,
                result,
            );
        } else {
            find_in_rectangle(
                f,
                (&x_split + &one, x_range.1.clone()),
                (y_range.0.clone(), &y_split + &one),
                value,
                result,
            );
        }
        find_in_rectangle(
            f,
            (x_range.0, x_split),
            (&y_split + &one, y_range.1),
            value,
            result,
        );
    }
}

/// All `(x, y)` with `f(x, y) == value` over the non-negative quadrant,
/// in unspecified order, for `f` non-decreasing in each argument and
/// `value >= 0`. Both preconditions are caller obligations; neither is
/// checked.
///
/// ```
/// # use invertf::invert;
/// let mut result = invert(|x: &i64, y: &i64| 3 * x + 5 * y, &15);
/// result.sort_unstable();
/// assert_eq!(result, [(0, 3), (5, 0)]);
/// ```
pub fn invert<I, F>(mut f: F, value: &I) -> Vec<Point<I>>
where
    I: SearchInt,
    for<'a> &'a I: Add<&'a I, Output = I>
        + Sub<&'a I, Output = I>
        + Div<&'a I, Output = I>,
    F: FnMut(&I, &I) -> I,
{
    let zero = I::const_0();
    let one = I::const_1();
    let below = &zero - &one;

    // The extended search ranges transiently probe coordinate -1, where f
    // is undefined; answer with a value below any valid target instead.
    let mut g = |x: &I, y: &I| -> I {
        if x < &zero || y < &zero { below.clone() } else { f(x, y) }
    };

    // f(x, 0) <= f(x, y) for all y >= 0, so the y = 0 slice bounds x
    // globally; symmetrically for y.
    let x_max =
        &bisect((zero.clone(), value + &one), |x| g(x, &zero) <= *value) + &one;
    let y_max =
        &bisect((zero.clone(), value + &one), |y| g(&zero, y) <= *value) + &one;

    let mut result = vec![];
    find_in_rectangle(
        &mut g,
        (zero.clone(), x_max),
        (zero.clone(), y_max),
        value,
        &mut result,
    );
    result
}
