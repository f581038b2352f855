use std::ops::Add;

use bisect::SearchInt;

/// Brute-force reference: every point of the rectangle, one evaluation
/// each, exact hits collected in row-major order.
pub fn quadrant_scan<I, F>(
    mut f: F,
    x_range: (I, I),
    y_range: (I, I),
    value: &I,
) -> Vec<(I, I)>
where
    I: SearchInt,
    for<'a> &'a I: Add<&'a I, Output = I>,
    F: FnMut(&I, &I) -> I,
{
    let one = I::const_1();
    let mut result = vec![];
    let mut x = x_range.0;
    while x < x_range.1 {
        let mut y = y_range.0.clone();
        while y < y_range.1 {
            if f(&x, &y) == *value {
                result.push((x.clone(), y.clone()));
            }
            y = &y + &one;
        }
        x = &x + &one;
    }
    result
}

#[test]
fn sanity_check() {
    let hits = quadrant_scan(|x: &i64, y: &i64| x + y, (0, 10), (0, 10), &4);
    assert_eq!(hits, [(0, 4), (1, 3), (2, 2), (3, 1), (4, 0)]);

    let empty =
        quadrant_scan(|x: &i64, y: &i64| x * x + y, (0, 5), (0, 5), &100);
    assert!(empty.is_empty());
}
