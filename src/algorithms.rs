/// Binary search over a sorted slice returning the index of the last element
/// which is less than or equal to the test value. Used to locate the segment
/// containing an arc-length station during resampling and the bracketing
/// upper-surface node during the crossing check.
pub fn preceding_index_search(slice: &[f64], test_value: f64) -> usize {
    if slice.len() <= 1 || slice[1] > test_value {
        return 0;
    }

    let mut a = 1;
    let mut b = slice.len() - 1;
    if slice[b] <= test_value {
        return b;
    }

    while b > a + 1 {
        let check = (a + b) / 2;
        if test_value >= slice[check] {
            a = check;
        } else {
            b = check;
        }
    }
    a
}
