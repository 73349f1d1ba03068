//! Search/reduction peers, scalar reference.
//!
//! First index of the strict extremum; comparisons use `<`/`>` so NaN
//! samples never displace an established extremum. Empty input yields 0.

pub fn min_index(src: &[f32]) -> usize {
    let mut idx = 0;
    for i in 1..src.len() {
        if src[i] < src[idx] {
            idx = i;
        }
    }
    idx
}

pub fn max_index(src: &[f32]) -> usize {
    let mut idx = 0;
    for i in 1..src.len() {
        if src[i] > src[idx] {
            idx = i;
        }
    }
    idx
}

pub fn minmax_index(src: &[f32]) -> (usize, usize) {
    let mut min = 0;
    let mut max = 0;
    for i in 1..src.len() {
        if src[i] < src[min] {
            min = i;
        }
        if src[i] > src[max] {
            max = i;
        }
    }
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_extrema() {
        let v = [3.0, -1.0, 5.0, -1.0, 5.0];
        assert_eq!(min_index(&v), 1);
        assert_eq!(max_index(&v), 2);
        assert_eq!(minmax_index(&v), (1, 2));
    }

    #[test]
    fn empty_input_yields_zero() {
        assert_eq!(min_index(&[]), 0);
        assert_eq!(max_index(&[]), 0);
        assert_eq!(minmax_index(&[]), (0, 0));
    }

    #[test]
    fn single_element() {
        assert_eq!(minmax_index(&[7.0]), (0, 0));
    }
}
