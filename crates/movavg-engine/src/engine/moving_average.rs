//! Simple moving average over integer series.
//!
//! The result is aligned to the tail of the input: element `i` averages
//! `values[i..i + window]`, so the first `window - 1` inputs have no value of
//! their own. Means are rounded half away from zero using integer arithmetic.

/// Compute the simple moving average of `values` over `window` points.
///
/// Returns an empty vector when `window` is zero or larger than the input.
/// Otherwise the result has `values.len() - window + 1` elements.
pub fn moving_average(values: &[i64], window: usize) -> Vec<i64> {
    if window == 0 || window > values.len() {
        return Vec::new();
    }
    values
        .windows(window)
        .map(|slice| {
            let sum: i128 = slice.iter().map(|&v| v as i128).sum();
            round_mean(sum, window as i128)
        })
        .collect()
}

/// `sum / count` rounded to the nearest integer, ties away from zero.
fn round_mean(sum: i128, count: i128) -> i64 {
    let magnitude = (2 * sum.abs() + count) / (2 * count);
    let rounded = if sum < 0 { -magnitude } else { magnitude };
    rounded as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moving_average_steps() {
        assert_eq!(
            moving_average(&[1, 1, 1, 2, 2, 2, 3, 3, 3], 3),
            vec![1, 1, 2, 2, 2, 3, 3]
        );
    }

    #[test]
    fn test_moving_average_linear() {
        assert_eq!(moving_average(&[1, 2, 3, 4, 5, 6, 7], 3), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_window_of_one_is_identity() {
        assert_eq!(moving_average(&[4, -2, 9], 1), vec![4, -2, 9]);
    }

    #[test]
    fn test_window_equal_to_length() {
        assert_eq!(moving_average(&[10, 20, 31], 3), vec![20]);
    }

    #[test]
    fn test_window_too_large_or_zero_is_empty() {
        assert!(moving_average(&[1, 2], 3).is_empty());
        assert!(moving_average(&[1, 2], 0).is_empty());
        assert!(moving_average(&[], 1).is_empty());
    }

    #[test]
    fn test_result_length() {
        let values: Vec<i64> = (0..40).map(|v| v * 7 % 13).collect();
        for window in 1..=values.len() {
            assert_eq!(
                moving_average(&values, window).len(),
                values.len() - window + 1
            );
        }
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(moving_average(&[1, 2], 2), vec![2]);
        assert_eq!(moving_average(&[2, 3], 2), vec![3]);
        assert_eq!(moving_average(&[-1, -2], 2), vec![-2]);
    }

    #[test]
    fn test_negative_values_round_to_nearest() {
        // -4/3 and -5/3
        assert_eq!(moving_average(&[-1, -1, -2, -2], 3), vec![-1, -2]);
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        assert_eq!(moving_average(&[i64::MAX, i64::MAX], 2), vec![i64::MAX]);
    }

    #[test]
    fn test_input_is_untouched() {
        let values = vec![5, 1, 4];
        let _ = moving_average(&values, 2);
        assert_eq!(values, vec![5, 1, 4]);
    }
}
