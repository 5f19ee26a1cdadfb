use crate::sample::Sample;

/// Arithmetic mean of `samples`, or None if there are none
///
/// Each sample is divided by the count before being added, so the running sum
/// never exceeds the largest sample and can't overflow. The price is that for
/// integers every term truncates on its own: the mean of `{1, 1, 1}` is `0`
pub fn arithmetic_mean<T: Sample>(samples: &[T]) -> Option<T> {
    let len = samples.len();
    if len == 0 {
        return None;
    }

    Some(
        samples
            .iter()
            .fold(T::ZERO, |mean, &sample| mean + sample.div_len(len)),
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(arithmetic_mean::<i32>(&[]), None);
        assert_eq!(arithmetic_mean::<f64>(&[]), None);
    }

    #[test]
    fn single() {
        assert_eq!(arithmetic_mean(&[17]), Some(17));
        assert_eq!(arithmetic_mean(&[-3.5]), Some(-3.5));
    }

    #[test]
    fn truncates_per_term() {
        assert_eq!(arithmetic_mean(&[1, 100]), Some(50));
        assert_eq!(arithmetic_mean(&[1, 1, 1]), Some(0));
        assert_eq!(arithmetic_mean(&[3, 3, 3]), Some(3));
        assert_eq!(arithmetic_mean(&[-5, -5]), Some(-4));
    }

    #[test]
    fn no_overflow() {
        assert_eq!(
            arithmetic_mean(&[1u64, std::u64::MAX]),
            Some(std::u64::MAX / 2)
        );
        assert_eq!(arithmetic_mean(&[200u8, 250u8]), Some(225));
        assert_eq!(
            arithmetic_mean(&[std::i64::MIN, std::i64::MIN]),
            Some(std::i64::MIN)
        );
    }

    #[test]
    fn floats() {
        let mean = arithmetic_mean(&[3f64, 14., 15.]).unwrap();
        assert!((mean - (3. + 14. + 15.) / 3.).abs() < 1e-12);
    }
}
