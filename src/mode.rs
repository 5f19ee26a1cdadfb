use crate::sample::Sample;
use std::cmp::Ordering;

/// Most frequent value of an ascending slice, or None if it's empty
///
/// Equal values are contiguous, so the slice is scanned once as a sequence of
/// runs. A later run only wins if it is strictly longer, which makes ties go to
/// the smallest value. NaNs sort last and form a single run
pub fn mode<T: Sample>(sorted: &[T]) -> Option<T> {
    let mut runs = Runs { rest: sorted };
    let mut best = runs.next()?;
    for run in runs {
        if run.1 > best.1 {
            best = run;
        }
    }
    Some(best.0)
}

/// Iterate over (value, occurrences) of consecutive equal values
struct Runs<'a, T> {
    rest: &'a [T],
}

impl<'a, T: Sample> Iterator for Runs<'a, T> {
    type Item = (T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest;
        let value = *rest.first()?;
        let len = rest
            .iter()
            .position(|other| other.sample_cmp(&value) != Ordering::Equal)
            .unwrap_or(rest.len());
        self.rest = &rest[len..];
        Some((value, len))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn uniform() {
        assert_eq!(mode(&[1, 2, 3, 4, 5]), Some(1));
    }

    #[test]
    fn unique_maximum() {
        assert_eq!(mode(&[1, 2, 3, 3, 4, 5]), Some(3));
        assert_eq!(mode(&[1, 2, 3, 4, 5, 5]), Some(5));
    }

    #[test]
    fn ties_go_to_smallest() {
        assert_eq!(mode(&[1, 2, 2, 3, 4, 4]), Some(2));
        assert_eq!(mode(&[-1., -1., 7., 7.]), Some(-1.));
    }

    #[test]
    fn nan_runs() {
        let m = mode(&[2., std::f64::NAN, std::f64::NAN]).unwrap();
        assert!(m.is_nan());
        assert_eq!(mode(&[2., 2., std::f64::NAN]), Some(2.));
        assert_eq!(mode(&[1., 2., std::f64::NAN]), Some(1.));
    }

    #[test]
    fn runs() {
        let runs: Vec<_> = Runs { rest: &[1, 1, 2, 3, 3, 3][..] }.collect();
        assert_eq!(runs, vec![(1, 2), (2, 1), (3, 3)]);
    }

    #[test]
    fn empty() {
        assert_eq!(mode::<i64>(&[]), None);
    }
}
