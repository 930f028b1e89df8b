pub struct StatsHelper;

impl StatsHelper {
    /// Index of the smallest value, first occurrence on ties.
    ///
    /// Returns 0 for an empty slice. NaN entries never win.
    pub fn argmin(values: &[f64]) -> usize {
        let mut best: Option<(usize, f64)> = None;
        for (idx, &value) in values.iter().enumerate() {
            if value.is_nan() {
                continue;
            }
            match best {
                Some((_, current)) if value >= current => {}
                _ => best = Some((idx, value)),
            }
        }
        best.map(|(idx, _)| idx).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmin_empty_defaults_to_zero() {
        assert_eq!(StatsHelper::argmin(&[]), 0);
    }

    #[test]
    fn argmin_prefers_first_tie() {
        assert_eq!(StatsHelper::argmin(&[5.0, 2.0, 7.0, 2.0]), 1);
        assert_eq!(StatsHelper::argmin(&[3.0, 3.0, 3.0]), 0);
    }

    #[test]
    fn argmin_skips_nan() {
        assert_eq!(StatsHelper::argmin(&[f64::NAN, 4.0, 1.0]), 2);
    }
}
