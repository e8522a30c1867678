use derive_more::Display;

#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Percentile {
    #[display("10%")]
    P10,

    #[display("25%")]
    P25,

    #[display("50%")]
    P50,

    #[display("75%")]
    P75,

    #[display("90%")]
    P90,
}

impl Percentile {
    pub const ALL: [Self; 5] = [Self::P10, Self::P25, Self::P50, Self::P75, Self::P90];

    pub const fn rank(self) -> f64 {
        match self {
            Self::P10 => 10.0,
            Self::P25 => 25.0,
            Self::P50 => 50.0,
            Self::P75 => 75.0,
            Self::P90 => 90.0,
        }
    }

    /// Linearly interpolate between the two closest ranks of the **sorted** values.
    ///
    /// Returns [`None`] for an empty slice.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn of_sorted(self, sorted: &[f64]) -> Option<f64> {
        let last_index = sorted.len().checked_sub(1)?;
        let position = self.rank() / 100.0 * last_index as f64;
        let lower = position.floor() as usize;
        let upper = position.ceil() as usize;
        let fraction = position - lower as f64;
        Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn interpolates_between_ranks() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_abs_diff_eq!(Percentile::P10.of_sorted(&sorted).unwrap(), 1.3, epsilon = 1e-12);
        assert_abs_diff_eq!(Percentile::P25.of_sorted(&sorted).unwrap(), 1.75, epsilon = 1e-12);
        assert_abs_diff_eq!(Percentile::P50.of_sorted(&sorted).unwrap(), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(Percentile::P75.of_sorted(&sorted).unwrap(), 3.25, epsilon = 1e-12);
        assert_abs_diff_eq!(Percentile::P90.of_sorted(&sorted).unwrap(), 3.7, epsilon = 1e-12);
    }

    #[test]
    fn exact_rank() {
        let sorted = [10.0, 20.0, 30.0, 40.0, 50.0];
        assert_abs_diff_eq!(Percentile::P50.of_sorted(&sorted).unwrap(), 30.0);
        assert_abs_diff_eq!(Percentile::P25.of_sorted(&sorted).unwrap(), 20.0);
    }

    #[test]
    fn single_value() {
        for percentile in Percentile::ALL {
            assert_abs_diff_eq!(percentile.of_sorted(&[42.0]).unwrap(), 42.0);
        }
    }

    #[test]
    fn empty() {
        assert_eq!(Percentile::P50.of_sorted(&[]), None);
    }

    #[test]
    fn display_ok() {
        assert_eq!(Percentile::P10.to_string(), "10%");
        assert_eq!(Percentile::P90.to_string(), "90%");
    }
}
