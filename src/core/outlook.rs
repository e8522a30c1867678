use comfy_table::Color;
use derive_more::Display;

/// Probability band label.
///
/// The bands are measured against the historical mean and standard deviation,
/// and they overlap: [`Outlook::Stable`] shares values with both other bands.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Outlook {
    /// Strictly above the historical mean.
    #[display("increase")]
    Increase,

    /// Strictly below the historical mean.
    #[display("decrease")]
    Decrease,

    /// Within one standard deviation of the historical mean, inclusive.
    #[display("stable")]
    Stable,
}

impl Outlook {
    pub const ALL: [Self; 3] = [Self::Increase, Self::Decrease, Self::Stable];

    pub fn contains(self, value: f64, mean: f64, std_dev: f64) -> bool {
        match self {
            Self::Increase => value > mean,
            Self::Decrease => value < mean,
            Self::Stable => (mean - std_dev..=mean + std_dev).contains(&value),
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Increase => Color::Red,
            Self::Decrease => Color::Green,
            Self::Stable => Color::DarkYellow,
        }
    }
}
