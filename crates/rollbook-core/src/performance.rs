//! Performance bands derived from exam percentages.

use serde::Serialize;
use std::fmt;

/// Category a result percentage falls into on the performance dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceBand {
    Excellent,
    Good,
    Average,
    Poor,
}

impl PerformanceBand {
    /// Band for a 0-100 percentage. Values outside the range are treated
    /// as their nearest band; NaN lands in `Poor`.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 75.0 {
            Self::Excellent
        } else if percentage >= 60.0 {
            Self::Good
        } else if percentage >= 40.0 {
            Self::Average
        } else {
            Self::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for PerformanceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_inclusive_at_the_bottom() {
        assert_eq!(PerformanceBand::from_percentage(75.0), PerformanceBand::Excellent);
        assert_eq!(PerformanceBand::from_percentage(74.9), PerformanceBand::Good);
        assert_eq!(PerformanceBand::from_percentage(60.0), PerformanceBand::Good);
        assert_eq!(PerformanceBand::from_percentage(59.9), PerformanceBand::Average);
        assert_eq!(PerformanceBand::from_percentage(40.0), PerformanceBand::Average);
        assert_eq!(PerformanceBand::from_percentage(39.9), PerformanceBand::Poor);
    }

    #[test]
    fn extremes_clamp_into_outer_bands() {
        assert_eq!(PerformanceBand::from_percentage(100.0), PerformanceBand::Excellent);
        assert_eq!(PerformanceBand::from_percentage(130.0), PerformanceBand::Excellent);
        assert_eq!(PerformanceBand::from_percentage(0.0), PerformanceBand::Poor);
        assert_eq!(PerformanceBand::from_percentage(-5.0), PerformanceBand::Poor);
        assert_eq!(PerformanceBand::from_percentage(f64::NAN), PerformanceBand::Poor);
    }

    #[test]
    fn labels_render_for_tables() {
        assert_eq!(PerformanceBand::Excellent.to_string(), "Excellent");
        assert_eq!(PerformanceBand::Poor.label(), "Poor");
    }
}
