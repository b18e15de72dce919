use core::fmt;

/// Five ordered intensity bands used for colour-coding and labelling.
///
/// Declaration order is severity order, so the derived `Ord` is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeverityTier {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl SeverityTier {
    /// All tiers in ascending bound order.
    pub const ALL: [SeverityTier; 5] = [
        SeverityTier::VeryLow,
        SeverityTier::Low,
        SeverityTier::Moderate,
        SeverityTier::High,
        SeverityTier::VeryHigh,
    ];

    /// Inclusive upper bound in gCO₂/kWh.
    pub const fn upper_bound(self) -> f64 {
        match self {
            SeverityTier::VeryLow => 50.0,
            SeverityTier::Low => 100.0,
            SeverityTier::Moderate => 200.0,
            SeverityTier::High => 300.0,
            SeverityTier::VeryHigh => f64::INFINITY,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SeverityTier::VeryLow => "Very Low",
            SeverityTier::Low => "Low",
            SeverityTier::Moderate => "Moderate",
            SeverityTier::High => "High",
            SeverityTier::VeryHigh => "Very High",
        }
    }

    /// CSS colour name used by web-style renderers.
    pub const fn color_name(self) -> &'static str {
        match self {
            SeverityTier::VeryLow => "green",
            SeverityTier::Low => "lightgreen",
            SeverityTier::Moderate => "orange",
            SeverityTier::High => "red",
            SeverityTier::VeryHigh => "darkred",
        }
    }

    /// sRGB triple matching [`Self::color_name`].
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            SeverityTier::VeryLow => [0, 128, 0],
            SeverityTier::Low => [144, 238, 144],
            SeverityTier::Moderate => [255, 165, 0],
            SeverityTier::High => [255, 0, 0],
            SeverityTier::VeryHigh => [139, 0, 0],
        }
    }

    /// Human-readable range shown in the map legend.
    pub const fn legend_range(self) -> &'static str {
        match self {
            SeverityTier::VeryLow => "0-50",
            SeverityTier::Low => "51-100",
            SeverityTier::Moderate => "101-200",
            SeverityTier::High => "201-300",
            SeverityTier::VeryHigh => "300+",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map an intensity to the first tier whose inclusive upper bound holds it.
///
/// Negative values land in `VeryLow`; NaN compares false against every bound
/// and lands in `VeryHigh`.
pub fn classify(intensity: f64) -> SeverityTier {
    SeverityTier::ALL
        .into_iter()
        .find(|tier| intensity <= tier.upper_bound())
        .unwrap_or(SeverityTier::VeryHigh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_fall_into_lower_tier() {
        assert_eq!(classify(50.0), SeverityTier::VeryLow);
        assert_eq!(classify(100.0), SeverityTier::Low);
        assert_eq!(classify(200.0), SeverityTier::Moderate);
        assert_eq!(classify(300.0), SeverityTier::High);
    }

    #[test]
    fn just_above_boundaries() {
        assert_eq!(classify(50.5), SeverityTier::Low);
        assert_eq!(classify(100.1), SeverityTier::Moderate);
        assert_eq!(classify(200.01), SeverityTier::High);
        assert_eq!(classify(301.0), SeverityTier::VeryHigh);
    }

    #[test]
    fn zero_and_negative_are_very_low() {
        assert_eq!(classify(0.0), SeverityTier::VeryLow);
        assert_eq!(classify(-12.0), SeverityTier::VeryLow);
    }

    #[test]
    fn nan_is_very_high() {
        assert_eq!(classify(f64::NAN), SeverityTier::VeryHigh);
    }

    #[test]
    fn bounds_are_contiguous_and_ascending() {
        let bounds: Vec<f64> = SeverityTier::ALL.iter().map(|t| t.upper_bound()).collect();
        assert!(bounds.windows(2).all(|w| w[0] < w[1]));
        assert!(bounds.last().unwrap().is_infinite());
    }

    #[test]
    fn labels_and_colours() {
        assert_eq!(classify(120.0).label(), "Moderate");
        assert_eq!(classify(120.0).color_name(), "orange");
        assert_eq!(SeverityTier::VeryHigh.to_string(), "Very High");
    }
}
