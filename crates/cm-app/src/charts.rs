//! Chart models for the generation-mix bar chart and the 24-hour line chart.

use chrono::{DateTime, Utc};
use cm_core::{FuelShare, RegionId, RegionTimeSeries, SeverityTier, classify};

pub const MIX_CHART_TITLE: &str = "Energy Generation Mix (%)";
pub const INTENSITY_AXIS_LABEL: &str = "Carbon Intensity (gCO₂/kWh)";

#[derive(Debug, Clone, PartialEq)]
pub struct MixBar {
    pub fuel: String,
    pub percent: f64,
}

/// One bar per fuel with a non-zero share, in mix order.
pub fn generation_mix_bars(mix: &[FuelShare]) -> Vec<MixBar> {
    mix.iter()
        .filter(|share| share.percent > 0.0)
        .map(|share| MixBar {
            fuel: title_case(&share.fuel),
            percent: share.percent,
        })
        .collect()
}

/// Uppercase the first letter of each alphabetic run, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSample {
    pub time: DateTime<Utc>,
    pub intensity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesChart {
    pub region_id: RegionId,
    pub title: String,
    pub samples: Vec<SeriesSample>,
    /// Marker colour is taken from the tier of the first sample.
    pub marker_tier: SeverityTier,
}

impl SeriesChart {
    /// `None` when the series has no points.
    pub fn from_series(series: &RegionTimeSeries, region_name: &str) -> Option<Self> {
        let first = series.points.first()?;
        let samples = series
            .points
            .iter()
            .map(|p| SeriesSample {
                time: p.from,
                intensity: p.forecast_intensity,
            })
            .collect();

        Some(Self {
            region_id: series.region_id,
            title: format!("Carbon Intensity Time Series - {region_name} (Last 24 Hours)"),
            samples,
            marker_tier: classify(first.forecast_intensity),
        })
    }

    pub fn peak(&self) -> Option<&SeriesSample> {
        self.samples
            .iter()
            .max_by(|a, b| a.intensity.total_cmp(&b.intensity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use cm_core::TimeSeriesPoint;

    fn share(fuel: &str, percent: f64) -> FuelShare {
        FuelShare {
            fuel: fuel.to_string(),
            percent,
        }
    }

    #[test]
    fn zero_percent_fuels_are_excluded() {
        let bars = generation_mix_bars(&[share("solar", 0.0), share("wind", 40.0), share("gas", 60.0)]);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0], MixBar { fuel: "Wind".to_string(), percent: 40.0 });
        assert_eq!(bars[1].fuel, "Gas");
    }

    #[test]
    fn fuel_names_are_title_cased() {
        assert_eq!(title_case("biomass"), "Biomass");
        assert_eq!(title_case("other renewables"), "Other Renewables");
        assert_eq!(title_case("NUCLEAR"), "Nuclear");
    }

    #[test]
    fn series_chart_from_points() {
        let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let points = (0..4)
            .map(|i| TimeSeriesPoint {
                from: t0 + chrono::TimeDelta::minutes(30 * i),
                to: t0 + chrono::TimeDelta::minutes(30 * (i + 1)),
                forecast_intensity: 40.0 + 100.0 * i as f64,
            })
            .collect();
        let series = RegionTimeSeries::new(13, "London".to_string(), points);

        let chart = SeriesChart::from_series(&series, "London").unwrap();
        assert_eq!(chart.samples.len(), 4);
        assert_eq!(chart.marker_tier, SeverityTier::VeryLow);
        assert_eq!(chart.peak().unwrap().intensity, 340.0);
        assert!(chart.title.contains("London"));
    }

    #[test]
    fn empty_series_has_no_chart() {
        let series = RegionTimeSeries::new(13, "London".to_string(), vec![]);
        assert!(SeriesChart::from_series(&series, "London").is_none());
    }
}
