//! Domain values produced by one fetch and consumed by one render.

use chrono::{DateTime, Utc};

use crate::catalog;

/// Carbon Intensity API region identifier.
///
/// `1..=14` are the mapped regions; higher ids are national aggregates.
pub type RegionId = u32;

/// Geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Share of one fuel type in a region's generation mix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuelShare {
    pub fuel: String,
    /// Percentage in `[0, 100]`.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub id: RegionId,
    pub shortname: String,
    pub dno_region: String,
    /// Forecast intensity in gCO₂/kWh.
    pub forecast_intensity: f64,
    pub generation_mix: Vec<FuelShare>,
}

impl Region {
    /// Approximate centroid from the static catalog, if this region is mapped.
    pub fn centroid(&self) -> Option<LatLon> {
        catalog::centroid_of(self.id)
    }

    /// National/country aggregates are not drawn on the map.
    pub fn is_mapped(&self) -> bool {
        catalog::is_map_region(self.id)
    }
}

/// All regions valid for one half-hour window.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntensitySnapshot {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub regions: Vec<Region>,
}

impl IntensitySnapshot {
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Regions eligible for map rendering, in snapshot order.
    pub fn mapped_regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(|r| r.is_mapped())
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSeriesPoint {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub forecast_intensity: f64,
}

/// Half-hourly history for one region, ordered by `from` ascending.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionTimeSeries {
    pub region_id: RegionId,
    pub shortname: String,
    pub points: Vec<TimeSeriesPoint>,
}

impl RegionTimeSeries {
    /// Builds a series, sorting points by `from` (stable for equal keys).
    pub fn new(region_id: RegionId, shortname: String, mut points: Vec<TimeSeriesPoint>) -> Self {
        points.sort_by_key(|p| p.from);
        Self {
            region_id,
            shortname,
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, h, m, 0).unwrap()
    }

    #[test]
    fn series_is_sorted_on_construction() {
        let points = vec![
            TimeSeriesPoint {
                from: at(1, 0),
                to: at(1, 30),
                forecast_intensity: 3.0,
            },
            TimeSeriesPoint {
                from: at(0, 0),
                to: at(0, 30),
                forecast_intensity: 1.0,
            },
            TimeSeriesPoint {
                from: at(0, 30),
                to: at(1, 0),
                forecast_intensity: 2.0,
            },
        ];
        let series = RegionTimeSeries::new(13, "London".to_string(), points);
        let values: Vec<f64> = series.points.iter().map(|p| p.forecast_intensity).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn aggregates_are_not_mapped() {
        let region = Region {
            id: 18,
            shortname: "GB".to_string(),
            dno_region: String::new(),
            forecast_intensity: 150.0,
            generation_mix: vec![],
        };
        assert!(!region.is_mapped());
        assert!(region.centroid().is_none());
    }
}
