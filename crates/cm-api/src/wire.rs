//! JSON shapes returned by the API and their conversion into domain values.

use cm_core::{
    FuelShare, IntensitySnapshot, Region, RegionId, RegionTimeSeries, TimeSeriesPoint,
    parse_api_timestamp,
};
use serde::Deserialize;
use std::collections::HashSet;

use crate::{ApiError, ApiResult};

/// Body of `/regional` and `/regional/intensity/{from}/{to}`.
#[derive(Debug, Deserialize)]
pub struct RegionalResponse {
    #[serde(default)]
    pub data: Vec<RegionalEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RegionalEntry {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub regions: Vec<WireRegion>,
}

#[derive(Debug, Deserialize)]
pub struct WireRegion {
    pub regionid: RegionId,
    #[serde(default)]
    pub dnoregion: String,
    #[serde(default)]
    pub shortname: String,
    pub intensity: WireIntensity,
    #[serde(default)]
    pub generationmix: Vec<WireFuel>,
}

#[derive(Debug, Deserialize)]
pub struct WireIntensity {
    pub forecast: f64,
}

#[derive(Debug, Deserialize)]
pub struct WireFuel {
    pub fuel: String,
    pub perc: f64,
}

/// Body of `/regional/intensity/{from}/{to}/regionid/{id}`.
#[derive(Debug, Deserialize)]
pub struct RegionSeriesResponse {
    pub data: RegionSeriesBody,
}

#[derive(Debug, Deserialize)]
pub struct RegionSeriesBody {
    pub regionid: RegionId,
    #[serde(default)]
    pub shortname: String,
    #[serde(default)]
    pub data: Vec<WireSeriesPoint>,
}

#[derive(Debug, Deserialize)]
pub struct WireSeriesPoint {
    pub from: String,
    pub to: String,
    pub intensity: WireIntensity,
}

fn timestamp(raw: &str) -> ApiResult<chrono::DateTime<chrono::Utc>> {
    parse_api_timestamp(raw).map_err(|e| ApiError::InvalidPayload(e.to_string()))
}

impl From<WireRegion> for Region {
    fn from(wire: WireRegion) -> Self {
        Region {
            id: wire.regionid,
            shortname: wire.shortname,
            dno_region: wire.dnoregion,
            forecast_intensity: wire.intensity.forecast,
            generation_mix: wire
                .generationmix
                .into_iter()
                .map(|f| FuelShare {
                    fuel: f.fuel,
                    percent: f.perc,
                })
                .collect(),
        }
    }
}

impl RegionalResponse {
    /// The first entry as a snapshot. Duplicate region ids keep their first
    /// occurrence.
    pub fn into_snapshot(self) -> ApiResult<IntensitySnapshot> {
        let entry = self.data.into_iter().next().ok_or(ApiError::Empty)?;
        if entry.regions.is_empty() {
            return Err(ApiError::Empty);
        }

        let from = timestamp(&entry.from)?;
        let to = timestamp(&entry.to)?;

        let mut seen = HashSet::new();
        let mut regions = Vec::with_capacity(entry.regions.len());
        for wire in entry.regions {
            if !seen.insert(wire.regionid) {
                tracing::warn!(region_id = wire.regionid, "duplicate region in snapshot; keeping first");
                continue;
            }
            regions.push(Region::from(wire));
        }

        Ok(IntensitySnapshot { from, to, regions })
    }
}

impl RegionSeriesResponse {
    pub fn into_series(self) -> ApiResult<RegionTimeSeries> {
        let body = self.data;
        if body.data.is_empty() {
            return Err(ApiError::Empty);
        }

        let points = body
            .data
            .into_iter()
            .map(|p| {
                Ok(TimeSeriesPoint {
                    from: timestamp(&p.from)?,
                    to: timestamp(&p.to)?,
                    forecast_intensity: p.intensity.forecast,
                })
            })
            .collect::<ApiResult<Vec<_>>>()?;

        Ok(RegionTimeSeries::new(body.regionid, body.shortname, points))
    }
}
