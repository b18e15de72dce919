//! One-shot queries for non-interactive front ends.
//!
//! Unlike [`crate::Session`], failures propagate as [`AppError`] instead of
//! becoming inline notices.

use chrono::{DateTime, Utc};
use cm_api::IntensitySource;
use cm_core::{
    IntensitySnapshot, LatLon, RegionId, historical_window, resolve_click, round_to_half_hour,
    series_window,
};

use crate::charts::SeriesChart;
use crate::detail::RegionDetail;
use crate::error::{AppError, AppResult};

/// Current snapshot, or the half-hour containing `at`.
pub fn snapshot_at(
    source: &dyn IntensitySource,
    at: Option<DateTime<Utc>>,
) -> AppResult<IntensitySnapshot> {
    let snapshot = match at {
        None => source.current_regional()?,
        Some(t) => {
            let (from, to) = historical_window(round_to_half_hour(t));
            source.regional_between(from, to)?
        }
    };
    Ok(snapshot)
}

/// Resolve a coordinate the same way a map click is resolved.
pub fn inspect_point(snapshot: &IntensitySnapshot, point: LatLon) -> Option<RegionDetail> {
    resolve_click(point, &snapshot.regions).map(RegionDetail::from_region)
}

/// Trailing 24-hour chart for one region.
pub fn region_chart(
    source: &dyn IntensitySource,
    region_id: RegionId,
    now: DateTime<Utc>,
) -> AppResult<SeriesChart> {
    let (from, to) = series_window(now);
    let series = source.region_series(region_id, from, to)?;
    let name = if series.shortname.is_empty() {
        cm_core::catalog::lookup(region_id)
            .map(|e| e.name.to_string())
            .unwrap_or_else(|| format!("Region {region_id}"))
    } else {
        series.shortname.clone()
    };
    SeriesChart::from_series(&series, &name).ok_or(AppError::Api(cm_api::ApiError::Empty))
}
