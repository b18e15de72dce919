//! cm-core: domain foundation for carbonmap.
//!
//! Contains:
//! - model (regions, snapshots, time series)
//! - tier (intensity severity classification)
//! - catalog (fixed region centroids)
//! - click (map click to region resolution)
//! - time (half-hour grid + API timestamp format)
//! - error (shared error types)

pub mod catalog;
pub mod click;
pub mod error;
pub mod model;
pub mod tier;
pub mod time;

// Re-exports: nice ergonomics for downstream crates
pub use catalog::{
    CatalogEntry, FALLBACK_CENTROID, MAX_MAP_REGION_ID, REGION_CATALOG, centroid_of, is_map_region,
};
pub use click::{CLICK_TOLERANCE_DEG, resolve_click};
pub use error::{CoreError, CoreResult};
pub use model::*;
pub use tier::{SeverityTier, classify};
pub use time::{
    HALF_HOUR, SERIES_WINDOW, format_api_timestamp, historical_window, parse_api_timestamp,
    round_to_half_hour, series_window,
};
