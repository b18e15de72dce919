//! cm-api: client for the UK Carbon Intensity regional REST API.
//!
//! Three read-only endpoints are consumed:
//! - `GET /regional` (current snapshot)
//! - `GET /regional/intensity/{from}/{to}` (historical snapshot)
//! - `GET /regional/intensity/{from}/{to}/regionid/{id}` (one region's series)
//!
//! Front ends talk to the [`IntensitySource`] trait so the service layer can be
//! exercised without a network.

pub mod client;
pub mod config;
pub mod wire;

pub use client::CarbonIntensityClient;
pub use config::{ApiConfig, DEFAULT_BASE_URL};

use chrono::{DateTime, Utc};
use cm_core::{IntensitySnapshot, RegionId, RegionTimeSeries};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Response contained no data")]
    Empty,

    #[error("Could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    /// Well-formed response without usable data, as opposed to a failed fetch.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, ApiError::Empty)
    }
}

/// Read access to regional carbon-intensity data.
pub trait IntensitySource {
    /// Snapshot for the current half hour.
    fn current_regional(&self) -> ApiResult<IntensitySnapshot>;

    /// First snapshot inside `[from, to]`.
    fn regional_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> ApiResult<IntensitySnapshot>;

    /// Half-hourly forecast series for one region.
    fn region_series(
        &self,
        region_id: RegionId,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> ApiResult<RegionTimeSeries>;
}
