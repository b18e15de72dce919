//! Blocking HTTP implementation of [`IntensitySource`].

use std::time::Duration;

use chrono::{DateTime, Utc};
use cm_core::{IntensitySnapshot, RegionId, RegionTimeSeries, format_api_timestamp};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::wire::{RegionSeriesResponse, RegionalResponse};
use crate::{ApiConfig, ApiError, ApiResult, IntensitySource};

pub struct CarbonIntensityClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl CarbonIntensityClient {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(ApiError::Client)?;

        Ok(Self {
            http,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    pub fn current_url(&self) -> String {
        format!("{}/regional", self.base_url)
    }

    pub fn historical_url(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> String {
        format!(
            "{}/regional/intensity/{}/{}",
            self.base_url,
            format_api_timestamp(from),
            format_api_timestamp(to)
        )
    }

    pub fn series_url(&self, region_id: RegionId, from: DateTime<Utc>, to: DateTime<Utc>) -> String {
        format!(
            "{}/regionid/{}",
            self.historical_url(from, to),
            region_id
        )
    }

    fn get_json<T: DeserializeOwned>(&self, url: String) -> ApiResult<T> {
        debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(|source| {
                warn!(%url, error = %source, "request failed");
                ApiError::Transport {
                    url: url.clone(),
                    source,
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "non-success status");
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|source| ApiError::Transport {
            url: url.clone(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|source| {
            warn!(%url, error = %source, "undecodable body");
            ApiError::Decode { url, source }
        })
    }
}

impl IntensitySource for CarbonIntensityClient {
    fn current_regional(&self) -> ApiResult<IntensitySnapshot> {
        let response: RegionalResponse = self.get_json(self.current_url())?;
        let snapshot = response.into_snapshot()?;
        info!(regions = snapshot.regions.len(), from = %snapshot.from, "loaded current snapshot");
        Ok(snapshot)
    }

    fn regional_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> ApiResult<IntensitySnapshot> {
        let response: RegionalResponse = self.get_json(self.historical_url(from, to))?;
        let snapshot = response.into_snapshot()?;
        info!(regions = snapshot.regions.len(), from = %snapshot.from, "loaded historical snapshot");
        Ok(snapshot)
    }

    fn region_series(
        &self,
        region_id: RegionId,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> ApiResult<RegionTimeSeries> {
        let response: RegionSeriesResponse =
            self.get_json(self.series_url(region_id, from, to))?;
        let series = response.into_series()?;
        info!(region_id, points = series.points.len(), "loaded region series");
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn urls_use_minute_precision() {
        let client = CarbonIntensityClient::new(&ApiConfig::default()).unwrap();
        let from = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();

        assert_eq!(
            client.current_url(),
            "https://api.carbonintensity.org.uk/regional"
        );
        assert_eq!(
            client.historical_url(from, to),
            "https://api.carbonintensity.org.uk/regional/intensity/2024-03-01T12:00Z/2024-03-01T12:30Z"
        );
        assert_eq!(
            client.series_url(13, from, to),
            "https://api.carbonintensity.org.uk/regional/intensity/2024-03-01T12:00Z/2024-03-01T12:30Z/regionid/13"
        );
    }
}
