//! Application configuration loaded from YAML.

use std::path::Path;

use cm_api::ApiConfig;
use cm_core::LatLon;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub map: MapConfig,
}

/// Initial map view and marker styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lon: f64,
    /// Degrees of latitude shown around the centre on first render.
    pub span_deg: f64,
    /// Marker radius in screen points.
    pub marker_radius: f32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: 54.5,
            center_lon: -3.0,
            span_deg: 10.0,
            marker_radius: 15.0,
        }
    }
}

impl MapConfig {
    pub fn center(&self) -> LatLon {
        LatLon::new(self.center_lat, self.center_lon)
    }
}

/// Load configuration from a YAML file. Missing keys take their defaults.
pub fn load_config(path: &Path) -> AppResult<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config(&content)
}

pub fn parse_config(content: &str) -> AppResult<AppConfig> {
    let config: AppConfig = serde_yaml::from_str(content)
        .map_err(|e| AppError::Config(format!("Failed to parse config YAML: {}", e)))?;

    if config.api.base_url.trim().is_empty() {
        return Err(AppError::Config("api.base_url must not be empty".to_string()));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_fills_defaults() {
        let config = parse_config("api:\n  base_url: http://localhost:9000\n").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert_eq!(config.map, MapConfig::default());
        assert!(config.api.timeout_secs.is_none());
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let err = parse_config("api:\n  base_url: ''\n").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }
}
