//! Map overlay model: one marker per mapped region plus the legend.

use chrono::{DateTime, Utc};
use cm_core::{
    FALLBACK_CENTROID, IntensitySnapshot, LatLon, Region, RegionId, SeverityTier, classify,
};

pub const INTENSITY_UNIT: &str = "gCO₂/kWh";

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub region_id: RegionId,
    pub label: String,
    pub position: LatLon,
    pub intensity: f64,
    pub tier: SeverityTier,
    pub tooltip: String,
    pub popup: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapOverlay {
    pub center: LatLon,
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
    pub markers: Vec<MapMarker>,
}

impl MapOverlay {
    /// Half-hour the markers describe, e.g. `2024-03-01 12:00 - 12:30 UTC`.
    pub fn period_label(&self) -> String {
        format!(
            "{} - {} UTC",
            self.valid_from.format("%Y-%m-%d %H:%M"),
            self.valid_to.format("%H:%M")
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub tier: SeverityTier,
    pub text: String,
}

/// `120` prints as `120 gCO₂/kWh`, `95.5` as `95.5 gCO₂/kWh`.
pub fn format_intensity(intensity: f64) -> String {
    if intensity.fract() == 0.0 {
        format!("{intensity:.0} {INTENSITY_UNIT}")
    } else {
        format!("{intensity} {INTENSITY_UNIT}")
    }
}

fn marker_for(region: &Region) -> MapMarker {
    let tier = classify(region.forecast_intensity);
    let intensity_text = format_intensity(region.forecast_intensity);
    MapMarker {
        region_id: region.id,
        label: region.shortname.clone(),
        position: region.centroid().unwrap_or(FALLBACK_CENTROID),
        intensity: region.forecast_intensity,
        tier,
        tooltip: format!("{}: {}", region.shortname, intensity_text),
        popup: vec![
            region.shortname.clone(),
            format!("Intensity: {intensity_text}"),
            format!("Index: {}", tier.label()),
            format!("DNO: {}", region.dno_region),
        ],
    }
}

/// Markers for every region with id ≤ 14, in snapshot order.
pub fn build_overlay(snapshot: &IntensitySnapshot, center: LatLon) -> MapOverlay {
    MapOverlay {
        center,
        valid_from: snapshot.from,
        valid_to: snapshot.to,
        markers: snapshot.mapped_regions().map(marker_for).collect(),
    }
}

pub fn legend() -> Vec<LegendEntry> {
    SeverityTier::ALL
        .into_iter()
        .map(|tier| LegendEntry {
            tier,
            text: format!("{} ({} {})", tier.label(), tier.legend_range(), INTENSITY_UNIT),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn snapshot() -> IntensitySnapshot {
        let region = |id: RegionId, name: &str, intensity: f64| Region {
            id,
            shortname: name.to_string(),
            dno_region: format!("DNO {id}"),
            forecast_intensity: intensity,
            generation_mix: vec![],
        };
        IntensitySnapshot {
            from: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            to: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
            regions: vec![
                region(1, "North Scotland", 12.0),
                region(13, "London", 120.0),
                region(15, "England", 150.0),
                region(18, "GB", 140.0),
            ],
        }
    }

    #[test]
    fn aggregates_are_skipped() {
        let overlay = build_overlay(&snapshot(), LatLon::new(54.5, -3.0));
        let ids: Vec<RegionId> = overlay.markers.iter().map(|m| m.region_id).collect();
        assert_eq!(ids, vec![1, 13]);
    }

    #[test]
    fn london_marker_text() {
        let overlay = build_overlay(&snapshot(), LatLon::new(54.5, -3.0));
        let london = &overlay.markers[1];
        assert_eq!(london.position, LatLon::new(51.5, -0.1));
        assert_eq!(london.tier, SeverityTier::Moderate);
        assert_eq!(london.tooltip, "London: 120 gCO₂/kWh");
        assert_eq!(london.popup[2], "Index: Moderate");
        assert_eq!(london.popup[3], "DNO: DNO 13");
    }

    #[test]
    fn period_label_shows_snapshot_window() {
        let overlay = build_overlay(&snapshot(), LatLon::new(54.5, -3.0));
        assert_eq!(overlay.period_label(), "2024-03-01 12:00 - 12:30 UTC");
    }

    #[test]
    fn legend_covers_all_tiers() {
        let entries = legend();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].text, "Very Low (0-50 gCO₂/kWh)");
        assert_eq!(entries[4].text, "Very High (300+ gCO₂/kWh)");
    }

    #[test]
    fn fractional_intensity_keeps_decimals() {
        assert_eq!(format_intensity(95.5), "95.5 gCO₂/kWh");
    }
}
