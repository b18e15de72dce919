//! London at 120 gCO₂/kWh: classification and click resolution together.

use cm_core::*;

fn london(intensity: f64) -> Region {
    Region {
        id: 13,
        shortname: "London".to_string(),
        dno_region: "UKPN London".to_string(),
        forecast_intensity: intensity,
        generation_mix: vec![],
    }
}

#[test]
fn london_is_moderate_and_clickable() {
    let regions = vec![london(120.0)];

    assert_eq!(classify(regions[0].forecast_intensity), SeverityTier::Moderate);

    let hit = resolve_click(LatLon::new(51.5, -0.1), &regions).expect("London should resolve");
    assert_eq!(hit.id, 13);
}

#[test]
fn click_matching_ignores_national_aggregates() {
    let mut regions: Vec<Region> = (15..=18)
        .map(|id| Region {
            id,
            shortname: format!("Aggregate {id}"),
            dno_region: String::new(),
            forecast_intensity: 10.0,
            generation_mix: vec![],
        })
        .collect();
    regions.push(london(301.0));

    let hit = resolve_click(LatLon::new(51.9, 0.3), &regions).unwrap();
    assert_eq!(hit.id, 13);
    assert_eq!(classify(hit.forecast_intensity), SeverityTier::VeryHigh);
}

#[test]
fn every_catalog_centroid_resolves_to_some_region() {
    let regions: Vec<Region> = REGION_CATALOG
        .iter()
        .map(|e| Region {
            id: e.id,
            shortname: e.name.to_string(),
            dno_region: String::new(),
            forecast_intensity: 0.0,
            generation_mix: vec![],
        })
        .collect();

    for entry in &REGION_CATALOG {
        let hit = resolve_click(entry.centroid, &regions).unwrap();
        // Earlier regions may claim a centroid through overlapping boxes.
        assert!(hit.id <= entry.id);
    }
}
