//! Map click to region resolution.
//!
//! This is a coarse containment test, not nearest-neighbour: each mapped
//! region owns a ±[`CLICK_TOLERANCE_DEG`] box around its centroid and the first
//! region in sequence order whose box contains the click wins. Adjoining
//! English regions have overlapping boxes, so the tie-break is by order.

use crate::model::{LatLon, Region};

/// Half-width of the match box, in degrees of latitude and longitude.
pub const CLICK_TOLERANCE_DEG: f64 = 1.0;

fn within_tolerance(point: LatLon, centroid: LatLon) -> bool {
    (point.lat - centroid.lat).abs() < CLICK_TOLERANCE_DEG
        && (point.lon - centroid.lon).abs() < CLICK_TOLERANCE_DEG
}

/// Returns the first mapped region whose centroid box contains `point`.
///
/// `None` means nothing is selected; it is not an error.
pub fn resolve_click(point: LatLon, regions: &[Region]) -> Option<&Region> {
    regions.iter().filter(|r| r.is_mapped()).find(|r| {
        r.centroid()
            .is_some_and(|centroid| within_tolerance(point, centroid))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(id: u32, intensity: f64) -> Region {
        Region {
            id,
            shortname: format!("Region {id}"),
            dno_region: String::new(),
            forecast_intensity: intensity,
            generation_mix: vec![],
        }
    }

    fn all_regions() -> Vec<Region> {
        (1..=18).map(|id| region(id, 100.0)).collect()
    }

    #[test]
    fn empty_regions_resolve_to_none() {
        assert!(resolve_click(LatLon::new(51.5, -0.1), &[]).is_none());
    }

    #[test]
    fn far_away_click_resolves_to_none() {
        let regions = all_regions();
        assert!(resolve_click(LatLon::new(40.0, 10.0), &regions).is_none());
    }

    #[test]
    fn exact_tolerance_is_excluded() {
        let regions = vec![region(1, 10.0)];
        // North Scotland centroid is (58.0, -4.5); the box is open.
        assert!(resolve_click(LatLon::new(59.0, -4.5), &regions).is_none());
        assert!(resolve_click(LatLon::new(58.99, -4.5), &regions).is_some());
    }

    #[test]
    fn overlap_picks_lowest_index() {
        let regions = all_regions();
        // (52.6, -1.5) lies in the boxes of West Midlands (8) and East Midlands (9).
        let hit = resolve_click(LatLon::new(52.6, -1.5), &regions).unwrap();
        assert_eq!(hit.id, 8);
    }

    #[test]
    fn sequence_order_decides_not_id() {
        let regions = vec![region(9, 1.0), region(8, 1.0)];
        let hit = resolve_click(LatLon::new(52.6, -1.5), &regions).unwrap();
        assert_eq!(hit.id, 9);
    }

    #[test]
    fn aggregates_are_never_selected() {
        let regions = vec![region(18, 1.0)];
        assert!(resolve_click(LatLon::new(54.0, -2.0), &regions).is_none());
    }
}
