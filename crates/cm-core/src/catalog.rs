//! Static region catalog: the 14 mapped regions and their approximate centroids.

use crate::model::{LatLon, RegionId};

/// Highest region id drawn on the map; anything above is a national aggregate.
pub const MAX_MAP_REGION_ID: RegionId = 14;

/// Centroid used for a mapped id that is missing from the catalog.
pub const FALLBACK_CENTROID: LatLon = LatLon::new(54.0, -2.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub id: RegionId,
    pub name: &'static str,
    pub centroid: LatLon,
}

const fn entry(id: RegionId, name: &'static str, lat: f64, lon: f64) -> CatalogEntry {
    CatalogEntry {
        id,
        name,
        centroid: LatLon::new(lat, lon),
    }
}

/// Ordered by id.
pub const REGION_CATALOG: [CatalogEntry; 14] = [
    entry(1, "North Scotland", 58.0, -4.5),
    entry(2, "South Scotland", 55.5, -3.5),
    entry(3, "North West England", 54.0, -2.5),
    entry(4, "North East England", 55.0, -1.5),
    entry(5, "Yorkshire", 54.0, -1.0),
    entry(6, "North Wales & Merseyside", 53.0, -3.0),
    entry(7, "South Wales", 51.5, -3.5),
    entry(8, "West Midlands", 52.5, -2.0),
    entry(9, "East Midlands", 52.8, -1.0),
    entry(10, "East England", 52.5, 0.5),
    entry(11, "South West England", 50.5, -3.5),
    entry(12, "South England", 51.0, -1.0),
    entry(13, "London", 51.5, -0.1),
    entry(14, "South East England", 51.2, 0.5),
];

pub fn lookup(id: RegionId) -> Option<&'static CatalogEntry> {
    REGION_CATALOG.iter().find(|e| e.id == id)
}

pub fn centroid_of(id: RegionId) -> Option<LatLon> {
    lookup(id).map(|e| e.centroid)
}

pub fn is_map_region(id: RegionId) -> bool {
    id <= MAX_MAP_REGION_ID
}
