//! Detail panel for the selected region.

use cm_core::{Region, RegionId, SeverityTier, classify};

use crate::charts::{MixBar, generation_mix_bars};
use crate::map_overlay::format_intensity;

#[derive(Debug, Clone, PartialEq)]
pub struct RegionDetail {
    pub region_id: RegionId,
    pub heading: String,
    pub intensity_text: String,
    pub tier: SeverityTier,
    pub dno_region: String,
    /// Empty when every fuel share is zero; the chart is then omitted.
    pub generation_mix: Vec<MixBar>,
}

impl RegionDetail {
    pub fn from_region(region: &Region) -> Self {
        Self {
            region_id: region.id,
            heading: region.shortname.clone(),
            intensity_text: format_intensity(region.forecast_intensity),
            tier: classify(region.forecast_intensity),
            dno_region: region.dno_region.clone(),
            generation_mix: generation_mix_bars(&region.generation_mix),
        }
    }
}
