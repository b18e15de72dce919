use cm_core::SeverityTier;
use egui::Color32;

pub fn tier_color(tier: SeverityTier) -> Color32 {
    let [r, g, b] = tier.rgb();
    Color32::from_rgb(r, g, b)
}

pub const ERROR_COLOR: Color32 = Color32::from_rgb(220, 50, 50);
pub const WARNING_COLOR: Color32 = Color32::from_rgb(230, 160, 20);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_colours_are_distinct() {
        let colours: Vec<Color32> = SeverityTier::ALL.into_iter().map(tier_color).collect();
        for (i, a) in colours.iter().enumerate() {
            for b in &colours[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
