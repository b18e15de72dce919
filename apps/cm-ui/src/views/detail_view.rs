use cm_app::charts::MIX_CHART_TITLE;
use cm_app::{MixBar, RegionDetail};
use egui_plot::{Bar, BarChart, Plot};

use crate::palette::tier_color;

#[derive(Default)]
pub struct DetailView;

impl DetailView {
    pub fn show(&mut self, ui: &mut egui::Ui, detail: &RegionDetail) {
        ui.heading(format!("📍 {}", detail.heading));

        ui.columns(2, |columns| {
            columns[0].label("Carbon Intensity");
            columns[0].label(egui::RichText::new(&detail.intensity_text).size(22.0).strong());
            columns[0].horizontal(|ui| {
                ui.label("Index:");
                ui.colored_label(tier_color(detail.tier), detail.tier.label());
            });
            columns[0].label(format!("DNO Region: {}", detail.dno_region));

            if !detail.generation_mix.is_empty() {
                columns[1].label("Generation Mix:");
                show_mix_chart(&mut columns[1], &detail.generation_mix);
            }
        });
    }
}

fn show_mix_chart(ui: &mut egui::Ui, mix: &[MixBar]) {
    let bars: Vec<Bar> = mix
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            Bar::new(i as f64, bar.percent)
                .width(0.6)
                .name(format!("{}: {:.1}%", bar.fuel, bar.percent))
        })
        .collect();

    let labels: Vec<String> = mix.iter().map(|b| b.fuel.clone()).collect();

    ui.label(MIX_CHART_TITLE);
    Plot::new("generation_mix")
        .height(300.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .include_y(0.0)
        .y_axis_label("Percentage (%)")
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Percentage"));
        });
}
