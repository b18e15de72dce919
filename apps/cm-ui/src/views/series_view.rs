use chrono::DateTime;
use cm_app::{SeriesChart, format_intensity};
use cm_app::charts::INTENSITY_AXIS_LABEL;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::palette::tier_color;

#[derive(Default)]
pub struct SeriesView;

impl SeriesView {
    pub fn show(&mut self, ui: &mut egui::Ui, chart: &SeriesChart) {
        ui.label(egui::RichText::new(&chart.title).strong());
        if let Some(peak) = chart.peak() {
            ui.label(format!(
                "Peak: {} at {} UTC",
                format_intensity(peak.intensity),
                peak.time.format("%H:%M")
            ));
        }

        // x is seconds since the epoch so grid marks can be printed as clock times.
        let points: Vec<[f64; 2]> = chart
            .samples
            .iter()
            .map(|s| [s.time.timestamp() as f64, s.intensity])
            .collect();

        let color = tier_color(chart.marker_tier);
        let line = Line::new(PlotPoints::from(points.clone()))
            .width(3.0)
            .name("Forecast");
        let markers = Points::new(points).radius(3.0).color(color);

        Plot::new("region_series")
            .height(280.0)
            .legend(Legend::default())
            .x_axis_label("Time")
            .y_axis_label(INTENSITY_AXIS_LABEL)
            .x_axis_formatter(|mark, _range| {
                DateTime::from_timestamp(mark.value as i64, 0)
                    .map(|t| t.format("%H:%M").to_string())
                    .unwrap_or_default()
            })
            .label_formatter(|_name, value| {
                let time = DateTime::from_timestamp(value.x as i64, 0)
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default();
                format!("{time}\n{:.0} gCO₂/kWh", value.y)
            })
            .show(ui, |plot_ui| {
                plot_ui.line(line);
                plot_ui.points(markers);
            });
    }
}
