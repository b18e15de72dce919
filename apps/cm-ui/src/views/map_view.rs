use cm_app::{MapConfig, MapOverlay};
use cm_core::{LatLon, RegionId};
use egui::{Color32, RichText};
use egui_plot::{Plot, PlotPoint, Points, Text};

use crate::palette::tier_color;

/// Regional map drawn on a lon/lat plot; x is longitude, y is latitude.
#[derive(Default)]
pub struct MapView;

impl MapView {
    /// Draws the markers and returns the map coordinate of a click, if any.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        overlay: &MapOverlay,
        selected: Option<RegionId>,
        config: &MapConfig,
    ) -> Option<LatLon> {
        let center = overlay.center;
        let half_span = config.span_deg / 2.0;
        // One degree of longitude is shorter than one of latitude this far north.
        let aspect = 1.0 / center.lat.to_radians().cos();
        let radius = config.marker_radius;

        let plot_response = Plot::new("uk_map")
            .height(500.0)
            .data_aspect(aspect as f32)
            .include_x(center.lon - half_span)
            .include_x(center.lon + half_span)
            .include_y(center.lat - half_span)
            .include_y(center.lat + half_span)
            .x_axis_label("Longitude")
            .y_axis_label("Latitude")
            .show_grid(false)
            .label_formatter(|name, value| {
                if name.is_empty() {
                    format!("{:.2}, {:.2}", value.y, value.x)
                } else {
                    name.to_string()
                }
            })
            .show(ui, |plot_ui| {
                for marker in &overlay.markers {
                    let position = [marker.position.lon, marker.position.lat];
                    let is_selected = selected == Some(marker.region_id);

                    plot_ui.points(
                        Points::new(vec![position])
                            .radius(radius + 2.0)
                            .color(if is_selected {
                                Color32::BLACK
                            } else {
                                Color32::WHITE
                            }),
                    );
                    plot_ui.points(
                        Points::new(vec![position])
                            .radius(radius)
                            .color(tier_color(marker.tier).gamma_multiply(0.8))
                            .name(&marker.tooltip),
                    );

                    if is_selected {
                        plot_ui.text(Text::new(
                            PlotPoint::new(marker.position.lon, marker.position.lat + 0.9),
                            RichText::new(marker.popup.join("\n")).strong(),
                        ));
                    }
                }
                plot_ui.pointer_coordinate()
            });

        if plot_response.response.clicked() {
            plot_response
                .inner
                .map(|point| LatLon::new(point.y, point.x))
        } else {
            None
        }
    }
}
