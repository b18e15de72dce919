use chrono::Utc;
use cm_api::CarbonIntensityClient;
use cm_app::{
    AppConfig, LegendEntry, NOTHING_SELECTED_PROMPT, NoticeKind, RenderFrame,
    SNAPSHOT_FAILED_MESSAGE, Session, TimeSelection,
};

use crate::palette::{ERROR_COLOR, WARNING_COLOR};
use crate::views::{ControlsView, DetailView, MapView, SeriesView};

pub struct CarbonMapApp {
    config: AppConfig,
    client: Result<CarbonIntensityClient, String>,
    session: Session,
    legend: Vec<LegendEntry>,
    needs_refresh: bool,
    controls_view: ControlsView,
    map_view: MapView,
    detail_view: DetailView,
    series_view: SeriesView,
}

impl CarbonMapApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let client = CarbonIntensityClient::new(&config.api).map_err(|e| {
            tracing::error!(error = %e, "could not create API client");
            e.to_string()
        });
        let session = Session::new(TimeSelection::live(Utc::now()), config.map.center());

        Self {
            config,
            client,
            session,
            legend: cm_app::legend(),
            needs_refresh: true,
            controls_view: ControlsView,
            map_view: MapView,
            detail_view: DetailView,
            series_view: SeriesView,
        }
    }

    fn refresh(&mut self) {
        self.needs_refresh = false;
        if let Ok(client) = &self.client {
            self.session.refresh(client, Utc::now());
        }
    }

    fn load_time_series(&mut self) {
        if let Ok(client) = &self.client {
            self.session.load_time_series(client, Utc::now());
        }
    }

    fn show_notices(ui: &mut egui::Ui, frame: &RenderFrame) {
        for notice in &frame.notices {
            let color = match notice.kind {
                NoticeKind::TransportError => ERROR_COLOR,
                NoticeKind::EmptyResult => WARNING_COLOR,
            };
            ui.colored_label(color, &notice.message);
        }
    }
}

impl eframe::App for CarbonMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.needs_refresh {
            self.refresh();
        }

        let frame = self.session.frame();

        let controls = egui::SidePanel::left("controls")
            .default_width(240.0)
            .show(ctx, |ui| {
                self.controls_view.show(
                    ui,
                    self.session.selection(),
                    frame.selected_time,
                    &self.legend,
                )
            })
            .inner;

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Data Source:");
                ui.hyperlink_to("UK Carbon Intensity API", "https://carbonintensity.org.uk/");
                ui.separator();
                ui.label("Real-time data from National Grid ESO");
            });
        });

        let mut load_series = false;
        egui::SidePanel::right("details")
            .default_width(420.0)
            .show(ctx, |ui| {
                ui.heading("📊 Region Details");
                egui::ScrollArea::vertical().show(ui, |ui| match &frame.detail {
                    Some(detail) => {
                        self.detail_view.show(ui, detail);
                        ui.separator();
                        ui.heading("📈 Time Series Analysis");
                        if ui.button("Load Time Series (Last 24 Hours)").clicked() {
                            load_series = true;
                        }
                        if let Some(chart) = &frame.series {
                            self.series_view.show(ui, chart);
                        }
                    }
                    None => {
                        ui.label(format!("👆 {}", NOTHING_SELECTED_PROMPT));
                    }
                });
            });

        let mut clicked = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("🌱 UK Carbon Intensity Map");
            ui.label("Interactive visualization of carbon intensity across UK regions");
            ui.separator();

            if let Err(message) = &self.client {
                ui.colored_label(ERROR_COLOR, message);
            }
            Self::show_notices(ui, &frame);

            match &frame.overlay {
                Some(overlay) => {
                    ui.heading("🗺 Regional Carbon Intensity Map");
                    ui.label(overlay.period_label());
                    let selected = frame.detail.as_ref().map(|d| d.region_id);
                    clicked = self
                        .map_view
                        .show(ui, overlay, selected, &self.config.map);
                }
                None => {
                    ui.colored_label(ERROR_COLOR, SNAPSHOT_FAILED_MESSAGE);
                }
            }
        });

        // Apply interactions after drawing; each triggers at most one request.
        if let Some(selection) = controls.selection
            && self.session.set_selection(selection, Utc::now())
        {
            self.needs_refresh = true;
        }
        if controls.refresh {
            self.needs_refresh = true;
        }
        if let Some(point) = clicked {
            self.session.click(point);
        }
        if load_series {
            self.load_time_series();
        }
        if self.needs_refresh {
            ctx.request_repaint();
        }
    }
}
