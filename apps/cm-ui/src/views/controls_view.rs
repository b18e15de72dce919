use chrono::{DateTime, NaiveTime, Timelike, Utc};
use cm_app::{LegendEntry, TimeSelection};
use egui_extras::DatePickerButton;

use crate::palette::tier_color;

/// Sidebar time controls. Edits a copy of the session's selection.
#[derive(Default)]
pub struct ControlsView;

#[derive(Debug, Default)]
pub struct ControlsActions {
    pub selection: Option<TimeSelection>,
    pub refresh: bool,
}

impl ControlsView {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        current: &TimeSelection,
        selected_time: Option<DateTime<Utc>>,
        legend: &[LegendEntry],
    ) -> ControlsActions {
        let mut actions = ControlsActions::default();
        let mut edited = current.clone();

        ui.heading("⚙ Controls");
        ui.checkbox(&mut edited.use_current_time, "Use current time");

        if !edited.use_current_time {
            ui.horizontal(|ui| {
                ui.label("Select date");
                ui.add(DatePickerButton::new(&mut edited.date));
            });

            let mut hour = edited.time.hour();
            let mut minute = edited.time.minute();
            ui.horizontal(|ui| {
                ui.label("Select time");
                ui.add(egui::DragValue::new(&mut hour).range(0..=23));
                ui.label(":");
                ui.add(egui::DragValue::new(&mut minute).range(0..=59));
            });
            if let Some(time) = NaiveTime::from_hms_opt(hour, minute, 0)
                && (time.hour() != edited.time.hour() || time.minute() != edited.time.minute())
            {
                edited.time = time;
            }
        }

        if let Some(t) = selected_time {
            ui.label(format!("Selected time: {} UTC", t.format("%Y-%m-%d %H:%M")));
        }

        if ui.button("Refresh").clicked() {
            actions.refresh = true;
        }

        if &edited != current {
            actions.selection = Some(edited);
        }

        ui.separator();
        ui.label(egui::RichText::new("Legend:").strong());
        for entry in legend {
            ui.horizontal(|ui| {
                ui.colored_label(tier_color(entry.tier), "⏺");
                ui.label(&entry.text);
            });
        }

        actions
    }
}
