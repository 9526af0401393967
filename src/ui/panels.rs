use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::DatePickerButton;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – date range filter
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(range) = state.range else {
        ui.label("No dataset loaded.");
        return;
    };

    ui.strong("Date range");
    ui.add_space(4.0);

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Start");
        let mut start = range.start;
        if ui
            .add(DatePickerButton::new(&mut start).id_salt("start_date"))
            .changed()
        {
            state.set_start(start);
        }
    });

    ui.horizontal(|ui: &mut Ui| {
        ui.label("End");
        let mut end = range.end;
        if ui
            .add(DatePickerButton::new(&mut end).id_salt("end_date"))
            .changed()
        {
            state.set_end(end);
        }
    });

    if range.start > range.end {
        ui.add_space(4.0);
        ui.label(
            RichText::new("Start is after end: nothing matches.").color(Color32::LIGHT_YELLOW),
        );
    }

    ui.add_space(4.0);
    if ui.button("Reset to full range").clicked() {
        state.reset_range();
    }

    ui.separator();
    if let Some(ds) = &state.dataset {
        ui.label(format!(
            "{} of {} rows in range",
            state.visible_indices.len(),
            ds.len()
        ));
        ui.label(format!("Data: {} – {}", ds.min_date, ds.max_date));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows loaded, {} in range",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open transaction data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
