use eframe::egui::{RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{charts, table};

// ---------------------------------------------------------------------------
// Central report view
// ---------------------------------------------------------------------------

/// Render the full report: metrics, charts, and the data table.
pub fn report_view(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view the report  (File → Open…)");
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Key metrics");
            metrics_row(ui, state);
            ui.separator();

            ui.heading("Daily sales trend");
            charts::trend_plot(ui, state);
            ui.separator();

            ui.heading("Category sales share");
            charts::category_pie(ui, &state.category_sales());
            ui.separator();

            ui.heading("Regional sales");
            charts::region_bars(ui, &state.region_sales());
            ui.separator();

            ui.heading("Data preview");
            table::data_table(ui, state);
        });
}

fn metrics_row(ui: &mut Ui, state: &AppState) {
    let Some(m) = state.metrics() else {
        return;
    };

    ui.columns(3, |cols| {
        metric(&mut cols[0], "Total sales", format!("¥{:.2}", m.total_sales));
        metric(&mut cols[1], "Total orders", m.total_orders.to_string());
        // NaN over an empty view renders as-is.
        metric(
            &mut cols[2],
            "Avg order value",
            format!("¥{:.2}", m.avg_order_value),
        );
    });
}

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.vertical(|ui: &mut Ui| {
        ui.weak(label);
        ui.label(RichText::new(value).heading().strong());
    });
}
