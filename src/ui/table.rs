use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Filtered-row table
// ---------------------------------------------------------------------------

const HEADERS: [&str; 6] = [
    "Date",
    "Sales (¥)",
    "Orders",
    "Avg order value (¥)",
    "Category",
    "Region",
];

/// Tabular dump of the rows in the current view.
pub fn data_table(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };
    let view = &state.visible_indices;

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().at_least(70.0), HEADERS.len())
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, view.len(), |mut row| {
                let record = &dataset.records[view[row.index()]];
                row.col(|ui| {
                    ui.label(record.date.to_string());
                });
                row.col(|ui| {
                    ui.label(format!("{:.2}", record.sales_amount));
                });
                row.col(|ui| {
                    ui.label(record.order_count.to_string());
                });
                row.col(|ui| {
                    ui.label(format!("{:.2}", record.avg_order_value));
                });
                row.col(|ui| {
                    ui.label(&record.category);
                });
                row.col(|ui| {
                    ui.label(&record.region);
                });
            });
        });
}
