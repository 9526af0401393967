use std::f32::consts::TAU;

use chrono::{Datelike, NaiveDate};
use eframe::egui::{Align2, Color32, FontId, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::color::generate_palette;
use crate::state::AppState;

const TREND_COLOR: Color32 = Color32::from_rgb(66, 133, 244);
/// Matches the classic "skyblue" used for regional bars.
const BAR_COLOR: Color32 = Color32::from_rgb(135, 206, 235);

fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

fn date_label(day: f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(day.round() as i32)
        .map(|d| d.to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Daily sales trend (line)
// ---------------------------------------------------------------------------

/// Line chart of sales over the filtered rows, one point per row.
pub fn trend_plot(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    let xy: Vec<[f64; 2]> = state
        .visible_indices
        .iter()
        .map(|&i| {
            let r = &dataset.records[i];
            [day_number(r.date), r.sales_amount]
        })
        .collect();

    Plot::new("sales_trend")
        .legend(Legend::default())
        .height(260.0)
        .x_axis_label("Date")
        .y_axis_label("Sales (¥)")
        .x_axis_formatter(|mark, _range| date_label(mark.value))
        .label_formatter(|name, point| {
            if name.is_empty() {
                format!("{}\n¥{:.2}", date_label(point.x), point.y)
            } else {
                format!("{name}\n{}\n¥{:.2}", date_label(point.x), point.y)
            }
        })
        .show(ui, |plot_ui| {
            let points: PlotPoints = xy.clone().into();
            plot_ui.line(Line::new(points).name("Sales").color(TREND_COLOR).width(1.5));
            plot_ui.points(Points::new(xy).color(TREND_COLOR).radius(2.5));
        });
}

// ---------------------------------------------------------------------------
// Category share (pie)
// ---------------------------------------------------------------------------

/// Pie chart of per-category sales.  Slice labels carry the absolute
/// currency amount recomputed from the share, mirroring the report style.
pub fn category_pie(ui: &mut Ui, slices: &[(String, f64)]) {
    let total: f64 = slices.iter().map(|(_, v)| v).sum();
    if slices.is_empty() || total <= 0.0 {
        ui.weak("No sales in the selected range.");
        return;
    }

    let side = ui.available_width().clamp(200.0, 340.0);
    let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());
    let rect = response.rect;
    let center = rect.center();
    let radius = rect.width().min(rect.height()) * 0.32;

    let palette = generate_palette(slices.len());
    let mut angle = -TAU / 4.0;

    for ((name, value), fill) in slices.iter().zip(palette) {
        let share = (value / total) as f32;
        let sweep = share * TAU;
        // Triangle fan keeps slices over 180° from degenerating.
        let steps = ((sweep / 0.05).ceil() as usize).max(2);
        for s in 0..steps {
            let a0 = angle + sweep * s as f32 / steps as f32;
            let a1 = angle + sweep * (s + 1) as f32 / steps as f32;
            painter.add(Shape::convex_polygon(
                vec![
                    center,
                    center + radius * Vec2::angled(a0),
                    center + radius * Vec2::angled(a1),
                ],
                fill,
                Stroke::new(1.0, fill),
            ));
        }

        let mid = angle + sweep / 2.0;
        // Absolute amount derived from the slice's share of the total.
        let amount = share as f64 * total;
        painter.text(
            center + radius * 0.62 * Vec2::angled(mid),
            Align2::CENTER_CENTER,
            format!("¥{amount:.2}"),
            FontId::proportional(11.0),
            Color32::BLACK,
        );
        painter.text(
            center + radius * 1.35 * Vec2::angled(mid),
            Align2::CENTER_CENTER,
            format!("{name} ({:.1}%)", share * 100.0),
            FontId::proportional(12.0),
            ui.visuals().text_color(),
        );

        angle += sweep;
    }
}

// ---------------------------------------------------------------------------
// Regional sales (bars)
// ---------------------------------------------------------------------------

/// Bar chart of per-region sales with a value label above each bar.
pub fn region_bars(ui: &mut Ui, totals: &[(String, f64)]) {
    if totals.is_empty() {
        ui.weak("No sales in the selected range.");
        return;
    }

    let bars: Vec<Bar> = totals
        .iter()
        .enumerate()
        .map(|(i, (name, value))| Bar::new(i as f64, *value).name(name).width(0.6))
        .collect();
    let max_value = totals.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    let names: Vec<String> = totals.iter().map(|(name, _)| name.clone()).collect();
    let labels: Vec<(usize, f64)> = totals.iter().map(|(_, v)| *v).enumerate().collect();

    Plot::new("region_sales")
        .height(260.0)
        .y_axis_label("Sales (¥)")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_y(0.0)
        .include_y(max_value * 1.15)
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if i < 0.0 || (mark.value - i).abs() > 0.3 {
                return String::new();
            }
            names.get(i as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(BAR_COLOR));
            for (i, value) in labels {
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(i as f64, value),
                        format!("¥{value:.2}"),
                    )
                    .anchor(Align2::CENTER_BOTTOM),
                );
            }
        });
}
