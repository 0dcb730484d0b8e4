use eframe::egui::Ui;
use egui_plot::{MarkerShape, Plot, PlotPoints, Points};

use crate::color::to_color32;
use crate::state::PlotView;

/// Scatter marker radius in points.
const MARKER_RADIUS: f32 = 3.5;

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the filtered countries as a scatter plot.
pub fn scatter_plot(ui: &mut Ui, view: &PlotView) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&view.title);
        if view.source.is_empty() {
            ui.weak("No country matches the current filters.");
        }
    });

    let source = &view.source;

    Plot::new("percolation_plot")
        .x_axis_label(view.x_title.clone())
        .y_axis_label(view.y_title.clone())
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("Country: {name}\nx = {:.3}\ny = {:.3}", value.x, value.y)
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // One item per country so hovering names the point.
            for i in 0..source.len() {
                let points: PlotPoints = std::iter::once([source.x[i], source.y[i]]).collect();
                let marker = Points::new(points)
                    .name(&source.label[i])
                    .color(to_color32(source.color[i], source.alpha[i]))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(MARKER_RADIUS);

                plot_ui.points(marker);
            }
        });
}
