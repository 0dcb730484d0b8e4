use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::config::{AXES, SLIDERS, TEXT_FIELDS};
use crate::state::{ControlChange, Dashboard};

// ---------------------------------------------------------------------------
// Widget-side control values
// ---------------------------------------------------------------------------

/// Values the widgets edit in place.  Kept apart from the dashboard so the
/// text fields can hold untrimmed input while the user types.
pub struct ControlPanel {
    sliders: [f64; 5],
    texts: [String; 2],
    axes: [String; 2],
}

impl ControlPanel {
    /// Mirror the dashboard's current control values.
    pub fn from_dashboard(dashboard: &Dashboard) -> Self {
        let filter = dashboard.filter();
        ControlPanel {
            sliders: SLIDERS.map(|def| filter.bound(def.id)),
            texts: TEXT_FIELDS.map(|def| filter.pattern(def.id).to_string()),
            axes: AXES.map(|def| dashboard.axis(def.id).to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Left side panel – filter and axis controls
// ---------------------------------------------------------------------------

/// Render the control panel and return the changes made this frame, one
/// per edited control.
pub fn side_panel(ui: &mut Ui, panel: &mut ControlPanel, axis_labels: &[&'static str]) -> Vec<ControlChange> {
    let mut changes = Vec::new();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (def, value) in SLIDERS.iter().zip(panel.sliders.iter_mut()) {
                ui.label(def.title);
                let slider = egui::Slider::new(value, def.start..=def.end).step_by(def.step);
                if ui.add(slider).changed() {
                    changes.push(ControlChange::Slider(def.id, *value));
                }
                ui.add_space(4.0);
            }
            ui.separator();

            for (def, text) in TEXT_FIELDS.iter().zip(panel.texts.iter_mut()) {
                ui.label(def.title);
                if ui.text_edit_singleline(text).changed() {
                    changes.push(ControlChange::Text(def.id, text.clone()));
                }
                ui.add_space(4.0);
            }
            ui.separator();

            for (def, selected) in AXES.iter().zip(panel.axes.iter_mut()) {
                ui.strong(def.title);
                egui::ComboBox::from_id_salt(def.title)
                    .selected_text(selected.as_str())
                    .width(ui.available_width())
                    .show_ui(ui, |ui: &mut Ui| {
                        for &label in axis_labels {
                            let is_current = selected.as_str() == label;
                            if ui.selectable_label(is_current, label).clicked() && !is_current {
                                *selected = label.to_string();
                                changes.push(ControlChange::Axis(def.id, label.to_string()));
                            }
                        }
                    });
                ui.add_space(4.0);
            }
        });

    changes
}

// ---------------------------------------------------------------------------
// Top bar – description and dataset summary
// ---------------------------------------------------------------------------

/// Render the description fragment and the row counts.
pub fn top_bar(ui: &mut Ui, dashboard: &Dashboard, description: &str) {
    egui::CollapsingHeader::new(RichText::new("About this dataset").strong())
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ScrollArea::vertical()
                .max_height(160.0)
                .show(ui, |ui: &mut Ui| {
                    ui.label(description);
                });
        });

    if dashboard.dataset().is_empty() {
        ui.colored_label(egui::Color32::RED, "The dataset contains no countries.");
    } else {
        ui.label(format!(
            "{} countries loaded, {} shown",
            dashboard.dataset().len(),
            dashboard.view().source.len()
        ));
    }
}
