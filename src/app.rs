use eframe::egui;

use crate::state::Dashboard;
use crate::ui::panels::{self, ControlPanel};
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PercolationApp {
    dashboard: Dashboard,
    panel: ControlPanel,
    axis_labels: Vec<&'static str>,
    description: String,
}

impl PercolationApp {
    pub fn new(dashboard: Dashboard, description: String) -> Self {
        Self {
            panel: ControlPanel::from_dashboard(&dashboard),
            axis_labels: dashboard.registry().labels(),
            dashboard,
            description,
        }
    }
}

impl eframe::App for PercolationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: description ----
        egui::TopBottomPanel::top("description").show(ctx, |ui| {
            panels::top_bar(ui, &self.dashboard, &self.description);
        });

        // ---- Left side panel: controls ----
        let changes = egui::SidePanel::left("control_panel")
            .default_width(320.0)
            .resizable(true)
            .show(ctx, |ui| panels::side_panel(ui, &mut self.panel, &self.axis_labels))
            .inner;

        for change in changes {
            if let Err(e) = self.dashboard.apply_change(change) {
                log::error!("Recompute failed: {e}");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
        }

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_plot(ui, self.dashboard.view());
        });
    }
}
