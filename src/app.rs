use eframe::egui;

use crate::state::ViewerState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct OrbitVisApp {
    pub state: ViewerState,
}

impl OrbitVisApp {
    pub fn new(state: ViewerState) -> Self {
        Self { state }
    }
}

impl eframe::App for OrbitVisApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: info + reset ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Right side panel: colour bar ----
        if !self.state.dataset.is_empty() {
            egui::SidePanel::right("color_bar")
                .default_width(90.0)
                .resizable(false)
                .show(ctx, |ui| {
                    panels::color_bar(ui, &self.state);
                });
        }

        // ---- Central panel: 3D plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_plot(ui, &mut self.state);
        });
    }
}
