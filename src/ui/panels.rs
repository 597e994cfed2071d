use eframe::egui::{self, RichText, Sense, Ui};

use crate::state::ViewerState;

const COLOR_BAR_STEPS: usize = 64;
const COLOR_BAR_WIDTH: f32 = 24.0;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar: source, sample count, scalar range, reset.
pub fn top_bar(ui: &mut Ui, state: &mut ViewerState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new(state.source.display().to_string()).strong());

        ui.separator();

        ui.label(format!("{} samples", state.dataset.len()));

        if let Some((lo, hi)) = state.dataset.scalar_range() {
            ui.separator();
            ui.label(format!("scalar {lo:.4} … {hi:.4}"));
        }

        ui.separator();

        if ui.button("Reset view").clicked() {
            state.reset_view();
        }

        ui.label(
            RichText::new(format!(
                "az {:.0}°  el {:.0}°",
                state.camera.azimuth.to_degrees(),
                state.camera.elevation.to_degrees()
            ))
            .weak(),
        );
    });
}

// ---------------------------------------------------------------------------
// Colour bar
// ---------------------------------------------------------------------------

/// Vertical gradient legend, dark (max) at the top.
pub fn color_bar(ui: &mut Ui, state: &ViewerState) {
    let (lo, hi) = state.color_scale.range();

    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong("Scalar");
        ui.label(format!("{hi:.4}"));

        let height = (ui.available_height() - 24.0).max(40.0);
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(COLOR_BAR_WIDTH, height), Sense::hover());
        let painter = ui.painter();
        let step_h = rect.height() / COLOR_BAR_STEPS as f32;
        for (i, color) in state
            .color_scale
            .steps(COLOR_BAR_STEPS)
            .into_iter()
            .rev()
            .enumerate()
        {
            let top = rect.top() + i as f32 * step_h;
            let cell = egui::Rect::from_min_max(
                egui::pos2(rect.left(), top),
                egui::pos2(rect.right(), top + step_h + 0.5),
            );
            painter.rect_filled(cell, 0.0, color);
        }

        ui.label(format!("{lo:.4}"));
    });
}
