use eframe::egui::{PointerButton, Ui};
use egui_plot::{Line, MarkerShape, Plot, PlotPoints, Points};

use crate::scene::{FRAME_COLOR, LINE_COLOR};
use crate::state::ViewerState;

const MARKER_RADIUS: f32 = 3.0;

// ---------------------------------------------------------------------------
// 3D scatter / line plot (central panel)
// ---------------------------------------------------------------------------

/// Render the projected scene. Dragging with the primary button orbits
/// the camera.
pub fn scatter_plot(ui: &mut Ui, state: &mut ViewerState) {
    if state.scene.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(format!("No plottable samples in {}", state.source.display()));
        });
        return;
    }

    let scene = &state.scene;

    let response = Plot::new("orbit_plot")
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for [a, b] in &scene.frame {
                let edge = Line::new(PlotPoints::from(vec![*a, *b]))
                    .color(FRAME_COLOR)
                    .width(0.5);
                plot_ui.line(edge);
            }

            let strip = Line::new(PlotPoints::from(scene.line.clone()))
                .color(LINE_COLOR)
                .width(1.0);
            plot_ui.line(strip);

            // One series per marker so each keeps its own colour; the
            // scene already ordered them back to front.
            for marker in &scene.markers {
                let point = Points::new(PlotPoints::from(vec![marker.pos]))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(MARKER_RADIUS)
                    .color(marker.color);
                plot_ui.points(point);
            }
        })
        .response;

    if response.dragged_by(PointerButton::Primary) {
        let delta = response.drag_delta();
        state.rotate(delta.x, delta.y);
    }
}
