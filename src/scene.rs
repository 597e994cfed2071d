use eframe::egui::Color32;

use crate::color::ColorScale;
use crate::data::model::Dataset;
use crate::projection::{Camera, Normalizer, cube_edges};

/// Neutral colour of the connecting line.
pub const LINE_COLOR: Color32 = Color32::from_rgb(0x80, 0x80, 0x80);

/// Colour of the bounding-box frame.
pub const FRAME_COLOR: Color32 = Color32::from_rgb(0xb0, 0xb0, 0xb0);

// ---------------------------------------------------------------------------
// Scene – projected 2D primitives for one camera pose
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub pos: [f64; 2],
    pub depth: f64,
    pub color: Color32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Line strip through every plottable sample, in file order.
    pub line: Vec<[f64; 2]>,
    /// Scatter markers sorted back to front.
    pub markers: Vec<Marker>,
    /// Edges of the bounding box.
    pub frame: Vec<[[f64; 2]; 2]>,
}

impl Scene {
    /// Project the dataset through `camera`. Samples with a non-finite
    /// coordinate are left out; if none remain the scene is empty.
    pub fn build(dataset: &Dataset, camera: &Camera, scale: &ColorScale) -> Self {
        let Some(bounds) = dataset.bounds() else {
            return Scene::default();
        };
        let normalizer = Normalizer::new(&bounds);

        let mut line = Vec::with_capacity(dataset.len());
        let mut markers = Vec::with_capacity(dataset.len());
        let mut skipped = 0usize;
        for sample in dataset.samples() {
            if !sample.has_finite_position() {
                skipped += 1;
                continue;
            }
            let p = normalizer.apply(sample.position());
            let pos = camera.project(p);
            line.push(pos);
            markers.push(Marker {
                pos,
                depth: camera.depth(p),
                color: scale.color_for(sample.scalar),
            });
        }
        if skipped > 0 {
            log::warn!("{skipped} samples with non-finite coordinates not drawn");
        }
        // Painter's order: furthest first. Stable, so ties keep file order.
        markers.sort_by(|a, b| b.depth.total_cmp(&a.depth));

        let frame = cube_edges()
            .into_iter()
            .map(|(a, b)| [camera.project(a), camera.project(b)])
            .collect();

        Scene {
            line,
            markers,
            frame,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }
}
