use std::path::PathBuf;

use crate::color::ColorScale;
use crate::data::model::Dataset;
use crate::projection::Camera;
use crate::scene::Scene;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
pub struct ViewerState {
    /// Where the dataset was read from (shown in the top bar).
    pub source: PathBuf,

    /// Samples in file order. Never changes after load.
    pub dataset: Dataset,

    /// Scalar → colour mapping over the dataset's scalar range.
    pub color_scale: ColorScale,

    /// Current view direction.
    pub camera: Camera,

    /// Projected primitives for `camera` (cached).
    pub scene: Scene,
}

impl ViewerState {
    pub fn new(source: PathBuf, dataset: Dataset) -> Self {
        if dataset.is_empty() {
            log::warn!("{} contains no samples", source.display());
        }
        let color_scale = ColorScale::greens(dataset.scalar_range());
        let camera = Camera::default();
        let scene = Scene::build(&dataset, &camera, &color_scale);
        Self {
            source,
            dataset,
            color_scale,
            camera,
            scene,
        }
    }

    /// Orbit the camera and re-project.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.camera.rotate(dx, dy);
        self.rebuild_scene();
    }

    /// Go back to the initial view.
    pub fn reset_view(&mut self) {
        log::debug!("resetting camera");
        self.camera = Camera::default();
        self.rebuild_scene();
    }

    fn rebuild_scene(&mut self) {
        self.scene = Scene::build(&self.dataset, &self.camera, &self.color_scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Sample;

    fn state() -> ViewerState {
        let ds = Dataset::from_samples(vec![
            Sample::new(0.5, 1.0, 2.0, 3.0),
            Sample::new(0.7, 1.5, 2.5, 3.5),
        ]);
        ViewerState::new(PathBuf::from("data.txt"), ds)
    }

    #[test]
    fn test_rotate_rebuilds_scene() {
        let mut st = state();
        let before = st.scene.clone();
        st.rotate(25.0, 0.0);
        assert_ne!(st.scene.line, before.line);
        assert_eq!(st.scene.markers.len(), 2);
    }

    #[test]
    fn test_reset_view_restores_default_projection() {
        let mut st = state();
        let initial = st.scene.clone();
        st.rotate(40.0, -15.0);
        st.reset_view();
        assert_eq!(st.camera, Camera::default());
        assert_eq!(st.scene, initial);
    }

    #[test]
    fn test_empty_dataset_state() {
        let st = ViewerState::new(PathBuf::from("empty.txt"), Dataset::default());
        assert!(st.scene.is_empty());
        assert_eq!(st.color_scale.range(), (0.0, 1.0));
    }
}
