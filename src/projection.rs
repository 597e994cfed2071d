//! Orthographic projection of dataset coordinates onto the screen plane.
//!
//! World points are first squeezed into a unit cube centred on the origin
//! (each axis scaled independently) so that all three axes get the same
//! share of the view regardless of their units.

use crate::data::model::Bounds;

/// Radians of rotation per dragged point.
const DRAG_SENSITIVITY: f64 = 0.01;

// ---------------------------------------------------------------------------
// Camera
// ---------------------------------------------------------------------------

/// Viewer position on a sphere around the cube, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub azimuth: f64,
    pub elevation: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            azimuth: (-60.0f64).to_radians(),
            elevation: 30.0f64.to_radians(),
        }
    }
}

impl Camera {
    /// Orbit the camera by a screen-space drag.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx as f64 * DRAG_SENSITIVITY;
        self.elevation = (self.elevation + dy as f64 * DRAG_SENSITIVITY)
            .clamp(-std::f64::consts::FRAC_PI_2, std::f64::consts::FRAC_PI_2);
    }

    /// Project onto the screen plane: `[right, up]`.
    pub fn project(&self, p: [f64; 3]) -> [f64; 2] {
        let (sa, ca) = self.azimuth.sin_cos();
        let (se, ce) = self.elevation.sin_cos();
        let [x, y, z] = p;
        [-x * sa + y * ca, -x * ca * se - y * sa * se + z * ce]
    }

    /// Distance along the view direction. Larger is further away.
    pub fn depth(&self, p: [f64; 3]) -> f64 {
        let (sa, ca) = self.azimuth.sin_cos();
        let (se, ce) = self.elevation.sin_cos();
        let [x, y, z] = p;
        -(x * ce * ca + y * ce * sa + z * se)
    }
}

// ---------------------------------------------------------------------------
// Unit cube normalisation
// ---------------------------------------------------------------------------

/// Maps dataset coordinates into `[-0.5, 0.5]³`.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    center: [f64; 3],
    inv_size: [f64; 3],
}

impl Normalizer {
    pub fn new(bounds: &Bounds) -> Self {
        let size = bounds.size();
        // A flat axis collapses onto the cube centre.
        let inv = |s: f64| if s.abs() < f64::EPSILON { 0.0 } else { 1.0 / s };
        Normalizer {
            center: bounds.center(),
            inv_size: [inv(size[0]), inv(size[1]), inv(size[2])],
        }
    }

    pub fn apply(&self, p: [f64; 3]) -> [f64; 3] {
        [
            (p[0] - self.center[0]) * self.inv_size[0],
            (p[1] - self.center[1]) * self.inv_size[1],
            (p[2] - self.center[2]) * self.inv_size[2],
        ]
    }
}

/// The 12 edges of the unit cube, as pairs of corners.
pub fn cube_edges() -> Vec<([f64; 3], [f64; 3])> {
    let corner = |i: usize| -> [f64; 3] {
        [
            if i & 1 == 0 { -0.5 } else { 0.5 },
            if i & 2 == 0 { -0.5 } else { 0.5 },
            if i & 4 == 0 { -0.5 } else { 0.5 },
        ]
    };
    let mut edges = Vec::with_capacity(12);
    for i in 0..8 {
        for bit in [1, 2, 4] {
            if i & bit == 0 {
                edges.push((corner(i), corner(i | bit)));
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_projects_to_origin() {
        let cam = Camera::default();
        assert_eq!(cam.project([0.0, 0.0, 0.0]), [0.0, 0.0]);
        assert_eq!(cam.depth([0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_top_down_view_keeps_xy_plane() {
        let cam = Camera {
            azimuth: -std::f64::consts::FRAC_PI_2,
            elevation: std::f64::consts::FRAC_PI_2,
        };
        let p = cam.project([1.0, 0.0, 5.0]);
        assert!((p[0] - 1.0).abs() < 1e-12);
        assert!(p[1].abs() < 1e-12);
    }

    #[test]
    fn test_points_toward_camera_are_nearer() {
        let cam = Camera::default();
        let (sa, ca) = cam.azimuth.sin_cos();
        let (se, ce) = cam.elevation.sin_cos();
        let toward = [ce * ca, ce * sa, se];
        assert!(cam.depth(toward) < cam.depth([0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_rotate_clamps_elevation() {
        let mut cam = Camera::default();
        cam.rotate(0.0, 10_000.0);
        assert_eq!(cam.elevation, std::f64::consts::FRAC_PI_2);
        cam.rotate(0.0, -10_000.0);
        assert_eq!(cam.elevation, -std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn test_normalizer_maps_bounds_to_unit_cube() {
        let bounds = Bounds {
            min: [0.0, -10.0, 5.0],
            max: [2.0, 10.0, 5.0],
        };
        let n = Normalizer::new(&bounds);
        assert_eq!(n.apply([0.0, -10.0, 5.0]), [-0.5, -0.5, 0.0]);
        assert_eq!(n.apply([2.0, 10.0, 5.0]), [0.5, 0.5, 0.0]);
    }

    #[test]
    fn test_cube_has_twelve_unit_edges() {
        let edges = cube_edges();
        assert_eq!(edges.len(), 12);
        for (a, b) in edges {
            let d: f64 = (0..3).map(|i| (a[i] - b[i]).abs()).sum();
            assert_eq!(d, 1.0);
        }
    }
}
