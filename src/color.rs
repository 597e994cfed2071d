use eframe::egui::Color32;
use palette::{IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Gradient stops
// ---------------------------------------------------------------------------

/// Sequential green ramp, light → dark (ColorBrewer "Greens", 9 classes).
const GREENS: [(u8, u8, u8); 9] = [
    (0xf7, 0xfc, 0xf5),
    (0xe5, 0xf5, 0xe0),
    (0xc7, 0xe9, 0xc0),
    (0xa1, 0xd9, 0x9b),
    (0x74, 0xc4, 0x76),
    (0x41, 0xab, 0x5d),
    (0x23, 0x8b, 0x45),
    (0x00, 0x6d, 0x2c),
    (0x00, 0x44, 0x1b),
];

fn to_linear((r, g, b): (u8, u8, u8)) -> LinSrgb {
    let srgb = Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    srgb.into_color()
}

fn to_color32(lin: LinSrgb) -> Color32 {
    let rgb: Srgb = lin.into_color();
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

// ---------------------------------------------------------------------------
// Continuous colour scale: scalar → Color32
// ---------------------------------------------------------------------------

/// Maps scalar values onto the green gradient, normalised over `[min, max]`.
#[derive(Debug, Clone)]
pub struct ColorScale {
    min: f64,
    max: f64,
    stops: Vec<LinSrgb>,
}

impl ColorScale {
    /// Build a scale spanning `range`. `None` (no finite scalars) gives a
    /// unit range so lookups still work.
    pub fn greens(range: Option<(f64, f64)>) -> Self {
        let (min, max) = range.unwrap_or((0.0, 1.0));
        ColorScale {
            min,
            max,
            stops: GREENS.iter().copied().map(to_linear).collect(),
        }
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Position of `value` on the gradient in `[0, 1]`.
    ///
    /// A degenerate range puts everything at the middle; NaN sits at 0.
    pub fn normalize(&self, value: f64) -> f32 {
        if value.is_nan() {
            return 0.0;
        }
        let span = self.max - self.min;
        if span.abs() < f64::EPSILON {
            return 0.5;
        }
        ((value - self.min) / span).clamp(0.0, 1.0) as f32
    }

    /// Colour at gradient position `t` (clamped to `[0, 1]`).
    pub fn sample(&self, t: f32) -> Color32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let segments = (self.stops.len() - 1) as f32;
        let pos = t * segments;
        let idx = (pos.floor() as usize).min(self.stops.len() - 2);
        let frac = pos - idx as f32;
        to_color32(self.stops[idx].mix(self.stops[idx + 1], frac))
    }

    /// Colour for a scalar value.
    pub fn color_for(&self, value: f64) -> Color32 {
        self.sample(self.normalize(value))
    }

    /// `n` evenly spaced colours from light to dark, for the colour bar.
    pub fn steps(&self, n: usize) -> Vec<Color32> {
        match n {
            0 => Vec::new(),
            1 => vec![self.sample(0.5)],
            _ => (0..n)
                .map(|i| self.sample(i as f32 / (n - 1) as f32))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luminance(c: Color32) -> u32 {
        c.r() as u32 + c.g() as u32 + c.b() as u32
    }

    #[test]
    fn test_endpoints_match_stops() {
        let scale = ColorScale::greens(Some((0.5, 0.7)));
        assert_eq!(scale.color_for(0.5), Color32::from_rgb(0xf7, 0xfc, 0xf5));
        assert_eq!(scale.color_for(0.7), Color32::from_rgb(0x00, 0x44, 0x1b));
    }

    #[test]
    fn test_gradient_darkens_monotonically() {
        let scale = ColorScale::greens(Some((0.0, 1.0)));
        let steps = scale.steps(32);
        for pair in steps.windows(2) {
            assert!(luminance(pair[0]) >= luminance(pair[1]));
        }
    }

    #[test]
    fn test_greens_are_green_dominant() {
        let scale = ColorScale::greens(Some((0.0, 1.0)));
        for c in scale.steps(10) {
            assert!(c.g() >= c.r() && c.g() >= c.b());
        }
    }

    #[test]
    fn test_degenerate_range_maps_to_middle() {
        let scale = ColorScale::greens(Some((3.0, 3.0)));
        assert_eq!(scale.normalize(3.0), 0.5);
        assert_eq!(scale.color_for(3.0), scale.sample(0.5));
    }

    #[test]
    fn test_out_of_range_and_nan_clamp() {
        let scale = ColorScale::greens(Some((0.0, 10.0)));
        assert_eq!(scale.normalize(-5.0), 0.0);
        assert_eq!(scale.normalize(50.0), 1.0);
        assert_eq!(scale.normalize(f64::NAN), 0.0);
    }

    #[test]
    fn test_steps_edge_counts() {
        let scale = ColorScale::greens(None);
        assert!(scale.steps(0).is_empty());
        assert_eq!(scale.steps(1).len(), 1);
        assert_eq!(scale.range(), (0.0, 1.0));
    }
}
