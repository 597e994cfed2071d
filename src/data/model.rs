// ---------------------------------------------------------------------------
// Sample – one row of the input file
// ---------------------------------------------------------------------------

/// A single data point: the scalar used for colouring plus its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub scalar: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Sample {
    pub fn new(scalar: f64, x: f64, y: f64, z: f64) -> Self {
        Self { scalar, x, y, z }
    }

    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Whether all three coordinates are finite.
    pub fn has_finite_position(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

// ---------------------------------------------------------------------------
// Bounds – axis-aligned box around the positions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Bounds {
    pub fn center(&self) -> [f64; 3] {
        [
            (self.min[0] + self.max[0]) * 0.5,
            (self.min[1] + self.max[1]) * 0.5,
            (self.min[2] + self.max[2]) * 0.5,
        ]
    }

    /// Extent along each axis.
    pub fn size(&self) -> [f64; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded file
// ---------------------------------------------------------------------------

/// All samples of one input file, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `(min, max)` of the finite scalars, `None` if there are none.
    pub fn scalar_range(&self) -> Option<(f64, f64)> {
        self.samples
            .iter()
            .map(|s| s.scalar)
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Axis-aligned bounds of the finite positions, `None` if there are none.
    pub fn bounds(&self) -> Option<Bounds> {
        self.samples
            .iter()
            .filter(|s| s.has_finite_position())
            .map(Sample::position)
            .fold(None, |acc, p| match acc {
                None => Some(Bounds { min: p, max: p }),
                Some(mut b) => {
                    for axis in 0..3 {
                        b.min[axis] = b.min[axis].min(p[axis]);
                        b.max[axis] = b.max[axis].max(p[axis]);
                    }
                    Some(b)
                }
            })
    }
}
