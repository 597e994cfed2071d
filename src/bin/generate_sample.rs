//! Writes a Keplerian orbit trace in the viewer's input format:
//! `<true anomaly> <x> <y> <z>` per line.

use std::f64::consts::TAU;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "generate_sample")]
#[command(about = "Write a sample orbit trace for orbit-vis", long_about = None)]
struct Cli {
    /// Output file.
    #[arg(default_value = "data.txt")]
    out: PathBuf,

    /// JSON file with orbital elements; missing fields use Earth-like defaults.
    elements: Option<PathBuf>,
}

/// Classical orbital elements. Angles in radians, distance in AU.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct Elements {
    semi_major_axis: f64,
    eccentricity: f64,
    inclination: f64,
    ascending_node: f64,
    argument: f64,
    /// Number of steps around the orbit; `resolution + 1` rows are written.
    resolution: usize,
}

impl Default for Elements {
    fn default() -> Self {
        Elements {
            semi_major_axis: 1.0,
            eccentricity: 0.0167,
            inclination: 0.0,
            ascending_node: 0.0,
            argument: 0.0,
            resolution: 5000,
        }
    }
}

impl Elements {
    fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.eccentricity) {
            bail!("eccentricity must be in [0, 1), got {}", self.eccentricity);
        }
        if self.semi_major_axis <= 0.0 {
            bail!("semi_major_axis must be positive, got {}", self.semi_major_axis);
        }
        if self.resolution == 0 {
            bail!("resolution must be at least 1");
        }
        Ok(())
    }

    /// Position at true anomaly `v`.
    fn position(&self, v: f64) -> [f64; 3] {
        let e = self.eccentricity;
        let r = self.semi_major_axis * (1.0 - e * e) / (1.0 + e * v.cos());
        let (px, py) = (r * v.cos(), r * v.sin());

        let (so, co) = self.ascending_node.sin_cos();
        let (si, ci) = self.inclination.sin_cos();
        let (sw, cw) = self.argument.sin_cos();

        let x = px * (co * cw - so * sw * ci) - py * (co * sw + so * cw * ci);
        let y = px * (so * cw + co * sw * ci) + py * (co * cw * ci - so * sw);
        let z = px * (sw * si) + py * (cw * si);
        [x, y, z]
    }
}

#[derive(Debug, Serialize)]
struct Row {
    scalar: f64,
    x: f64,
    y: f64,
    z: f64,
}

fn trace(elements: &Elements) -> Vec<Row> {
    let step = TAU / elements.resolution as f64;
    (0..=elements.resolution)
        .map(|i| {
            let v = step * i as f64;
            let [x, y, z] = elements.position(v);
            Row { scalar: v, x, y, z }
        })
        .collect()
}

fn write_rows<W: Write>(out: W, rows: &[Row]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_writer(out);
    for row in rows {
        writer.serialize(row).context("writing row")?;
    }
    writer.flush().context("flushing output")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let elements = match &cli.elements {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<Elements>(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => Elements::default(),
    };
    elements.validate()?;
    log::debug!("orbital elements: {elements:?}");

    let rows = trace(&elements);
    let file = std::fs::File::create(&cli.out)
        .with_context(|| format!("creating {}", cli.out.display()))?;
    write_rows(file, &rows)?;

    println!("Wrote {} samples to {}", rows.len(), cli.out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radius(p: [f64; 3]) -> f64 {
        (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt()
    }

    #[test]
    fn test_row_count_is_resolution_plus_one() {
        let elements = Elements {
            resolution: 16,
            ..Elements::default()
        };
        let rows = trace(&elements);
        assert_eq!(rows.len(), 17);
        assert_eq!(rows[0].scalar, 0.0);
        assert!((rows[16].scalar - TAU).abs() < 1e-12);
    }

    #[test]
    fn test_circular_orbit_has_constant_radius() {
        let elements = Elements {
            semi_major_axis: 2.5,
            eccentricity: 0.0,
            inclination: 0.4,
            ascending_node: 1.1,
            argument: 0.3,
            resolution: 64,
        };
        for row in trace(&elements) {
            assert!((radius([row.x, row.y, row.z]) - 2.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_flat_orbit_stays_in_plane() {
        let elements = Elements {
            eccentricity: 0.5,
            resolution: 32,
            ..Elements::default()
        };
        for row in trace(&elements) {
            assert!(row.z.abs() < 1e-12);
        }
        // Periapsis at v = 0.
        let p = elements.position(0.0);
        assert!((radius(p) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_written_rows_are_four_space_separated_numbers() {
        let elements = Elements {
            resolution: 8,
            ..Elements::default()
        };
        let rows = trace(&elements);
        let mut buf = Vec::new();
        write_rows(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        for (line, row) in lines.iter().zip(&rows) {
            let values: Vec<f64> = line.split(' ').map(|t| t.parse().unwrap()).collect();
            assert_eq!(values, vec![row.scalar, row.x, row.y, row.z]);
        }
    }

    #[test]
    fn test_elements_json_uses_defaults_for_missing_fields() {
        let elements: Elements = serde_json::from_str(r#"{ "eccentricity": 0.2 }"#).unwrap();
        assert_eq!(elements.eccentricity, 0.2);
        assert_eq!(elements.semi_major_axis, 1.0);
        assert_eq!(elements.resolution, 5000);
    }

    #[test]
    fn test_rejects_hyperbolic_orbit() {
        let elements = Elements {
            eccentricity: 1.2,
            ..Elements::default()
        };
        assert!(elements.validate().is_err());
    }
}
