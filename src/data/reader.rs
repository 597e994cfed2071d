use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{Dataset, Sample};

/// Column names in file order, used in error messages.
const FIELDS: [&str; 4] = ["scalar", "x", "y", "z"];

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: missing '{field}' column (found {found} of 4 values)")]
    MissingField {
        line: usize,
        field: &'static str,
        found: usize,
    },

    #[error("line {line}: '{token}' is not a number (column '{field}')")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        token: String,
    },

    #[error("read failed after line {line}")]
    Io {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a dataset from a whitespace-separated text file.
///
/// Each non-blank line holds `<scalar> <x> <y> <z>`; anything after the
/// fourth value is ignored. The first malformed line aborts the load.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let dataset = parse_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;

    log::info!("Loaded {} samples from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Parse every line of `reader` into a [`Dataset`].
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Dataset, ParseError> {
    let mut samples = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ParseError::Io { line: idx, source })?;
        if let Some(sample) = parse_line(idx + 1, &line)? {
            samples.push(sample);
        }
    }

    Ok(Dataset::from_samples(samples))
}

/// Parse a single line. `line_no` is 1-based and only used for errors.
///
/// Blank lines yield `Ok(None)`.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Sample>, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().take(FIELDS.len()).collect();
    if tokens.is_empty() {
        return Ok(None);
    }
    if let Some(&field) = FIELDS.get(tokens.len()) {
        return Err(ParseError::MissingField {
            line: line_no,
            field,
            found: tokens.len(),
        });
    }

    let mut values = [0.0f64; 4];
    for ((slot, tok), field) in values.iter_mut().zip(&tokens).zip(FIELDS) {
        *slot = tok.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
            line: line_no,
            field,
            token: tok.to_string(),
        })?;
    }

    let [scalar, x, y, z] = values;
    Ok(Some(Sample::new(scalar, x, y, z)))
}
