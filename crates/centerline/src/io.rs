//! Comma-separated sample files.
//!
//! One sample per line, fields separated by commas, surrounding whitespace
//! ignored. Empty lines and lines starting with `#` are skipped. `nan` and
//! `inf` are rejected.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use aneurysm_types::Point3d;
use tracing::debug;

use crate::error::DataError;

/// A cross-sectional area measurement at a raw longitudinal coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaSample {
    pub z: f64,
    pub area: f64,
}

/// Load `x,y,z` centerline samples.
pub fn load_centerline(path: &Path) -> Result<Vec<Point3d>, DataError> {
    let rows = read_rows(path, 3, Some(3))?;
    debug!(path = %path.display(), samples = rows.len(), "loaded centerline");
    Ok(rows
        .into_iter()
        .map(|r| Point3d::new(r[0], r[1], r[2]))
        .collect())
}

/// Load `z,area` samples. Extra columns are ignored.
pub fn load_area_samples(path: &Path) -> Result<Vec<AreaSample>, DataError> {
    let rows = read_rows(path, 2, None)?;
    debug!(path = %path.display(), samples = rows.len(), "loaded area samples");
    Ok(rows
        .into_iter()
        .map(|r| AreaSample { z: r[0], area: r[1] })
        .collect())
}

/// Write points as `x,y,z` lines with six decimals.
pub fn write_centerline(path: &Path, points: &[Point3d]) -> Result<(), DataError> {
    let io_err = |source| DataError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    for p in points {
        writeln!(writer, "{:.6},{:.6},{:.6}", p.x, p.y, p.z).map_err(io_err)?;
    }
    writer.flush().map_err(io_err)
}

fn read_rows(
    path: &Path,
    min_columns: usize,
    max_columns: Option<usize>,
) -> Result<Vec<Vec<f64>>, DataError> {
    if !path.exists() {
        return Err(DataError::Missing {
            path: path.to_path_buf(),
        });
    }
    let io_err = |source| DataError::Io {
        path: path.to_path_buf(),
        source,
    };
    let reader = BufReader::new(File::open(path).map_err(io_err)?);

    let mut rows = Vec::new();
    let mut columns = None;
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(io_err)?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let malformed = |reason: String| DataError::Malformed {
            path: path.to_path_buf(),
            line: i + 1,
            reason,
        };

        let row = line
            .split(',')
            .map(|field| {
                let field = field.trim();
                match field.parse::<f64>() {
                    Ok(v) if v.is_finite() => Ok(v),
                    Ok(_) => Err(malformed(format!("non-finite number: {field:?}"))),
                    Err(_) => Err(malformed(format!("invalid number: {field:?}"))),
                }
            })
            .collect::<Result<Vec<f64>, DataError>>()?;

        if row.len() < min_columns || max_columns.is_some_and(|max| row.len() > max) {
            return Err(malformed(format!(
                "expected {} columns, got {}",
                min_columns,
                row.len()
            )));
        }
        match columns {
            None => columns = Some(row.len()),
            Some(c) if c != row.len() => {
                return Err(malformed(format!("expected {c} columns, got {}", row.len())));
            }
            Some(_) => {}
        }
        rows.push(row);
    }
    Ok(rows)
}
