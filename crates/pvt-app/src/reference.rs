//! Measured reference tables (lab or field Bo data) read from CSV.
//!
//! The format is deliberately plain: a header row followed by comma separated
//! rows. Cells are trimmed and may be wrapped in double quotes; quoted commas are
//! not supported. Blank lines, and rows whose pressure or FVF cell is empty, are
//! skipped.

use crate::error::{AppError, AppResult};
use std::path::Path;
use tracing::{debug, info};

/// One measured point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    /// Pressure [psia]
    pub pressure: f64,
    /// Oil formation volume factor [bbl/STB]
    pub fvf: f64,
}

/// Pressure/FVF pairs pulled from two named columns of a CSV file.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTable {
    /// Every header in the file, in file order
    pub headers: Vec<String>,
    pub pressure_column: String,
    pub fvf_column: String,
    pub points: Vec<ReferencePoint>,
}

impl ReferenceTable {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn pressures(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.pressure).collect()
    }

    pub fn fvf_values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.fvf).collect()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReferenceError {
    #[error("file has no header row")]
    Empty,

    #[error("columns '{pressure_column}' and '{fvf_column}' must be present (found: {available})")]
    MissingColumns {
        pressure_column: String,
        fvf_column: String,
        available: String,
    },

    #[error("line {line}: expected at least {expected} cells, found {found}")]
    ShortRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: column '{column}' value '{value}' is not a number")]
    InvalidNumber {
        line: usize,
        column: String,
        value: String,
    },
}

fn split_cells(line: &str) -> Vec<&str> {
    line.split(',')
        .map(|cell| cell.trim().trim_matches('"').trim())
        .collect()
}

fn parse_cell(cell: &str, line: usize, column: &str) -> Result<f64, ReferenceError> {
    cell.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ReferenceError::InvalidNumber {
            line,
            column: column.to_string(),
            value: cell.to_string(),
        })
}

/// Parse CSV text into a reference table.
///
/// Column names are matched exactly after trimming. Line numbers in errors are
/// 1-based and count the header.
pub fn parse_reference_table(
    text: &str,
    pressure_column: &str,
    fvf_column: &str,
) -> Result<ReferenceTable, ReferenceError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header_line) = lines.next().ok_or(ReferenceError::Empty)?;
    let headers: Vec<String> = split_cells(header_line)
        .into_iter()
        .map(str::to_string)
        .collect();

    let pressure_column = pressure_column.trim();
    let fvf_column = fvf_column.trim();
    let position = |name: &str| headers.iter().position(|h| h == name);
    let (pressure_idx, fvf_idx) = match (position(pressure_column), position(fvf_column)) {
        (Some(p), Some(f)) => (p, f),
        _ => {
            return Err(ReferenceError::MissingColumns {
                pressure_column: pressure_column.to_string(),
                fvf_column: fvf_column.to_string(),
                available: headers.join(", "),
            });
        }
    };
    let needed = pressure_idx.max(fvf_idx) + 1;

    let mut points = Vec::new();
    for (line_no, line) in lines {
        let cells = split_cells(line);
        if cells.len() < needed {
            return Err(ReferenceError::ShortRow {
                line: line_no,
                expected: needed,
                found: cells.len(),
            });
        }

        let (p_cell, fvf_cell) = (cells[pressure_idx], cells[fvf_idx]);
        if p_cell.is_empty() || fvf_cell.is_empty() {
            debug!(line = line_no, "skipping reference row with a blank cell");
            continue;
        }

        points.push(ReferencePoint {
            pressure: parse_cell(p_cell, line_no, pressure_column)?,
            fvf: parse_cell(fvf_cell, line_no, fvf_column)?,
        });
    }

    Ok(ReferenceTable {
        headers,
        pressure_column: pressure_column.to_string(),
        fvf_column: fvf_column.to_string(),
        points,
    })
}

/// Read a reference CSV file and pull out the two named columns.
pub fn load_reference_table(
    path: &Path,
    pressure_column: &str,
    fvf_column: &str,
) -> AppResult<ReferenceTable> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::ReferenceFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let table = parse_reference_table(&text, pressure_column, fvf_column).map_err(|source| {
        AppError::Reference {
            path: path.to_path_buf(),
            source,
        }
    })?;

    info!(
        path = %path.display(),
        points = table.len(),
        "loaded reference table"
    );
    Ok(table)
}
