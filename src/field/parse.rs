//! Surface file loading and saving.
//!
//! Text format, `#` starts a comment anywhere on a line:
//!
//! ```text
//! # rank
//! 2
//! # one "origin step count" line per axis
//! 0.0 0.5 41
//! 0.0 0.5 41
//! # then count_0 * count_1 * ... values, row-major (last axis fastest)
//! 1.2 1.1 0.9 ...
//! ```
//!
//! `nan` values are accepted and mark impassable grid points.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use super::GridField;
use crate::error::{Error, Result};

impl GridField {
    /// Load a surface from a text file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::FieldLoad(format!("{}: {}", path.display(), e)))?;
        let field = Self::from_text(&content)
            .map_err(|e| Error::FieldLoad(format!("{}: {}", path.display(), e)))?;
        debug!(
            "Loaded surface {} ({:?} grid points)",
            path.display(),
            field.shape()
        );
        Ok(field)
    }

    /// Parse a surface from text in the on-disk format.
    pub fn from_text(content: &str) -> std::result::Result<Self, String> {
        let mut tokens = content
            .lines()
            .map(|line| line.split('#').next().unwrap_or(""))
            .flat_map(|line| line.split_whitespace());

        let rank: usize = tokens
            .next()
            .ok_or("empty surface file")?
            .parse()
            .map_err(|_| "rank is not an integer".to_string())?;
        if rank == 0 {
            return Err("rank must be at least 1".to_string());
        }

        let mut origin = Vec::with_capacity(rank);
        let mut step = Vec::with_capacity(rank);
        let mut shape = Vec::with_capacity(rank);
        for axis in 0..rank {
            let mut next_f64 = |what: &str| -> std::result::Result<f64, String> {
                tokens
                    .next()
                    .ok_or_else(|| format!("axis {}: missing {}", axis, what))?
                    .parse::<f64>()
                    .map_err(|_| format!("axis {}: bad {}", axis, what))
            };
            origin.push(next_f64("origin")?);
            step.push(next_f64("step")?);
            let count = tokens
                .next()
                .ok_or_else(|| format!("axis {}: missing count", axis))?
                .parse::<usize>()
                .map_err(|_| format!("axis {}: bad count", axis))?;
            shape.push(count);
        }

        let expected: usize = shape.iter().product();
        let mut values = Vec::with_capacity(expected);
        for token in tokens {
            let v: f64 = token
                .parse()
                .map_err(|_| format!("bad value {:?}", token))?;
            values.push(v);
        }
        if values.len() != expected {
            return Err(format!(
                "expected {} values for shape {:?}, got {}",
                expected,
                shape,
                values.len()
            ));
        }

        GridField::new(shape, origin, step, values).map_err(|e| e.to_string())
    }

    /// Save the surface in the same text format `load` reads.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "{}", self.rank())?;
        for a in 0..self.rank() {
            writeln!(writer, "{} {} {}", self.origin()[a], self.step()[a], self.shape()[a])?;
        }

        // One row (innermost axis) per line
        let row_len = *self.shape().last().unwrap_or(&1);
        for row in self.values().chunks(row_len) {
            let mut line = String::with_capacity(row.len() * 8);
            for (i, v) in row.iter().enumerate() {
                if i > 0 {
                    line.push(' ');
                }
                let _ = write!(line, "{}", v);
            }
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        debug!("Saved surface to {}", path.display());
        Ok(())
    }
}
