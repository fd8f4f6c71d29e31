//! Sampled scalar fields on regular grids.
//!
//! A [`GridField`] stores one scalar value per grid point of an
//! N-dimensional rectangular lattice. Values are kept in a flat
//! row-major vector (last axis fastest) with per-axis origin and step,
//! so world coordinates and grid cells convert both ways in O(rank).
//!
//! Non-finite values mark impassable points: minimization and path
//! search never step onto them.

mod minimize;
mod parse;
mod smooth;

use crate::error::{Error, Result};

/// Scalar field sampled on a regular N-dimensional grid.
#[derive(Clone, Debug)]
pub struct GridField {
    /// Points per axis
    shape: Vec<usize>,
    /// World coordinate of grid point 0 along each axis
    origin: Vec<f64>,
    /// Grid spacing per axis
    step: Vec<f64>,
    /// Row-major flat offset multipliers per axis
    strides: Vec<usize>,
    /// Sample values, row-major
    values: Vec<f64>,
}

impl GridField {
    /// Create a field from raw parts.
    ///
    /// Fails when the axis descriptions disagree with each other or with
    /// the number of values, or when a step is not strictly positive.
    pub fn new(
        shape: Vec<usize>,
        origin: Vec<f64>,
        step: Vec<f64>,
        values: Vec<f64>,
    ) -> Result<Self> {
        if shape.is_empty() {
            return Err(Error::FieldLoad("field has no axes".to_string()));
        }
        if origin.len() != shape.len() || step.len() != shape.len() {
            return Err(Error::FieldLoad(format!(
                "axis count mismatch: {} shape, {} origin, {} step",
                shape.len(),
                origin.len(),
                step.len()
            )));
        }
        if shape.iter().any(|&n| n == 0) {
            return Err(Error::FieldLoad("zero-length axis".to_string()));
        }
        if step.iter().any(|&s| !s.is_finite() || s <= 0.0) {
            return Err(Error::FieldLoad("grid step must be positive".to_string()));
        }
        let expected: usize = shape.iter().product();
        if values.len() != expected {
            return Err(Error::FieldLoad(format!(
                "expected {} values for shape {:?}, got {}",
                expected,
                shape,
                values.len()
            )));
        }

        let strides = Self::strides_for(&shape);
        Ok(Self {
            shape,
            origin,
            step,
            strides,
            values,
        })
    }

    fn strides_for(shape: &[usize]) -> Vec<usize> {
        let mut strides = vec![1; shape.len()];
        for a in (0..shape.len().saturating_sub(1)).rev() {
            strides[a] = strides[a + 1] * shape[a + 1];
        }
        strides
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Points per axis.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// World coordinate of grid point 0 along each axis.
    pub fn origin(&self) -> &[f64] {
        &self.origin
    }

    /// Grid spacing per axis.
    pub fn step(&self) -> &[f64] {
        &self.step
    }

    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn values(&self) -> &[f64] {
        &self.values
    }

    /// Flat offset of a grid cell.
    #[inline]
    pub(crate) fn offset(&self, cell: &[usize]) -> usize {
        cell.iter()
            .zip(&self.strides)
            .map(|(c, s)| c * s)
            .sum()
    }

    /// Grid cell of a flat offset.
    pub(crate) fn cell_of(&self, offset: usize) -> Vec<usize> {
        let mut cell = Vec::with_capacity(self.rank());
        let mut rest = offset;
        for &stride in &self.strides {
            cell.push(rest / stride);
            rest %= stride;
        }
        cell
    }

    /// Value at a grid cell.
    #[inline]
    pub fn value(&self, cell: &[usize]) -> f64 {
        self.values[self.offset(cell)]
    }

    #[inline]
    pub(crate) fn value_at_offset(&self, offset: usize) -> f64 {
        self.values[offset]
    }

    /// Whether the grid point holds a finite value.
    #[inline]
    pub(crate) fn passable(&self, offset: usize) -> bool {
        self.values[offset].is_finite()
    }

    /// World coordinates of a grid cell.
    pub fn cell_to_world(&self, cell: &[usize]) -> Vec<f64> {
        cell.iter()
            .zip(self.origin.iter().zip(&self.step))
            .map(|(&c, (&o, &s))| o + c as f64 * s)
            .collect()
    }

    /// Grid cell nearest to world coordinates, clamped into the domain.
    ///
    /// Fails when the coordinate rank does not match the field.
    pub fn nearest_cell(&self, coords: &[f64]) -> Result<Vec<usize>> {
        if coords.len() != self.rank() {
            return Err(Error::Config(format!(
                "coordinate has {} axes but the surface has {}",
                coords.len(),
                self.rank()
            )));
        }
        Ok(coords
            .iter()
            .enumerate()
            .map(|(a, &c)| {
                let idx = ((c - self.origin[a]) / self.step[a]).round();
                idx.clamp(0.0, (self.shape[a] - 1) as f64) as usize
            })
            .collect())
    }

    /// World coordinates of the grid point nearest to `coords`.
    pub fn nearest_point(&self, coords: &[f64]) -> Result<Vec<f64>> {
        Ok(self.cell_to_world(&self.nearest_cell(coords)?))
    }

    /// Field value at the grid point nearest to `coords`.
    pub fn sample(&self, coords: &[f64]) -> Result<f64> {
        Ok(self.value(&self.nearest_cell(coords)?))
    }

    /// All in-bounds neighbors of a cell across the full 3^d - 1
    /// neighborhood.
    pub(crate) fn neighbors(&self, cell: &[usize]) -> Vec<Vec<usize>> {
        let rank = self.rank();
        let total = 3usize.pow(rank as u32);
        let mut out = Vec::with_capacity(total - 1);

        'combos: for code in 0..total {
            let mut rest = code;
            let mut neighbor = Vec::with_capacity(rank);
            let mut is_center = true;
            for a in 0..rank {
                let delta = (rest % 3) as isize - 1;
                rest /= 3;
                if delta != 0 {
                    is_center = false;
                }
                let idx = cell[a] as isize + delta;
                if idx < 0 || idx >= self.shape[a] as isize {
                    continue 'combos;
                }
                neighbor.push(idx as usize);
            }
            if !is_center {
                out.push(neighbor);
            }
        }
        out
    }

    /// Euclidean world distance between two cells.
    pub(crate) fn cell_distance(&self, a: &[usize], b: &[usize]) -> f64 {
        a.iter()
            .zip(b)
            .zip(&self.step)
            .map(|((&i, &j), &s)| {
                let d = (i as f64 - j as f64) * s;
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }
}
