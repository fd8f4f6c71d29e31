//! Local and bounded-global minimization on grid fields.

use super::GridField;
use crate::config::AxisBounds;
use crate::error::{Error, Result};

impl GridField {
    /// Walk steepest descent from the grid point nearest `coords` until no
    /// neighbor holds a strictly lower value, and return that local
    /// minimum's world coordinates.
    ///
    /// The walk never steps onto non-finite grid points; a non-finite seed
    /// stays where it is.
    pub fn local_minimize(&self, coords: &[f64]) -> Result<Vec<f64>> {
        let mut current = self.nearest_cell(coords)?;
        let mut current_value = self.value(&current);

        loop {
            let mut best: Option<(Vec<usize>, f64)> = None;
            for neighbor in self.neighbors(&current) {
                let v = self.value(&neighbor);
                if !v.is_finite() {
                    continue;
                }
                if v < current_value && best.as_ref().map_or(true, |(_, bv)| v < *bv) {
                    best = Some((neighbor, v));
                }
            }
            match best {
                Some((cell, v)) => {
                    current = cell;
                    current_value = v;
                }
                None => break,
            }
        }

        Ok(self.cell_to_world(&current))
    }

    /// World coordinates of the lowest grid point inside a per-axis bounds
    /// box. An open side extends to the edge of the domain.
    ///
    /// Fails with [`Error::RegionEmpty`] when the box contains no grid
    /// points, or only non-finite ones.
    pub fn global_minimize(&self, bounds: &[AxisBounds]) -> Result<Vec<f64>> {
        if bounds.len() != self.rank() {
            return Err(Error::Config(format!(
                "range has {} axes but the surface has {}",
                bounds.len(),
                self.rank()
            )));
        }

        // Per-axis index windows; empty on any axis means empty region.
        let mut lo = Vec::with_capacity(self.rank());
        let mut hi = Vec::with_capacity(self.rank());
        for (a, b) in bounds.iter().enumerate() {
            let n = self.shape()[a] as isize;
            let first = match b.lower {
                Some(l) => ((l - self.origin()[a]) / self.step()[a]).ceil() as isize,
                None => 0,
            };
            let last = match b.upper {
                Some(u) => ((u - self.origin()[a]) / self.step()[a]).floor() as isize,
                None => n - 1,
            };
            let first = first.max(0);
            let last = last.min(n - 1);
            if first > last {
                return Err(Error::RegionEmpty(format!(
                    "axis {}: bounds ({:?}, {:?}) select no grid points",
                    a, b.lower, b.upper
                )));
            }
            lo.push(first as usize);
            hi.push(last as usize);
        }

        // Odometer walk over the box, last axis fastest.
        let mut cell = lo.clone();
        let mut best: Option<(Vec<usize>, f64)> = None;
        'scan: loop {
            let v = self.value(&cell);
            if v.is_finite() && best.as_ref().map_or(true, |(_, bv)| v < *bv) {
                best = Some((cell.clone(), v));
            }

            let mut axis = self.rank();
            while axis > 0 {
                axis -= 1;
                if cell[axis] < hi[axis] {
                    cell[axis] += 1;
                    for a in axis + 1..self.rank() {
                        cell[a] = lo[a];
                    }
                    continue 'scan;
                }
            }
            break;
        }

        match best {
            Some((cell, _)) => Ok(self.cell_to_world(&cell)),
            None => Err(Error::RegionEmpty(
                "region holds only impassable grid points".to_string(),
            )),
        }
    }
}
