//! Minimum-barrier path search ("flooding") between two field points.
//!
//! The search treats the field value as a water level: among all routes
//! from start to end it picks one whose highest crossed value is lowest,
//! breaking ties by Euclidean length. This is a Dijkstra-style expansion
//! over grid cells with a lexicographic (peak, length) cost.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::error::{Error, Result};
use crate::field::GridField;

/// Path cost: highest field value crossed, then accumulated length.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Cost {
    peak: f64,
    length: f64,
}

impl Cost {
    fn better_than(&self, other: &Cost) -> bool {
        self.peak < other.peak || (self.peak == other.peak && self.length < other.length)
    }
}

/// Node in the flood frontier.
#[derive(Clone, Debug)]
struct FloodNode {
    offset: usize,
    cost: Cost,
}

impl PartialEq for FloodNode {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
    }
}

impl Eq for FloodNode {}

impl Ord for FloodNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (lower cost = higher priority)
        other
            .cost
            .peak
            .partial_cmp(&self.cost.peak)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                other
                    .cost
                    .length
                    .partial_cmp(&self.cost.length)
                    .unwrap_or(Ordering::Equal)
            })
    }
}

impl PartialOrd for FloodNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Flooding path search bound to one field.
pub struct Flooder<'a> {
    field: &'a GridField,
}

impl<'a> Flooder<'a> {
    pub fn new(field: &'a GridField) -> Self {
        Self { field }
    }

    /// Find the minimum-barrier path between two world coordinates.
    ///
    /// Both endpoints snap to their nearest grid cell; the returned path
    /// runs from the snapped start to the snapped end, one world
    /// coordinate per visited cell. Fails with [`Error::Disconnected`]
    /// when no finite-valued route exists.
    pub fn flood(&self, start: &[f64], end: &[f64]) -> Result<Vec<Vec<f64>>> {
        let start_cell = self.field.nearest_cell(start)?;
        let goal_cell = self.field.nearest_cell(end)?;
        let start_off = self.field.offset(&start_cell);
        let goal_off = self.field.offset(&goal_cell);

        if !self.field.passable(start_off) || !self.field.passable(goal_off) {
            return Err(Error::Disconnected(
                "an endpoint sits on an impassable grid point".to_string(),
            ));
        }

        if start_off == goal_off {
            return Ok(vec![self.field.cell_to_world(&start_cell)]);
        }

        let mut best: HashMap<usize, Cost> = HashMap::new();
        let mut parent: HashMap<usize, usize> = HashMap::new();
        let mut frontier = BinaryHeap::new();

        let start_cost = Cost {
            peak: self.field.value_at_offset(start_off),
            length: 0.0,
        };
        best.insert(start_off, start_cost);
        frontier.push(FloodNode {
            offset: start_off,
            cost: start_cost,
        });

        while let Some(node) = frontier.pop() {
            if node.offset == goal_off {
                return Ok(self.reconstruct(&parent, goal_off));
            }

            // Stale frontier entry, a better cost was settled since.
            if best
                .get(&node.offset)
                .is_some_and(|settled| settled.better_than(&node.cost))
            {
                continue;
            }

            let cell = self.field.cell_of(node.offset);
            for neighbor in self.field.neighbors(&cell) {
                let off = self.field.offset(&neighbor);
                if !self.field.passable(off) {
                    continue;
                }

                let next = Cost {
                    peak: node.cost.peak.max(self.field.value_at_offset(off)),
                    length: node.cost.length + self.field.cell_distance(&cell, &neighbor),
                };

                if best.get(&off).map_or(true, |known| next.better_than(known)) {
                    best.insert(off, next);
                    parent.insert(off, node.offset);
                    frontier.push(FloodNode { offset: off, cost: next });
                }
            }
        }

        Err(Error::Disconnected(format!(
            "no route between {:?} and {:?}",
            start, end
        )))
    }

    fn reconstruct(&self, parent: &HashMap<usize, usize>, goal: usize) -> Vec<Vec<f64>> {
        let mut offsets = vec![goal];
        let mut current = goal;
        while let Some(&prev) = parent.get(&current) {
            offsets.push(prev);
            current = prev;
        }
        offsets.reverse();
        offsets
            .into_iter()
            .map(|off| self.field.cell_to_world(&self.field.cell_of(off)))
            .collect()
    }
}
