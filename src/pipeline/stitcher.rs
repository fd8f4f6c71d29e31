//! Stitching per-segment flood results into one continuous path.

use crate::error::{Error, Result};
use crate::field::GridField;
use crate::flood::Flooder;

use super::resolver::WaypointResolver;

/// A continuous path across one surface variant.
#[derive(Clone, Debug)]
pub struct SurfacePath {
    /// World coordinates from the first resolved waypoint to the last,
    /// each junction appearing exactly once.
    pub points: Vec<Vec<f64>>,
    /// Highest field value crossed anywhere along the path.
    pub peak: f64,
}

impl SurfacePath {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Compute one continuous path through all resolved waypoints on `field`.
///
/// Consecutive waypoints are connected by flooding; each new segment is
/// appended after dropping the accumulated path's last point, so the
/// junction coordinate shared by both segments appears exactly once.
pub fn stitch(resolvers: &[WaypointResolver], field: &GridField) -> Result<SurfacePath> {
    if resolvers.len() < 2 {
        return Err(Error::InsufficientWaypoints(resolvers.len()));
    }

    let flooder = Flooder::new(field);
    let start = resolvers[0].resolve(field)?;
    let mut end = resolvers[1].resolve(field)?;
    let mut points = flooder.flood(&start, &end)?;

    for resolver in &resolvers[2..] {
        let next = resolver.resolve(field)?;
        let segment = flooder.flood(&end, &next)?;
        points.pop();
        points.extend(segment);
        end = next;
    }

    let peak = {
        let mut peak = f64::NEG_INFINITY;
        for p in &points {
            peak = peak.max(field.sample(p)?);
        }
        peak
    };

    Ok(SurfacePath { points, peak })
}
