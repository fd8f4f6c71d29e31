//! Waypoint resolution against a concrete field.

use crate::config::{AxisBounds, WaypointSpec};
use crate::error::{Error, Result};
use crate::field::GridField;

/// A waypoint resolver captures only its immutable spec and is applied to
/// any number of fields, so one waypoint list serves every surface
/// variant. Resolution depends on nothing but the spec and the field it
/// is handed.
#[derive(Clone, Debug)]
pub enum WaypointResolver {
    /// Snap to the nearest grid point.
    Nearest { coords: Vec<f64> },
    /// Descend to the local minimum reachable from the seed.
    LocalMin { coords: Vec<f64> },
    /// Global minimum inside a per-axis bounds box.
    RegionMin { bounds: Vec<AxisBounds> },
}

impl WaypointResolver {
    /// Build a resolver from a waypoint spec.
    pub fn from_spec(spec: &WaypointSpec) -> Result<Self> {
        match spec {
            WaypointSpec::Exact { coords, .. } if coords.is_empty() => {
                Err(Error::Config("waypoint with empty coords".to_string()))
            }
            WaypointSpec::Exact { coords, min: true } => Ok(WaypointResolver::LocalMin {
                coords: coords.clone(),
            }),
            WaypointSpec::Exact { coords, min: false } => Ok(WaypointResolver::Nearest {
                coords: coords.clone(),
            }),
            WaypointSpec::Region { range } if range.is_empty() => {
                Err(Error::Config("waypoint with empty range".to_string()))
            }
            WaypointSpec::Region { range } => Ok(WaypointResolver::RegionMin {
                bounds: range.clone(),
            }),
        }
    }

    /// Resolve to a concrete coordinate on `field`.
    pub fn resolve(&self, field: &GridField) -> Result<Vec<f64>> {
        match self {
            WaypointResolver::Nearest { coords } => field.nearest_point(coords),
            WaypointResolver::LocalMin { coords } => field.local_minimize(coords),
            WaypointResolver::RegionMin { bounds } => field.global_minimize(bounds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::test_support::field_2d;

    #[test]
    fn exact_point_snaps_to_grid() {
        let field = field_2d(&[&[5.0, 1.0], &[2.0, 3.0]]);
        let resolver = WaypointResolver::from_spec(&WaypointSpec::Exact {
            coords: vec![0.1, 0.9],
            min: false,
        })
        .unwrap();
        assert_eq!(resolver.resolve(&field).unwrap(), vec![0.0, 1.0]);
    }

    #[test]
    fn minimizing_point_descends() {
        let field = field_2d(&[
            &[5.0, 4.0, 5.0],
            &[4.0, 1.0, 4.0],
            &[5.0, 4.0, 5.0],
        ]);
        let resolver = WaypointResolver::from_spec(&WaypointSpec::Exact {
            coords: vec![0.0, 0.0],
            min: true,
        })
        .unwrap();
        assert_eq!(resolver.resolve(&field).unwrap(), vec![1.0, 1.0]);
    }

    #[test]
    fn region_point_uses_bounds() {
        let field = field_2d(&[
            &[5.0, 1.0, 5.0],
            &[5.0, 5.0, 5.0],
            &[5.0, 0.5, 5.0],
        ]);
        let resolver = WaypointResolver::from_spec(&WaypointSpec::Region {
            range: vec![AxisBounds::new(None, Some(1.0)), AxisBounds::open()],
        })
        .unwrap();
        // Restricted to rows 0..=1, the 0.5 at row 2 is out of reach.
        assert_eq!(resolver.resolve(&field).unwrap(), vec![0.0, 1.0]);
    }

    #[test]
    fn resolution_is_pure_across_fields() {
        let low_left = field_2d(&[&[0.0, 9.0], &[9.0, 9.0]]);
        let low_right = field_2d(&[&[9.0, 9.0], &[9.0, 0.0]]);
        let resolver = WaypointResolver::from_spec(&WaypointSpec::Region {
            range: vec![AxisBounds::open(), AxisBounds::open()],
        })
        .unwrap();

        assert_eq!(resolver.resolve(&low_left).unwrap(), vec![0.0, 0.0]);
        assert_eq!(resolver.resolve(&low_right).unwrap(), vec![1.0, 1.0]);
        // Same answer again, independent of call history.
        assert_eq!(resolver.resolve(&low_left).unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn empty_specs_are_rejected() {
        assert!(WaypointResolver::from_spec(&WaypointSpec::Exact {
            coords: vec![],
            min: false,
        })
        .is_err());
        assert!(WaypointResolver::from_spec(&WaypointSpec::Region { range: vec![] }).is_err());
    }
}
