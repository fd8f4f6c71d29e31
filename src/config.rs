//! Configuration loading for floodpath
//!
//! A pipeline configuration names the surface file, the ordered waypoint
//! list, and any smoothing passes to evaluate in addition to the raw
//! surface:
//!
//! ```toml
//! surface = "data/surface.txt"
//!
//! [[points]]
//! coords = [2.3, 4.5]
//! min = true
//!
//! [[points]]
//! range = [{ upper = 4.0 }, { lower = 3.5 }]
//!
//! [[smooth]]
//! sigma = 4.5
//! cval = 0.0
//! save = true
//!
//! [[smooth]]
//! sigma = [3.2, 3.8]
//! ```
//!
//! Region bounds accept either a `{lower, upper}` table with one or both
//! keys, a two-element `[lower, upper]` pair (nullable sides in formats
//! that can express null), or null for a fully open axis.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Clone, Debug, Deserialize)]
pub struct PipelineConfig {
    /// Path to the surface file
    pub surface: PathBuf,

    /// Ordered waypoint specifications (at least two)
    pub points: Vec<WaypointSpec>,

    /// Smoothing passes, one extra surface variant each
    #[serde(default)]
    pub smooth: Vec<SmoothingSpec>,
}

/// One waypoint specification.
///
/// A mapping with a `coords` key is an exact point, optionally snapped to
/// the nearest local minimum when `min` is true. A mapping with a `range`
/// key selects the global minimum inside a per-axis bounds box. Anything
/// else is rejected at deserialization time.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum WaypointSpec {
    Exact {
        coords: Vec<f64>,
        #[serde(default)]
        min: bool,
    },
    Region { range: Vec<AxisBounds> },
}

/// Per-axis bounds for a region waypoint. `None` means unbounded on that
/// side.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(from = "BoundsRepr")]
pub struct AxisBounds {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl AxisBounds {
    pub fn new(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self { lower, upper }
    }

    /// Fully open on both sides.
    pub fn open() -> Self {
        Self {
            lower: None,
            upper: None,
        }
    }
}

/// Accepted wire shapes for [`AxisBounds`].
#[derive(Deserialize)]
#[serde(untagged)]
enum BoundsRepr {
    Pair(Option<f64>, Option<f64>),
    Named {
        #[serde(default)]
        lower: Option<f64>,
        #[serde(default)]
        upper: Option<f64>,
    },
    Open,
}

impl From<BoundsRepr> for AxisBounds {
    fn from(repr: BoundsRepr) -> Self {
        match repr {
            BoundsRepr::Pair(lower, upper) => AxisBounds { lower, upper },
            BoundsRepr::Named { lower, upper } => AxisBounds { lower, upper },
            BoundsRepr::Open => AxisBounds::open(),
        }
    }
}

/// One smoothing pass over the base surface.
#[derive(Clone, Debug, Deserialize)]
pub struct SmoothingSpec {
    /// Kernel width, either one value for all axes or one per axis
    pub sigma: Sigma,

    /// Fill value where the kernel extends past the domain (default: 0)
    #[serde(default)]
    pub cval: f64,

    /// Persist the smoothed variant next to the source surface
    #[serde(default)]
    pub save: bool,
}

/// Gaussian kernel width specification.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Sigma {
    Uniform(f64),
    PerAxis(Vec<f64>),
}

impl Sigma {
    /// Expand to one sigma per axis, checking against the field rank.
    pub fn for_rank(&self, rank: usize) -> Result<Vec<f64>> {
        match self {
            Sigma::Uniform(s) => Ok(vec![*s; rank]),
            Sigma::PerAxis(v) if v.len() == rank => Ok(v.clone()),
            Sigma::PerAxis(v) => Err(Error::Config(format!(
                "sigma has {} entries but the surface has {} axes",
                v.len(),
                rank
            ))),
        }
    }

    fn values(&self) -> &[f64] {
        match self {
            Sigma::Uniform(s) => std::slice::from_ref(s),
            Sigma::PerAxis(v) => v,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;
        let config: PipelineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate waypoint and smoothing specs before any numeric work.
    pub fn validate(&self) -> Result<()> {
        if self.points.len() < 2 {
            return Err(Error::InsufficientWaypoints(self.points.len()));
        }
        for (i, spec) in self.points.iter().enumerate() {
            match spec {
                WaypointSpec::Exact { coords, .. } if coords.is_empty() => {
                    return Err(Error::Config(format!("point {}: empty coords", i)));
                }
                WaypointSpec::Exact { coords, .. } => {
                    if coords.iter().any(|c| !c.is_finite()) {
                        return Err(Error::Config(format!("point {}: non-finite coords", i)));
                    }
                }
                WaypointSpec::Region { range } if range.is_empty() => {
                    return Err(Error::Config(format!("point {}: empty range", i)));
                }
                WaypointSpec::Region { range } => {
                    for (axis, b) in range.iter().enumerate() {
                        if let (Some(lo), Some(hi)) = (b.lower, b.upper) {
                            if lo > hi {
                                return Err(Error::Config(format!(
                                    "point {}: axis {} bounds inverted ({} > {})",
                                    i, axis, lo, hi
                                )));
                            }
                        }
                    }
                }
            }
        }
        for (k, spec) in self.smooth.iter().enumerate() {
            if spec.sigma.values().iter().any(|s| !s.is_finite() || *s <= 0.0) {
                return Err(Error::Config(format!("smooth {}: sigma must be positive", k)));
            }
            if !spec.cval.is_finite() {
                return Err(Error::Config(format!("smooth {}: cval must be finite", k)));
            }
        }
        Ok(())
    }
}
