//! Floodpath - minimum-barrier paths through waypoints on sampled
//! scalar fields.
//!
//! Given a surface file, an ordered list of waypoint specifications, and
//! an optional list of Gaussian smoothing passes, the pipeline resolves
//! each waypoint on each surface variant and stitches flooded segments
//! into one continuous path per variant:
//!
//! ```text
//! configuration ─► base field ─► { resolvers, surface variants }
//!                                        │
//!                                 per-variant stitch
//!                                        │
//!                                        ▼
//!                         paths (index-aligned with variants)
//! ```
//!
//! Waypoints come in two shapes: exact points (optionally snapped to the
//! nearest local minimum) and region points (global minimum inside a
//! per-axis bounds box). Resolvers are pure values built once from the
//! configuration and reused unchanged across every variant.

pub mod config;
pub mod error;
pub mod field;
pub mod flood;
pub mod pipeline;

// Convenience re-exports (flat namespace for common use)
pub use config::{AxisBounds, PipelineConfig, Sigma, SmoothingSpec, WaypointSpec};
pub use error::{Error, Result};
pub use field::GridField;
pub use flood::Flooder;
pub use pipeline::{generate_variants, run, stitch, SurfacePath, WaypointResolver};
