//! Pipeline orchestration.
//!
//! [`run`] is the crate's single entry point: it takes a validated
//! configuration and returns one path per surface variant, index-aligned
//! with the variant list (index 0 is always the unsmoothed base surface).
//!
//! Execution is synchronous and fail-fast: the first error anywhere
//! aborts the whole call with no partial results. Waypoint resolvers are
//! built and validated before the surface file is even opened, so a
//! malformed waypoint spec never costs any I/O or numeric work.

mod resolver;
mod stitcher;
mod variants;

pub use resolver::WaypointResolver;
pub use stitcher::{stitch, SurfacePath};
pub use variants::generate_variants;

use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::field::GridField;

/// Run the full pipeline for one configuration.
///
/// Returns `1 + config.smooth.len()` paths, one per surface variant in
/// variant order.
pub fn run(config: &PipelineConfig) -> Result<Vec<SurfacePath>> {
    config.validate()?;

    let resolvers = config
        .points
        .iter()
        .map(WaypointResolver::from_spec)
        .collect::<Result<Vec<_>>>()?;

    let base = GridField::load(&config.surface)?;
    info!(
        "Loaded surface {} with {:?} grid points",
        config.surface.display(),
        base.shape()
    );

    let variants = generate_variants(base, &config.smooth, &config.surface)?;

    let mut paths = Vec::with_capacity(variants.len());
    for (i, field) in variants.iter().enumerate() {
        debug!("Evaluating variant {} of {}", i, variants.len());
        let path = stitch(&resolvers, field)?;
        info!(
            "Variant {}: {} points, peak value {:.6}",
            i,
            path.len(),
            path.peak
        );
        paths.push(path);
    }
    Ok(paths)
}
