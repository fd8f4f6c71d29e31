//! Surface variant generation.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::SmoothingSpec;
use crate::error::Result;
use crate::field::GridField;

/// Build the ordered list of surface variants to evaluate: the base field
/// first, then one independently owned smoothed copy per spec.
///
/// A spec with `save` set persists its variant next to the source surface
/// under a derived name: `<stem>-s<k><.ext>` for the k-th smoothing spec
/// (1-based). Persistence failures are logged and never disturb the
/// returned list.
pub fn generate_variants(
    base: GridField,
    specs: &[SmoothingSpec],
    surface_path: &Path,
) -> Result<Vec<GridField>> {
    let mut smoothed = Vec::with_capacity(specs.len());
    for (k, spec) in specs.iter().enumerate() {
        let sigma = spec.sigma.for_rank(base.rank())?;
        let variant = base.smoothed(&sigma, spec.cval);
        if spec.save {
            let target = derived_name(surface_path, k + 1);
            match variant.save(&target) {
                Ok(()) => info!("Saved smoothed variant {} to {}", k + 1, target.display()),
                Err(e) => warn!(
                    "Could not save smoothed variant {} to {}: {}",
                    k + 1,
                    target.display(),
                    e
                ),
            }
        }
        smoothed.push(variant);
    }

    let mut variants = Vec::with_capacity(1 + specs.len());
    variants.push(base);
    variants.extend(smoothed);
    Ok(variants)
}

/// Deterministic file name for the k-th saved variant (1-based).
fn derived_name(surface_path: &Path, k: usize) -> PathBuf {
    let stem = surface_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("surface");
    let name = match surface_path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}-s{}.{}", stem, k, ext),
        None => format!("{}-s{}", stem, k),
    };
    surface_path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Sigma;
    use crate::field::test_support::field_2d;

    fn spec(sigma: f64, save: bool) -> SmoothingSpec {
        SmoothingSpec {
            sigma: Sigma::Uniform(sigma),
            cval: 0.0,
            save,
        }
    }

    #[test]
    fn variant_zero_is_the_base() {
        let base = field_2d(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let base_values: Vec<f64> = base.values().to_vec();

        let variants =
            generate_variants(base, &[spec(1.0, false), spec(2.0, false)], Path::new("s.txt"))
                .unwrap();

        assert_eq!(variants.len(), 3);
        assert_eq!(variants[0].values(), &base_values[..]);
        // Smoothed variants are distinct from the base and each other.
        assert_ne!(variants[1].values(), variants[0].values());
        assert_ne!(variants[2].values(), variants[1].values());
    }

    #[test]
    fn no_specs_means_base_only() {
        let base = field_2d(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let variants = generate_variants(base, &[], Path::new("s.txt")).unwrap();
        assert_eq!(variants.len(), 1);
    }

    #[test]
    fn save_writes_a_loadable_variant() {
        let dir = tempfile::tempdir().unwrap();
        let surface = dir.path().join("surface.txt");

        let base = field_2d(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
        let variants = generate_variants(base, &[spec(0.8, true)], &surface).unwrap();

        let saved = GridField::load(dir.path().join("surface-s1.txt")).unwrap();
        assert_eq!(saved.shape(), variants[1].shape());
        for off in 0..saved.len() {
            let a = saved.value_at_offset(off);
            let b = variants[1].value_at_offset(off);
            assert!((a - b).abs() < 1e-9, "cell {}: {} vs {}", off, a, b);
        }
    }

    #[test]
    fn save_failure_does_not_block_the_list() {
        let base = field_2d(&[&[1.0, 2.0], &[3.0, 4.0]]);
        // Unwritable target directory.
        let variants = generate_variants(
            base,
            &[spec(1.0, true)],
            Path::new("/nonexistent-dir/surface.txt"),
        )
        .unwrap();
        assert_eq!(variants.len(), 2);
    }

    #[test]
    fn derived_names_are_deterministic() {
        assert_eq!(
            derived_name(Path::new("data/surface.txt"), 1),
            PathBuf::from("data/surface-s1.txt")
        );
        assert_eq!(
            derived_name(Path::new("surface"), 3),
            PathBuf::from("surface-s3")
        );
    }
}
