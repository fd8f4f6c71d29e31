//! End-to-end pipeline tests over small on-disk surfaces.

use std::fs;
use std::path::PathBuf;

use floodpath::{
    stitch, Error, Flooder, GridField, PipelineConfig, WaypointResolver,
};

/// Write a 5x5 unit-spaced surface with a diagonal valley and a bump in
/// the middle, returning its path inside `dir`.
fn write_surface(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("surface.txt");
    fs::write(
        &path,
        "\
# 5x5 test surface
2
0.0 1.0 5
0.0 1.0 5
5.0 4.0 3.0 2.0 1.0
4.0 3.0 2.0 1.0 2.0
3.0 2.0 9.0 2.0 3.0
2.0 1.0 2.0 3.0 4.0
1.0 2.0 3.0 4.0 5.0
",
    )
    .unwrap();
    path
}

fn config_json(surface: &PathBuf, points_and_smooth: &str) -> PipelineConfig {
    let json = format!(
        r#"{{"surface": "{}", {}}}"#,
        surface.display(),
        points_and_smooth
    );
    serde_json::from_str(&json).unwrap()
}

#[test]
fn exact_to_region_single_segment() {
    let dir = tempfile::tempdir().unwrap();
    let surface = write_surface(&dir);
    let config = config_json(
        &surface,
        r#""points": [
            {"coords": [0.0, 0.0], "min": false},
            {"range": [[null, 1.0], [0.0, null]]}
        ]"#,
    );

    let paths = floodpath::run(&config).unwrap();
    assert_eq!(paths.len(), 1);

    // nearestPoint([0,0]) is (0,0); the bounded minimum over rows 0..=1
    // is the 1.0 at (0,4).
    let path = &paths[0];
    assert_eq!(path.points.first().unwrap(), &vec![0.0, 0.0]);
    assert_eq!(path.points.last().unwrap(), &vec![0.0, 4.0]);
}

#[test]
fn three_waypoints_compose_two_segments() {
    let dir = tempfile::tempdir().unwrap();
    let surface = write_surface(&dir);
    let config = config_json(
        &surface,
        r#""points": [
            {"coords": [0.0, 0.0]},
            {"coords": [0.0, 4.0]},
            {"coords": [4.0, 0.0]}
        ]"#,
    );

    let paths = floodpath::run(&config).unwrap();
    assert_eq!(paths.len(), 1);
    let path = &paths[0];

    // Same result as composing the two flood segments by hand with the
    // junction dropped once.
    let field = GridField::load(&surface).unwrap();
    let flooder = Flooder::new(&field);
    let seg1 = flooder.flood(&[0.0, 0.0], &[0.0, 4.0]).unwrap();
    let seg2 = flooder.flood(&[0.0, 4.0], &[4.0, 0.0]).unwrap();
    let mut expected = seg1[..seg1.len() - 1].to_vec();
    expected.extend(seg2);
    assert_eq!(path.points, expected);

    // The junction appears exactly once.
    let junction = vec![0.0, 4.0];
    assert_eq!(path.points.iter().filter(|p| **p == junction).count(), 1);
    for pair in path.points.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn unknown_spec_fails_before_any_loading() {
    // An unknown waypoint shape never deserializes into the model.
    let err = serde_json::from_str::<PipelineConfig>(
        r#"{"surface": "s.txt", "points": [{"foo": 1}, {"coords": [0.0]}]}"#,
    );
    assert!(err.is_err());

    // A malformed-but-parseable spec fails validation before the surface
    // is touched: the surface path here does not even exist.
    let config = serde_json::from_str::<PipelineConfig>(
        r#"{"surface": "/nonexistent/surface.txt",
            "points": [{"coords": []}, {"coords": [1.0, 1.0]}]}"#,
    )
    .unwrap();
    match floodpath::run(&config) {
        Err(Error::Config(_)) => {}
        other => panic!("expected configuration error, got {:?}", other.map(|p| p.len())),
    }
}

#[test]
fn two_smoothing_specs_give_three_paths() {
    let dir = tempfile::tempdir().unwrap();
    let surface = write_surface(&dir);
    let config = config_json(
        &surface,
        r#""points": [
            {"coords": [0.0, 0.0]},
            {"coords": [4.0, 4.0]}
        ],
        "smooth": [
            {"sigma": 1.0, "cval": 0.0, "save": true},
            {"sigma": [1.5, 0.8]}
        ]"#,
    );

    let paths = floodpath::run(&config).unwrap();
    assert_eq!(paths.len(), 3);

    // Element 0 is computed on the unsmoothed base field.
    let field = GridField::load(&surface).unwrap();
    let resolvers: Vec<WaypointResolver> = config
        .points
        .iter()
        .map(|s| WaypointResolver::from_spec(s).unwrap())
        .collect();
    let base_path = stitch(&resolvers, &field).unwrap();
    assert_eq!(paths[0].points, base_path.points);

    // The saved variant of the first smoothing spec landed on disk.
    let saved = GridField::load(dir.path().join("surface-s1.txt")).unwrap();
    assert_eq!(saved.shape(), field.shape());
}

#[test]
fn region_and_minimized_waypoints_resolve_per_variant() {
    let dir = tempfile::tempdir().unwrap();
    let surface = write_surface(&dir);
    let config = config_json(
        &surface,
        r#""points": [
            {"coords": [4.2, -0.3], "min": true},
            {"range": [null, [3.5, null]]}
        ],
        "smooth": [{"sigma": 0.6}]"#,
    );

    let paths = floodpath::run(&config).unwrap();
    assert_eq!(paths.len(), 2);

    // On the base surface the descent from (4,0) bottoms out in the
    // valley corner and the open-rowed region picks column 4's minimum.
    let base = &paths[0];
    assert_eq!(base.points.first().unwrap(), &vec![4.0, 0.0]);
    assert_eq!(base.points.last().unwrap(), &vec![0.0, 4.0]);
}

#[test]
fn toml_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let surface = write_surface(&dir);
    let config_path = dir.path().join("pipeline.toml");
    fs::write(
        &config_path,
        format!(
            r#"
surface = "{}"

[[points]]
coords = [0.0, 0.0]

[[points]]
range = [{{ upper = 1.0 }}, {{ lower = 0.0 }}]

[[smooth]]
sigma = 1.2
"#,
            surface.display()
        ),
    )
    .unwrap();

    let config = PipelineConfig::load(&config_path).unwrap();
    let paths = floodpath::run(&config).unwrap();
    assert_eq!(paths.len(), 2);
    for path in &paths {
        assert!(path.len() >= 2);
        assert_eq!(path.points.first().unwrap(), &vec![0.0, 0.0]);
    }
}

#[test]
fn missing_surface_is_a_load_error() {
    let config = serde_json::from_str::<PipelineConfig>(
        r#"{"surface": "/nonexistent/surface.txt",
            "points": [{"coords": [0.0, 0.0]}, {"coords": [1.0, 1.0]}]}"#,
    )
    .unwrap();
    assert!(matches!(floodpath::run(&config), Err(Error::FieldLoad(_))));
}
