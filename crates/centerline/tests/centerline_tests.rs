use std::io::Write;

use aneurysm_types::Point3d;
use approx::assert_abs_diff_eq;
use centerline::*;
use proptest::prelude::*;

fn write_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ── Loading ─────────────────────────────────────────────────────────────

#[test]
fn load_centerline_parses_rows() {
    let file = write_file("# x,y,z\n0.0, 0.0, 0.0\n1.5,2.0,10.0\n\n2.0,2.5,20.0\n");
    let pts = load_centerline(file.path()).unwrap();
    assert_eq!(pts.len(), 3);
    assert_eq!(pts[1], Point3d::new(1.5, 2.0, 10.0));
}

#[test]
fn load_centerline_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_centerline(&dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, DataError::Missing { .. }));
}

#[test]
fn load_centerline_bad_number_reports_line() {
    let file = write_file("0,0,0\n1,abc,2\n");
    let err = load_centerline(file.path()).unwrap_err();
    match err {
        DataError::Malformed { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_centerline_wrong_column_count() {
    let file = write_file("0,0,0\n1,2\n");
    assert!(matches!(
        load_centerline(file.path()).unwrap_err(),
        DataError::Malformed { line: 2, .. }
    ));
    let file = write_file("0,0,0,4\n");
    assert!(matches!(
        load_centerline(file.path()).unwrap_err(),
        DataError::Malformed { line: 1, .. }
    ));
}

#[test]
fn load_centerline_rejects_non_finite_values() {
    let file = write_file("0,0,0\n0,0,10\nnan,0,20\n0,0,30\n");
    match load_centerline(file.path()).unwrap_err() {
        DataError::Malformed { line, reason, .. } => {
            assert_eq!(line, 3);
            assert!(reason.contains("non-finite"), "{reason}");
        }
        other => panic!("unexpected error: {other}"),
    }

    let file = write_file("0,0,0\n0,-inf,10\n");
    assert!(matches!(
        load_centerline(file.path()).unwrap_err(),
        DataError::Malformed { line: 2, .. }
    ));
}

#[test]
fn load_area_samples_rejects_infinite_area() {
    let file = write_file("0,inf\n10,78.5\n");
    assert!(matches!(
        load_area_samples(file.path()).unwrap_err(),
        DataError::Malformed { line: 1, .. }
    ));
}

#[test]
fn load_area_samples_reads_two_columns() {
    let file = write_file("0,78.5\n50,452.4\n100,78.5\n");
    let samples = load_area_samples(file.path()).unwrap();
    assert_eq!(samples.len(), 3);
    assert_eq!(samples[1], AreaSample { z: 50.0, area: 452.4 });
}

#[test]
fn written_centerline_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("interpolated_centerline.txt");
    let pts = vec![Point3d::new(0.0, 1.0, 2.0), Point3d::new(0.25, -1.5, 12.125)];
    write_centerline(&path, &pts).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("0.000000,1.000000,2.000000\n"));
    assert_eq!(load_centerline(&path).unwrap(), pts);
}

// ── Path construction ───────────────────────────────────────────────────

#[test]
fn curved_path_is_longer_than_chord() {
    let raw: Vec<Point3d> = (0..6)
        .map(|i| {
            let z = i as f64 * 20.0;
            Point3d::new(5.0 * (z / 30.0).sin(), 0.0, z)
        })
        .collect();
    let path = CenterlinePath::from_samples(&raw, 4).unwrap();
    let chord = raw[0].distance_to(&raw[5]);
    assert!(path.length() > chord);
    assert_eq!(path.len(), 21);
    assert_abs_diff_eq!(path.points()[20].distance_to(&raw[5]), 0.0, epsilon = 1e-9);
}

#[test]
fn duplicated_raw_sample_is_geometry_error() {
    let raw = vec![
        Point3d::new(0.0, 0.0, 0.0),
        Point3d::new(0.0, 0.0, 10.0),
        Point3d::new(0.0, 0.0, 10.0),
        Point3d::new(0.0, 0.0, 20.0),
    ];
    let err = CenterlinePath::from_samples(&raw, 1).unwrap_err();
    assert!(matches!(
        err,
        CenterlineError::Geometry(GeometryError::CoincidentPoints { index: 1 })
    ));
}

proptest! {
    #[test]
    fn tangents_are_unit_length(
        dx in proptest::collection::vec(-3.0f64..3.0, 4..10),
        factor in 1usize..4,
    ) {
        // Monotone z keeps consecutive samples apart.
        let raw: Vec<Point3d> = dx
            .iter()
            .enumerate()
            .map(|(i, &x)| Point3d::new(x, 0.5 * x, i as f64 * 10.0))
            .collect();
        let path = CenterlinePath::from_samples(&raw, factor).unwrap();
        prop_assert_eq!(path.points().len(), path.tangents().len());
        for t in path.tangents() {
            prop_assert!((t.length() - 1.0).abs() < 1e-9);
        }
    }
}
