//! Serialization of points and trajectories (requires the `serde` feature).
//!
//! Run with: cargo test --features serde --test serde_points

#![cfg(feature = "serde")]

use trajectory_gapfill::{Point, PointKind, ReconstructionConfig, TrajectoryInterpolator};

const SAMPLE: &str = r#"[
    {"ts": 0.0, "x": 0.0, "y": 0.0, "z": 5.0, "type": "node"},
    {"ts": 1.0, "x": 1.0, "y": 1.0, "z": 4.0, "type": "node"},
    {"ts": 2.0, "x": 2.0, "y": 2.0, "z": 3.0, "type": "node"},
    {"ts": 5.0, "x": 5.0, "y": 5.0, "z": 0.0, "type": "pred"},
    {"ts": 6.0, "x": 6.0, "y": 6.0, "z": 1.0, "type": "pred"}
]"#;

#[test]
fn test_points_from_json() {
    let points: Vec<Point> = serde_json::from_str(SAMPLE).unwrap();
    assert_eq!(points.len(), 5);
    assert_eq!(points[0].kind, PointKind::Node);
    assert_eq!(points[4].kind, PointKind::Pred);
    assert_eq!(points[3].position(), [5.0, 5.0, 0.0]);
}

#[test]
fn test_trajectory_to_json() {
    let points: Vec<Point> = serde_json::from_str(SAMPLE).unwrap();
    let engine =
        TrajectoryInterpolator::with_config(&points, ReconstructionConfig::coarse()).unwrap();
    let trajectory = engine.full_gap_trajectory().unwrap();

    let json = serde_json::to_value(&trajectory).unwrap();
    let array = json.as_array().unwrap();
    assert_eq!(array.len(), 7);
    assert_eq!(array[3]["type"], "spline");
    assert_eq!(array[0]["type"], "node");

    let series = serde_json::to_value(trajectory.axis_series()).unwrap();
    assert_eq!(series["zs"].as_array().unwrap().len(), 7);
}

#[test]
fn test_config_round_trip() {
    let config = ReconstructionConfig::bspline().with_sampling_step(0.25);
    let json = serde_json::to_string(&config).unwrap();
    let back: ReconstructionConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_unknown_label_rejected() {
    let bad = r#"[{"ts": 0.0, "x": 0.0, "y": 0.0, "z": 0.0, "type": "ghost"}]"#;
    assert!(serde_json::from_str::<Vec<Point>>(bad).is_err());
}
