use coeus::coordinates::{angular_separation, CoordinateNormalizer, CoordinateSystem, Direction};
use coeus::ephemeris::RawPositionSample;
use coeus::RenderError;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_normalize_default_system_wraps() {
    let normalizer = CoordinateNormalizer::default();
    assert!(approx(normalizer.normalize(370.0).unwrap(), 10.0));
    assert!(approx(normalizer.normalize(-30.0).unwrap(), 330.0));
    assert!(approx(normalizer.normalize(0.0).unwrap(), 0.0));
    assert!(approx(normalizer.normalize(360.0).unwrap(), 0.0));
}

#[test]
fn test_normalize_with_offset() {
    let normalizer = CoordinateNormalizer::new(CoordinateSystem::with_offset(30.0));
    assert!(approx(normalizer.normalize(45.0).unwrap(), 15.0));
    assert!(approx(normalizer.normalize(10.0).unwrap(), 340.0));
}

#[test]
fn test_normalize_counterclockwise_mirrors() {
    let system = CoordinateSystem::default().with_direction(Direction::CounterClockwise);
    let normalizer = CoordinateNormalizer::new(system);
    assert!(approx(normalizer.normalize(90.0).unwrap(), 270.0));
    assert!(approx(normalizer.normalize(0.0).unwrap(), 0.0));
}

#[test]
fn test_normalize_counterclockwise_with_offset() {
    let system = CoordinateSystem::with_offset(10.0).with_direction(Direction::CounterClockwise);
    let normalizer = CoordinateNormalizer::new(system);
    // (100 - 10) = 90, mirrored to 270
    assert!(approx(normalizer.normalize(100.0).unwrap(), 270.0));
}

#[test]
fn test_inverse_round_trip() {
    let systems = [
        CoordinateSystem::default(),
        CoordinateSystem::with_offset(23.5),
        CoordinateSystem::with_offset(-40.0).with_direction(Direction::CounterClockwise),
    ];
    for system in systems {
        let normalizer = CoordinateNormalizer::new(system);
        for x in [0.0, 12.25, 179.0, 180.0, 359.5, 725.0, -15.0] {
            let raw = normalizer.denormalize(x).unwrap();
            let back = normalizer.normalize(raw).unwrap();
            let expected = x.rem_euclid(360.0);
            assert!(approx(back, expected), "x={} back={}", x, back);
        }
    }
}

#[test]
fn test_normalize_rejects_non_finite() {
    let normalizer = CoordinateNormalizer::default();
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            normalizer.normalize(bad),
            Err(RenderError::InvalidEphemerisData { .. })
        ));
    }
}

#[test]
fn test_normalize_sample_missing_longitude() {
    let normalizer = CoordinateNormalizer::default();
    let sample = RawPositionSample {
        object_id: "mars".to_string(),
        longitude: None,
        speed: Some(0.5),
    };
    match normalizer.normalize_sample(&sample) {
        Err(RenderError::InvalidEphemerisData { object_id, .. }) => assert_eq!(object_id, "mars"),
        other => panic!("expected InvalidEphemerisData, got {:?}", other),
    }
}

#[test]
fn test_normalize_sample_retrograde_and_speed() {
    let normalizer = CoordinateNormalizer::default();
    let position = normalizer
        .normalize_sample(&RawPositionSample::new("mercury", 400.0, Some(-0.8)))
        .unwrap();
    assert!(approx(position.longitude_deg, 40.0));
    assert_eq!(position.speed_deg_per_day, Some(-0.8));
    assert!(position.retrograde);
    assert_eq!(position.sign(), coeus::Sign::Taurus);
    assert!(approx(position.degree_in_sign(), 10.0));

    let ccw = CoordinateNormalizer::new(
        CoordinateSystem::default().with_direction(Direction::CounterClockwise),
    );
    let position = ccw
        .normalize_sample(&RawPositionSample::new("mercury", 40.0, Some(-0.8)))
        .unwrap();
    assert_eq!(position.speed_deg_per_day, Some(0.8));
    assert!(position.retrograde);
}

#[test]
fn test_angle_range_clamps() {
    let mut system = CoordinateSystem::default();
    system.angle_range = [0.0, 180.0];
    let normalizer = CoordinateNormalizer::new(system);
    assert!(approx(normalizer.normalize(200.0).unwrap(), 180.0));
    assert!(approx(normalizer.normalize(100.0).unwrap(), 100.0));
}

#[test]
fn test_separation_symmetric_and_bounded() {
    let samples = [0.0, 0.5, 8.1, 45.0, 90.0, 179.9, 180.0, 181.0, 270.0, 359.99];
    for &a in &samples {
        for &b in &samples {
            let ab = angular_separation(a, b);
            let ba = angular_separation(b, a);
            assert_eq!(ab, ba, "a={} b={}", a, b);
            assert!((0.0..=180.0).contains(&ab));
        }
    }
    assert_eq!(angular_separation(0.0, 8.1), 8.1);
    assert!(approx(angular_separation(350.0, 10.0), 20.0));
}

#[test]
fn test_invalid_angle_range_rejected() {
    for range in [[370.0, 380.0], [180.0, 90.0], [-10.0, 360.0], [0.0, f64::NAN]] {
        let mut system = CoordinateSystem::default();
        system.angle_range = range;
        let normalizer = CoordinateNormalizer::new(system);
        assert!(
            matches!(
                normalizer.normalize(10.0),
                Err(RenderError::InvalidEphemerisData { .. })
            ),
            "range {:?} accepted",
            range
        );
        assert!(normalizer.denormalize(10.0).is_err());
    }
}

#[test]
fn test_coordinate_system_json_shape() {
    let json = r#"{
        "angleUnit": "degrees",
        "angleRange": [0, 360],
        "direction": "cw",
        "zeroPoint": { "type": "zodiac", "signStart": "aries", "offsetDegrees": 0 }
    }"#;
    let system: CoordinateSystem = serde_json::from_str(json).unwrap();
    assert_eq!(system, CoordinateSystem::default());

    let value = serde_json::to_value(&system).unwrap();
    assert_eq!(value["direction"], "cw");
    assert_eq!(value["zeroPoint"]["signStart"], "aries");
}
