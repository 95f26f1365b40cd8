use coeus::layout::{
    load_wheel_template_from_json, validate_wheel, RingDefinition, RingKind, RingOverride,
    RingTemplate, WheelAssembler, WheelDefinition, WheelRadius, WheelTemplate,
};
use coeus::RenderError;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn assert_valid(wheel: &WheelDefinition) {
    for pair in wheel.rings.windows(2) {
        assert!(pair[0].radius_start < pair[1].radius_start);
        assert!(pair[0].radius_end <= pair[1].radius_start + 1e-9);
    }
    for ring in &wheel.rings {
        assert!(ring.radius_start < ring.radius_end);
        assert!(ring.radius_start >= wheel.radius.inner - 1e-9);
        assert!(ring.radius_end <= wheel.radius.outer + 1e-9);
    }
}

#[test]
fn test_two_equal_rings() {
    let template = WheelTemplate::empty("wheel-1", "Test Wheel", 0.0, 100.0);
    let overrides = vec![
        RingOverride::new("inner").kind(RingKind::Planets),
        RingOverride::new("outer").kind(RingKind::Signs),
    ];

    let wheel = WheelAssembler::assemble(&template, &overrides, false).unwrap();

    assert_eq!(wheel.id, "wheel-1");
    assert_eq!(wheel.rings.len(), 2);
    assert_eq!(wheel.rings[0].radius_start, 0.0);
    assert_eq!(wheel.rings[0].radius_end, 50.0);
    assert_eq!(wheel.rings[1].radius_start, 50.0);
    assert_eq!(wheel.rings[1].radius_end, 100.0);
    assert_eq!(wheel.rings[1].segment_count, 12);
    assert_eq!(wheel.rings[1].label, "Zodiac Signs");
    assert_valid(&wheel);
}

#[test]
fn test_explicit_widths_then_equal_shares() {
    let mut template = WheelTemplate::empty("w", "Mixed", 10.0, 110.0);
    template.rings = vec![
        RingTemplate::new("aspects", RingKind::Aspects),
        RingTemplate::new("houses", RingKind::Houses).with_width(20.0),
        RingTemplate::new("planets", RingKind::Planets),
        RingTemplate::new("signs", RingKind::Signs).with_width(10.0),
    ];

    let wheel = WheelAssembler::assemble(&template, &[], true).unwrap();
    let spans: Vec<(f64, f64)> = wheel
        .rings
        .iter()
        .map(|r| (r.radius_start, r.radius_end))
        .collect();
    // 100 span - 30 explicit = 70 shared by two rings
    assert_eq!(
        spans,
        vec![(10.0, 45.0), (45.0, 65.0), (65.0, 100.0), (100.0, 110.0)]
    );
    assert_valid(&wheel);
}

#[test]
fn test_overrides_replace_defaults_by_key() {
    let template = WheelTemplate::system_default();
    let overrides = vec![
        RingOverride::new("ring_signs").width(0.2).segments(24),
        RingOverride::new("ring_nakshatra").kind(RingKind::Degrees).width(0.05),
    ];

    let wheel = WheelAssembler::assemble(&template, &overrides, true).unwrap();

    let keys: Vec<&str> = wheel.rings.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "ring_aspects",
            "ring_planets",
            "ring_houses",
            "ring_signs",
            "ring_degrees",
            "ring_nakshatra"
        ]
    );
    let signs = wheel.rings.iter().find(|r| r.key == "ring_signs").unwrap();
    assert!(approx(signs.radius_end - signs.radius_start, 0.2));
    assert_eq!(signs.segment_count, 24);
    assert_eq!(signs.kind, RingKind::Signs);
    assert!(approx(wheel.rings.last().unwrap().radius_end, 1.0));
    assert_valid(&wheel);
}

#[test]
fn test_without_defaults_overrides_alone_define_rings() {
    let template = WheelTemplate::system_default();
    let overrides = vec![RingOverride::new("only").kind(RingKind::Signs)];

    let wheel = WheelAssembler::assemble(&template, &overrides, false).unwrap();
    assert_eq!(wheel.rings.len(), 1);
    assert_eq!(wheel.rings[0].radius_start, 0.0);
    assert_eq!(wheel.rings[0].radius_end, 1.0);
}

#[test]
fn test_system_default_layout_is_valid() {
    let wheel = WheelAssembler::assemble(&WheelTemplate::system_default(), &[], true).unwrap();
    assert_eq!(wheel.rings.len(), 5);
    assert_valid(&wheel);
    assert!(validate_wheel(&wheel).is_ok());
}

#[test]
fn test_explicit_widths_exceeding_span_fail() {
    let mut template = WheelTemplate::empty("w", "Too wide", 0.0, 1.0);
    template.rings = vec![
        RingTemplate::new("a", RingKind::Signs).with_width(0.6),
        RingTemplate::new("b", RingKind::Houses).with_width(0.6),
    ];
    let result = WheelAssembler::assemble(&template, &[], true);
    assert!(matches!(result, Err(RenderError::WheelOverlap { .. })));
}

#[test]
fn test_no_room_for_auto_rings_fails() {
    let mut template = WheelTemplate::empty("w", "Full", 0.0, 1.0);
    template.rings = vec![
        RingTemplate::new("a", RingKind::Signs).with_width(1.0),
        RingTemplate::new("b", RingKind::Planets),
    ];
    let result = WheelAssembler::assemble(&template, &[], true);
    assert!(matches!(result, Err(RenderError::WheelOverlap { .. })));
}

#[test]
fn test_invalid_radius_fails() {
    let template = WheelTemplate::empty("w", "Inverted", 100.0, 0.0);
    let result = WheelAssembler::assemble(&template, &[], true);
    assert!(matches!(result, Err(RenderError::WheelOverlap { .. })));
}

#[test]
fn test_zero_width_override_fails() {
    let template = WheelTemplate::system_default();
    let overrides = vec![RingOverride::new("ring_houses").width(0.0)];
    let result = WheelAssembler::assemble(&template, &overrides, true);
    assert!(matches!(result, Err(RenderError::WheelOverlap { .. })));
}

#[test]
fn test_validate_wheel_detects_overlap() {
    let ring = |key: &str, start: f64, end: f64| RingDefinition {
        key: key.to_string(),
        kind: RingKind::Planets,
        label: "Planets".to_string(),
        radius_start: start,
        radius_end: end,
        segment_count: 0,
    };
    let mut wheel = WheelDefinition {
        id: "w".to_string(),
        name: "w".to_string(),
        radius: WheelRadius { inner: 0.0, outer: 100.0 },
        rings: vec![ring("a", 0.0, 60.0), ring("b", 50.0, 100.0)],
    };
    assert!(matches!(validate_wheel(&wheel), Err(RenderError::WheelOverlap { .. })));

    wheel.rings = vec![ring("a", 0.0, 50.0), ring("b", 50.0, 120.0)];
    assert!(matches!(validate_wheel(&wheel), Err(RenderError::WheelOverlap { .. })));

    wheel.rings = vec![ring("b", 50.0, 100.0), ring("a", 0.0, 50.0)];
    assert!(matches!(validate_wheel(&wheel), Err(RenderError::WheelOverlap { .. })));

    wheel.rings = vec![ring("a", 0.0, 50.0), ring("b", 50.0, 100.0)];
    assert!(validate_wheel(&wheel).is_ok());
}

#[test]
fn test_load_wheel_template_valid() {
    let json = r#"
    {
      "id": "wheel-1",
      "name": "Test Wheel",
      "version": "1.2.0",
      "radius": { "inner": 0, "outer": 100 },
      "rings": [
        { "key": "ring_planets", "kind": "planets" },
        { "key": "ring_signs", "kind": "signs", "label": "Signs", "width": 15, "segmentCount": 12 }
      ]
    }
    "#;

    let template = load_wheel_template_from_json(json).unwrap();
    assert_eq!(template.name, "Test Wheel");
    assert_eq!(template.radius.outer, 100.0);
    assert_eq!(template.rings.len(), 2);
    assert_eq!(template.rings[1].kind, RingKind::Signs);
    assert_eq!(template.rings[1].width, Some(15.0));

    let wheel = WheelAssembler::assemble(&template, &[], true).unwrap();
    assert_eq!(wheel.rings[0].radius_end, 85.0);
    assert_eq!(wheel.rings[1].label, "Signs");
}

#[test]
fn test_load_wheel_template_missing_name() {
    let json = r#"{ "id": "w", "rings": [] }"#;
    assert!(load_wheel_template_from_json(json).is_err());
}

#[test]
fn test_load_wheel_template_invalid_kind() {
    let json = r#"
    {
      "id": "w",
      "name": "Bad",
      "rings": [{ "key": "x", "kind": "nakshatras" }]
    }
    "#;
    assert!(load_wheel_template_from_json(json).is_err());
}

#[test]
fn test_load_wheel_template_duplicate_keys() {
    let json = r#"
    {
      "id": "w",
      "name": "Dup",
      "rings": [{ "key": "x", "kind": "signs" }, { "key": "x", "kind": "houses" }]
    }
    "#;
    assert!(load_wheel_template_from_json(json).is_err());
}

#[test]
fn test_load_wheel_template_bad_version_and_radius() {
    let bad_version = r#"{ "id": "w", "name": "V", "version": "1.0", "rings": [] }"#;
    assert!(load_wheel_template_from_json(bad_version).is_err());

    let bad_radius = r#"{ "id": "w", "name": "R", "radius": { "inner": 5, "outer": 1 } }"#;
    assert!(load_wheel_template_from_json(bad_radius).is_err());

    let not_json = "{ id: w }";
    assert!(load_wheel_template_from_json(not_json).is_err());
}
