use coeus::chart::{EffectiveSettings, LayerCombination};
use coeus::config::{load_render_defaults, load_render_defaults_from_str};
use coeus::coordinates::Direction;
use coeus::Sign;
use std::io::Write;

#[test]
fn test_empty_config_uses_defaults() {
    let defaults = load_render_defaults_from_str("").unwrap();
    assert_eq!(defaults.settings, EffectiveSettings::default());
}

#[test]
fn test_full_render_table() {
    let text = r#"
[render]
zodiac_type = "sidereal"
house_system = "whole_sign"
include_objects = ["sun", "moon"]
cross_layer_aspects = [["transit", "natal"]]
include_system_defaults = false

[render.orbs]
conjunction = 10.0
square = 5.5

[render.coordinates]
direction = "ccw"
sign_start = "leo"
offset_degrees = 12.5
"#;
    let settings = load_render_defaults_from_str(text).unwrap().settings;

    assert_eq!(settings.zodiac_type, "sidereal");
    assert_eq!(settings.house_system, "whole_sign");
    assert_eq!(settings.include_objects, vec!["sun", "moon"]);
    assert_eq!(settings.cross_layer_aspects, vec![LayerCombination::new("transit", "natal")]);
    assert!(settings.intra_layer_aspects);
    assert!(!settings.include_system_defaults);
    assert_eq!(settings.orb_settings.len(), 2);
    assert_eq!(settings.orb_settings["square"], 5.5);
    assert_eq!(settings.coordinate_system.direction, Direction::CounterClockwise);
    assert_eq!(settings.coordinate_system.zero_point.sign_start, Sign::Leo);
    assert_eq!(settings.coordinate_system.zero_point.offset_degrees, 12.5);
    assert_eq!(settings.coordinate_system.angle_range, [0.0, 360.0]);
}

#[test]
fn test_negative_orb_rejected() {
    let text = "[render.orbs]\nsquare = -2.0\n";
    assert!(load_render_defaults_from_str(text).is_err());
}

#[test]
fn test_out_of_circle_angle_range_rejected() {
    let text = "[render.coordinates]\nangle_range = [370.0, 380.0]\n";
    assert!(load_render_defaults_from_str(text).is_err());

    let text = "[render.coordinates]\nangle_range = [0.0, 180.0]\n";
    let settings = load_render_defaults_from_str(text).unwrap().settings;
    assert_eq!(settings.coordinate_system.angle_range, [0.0, 180.0]);
}

#[test]
fn test_malformed_toml_rejected() {
    assert!(load_render_defaults_from_str("[render\nzodiac_type = 1").is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[render]\nhouse_system = \"koch\"").unwrap();

    let defaults = load_render_defaults(file.path()).unwrap();
    assert_eq!(defaults.settings.house_system, "koch");

    let missing = file.path().with_extension("missing");
    assert!(load_render_defaults(&missing).is_err());
}
