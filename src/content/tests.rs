//! Content domain: tests for controller configuration parsing and validation.

use super::{CONTROLLER_SCHEMA_VERSION, ControllerConfig, parse_controller_config, validate_config};
use crate::movement::CastClearPolicy;

#[test]
fn test_default_config_is_valid() {
    let config = ControllerConfig::default();
    let errors = validate_config(&config);
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let text = r#"(
        schema_version: 1,
        movement: (
            max_speed: 6.0,
            cast_clear: Immediate,
        ),
    )"#;

    let config = parse_controller_config(text, "inline.ron").expect("should parse");
    assert_eq!(config.schema_version, CONTROLLER_SCHEMA_VERSION);
    assert_eq!(config.movement.max_speed, 6.0);
    assert_eq!(config.movement.cast_clear, CastClearPolicy::Immediate);
    // Untouched values fall back to defaults
    assert_eq!(config.movement.jump_height, 2.0);
    assert_eq!(config.movement.coyote_time, 0.2);
    assert_eq!(config.feedback, ControllerConfig::default().feedback);
}

#[test]
fn test_empty_struct_parses_to_defaults() {
    let config = parse_controller_config("()", "empty.ron").expect("should parse");
    assert_eq!(config, ControllerConfig::default());
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_controller_config("(movement: (max_speed: \"fast\"))", "bad.ron")
        .expect_err("should fail");
    assert_eq!(err.file, "bad.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("bad.ron"));
}

#[test]
fn test_invalid_jump_arc_is_reported() {
    let mut config = ControllerConfig::default();
    config.movement.jump_height = 0.0;
    config.movement.jump_time_to_apex = -0.4;

    let errors = validate_config(&config);
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.section == "movement"));
    assert!(errors[0].message.contains("jump_height"));
    assert!(errors[1].message.contains("jump_time_to_apex"));
}

#[test]
fn test_all_problems_are_collected() {
    let mut config = ControllerConfig::default();
    config.schema_version = 99;
    config.movement.accel_exponent = 3.0;
    config.movement.fall_multiplier = 0.5;
    config.movement.max_speed = f32::NAN;
    config.feedback.stretch_duration = 0.0;

    let errors = validate_config(&config);
    let sections: Vec<_> = errors.iter().map(|e| e.section).collect();
    assert_eq!(
        sections,
        vec!["root", "movement", "movement", "movement", "feedback"]
    );
}

#[test]
fn test_shipped_config_matches_defaults() {
    let contents = include_str!("../../assets/data/controller.ron");
    let config = parse_controller_config(contents, "controller.ron").unwrap();
    assert_eq!(config, ControllerConfig::default());
    assert!(validate_config(&config).is_empty());
}
