use std::fs;

use dice_engine::domain::DiceConfig;
use dice_engine::DiceSceneCore;

fn fixture() -> String {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/dice_config.json");
    fs::read_to_string(path).expect("dice_config.json fixture should exist")
}

#[test]
fn fixture_config_matches_site_defaults() {
    let config = DiceConfig::from_json(&fixture()).expect("fixture should parse");
    assert_eq!(config, DiceConfig::default());
}

#[test]
fn partial_config_keeps_defaults() {
    let config = DiceConfig::from_json(r#"{"lifecycle":{"autoCloseMs":3000}}"#).expect("partial config should parse");
    assert_eq!(config.lifecycle.auto_close_ms, 3000.0);
    assert_eq!(config.lifecycle.fade_ms, 1000.0);
    assert_eq!(config.throw, DiceConfig::default().throw);
}

#[test]
fn config_survives_json_round_trip_through_scene() {
    let scene = DiceSceneCore::from_json(&fixture(), 7).expect("scene from fixture");
    let reparsed = DiceConfig::from_json(&scene.config().to_json()).expect("exported config should parse");
    assert_eq!(&reparsed, scene.config());
}

#[test]
fn bad_configs_fail_with_field_names() {
    let err = DiceConfig::from_json(r#"{"throw":{"torqueStrength":{"min":9,"max":1}}}"#).unwrap_err();
    assert!(err.contains("throw.torqueStrength"), "{}", err);

    let err = DiceConfig::from_json(r#"{"body":{"mass":0}}"#).unwrap_err();
    assert!(err.contains("mass"), "{}", err);

    let err = DiceConfig::from_json("{not json").unwrap_err();
    assert!(err.starts_with("invalid dice config"), "{}", err);
}
