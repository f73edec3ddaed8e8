use linscale::api::{SCALE_SNAPSHOT_JSON_SCHEMA_V1, ScaleConfig, ScaleSnapshot};
use linscale::core::{NiceNumber, ScaleCalculator};

fn calculated_snapshot() -> ScaleSnapshot {
    let config = ScaleConfig::new()
        .with_bounds(3.0, 27.0)
        .with_max_tick_count(5);
    let mut calculator = ScaleCalculator::from_config(&config).expect("valid config");
    assert_eq!(calculator.calculate(), Ok(true));
    calculator.snapshot().expect("computed snapshot")
}

#[test]
fn scale_config_json_roundtrip() {
    let config = ScaleConfig::new()
        .with_bounds(-12.5, 88.25)
        .with_max_tick_count(6);

    let json = config
        .to_json_pretty()
        .expect("config should serialize to json");
    let restored = ScaleConfig::from_json_str(&json).expect("config should deserialize");

    assert_eq!(restored, config);
}

#[test]
fn scale_config_fields_default_to_unset() {
    let config = ScaleConfig::from_json_str(r#"{"max_tick_count": 5}"#).expect("partial config");

    assert_eq!(config.lower_bound, None);
    assert_eq!(config.upper_bound, None);
    assert_eq!(config.max_tick_count, Some(5));
}

#[test]
fn single_bound_in_config_is_ignored() {
    let config = ScaleConfig {
        lower_bound: Some(3.0),
        upper_bound: None,
        max_tick_count: Some(5),
    };
    let mut calculator = ScaleCalculator::from_config(&config).expect("valid config");

    assert_eq!(calculator.bounds(), None);
    assert_eq!(calculator.calculate(), Ok(false));
}

#[test]
fn calculator_exports_sorted_config() {
    let config = ScaleConfig::new().with_bounds(9.0, -1.0).with_max_tick_count(0);
    let calculator = ScaleCalculator::from_config(&config).expect("valid config");

    let exported = calculator.config();
    assert_eq!(exported.lower_bound, Some(-1.0));
    assert_eq!(exported.upper_bound, Some(9.0));
    assert_eq!(exported.max_tick_count, Some(1));
}

#[test]
fn snapshot_is_absent_before_calculation() {
    let config = ScaleConfig::new().with_bounds(3.0, 27.0).with_max_tick_count(5);
    let calculator = ScaleCalculator::from_config(&config).expect("valid config");

    assert_eq!(calculator.snapshot(), None);
}

#[test]
fn snapshot_reports_scale_and_ticks() {
    let snapshot = calculated_snapshot();

    assert_eq!(snapshot.bounds.lower(), 3.0);
    assert_eq!(snapshot.bounds.upper(), 27.0);
    assert_eq!(snapshot.max_tick_count, 5);
    assert_eq!(snapshot.minimum, 0.0);
    assert_eq!(snapshot.maximum, 30.0);
    assert_eq!(snapshot.step, NiceNumber::new(1, 1).expect("valid nice number"));
    assert_eq!(snapshot.step_size, 10.0);
    assert_eq!(snapshot.range, 30.0);
    assert_eq!(snapshot.ticks, vec![0.0, 10.0, 20.0, 30.0]);
}

#[test]
fn snapshot_json_contract_v1_roundtrip() {
    let snapshot = calculated_snapshot();

    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("contract should serialize");
    assert!(json.contains("\"schema_version\": 1"));

    let restored = ScaleSnapshot::from_json_compat_str(&json).expect("contract should parse");
    assert_eq!(restored, snapshot);
}

#[test]
fn snapshot_json_compat_accepts_bare_payload() {
    let snapshot = calculated_snapshot();

    let json = snapshot.to_json_pretty().expect("snapshot should serialize");
    let restored = ScaleSnapshot::from_json_compat_str(&json).expect("bare payload should parse");
    assert_eq!(restored, snapshot);
}

#[test]
fn snapshot_json_contract_rejects_unknown_schema() {
    let snapshot = calculated_snapshot();
    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("contract should serialize")
        .replace(
            &format!("\"schema_version\": {SCALE_SNAPSHOT_JSON_SCHEMA_V1}"),
            "\"schema_version\": 99",
        );

    assert!(ScaleSnapshot::from_json_compat_str(&json).is_err());
}

#[test]
fn snapshot_json_rejects_invalid_step() {
    let snapshot = calculated_snapshot();
    let json = snapshot
        .to_json_pretty()
        .expect("snapshot should serialize")
        .replace("\"mantissa\": 1", "\"mantissa\": 3");

    assert!(ScaleSnapshot::from_json_compat_str(&json).is_err());
}
