#[cfg(not(feature = "telemetry"))]
#[test]
fn default_tracing_is_a_no_op_without_feature() {
    assert!(!linscale::telemetry::init_default_tracing());
}

#[cfg(feature = "telemetry")]
#[test]
fn default_tracing_installs_once() {
    let first = linscale::telemetry::init_default_tracing();
    let second = linscale::telemetry::init_default_tracing();
    assert!(first);
    assert!(!second);
}
