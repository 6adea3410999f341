//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.buffer_tolerance > 0.0);
    assert!(cfg.mitre_limit >= 1.0);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(-1.0e-5, 5.0).unwrap_err(),
        ConfigError::InvalidTolerance(-1.0e-5)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-5, 0.5).unwrap_err(),
        ConfigError::InvalidMitreLimit(0.5)
    );
    assert!(GlobalConfig::new(f64::NAN, 5.0).is_err());
    assert!(GlobalConfig::new(1.0e-5, f64::INFINITY).is_err());
}

/// Zero tolerance disables dilation and is accepted.
#[test]
fn new_accepts_zero_tolerance() {
    let cfg = GlobalConfig::new(0.0, DEFAULT_MITRE_LIMIT).expect("zero tolerance is valid");
    assert_eq!(cfg.buffer_tolerance, 0.0);
}

#[test]
fn error_messages_name_the_value() {
    let msg = ConfigError::InvalidTolerance(-2.0).to_string();
    assert!(msg.contains("-2"));
    let msg = ConfigError::InvalidMitreLimit(0.25).to_string();
    assert!(msg.contains("0.25"));
}
