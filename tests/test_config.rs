use dino_runner::{ConfigError, GameConfig};

#[test]
fn default_config_is_valid() {
    let config = GameConfig::default();
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.ground_top(), 380.0);
    assert_eq!(config.bird_baseline(), 220.0);
}

#[test]
fn rejects_non_positive_dimensions() {
    let config = GameConfig {
        field_width: 0.0,
        ..GameConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotPositive { name: "field width", .. })
    ));
}

#[test]
fn rejects_non_finite_physics() {
    let config = GameConfig {
        bird_amplitude: f64::NAN,
        ..GameConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::NotFinite { .. })));

    let config = GameConfig {
        gravity: f64::INFINITY,
        ..GameConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::NotPositive { .. })));
}

#[test]
fn rejects_downward_jump() {
    let config = GameConfig {
        jump_impulse: 20.0,
        ..GameConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::JumpImpulse(20.0)));
}

#[test]
fn rejects_empty_trail_and_zero_intervals() {
    let config = GameConfig {
        trail_len: 0,
        ..GameConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::EmptyTrail));

    let config = GameConfig {
        speed_interval_ms: 0,
        ..GameConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::ZeroInterval { name: "speed" })
    );
}

#[test]
fn rejects_ground_below_field() {
    let config = GameConfig {
        ground_level: 350.0,
        ..GameConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert_eq!(
        err,
        ConfigError::GroundOutsideField {
            ground_top: 430.0,
            field_height: 400.0
        }
    );
    assert_eq!(
        err.to_string(),
        "ground band starts at 430 but the field is only 400 tall"
    );
}
