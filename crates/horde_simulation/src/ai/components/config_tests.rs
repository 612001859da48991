//! Tests for ControllerConfig loading and validation.

#[cfg(test)]
mod tests {
    use super::super::config::{ControllerConfig, ReactivationPolicy};
    use crate::error::ConfigError;

    #[test]
    fn test_defaults_are_valid() {
        let config = ControllerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.attack_range, 2.0);
        assert_eq!(config.sight_range, 10.0);
        assert_eq!(config.patrol_point_range, 10.0);
        assert_eq!(config.time_between_attacks, 1.5);
        assert_eq!(config.patrol_snap_radius, 1.0);
        assert_eq!(config.patrol_arrival_distance, 0.7);
        assert_eq!(config.reactivation, ReactivationPolicy::Preserve);
    }

    #[test]
    fn test_partial_ron_keeps_defaults() {
        let config =
            ControllerConfig::from_ron_str("(attack_range: 1.5, reactivation: Reset)").unwrap();

        assert_eq!(config.attack_range, 1.5);
        assert_eq!(config.reactivation, ReactivationPolicy::Reset);
        // Остальное — дефолты
        assert_eq!(config.sight_range, 10.0);
        assert_eq!(config.time_between_attacks, 1.5);
    }

    #[test]
    fn test_empty_struct_is_default() {
        let config = ControllerConfig::from_ron_str("()").unwrap();
        assert_eq!(config, ControllerConfig::default());
    }

    #[test]
    fn test_zero_cooldown_allowed() {
        let config = ControllerConfig::from_ron_str("(time_between_attacks: 0.0)").unwrap();
        assert_eq!(config.time_between_attacks, 0.0);
    }

    #[test]
    fn test_non_positive_range_rejected() {
        let err = ControllerConfig::from_ron_str("(attack_range: 0.0)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("attack_range")));

        let err = ControllerConfig::from_ron_str("(patrol_point_range: -1.0)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("patrol_point_range")));
    }

    #[test]
    fn test_non_finite_rejected() {
        let config = ControllerConfig {
            sight_range: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = ControllerConfig {
            time_between_attacks: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let err = ControllerConfig::from_ron_str("(attack_range: \"far\")").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = ControllerConfig::from_ron_str("not ron at all {").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ControllerConfig::load("/nonexistent/horde/zombie.ron").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_ron_roundtrip_via_serialize() {
        let config = ControllerConfig {
            attack_range: 3.0,
            reactivation: ReactivationPolicy::Reset,
            ..Default::default()
        };
        let text = ron::to_string(&config).unwrap();
        assert_eq!(ControllerConfig::from_ron_str(&text).unwrap(), config);
    }
}
