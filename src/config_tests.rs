/*
 * Unit tests for configuration loading
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_defaults
 * - test_parse_overrides
 * - test_parse_partial_keeps_defaults
 * - test_parse_rejects_invalid_values
 * - test_parse_rejects_malformed_toml
 * - test_load_missing_file_uses_defaults
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod config_tests {
    use crate::config::{load_config, parse_config, Config, SimulationConfig};
    use crate::shared::SimError;
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();

        assert_eq!(config.n_floors, 5);
        assert_eq!(config.max_weight, 600);
        assert_eq!(config.default_passenger_weight, 70);
        assert_eq!(config.idle_timeout(), Duration::from_secs(5));
        assert_eq!(config.exit_display_time(), Duration::from_secs(3));
        assert_eq!(config.tick_period(), Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_overrides() {
        // Arrange
        let config_str = r#"
            [simulation]
            n_floors = 8
            max_weight = 900
            default_passenger_weight = 80
            idle_timeout = 10000
            exit_display_time = 1500
            tick_period = 250
        "#;

        // Act
        let config = parse_config(config_str).unwrap();

        // Assert
        assert_eq!(
            config.simulation,
            SimulationConfig {
                n_floors: 8,
                max_weight: 900,
                default_passenger_weight: 80,
                idle_timeout: 10000,
                exit_display_time: 1500,
                tick_period: 250,
            }
        );
    }

    #[test]
    fn test_parse_partial_keeps_defaults() {
        // Act
        let config = parse_config("[simulation]\nn_floors = 10\n").unwrap();
        let empty = parse_config("").unwrap();

        // Assert
        assert_eq!(config.simulation.n_floors, 10);
        assert_eq!(config.simulation.max_weight, 600);
        assert_eq!(empty, Config::default());
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        // Act
        let one_floor = parse_config("[simulation]\nn_floors = 1\n");
        let too_heavy = parse_config("[simulation]\ndefault_passenger_weight = 700\n");
        let no_tick = parse_config("[simulation]\ntick_period = 0\n");

        // Assert
        assert!(matches!(one_floor, Err(SimError::InvalidConfig(_))));
        assert!(matches!(too_heavy, Err(SimError::InvalidConfig(_))));
        assert!(matches!(no_tick, Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        let result = parse_config("[simulation\nn_floors = ");
        assert!(matches!(result, Err(SimError::ConfigParse(_))));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = load_config("does/not/exist/config.toml").unwrap();
        assert_eq!(config, Config::default());
    }
}
