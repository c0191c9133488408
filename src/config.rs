/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::warn;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::structs::DEFAULT_PASSENGER_WEIGHT;
use crate::shared::SimError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// All times are in milliseconds.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub n_floors: u8,
    pub max_weight: u32,
    pub default_passenger_weight: u32,
    pub idle_timeout: u64,
    pub exit_display_time: u64,
    pub tick_period: u64,
}

impl Default for SimulationConfig {
    fn default() -> SimulationConfig {
        SimulationConfig {
            n_floors: 5,
            max_weight: 600,
            default_passenger_weight: DEFAULT_PASSENGER_WEIGHT,
            idle_timeout: 5000,
            exit_display_time: 3000,
            tick_period: 1000,
        }
    }
}

impl SimulationConfig {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.idle_timeout)
    }

    pub fn exit_display_time(&self) -> Duration {
        Duration::from_millis(self.exit_display_time)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.n_floors < 2 {
            return Err(SimError::InvalidConfig(format!(
                "n_floors must be at least 2, got {}",
                self.n_floors
            )));
        }
        if self.max_weight == 0 {
            return Err(SimError::InvalidConfig("max_weight must be positive".into()));
        }
        if self.default_passenger_weight == 0 || self.default_passenger_weight > self.max_weight {
            return Err(SimError::InvalidConfig(format!(
                "default_passenger_weight must be in 1..={}, got {}",
                self.max_weight, self.default_passenger_weight
            )));
        }
        if self.tick_period == 0 {
            return Err(SimError::InvalidConfig("tick_period must be positive".into()));
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_config(config_str: &str) -> Result<Config, SimError> {
    let config: Config = toml::from_str(config_str)?;
    config.simulation.validate()?;
    Ok(config)
}

/// Loads the configuration at `path`. A missing file is not an error, the
/// defaults are used instead.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, SimError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(config_str) => parse_config(&config_str),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("No configuration file at {}, using default settings", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(SimError::ConfigRead(e)),
    }
}
