/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*            Error types              */
/***************************************/
#[derive(Debug, Error)]
pub enum SimError {
    #[error("floor {floor} is out of range (building has {n_floors} floors)")]
    FloorOutOfRange { floor: u8, n_floors: u8 },

    #[error("call from floor {floor} to itself")]
    SameFloorCall { floor: u8 },

    #[error("passenger weight {weight} kg is not in 1..={max_weight} kg")]
    InvalidWeight { weight: u32, max_weight: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read configuration file: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("failed to parse configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Checks `floor` against a building of `n_floors` floors.
pub fn check_floor(floor: u8, n_floors: u8) -> Result<(), SimError> {
    if floor < n_floors {
        Ok(())
    } else {
        Err(SimError::FloorOutOfRange { floor, n_floors })
    }
}
