/* Modules */
pub mod building;
pub mod clock;
pub mod config;
pub mod elevator;
pub mod shared;
pub mod simulation;

mod config_tests;

/* Re-exports */
pub use building::{ExitLog, FloorRegistry};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Config, SimulationConfig};
pub use elevator::Elevator;
pub use shared::{Call, Direction, Passenger, SimError, Snapshot};
pub use simulation::{Simulation, SimulationRunner};
