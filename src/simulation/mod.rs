pub mod runner;
pub mod session;
pub mod session_tests;

pub use runner::SimulationRunner;
pub use session::Simulation;
