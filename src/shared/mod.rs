pub mod error;
pub mod macros;
pub mod structs;

pub use error::SimError;
pub use structs::Call;
pub use structs::Direction;
pub use structs::Passenger;
pub use structs::Snapshot;
