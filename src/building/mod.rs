pub mod exit_log;
pub mod floors;

pub use exit_log::{ExitLog, ExitRecord};
pub use floors::FloorRegistry;
