pub mod boarding;
pub mod engine;

pub use boarding::{plan_boarding, BoardingPlan};
pub use engine::Elevator;
