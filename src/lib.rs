pub mod cli;
pub mod core;
pub mod engine;
pub mod factories;
pub mod motorcycle;

pub use crate::core::{EngineBackend, MotorcycleError, MotorcycleResult, ShiftCommand};
pub use engine::{EngineConfig, MockEngine, StandardEngine};
pub use motorcycle::Motorcycle;
