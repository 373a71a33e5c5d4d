use crate::core::{MotorcycleResult, ShiftCommand};
use crate::engine::EngineConfig;
use crate::factories::EngineFactory;
use crate::motorcycle::Motorcycle;

/// Configuration struct for the ride command
#[derive(Debug, Clone)]
pub struct RideConfig {
    pub engine: String,
    pub engine_config: EngineConfig,
    pub shifts: Vec<ShiftCommand>,
}

/// Build the requested engine, replay the shifts and return the final dashboard
pub fn execute_ride(config: &RideConfig) -> MotorcycleResult<String> {
    let engine = EngineFactory::new().create(&config.engine, &config.engine_config)?;
    let mut motorcycle = Motorcycle::new(engine);

    tracing::info!(
        engine = %config.engine,
        shifts = config.shifts.len(),
        "starting ride"
    );

    for &command in &config.shifts {
        motorcycle.apply(command);
    }

    Ok(motorcycle.dashboard())
}
