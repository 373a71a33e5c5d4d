use crate::core::ShiftCommand;
use crate::engine::config::{DEFAULT_FIXED_GEAR, DEFAULT_INITIAL_GEAR};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "motorcycle")]
#[command(about = "Ride a motorcycle with an injected engine and print its dashboard")]
#[command(version)]
pub struct Cli {
    /// Engine implementation to inject (standard, dummy)
    #[arg(short, long, default_value = "standard")]
    pub engine: String,

    /// Starting gear of the standard engine
    #[arg(long, default_value_t = DEFAULT_INITIAL_GEAR, allow_negative_numbers = true)]
    pub initial_gear: i64,

    /// Gear reported by the dummy engine
    #[arg(long, default_value_t = DEFAULT_FIXED_GEAR, allow_negative_numbers = true)]
    pub fixed_gear: i64,

    /// Shift requests to replay in order (up, down)
    #[arg(value_name = "SHIFT")]
    pub shifts: Vec<ShiftCommand>,
}
