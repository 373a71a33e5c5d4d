use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use motorcycle_di::{
    cli::{execute_ride, Cli, RideConfig},
    engine::EngineConfig,
};

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = RideConfig {
        engine: cli.engine,
        engine_config: EngineConfig::new()
            .with_initial_gear(cli.initial_gear)
            .with_fixed_gear(cli.fixed_gear),
        shifts: cli.shifts,
    };

    let dashboard = execute_ride(&config)?;
    println!("{dashboard}");

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
    {
        eprintln!("Error initializing tracing: {e}");
    }
}
