//! Cupcake Car CLI
//!
//! Drives the demo car through its fixed script and prints what happens.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use cupcake_car::{CarConfig, ConsoleDashboard, Dashboard, JsonDashboard, Script, Session};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "cupcake-car")]
#[command(version, about = "Drive a car that throws cupcakes", long_about = None)]
struct Cli {
    /// Starting fuel in percent (clamped to 0-100)
    #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
    fuel: f32,

    /// Top speed in km/h
    #[arg(long, default_value_t = 200.0)]
    max_speed: f32,

    /// Engine horsepower
    #[arg(long, default_value_t = 300)]
    horsepower: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with the dashboard
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let config = CarConfig::new(cli.fuel, cli.max_speed, cli.horsepower);

    let dashboard: Box<dyn Dashboard> = match cli.format {
        OutputFormat::Text => Box::new(ConsoleDashboard::stdout()),
        OutputFormat::Json => Box::new(JsonDashboard::stdout()),
    };

    let mut session = Session::new(&config, dashboard).context("Invalid car configuration")?;
    session
        .run(&Script::demo())
        .context("Failed to write to the dashboard")?;

    Ok(())
}
