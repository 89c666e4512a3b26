use clap::Parser;
use freightprint_core::*;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "freightprint")]
#[command(about = "Freight logistics carbon footprint analyzer", long_about = None)]
struct Cli {
    /// Override the logistics input file
    #[arg(long)]
    input: Option<PathBuf>,

    /// Override the config file location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the event log location
    #[arg(long)]
    event_log: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    freightprint_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let input = cli.input.unwrap_or_else(|| config.data.input_path.clone());
    let event_log = cli
        .event_log
        .unwrap_or_else(|| config.data.event_log.clone());

    let table = default_factor_table().with_overrides(&config.factors.overrides)?;

    // One sink per run: terminal output plus the append-only event log
    let run_id = Uuid::new_v4();
    let sink = FanoutSink::new(vec![
        Box::new(TracingSink),
        Box::new(JsonlEventSink::new(&event_log, run_id)),
    ]);

    // Anticipated pipeline faults are logged, never fatal: missing or
    // empty input and calculator faults all exit 0 with no report
    match engine::run_analysis(run_id, &input, &table, &sink) {
        Ok(Some(report)) => {
            println!("Total carbon emissions: {:.2} kg CO2", report.total_kg_co2);
            println!("{}", report.suggestion.text());
        }
        Ok(None) => {
            tracing::info!("No logistics entries to analyze");
        }
        Err(e) => {
            tracing::error!("Analysis aborted: {}", e);
        }
    }

    Ok(())
}
