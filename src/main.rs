use anyhow::Context;
use clap::Parser;
use portsweep::cli::Cli;
use portsweep::config::Settings;
use portsweep::output;
use portsweep::scanner::run_scan;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.log_level()) {
        output::print_warning(&format!("logging disabled: {e:#}"));
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("portsweep={default_level}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    let request = cli.resolve(&settings)?;

    if request.config.verbose {
        output::print_scan_header(
            &request.config.hostname,
            &request.config.range.to_string(),
            request.config.workers,
        );
    }

    let summary = run_scan(&request.config).await;

    let mut destination = output::open_destination(request.output.as_deref())?;
    let styled = destination.is_styled();
    output::render(&summary, request.format, &mut destination, styled)
        .context("failed to write results")?;

    Ok(())
}
