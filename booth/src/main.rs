//! Ticket booth binary
//!
//! Sells tickets at the console, then prints and saves the report.

use std::sync::Arc;
use ticket_booth::config::Config;
use ticket_booth::run_booth;
use ticket_booth_core::environment::{StdConsole, SystemClock};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never interleave with the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ticket_booth=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    info!(
        max_tickets = config.max_tickets,
        mode = ?config.mode,
        output_dir = %config.output_dir.display(),
        "Configuration loaded"
    );

    let mut console = StdConsole::new();
    let mut rng = rand::thread_rng();

    match run_booth(&config, &mut console, Arc::new(SystemClock), &mut rng) {
        Ok(outcome) => {
            if let Some(path) = outcome.report_file {
                println!("Report saved to {}", path.display());
            }
            Ok(())
        },
        Err(e) => {
            error!(error = %e, "booth run failed");
            Err(e.into())
        },
    }
}
