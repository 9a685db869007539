//! One complete booth run, from instructions to report file.

use crate::config::Config;
use crate::error::BoothError;
use crate::output::{emit_to_console, report_blocks, write_report_file};
use crate::raffle::{self, RaffleResult};
use crate::reducer::{SaleEnvironment, SaleReducer};
use crate::report::Report;
use crate::session::{offer_instructions, run_sale};
use crate::types::SaleState;
use chrono::Local;
use rand::Rng;
use std::path::PathBuf;
use std::sync::Arc;
use ticket_booth_core::environment::{Clock, Console};
use ticket_booth_core::store::Store;
use tracing::{info, warn};

/// What a finished run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoothOutcome {
    /// Final sales report
    pub report: Report,
    /// Raffle draw, fundraiser mode only
    pub raffle: Option<RaffleResult>,
    /// Report file written, fundraiser mode only
    pub report_file: Option<PathBuf>,
}

/// Run the booth end to end
///
/// The console report is shown before the report file is written.
///
/// # Errors
///
/// Returns [`BoothError::Console`] if the console closes mid-session and
/// [`BoothError::ReportFile`] if the report file cannot be written.
pub fn run_booth<C, R>(
    config: &Config,
    console: &mut C,
    clock: Arc<dyn Clock>,
    rng: &mut R,
) -> Result<BoothOutcome, BoothError>
where
    C: Console + ?Sized,
    R: Rng + ?Sized,
{
    if !config.skip_instructions {
        offer_instructions(console)?;
    }

    let mut store = Store::new(
        SaleState::new(config.max_tickets, config.mode),
        SaleReducer::new(),
        SaleEnvironment::new(Arc::clone(&clock)),
    );
    run_sale(&mut store, console)?;
    let state = store.into_state();

    let report = Report::build(&state.records, state.max_tickets);
    info!(
        sold = report.tickets_sold,
        total_sales = %report.total_sales,
        total_profit = %report.total_profit,
        "report built"
    );

    let raffle = if config.mode.is_fundraiser() {
        let drawn = raffle::draw(&state.records, rng);
        if drawn.is_none() {
            warn!("no tickets sold, raffle skipped");
        }
        drawn
    } else {
        None
    };

    let date = clock.now().with_timezone(&Local).date_naive();
    let blocks = report_blocks(date, &report, raffle.as_ref());
    emit_to_console(&blocks, console)?;

    let report_file = if config.mode.is_fundraiser() {
        Some(write_report_file(&config.output_dir, date, &blocks)?)
    } else {
        None
    };

    Ok(BoothOutcome {
        report,
        raffle,
        report_file,
    })
}
