//! Report output to the console and to a dated file.

use crate::error::BoothError;
use crate::prompt::ConsoleError;
use crate::raffle::RaffleResult;
use crate::report::Report;
use chrono::{Datelike, NaiveDate};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use ticket_booth_core::environment::Console;
use tracing::info;

/// `MMF_YYYY_MM_DD.txt` for `date`
#[must_use]
pub fn report_file_name(date: NaiveDate) -> String {
    format!(
        "MMF_{:04}_{:02}_{:02}.txt",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Report heading carrying the sale date
#[must_use]
pub fn heading(date: NaiveDate) -> String {
    format!(
        "*** Mini Movie Fundraiser Report - {} ***",
        date.format("%d/%m/%Y")
    )
}

/// The report as ordered text blocks
///
/// Heading, ticket table, totals, status, then the raffle section when a
/// draw took place.
#[must_use]
pub fn report_blocks(date: NaiveDate, report: &Report, raffle: Option<&RaffleResult>) -> Vec<String> {
    let mut blocks = vec![
        heading(date),
        format!("----- Ticket Data -----\n\n{}", report.render_table()),
        report.summary_lines().join("\n"),
        report.status_line(),
    ];
    if let Some(raffle) = raffle {
        blocks.push(raffle.render());
    }
    blocks
}

/// Write each block followed by a blank line
///
/// # Errors
///
/// Returns the underlying I/O error if writing fails.
pub fn emit<W: Write + ?Sized>(blocks: &[String], sink: &mut W) -> io::Result<()> {
    for block in blocks {
        writeln!(sink, "{block}")?;
        writeln!(sink)?;
    }
    Ok(())
}

/// Show each block on the console, separated by blank lines
///
/// # Errors
///
/// Returns [`ConsoleError::Io`] if the console fails.
pub fn emit_to_console<C: Console + ?Sized>(
    blocks: &[String],
    console: &mut C,
) -> Result<(), ConsoleError> {
    for block in blocks {
        console.write_line(block)?;
        console.write_line("")?;
    }
    Ok(())
}

/// Create or truncate the dated report file in `dir` and write `blocks`
///
/// The file is flushed and closed before returning.
///
/// # Errors
///
/// Returns [`BoothError::ReportFile`] if the file cannot be created or written.
pub fn write_report_file(dir: &Path, date: NaiveDate, blocks: &[String]) -> Result<PathBuf, BoothError> {
    let path = dir.join(report_file_name(date));
    let to_error = |source| BoothError::ReportFile {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    emit(blocks, &mut writer).map_err(to_error)?;
    writer.flush().map_err(to_error)?;
    drop(writer);

    info!(path = %path.display(), "report file written");
    Ok(path)
}
