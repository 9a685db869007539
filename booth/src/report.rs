//! Sales report.
//!
//! [`Report::build`] derives every column from the records with exact
//! [`Money`] arithmetic. Amounts are rounded to cents only when rendered.

use crate::money::Money;
use crate::pricing::profit_for;
use crate::types::TicketRecord;

const HEADERS: [&str; 5] = ["Name", "Ticket Price", "Surcharge", "Total", "Profit"];

/// One ticket in the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Buyer name
    pub name: String,
    /// Price for the age band
    pub ticket_price: Money,
    /// Credit surcharge
    pub surcharge: Money,
    /// Price plus surcharge
    pub total: Money,
    /// Price minus the fixed per-ticket cost
    pub profit: Money,
}

impl ReportRow {
    fn from_record(record: &TicketRecord) -> Self {
        Self {
            name: record.name.clone(),
            ticket_price: record.ticket_price,
            surcharge: record.surcharge,
            total: record.total(),
            profit: profit_for(record.ticket_price),
        }
    }

    fn cells(&self) -> [String; 5] {
        [
            self.name.clone(),
            self.ticket_price.to_string(),
            self.surcharge.to_string(),
            self.total.to_string(),
            self.profit.to_string(),
        ]
    }
}

/// Summary of a finished selling session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// One row per ticket, in the order sold
    pub rows: Vec<ReportRow>,
    /// Sum of every ticket total
    pub total_sales: Money,
    /// Sum of every ticket profit
    pub total_profit: Money,
    /// Tickets sold
    pub tickets_sold: usize,
    /// Ticket capacity
    pub max_tickets: usize,
}

impl Report {
    /// Build the report for `records` out of a capacity of `max_tickets`
    #[must_use]
    pub fn build(records: &[TicketRecord], max_tickets: usize) -> Self {
        let rows: Vec<ReportRow> = records.iter().map(ReportRow::from_record).collect();
        let total_sales = rows.iter().map(|row| row.total).sum();
        let total_profit = rows.iter().map(|row| row.profit).sum();

        Self {
            tickets_sold: rows.len(),
            rows,
            total_sales,
            total_profit,
            max_tickets,
        }
    }

    /// Whether every ticket was sold
    #[must_use]
    pub const fn all_sold(&self) -> bool {
        self.tickets_sold >= self.max_tickets
    }

    /// Tickets left unsold
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.max_tickets.saturating_sub(self.tickets_sold)
    }

    /// Column-aligned ticket table
    ///
    /// Names are left aligned, amounts right aligned.
    #[must_use]
    pub fn render_table(&self) -> String {
        let cells: Vec<[String; 5]> = self.rows.iter().map(ReportRow::cells).collect();

        let mut widths = HEADERS.map(str::len);
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        push_line(&mut out, &HEADERS.map(String::from), &widths);
        for row in &cells {
            push_line(&mut out, row, &widths);
        }
        out.truncate(out.trim_end_matches('\n').len());
        out
    }

    /// Totals lines, one per aggregate
    #[must_use]
    pub fn summary_lines(&self) -> [String; 2] {
        [
            format!("Total Ticket Sales: {}", self.total_sales),
            format!("Total Profit: {}", self.total_profit),
        ]
    }

    /// Sold-out or tickets-remaining status
    #[must_use]
    pub fn status_line(&self) -> String {
        if self.all_sold() {
            "Congratulations, you have sold all of the tickets.".to_string()
        } else {
            format!(
                "You have sold {} ticket/s. There are {} ticket/s remaining",
                self.tickets_sold,
                self.remaining()
            )
        }
    }
}

fn push_line(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let mut line = String::new();
    for (column, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if column == 0 {
            line.push_str(&format!("{cell:<width$}"));
        } else {
            line.push_str(&format!("  {cell:>width$}"));
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
