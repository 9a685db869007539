//! Raffle draw over sold tickets.

use crate::money::Money;
use crate::types::TicketRecord;
use rand::Rng;
use tracing::info;

/// The drawn ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaffleResult {
    /// Position of the winning ticket in sale order
    pub index: usize,
    /// Name on the winning ticket
    pub winner_name: String,
    /// What the winner paid, now theirs back
    pub winner_total: Money,
}

impl RaffleResult {
    /// Announcement text for the report
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "---- Raffle Winner ----\n\
             Congratulations {}. You have won {} ie: your ticket is free!",
            self.winner_name, self.winner_total
        )
    }
}

/// Draw one ticket uniformly at random
///
/// Tickets are drawn by position, so buyers sharing a name are separate
/// entries. Returns `None` when nothing was sold.
pub fn draw<R: Rng + ?Sized>(records: &[TicketRecord], rng: &mut R) -> Option<RaffleResult> {
    if records.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..records.len());
    let winner = &records[index];
    info!(index, name = %winner.name, total = %winner.total(), "raffle drawn");

    Some(RaffleResult {
        index,
        winner_name: winner.name.clone(),
        winner_total: winner.total(),
    })
}
