//! Domain types for the ticket booth.

use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name input that ends selling
pub const QUIT_SENTINEL: &str = "xxx";

/// How the buyer pays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash, no surcharge
    Cash,
    /// Credit card, surcharged
    Credit,
}

impl PaymentMethod {
    /// Canonical option strings, in prompt order
    pub const OPTIONS: [&'static str; 2] = ["cash", "credit"];

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Credit => "credit",
        }
    }

    /// Map a canonical option string back to a method
    #[must_use]
    pub fn from_option(option: &str) -> Option<Self> {
        match option {
            "cash" => Some(Self::Cash),
            "credit" => Some(Self::Credit),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selling rules for a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleMode {
    /// Quit at any time, no raffle, console report only
    Simple,
    /// At least one sale before quitting, raffle draw, report file written
    #[default]
    Fundraiser,
}

impl SaleMode {
    /// Whether a quit request is refused while nothing has been sold
    #[must_use]
    pub const fn requires_sale_before_quit(self) -> bool {
        matches!(self, Self::Fundraiser)
    }

    /// Whether the session ends with a raffle and a report file
    #[must_use]
    pub const fn is_fundraiser(self) -> bool {
        matches!(self, Self::Fundraiser)
    }
}

/// Unrecognised [`SaleMode`] name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sale mode {0:?} (expected \"simple\" or \"fundraiser\")")]
pub struct UnknownSaleMode(pub String);

impl FromStr for SaleMode {
    type Err = UnknownSaleMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "fundraiser" => Ok(Self::Fundraiser),
            _ => Err(UnknownSaleMode(s.to_string())),
        }
    }
}

/// One accepted sale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRecord {
    /// Buyer name as entered
    pub name: String,
    /// Buyer age, within the accepted range
    pub age: i64,
    /// Price for the buyer's age band
    pub ticket_price: Money,
    /// Credit surcharge, zero for cash
    pub surcharge: Money,
    /// How the buyer paid
    pub payment: PaymentMethod,
    /// When the sale was recorded
    pub sold_at: DateTime<Utc>,
}

impl TicketRecord {
    /// Amount the buyer paid (price plus surcharge)
    #[must_use]
    pub fn total(&self) -> Money {
        self.ticket_price + self.surcharge
    }
}

/// Where the current sale is in the per-ticket flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SalePhase {
    /// Waiting for a buyer name (or the quit sentinel)
    AwaitingName,
    /// Name taken, waiting for the buyer's age
    AwaitingAge {
        /// Buyer name
        name: String,
    },
    /// Age accepted and priced, waiting for the payment method
    AwaitingPayment {
        /// Buyer name
        name: String,
        /// Buyer age
        age: i64,
        /// Price for the age band
        ticket_price: Money,
    },
    /// Selling has finished
    Done,
}

/// Which input the sale loop needs next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Buyer name
    Name,
    /// Buyer age
    Age,
    /// Payment method
    Payment,
}

/// Operator-facing message produced by the last action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleNotice {
    /// Age below the minimum; ticket not sold
    TooYoung,
    /// Age above the maximum; ticket not sold
    LikelyTypo,
    /// Quit requested before any ticket was sold
    QuitBlocked,
}

impl fmt::Display for SaleNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TooYoung => "Sorry, you are too young for this movie",
            Self::LikelyTypo => "That looks like a typo, please try again.",
            Self::QuitBlocked => "You must sell at least one ticket before quitting.",
        })
    }
}

/// State of one selling session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleState {
    /// Accepted sales in the order they were made
    pub records: Vec<TicketRecord>,
    /// Ticket capacity for the session
    pub max_tickets: usize,
    /// Selling rules
    pub mode: SaleMode,
    /// Position in the per-ticket flow
    pub phase: SalePhase,
    /// Message from the last action, if any
    pub last_notice: Option<SaleNotice>,
}

impl SaleState {
    /// Fresh session; a capacity of zero starts finished
    #[must_use]
    pub const fn new(max_tickets: usize, mode: SaleMode) -> Self {
        let phase = if max_tickets == 0 {
            SalePhase::Done
        } else {
            SalePhase::AwaitingName
        };
        Self {
            records: Vec::new(),
            max_tickets,
            mode,
            phase,
            last_notice: None,
        }
    }

    /// Tickets sold so far
    #[must_use]
    pub fn tickets_sold(&self) -> usize {
        self.records.len()
    }

    /// Tickets still available
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.max_tickets.saturating_sub(self.tickets_sold())
    }

    /// Whether every ticket has been sold
    #[must_use]
    pub fn is_sold_out(&self) -> bool {
        self.tickets_sold() >= self.max_tickets
    }

    /// Whether selling has finished
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self.phase, SalePhase::Done)
    }

    /// The input the sale loop should collect next, `None` once done
    #[must_use]
    pub const fn next_input(&self) -> Option<InputKind> {
        match self.phase {
            SalePhase::AwaitingName => Some(InputKind::Name),
            SalePhase::AwaitingAge { .. } => Some(InputKind::Age),
            SalePhase::AwaitingPayment { .. } => Some(InputKind::Payment),
            SalePhase::Done => None,
        }
    }
}

/// Sale actions
///
/// The first three are operator input; `TicketSold` is fed back by the
/// reducer once a sale is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaleAction {
    /// A non-blank name was entered
    NameEntered(String),
    /// An integer age was entered
    AgeEntered(i64),
    /// A payment method was chosen
    PaymentChosen(PaymentMethod),
    /// A sale was completed
    TicketSold(TicketRecord),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_starts_done() {
        let state = SaleState::new(0, SaleMode::Fundraiser);
        assert!(state.is_done());
        assert_eq!(state.next_input(), None);
        assert!(state.is_sold_out());
    }

    #[test]
    fn fresh_state_asks_for_a_name() {
        let state = SaleState::new(3, SaleMode::Simple);
        assert_eq!(state.next_input(), Some(InputKind::Name));
        assert_eq!(state.remaining(), 3);
    }

    #[test]
    fn sale_mode_parses_case_insensitively() {
        assert_eq!("Simple".parse::<SaleMode>(), Ok(SaleMode::Simple));
        assert_eq!(" FUNDRAISER ".parse::<SaleMode>(), Ok(SaleMode::Fundraiser));
        assert!("raffle".parse::<SaleMode>().is_err());
    }

    #[test]
    fn payment_options_map_back_to_methods() {
        for option in PaymentMethod::OPTIONS {
            let method = PaymentMethod::from_option(option);
            assert_eq!(method.map(PaymentMethod::as_str), Some(option));
        }
        assert_eq!(PaymentMethod::from_option("cheque"), None);
    }
}
