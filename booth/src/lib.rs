//! # Ticket Booth
//!
//! Point-of-sale console for a mini movie fundraiser.
//!
//! The operator sells tickets one buyer at a time. Each sale takes a name,
//! an age and a payment method; the age sets the price and credit payments
//! add a surcharge. When selling ends the booth prints a ticket table with
//! totals, draws a raffle winner and saves the report to a dated file.
//!
//! ## Architecture
//!
//! - [`reducer`]: the sale state machine ([`SaleReducer`]) run by a
//!   [`ticket_booth_core::store::Store`]
//! - [`session`]: the console driver feeding validated input to the store
//! - [`prompt`]: validators that re-prompt until input is acceptable
//! - [`pricing`] and [`money`]: pure pricing rules over exact amounts
//! - [`report`], [`raffle`], [`output`]: what happens after selling
//! - [`app`]: one complete run, wired from [`config::Config`]
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use rand::{rngs::StdRng, SeedableRng};
//! use ticket_booth::{config::Config, run_booth, SaleMode};
//! use ticket_booth_testing::{test_clock, ScriptedConsole};
//!
//! let config = Config {
//!     mode: SaleMode::Simple,
//!     skip_instructions: true,
//!     ..Config::default()
//! };
//! let mut console = ScriptedConsole::new(["Alice", "30", "cash", "xxx"]);
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! let outcome = run_booth(&config, &mut console, Arc::new(test_clock()), &mut rng);
//! let report = outcome.map(|o| o.report);
//! assert_eq!(report.map(|r| r.tickets_sold).ok(), Some(1));
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod money;
pub mod output;
pub mod pricing;
pub mod prompt;
pub mod raffle;
pub mod reducer;
pub mod report;
pub mod session;
pub mod types;

pub use app::{run_booth, BoothOutcome};
pub use error::BoothError;
pub use money::Money;
pub use reducer::{SaleEnvironment, SaleReducer, SaleStore};
pub use report::Report;
pub use types::{PaymentMethod, SaleAction, SaleMode, SaleState, TicketRecord};
