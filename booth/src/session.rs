//! Console driver for a selling session.
//!
//! The driver asks the store which input comes next, collects it with the
//! validators, and prints whatever notice the reducer left behind.

use crate::prompt::{
    require_choice, require_integer, require_non_blank, require_payment, ConsoleError,
};
use crate::reducer::SaleStore;
use crate::types::{InputKind, SaleAction, SaleState};
use ticket_booth_core::environment::Console;
use tracing::{debug, info};

/// Prompt for the buyer name
pub const NAME_PROMPT: &str = "Enter your name (or xxx to quit): ";
/// Prompt for the buyer age
pub const AGE_PROMPT: &str = "Age: ";
/// Prompt for the payment method
pub const PAYMENT_PROMPT: &str = "Choose a payment method. (Cash or Credit): ";
/// Prompt offering the instructions
pub const INSTRUCTIONS_PROMPT: &str = "Do you want to read the instructions? (Yes or No): ";

/// How to use the booth
pub const INSTRUCTIONS: &str = "\
***** Instructions *****

For each ticket, enter the buyer's name, their age, and whether they are
paying by cash or credit. Buyers must be between 12 and 120 years old.

Tickets cost $7.50 for under 16s, $10.50 for ages 16 to 64, and $6.50 for
65 and over. Credit card payments carry a 5% surcharge.

Enter 'xxx' as the name once you are finished selling. When selling ends
the ticket report is shown and, at a fundraiser, a raffle winner is drawn.";

/// Ask whether to show the instructions, and show them on yes
///
/// Returns whether the instructions were shown.
///
/// # Errors
///
/// Returns [`ConsoleError`] if the console closes or fails.
pub fn offer_instructions<C: Console + ?Sized>(console: &mut C) -> Result<bool, ConsoleError> {
    let answer = require_choice(console, INSTRUCTIONS_PROMPT, 1, ["yes", "no"])?;
    let show = answer == "yes";
    if show {
        console.write_line(INSTRUCTIONS)?;
    }
    console.write_line("")?;
    Ok(show)
}

/// Collect one input of the requested kind as a sale action
fn read_action<C: Console + ?Sized>(
    console: &mut C,
    kind: InputKind,
) -> Result<SaleAction, ConsoleError> {
    Ok(match kind {
        InputKind::Name => SaleAction::NameEntered(require_non_blank(console, NAME_PROMPT)?),
        InputKind::Age => SaleAction::AgeEntered(require_integer(console, AGE_PROMPT)?),
        InputKind::Payment => {
            SaleAction::PaymentChosen(require_payment(console, PAYMENT_PROMPT)?)
        },
    })
}

/// Run the sale loop until the session is done
///
/// # Errors
///
/// Returns [`ConsoleError`] if the console closes or fails. Tickets sold
/// before the failure remain in the store.
pub fn run_sale<C: Console + ?Sized>(store: &mut SaleStore, console: &mut C) -> Result<(), ConsoleError> {
    info!(
        max_tickets = store.state(|s| s.max_tickets),
        mode = ?store.state(|s| s.mode),
        "selling started"
    );

    while let Some(kind) = store.state(SaleState::next_input) {
        let action = read_action(console, kind)?;
        store.send(action);

        if let Some(notice) = store.state(|s| s.last_notice) {
            debug!(?notice, "sale notice");
            console.write_line(&notice.to_string())?;
        }
    }

    info!(sold = store.state(SaleState::tickets_sold), "selling finished");
    Ok(())
}
