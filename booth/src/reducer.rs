//! Reducer logic for a selling session.
//!
//! The reducer walks each ticket through name, age and payment. Rejected
//! ages and refused quits leave a notice in state and send the flow back to
//! the name prompt without using up a ticket.

use crate::pricing::{check_age, price_for_age, surcharge_for, AgeCheck};
use crate::types::{
    SaleAction, SaleNotice, SalePhase, SaleState, TicketRecord, QUIT_SENTINEL,
};
use std::sync::Arc;
use ticket_booth_core::{
    effect::Effect, environment::Clock, reducer::Reducer, smallvec, store::Store, SmallVec,
};
use tracing::{debug, info};

/// Environment dependencies for the sale reducer
#[derive(Clone)]
pub struct SaleEnvironment {
    /// Clock for stamping sales
    pub clock: Arc<dyn Clock>,
}

impl SaleEnvironment {
    /// Creates a new `SaleEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

/// Store running a selling session
pub type SaleStore = Store<SaleState, SaleAction, SaleEnvironment, SaleReducer>;

/// Reducer for a selling session
#[derive(Clone, Debug, Default)]
pub struct SaleReducer;

impl SaleReducer {
    /// Creates a new `SaleReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn name_entered(state: &mut SaleState, name: String) {
        if name != QUIT_SENTINEL {
            state.phase = SalePhase::AwaitingAge { name };
            return;
        }

        if state.mode.requires_sale_before_quit() && state.tickets_sold() == 0 {
            debug!("quit refused with no tickets sold");
            state.last_notice = Some(SaleNotice::QuitBlocked);
            return;
        }

        info!(sold = state.tickets_sold(), "selling stopped by operator");
        state.phase = SalePhase::Done;
    }

    fn age_entered(state: &mut SaleState, name: String, age: i64) {
        let notice = match check_age(age) {
            AgeCheck::Accepted => {
                state.phase = SalePhase::AwaitingPayment {
                    name,
                    age,
                    ticket_price: price_for_age(age),
                };
                return;
            },
            AgeCheck::TooYoung => SaleNotice::TooYoung,
            AgeCheck::TooOld => SaleNotice::LikelyTypo,
        };

        debug!(age, ?notice, "age rejected");
        state.last_notice = Some(notice);
        state.phase = SalePhase::AwaitingName;
    }

    fn ticket_sold(state: &mut SaleState, record: TicketRecord) {
        if state.is_done() || state.is_sold_out() {
            debug!(name = %record.name, "sale ignored, session closed");
            return;
        }

        info!(
            name = %record.name,
            age = record.age,
            payment = %record.payment,
            total = %record.total(),
            "ticket sold"
        );
        state.records.push(record);
        state.phase = if state.is_sold_out() {
            SalePhase::Done
        } else {
            SalePhase::AwaitingName
        };
    }
}

impl Reducer for SaleReducer {
    type State = SaleState;
    type Action = SaleAction;
    type Environment = SaleEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        state.last_notice = None;

        match action {
            SaleAction::NameEntered(name) => {
                if state.phase == SalePhase::AwaitingName {
                    Self::name_entered(state, name);
                }
                SmallVec::new()
            },

            SaleAction::AgeEntered(age) => {
                let phase = std::mem::replace(&mut state.phase, SalePhase::AwaitingName);
                let SalePhase::AwaitingAge { name } = phase else {
                    state.phase = phase;
                    return SmallVec::new();
                };
                Self::age_entered(state, name, age);
                SmallVec::new()
            },

            SaleAction::PaymentChosen(payment) => {
                let phase = std::mem::replace(&mut state.phase, SalePhase::AwaitingName);
                let SalePhase::AwaitingPayment {
                    name,
                    age,
                    ticket_price,
                } = phase
                else {
                    state.phase = phase;
                    return SmallVec::new();
                };

                let record = TicketRecord {
                    name,
                    age,
                    ticket_price,
                    surcharge: surcharge_for(ticket_price, payment),
                    payment,
                    sold_at: env.clock.now(),
                };
                smallvec![Effect::send(SaleAction::TicketSold(record))]
            },

            SaleAction::TicketSold(record) => {
                Self::ticket_sold(state, record);
                SmallVec::new()
            },
        }
    }
}
