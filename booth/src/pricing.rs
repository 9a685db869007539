//! Ticket pricing rules.

use crate::money::Money;
use crate::types::PaymentMethod;

/// Youngest buyer allowed in
pub const MIN_AGE: i64 = 12;
/// Oldest plausible buyer; anything above is treated as a typo
pub const MAX_AGE: i64 = 120;

/// Per-ticket cost to the fundraiser
pub const FIXED_COST: Money = Money::from_cents(500);
/// Credit card surcharge, in basis points of the ticket price
pub const CREDIT_SURCHARGE_BPS: i64 = 500;

const CHILD_PRICE: Money = Money::from_cents(750);
const ADULT_PRICE: Money = Money::from_cents(1050);
const SENIOR_PRICE: Money = Money::from_cents(650);

const ADULT_FROM: i64 = 16;
const SENIOR_FROM: i64 = 65;

/// How an entered age is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeCheck {
    /// Within `[MIN_AGE, MAX_AGE]`
    Accepted,
    /// Below `MIN_AGE`
    TooYoung,
    /// Above `MAX_AGE`
    TooOld,
}

/// Classify an entered age against the accepted range
#[must_use]
pub const fn check_age(age: i64) -> AgeCheck {
    if age < MIN_AGE {
        AgeCheck::TooYoung
    } else if age > MAX_AGE {
        AgeCheck::TooOld
    } else {
        AgeCheck::Accepted
    }
}

/// Ticket price for a buyer of `age`
///
/// Under 16 pay $7.50, 16 to 64 pay $10.50, 65 and over pay $6.50.
#[must_use]
pub const fn price_for_age(age: i64) -> Money {
    if age < ADULT_FROM {
        CHILD_PRICE
    } else if age < SENIOR_FROM {
        ADULT_PRICE
    } else {
        SENIOR_PRICE
    }
}

/// Surcharge owed on `ticket_price` for the chosen payment method
#[must_use]
pub const fn surcharge_for(ticket_price: Money, payment: PaymentMethod) -> Money {
    match payment {
        PaymentMethod::Cash => Money::ZERO,
        PaymentMethod::Credit => ticket_price.percent_bps(CREDIT_SURCHARGE_BPS),
    }
}

/// Fundraiser profit on one ticket; negative when the price is below cost
#[must_use]
pub fn profit_for(ticket_price: Money) -> Money {
    ticket_price - FIXED_COST
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    #[test]
    fn band_breakpoints() {
        assert_eq!(price_for_age(12), Money::from_cents(750));
        assert_eq!(price_for_age(15), Money::from_cents(750));
        assert_eq!(price_for_age(16), Money::from_cents(1050));
        assert_eq!(price_for_age(64), Money::from_cents(1050));
        assert_eq!(price_for_age(65), Money::from_cents(650));
        assert_eq!(price_for_age(120), Money::from_cents(650));
    }

    #[test]
    fn age_range_edges() {
        assert_eq!(check_age(11), AgeCheck::TooYoung);
        assert_eq!(check_age(12), AgeCheck::Accepted);
        assert_eq!(check_age(120), AgeCheck::Accepted);
        assert_eq!(check_age(121), AgeCheck::TooOld);
        assert_eq!(check_age(-3), AgeCheck::TooYoung);
    }

    #[test]
    fn credit_surcharge_is_five_percent() {
        assert_eq!(
            surcharge_for(Money::from_cents(750), PaymentMethod::Credit),
            Money::from_mills(375)
        );
        assert_eq!(surcharge_for(Money::from_cents(1050), PaymentMethod::Cash), Money::ZERO);
    }

    #[test]
    fn senior_ticket_profit() {
        assert_eq!(profit_for(Money::from_cents(650)), Money::from_cents(150));
        assert_eq!(profit_for(Money::from_cents(1050)), Money::from_cents(550));
    }

    proptest! {
        #[test]
        fn price_is_one_of_three_bands(age in 12i64..=120) {
            let price = price_for_age(age);
            prop_assert!([CHILD_PRICE, ADULT_PRICE, SENIOR_PRICE].contains(&price));
        }

        #[test]
        fn price_is_a_step_function(a in 12i64..=120, b in 12i64..=120) {
            let band = |age: i64| u8::from(age >= ADULT_FROM) + u8::from(age >= SENIOR_FROM);
            if band(a) == band(b) {
                prop_assert_eq!(price_for_age(a), price_for_age(b));
            }
        }

        #[test]
        fn surcharge_is_zero_or_five_percent(age in 12i64..=120) {
            let price = price_for_age(age);
            prop_assert_eq!(surcharge_for(price, PaymentMethod::Cash), Money::ZERO);
            prop_assert_eq!(
                surcharge_for(price, PaymentMethod::Credit).mills() * 20,
                price.mills()
            );
        }
    }
}
