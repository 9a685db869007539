//! Exact money arithmetic.
//!
//! Amounts are stored as whole mills (thousandths of a dollar). A 5% credit
//! surcharge on $7.50 is $0.375, which needs the third decimal place to be
//! held exactly; rounding to cents happens only when an amount is displayed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

const MILLS_PER_CENT: i64 = 10;
const MILLS_PER_DOLLAR: i64 = 1000;
const BPS_PER_WHOLE: i64 = 10_000;

/// A signed dollar amount with mill precision
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero dollars
    pub const ZERO: Self = Self(0);

    /// Create from whole mills
    #[must_use]
    pub const fn from_mills(mills: i64) -> Self {
        Self(mills)
    }

    /// Create from whole cents
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents * MILLS_PER_CENT)
    }

    /// Create from whole dollars
    #[must_use]
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars * MILLS_PER_DOLLAR)
    }

    /// Underlying mill count
    #[must_use]
    pub const fn mills(self) -> i64 {
        self.0
    }

    /// `bps` basis points of this amount, truncated toward zero to a whole mill
    ///
    /// Every ticket price is a whole number of cents, so a 500 bps share
    /// is always exact.
    #[must_use]
    pub const fn percent_bps(self, bps: i64) -> Self {
        Self(self.0 * bps / BPS_PER_WHOLE)
    }

    /// Nearest whole cent, halves rounded away from zero
    #[must_use]
    pub const fn rounded_cents(self) -> i64 {
        let cents = self.0 / MILLS_PER_CENT;
        let rest = self.0 % MILLS_PER_CENT;
        if rest.abs() * 2 >= MILLS_PER_CENT {
            cents + self.0.signum()
        } else {
            cents
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// `$12.34`, or `-$1.50` for negative amounts
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.rounded_cents();
        let sign = if cents < 0 { "-" } else { "" };
        let abs = cents.unsigned_abs();
        let text = format!("{sign}${}.{:02}", abs / 100, abs % 100);
        f.pad(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{any, prop_assert_eq, proptest};

    #[test]
    fn formats_two_decimals_with_currency_symbol() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::from_dollars(5).to_string(), "$5.00");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn rounds_half_mill_up_at_display() {
        assert_eq!(Money::from_mills(375).to_string(), "$0.38");
        assert_eq!(Money::from_mills(325).to_string(), "$0.33");
        assert_eq!(Money::from_mills(374).to_string(), "$0.37");
    }

    #[test]
    fn negative_amounts_keep_sign_outside_symbol() {
        assert_eq!(Money::from_cents(-150).to_string(), "-$1.50");
        assert_eq!(Money::from_mills(-375).to_string(), "-$0.38");
        assert_eq!(Money::from_mills(-4).to_string(), "$0.00");
    }

    #[test]
    fn percent_of_ticket_prices_is_exact() {
        assert_eq!(Money::from_cents(750).percent_bps(500), Money::from_mills(375));
        assert_eq!(Money::from_cents(1050).percent_bps(500), Money::from_mills(525));
        assert_eq!(Money::from_cents(650).percent_bps(500), Money::from_mills(325));
    }

    #[test]
    fn sum_keeps_unrounded_mills() {
        let surcharge = Money::from_mills(375);
        let total: Money = [surcharge, surcharge, surcharge].iter().sum();
        assert_eq!(total, Money::from_mills(1125));
        assert_eq!(total.to_string(), "$1.13");
    }

    #[test]
    fn display_honours_width() {
        assert_eq!(format!("{:>8}", Money::from_cents(750)), "   $7.50");
    }

    proptest! {
        #[test]
        fn formatting_is_stable(mills in any::<i32>()) {
            let money = Money::from_mills(i64::from(mills));
            prop_assert_eq!(money.to_string(), money.to_string());
        }

        #[test]
        fn whole_cents_round_trip_through_rounding(cents in -1_000_000i64..1_000_000) {
            prop_assert_eq!(Money::from_cents(cents).rounded_cents(), cents);
        }

        #[test]
        fn addition_matches_mill_arithmetic(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
            prop_assert_eq!((Money::from_mills(a) + Money::from_mills(b)).mills(), a + b);
            prop_assert_eq!((Money::from_mills(a) - Money::from_mills(b)).mills(), a - b);
        }
    }
}
