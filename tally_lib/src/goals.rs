use crate::accounts::AccountId;
use crate::currencies::CurrencyId;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, Default, PartialOrd, Ord)]
pub struct GoalId(pub u32);

/// An amount the user is saving towards, optionally by some date.
#[derive(Debug)]
pub struct SavingsGoal {
    pub name: String,
    pub target: Decimal,
    pub saved: Decimal,
    pub currency: CurrencyId,

    // The capital account where the money is kept, if any
    pub account: Option<AccountId>,
    pub deadline: Option<NaiveDate>,
}

impl SavingsGoal {
    pub fn new(
        name: &str,
        target: Decimal,
        saved: Decimal,
        currency: CurrencyId,
    ) -> Self {
        SavingsGoal {
            name: name.into(),
            target,
            saved,
            currency,
            account: None,
            deadline: None,
        }
    }

    pub fn set_account(mut self, account: Option<AccountId>) -> Self {
        self.account = account;
        self
    }

    pub fn set_deadline(mut self, deadline: Option<NaiveDate>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Fraction of the target already saved, in [0, 1].
    pub fn progress(&self) -> Decimal {
        if self.target <= Decimal::ZERO {
            return Decimal::ONE;
        }
        (self.saved / self.target).clamp(Decimal::ZERO, Decimal::ONE)
    }

    pub fn remaining(&self) -> Decimal {
        (self.target - self.saved).max(Decimal::ZERO)
    }

    pub fn is_reached(&self) -> bool {
        self.remaining().is_zero()
    }

    /// How much to put aside each month to reach the target on time.
    /// The remaining amount is split over the months left until the
    /// deadline, with a started month counting as a full one.
    pub fn monthly_contribution(&self, today: NaiveDate) -> Option<Decimal> {
        let deadline = self.deadline?;
        if deadline < today {
            return None;
        }
        if self.is_reached() {
            return Some(Decimal::ZERO);
        }
        let months = months_between(today, deadline).max(1);
        Some(self.remaining() / Decimal::from(months))
    }
}

/// Number of started months from `start` to `end`.
fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut months = (end.year() - start.year()) * 12 + end.month() as i32
        - start.month() as i32;
    if end.day() > start.day() {
        months += 1;
    }
    months
}
