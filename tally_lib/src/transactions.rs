use crate::accounts::{AccountCollection, AccountId};
use crate::currencies::CurrencyId;
use crate::errors::Error;
use crate::flow_signs::{resolve_sign, FlowSign};
use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, Default, PartialOrd, Ord)]
pub struct TransactionId(pub u32);

/// Details used to build a new transaction.
/// Such objects are short-lived.  All fields are public, so one can use
/// ```text
/// Transaction::new(TransactionDetails {
///     description: Some("Rent"),
///     ..details
/// })
/// ```
pub struct TransactionDetails<'a> {
    pub source: AccountId,
    pub target: AccountId,

    // Always given as a positive value.  The direction is carried by the
    // source and target, and the visual sign by the kinds of both accounts.
    pub amount: Decimal,
    pub currency: CurrencyId,
    pub date: NaiveDate,
    pub description: Option<&'a str>,
}

/// A transfer of money from one account to another.
#[derive(Debug)]
pub struct Transaction {
    source: AccountId,
    target: AccountId,
    amount: Decimal,
    currency: CurrencyId,
    date: NaiveDate,
    description: Option<String>,
}

impl Transaction {
    pub fn new(details: TransactionDetails) -> Self {
        Transaction {
            source: details.source,
            target: details.target,
            amount: details.amount.abs(),
            currency: details.currency,
            date: details.date,
            description: details.description.and_then(|d| {
                let d = d.trim();
                if d.is_empty() {
                    None
                } else {
                    Some(d.into())
                }
            }),
        }
    }

    pub fn source(&self) -> AccountId {
        self.source
    }
    pub fn target(&self) -> AccountId {
        self.target
    }
    pub fn amount(&self) -> Decimal {
        self.amount
    }
    pub fn currency(&self) -> CurrencyId {
        self.currency
    }
    pub fn date(&self) -> NaiveDate {
        self.date
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn involves(&self, account: AccountId) -> bool {
        self.source == account || self.target == account
    }

    /// The other side of the transfer, when seen from `account`.
    pub fn counterpart(&self, account: AccountId) -> Option<AccountId> {
        if self.source == account {
            Some(self.target)
        } else if self.target == account {
            Some(self.source)
        } else {
            None
        }
    }

    /// The sign of this transfer, from the kinds of its source and target.
    pub fn flow_sign(
        &self,
        accounts: &AccountCollection,
    ) -> Result<FlowSign, Error> {
        let kind_of = |id: AccountId| {
            accounts
                .get(id)
                .map(|acc| acc.kind)
                .ok_or_else(|| Error::UnknownAccount(id.to_string()))
        };
        Ok(resolve_sign(kind_of(self.source)?, kind_of(self.target)?))
    }

    /// The amount with the flow sign applied.
    pub fn signed_amount(
        &self,
        accounts: &AccountCollection,
    ) -> Result<Decimal, Error> {
        Ok(self.amount * Decimal::from(self.flow_sign(accounts)?.as_i8()))
    }
}
