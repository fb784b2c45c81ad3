use crate::account_categories::AccountCategory;
use crate::account_kinds::AccountKind;
use crate::currencies::CurrencyId;
use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Default)]
pub struct AccountCollection(Vec<Account>);

impl AccountCollection {
    pub fn add(&mut self, account: Account) -> AccountId {
        self.0.push(account);
        AccountId(self.0.len() as u32)
    }

    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.0.get((id.0 as usize).checked_sub(1)?)
    }

    /// Find an account by name (case-insensitive) or by numeric id.
    pub fn find(&self, name_or_id: &str) -> Option<AccountId> {
        if let Ok(id) = name_or_id.parse::<u32>() {
            if self.get(AccountId(id)).is_some() {
                return Some(AccountId(id));
            }
        }
        self.iter_accounts()
            .find(|(_, acc)| acc.name.eq_ignore_ascii_case(name_or_id))
            .map(|(id, _)| id)
    }

    pub fn iter_accounts(&self) -> impl Iterator<Item = (AccountId, &Account)> {
        self.0
            .iter()
            .enumerate()
            .map(|(idx, acc)| (AccountId(idx as u32 + 1), acc))
    }

    pub fn iter_category(
        &self,
        category: AccountCategory,
    ) -> impl Iterator<Item = (AccountId, &Account)> {
        self.iter_accounts()
            .filter(move |(_, acc)| acc.kind.category() == category)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, Default, PartialOrd, Ord)]
pub struct AccountId(pub u32);

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Either a bank account, a debt, or one of the external accounts money
/// comes from or goes to.
///
/// The balance is the one reported by the server.  For debt accounts, it is
/// the amount still owed, as a positive value.  External accounts have no
/// meaningful balance.

#[derive(Debug)]
pub struct Account {
    // Short name as displayed to users
    pub name: String,

    pub kind: AccountKind,
    pub currency: CurrencyId,
    pub balance: Decimal,
    pub closed: bool,

    // When the account was opened
    pub opened_on: Option<NaiveDate>,
}

impl Account {
    pub fn new(
        name: &str,
        kind: AccountKind,
        currency: CurrencyId,
        balance: Decimal,
    ) -> Self {
        Account {
            name: name.into(),
            kind,
            currency,
            balance,
            closed: false,
            opened_on: None,
        }
    }

    pub fn set_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn set_opened_on(mut self, opened_on: Option<NaiveDate>) -> Self {
        self.opened_on = opened_on;
        self
    }

    pub fn category(&self) -> AccountCategory {
        self.kind.category()
    }
}
