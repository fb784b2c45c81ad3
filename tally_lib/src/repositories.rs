use crate::account_categories::AccountCategory;
use crate::accounts::{Account, AccountCollection, AccountId};
use crate::currencies::{Currency, CurrencyCollection, CurrencyId};
use crate::errors::Error;
use crate::flow_signs::FlowSign;
use crate::formatters::Formatter;
use crate::goals::{GoalId, SavingsGoal};
use crate::multi_values::{MultiValue, Value};
use crate::transactions::{Transaction, TransactionId};
use std::cmp::Reverse;

#[derive(Default)]
pub struct Repository {
    pub(crate) currencies: CurrencyCollection,
    pub(crate) accounts: AccountCollection,
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) goals: Vec<SavingsGoal>,
}

/// One row of an account's ledger
pub struct LedgerEntry<'a> {
    pub id: TransactionId,
    pub transaction: &'a Transaction,

    // The account on the other side of the transfer
    pub counterpart: AccountId,
    pub sign: FlowSign,
}

impl Repository {
    pub fn add_currency(&mut self, currency: Currency) -> CurrencyId {
        self.currencies.add(currency)
    }
    pub fn get_currency(&self, id: CurrencyId) -> Option<&Currency> {
        self.currencies.get(id)
    }
    pub fn find_currency(&self, code: &str) -> Option<CurrencyId> {
        self.currencies.find(code)
    }
    pub fn currencies(&self) -> &CurrencyCollection {
        &self.currencies
    }
    pub(crate) fn currencies_mut(&mut self) -> &mut CurrencyCollection {
        &mut self.currencies
    }

    pub fn add_account(&mut self, account: Account) -> AccountId {
        if self.currencies.get(account.currency).is_none() {
            log::warn!("account {} uses an unregistered currency", account.name);
        }
        self.accounts.add(account)
    }
    pub fn get_account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(id)
    }
    pub fn find_account(&self, name_or_id: &str) -> Option<AccountId> {
        self.accounts.find(name_or_id)
    }
    pub fn iter_accounts(&self) -> impl Iterator<Item = (AccountId, &Account)> {
        self.accounts.iter_accounts()
    }
    pub fn iter_category(
        &self,
        category: AccountCategory,
    ) -> impl Iterator<Item = (AccountId, &Account)> {
        self.accounts.iter_category(category)
    }

    /// Both sides of the transaction must be known accounts.
    pub fn add_transaction(
        &mut self,
        tx: Transaction,
    ) -> Result<TransactionId, Error> {
        for id in [tx.source(), tx.target()] {
            if self.accounts.get(id).is_none() {
                return Err(Error::UnknownAccount(id.to_string()));
            }
        }
        self.transactions.push(tx);
        Ok(TransactionId(self.transactions.len() as u32))
    }

    pub fn iter_transactions(
        &self,
    ) -> impl Iterator<Item = (TransactionId, &Transaction)> {
        self.transactions
            .iter()
            .enumerate()
            .map(|(idx, tx)| (TransactionId(idx as u32 + 1), tx))
    }

    /// A goal can only be linked to one of the user's capital accounts.
    pub fn add_goal(&mut self, goal: SavingsGoal) -> Result<GoalId, Error> {
        if let Some(id) = goal.account {
            match self.accounts.get(id) {
                None => return Err(Error::UnknownAccount(id.to_string())),
                Some(acc) if !acc.kind.is_capital_account() => {
                    return Err(Error::InvalidGoalAccount(goal.name));
                }
                Some(_) => {}
            }
        }
        self.goals.push(goal);
        Ok(GoalId(self.goals.len() as u32))
    }

    pub fn iter_goals(&self) -> impl Iterator<Item = (GoalId, &SavingsGoal)> {
        self.goals
            .iter()
            .enumerate()
            .map(|(idx, g)| (GoalId(idx as u32 + 1), g))
    }

    /// The transactions involving an account, most recent first.  Entries on
    /// the same date keep the order in which they were added, latest first.
    pub fn ledger(
        &self,
        account: AccountId,
    ) -> Result<Vec<LedgerEntry<'_>>, Error> {
        if self.accounts.get(account).is_none() {
            return Err(Error::UnknownAccount(account.to_string()));
        }

        let mut entries = self
            .iter_transactions()
            .filter_map(|(id, tx)| {
                tx.counterpart(account).map(|counterpart| (id, tx, counterpart))
            })
            .map(|(id, transaction, counterpart)| {
                Ok(LedgerEntry {
                    id,
                    transaction,
                    counterpart,
                    sign: transaction.flow_sign(&self.accounts)?,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;
        entries.sort_by_key(|e| Reverse((e.transaction.date(), e.id)));
        Ok(entries)
    }

    pub fn display_value(&self, format: &Formatter, value: &Value) -> String {
        match self.currencies.get(value.currency) {
            Some(c) => format.display(value.amount, c),
            None => value.amount.to_string(),
        }
    }

    pub fn display_multi_value(
        &self,
        format: &Formatter,
        value: &MultiValue,
    ) -> String {
        value.display(format, &self.currencies)
    }
}
