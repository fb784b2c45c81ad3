use crate::account_categories::AccountCategory;
use crate::accounts::{Account, AccountId};
use crate::currencies::CurrencyId;
use crate::multi_values::{MultiValue, Value};
use crate::repositories::Repository;
use itertools::Itertools;

//--------------------------------------------------------------
// Settings
//--------------------------------------------------------------

#[derive(Default)]
pub struct Settings {
    // Only take into account accounts in this currency
    pub currency: Option<CurrencyId>,

    // Do not show rows if the balance is zero
    pub hide_zero_rows: bool,
}

//--------------------------------------------------------------
// Summary
//--------------------------------------------------------------

pub struct SummaryRow<'a> {
    pub account: AccountId,
    pub data: &'a Account,
}

/// The balance of the user's capital and debts.
pub struct Summary<'a> {
    pub capital: MultiValue,
    pub debt: MultiValue,

    // capital - debt
    pub networth: MultiValue,

    // Accounts that contributed to the totals, grouped by category and
    // sorted by name.
    pub rows: Vec<(AccountCategory, Vec<SummaryRow<'a>>)>,
}

impl<'a> Summary<'a> {
    pub fn new(repo: &'a Repository, settings: &Settings) -> Self {
        let mut capital = MultiValue::default();
        let mut debt = MultiValue::default();

        let rows = repo
            .accounts
            .iter_accounts()
            .filter(|(_, acc)| {
                if acc.closed {
                    log::debug!("summary: skipping closed account {}", acc.name);
                    return false;
                }
                settings.currency.map_or(true, |c| c == acc.currency)
                    && !(settings.hide_zero_rows && acc.balance.is_zero())
            })
            .filter(|(_, acc)| match acc.category() {
                AccountCategory::Capital | AccountCategory::Debt => true,
                AccountCategory::External | AccountCategory::System => false,
            })
            .inspect(|(_, acc)| {
                let value = Value::new(acc.balance, acc.currency);
                match acc.category() {
                    AccountCategory::Capital => capital += value,
                    AccountCategory::Debt => debt += value,
                    AccountCategory::External | AccountCategory::System => {}
                }
            })
            .sorted_by(|(_, a), (_, b)| {
                a.category()
                    .cmp(&b.category())
                    .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            })
            .chunk_by(|(_, acc)| acc.category())
            .into_iter()
            .map(|(category, group)| {
                (
                    category,
                    group
                        .map(|(account, data)| SummaryRow { account, data })
                        .collect(),
                )
            })
            .collect();

        let networth = &capital - &debt;
        Summary {
            capital,
            debt,
            networth,
            rows,
        }
    }
}
