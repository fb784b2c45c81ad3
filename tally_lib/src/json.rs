//! Reads a snapshot of the records returned by the server.
//!
//! ```json
//! {
//!   "currencies": [{"code": "EUR", "symbol": "€", "symbol_after": true,
//!                   "precision": 2}],
//!   "accounts": [{"id": 12, "name": "Checking", "kind": "capital_normal",
//!                 "currency": "EUR", "balance": "1200.50"}],
//!   "transactions": [{"source": 12, "target": 14, "amount": "20",
//!                     "date": "2024-03-01", "description": "Rent"}],
//!   "goals": [{"name": "Holidays", "target": "2000", "saved": "500",
//!              "currency": "EUR", "account": 13,
//!              "deadline": "2024-07-01"}]
//! }
//! ```
//!
//! Only "accounts" is mandatory.  Currencies not listed are taken from the
//! built-in ISO 4217 table.

use crate::account_kinds::AccountKind;
use crate::accounts::{Account, AccountId};
use crate::currencies::Currency;
use crate::errors::Error;
use crate::goals::SavingsGoal;
use crate::importers::Importer;
use crate::repositories::Repository;
use crate::transactions::{Transaction, TransactionDetails};
use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    currencies: Vec<RawCurrency>,
    accounts: Vec<RawAccount>,
    #[serde(default)]
    transactions: Vec<RawTransaction>,
    #[serde(default)]
    goals: Vec<RawGoal>,
}

#[derive(Deserialize)]
struct RawCurrency {
    code: String,
    symbol: String,
    #[serde(default)]
    symbol_after: bool,
    precision: u8,
}

#[derive(Deserialize)]
struct RawAccount {
    id: u64,
    name: String,
    kind: String,
    currency: String,
    #[serde(default)]
    balance: Decimal,
    #[serde(default)]
    closed: bool,
    #[serde(default)]
    opened_on: Option<NaiveDate>,
}

#[derive(Deserialize)]
struct RawTransaction {
    source: u64,
    target: u64,
    amount: Decimal,

    // Defaults to the currency of the source account
    #[serde(default)]
    currency: Option<String>,
    date: NaiveDate,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Deserialize)]
struct RawGoal {
    name: String,
    target: Decimal,
    #[serde(default)]
    saved: Decimal,
    currency: String,
    #[serde(default)]
    account: Option<u64>,
    #[serde(default)]
    deadline: Option<NaiveDate>,
}

#[derive(Default)]
pub struct JsonImporter {
    // Do not import closed accounts, nor the transactions involving them
    pub skip_closed: bool,
}

impl JsonImporter {
    pub fn import_str(
        &mut self,
        text: &str,
        report_progress: impl Fn(u64, u64),
    ) -> Result<Repository> {
        let raw: RawSnapshot = serde_json::from_str(text).map_err(Error::from)?;
        let total = (raw.accounts.len()
            + raw.transactions.len()
            + raw.goals.len()) as u64;
        let mut done = 0_u64;
        let mut repo = Repository::default();

        for c in &raw.currencies {
            repo.add_currency(Currency::new(
                &c.code,
                &c.symbol,
                c.symbol_after,
                c.precision,
            ));
        }

        // Server ids to our own ids.  Skipped accounts map to None.
        let mut ids: HashMap<u64, Option<AccountId>> = HashMap::new();

        for a in raw.accounts {
            done += 1;
            report_progress(done, total);

            let kind: AccountKind = a.kind.parse()?;
            if a.closed && self.skip_closed {
                log::warn!("skipping closed account {}", a.name);
                ids.insert(a.id, None);
                continue;
            }
            let currency = repo.currencies_mut().find_or_add_iso(&a.currency)?;
            let id = repo.add_account(
                Account::new(&a.name, kind, currency, a.balance)
                    .set_closed(a.closed)
                    .set_opened_on(a.opened_on),
            );
            if ids.insert(a.id, Some(id)).is_some() {
                log::warn!("account id {} appears twice", a.id);
            }
        }

        let lookup = |api_id: u64| -> Result<Option<AccountId>, Error> {
            ids.get(&api_id)
                .copied()
                .ok_or_else(|| Error::UnknownAccount(api_id.to_string()))
        };

        for t in raw.transactions {
            done += 1;
            report_progress(done, total);

            let (Some(source), Some(target)) =
                (lookup(t.source)?, lookup(t.target)?)
            else {
                log::debug!(
                    "skipping transaction {} -> {} on a closed account",
                    t.source,
                    t.target
                );
                continue;
            };
            let currency = match &t.currency {
                Some(code) => repo.currencies_mut().find_or_add_iso(code)?,
                None => repo
                    .get_account(source)
                    .map(|acc| acc.currency)
                    .ok_or_else(|| Error::UnknownAccount(source.to_string()))?,
            };
            repo.add_transaction(Transaction::new(TransactionDetails {
                source,
                target,
                amount: t.amount,
                currency,
                date: t.date,
                description: t.description.as_deref(),
            }))?;
        }

        for g in raw.goals {
            done += 1;
            report_progress(done, total);

            let account = match g.account {
                None => None,
                Some(api_id) => match lookup(api_id)? {
                    Some(id) => Some(id),
                    None => {
                        log::warn!(
                            "skipping goal {} linked to closed account {}",
                            g.name,
                            api_id
                        );
                        continue;
                    }
                },
            };
            let currency = repo.currencies_mut().find_or_add_iso(&g.currency)?;
            repo.add_goal(
                SavingsGoal::new(&g.name, g.target, g.saved, currency)
                    .set_account(account)
                    .set_deadline(g.deadline),
            )?;
        }

        log::info!(
            "imported {} accounts, {} transactions, {} goals",
            repo.iter_accounts().count(),
            repo.iter_transactions().count(),
            repo.iter_goals().count(),
        );
        Ok(repo)
    }
}

impl Importer for JsonImporter {
    async fn import_file(
        &mut self,
        path: &Path,
        report_progress: impl Fn(u64, u64),
    ) -> Result<Repository> {
        log::debug!("importing {}", path.display());
        let text = std::fs::read_to_string(path).map_err(Error::from)?;
        self.import_str(&text, report_progress)
    }
}

#[cfg(test)]
mod test {
    use crate::account_kinds::AccountKind;
    use crate::errors::Error;
    use crate::flow_signs::FlowSign;
    use crate::importers::Importer;
    use crate::json::JsonImporter;
    use futures::executor::block_on;
    use rust_decimal_macros::dec;
    use std::cell::Cell;

    const SNAPSHOT: &str = r#"{
        "currencies": [
            {"code": "EUR", "symbol": "EUR", "symbol_after": true, "precision": 2}
        ],
        "accounts": [
            {"id": 10, "name": "Checking", "kind": "capital_normal",
             "currency": "EUR", "balance": "1200.50"},
            {"id": 11, "name": "Rainy day", "kind": "capital_savings",
             "currency": "EUR", "balance": 300},
            {"id": 12, "name": "Salary", "kind": "external_income",
             "currency": "EUR"},
            {"id": 13, "name": "Old card", "kind": "debt_credit",
             "currency": "USD", "balance": "12", "closed": true}
        ],
        "transactions": [
            {"source": 12, "target": 10, "amount": "2500",
             "date": "2024-03-01", "description": "March"},
            {"source": 10, "target": 13, "amount": "12",
             "date": "2024-03-02"}
        ],
        "goals": [
            {"name": "Holidays", "target": "2000", "saved": "300",
             "currency": "EUR", "account": 11, "deadline": "2024-07-01"}
        ]
    }"#;

    #[test]
    fn test_import() -> anyhow::Result<()> {
        let calls = Cell::new(0_u64);
        let repo = JsonImporter::default().import_str(SNAPSHOT, |done, total| {
            assert_eq!(total, 7);
            assert!(done <= total);
            calls.set(calls.get() + 1);
        })?;
        assert_eq!(calls.get(), 7);

        let checking = repo.find_account("Checking").unwrap();
        let acc = repo.get_account(checking).unwrap();
        assert_eq!(acc.kind, AccountKind::CapitalNormal);
        assert_eq!(acc.balance, dec!(1200.50));

        // USD was not listed, so it comes from the ISO table
        assert!(repo.find_currency("USD").is_some());

        let ledger = repo.ledger(checking)?;
        let signs: Vec<_> = ledger.iter().map(|e| e.sign).collect();
        assert_eq!(signs, vec![FlowSign::Debit, FlowSign::Credit]);
        assert_eq!(ledger.last().and_then(|e| e.transaction.description()), Some("March"));

        let goals: Vec<_> = repo.iter_goals().map(|(_, g)| g.progress()).collect();
        assert_eq!(goals, vec![dec!(0.15)]);
        Ok(())
    }

    #[test]
    fn test_skip_closed() -> anyhow::Result<()> {
        let mut importer = JsonImporter { skip_closed: true };
        let repo = importer.import_str(SNAPSHOT, |_, _| {})?;
        assert_eq!(repo.iter_accounts().count(), 3);
        assert_eq!(repo.iter_transactions().count(), 1);
        assert_eq!(repo.iter_goals().count(), 1);
        Ok(())
    }

    #[test]
    fn test_skip_goal_on_closed_account() -> anyhow::Result<()> {
        let text = r#"{"accounts": [
            {"id": 1, "name": "Old savings", "kind": "capital_savings",
             "currency": "EUR", "closed": true},
            {"id": 2, "name": "Savings", "kind": "capital_savings",
             "currency": "EUR"}
        ], "goals": [
            {"name": "Car", "target": "8000", "currency": "EUR", "account": 1},
            {"name": "Roof", "target": "5000", "currency": "EUR", "account": 2},
            {"name": "Gift", "target": "50", "currency": "EUR"}
        ]}"#;

        let repo = JsonImporter { skip_closed: true }.import_str(text, |_, _| {})?;
        let goals: Vec<_> = repo
            .iter_goals()
            .map(|(_, g)| (g.name.as_str(), g.account))
            .collect();
        let savings = repo.find_account("Savings");
        assert_eq!(goals, vec![("Roof", savings), ("Gift", None)]);

        // Without skipping, the link to the closed account is kept
        let repo = JsonImporter::default().import_str(text, |_, _| {})?;
        assert_eq!(repo.iter_goals().count(), 3);
        assert_eq!(
            repo.iter_goals().next().and_then(|(_, g)| g.account),
            repo.find_account("Old savings")
        );
        Ok(())
    }

    #[test]
    fn test_invalid_kind() {
        let text = r#"{"accounts": [
            {"id": 1, "name": "Wallet", "kind": "crypto", "currency": "EUR"}
        ]}"#;
        let err = JsonImporter::default()
            .import_str(text, |_, _| {})
            .err()
            .and_then(|e| e.downcast::<Error>().ok());
        assert!(matches!(err, Some(Error::InvalidKind(k)) if k == "crypto"));
    }

    #[test]
    fn test_unknown_references() {
        let text = r#"{"accounts": [
            {"id": 1, "name": "Bank", "kind": "capital_normal", "currency": "EUR"}
        ], "transactions": [
            {"source": 1, "target": 2, "amount": "1", "date": "2024-01-01"}
        ]}"#;
        let err = JsonImporter::default()
            .import_str(text, |_, _| {})
            .err()
            .and_then(|e| e.downcast::<Error>().ok());
        assert!(matches!(err, Some(Error::UnknownAccount(id)) if id == "2"));

        let text = r#"{"accounts": [
            {"id": 1, "name": "Bank", "kind": "capital_normal", "currency": "XXX"}
        ]}"#;
        let err = JsonImporter::default()
            .import_str(text, |_, _| {})
            .err()
            .and_then(|e| e.downcast::<Error>().ok());
        assert!(matches!(err, Some(Error::UnknownCurrency(c)) if c == "XXX"));
    }

    #[test]
    fn test_demo_snapshot() -> anyhow::Result<()> {
        let text = include_str!("../../demos/tally.json");
        let repo = JsonImporter::default().import_str(text, |_, _| {})?;
        assert_eq!(repo.iter_accounts().count(), 7);
        assert_eq!(repo.iter_transactions().count(), 5);
        assert_eq!(repo.iter_goals().count(), 2);
        Ok(())
    }

    #[test]
    fn test_import_file() {
        let path = std::env::temp_dir().join("tally_json_import_test.json");
        let written = std::fs::write(&path, SNAPSHOT);
        assert!(written.is_ok());

        let repo = block_on(JsonImporter::default().import_file(&path, |_, _| {}));
        let _ = std::fs::remove_file(&path);
        assert!(matches!(repo, Ok(r) if r.iter_accounts().count() == 4));

        let missing = block_on(
            JsonImporter::default()
                .import_file(std::path::Path::new("/nonexistent/tally.json"), |_, _| {}),
        );
        assert!(matches!(
            missing.err().and_then(|e| e.downcast::<Error>().ok()),
            Some(Error::Io(_))
        ));
    }
}
