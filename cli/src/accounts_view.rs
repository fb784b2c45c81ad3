use crate::global_settings::GlobalSettings;
use clap::{Arg, ArgMatches, arg};
use itertools::Itertools;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};
use tally_lib::account_categories::AccountCategory;
use tally_lib::repositories::Repository;

pub struct Settings {
    pub show_closed: bool,
    pub hide_zero: bool,
}

impl Settings {
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(--closed "Also show closed accounts"),
            arg!(--"hide-zero" "Do not show accounts with a zero balance"),
        ]
    }

    pub fn new(args: &ArgMatches) -> Self {
        Settings {
            show_closed: args.get_flag("closed"),
            hide_zero: args.get_flag("hide-zero"),
        }
    }
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Account")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "")]
    status: &'static str,
}

pub fn accounts_view(
    repo: &Repository,
    global: &GlobalSettings,
    settings: Settings,
) -> String {
    let mut output = String::new();

    for category in AccountCategory::ALL {
        let rows = repo
            .iter_category(category)
            .filter(|(_, acc)| settings.show_closed || !acc.closed)
            .filter(|(_, acc)| !(settings.hide_zero && acc.balance.is_zero()))
            .filter(|(_, acc)| global.currency.map_or(true, |c| c == acc.currency))
            .sorted_by_key(|(_, acc)| acc.name.to_lowercase())
            .map(|(_, acc)| Row {
                name: acc.name.clone(),
                kind: acc.kind.to_human(),
                balance: match category {
                    // External accounts carry no balance of their own
                    AccountCategory::External => String::new(),
                    AccountCategory::Capital
                    | AccountCategory::Debt
                    | AccountCategory::System => repo
                        .get_currency(acc.currency)
                        .map(|c| global.format.display(acc.balance, c))
                        .unwrap_or_default(),
                },
                status: if acc.closed { "closed" } else { "" },
            })
            .collect::<Vec<_>>();

        if rows.is_empty() {
            continue;
        }

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Modify::new(Columns::single(2)).with(Alignment::right()));
        output.push_str(category.to_human());
        output.push('\n');
        output.push_str(&table.to_string());
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod test {
    use crate::accounts_view::{Settings, accounts_view};
    use crate::args::build_cli;
    use crate::global_settings::GlobalSettings;
    use anyhow::Result;
    use rust_decimal::Decimal;
    use tally_lib::account_kinds::AccountKind;
    use tally_lib::accounts::Account;
    use tally_lib::currencies::Currency;
    use tally_lib::repositories::Repository;

    #[test]
    fn test_accounts_view() -> Result<()> {
        let mut repo = Repository::default();
        let eur = repo.add_currency(Currency::new("EUR", "EUR", true, 2));
        repo.add_account(Account::new(
            "Checking",
            AccountKind::CapitalNormal,
            eur,
            Decimal::new(120050, 2),
        ));
        repo.add_account(Account::new(
            "Groceries",
            AccountKind::ExternalExpense,
            eur,
            Decimal::ZERO,
        ));
        repo.add_account(
            Account::new("Old loan", AccountKind::DebtLoan, eur, Decimal::ZERO)
                .set_closed(true),
        );

        let args = build_cli().try_get_matches_from(["tally", "accounts"])?;
        let global = GlobalSettings::new(&args);
        let output = accounts_view(
            &repo,
            &global,
            Settings {
                show_closed: false,
                hide_zero: false,
            },
        );
        assert!(output.contains("Capital"));
        assert!(output.contains("1,200.50 EUR"));
        assert!(output.contains("Groceries"));
        assert!(output.contains("Expense"));
        assert!(!output.contains("Old loan"));
        assert!(!output.contains("Debt"));

        let output = accounts_view(
            &repo,
            &global,
            Settings {
                show_closed: true,
                hide_zero: false,
            },
        );
        assert!(output.contains("Old loan"));
        assert!(output.contains("closed"));
        Ok(())
    }
}
