use crate::global_settings::GlobalSettings;
use clap::{Arg, ArgMatches, arg};
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};
use tally_lib::balances::Summary;
use tally_lib::repositories::Repository;

pub struct Settings {
    pub hide_zero: bool,
}

impl Settings {
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [arg!(--"hide-zero" "Do not list accounts with a zero balance")]
    }

    pub fn new(args: &ArgMatches) -> Self {
        Settings {
            hide_zero: args.get_flag("hide-zero"),
        }
    }
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "")]
    name: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

fn table(rows: Vec<Row>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()));
    table.to_string()
}

pub fn summary_view(
    repo: &Repository,
    global: &GlobalSettings,
    settings: Settings,
) -> String {
    let summary = Summary::new(
        repo,
        &tally_lib::balances::Settings {
            currency: global.currency,
            hide_zero_rows: settings.hide_zero,
        },
    );

    let mut output = String::new();
    for (category, rows) in &summary.rows {
        let rows = rows
            .iter()
            .map(|row| Row {
                name: row.data.name.clone(),
                balance: repo
                    .get_currency(row.data.currency)
                    .map(|c| global.format.display(row.data.balance, c))
                    .unwrap_or_default(),
            })
            .collect::<Vec<_>>();
        output.push_str(category.to_human());
        output.push('\n');
        output.push_str(&table(rows));
        output.push('\n');
    }

    let totals = [
        ("Capital", &summary.capital),
        ("Debt", &summary.debt),
        ("Net worth", &summary.networth),
    ]
    .into_iter()
    .map(|(name, value)| Row {
        name: name.to_string(),
        balance: repo.display_multi_value(&global.format, value),
    })
    .collect::<Vec<_>>();
    output.push_str(&table(totals));
    output.push('\n');
    output
}

#[cfg(test)]
mod test {
    use crate::args::build_cli;
    use crate::global_settings::GlobalSettings;
    use crate::summary_view::{Settings, summary_view};
    use anyhow::Result;
    use rust_decimal::Decimal;
    use tally_lib::account_kinds::AccountKind;
    use tally_lib::accounts::Account;
    use tally_lib::currencies::Currency;
    use tally_lib::repositories::Repository;

    #[test]
    fn test_summary_view() -> Result<()> {
        let mut repo = Repository::default();
        let eur = repo.add_currency(Currency::new("EUR", "EUR", true, 2));
        repo.add_account(Account::new(
            "Checking",
            AccountKind::CapitalNormal,
            eur,
            Decimal::from(1500),
        ));
        repo.add_account(Account::new(
            "Mortgage",
            AccountKind::DebtLoan,
            eur,
            Decimal::from(2000),
        ));

        let args = build_cli().try_get_matches_from(["tally", "summary"])?;
        let global = GlobalSettings::new(&args);
        let output = summary_view(&repo, &global, Settings { hide_zero: false });
        let line = |name: &str| {
            output
                .lines()
                .filter(|l| l.starts_with('│'))
                .find(|l| l.contains(name))
                .map(|l| l.split('│').map(str::trim).collect::<Vec<_>>())
                .unwrap_or_default()
        };
        assert_eq!(line("Capital"), vec!["", "Capital", "1,500.00 EUR", ""]);
        assert_eq!(line("Debt"), vec!["", "Debt", "2,000.00 EUR", ""]);
        assert_eq!(line("Net worth"), vec!["", "Net worth", "-500.00 EUR", ""]);
        assert_eq!(line("Mortgage"), vec!["", "Mortgage", "2,000.00 EUR", ""]);
        assert!(output.starts_with("Capital\n"));
        Ok(())
    }
}
