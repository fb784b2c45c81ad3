use crate::global_settings::GlobalSettings;
use crate::tones::paint;
use anyhow::{Result, anyhow};
use clap::{Arg, ArgMatches, arg};
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};
use tally_lib::colors::Tone;
use tally_lib::formatters::{DateStyle, display_date};
use tally_lib::repositories::Repository;

pub struct Settings {
    // Name or id of the account
    pub account: String,
    pub dates: DateStyle,

    // Only show the most recent transactions
    pub limit: Option<usize>,
}

impl Settings {
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(<ACCOUNT> "Name or id of the account"),
            arg!(--dates <STYLE> "How to display dates")
                .value_parser(["iso", "short", "long", "relative"])
                .default_value("iso"),
            arg!(-n --limit <COUNT> "Only show the most recent transactions")
                .value_parser(clap::value_parser!(usize)),
        ]
    }

    pub fn new(args: &ArgMatches, global: &GlobalSettings) -> Self {
        let dates = match args.get_one::<String>("dates").map(String::as_str) {
            Some("short") => DateStyle::Short,
            Some("long") => DateStyle::Long,
            Some("relative") => DateStyle::Relative(global.today),
            Some(_) | None => DateStyle::Iso,
        };
        Settings {
            account: args.get_one::<String>("ACCOUNT").cloned().unwrap_or_default(),
            dates,
            limit: args.get_one::<usize>("limit").copied(),
        }
    }
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "From/To")]
    counterpart: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

pub fn ledger_view(
    repo: &Repository,
    global: &GlobalSettings,
    settings: Settings,
) -> Result<String> {
    let id = repo
        .find_account(&settings.account)
        .ok_or_else(|| anyhow!("Unknown account {}", settings.account))?;
    let account = repo
        .get_account(id)
        .ok_or_else(|| anyhow!("Unknown account {}", settings.account))?;
    let entries = repo.ledger(id)?;

    let rows = entries
        .iter()
        .take(settings.limit.unwrap_or(usize::MAX))
        .map(|e| {
            let tx = e.transaction;
            let amount = repo
                .get_currency(tx.currency())
                .map(|c| global.format.display_signed(tx.amount(), c, e.sign))
                .unwrap_or_else(|| tx.amount().to_string());
            Row {
                date: display_date(tx.date(), settings.dates),
                counterpart: repo
                    .get_account(e.counterpart)
                    .map(|acc| acc.name.clone())
                    .unwrap_or_default(),
                description: tx.description().unwrap_or_default().to_string(),
                amount: paint(&amount, Tone::from(e.sign)),
            }
        })
        .collect::<Vec<_>>();

    let balance = repo
        .get_currency(account.currency)
        .map(|c| global.format.display(account.balance, c))
        .unwrap_or_default();
    let mut output = format!(
        "{} ({}, {} transactions) {}\n",
        account.name,
        account.kind.to_human(),
        entries.len(),
        balance,
    );

    if !rows.is_empty() {
        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Modify::new(Columns::single(3)).with(Alignment::right()));
        output.push_str(&table.to_string());
        output.push('\n');
    }
    Ok(output)
}
