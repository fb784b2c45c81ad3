use anyhow::{Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Arg, ArgMatches, arg};
use std::path::PathBuf;
use tally_lib::currencies::CurrencyId;
use tally_lib::formatters::{Formatter, Negative, Separators};
use tally_lib::repositories::Repository;

pub struct GlobalSettings {
    // The snapshot to load
    pub data: PathBuf,
    pub skip_closed: bool,

    pub currency_str: Option<String>,
    pub currency: Option<CurrencyId>,

    // How to display numbers
    pub format: Formatter,

    // Reference date for goals and relative dates
    pub today: NaiveDate,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(--data <FILE> "Snapshot of the accounts, as exported by the server")
                .env("TALLY_DATA")
                .default_value("tally.json")
                .global(true),
            arg!(--currency <CURRENCY> "Only show amounts in this currency")
                .global(true),
            arg!(--"skip-closed" "Ignore closed accounts and their transactions")
                .global(true),
            arg!(--parenthesis "Show negative amounts in parenthesis")
                .global(true),
            arg!(--"decimal-comma" "Use ',' as decimal mark and spaces between thousands")
                .global(true),
        ]
    }

    /// Create the settings from the command line arguments.  The currency
    /// can only be resolved once the repository has been loaded.
    pub fn new(args: &ArgMatches) -> Self {
        let mut format = Formatter::default();
        if args.get_flag("parenthesis") {
            format.negative = Negative::Parenthesis;
        }
        if args.get_flag("decimal-comma") {
            format.comma = ',';
            format.separators = Separators::Every3Digit(' ');
        }

        GlobalSettings {
            data: args
                .get_one::<String>("data")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("tally.json")),
            skip_closed: args.get_flag("skip-closed"),
            currency_str: args.get_one::<String>("currency").cloned(),
            currency: None,
            format,
            today: Local::now().date_naive(),
        }
    }

    /// Compute the remaining fields, after loading the repository.
    pub fn postprocess(&mut self, repo: &Repository) -> Result<()> {
        if let Some(code) = &self.currency_str {
            self.currency = repo.find_currency(code);
            if self.currency.is_none() {
                bail!("Unknown currency {}", code);
            }
        }
        Ok(())
    }
}
