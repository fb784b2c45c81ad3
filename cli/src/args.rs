use crate::global_settings::GlobalSettings;
use clap::{Arg, Command, arg};

pub(crate) fn build_cli() -> Command {
    Command::new("tally")
        .version("0.1")
        .about("Keep track of your accounts, debts and savings goals")
        .subcommand_required(true)
        .subcommand_precedence_over_arg(true) // --x val1 val2 subcommand
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .subcommand(
            Command::new("accounts")
                .about("Show accounts grouped by category")
                .args(crate::accounts_view::Settings::cli()),
        )
        .subcommand(
            Command::new("ledger")
                .about("Show the transactions of one account")
                .args(crate::ledger_view::Settings::cli()),
        )
        .subcommand(Command::new("goals").about("Show savings goals"))
        .subcommand(
            Command::new("summary")
                .about("Show capital, debts and net worth")
                .args(crate::summary_view::Settings::cli()),
        )
        .subcommand(
            Command::new("kinds").about("List the supported account kinds"),
        )
        .subcommand(
            Command::new("sign")
                .about("How a transfer between two kinds of account is shown")
                .arg(arg!(<SOURCE> "Kind of the source account"))
                .arg(arg!(<TARGET> "Kind of the target account")),
        )
        .subcommand(
            // Use    eval "$(tally completions zsh)"
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("The shell to generate the completions for")
                        .required(true)
                        .value_parser(clap::builder::EnumValueParser::<
                            clap_complete_command::Shell,
                        >::new()),
                ),
        )
}
