mod accounts_view;
mod args;
mod global_settings;
mod goals_view;
mod kinds_view;
mod ledger_view;
mod summary_view;
mod tones;

use crate::args::build_cli;
use crate::global_settings::GlobalSettings;
use anyhow::{Result, bail};
use futures::executor::block_on;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use indicatif_log_bridge::LogWrapper;
use tally_lib::importers::Importer;
use tally_lib::json::JsonImporter;
use tally_lib::repositories::Repository;

fn load(settings: &GlobalSettings, multi: &MultiProgress) -> Result<Repository> {
    let progress = multi.add(
        ProgressBar::new(1) //  we do not know the length
            .with_style(ProgressStyle::with_template(
                "[{pos:>4}/{len:4}] {msg} {wide_bar} {elapsed_precise}",
            )?)
            .with_message(format!("loading {}", settings.data.display())),
    );

    let mut importer = JsonImporter {
        skip_closed: settings.skip_closed,
    };
    let repo = block_on(importer.import_file(&settings.data, |current, max| {
        progress.set_length(max);
        progress.set_position(current);
    }));
    progress.finish_and_clear();
    repo
}

fn main() -> Result<()> {
    let logger = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .build();
    let level = logger.filter();
    let multi = MultiProgress::new();
    LogWrapper::new(multi.clone(), logger).try_init()?;
    log::set_max_level(level);

    let args = build_cli().get_matches();
    let mut settings = GlobalSettings::new(&args);

    // Commands that do not need the data
    match args.subcommand() {
        Some(("completions", sub)) => {
            if let Some(shell) =
                sub.get_one::<clap_complete_command::Shell>("shell").cloned()
            {
                shell.generate(&mut build_cli(), &mut std::io::stdout());
            }
            return Ok(());
        }
        Some(("kinds", _)) => {
            println!("{}", kinds_view::kinds_view());
            return Ok(());
        }
        Some(("sign", sub)) => {
            let arg = |name| sub.get_one::<String>(name).cloned().unwrap_or_default();
            println!("{}", kinds_view::sign_view(&arg("SOURCE"), &arg("TARGET"))?);
            return Ok(());
        }
        Some(_) | None => {}
    }

    let repo = load(&settings, &multi)?;
    settings.postprocess(&repo)?;

    let output = match args.subcommand() {
        Some(("accounts", sub)) => accounts_view::accounts_view(
            &repo,
            &settings,
            accounts_view::Settings::new(sub),
        ),
        Some(("ledger", sub)) => ledger_view::ledger_view(
            &repo,
            &settings,
            ledger_view::Settings::new(sub, &settings),
        )?,
        Some(("goals", _)) => goals_view::goals_view(&repo, &settings),
        Some(("summary", sub)) => summary_view::summary_view(
            &repo,
            &settings,
            summary_view::Settings::new(sub),
        ),
        Some((name, _)) => bail!("Unknown command {name}"),
        None => bail!("No command given"),
    };
    println!("{}", output);

    Ok(())
}
