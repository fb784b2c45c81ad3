use crate::global_settings::GlobalSettings;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};
use tally_lib::formatters::{DateStyle, display_date};
use tally_lib::repositories::Repository;

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Per month")]
    monthly: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
}

pub fn goals_view(repo: &Repository, global: &GlobalSettings) -> String {
    let rows = repo
        .iter_goals()
        .filter(|(_, g)| global.currency.map_or(true, |c| c == g.currency))
        .map(|(_, goal)| {
            let amount = |value| {
                repo.get_currency(goal.currency)
                    .map(|c| global.format.display(value, c))
                    .unwrap_or_default()
            };
            Row {
                name: goal.name.clone(),
                saved: amount(goal.saved),
                target: amount(goal.target),
                progress: global.format.display_percent(goal.progress()),
                monthly: if goal.is_reached() {
                    "reached".to_string()
                } else {
                    goal.monthly_contribution(global.today)
                        .map(amount)
                        .unwrap_or_else(|| "-".to_string())
                },
                deadline: goal
                    .deadline
                    .map(|d| display_date(d, DateStyle::Relative(global.today)))
                    .unwrap_or_default(),
            }
        })
        .collect::<Vec<_>>();

    if rows.is_empty() {
        return "No savings goal".to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..5)).with(Alignment::right()));
    table.to_string()
}
