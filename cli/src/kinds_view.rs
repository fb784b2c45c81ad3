use crate::tones::paint;
use anyhow::Result;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tally_lib::account_kinds::AccountKind;
use tally_lib::colors::Tone;
use tally_lib::flow_signs::{FlowSign, resolve_sign_by_name};

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Kind")]
    wire_name: &'static str,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Credit")]
    positive: &'static str,
    #[tabled(rename = "Debit")]
    negative: &'static str,
}

pub fn kinds_view() -> String {
    let rows = AccountKind::ALL.iter().map(|kind| Row {
        wire_name: kind.wire_name(),
        category: kind.category().to_human(),
        label: kind.to_human(),
        positive: kind.name_when_positive(),
        negative: kind.name_when_negative(),
    });
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// The sign of a transfer between two kinds, given by their wire names.
pub fn sign_view(source: &str, target: &str) -> Result<String> {
    let sign = resolve_sign_by_name(source, target)?;
    let text = match sign {
        FlowSign::Credit => "+1",
        FlowSign::Debit => "-1",
        FlowSign::Neutral => "0",
    };
    Ok(format!("{source} -> {target}: {}", paint(text, Tone::from(sign))))
}
