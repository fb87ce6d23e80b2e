//! Dashboard summary formatting
//!
//! Renders the three highlight cards as a table for terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::locale::Labels;
use crate::models::{AggregateSummary, CardKind};

#[derive(Tabled)]
struct CardRow<'a> {
    #[tabled(rename = "Card")]
    title: &'static str,
    #[tabled(rename = "Amount")]
    amount: &'a str,
    #[tabled(rename = "Last transaction")]
    label: &'a str,
}

fn card_title(labels: &Labels, kind: CardKind) -> &'static str {
    match kind {
        CardKind::Income => labels.income_card,
        CardKind::Expense => labels.expense_card,
        CardKind::Total => labels.total_card,
    }
}

/// Format the income, expense and total cards, in that order
pub fn format_summary(summary: &AggregateSummary, labels: &Labels) -> String {
    let rows: Vec<CardRow> = summary
        .cards()
        .into_iter()
        .map(|(kind, card)| CardRow {
            title: card_title(labels, kind),
            amount: card.amount.as_str(),
            label: card.last_transaction.as_str(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let mut output = table.to_string();
    if !summary.skipped.is_empty() {
        output.push_str(&format!(
            "\n{} stored record(s) could not be read and were skipped.",
            summary.skipped.len()
        ));
    }
    output
}
