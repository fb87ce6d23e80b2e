//! Transaction list formatting
//!
//! Formats the dashboard's transaction list as a table.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{TransactionKind, TransactionView};

#[derive(Tabled)]
struct TransactionRow<'a> {
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: &'a str,
    #[tabled(rename = "Date")]
    date: &'a str,
}

impl<'a> From<&'a TransactionView> for TransactionRow<'a> {
    fn from(txn: &'a TransactionView) -> Self {
        let amount = match txn.kind {
            TransactionKind::Income => txn.amount.clone(),
            TransactionKind::Expense => format!("- {}", txn.amount),
        };
        Self {
            name: &txn.name,
            amount,
            category: &txn.category,
            date: &txn.date,
        }
    }
}

/// Format up to `limit` transactions as a table; `empty` is shown when there
/// are none
pub fn format_transaction_list(
    transactions: &[TransactionView],
    limit: Option<usize>,
    empty: &str,
) -> String {
    if transactions.is_empty() {
        return empty.to_string();
    }

    let shown = limit.unwrap_or(transactions.len()).min(transactions.len());
    let rows: Vec<TransactionRow> = transactions[..shown].iter().map(Into::into).collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()));

    let mut output = table.to_string();
    if shown < transactions.len() {
        output.push_str(&format!("\n{} of {} shown", shown, transactions.len()));
    }
    output
}
