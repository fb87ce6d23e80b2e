//! CSV export of the transaction list

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::models::TransactionView;

/// Write the display list as CSV, one row per transaction
///
/// Amounts and dates are written as displayed.
pub fn export_transactions_csv<W: Write>(
    transactions: &[TransactionView],
    writer: W,
) -> FinanceResult<()> {
    let csv_err = |e: ::csv::Error| FinanceError::Export(e.to_string());
    let mut out = ::csv::Writer::from_writer(writer);

    out.write_record(["id", "name", "amount", "type", "category", "date"])
        .map_err(csv_err)?;
    for txn in transactions {
        let kind = txn.kind.to_string();
        out.write_record([
            txn.id.as_str(),
            txn.name.as_str(),
            txn.amount.as_str(),
            kind.as_str(),
            txn.category.as_str(),
            txn.date.as_str(),
        ])
        .map_err(csv_err)?;
    }

    out.flush().map_err(|e| FinanceError::Export(e.to_string()))
}
