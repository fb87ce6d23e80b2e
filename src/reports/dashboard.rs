//! Dashboard aggregation
//!
//! Folds a snapshot of stored transaction records into the three highlight
//! cards (income, expenses, net total) and the display-ready list.
//!
//! Rules worth knowing when reading the output:
//!
//! - Each bucket's label comes from the record of that kind with the latest
//!   timestamp. Ties keep the record encountered first.
//! - A bucket with no records gets the locale's placeholder label, never a
//!   made-up date.
//! - The total card's label is the interval from the 1st up to the latest
//!   *expense* date. It deliberately does not look at income dates; with no
//!   expenses it shows the placeholder.
//! - Records that cannot be interpreted are skipped or abort the pass,
//!   depending on [`MalformedRecordPolicy`].

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::MalformedRecordPolicy;
use crate::error::{FinanceError, FinanceResult};
use crate::locale::LocaleFormat;
use crate::models::{
    AggregateSummary, HighlightCard, Money, SkippedRecord, Transaction, TransactionKind,
    TransactionRecord, TransactionView,
};

/// Running total and most recent timestamp for one kind
#[derive(Debug, Clone, Copy, Default)]
struct Bucket {
    total: Money,
    latest: Option<DateTime<FixedOffset>>,
}

impl Bucket {
    /// Fold one record in; on overflow the bucket is left unchanged
    fn add(&mut self, txn: &Transaction) -> Result<(), String> {
        self.total = self
            .total
            .checked_add(txn.amount)
            .ok_or_else(|| "total out of range".to_string())?;
        // Strictly later only, so the first of equal timestamps stays
        if self.latest.map_or(true, |latest| txn.occurred_at > latest) {
            self.latest = Some(txn.occurred_at);
        }
        Ok(())
    }
}

/// Aggregate raw stored elements into a dashboard summary
pub fn aggregate(
    items: &[Value],
    format: &LocaleFormat,
    policy: MalformedRecordPolicy,
) -> FinanceResult<AggregateSummary> {
    let mut income = Bucket::default();
    let mut expense = Bucket::default();
    let mut transactions = Vec::with_capacity(items.len());
    let mut skipped = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let folded = interpret(item).and_then(|txn| {
            match txn.kind {
                TransactionKind::Income => income.add(&txn)?,
                TransactionKind::Expense => expense.add(&txn)?,
            }
            Ok(txn)
        });
        let txn = match folded {
            Ok(txn) => txn,
            Err(reason) => {
                let id = item.get("id").and_then(Value::as_str).map(str::to_string);
                match policy {
                    MalformedRecordPolicy::Abort => {
                        return Err(FinanceError::MalformedRecord { index, id, reason });
                    }
                    MalformedRecordPolicy::Skip => {
                        warn!(index, id = ?id, %reason, "skipping malformed transaction record");
                        skipped.push(SkippedRecord { index, id, reason });
                        continue;
                    }
                }
            }
        };

        transactions.push(view(&txn, format));
    }

    let net = income.total.checked_sub(expense.total).ok_or_else(|| {
        FinanceError::OutOfRange(format!(
            "income {} minus expenses {}",
            income.total, expense.total
        ))
    })?;
    let placeholder = format.empty_bucket_label();

    let income_date = income.latest.map(|d| d.date_naive());
    let expense_date = expense.latest.map(|d| d.date_naive());

    let summary = AggregateSummary {
        income: HighlightCard {
            amount: format.money(income.total),
            last_transaction: income_date
                .map(|d| format.last_income_label(d))
                .unwrap_or_else(|| placeholder.to_string()),
            total: income.total,
            last_date: income_date,
        },
        expense: HighlightCard {
            amount: format.money(expense.total),
            last_transaction: expense_date
                .map(|d| format.last_expense_label(d))
                .unwrap_or_else(|| placeholder.to_string()),
            total: expense.total,
            last_date: expense_date,
        },
        total: HighlightCard {
            amount: format.money(net),
            last_transaction: expense_date
                .map(|d| format.interval_label(d))
                .unwrap_or_else(|| placeholder.to_string()),
            total: net,
            last_date: expense_date,
        },
        transactions,
        skipped,
    };

    debug!(
        records = items.len(),
        shown = summary.transactions.len(),
        skipped = summary.skipped.len(),
        income = %summary.income.total,
        expense = %summary.expense.total,
        "aggregated transactions"
    );

    Ok(summary)
}

/// Aggregate already-typed records, as written by this application
pub fn aggregate_records(
    records: &[TransactionRecord],
    format: &LocaleFormat,
    policy: MalformedRecordPolicy,
) -> FinanceResult<AggregateSummary> {
    let items = records
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;
    aggregate(&items, format, policy)
}

fn interpret(item: &Value) -> Result<Transaction, String> {
    let record = TransactionRecord::deserialize(item).map_err(|e| e.to_string())?;
    Transaction::from_record(&record)
}

fn view(txn: &Transaction, format: &LocaleFormat) -> TransactionView {
    TransactionView {
        id: txn.id.clone(),
        name: txn.name.clone(),
        amount: format.money(txn.amount),
        kind: txn.kind,
        category: txn.category.clone(),
        date: format.short_date(txn.date()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{Currency, Locale};
    use chrono::NaiveDate;
    use serde_json::json;

    fn pt_br() -> LocaleFormat {
        LocaleFormat::new(Locale::PtBr, Currency::Brl)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(id: &str, amount: Value, kind: &str, date: &str) -> Value {
        json!({
            "id": id,
            "name": format!("txn {}", id),
            "amount": amount,
            "type": kind,
            "category": "misc",
            "date": date,
        })
    }

    fn run(items: &[Value]) -> AggregateSummary {
        aggregate(items, &pt_br(), MalformedRecordPolicy::Skip).unwrap()
    }

    #[test]
    fn test_income_and_expense_scenario() {
        let summary = run(&[
            item("1", json!(100), "positive", "2024-01-10"),
            item("2", json!(30), "negative", "2024-01-05"),
        ]);

        assert_eq!(summary.income.total, Money::from_cents(10_000));
        assert_eq!(summary.expense.total, Money::from_cents(3_000));
        assert_eq!(summary.total.total, Money::from_cents(7_000));

        assert_eq!(summary.income.last_date, Some(date(2024, 1, 10)));
        assert_eq!(summary.expense.last_date, Some(date(2024, 1, 5)));

        assert_eq!(summary.income.amount, "R$\u{a0}100,00");
        assert_eq!(summary.expense.amount, "R$\u{a0}30,00");
        assert_eq!(summary.total.amount, "R$\u{a0}70,00");

        assert_eq!(summary.income.last_transaction, "Última entrada dia 10 de janeiro");
        assert_eq!(summary.expense.last_transaction, "Última saída dia 5 de janeiro");
        assert_eq!(summary.total.last_transaction, "01 a 5 de janeiro");
    }

    #[test]
    fn test_empty_collection() {
        let summary = run(&[]);
        for (_, card) in summary.cards() {
            assert_eq!(card.amount, "R$\u{a0}0,00");
            assert_eq!(card.last_transaction, "Nenhuma transação");
            assert_eq!(card.last_date, None);
            assert!(card.total.is_zero());
        }
        assert!(summary.is_empty());
    }

    #[test]
    fn test_only_income_leaves_expense_and_total_labels_as_placeholder() {
        let summary = run(&[item("1", json!("250.00"), "positive", "2024-02-03")]);

        assert_eq!(summary.income.last_transaction, "Última entrada dia 3 de fevereiro");
        assert_eq!(summary.expense.last_transaction, "Nenhuma transação");
        // Total label follows the expense bucket, not income
        assert_eq!(summary.total.last_transaction, "Nenhuma transação");
        assert_eq!(summary.total.amount, "R$\u{a0}250,00");
    }

    #[test]
    fn test_negative_net_keeps_sign() {
        let summary = run(&[
            item("1", json!(10), "positive", "2024-01-01"),
            item("2", json!("1500.5"), "negative", "2024-01-02"),
        ]);
        assert_eq!(summary.total.total, Money::from_cents(-149_050));
        assert_eq!(summary.total.amount, "-R$\u{a0}1.490,50");
    }

    #[test]
    fn test_net_equals_income_minus_expense_exactly() {
        let amounts = ["0.10", "0.20", "0.30", "1234.56", "0.01", "99.99"];
        let items: Vec<Value> = amounts
            .iter()
            .enumerate()
            .map(|(i, a)| {
                let kind = if i % 2 == 0 { "positive" } else { "negative" };
                item(&i.to_string(), json!(a), kind, "2024-01-01")
            })
            .collect();

        let summary = run(&items);
        assert_eq!(summary.income.total, Money::from_cents(10 + 30 + 1));
        assert_eq!(summary.expense.total, Money::from_cents(20 + 123_456 + 9_999));
        assert_eq!(
            Some(summary.total.total),
            summary.income.total.checked_sub(summary.expense.total)
        );
    }

    #[test]
    fn test_latest_date_per_kind() {
        let summary = run(&[
            item("1", json!(1), "positive", "2024-03-01"),
            item("2", json!(1), "positive", "2024-03-20T10:00:00Z"),
            item("3", json!(1), "positive", "2024-03-05"),
            item("4", json!(1), "negative", "2024-04-02"),
            item("5", json!(1), "negative", "2024-01-31"),
        ]);
        assert_eq!(summary.income.last_date, Some(date(2024, 3, 20)));
        assert_eq!(summary.expense.last_date, Some(date(2024, 4, 2)));
        assert_eq!(summary.total.last_transaction, "01 a 2 de abril");
    }

    #[test]
    fn test_same_day_uses_full_timestamp() {
        let summary = run(&[
            item("late", json!(1), "negative", "2024-05-10T22:00:00Z"),
            item("early", json!(1), "negative", "2024-05-10T08:00:00Z"),
        ]);
        assert_eq!(summary.expense.last_date, Some(date(2024, 5, 10)));
    }

    #[test]
    fn test_tie_keeps_first_encountered() {
        // Same instant, different offsets: the first record's calendar day wins
        let summary = run(&[
            item("first", json!(1), "positive", "2024-06-01T01:00:00+02:00"),
            item("second", json!(1), "positive", "2024-05-31T23:00:00Z"),
        ]);
        assert_eq!(summary.income.last_date, Some(date(2024, 6, 1)));

        let reversed = run(&[
            item("second", json!(1), "positive", "2024-05-31T23:00:00Z"),
            item("first", json!(1), "positive", "2024-06-01T01:00:00+02:00"),
        ]);
        assert_eq!(reversed.income.last_date, Some(date(2024, 5, 31)));
    }

    #[test]
    fn test_list_preserves_order_and_formats_fields() {
        let items = vec![
            item("b", json!("12.5"), "negative", "2024-01-05T12:00:00Z"),
            item("a", json!(1000), "positive", "2023-12-31"),
            item("c", json!(0.99), "negative", "2024-02-29"),
        ];
        let summary = run(&items);

        let ids: Vec<_> = summary.transactions.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);

        let first = &summary.transactions[0];
        assert_eq!(first.name, "txn b");
        assert_eq!(first.amount, "R$\u{a0}12,50");
        assert_eq!(first.kind, TransactionKind::Expense);
        assert_eq!(first.category, "misc");
        assert_eq!(first.date, "05/01/24");
        assert_eq!(summary.transactions[1].amount, "R$\u{a0}1.000,00");
    }

    #[test]
    fn test_formatted_amounts_parse_back() {
        let fmt = pt_br();
        let summary = run(&[
            item("1", json!("1234567.89"), "positive", "2024-01-01"),
            item("2", json!("0.07"), "negative", "2024-01-01"),
        ]);
        assert_eq!(
            fmt.parse_money(&summary.transactions[0].amount),
            Some(Money::from_cents(123_456_789))
        );
        assert_eq!(
            fmt.parse_money(&summary.total.amount),
            Some(summary.total.total)
        );
    }

    #[test]
    fn test_skip_policy_reports_malformed_records() {
        let summary = run(&[
            item("ok", json!(10), "positive", "2024-01-01"),
            item("bad-amount", json!("ten"), "positive", "2024-01-02"),
            item("bad-date", json!(5), "negative", "not a date"),
            item("bad-type", json!(5), "neutral", "2024-01-03"),
            json!({"id": "missing-fields"}),
            json!(42),
        ]);

        assert_eq!(summary.transactions.len(), 1);
        assert_eq!(summary.income.total, Money::from_cents(1_000));
        assert!(summary.expense.total.is_zero());

        let skipped: Vec<_> = summary.skipped.iter().map(|s| s.index).collect();
        assert_eq!(skipped, [1, 2, 3, 4, 5]);
        assert_eq!(summary.skipped[0].id.as_deref(), Some("bad-amount"));
        assert_eq!(summary.skipped[4].id, None);
    }

    #[test]
    fn test_abort_policy_fails_pass() {
        let items = [
            item("ok", json!(10), "positive", "2024-01-01"),
            item("bad", json!(-3), "negative", "2024-01-02"),
        ];
        let err = aggregate(&items, &pt_br(), MalformedRecordPolicy::Abort).unwrap_err();
        match err {
            FinanceError::MalformedRecord { index, id, .. } => {
                assert_eq!(index, 1);
                assert_eq!(id.as_deref(), Some("bad"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_overflowing_total_skips_record() {
        let huge = json!("90000000000000000");
        let summary = run(&[
            item("a", huge.clone(), "positive", "2024-01-01"),
            item("b", huge, "positive", "2024-01-09"),
            item("c", json!(30), "negative", "2024-01-03"),
        ]);

        assert_eq!(summary.income.total, Money::from_cents(9_000_000_000_000_000_000));
        assert_eq!(summary.income.last_date, Some(date(2024, 1, 1)));
        assert_eq!(summary.transactions.len(), 2);
        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(summary.skipped[0].id.as_deref(), Some("b"));
        assert_eq!(summary.skipped[0].reason, "total out of range");
        assert_eq!(
            Some(summary.total.total),
            summary.income.total.checked_sub(summary.expense.total)
        );
    }

    #[test]
    fn test_overflowing_total_aborts_pass() {
        let huge = json!("90000000000000000");
        let items = [
            item("a", huge.clone(), "negative", "2024-01-01"),
            item("b", huge, "negative", "2024-01-02"),
        ];
        let err = aggregate(&items, &pt_br(), MalformedRecordPolicy::Abort).unwrap_err();
        assert!(matches!(
            err,
            FinanceError::MalformedRecord { index: 1, .. }
        ));
    }

    #[test]
    fn test_en_us_formatting() {
        let fmt = LocaleFormat::new(Locale::EnUs, Currency::Usd);
        let items = [
            item("1", json!(2500), "positive", "2024-07-04"),
            item("2", json!(40), "negative", "2024-07-01"),
        ];
        let summary = aggregate(&items, &fmt, MalformedRecordPolicy::Skip).unwrap();
        assert_eq!(summary.income.amount, "$2,500.00");
        assert_eq!(summary.income.last_transaction, "Last income on July 4");
        assert_eq!(summary.total.last_transaction, "01 to July 1");
        assert_eq!(summary.transactions[0].date, "07/04/24");
    }

    #[test]
    fn test_aggregate_records() {
        use chrono::{TimeZone, Utc};
        let at = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        let records = [TransactionRecord::new(
            "Salary",
            Money::from_cents(300_000),
            TransactionKind::Income,
            "salary",
            at,
        )];
        let summary = aggregate_records(&records, &pt_br(), MalformedRecordPolicy::Abort).unwrap();
        assert_eq!(summary.income.amount, "R$\u{a0}3.000,00");
    }
}
