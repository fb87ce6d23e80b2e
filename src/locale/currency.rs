//! Currency formatting per locale
//!
//! Output follows the common CLDR shapes for the supported pairs:
//! `R$ 1.234,56` (pt-BR, with a no-break space) and `$1,234.56` (en-US).
//! Negative amounts carry a leading minus before the symbol.

use super::{Currency, Locale};
use crate::models::Money;

const NBSP: char = '\u{a0}';

struct Separators {
    group: char,
    decimal: char,
    symbol_gap: Option<char>,
}

fn separators(locale: Locale) -> Separators {
    match locale {
        Locale::PtBr => Separators {
            group: '.',
            decimal: ',',
            symbol_gap: Some(NBSP),
        },
        Locale::EnUs => Separators {
            group: ',',
            decimal: '.',
            symbol_gap: None,
        },
    }
}

/// Currency symbol as displayed in the given locale
pub fn symbol(locale: Locale, currency: Currency) -> &'static str {
    match (locale, currency) {
        (_, Currency::Brl) => "R$",
        (Locale::PtBr, Currency::Usd) => "US$",
        (Locale::EnUs, Currency::Usd) => "$",
        (_, Currency::Eur) => "€",
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Format an amount with symbol, grouping and two decimals
pub fn format_money(locale: Locale, currency: Currency, amount: Money) -> String {
    let seps = separators(locale);
    let units = amount.units().unsigned_abs().to_string();

    let mut out = String::new();
    if amount.is_negative() {
        out.push('-');
    }
    out.push_str(symbol(locale, currency));
    if let Some(gap) = seps.symbol_gap {
        out.push(gap);
    }
    out.push_str(&group_digits(&units, seps.group));
    out.push(seps.decimal);
    out.push_str(&format!("{:02}", amount.cents_part()));
    out
}

/// Parse a string produced by [`format_money`] back into an amount
pub fn parse_money(locale: Locale, currency: Currency, formatted: &str) -> Option<Money> {
    let seps = separators(locale);
    let s = formatted.trim();

    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let s = s.strip_prefix(symbol(locale, currency))?;
    let s = s.trim_start_matches([NBSP, ' ']);

    let (whole, fraction) = s.split_once(seps.decimal)?;
    let whole: String = whole.chars().filter(|c| *c != seps.group).collect();

    if whole.is_empty()
        || fraction.len() != 2
        || !whole.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let units: i64 = whole.parse().ok()?;
    let cents: i64 = fraction.parse().ok()?;
    let total = units.checked_mul(100)?.checked_add(cents)?;

    Some(Money::from_cents(if negative { -total } else { total }))
}
