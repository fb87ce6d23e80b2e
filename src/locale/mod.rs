//! Locale-aware formatting
//!
//! All currency and date strings shown by the dashboard go through a
//! [`LocaleFormat`], built from the configured locale/currency pair.

pub mod currency;
pub mod dates;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::models::{Money, MoneyParseError};

/// Supported display locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    /// Brazilian Portuguese
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// American English
    #[serde(rename = "en-US")]
    EnUs,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PtBr => write!(f, "pt-BR"),
            Self::EnUs => write!(f, "en-US"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Self::PtBr),
            "en-us" | "en" => Ok(Self::EnUs),
            other => Err(format!("Unsupported locale: {}", other)),
        }
    }
}

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Brazilian Real
    #[default]
    Brl,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brl => write!(f, "BRL"),
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
        }
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BRL" => Ok(Self::Brl),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            other => Err(format!("Unsupported currency: {}", other)),
        }
    }
}

/// User-facing strings that vary by locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub income_card: &'static str,
    pub expense_card: &'static str,
    pub total_card: &'static str,
    pub list_title: &'static str,
    pub greeting: &'static str,
    pub income_button: &'static str,
    pub expense_button: &'static str,
    pub empty_bucket: &'static str,
    pub form_title: &'static str,
    pub name_field: &'static str,
    pub amount_field: &'static str,
    pub category_field: &'static str,
    pub loading: &'static str,
}

const PT_BR_LABELS: Labels = Labels {
    income_card: "Entradas",
    expense_card: "Saídas",
    total_card: "Total",
    list_title: "Listagem",
    greeting: "Olá,",
    income_button: "Entrada",
    expense_button: "Saída",
    empty_bucket: "Nenhuma transação",
    form_title: "Cadastro",
    name_field: "Nome",
    amount_field: "Preço",
    category_field: "Categoria",
    loading: "Carregando...",
};

const EN_US_LABELS: Labels = Labels {
    income_card: "Income",
    expense_card: "Expenses",
    total_card: "Total",
    list_title: "Transactions",
    greeting: "Hello,",
    income_button: "Income",
    expense_button: "Outcome",
    empty_bucket: "No transactions yet",
    form_title: "New transaction",
    name_field: "Name",
    amount_field: "Amount",
    category_field: "Category",
    loading: "Loading...",
};

/// Formatter bound to one locale/currency pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFormat {
    locale: Locale,
    currency: Currency,
}

impl LocaleFormat {
    pub fn new(locale: Locale, currency: Currency) -> Self {
        Self { locale, currency }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn labels(&self) -> &'static Labels {
        match self.locale {
            Locale::PtBr => &PT_BR_LABELS,
            Locale::EnUs => &EN_US_LABELS,
        }
    }

    /// Format an amount as currency, e.g. `R$ 1.234,56` or `$1,234.56`
    pub fn money(&self, amount: Money) -> String {
        currency::format_money(self.locale, self.currency, amount)
    }

    /// Recover an amount from a string produced by [`LocaleFormat::money`]
    pub fn parse_money(&self, formatted: &str) -> Option<Money> {
        currency::parse_money(self.locale, self.currency, formatted)
    }

    /// Parse an amount typed by the user
    ///
    /// Accepts the locale's own separators (`1.234,56` in pt-BR, `1,234.56` in
    /// en-US) as well as a bare `12.50`.
    pub fn parse_input(&self, input: &str) -> Result<Money, MoneyParseError> {
        let s = input.trim();
        let normalized = match self.locale {
            Locale::PtBr if s.contains(',') => s.replace('.', "").replace(',', "."),
            Locale::PtBr => s.to_string(),
            Locale::EnUs => s.replace(',', ""),
        };
        Money::parse(&normalized)
    }

    /// Short numeric date for list rows, e.g. `10/01/24`
    pub fn short_date(&self, date: NaiveDate) -> String {
        dates::short_date(self.locale, date)
    }

    /// Day and full month name, e.g. `10 de janeiro`
    pub fn day_month(&self, date: NaiveDate) -> String {
        dates::day_month(self.locale, date)
    }

    /// Label for the most recent income, e.g. `Última entrada dia 10 de janeiro`
    pub fn last_income_label(&self, date: NaiveDate) -> String {
        match self.locale {
            Locale::PtBr => format!("Última entrada dia {}", self.day_month(date)),
            Locale::EnUs => format!("Last income on {}", self.day_month(date)),
        }
    }

    /// Label for the most recent expense, e.g. `Última saída dia 5 de janeiro`
    pub fn last_expense_label(&self, date: NaiveDate) -> String {
        match self.locale {
            Locale::PtBr => format!("Última saída dia {}", self.day_month(date)),
            Locale::EnUs => format!("Last expense on {}", self.day_month(date)),
        }
    }

    /// Statement interval ending at `date`, e.g. `01 a 5 de janeiro`
    pub fn interval_label(&self, date: NaiveDate) -> String {
        match self.locale {
            Locale::PtBr => format!("01 a {}", self.day_month(date)),
            Locale::EnUs => format!("01 to {}", self.day_month(date)),
        }
    }

    /// Placeholder shown for a bucket without transactions
    pub fn empty_bucket_label(&self) -> &'static str {
        self.labels().empty_bucket
    }
}

impl Default for LocaleFormat {
    fn default() -> Self {
        Self::new(Locale::default(), Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_input() {
        let pt = LocaleFormat::new(Locale::PtBr, Currency::Brl);
        assert_eq!(pt.parse_input("12,50").unwrap(), Money::from_cents(1_250));
        assert_eq!(pt.parse_input("1.234,56").unwrap(), Money::from_cents(123_456));
        assert_eq!(pt.parse_input(" 30 ").unwrap(), Money::from_cents(3_000));
        assert_eq!(pt.parse_input("7.5").unwrap(), Money::from_cents(750));

        let us = LocaleFormat::new(Locale::EnUs, Currency::Usd);
        assert_eq!(us.parse_input("1,234.56").unwrap(), Money::from_cents(123_456));
        assert!(us.parse_input("abc").is_err());
        assert!(us.parse_input("-5").is_err());
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("en_us".parse::<Locale>().unwrap(), Locale::EnUs);
        assert!("fr-FR".parse::<Locale>().is_err());
        assert_eq!("brl".parse::<Currency>().unwrap(), Currency::Brl);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Locale::PtBr).unwrap(), "\"pt-BR\"");
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
    }

    #[test]
    fn test_pt_br_labels() {
        let fmt = LocaleFormat::default();
        assert_eq!(
            fmt.last_income_label(date(2024, 1, 10)),
            "Última entrada dia 10 de janeiro"
        );
        assert_eq!(
            fmt.last_expense_label(date(2024, 3, 5)),
            "Última saída dia 5 de março"
        );
        assert_eq!(fmt.interval_label(date(2024, 1, 5)), "01 a 5 de janeiro");
        assert_eq!(fmt.empty_bucket_label(), "Nenhuma transação");
    }

    #[test]
    fn test_en_us_labels() {
        let fmt = LocaleFormat::new(Locale::EnUs, Currency::Usd);
        assert_eq!(
            fmt.last_income_label(date(2024, 1, 10)),
            "Last income on January 10"
        );
        assert_eq!(fmt.interval_label(date(2024, 1, 5)), "01 to January 5");
        assert_eq!(fmt.empty_bucket_label(), "No transactions yet");
    }
}
