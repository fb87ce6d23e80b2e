//! Date formatting per locale

use chrono::{Datelike, NaiveDate};

use super::Locale;

const PT_BR_MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const EN_US_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full month name for a date
pub fn month_name(locale: Locale, date: NaiveDate) -> &'static str {
    let index = date.month0() as usize;
    match locale {
        Locale::PtBr => PT_BR_MONTHS[index],
        Locale::EnUs => EN_US_MONTHS[index],
    }
}

/// Unpadded day with full month name
pub fn day_month(locale: Locale, date: NaiveDate) -> String {
    match locale {
        Locale::PtBr => format!("{} de {}", date.day(), month_name(locale, date)),
        Locale::EnUs => format!("{} {}", month_name(locale, date), date.day()),
    }
}

/// Two-digit day, month and year in locale order
pub fn short_date(locale: Locale, date: NaiveDate) -> String {
    match locale {
        Locale::PtBr => date.format("%d/%m/%y").to_string(),
        Locale::EnUs => date.format("%m/%d/%y").to_string(),
    }
}
