//! Display formatting for money and dates, driven by the client config.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use store_config::Config;

/// Money precision used everywhere in the UI.
pub const MONEY_SCALE: u32 = 2;

/// Locale-aware date layouts the client knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `15.01.2024`
    Dotted,
    /// `01/15/2024`
    UsSlashed,
    /// `2024-01-15`
    Iso,
}

impl DateStyle {
    pub fn for_locale(locale: &str) -> Self {
        let lower = locale.to_ascii_lowercase();
        if lower.starts_with("ru") || lower.starts_with("de") || lower.starts_with("uk") {
            DateStyle::Dotted
        } else if lower == "en-us" || lower == "en_us" {
            DateStyle::UsSlashed
        } else {
            DateStyle::Iso
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            DateStyle::Dotted => "%d.%m.%Y",
            DateStyle::UsSlashed => "%m/%d/%Y",
            DateStyle::Iso => "%Y-%m-%d",
        }
    }
}

/// Formatter built from the active configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFormat {
    pub currency_symbol: String,
    pub date_style: DateStyle,
    russian_months: bool,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl DisplayFormat {
    pub fn from_config(config: &Config) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
            date_style: DateStyle::for_locale(&config.locale),
            russian_months: config.locale.to_ascii_lowercase().starts_with("ru"),
        }
    }

    /// Plain amount with two decimals, e.g. `10.50`.
    pub fn amount(&self, amount: Decimal) -> String {
        format_amount(amount)
    }

    /// Amount followed by the currency symbol, e.g. `0.00 ₽`.
    pub fn currency(&self, amount: Decimal) -> String {
        format!("{} {}", format_amount(amount), self.currency_symbol)
    }

    pub fn date(&self, value: DateTime<Utc>) -> String {
        self.naive_date(value.date_naive())
    }

    pub fn naive_date(&self, value: NaiveDate) -> String {
        value.format(self.date_style.pattern()).to_string()
    }

    pub fn month_name(&self, month: u32) -> &'static str {
        let index = month.clamp(1, 12) as usize - 1;
        if self.russian_months {
            RU_MONTHS[index]
        } else {
            EN_MONTHS[index]
        }
    }

    /// `<Month> <year>` label for a report period.
    pub fn period(&self, year: i32, month: u32) -> String {
        format!("{} {}", self.month_name(month), year)
    }
}

pub fn format_amount(amount: Decimal) -> String {
    let mut value =
        amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(MONEY_SCALE);
    value.to_string()
}

/// First and last day of the month containing `today`.
pub fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = today.with_day(1).unwrap_or(today);
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    let last = next_month
        .and_then(|date| date.pred_opt())
        .unwrap_or(first);
    (first, last)
}

const RU_MONTHS: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

const EN_MONTHS: [&str; 12] = [
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
