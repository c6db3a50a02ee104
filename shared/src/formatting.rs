//! Display helpers shared by the stats cards, invoice list and chart.

use chrono::NaiveDate;

/// en-US currency with two decimals: `$1,234.50`, `-$20.00`
pub fn format_currency_with(amount: f64, symbol: &str) -> String {
    let (sign, whole, cents) = split_amount(amount);
    format!("{}{}{}.{:02}", sign, symbol, group_thousands(whole), cents)
}

/// Currency without trailing zero cents, for chart axes and tooltips: `$1,000`, `$12.5`
pub fn format_currency_short(amount: f64, symbol: &str) -> String {
    let (sign, whole, cents) = split_amount(amount);
    let fraction = match cents {
        0 => String::new(),
        c if c % 10 == 0 => format!(".{}", c / 10),
        c => format!(".{:02}", c),
    };
    format!("{}{}{}{}", sign, symbol, group_thousands(whole), fraction)
}

pub fn format_percentage(value: i64) -> String {
    format!("{value}%")
}

/// `Jan 5, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn split_amount(amount: f64) -> (&'static str, u64, u64) {
    if !amount.is_finite() {
        return ("", 0, 0);
    }
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && total_cents > 0 { "-" } else { "" };
    (sign, total_cents / 100, total_cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
