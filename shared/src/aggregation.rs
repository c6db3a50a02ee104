//! Income buckets and growth for the trend chart.
//!
//! Only paid invoices inside the selected period contribute. One-month views bucket by
//! week of month (`Week 1` .. `Week 5`), all other periods by calendar month (`Jan 24`).

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::period::filter_by_period;
use crate::{ChartDataPoint, Invoice, InvoiceStatus, TimePeriod};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Grouping key of a chart bucket. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BucketKey {
    /// Week of month, `ceil(day / 7)`; weeks of different months share a bucket
    Week(u32),
    Month { year: i32, month: u32 },
}

/// How buckets are ordered before growth is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketOrder {
    #[default]
    Chronological,
    /// Plain string sort of the labels. Not chronological across months or years.
    Label,
}

/// Summed paid income for one bucket
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeBucket {
    pub key: BucketKey,
    pub label: String,
    pub income: f64,
    pub count: usize,
}

impl BucketKey {
    pub fn for_date(date: NaiveDate, period: TimePeriod) -> Self {
        if period.groups_by_week() {
            BucketKey::Week(date.day().div_ceil(7))
        } else {
            BucketKey::Month {
                year: date.year(),
                month: date.month(),
            }
        }
    }

    pub fn label(&self) -> String {
        match self {
            BucketKey::Week(week) => format!("Week {week}"),
            BucketKey::Month { year, month } => {
                let name = MONTH_ABBREVIATIONS
                    .get(month.saturating_sub(1) as usize)
                    .copied()
                    .unwrap_or("???");
                format!("{} {:02}", name, year.rem_euclid(100))
            }
        }
    }
}

/// Group paid invoices of the period into ordered buckets
pub fn income_buckets(
    invoices: &[Invoice],
    period: TimePeriod,
    now: DateTime<Utc>,
    order: BucketOrder,
) -> Vec<IncomeBucket> {
    let mut grouped: BTreeMap<BucketKey, (f64, usize)> = BTreeMap::new();

    for invoice in filter_by_period(invoices, period, now) {
        if invoice.status != InvoiceStatus::Paid {
            continue;
        }
        let entry = grouped
            .entry(BucketKey::for_date(invoice.created_date, period))
            .or_insert((0.0, 0));
        entry.0 += invoice.amount;
        entry.1 += 1;
    }

    let mut buckets: Vec<IncomeBucket> = grouped
        .into_iter()
        .map(|(key, (income, count))| IncomeBucket {
            key,
            label: key.label(),
            income,
            count,
        })
        .collect();

    if order == BucketOrder::Label {
        buckets.sort_by(|a, b| a.label.cmp(&b.label));
    }

    buckets
}

/// Growth of each value against its predecessor, in whole percent.
///
/// The first entry is always 0, as is any entry whose predecessor is not positive.
pub fn growth_percentages(incomes: &[f64]) -> Vec<i64> {
    incomes
        .iter()
        .enumerate()
        .map(|(index, &current)| {
            let previous = if index > 0 { incomes[index - 1] } else { current };
            if previous > 0.0 {
                round_half_up((current - previous) / previous * 100.0)
            } else {
                0
            }
        })
        .collect()
}

/// Chart series for the period: one point per bucket with income and growth
pub fn chart_data(
    invoices: &[Invoice],
    period: TimePeriod,
    now: DateTime<Utc>,
    order: BucketOrder,
) -> Vec<ChartDataPoint> {
    let buckets = income_buckets(invoices, period, now, order);
    let incomes: Vec<f64> = buckets.iter().map(|bucket| bucket.income).collect();
    let growth = growth_percentages(&incomes);

    buckets
        .into_iter()
        .zip(growth)
        .map(|(bucket, mom_growth)| ChartDataPoint {
            name: bucket.label,
            income: bucket.income,
            mom_growth,
        })
        .collect()
}

// Halves go toward positive infinity: 2.5 -> 3, -2.5 -> -2
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
