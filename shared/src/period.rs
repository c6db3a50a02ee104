//! Trailing time-window filtering.
//!
//! A period selects every invoice whose creation date, taken at midnight UTC, is not
//! earlier than `now - lookback`. `now` is always supplied by the caller.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::{Invoice, TimePeriod};

/// First instant still inside the window for `period`
pub fn window_start(period: TimePeriod, now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(period.lookback_days())
}

/// Whether an invoice created on `created_date` falls inside the window
pub fn is_within_period(created_date: NaiveDate, period: TimePeriod, now: DateTime<Utc>) -> bool {
    created_date.and_time(chrono::NaiveTime::MIN).and_utc() >= window_start(period, now)
}

/// Invoices created inside the trailing window, in their original order
pub fn filter_by_period<'a>(
    invoices: &'a [Invoice],
    period: TimePeriod,
    now: DateTime<Utc>,
) -> Vec<&'a Invoice> {
    let filtered: Vec<&Invoice> = invoices
        .iter()
        .filter(|invoice| is_within_period(invoice.created_date, period, now))
        .collect();

    log::debug!(
        "period {} kept {} of {} invoices",
        period.as_str(),
        filtered.len(),
        invoices.len()
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InvoiceStatus;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap()
    }

    fn invoice_created(id: &str, days_ago: i64) -> Invoice {
        let created = now().date_naive() - Duration::days(days_ago);
        Invoice {
            id: id.to_string(),
            title: format!("Invoice {id}"),
            client: "Acme".to_string(),
            amount: 100.0,
            due_date: created + Duration::days(14),
            status: InvoiceStatus::Paid,
            created_date: created,
        }
    }

    #[test]
    fn test_one_month_excludes_invoice_created_31_days_ago() {
        let invoices = vec![
            invoice_created("recent", 3),
            invoice_created("edge", 29),
            invoice_created("old", 31),
        ];

        let ids: Vec<&str> = filter_by_period(&invoices, TimePeriod::OneMonth, now())
            .iter()
            .map(|i| i.id.as_str())
            .collect();

        assert_eq!(ids, vec!["recent", "edge"]);
    }

    #[test]
    fn test_boundary_uses_midnight_of_creation_day() {
        // Created exactly 30 days ago at 00:00 is earlier than now - 30d at 10:30.
        let invoices = vec![invoice_created("boundary", 30)];
        assert!(filter_by_period(&invoices, TimePeriod::OneMonth, now()).is_empty());

        let midnight = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let created = midnight.date_naive() - Duration::days(30);
        assert!(is_within_period(created, TimePeriod::OneMonth, midnight));
    }

    #[test]
    fn test_wider_periods_include_more() {
        let invoices = vec![
            invoice_created("a", 10),
            invoice_created("b", 80),
            invoice_created("c", 300),
            invoice_created("d", 700),
            invoice_created("e", 800),
        ];

        assert_eq!(filter_by_period(&invoices, TimePeriod::OneMonth, now()).len(), 1);
        assert_eq!(filter_by_period(&invoices, TimePeriod::ThreeMonths, now()).len(), 2);
        assert_eq!(filter_by_period(&invoices, TimePeriod::OneYear, now()).len(), 3);
        assert_eq!(filter_by_period(&invoices, TimePeriod::Custom, now()).len(), 4);
    }

    #[test]
    fn test_future_created_dates_are_kept() {
        let invoices = vec![invoice_created("future", -5)];
        assert_eq!(filter_by_period(&invoices, TimePeriod::OneMonth, now()).len(), 1);
    }
}
