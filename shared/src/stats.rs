use chrono::{DateTime, Utc};

use crate::period::filter_by_period;
use crate::{DashboardStats, Invoice, InvoiceStatus, TimePeriod};

/// Roll up amounts of the period's invoices by status.
/// Drafts are not counted anywhere.
pub fn dashboard_stats(
    invoices: &[Invoice],
    period: TimePeriod,
    now: DateTime<Utc>,
) -> DashboardStats {
    filter_by_period(invoices, period, now)
        .into_iter()
        .fold(DashboardStats::default(), |mut stats, invoice| {
            match invoice.status {
                InvoiceStatus::Paid => stats.total_earnings += invoice.amount,
                InvoiceStatus::Pending => stats.payment_awaited += invoice.amount,
                InvoiceStatus::Overdue => stats.payment_overdue += invoice.amount,
                InvoiceStatus::Draft => {}
            }
            stats
        })
}
