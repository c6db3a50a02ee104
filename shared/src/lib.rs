use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod aggregation;
pub mod config;
pub mod formatting;
pub mod period;
pub mod seed;
pub mod stats;
pub mod store;
pub mod validation;

pub use aggregation::{chart_data, growth_percentages, BucketKey, BucketOrder};
pub use config::{ConfigError, DashboardConfig};
pub use period::filter_by_period;
pub use stats::dashboard_stats;
pub use store::InvoiceStore;
pub use validation::{FormError, InvoiceFormInput};

/// Invoice ID is the creation time in epoch milliseconds, rendered as a decimal string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub title: String,
    /// Client name as entered on the form
    pub client: String,
    /// Invoice amount in dollars, never negative
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    /// Calendar day (UTC) the invoice was created on; drives period filtering
    pub created_date: NaiveDate,
}

/// Lifecycle state of an invoice. Changes are always user-driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Pending,
    Paid,
    Overdue,
}

/// Trailing time window used to filter invoices on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimePeriod {
    #[serde(rename = "1month")]
    OneMonth,
    #[default]
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "1year")]
    OneYear,
    /// Fixed two-year lookback; not a user-chosen range
    #[serde(rename = "custom")]
    Custom,
}

/// Validated payload of the create form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceFormData {
    pub title: String,
    pub client: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
}

/// Partial field set merged into an existing invoice. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceUpdate {
    pub title: Option<String>,
    pub client: Option<String>,
    pub amount: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<InvoiceStatus>,
}

/// Totals shown on the stats cards for one period
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Sum of paid invoices
    pub total_earnings: f64,
    /// Sum of pending invoices
    pub payment_awaited: f64,
    /// Sum of overdue invoices
    pub payment_overdue: f64,
}

/// One bar/point of the income trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataPoint {
    pub name: String,
    pub income: f64,
    /// Percentage change against the previous bucket, rounded
    pub mom_growth: i64,
}

impl Invoice {
    /// Generate an invoice ID from a creation timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        epoch_millis.to_string()
    }

    /// Merge a partial update into this invoice
    pub fn apply(&mut self, update: InvoiceUpdate) {
        let InvoiceUpdate {
            title,
            client,
            amount,
            due_date,
            status,
        } = update;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(client) = client {
            self.client = client;
        }
        if let Some(amount) = amount {
            self.amount = amount;
        }
        if let Some(due_date) = due_date {
            self.due_date = due_date;
        }
        if let Some(status) = status {
            self.status = status;
        }
    }

    /// True when the due date has passed and the invoice is still unpaid.
    /// Advisory only; status is never changed automatically.
    pub fn is_past_due(&self, today: NaiveDate) -> bool {
        self.status.is_overdue_candidate(self.due_date, today)
    }
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 4] = [
        InvoiceStatus::Draft,
        InvoiceStatus::Pending,
        InvoiceStatus::Paid,
        InvoiceStatus::Overdue,
    ];

    /// Wire/form value ("draft", "pending", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
        }
    }

    /// Capitalized label for badges and selectors
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "Draft",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
        }
    }

    pub fn is_overdue_candidate(&self, due_date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            InvoiceStatus::Paid | InvoiceStatus::Overdue => false,
            InvoiceStatus::Draft | InvoiceStatus::Pending => due_date < today,
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(InvoiceStatus::Draft),
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            "overdue" => Ok(InvoiceStatus::Overdue),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 4] = [
        TimePeriod::OneMonth,
        TimePeriod::ThreeMonths,
        TimePeriod::OneYear,
        TimePeriod::Custom,
    ];

    /// Length of the trailing window in days
    pub fn lookback_days(&self) -> i64 {
        match self {
            TimePeriod::OneMonth => 30,
            TimePeriod::ThreeMonths => 90,
            TimePeriod::OneYear => 365,
            TimePeriod::Custom => 2 * 365,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimePeriod::OneMonth => "1 Month",
            TimePeriod::ThreeMonths => "3 Months",
            TimePeriod::OneYear => "1 Year",
            TimePeriod::Custom => "Custom",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimePeriod::OneMonth => "1month",
            TimePeriod::ThreeMonths => "3months",
            TimePeriod::OneYear => "1year",
            TimePeriod::Custom => "custom",
        }
    }

    /// One-month views are bucketed by week, everything else by month
    pub fn groups_by_week(&self) -> bool {
        matches!(self, TimePeriod::OneMonth)
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl InvoiceUpdate {
    /// Update that only changes the status, as the inline selector does
    pub fn status(status: InvoiceStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl From<InvoiceFormData> for InvoiceUpdate {
    fn from(form: InvoiceFormData) -> Self {
        Self {
            title: Some(form.title),
            client: Some(form.client),
            amount: Some(form.amount),
            due_date: Some(form.due_date),
            status: Some(form.status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Unknown invoice status: {0}")]
pub struct UnknownStatus(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_invoice() -> Invoice {
        Invoice {
            id: "1702516122000".to_string(),
            title: "Website redesign".to_string(),
            client: "Acme".to_string(),
            amount: 1200.0,
            due_date: date(2024, 2, 1),
            status: InvoiceStatus::Pending,
            created_date: date(2024, 1, 10),
        }
    }

    #[test]
    fn test_generate_invoice_id() {
        assert_eq!(Invoice::generate_id(1702516122000), "1702516122000");
        assert_eq!(Invoice::generate_id(0), "0");
    }

    #[test]
    fn test_status_round_trips_through_strings() {
        for status in InvoiceStatus::ALL {
            assert_eq!(status.as_str().parse::<InvoiceStatus>().unwrap(), status);
        }
        assert_eq!("  Paid ".parse::<InvoiceStatus>().unwrap(), InvoiceStatus::Paid);
        assert!("cancelled".parse::<InvoiceStatus>().is_err());
        assert_eq!(InvoiceStatus::default(), InvoiceStatus::Draft);
        assert_eq!(InvoiceStatus::Overdue.label(), "Overdue");
    }

    #[test]
    fn test_period_lookback_days() {
        assert_eq!(TimePeriod::OneMonth.lookback_days(), 30);
        assert_eq!(TimePeriod::ThreeMonths.lookback_days(), 90);
        assert_eq!(TimePeriod::OneYear.lookback_days(), 365);
        assert_eq!(TimePeriod::Custom.lookback_days(), 730);
        assert_eq!(TimePeriod::default(), TimePeriod::ThreeMonths);
        assert!(TimePeriod::OneMonth.groups_by_week());
        assert!(!TimePeriod::Custom.groups_by_week());
    }

    #[test]
    fn test_apply_partial_update_keeps_other_fields() {
        let mut invoice = sample_invoice();
        let before = invoice.clone();

        invoice.apply(InvoiceUpdate::status(InvoiceStatus::Paid));

        assert_eq!(invoice.status, InvoiceStatus::Paid);
        assert_eq!(invoice.title, before.title);
        assert_eq!(invoice.client, before.client);
        assert_eq!(invoice.amount, before.amount);
        assert_eq!(invoice.due_date, before.due_date);
        assert_eq!(invoice.created_date, before.created_date);
        assert_eq!(invoice.id, before.id);
    }

    #[test]
    fn test_past_due_is_advisory() {
        let invoice = sample_invoice();
        assert!(invoice.is_past_due(date(2024, 3, 1)));
        assert!(!invoice.is_past_due(date(2024, 1, 15)));

        let mut paid = sample_invoice();
        paid.status = InvoiceStatus::Paid;
        assert!(!paid.is_past_due(date(2024, 3, 1)));
    }

    #[test]
    fn test_invoice_serializes_with_original_field_names() {
        let json = serde_json::to_value(sample_invoice()).unwrap();
        assert_eq!(json["dueDate"], "2024-02-01");
        assert_eq!(json["createdDate"], "2024-01-10");
        assert_eq!(json["status"], "pending");

        let period: TimePeriod = serde_json::from_str("\"1year\"").unwrap();
        assert_eq!(period, TimePeriod::OneYear);
    }
}
