//! Compiled-in sample invoices the dashboard starts with.
//!
//! Dates are stored as offsets from the launch day so that every period tab has data.

use chrono::{Duration, NaiveDate};

use crate::{Invoice, InvoiceStatus};

struct SeedRow {
    title: &'static str,
    client: &'static str,
    amount: f64,
    status: InvoiceStatus,
    created_days_ago: i64,
    /// Relative to the creation day
    due_after_days: i64,
}

const SEED_ROWS: &[SeedRow] = &[
    SeedRow {
        title: "Brand identity package",
        client: "Northwind Traders",
        amount: 2400.0,
        status: InvoiceStatus::Paid,
        created_days_ago: 2,
        due_after_days: 14,
    },
    SeedRow {
        title: "Landing page copy",
        client: "Blue Yonder Airlines",
        amount: 650.0,
        status: InvoiceStatus::Pending,
        created_days_ago: 5,
        due_after_days: 30,
    },
    SeedRow {
        title: "Product photography",
        client: "Fabrikam",
        amount: 1200.0,
        status: InvoiceStatus::Paid,
        created_days_ago: 9,
        due_after_days: 14,
    },
    SeedRow {
        title: "Podcast editing",
        client: "Litware",
        amount: 380.0,
        status: InvoiceStatus::Draft,
        created_days_ago: 12,
        due_after_days: 21,
    },
    SeedRow {
        title: "Social media audit",
        client: "Contoso",
        amount: 900.0,
        status: InvoiceStatus::Paid,
        created_days_ago: 18,
        due_after_days: 14,
    },
    SeedRow {
        title: "Newsletter design",
        client: "Adventure Works",
        amount: 540.0,
        status: InvoiceStatus::Overdue,
        created_days_ago: 24,
        due_after_days: 7,
    },
    SeedRow {
        title: "Video storyboard",
        client: "Tailspin Toys",
        amount: 1750.0,
        status: InvoiceStatus::Paid,
        created_days_ago: 41,
        due_after_days: 30,
    },
    SeedRow {
        title: "SEO retainer",
        client: "Wide World Importers",
        amount: 1100.0,
        status: InvoiceStatus::Pending,
        created_days_ago: 55,
        due_after_days: 30,
    },
    SeedRow {
        title: "Mobile app mockups",
        client: "Proseware",
        amount: 3200.0,
        status: InvoiceStatus::Paid,
        created_days_ago: 70,
        due_after_days: 30,
    },
    SeedRow {
        title: "Annual report layout",
        client: "Margie's Travel",
        amount: 2800.0,
        status: InvoiceStatus::Overdue,
        created_days_ago: 86,
        due_after_days: 14,
    },
    SeedRow {
        title: "Workshop facilitation",
        client: "Coho Winery",
        amount: 1500.0,
        status: InvoiceStatus::Paid,
        created_days_ago: 130,
        due_after_days: 30,
    },
    SeedRow {
        title: "Website maintenance",
        client: "Northwind Traders",
        amount: 600.0,
        status: InvoiceStatus::Paid,
        created_days_ago: 200,
        due_after_days: 30,
    },
    SeedRow {
        title: "Illustration set",
        client: "Fourth Coffee",
        amount: 2100.0,
        status: InvoiceStatus::Paid,
        created_days_ago: 290,
        due_after_days: 30,
    },
    SeedRow {
        title: "Trade show banners",
        client: "Lucerne Publishing",
        amount: 800.0,
        status: InvoiceStatus::Overdue,
        created_days_ago: 340,
        due_after_days: 14,
    },
    SeedRow {
        title: "Catalog redesign",
        client: "Alpine Ski House",
        amount: 4100.0,
        status: InvoiceStatus::Paid,
        created_days_ago: 450,
        due_after_days: 30,
    },
    SeedRow {
        title: "Explainer animation",
        client: "Humongous Insurance",
        amount: 3600.0,
        status: InvoiceStatus::Paid,
        created_days_ago: 610,
        due_after_days: 30,
    },
];

/// Materialize the sample invoices relative to `today`. IDs are "1", "2", ...
pub fn sample_invoices(today: NaiveDate) -> Vec<Invoice> {
    SEED_ROWS
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let created_date = today - Duration::days(row.created_days_ago);
            Invoice {
                id: (index + 1).to_string(),
                title: row.title.to_string(),
                client: row.client.to_string(),
                amount: row.amount,
                due_date: created_date + Duration::days(row.due_after_days),
                status: row.status,
                created_date,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InvoiceStore, TimePeriod};
    use chrono::{NaiveTime, TimeZone, Utc};

    #[test]
    fn test_sample_invoices_are_well_formed() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let invoices = sample_invoices(today);

        assert_eq!(invoices.len(), SEED_ROWS.len());
        assert_eq!(InvoiceStore::new(invoices.clone()).len(), invoices.len());
        for invoice in &invoices {
            assert!(!invoice.title.is_empty());
            assert!(!invoice.client.is_empty());
            assert!(invoice.amount > 0.0);
            assert_eq!(invoice.check(), Ok(()));
            assert!(invoice.created_date <= today);
            assert!(invoice.due_date >= invoice.created_date);
        }
    }

    #[test]
    fn test_every_period_has_paid_income() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let now = Utc.from_utc_datetime(&today.and_time(NaiveTime::MIN));
        let store = InvoiceStore::new(sample_invoices(today));

        for period in TimePeriod::ALL {
            assert!(
                store.stats(period, now).total_earnings > 0.0,
                "period {period} should show earnings"
            );
        }
    }
}
