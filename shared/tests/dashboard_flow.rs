use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use shared::seed::sample_invoices;
use shared::{
    BucketOrder, InvoiceFormInput, InvoiceStatus, InvoiceStore, InvoiceUpdate, TimePeriod,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 20, 15, 45, 0).unwrap()
}

fn seeded_store() -> InvoiceStore {
    InvoiceStore::new(sample_invoices(now().date_naive()))
}

#[test]
fn test_created_invoice_appears_first_as_draft() {
    init_logging();
    let mut store = seeded_store();
    let stats_before = store.stats(TimePeriod::OneMonth, now());
    let chart_before = store.chart_data(TimePeriod::OneMonth, now(), BucketOrder::default());

    let form = InvoiceFormInput {
        title: "Design work".to_string(),
        client: "Acme".to_string(),
        amount: "500".to_string(),
        due_date: "2024-01-01".to_string(),
        ..InvoiceFormInput::default()
    }
    .validate()
    .expect("form should be valid");

    let id = store.create(form, now()).expect("valid invoice").id.clone();

    let first = &store.invoices()[0];
    assert_eq!(first.id, id);
    assert_eq!(first.title, "Design work");
    assert_eq!(first.status, InvoiceStatus::Draft);
    assert_eq!(first.due_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

    // A draft changes neither the totals nor the chart
    assert_eq!(store.stats(TimePeriod::OneMonth, now()), stats_before);
    assert_eq!(
        store.chart_data(TimePeriod::OneMonth, now(), BucketOrder::default()),
        chart_before
    );

    store.update(&id, InvoiceUpdate::status(InvoiceStatus::Paid)).unwrap();
    let stats_after = store.stats(TimePeriod::OneMonth, now());
    assert_eq!(stats_after.total_earnings, stats_before.total_earnings + 500.0);
    assert_eq!(stats_after.payment_awaited, stats_before.payment_awaited);
}

#[test]
fn test_stats_match_filtered_sums_for_every_period() {
    init_logging();
    let store = seeded_store();

    for period in TimePeriod::ALL {
        let filtered = store.filtered(period, now());
        let sum_of = |status: InvoiceStatus| -> f64 {
            filtered
                .iter()
                .filter(|invoice| invoice.status == status)
                .map(|invoice| invoice.amount)
                .sum()
        };

        let stats = store.stats(period, now());
        assert_eq!(stats.total_earnings, sum_of(InvoiceStatus::Paid), "{period}");
        assert_eq!(stats.payment_awaited, sum_of(InvoiceStatus::Pending), "{period}");
        assert_eq!(stats.payment_overdue, sum_of(InvoiceStatus::Overdue), "{period}");

        let chart_total: f64 = store
            .chart_data(period, now(), BucketOrder::default())
            .iter()
            .map(|point| point.income)
            .sum();
        assert!((chart_total - stats.total_earnings).abs() < 1e-9, "{period}");
    }
}

#[test]
fn test_edit_form_update_replaces_all_fields() {
    init_logging();
    let mut store = seeded_store();
    let original = store.invoices()[3].clone();

    let mut input = InvoiceFormInput::from_invoice(&original);
    input.title = "Podcast editing (revised)".to_string();
    input.amount = "420".to_string();
    input.status = InvoiceStatus::Pending;
    let form = input.validate().expect("edit form should be valid");

    assert_eq!(store.update(&original.id, InvoiceUpdate::from(form)), Ok(true));

    let updated = store.get(&original.id).expect("invoice still present");
    assert_eq!(updated.title, "Podcast editing (revised)");
    assert_eq!(updated.amount, 420.0);
    assert_eq!(updated.status, InvoiceStatus::Pending);
    assert_eq!(updated.client, original.client);
    assert_eq!(updated.created_date, original.created_date);
    assert_eq!(store.invoices()[3].id, original.id);
}

#[test]
fn test_invoice_from_31_days_ago_leaves_one_month_view() {
    init_logging();
    let mut store = InvoiceStore::default();
    let form = InvoiceFormInput {
        title: "Old job".to_string(),
        client: "Initech".to_string(),
        amount: "100".to_string(),
        due_date: "2024-01-31".to_string(),
        status: InvoiceStatus::Paid,
    }
    .validate()
    .expect("form should be valid");

    store.create(form, now() - Duration::days(31)).expect("valid invoice");

    assert!(store.filtered(TimePeriod::OneMonth, now()).is_empty());
    assert_eq!(store.filtered(TimePeriod::ThreeMonths, now()).len(), 1);
}
