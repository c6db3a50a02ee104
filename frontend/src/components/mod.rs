pub mod create_invoice_modal;
pub mod dashboard_page;
pub mod footer;
pub mod forms;
pub mod header;
pub mod home_page;
pub mod income_chart;
pub mod invoices;
pub mod stats_cards;
pub mod time_period_tabs;

pub use dashboard_page::DashboardPage;
pub use home_page::HomePage;
