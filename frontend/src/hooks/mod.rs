pub mod use_invoices;

pub use use_invoices::{use_invoices, InvoiceProvider};
