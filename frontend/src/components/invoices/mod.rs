pub mod edit_invoice_modal;
pub mod invoices_list;

pub use edit_invoice_modal::EditInvoiceModal;
pub use invoices_list::InvoicesList;
