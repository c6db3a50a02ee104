pub mod invoice_form_fields;
