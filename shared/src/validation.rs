//! Required-field checks for the create and edit forms, and the field rules
//! every stored invoice satisfies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Invoice, InvoiceFormData, InvoiceStatus, InvoiceUpdate};

/// Raw form values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceFormInput {
    pub title: String,
    pub client: String,
    pub amount: String,
    /// `YYYY-MM-DD`, as produced by a date input
    pub due_date: String,
    pub status: InvoiceStatus,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Invoice title is required")]
    MissingTitle,
    #[error("Client name is required")]
    MissingClient,
    #[error("Amount must be a positive number, got {0:?}")]
    MissingAmount(String),
    #[error("Due date must be a date in YYYY-MM-DD format, got {0:?}")]
    MissingDueDate(String),
    #[error("Amount must be a finite, non-negative number, got {0}")]
    InvalidAmount(f64),
}

impl InvoiceFormInput {
    /// Pre-fill the form from an existing invoice, as the edit dialog does
    pub fn from_invoice(invoice: &Invoice) -> Self {
        Self {
            title: invoice.title.clone(),
            client: invoice.client.clone(),
            amount: invoice.amount.to_string(),
            due_date: invoice.due_date.format("%Y-%m-%d").to_string(),
            status: invoice.status,
        }
    }

    /// Check required fields and convert to typed form data
    pub fn validate(&self) -> Result<InvoiceFormData, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }

        let client = self.client.trim();
        if client.is_empty() {
            return Err(FormError::MissingClient);
        }

        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && *amount > 0.0)
            .ok_or_else(|| FormError::MissingAmount(self.amount.clone()))?;

        let due_date = NaiveDate::parse_from_str(self.due_date.trim(), "%Y-%m-%d")
            .map_err(|_| FormError::MissingDueDate(self.due_date.clone()))?;

        Ok(InvoiceFormData {
            title: title.to_string(),
            client: client.to_string(),
            amount,
            due_date,
            status: self.status,
        })
    }
}

impl Invoice {
    pub fn check(&self) -> Result<(), FormError> {
        check_fields(Some(&self.title), Some(&self.client), Some(self.amount))
    }
}

impl InvoiceFormData {
    pub fn check(&self) -> Result<(), FormError> {
        check_fields(Some(&self.title), Some(&self.client), Some(self.amount))
    }
}

impl InvoiceUpdate {
    /// Only the fields the update sets are checked
    pub fn check(&self) -> Result<(), FormError> {
        check_fields(self.title.as_deref(), self.client.as_deref(), self.amount)
    }
}

fn check_fields(
    title: Option<&str>,
    client: Option<&str>,
    amount: Option<f64>,
) -> Result<(), FormError> {
    if title.is_some_and(|title| title.trim().is_empty()) {
        return Err(FormError::MissingTitle);
    }
    if client.is_some_and(|client| client.trim().is_empty()) {
        return Err(FormError::MissingClient);
    }
    match amount {
        Some(amount) if !amount.is_finite() || amount < 0.0 => {
            Err(FormError::InvalidAmount(amount))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> InvoiceFormInput {
        InvoiceFormInput {
            title: "Design work".to_string(),
            client: "Acme".to_string(),
            amount: "500".to_string(),
            due_date: "2024-01-01".to_string(),
            status: InvoiceStatus::Draft,
        }
    }

    #[test]
    fn test_valid_input_converts() {
        let data = valid_input().validate().unwrap();
        assert_eq!(data.title, "Design work");
        assert_eq!(data.amount, 500.0);
        assert_eq!(data.due_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(data.status, InvoiceStatus::Draft);
    }

    #[test]
    fn test_text_fields_are_trimmed_and_required() {
        let mut input = valid_input();
        input.title = "  Logo  ".to_string();
        assert_eq!(input.validate().unwrap().title, "Logo");

        input.title = "   ".to_string();
        assert_eq!(input.validate(), Err(FormError::MissingTitle));

        let mut input = valid_input();
        input.client = String::new();
        assert_eq!(input.validate(), Err(FormError::MissingClient));
    }

    #[test]
    fn test_amount_must_be_positive_number() {
        for bad in ["", "0", "0.00", "-5", "abc", "NaN", "inf"] {
            let mut input = valid_input();
            input.amount = bad.to_string();
            assert!(
                matches!(input.validate(), Err(FormError::MissingAmount(_))),
                "amount {bad:?} should be rejected"
            );
        }

        let mut input = valid_input();
        input.amount = "12.34".to_string();
        assert_eq!(input.validate().unwrap().amount, 12.34);
    }

    #[test]
    fn test_due_date_required() {
        let mut input = valid_input();
        input.due_date = String::new();
        assert!(matches!(input.validate(), Err(FormError::MissingDueDate(_))));

        input.due_date = "01/02/2024".to_string();
        assert!(matches!(input.validate(), Err(FormError::MissingDueDate(_))));
    }

    #[test]
    fn test_from_invoice_round_trips() {
        let invoice = Invoice {
            id: "42".to_string(),
            title: "Retainer".to_string(),
            client: "Globex".to_string(),
            amount: 1250.5,
            due_date: NaiveDate::from_ymd_opt(2024, 7, 9).unwrap(),
            status: InvoiceStatus::Overdue,
            created_date: NaiveDate::from_ymd_opt(2024, 6, 9).unwrap(),
        };

        let input = InvoiceFormInput::from_invoice(&invoice);
        assert_eq!(input.amount, "1250.5");
        assert_eq!(input.due_date, "2024-07-09");

        let data = input.validate().unwrap();
        assert_eq!(data.amount, invoice.amount);
        assert_eq!(data.status, InvoiceStatus::Overdue);
    }

    #[test]
    fn test_stored_field_rules() {
        let data = valid_input().validate().unwrap();
        assert_eq!(data.check(), Ok(()));

        let mut zero = data.clone();
        zero.amount = 0.0;
        assert_eq!(zero.check(), Ok(()));

        for bad in [f64::NAN, f64::INFINITY, -50.0] {
            let mut form = data.clone();
            form.amount = bad;
            assert!(matches!(form.check(), Err(FormError::InvalidAmount(_))));
        }

        let mut blank = data;
        blank.client = " ".to_string();
        assert_eq!(blank.check(), Err(FormError::MissingClient));
    }

    #[test]
    fn test_update_checks_only_set_fields() {
        assert_eq!(InvoiceUpdate::status(InvoiceStatus::Paid).check(), Ok(()));

        let update = InvoiceUpdate {
            amount: Some(-50.0),
            ..InvoiceUpdate::default()
        };
        assert_eq!(update.check(), Err(FormError::InvalidAmount(-50.0)));

        let update = InvoiceUpdate {
            title: Some(String::new()),
            ..InvoiceUpdate::default()
        };
        assert_eq!(update.check(), Err(FormError::MissingTitle));
    }
}
