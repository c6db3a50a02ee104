//! In-memory invoice collection.
//!
//! The store is the single owner of the invoice list. All mutation goes through
//! [`InvoiceStore::create`], [`InvoiceStore::update`] and [`InvoiceStore::delete`];
//! the read side derives stats and chart series from the current contents.
//! Stored invoices always have a title, a client, a finite non-negative amount and
//! an ID no other invoice uses.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::aggregation::{self, BucketOrder};
use crate::period::filter_by_period;
use crate::stats::dashboard_stats;
use crate::validation::FormError;
use crate::{
    ChartDataPoint, DashboardStats, Invoice, InvoiceFormData, InvoiceUpdate, TimePeriod,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Invoice>", into = "Vec<Invoice>")]
pub struct InvoiceStore {
    invoices: Vec<Invoice>,
}

impl InvoiceStore {
    /// Build a store from existing invoices. Invoices with invalid fields and later
    /// duplicates of an ID are dropped.
    pub fn new(invoices: Vec<Invoice>) -> Self {
        let mut seen = HashSet::new();
        let total = invoices.len();
        let invoices: Vec<Invoice> = invoices
            .into_iter()
            .filter(|invoice| match invoice.check() {
                Ok(()) => true,
                Err(error) => {
                    warn!("Dropped invoice {}: {}", invoice.id, error);
                    false
                }
            })
            .filter(|invoice| seen.insert(invoice.id.clone()))
            .collect();

        if invoices.len() != total {
            warn!("Dropped {} of {} invoices", total - invoices.len(), total);
        }
        info!("Invoice store initialized with {} invoices", invoices.len());
        Self { invoices }
    }

    /// All invoices, newest first
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Invoice> {
        self.invoices.iter().find(|invoice| invoice.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Create an invoice from form data and put it at the front of the list.
    ///
    /// The ID is `now` in epoch milliseconds, advanced by one until it is unused.
    pub fn create(
        &mut self,
        form: InvoiceFormData,
        now: DateTime<Utc>,
    ) -> Result<&Invoice, FormError> {
        if let Err(error) = form.check() {
            warn!("Rejected new invoice: {}", error);
            return Err(error);
        }

        let mut epoch_millis = u64::try_from(now.timestamp_millis()).unwrap_or_default();
        while self.contains(&Invoice::generate_id(epoch_millis)) {
            epoch_millis += 1;
        }

        let invoice = Invoice {
            id: Invoice::generate_id(epoch_millis),
            title: form.title,
            client: form.client,
            amount: form.amount,
            due_date: form.due_date,
            status: form.status,
            created_date: now.date_naive(),
        };

        info!("Created invoice {} for {} (${:.2})", invoice.id, invoice.client, invoice.amount);
        self.invoices.insert(0, invoice);
        Ok(&self.invoices[0])
    }

    /// Merge `update` into the invoice with `id`. Returns `Ok(false)` if no invoice
    /// matched; an invalid update leaves the invoice unchanged.
    pub fn update(&mut self, id: &str, update: InvoiceUpdate) -> Result<bool, FormError> {
        let Some(invoice) = self.invoices.iter_mut().find(|invoice| invoice.id == id) else {
            debug!("Update ignored, invoice {} not found", id);
            return Ok(false);
        };

        if let Err(error) = update.check() {
            warn!("Rejected update of invoice {}: {}", id, error);
            return Err(error);
        }

        debug!("Updating invoice {}: {:?}", id, update);
        invoice.apply(update);
        Ok(true)
    }

    /// Remove the invoice with `id`. Returns false if no invoice matched.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.invoices.len();
        self.invoices.retain(|invoice| invoice.id != id);
        let removed = self.invoices.len() != before;

        if removed {
            info!("Deleted invoice {}", id);
        } else {
            debug!("Delete ignored, invoice {} not found", id);
        }
        removed
    }

    pub fn filtered(&self, period: TimePeriod, now: DateTime<Utc>) -> Vec<&Invoice> {
        filter_by_period(&self.invoices, period, now)
    }

    pub fn stats(&self, period: TimePeriod, now: DateTime<Utc>) -> DashboardStats {
        dashboard_stats(&self.invoices, period, now)
    }

    pub fn chart_data(
        &self,
        period: TimePeriod,
        now: DateTime<Utc>,
        order: BucketOrder,
    ) -> Vec<ChartDataPoint> {
        aggregation::chart_data(&self.invoices, period, now, order)
    }
}

impl From<Vec<Invoice>> for InvoiceStore {
    fn from(invoices: Vec<Invoice>) -> Self {
        Self::new(invoices)
    }
}

impl From<InvoiceStore> for Vec<Invoice> {
    fn from(store: InvoiceStore) -> Self {
        store.invoices
    }
}
