//! Invoices API.

use crate::client::DepotClient;
use crate::error::Result;
use crate::types::{Invoice, VoidInvoice};

/// Invoices API client.
pub struct InvoicesApi {
    client: DepotClient,
}

impl InvoicesApi {
    pub(crate) fn new(client: DepotClient) -> Self {
        Self { client }
    }

    /// List all invoices.
    pub async fn list(&self) -> Result<Vec<Invoice>> {
        self.client.get("invoices").await
    }

    /// Issue an invoice.
    pub async fn issue(&self, invoice: &Invoice) -> Result<Invoice> {
        self.client.post("invoices/issue", invoice).await
    }

    /// Get the invoice attached to an order.
    pub async fn by_order(&self, order_id: &str) -> Result<Invoice> {
        self.client.get(&format!("invoices/order/{}", order_id)).await
    }

    /// Look up an invoice by its number.
    pub async fn by_number(&self, invoice_number: &str) -> Result<Invoice> {
        self.client
            .get(&format!("invoices/number/{}", invoice_number))
            .await
    }

    /// Void an invoice, recording the reason.
    pub async fn void(&self, id: i64, reason: &str) -> Result<()> {
        self.client
            .post::<serde_json::Value, _>(
                &format!("invoices/{}/void", id),
                &VoidInvoice {
                    reason: reason.to_string(),
                },
            )
            .await?;
        Ok(())
    }
}
