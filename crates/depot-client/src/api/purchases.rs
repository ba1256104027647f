//! Purchases API.

use crate::client::DepotClient;
use crate::error::Result;
use crate::types::Purchase;

/// Purchases API client.
pub struct PurchasesApi {
    client: DepotClient,
}

impl PurchasesApi {
    pub(crate) fn new(client: DepotClient) -> Self {
        Self { client }
    }

    /// List all purchases.
    pub async fn list(&self) -> Result<Vec<Purchase>> {
        self.client.get("purchases").await
    }

    /// Record a purchase.
    pub async fn create(&self, purchase: &Purchase) -> Result<Purchase> {
        self.client.post("purchases", purchase).await
    }

    /// Mark a purchase as received into stock.
    pub async fn complete(&self, id: i64) -> Result<Purchase> {
        self.client
            .post_empty(&format!("purchases/{}/complete", id))
            .await
    }

    /// Delete a purchase.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("purchases/{}", id)).await
    }
}
