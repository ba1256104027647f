//! Inventory reporting API.

use crate::client::DepotClient;
use crate::error::Result;
use crate::types::{InventoryTransaction, PeriodBalance};

/// Inventory API client.
pub struct InventoryApi {
    client: DepotClient,
}

impl InventoryApi {
    pub(crate) fn new(client: DepotClient) -> Self {
        Self { client }
    }

    /// Generate the balance report for a period.
    pub async fn generate_report(&self, period: &str) -> Result<Vec<PeriodBalance>> {
        self.client
            .get_with_query("inventory/report/generate", &[("period", period)])
            .await
    }

    /// Fetch a previously generated balance report.
    pub async fn report(&self, period: &str) -> Result<Vec<PeriodBalance>> {
        self.client
            .get_with_query("inventory/report", &[("period", period)])
            .await
    }

    /// List the periods a report exists for.
    pub async fn periods(&self) -> Result<Vec<String>> {
        self.client.get("inventory/report/periods").await
    }

    /// Stock movements for one product.
    pub async fn transactions(&self, product_id: i64) -> Result<Vec<InventoryTransaction>> {
        self.client
            .get(&format!("inventory/transactions/{}", product_id))
            .await
    }

    /// Stock movements in a date range.
    pub async fn transactions_between(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<InventoryTransaction>> {
        self.client
            .get_with_query(
                "inventory/transactions",
                &[("startDate", start_date), ("endDate", end_date)],
            )
            .await
    }
}
