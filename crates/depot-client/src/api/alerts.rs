//! Inventory alerts API.

use crate::client::DepotClient;
use crate::error::Result;
use crate::types::{AlertStatistics, InventoryAlert};

/// Inventory alerts API client.
pub struct AlertsApi {
    client: DepotClient,
}

impl AlertsApi {
    pub(crate) fn new(client: DepotClient) -> Self {
        Self { client }
    }

    /// List all active alerts.
    pub async fn list(&self) -> Result<Vec<InventoryAlert>> {
        self.client.get("inventory/alerts").await
    }

    /// Alerts of one type, e.g. `LOW_STOCK`.
    pub async fn by_type(&self, alert_type: &str) -> Result<Vec<InventoryAlert>> {
        self.client
            .get_with_query("inventory/alerts/by-type", &[("type", alert_type)])
            .await
    }

    /// Alerts at one severity.
    pub async fn by_severity(&self, severity: &str) -> Result<Vec<InventoryAlert>> {
        self.client
            .get_with_query("inventory/alerts/by-severity", &[("severity", severity)])
            .await
    }

    /// Alert counts by category.
    pub async fn statistics(&self) -> Result<AlertStatistics> {
        self.client.get("inventory/alerts/statistics").await
    }
}
