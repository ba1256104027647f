//! Orders API.

use crate::client::DepotClient;
use crate::error::Result;
use crate::types::Order;

/// Orders API client.
pub struct OrdersApi {
    client: DepotClient,
}

impl OrdersApi {
    pub(crate) fn new(client: DepotClient) -> Self {
        Self { client }
    }

    /// List all orders.
    pub async fn list(&self) -> Result<Vec<Order>> {
        self.client.get("orders").await
    }

    /// Get an order by ID.
    pub async fn get(&self, id: &str) -> Result<Order> {
        self.client.get(&format!("orders/{}", id)).await
    }

    /// Create a new order.
    pub async fn create(&self, order: &Order) -> Result<Order> {
        self.client.post("orders", order).await
    }

    /// Update an order.
    pub async fn update(&self, id: &str, order: &Order) -> Result<Order> {
        self.client.put(&format!("orders/{}", id), order).await
    }

    /// Move an order to a new status.
    pub async fn update_status(&self, id: &str, status: &str) -> Result<Order> {
        self.client
            .patch_with_query(&format!("orders/{}/status", id), &[("status", status)])
            .await
    }

    /// Delete an order.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("orders/{}", id)).await
    }
}
