//! Warehouses API.

use crate::client::DepotClient;
use crate::error::Result;
use crate::types::{Warehouse, WarehouseLocation};

/// Warehouses API client.
pub struct WarehousesApi {
    client: DepotClient,
}

impl WarehousesApi {
    pub(crate) fn new(client: DepotClient) -> Self {
        Self { client }
    }

    /// List all warehouses.
    pub async fn list(&self) -> Result<Vec<Warehouse>> {
        self.client.get("warehouses").await
    }

    /// Get a warehouse by ID.
    pub async fn get(&self, id: i64) -> Result<Warehouse> {
        self.client.get(&format!("warehouses/{}", id)).await
    }

    /// Create a warehouse.
    pub async fn create(&self, warehouse: &Warehouse) -> Result<Warehouse> {
        self.client.post("warehouses", warehouse).await
    }

    /// Update a warehouse.
    pub async fn update(&self, id: i64, warehouse: &Warehouse) -> Result<Warehouse> {
        self.client.put(&format!("warehouses/{}", id), warehouse).await
    }

    /// Delete a warehouse.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("warehouses/{}", id)).await
    }

    /// Flip a warehouse between enabled and disabled.
    pub async fn toggle_status(&self, id: i64) -> Result<()> {
        self.client
            .post_empty::<serde_json::Value>(&format!("warehouses/{}/toggle-status", id))
            .await?;
        Ok(())
    }

    /// List the storage locations of a warehouse.
    pub async fn locations(&self, id: i64) -> Result<Vec<WarehouseLocation>> {
        self.client
            .get(&format!("warehouses/{}/locations", id))
            .await
    }

    /// Create a storage location.
    pub async fn create_location(&self, location: &WarehouseLocation) -> Result<WarehouseLocation> {
        self.client.post("warehouses/locations", location).await
    }

    /// Update a storage location.
    pub async fn update_location(
        &self,
        id: i64,
        location: &WarehouseLocation,
    ) -> Result<WarehouseLocation> {
        self.client
            .put(&format!("warehouses/locations/{}", id), location)
            .await
    }

    /// Delete a storage location.
    pub async fn delete_location(&self, id: i64) -> Result<()> {
        self.client
            .delete(&format!("warehouses/locations/{}", id))
            .await
    }
}
