//! Suppliers API.

use crate::client::DepotClient;
use crate::error::Result;
use crate::types::{Supplier, SupplierStatus};

/// Suppliers API client.
pub struct SuppliersApi {
    client: DepotClient,
}

impl SuppliersApi {
    pub(crate) fn new(client: DepotClient) -> Self {
        Self { client }
    }

    /// List suppliers, optionally restricted to active ones.
    pub async fn list(&self, active_only: bool) -> Result<Vec<Supplier>> {
        self.client
            .get_with_query("suppliers", &[("activeOnly", active_only)])
            .await
    }

    /// Get a supplier by ID.
    pub async fn get(&self, id: i64) -> Result<Supplier> {
        self.client.get(&format!("suppliers/{}", id)).await
    }

    /// Search suppliers by name.
    pub async fn search(&self, name: &str) -> Result<Vec<Supplier>> {
        self.client
            .get_with_query("suppliers/search", &[("name", name)])
            .await
    }

    /// Create a supplier.
    pub async fn create(&self, supplier: &Supplier) -> Result<Supplier> {
        self.client.post("suppliers", supplier).await
    }

    /// Update a supplier.
    pub async fn update(&self, id: i64, supplier: &Supplier) -> Result<Supplier> {
        self.client.put(&format!("suppliers/{}", id), supplier).await
    }

    /// Delete a supplier.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("suppliers/{}", id)).await
    }

    /// Activate or deactivate a supplier.
    pub async fn toggle_status(&self, id: i64, active: bool) -> Result<Supplier> {
        self.client
            .patch(
                &format!("suppliers/{}/status", id),
                &SupplierStatus { active },
            )
            .await
    }
}
