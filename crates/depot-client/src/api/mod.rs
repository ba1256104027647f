//! API endpoint implementations.

mod alerts;
mod auth;
mod customers;
mod inventory;
mod invoices;
mod orders;
mod products;
mod purchases;
mod statistics;
mod suppliers;
mod warehouses;

pub use alerts::AlertsApi;
pub use auth::{AuthApi, QrOutcome, QrPollPolicy};
pub use customers::CustomersApi;
pub use inventory::InventoryApi;
pub use invoices::InvoicesApi;
pub use orders::OrdersApi;
pub use products::ProductsApi;
pub use purchases::PurchasesApi;
pub use statistics::StatisticsApi;
pub use suppliers::SuppliersApi;
pub use warehouses::WarehousesApi;
