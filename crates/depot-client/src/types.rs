//! Request and response types for the Depot API.
//!
//! These types mirror the server's wire contract. The auth endpoints wrap
//! their payloads in a `{success, data, message}` envelope; the resource
//! endpoints return entities directly.

use serde::{Deserialize, Serialize};

use depot_session::UserProfile;

use crate::error::{Error, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Wire envelope (auth endpoints)
// ─────────────────────────────────────────────────────────────────────────────

/// The auth API's response envelope. Never exposed to callers; gateway
/// methods unwrap it and hand back the payload alone.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload, mapping a reported failure to an error.
    pub(crate) fn into_data(self) -> Result<T> {
        if !self.success {
            return Err(Error::Rejected(
                self.message.unwrap_or_else(|| "request rejected".to_string()),
            ));
        }
        self.data.ok_or(Error::MissingPayload)
    }

    /// Check the envelope for success, discarding any payload.
    pub(crate) fn into_ack(self) -> Result<()> {
        if !self.success {
            return Err(Error::Rejected(
                self.message.unwrap_or_else(|| "request rejected".to_string()),
            ));
        }
        Ok(())
    }
}

/// Lenient error body: the server reports failures either as the auth
/// envelope or as a bare `{message}` / `{error}` map.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Auth
// ─────────────────────────────────────────────────────────────────────────────

/// External-provider login entry point.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationUrl {
    /// Provider URL the user should be sent to.
    pub auth_url: String,
    /// Opaque state round-tripped through the provider.
    pub state: String,
}

/// Result of a completed login exchange. Persisting it is the caller's job.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginGrant {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Profile of the user that signed in.
    pub user: UserProfile,
}

/// Server verdict on the currently attached token.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TokenValidity {
    /// Whether the token is structurally valid.
    pub valid: bool,
    /// Whether the token has passed its expiry.
    pub expired: bool,
}

/// Wire shape of the profile endpoint: the profile arrives nested.
#[derive(Debug, Deserialize)]
pub(crate) struct ProfilePayload {
    pub user: UserProfile,
}

/// A one-time cross-device login ticket.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrTicket {
    /// Ticket identifier, polled until the ticket resolves.
    pub state: String,
    /// Provider URL to encode into the QR image.
    pub auth_url: String,
    /// Ticket lifetime in seconds.
    pub expires_in: u64,
}

/// Lifecycle of a QR login ticket. `Confirmed` and `Expired` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrLoginStatus {
    /// Not scanned or not yet approved on the other device.
    Pending,
    /// Approved; the poll response carries the session token.
    #[serde(rename = "success")]
    Confirmed,
    /// The server expired or discarded the ticket.
    Expired,
}

/// One poll of a QR login ticket.
#[derive(Debug, Clone, Deserialize)]
pub struct QrPoll {
    pub status: QrLoginStatus,
    /// Present exactly when `status` is [`QrLoginStatus::Confirmed`].
    #[serde(default)]
    pub token: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Products
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stock: Option<i64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Purchases
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    pub product: Product,
    pub quantity: f64,
    pub unit_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<Supplier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_order_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse: Option<String>,
    /// `PENDING` until the goods arrive, then `COMPLETED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Orders
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,
    pub customer: Customer,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub product: Product,
    pub quantity: f64,
    pub unit_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<f64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Customers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Suppliers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_term_days: Option<i32>,
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Body of the supplier status toggle.
#[derive(Debug, Clone, Serialize)]
pub struct SupplierStatus {
    pub active: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Invoices
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    /// `OUTPUT` for sales invoices, `INPUT` for purchase invoices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
}

/// Body of the invoice void operation.
#[derive(Debug, Clone, Serialize)]
pub struct VoidInvoice {
    pub reason: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Inventory
// ─────────────────────────────────────────────────────────────────────────────

/// Opening/closing balance of one product for one reporting period.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodBalance {
    pub product: Product,
    pub period: String,
    #[serde(default)]
    pub beginning_quantity: f64,
    #[serde(default)]
    pub beginning_amount: f64,
    #[serde(default)]
    pub inbound_quantity: f64,
    #[serde(default)]
    pub inbound_amount: f64,
    #[serde(default)]
    pub outbound_quantity: f64,
    #[serde(default)]
    pub outbound_cost_amount: f64,
    #[serde(default)]
    pub ending_quantity: f64,
    #[serde(default)]
    pub ending_amount: f64,
}

/// One inbound or outbound stock movement.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryTransaction {
    #[serde(default)]
    pub id: Option<i64>,
    pub product: Product,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub transaction_date: Option<String>,
    pub quantity: f64,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub reference_id: Option<String>,
    #[serde(default)]
    pub warehouse: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Statistics
// ─────────────────────────────────────────────────────────────────────────────

/// Aggregates shown on the dashboard view.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_products: u64,
    #[serde(default)]
    pub total_customers: u64,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub total_purchases: u64,
    #[serde(default)]
    pub period_orders: u64,
    #[serde(default)]
    pub period_purchases: u64,
    #[serde(default)]
    pub period_invoices: u64,
    #[serde(default)]
    pub sales_revenue: f64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Warehouses
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse: Option<Warehouse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rack_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    #[serde(default)]
    pub occupied: i32,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Alerts
// ─────────────────────────────────────────────────────────────────────────────

/// A stock-level warning derived server-side from product thresholds.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryAlert {
    /// e.g. `LOW_STOCK`, `OUT_OF_STOCK`, `EXPIRING_SOON`.
    pub alert_type: String,
    pub severity: String,
    pub product: Product,
    pub message: String,
}

/// Alert counts by category.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertStatistics {
    #[serde(default)]
    pub low_stock: u32,
    #[serde(default)]
    pub out_of_stock: u32,
    #[serde(default)]
    pub over_stock: u32,
    #[serde(default)]
    pub expiring_soon: u32,
    #[serde(default)]
    pub expired: u32,
    #[serde(default)]
    pub slow_moving: u32,
    #[serde(default)]
    pub total: u32,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_unwraps_payload() {
        let envelope: Envelope<QrPoll> = serde_json::from_str(
            r#"{"success":true,"data":{"status":"success","token":"t-1"},"message":"ok"}"#,
        )
        .unwrap();
        let poll = envelope.into_data().unwrap();
        assert_eq!(poll.status, QrLoginStatus::Confirmed);
        assert_eq!(poll.token.as_deref(), Some("t-1"));
    }

    #[test]
    fn envelope_failure_maps_to_rejection() {
        let envelope: Envelope<QrPoll> =
            serde_json::from_str(r#"{"success":false,"message":"no"}"#).unwrap();
        assert!(matches!(envelope.into_data(), Err(Error::Rejected(_))));
    }

    #[test]
    fn qr_statuses_decode_from_wire_names() {
        let pending: QrPoll = serde_json::from_str(r#"{"status":"pending"}"#).unwrap();
        assert_eq!(pending.status, QrLoginStatus::Pending);
        assert_eq!(pending.token, None);

        let expired: QrPoll = serde_json::from_str(r#"{"status":"expired"}"#).unwrap();
        assert_eq!(expired.status, QrLoginStatus::Expired);
    }
}
