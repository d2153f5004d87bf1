use crate::enums::OrderStatus;
use serde::{Deserialize, Serialize};

// ============================================================================
// Order unit
// ============================================================================

/// One purchasable unit of an order, as returned by the pending-orders feed.
///
/// Read-mostly: the dashboard never mutates these locally, it triggers
/// approve/reject on the API and re-fetches the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUnit {
    #[serde(rename = "unitId")]
    pub unit_id: String,

    #[serde(rename = "orderId", default)]
    pub order_id: String,

    #[serde(rename = "buyerId", default)]
    pub buyer_id: String,

    #[serde(rename = "breedId", default)]
    pub breed_id: String,

    pub status: OrderStatus,

    #[serde(rename = "numUnits", default = "default_num_units")]
    pub num_units: u32,

    #[serde(default)]
    pub transaction: Option<Transaction>,

    #[serde(default)]
    pub investor: Option<Investor>,

    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

fn default_num_units() -> u32 {
    1
}

impl OrderUnit {
    /// Transaction amount with non-numeric values counted as zero.
    pub fn amount(&self) -> f64 {
        self.transaction.as_ref().map(|t| t.amount()).unwrap_or(0.0)
    }

    pub fn investor_name(&self) -> &str {
        self.investor.as_ref().map(|i| i.name.as_str()).unwrap_or("")
    }

    pub fn payment_type(&self) -> Option<&str> {
        self.transaction
            .as_ref()
            .and_then(|t| t.payment_type.as_deref())
    }
}

// ============================================================================
// Transaction
// ============================================================================

/// Payment metadata associated one-to-one with an order.
///
/// `amount` is kept as raw JSON: the API has been observed to send numbers,
/// numeric strings and occasionally garbage. [`Transaction::amount`] is the
/// single normalization point.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Transaction {
    #[serde(default)]
    pub amount: serde_json::Value,

    #[serde(rename = "paymentType", default)]
    pub payment_type: Option<String>,

    #[serde(rename = "proofUrl", default)]
    pub proof_url: Option<String>,

    #[serde(rename = "transactionId", default)]
    pub transaction_id: Option<String>,
}

impl Transaction {
    pub fn amount(&self) -> f64 {
        match &self.amount {
            serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
            serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }
}

// ============================================================================
// Investor
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Investor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub email: String,
}

// ============================================================================
// Envelopes
// ============================================================================

/// Pending-orders feed envelope. Missing or malformed `orders` decodes as
/// an empty list rather than failing the whole response.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrdersResponse {
    #[serde(default)]
    pub orders: Vec<OrderUnit>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UnitActionResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_amount() {
        let numeric: Transaction = serde_json::from_str(r#"{"amount": 1500}"#).unwrap();
        assert_eq!(numeric.amount(), 1500.0);

        let stringy: Transaction = serde_json::from_str(r#"{"amount": "2000"}"#).unwrap();
        assert_eq!(stringy.amount(), 2000.0);

        let garbage: Transaction = serde_json::from_str(r#"{"amount": "n/a"}"#).unwrap();
        assert_eq!(garbage.amount(), 0.0);

        let missing: Transaction = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(missing.amount(), 0.0);
    }

    #[test]
    fn test_envelope_defaults_to_empty() {
        let empty: OrdersResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(empty.orders.is_empty());
    }

    #[test]
    fn test_unknown_status_does_not_fail_envelope() {
        let resp: OrdersResponse = serde_json::from_str(
            r#"{"orders": [
                {"unitId": "U1", "status": "PAID"},
                {"unitId": "U2", "status": "SHIPPED"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(resp.orders.len(), 2);
        assert_eq!(resp.orders[0].status, OrderStatus::Paid);
        assert_eq!(
            resp.orders[1].status,
            OrderStatus::Other("SHIPPED".to_string())
        );
    }

    #[test]
    fn test_minimal_unit_decodes() {
        let unit: OrderUnit = serde_json::from_str(
            r#"{"unitId": "U1", "status": "PENDING_ADMIN_VERIFICATION"}"#,
        )
        .unwrap();
        assert_eq!(unit.unit_id, "U1");
        assert_eq!(unit.num_units, 1);
        assert_eq!(unit.amount(), 0.0);
        assert_eq!(unit.investor_name(), "");
        assert!(unit.payment_type().is_none());
    }
}
