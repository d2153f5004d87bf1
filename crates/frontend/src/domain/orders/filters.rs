//! Filtering and summary aggregation over the pending-orders feed.

use crate::shared::list_utils::Searchable;
use contracts::domain::order::OrderUnit;
use contracts::enums::{OrderStatus, PaymentMethod, StatusClass};

impl Searchable for OrderUnit {
    fn searchable_fields(&self) -> Vec<String> {
        vec![
            self.order_id.clone(),
            self.buyer_id.clone(),
            self.breed_id.clone(),
            self.investor_name().to_string(),
        ]
    }
}

/// Payment-method criterion; `All` is the "All Payments" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentFilter {
    #[default]
    All,
    Method(PaymentMethod),
}

/// Status criterion; `All` is the "All Status" sentinel. Matching is exact
/// on the wire status, not on its [`StatusClass`], so the two spellings of
/// a terminal state remain individually selectable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Status(OrderStatus),
}

/// The three independent criteria, combined with logical AND.
#[derive(Debug, Clone, Default)]
pub struct OrderFilters {
    pub query: String,
    pub payment: PaymentFilter,
    pub status: StatusFilter,
}

impl OrderFilters {
    pub fn matches(&self, order: &OrderUnit) -> bool {
        if !order.matches_filter(&self.query) {
            return false;
        }

        if let PaymentFilter::Method(method) = self.payment {
            if order.payment_type() != Some(method.code()) {
                return false;
            }
        }

        if let StatusFilter::Status(status) = &self.status {
            if order.status != *status {
                return false;
            }
        }

        true
    }

    pub fn apply(&self, orders: &[OrderUnit]) -> Vec<OrderUnit> {
        orders
            .iter()
            .filter(|order| self.matches(order))
            .cloned()
            .collect()
    }
}

/// Aggregate counters over the *unfiltered* order list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderSummary {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub total: usize,
    pub total_units: u32,
    pub total_amount: f64,
}

impl OrderSummary {
    pub fn from_orders(orders: &[OrderUnit]) -> Self {
        let mut summary = OrderSummary::default();
        for order in orders {
            match order.status.class() {
                StatusClass::Pending => summary.pending += 1,
                StatusClass::Approved => summary.approved += 1,
                StatusClass::Rejected => summary.rejected += 1,
                // unknown spellings count toward the totals only
                StatusClass::Unknown => {}
            }
            summary.total += 1;
            summary.total_units += order.num_units;
            summary.total_amount += order.amount();
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::order::{Investor, Transaction};

    fn unit(
        id: &str,
        status: OrderStatus,
        num_units: u32,
        amount: serde_json::Value,
        payment_type: &str,
        investor: &str,
    ) -> OrderUnit {
        OrderUnit {
            unit_id: id.to_string(),
            order_id: format!("ORD-{}", id),
            buyer_id: format!("BUY-{}", id),
            breed_id: "murrah".to_string(),
            status,
            num_units,
            transaction: Some(Transaction {
                amount,
                payment_type: Some(payment_type.to_string()),
                ..Default::default()
            }),
            investor: Some(Investor {
                name: investor.to_string(),
                ..Default::default()
            }),
            created_at: None,
            updated_at: None,
        }
    }

    fn sample() -> Vec<OrderUnit> {
        vec![
            unit(
                "U1",
                OrderStatus::PendingPayment,
                2,
                serde_json::json!(1000),
                "UPI",
                "Asha Patel",
            ),
            unit(
                "U2",
                OrderStatus::Paid,
                1,
                serde_json::json!(2000),
                "BANK_TRANSFER",
                "Ravi Kumar",
            ),
            unit(
                "U3",
                OrderStatus::Paid,
                2,
                serde_json::json!("1500"),
                "UPI",
                "Meera Shah",
            ),
            unit(
                "U4",
                OrderStatus::Rejected,
                1,
                serde_json::json!("n/a"),
                "CASH",
                "Vikram Singh",
            ),
        ]
    }

    #[test]
    fn test_summary_counts_by_class() {
        let summary = OrderSummary::from_orders(&sample());
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.approved, 2);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.total_units, 6);
        // non-numeric amount counts as zero
        assert_eq!(summary.total_amount, 4500.0);
    }

    #[test]
    fn test_summary_mixes_both_spellings() {
        let orders = vec![
            unit("U1", OrderStatus::Paid, 1, serde_json::json!(0), "UPI", ""),
            unit("U2", OrderStatus::Approved, 1, serde_json::json!(0), "UPI", ""),
            unit("U3", OrderStatus::RejectedLegacy, 1, serde_json::json!(0), "UPI", ""),
        ];
        let summary = OrderSummary::from_orders(&orders);
        assert_eq!(summary.approved, 2);
        assert_eq!(summary.rejected, 1);
    }

    #[test]
    fn test_unknown_status_counts_toward_totals_only() {
        let orders = vec![
            unit("U1", OrderStatus::Paid, 1, serde_json::json!(1000), "UPI", ""),
            unit(
                "U2",
                OrderStatus::Other("SHIPPED".to_string()),
                2,
                serde_json::json!(500),
                "UPI",
                "",
            ),
        ];
        let summary = OrderSummary::from_orders(&orders);
        assert_eq!(summary.pending, 0);
        assert_eq!(summary.approved, 1);
        assert_eq!(summary.rejected, 0);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.total_units, 3);
        assert_eq!(summary.total_amount, 1500.0);
    }

    #[test]
    fn test_status_filter_is_exact() {
        let orders = vec![
            unit("U1", OrderStatus::PendingAdminVerification, 1, serde_json::json!(1000), "UPI", ""),
            unit("U2", OrderStatus::Paid, 1, serde_json::json!(2000), "UPI", ""),
        ];
        let filters = OrderFilters {
            status: StatusFilter::Status(OrderStatus::Paid),
            ..Default::default()
        };
        let filtered = filters.apply(&orders);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].unit_id, "U2");
    }

    #[test]
    fn test_sentinels_bypass() {
        let orders = sample();
        let filters = OrderFilters::default();
        assert_eq!(filters.apply(&orders).len(), orders.len());
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let filters = OrderFilters {
            query: "U".to_string(), // matches every order id
            payment: PaymentFilter::Method(PaymentMethod::Upi),
            status: StatusFilter::Status(OrderStatus::Paid),
        };
        let filtered = filters.apply(&sample());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].unit_id, "U3");
    }

    #[test]
    fn test_query_matches_investor_name() {
        let filters = OrderFilters {
            query: "meera".to_string(),
            ..Default::default()
        };
        let filtered = filters.apply(&sample());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].unit_id, "U3");
    }

    #[test]
    fn test_total_amount_for_pending_plus_paid() {
        let orders = vec![
            unit("U1", OrderStatus::PendingAdminVerification, 1, serde_json::json!(1000), "UPI", ""),
            unit("U2", OrderStatus::Paid, 1, serde_json::json!(2000), "UPI", ""),
        ];
        let summary = OrderSummary::from_orders(&orders);
        assert_eq!(summary.total_amount, 3000.0);
        assert_eq!(summary.pending, 1);
    }
}
