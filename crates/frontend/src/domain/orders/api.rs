//! Order-feed plumbing shared by the orders and tracking tabs.

use crate::shared::api::{self, endpoints};
use contracts::domain::order::{OrderUnit, OrdersResponse};
use std::collections::HashSet;

pub async fn fetch_pending_orders() -> Result<Vec<OrderUnit>, String> {
    let resp: OrdersResponse = api::get_json(&endpoints::pending_orders()).await?;
    Ok(resp.orders)
}

/// Distinct orders in first-seen feed order, as (order id, investor name).
/// The feed carries one row per sub-unit, so an order with both units
/// pending appears twice.
pub fn distinct_orders(units: &[OrderUnit]) -> Vec<(String, String)> {
    let mut seen = HashSet::new();
    units
        .iter()
        .filter(|unit| seen.insert(unit.order_id.clone()))
        .map(|unit| (unit.order_id.clone(), unit.investor_name().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::order::Investor;
    use contracts::enums::OrderStatus;

    fn unit(unit_id: &str, order_id: &str, investor: &str) -> OrderUnit {
        OrderUnit {
            unit_id: unit_id.to_string(),
            order_id: order_id.to_string(),
            buyer_id: String::new(),
            breed_id: String::new(),
            status: OrderStatus::Paid,
            num_units: 1,
            transaction: None,
            investor: Some(Investor {
                name: investor.to_string(),
                ..Default::default()
            }),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_distinct_orders_collapses_units() {
        let feed = vec![
            unit("U1", "ORD-1", "Asha Patel"),
            unit("U2", "ORD-1", "Asha Patel"),
            unit("U3", "ORD-2", "Ravi Kumar"),
        ];
        assert_eq!(
            distinct_orders(&feed),
            vec![
                ("ORD-1".to_string(), "Asha Patel".to_string()),
                ("ORD-2".to_string(), "Ravi Kumar".to_string()),
            ]
        );
    }

    #[test]
    fn test_distinct_orders_keeps_feed_order() {
        let feed = vec![
            unit("U1", "ORD-2", "Ravi Kumar"),
            unit("U2", "ORD-1", "Asha Patel"),
            unit("U3", "ORD-2", "Ravi Kumar"),
        ];
        let ids: Vec<String> = distinct_orders(&feed).into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["ORD-2".to_string(), "ORD-1".to_string()]);
    }
}
