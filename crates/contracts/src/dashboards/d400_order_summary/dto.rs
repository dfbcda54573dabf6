use serde::{Deserialize, Serialize};

use crate::domain::a003_order::Order;

/// One bar of `GET /dashboard/dailysales`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySales {
    /// Day as sent by the API, usually `YYYY-MM-DD`
    pub date: String,
    /// Sum of the orders placed that day
    pub total: f64,
}

/// Values shown on the dashboard cards
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderMetrics {
    pub total_orders: usize,
    pub total_value: f64,
    pub average_value: f64,
}

impl OrderMetrics {
    /// Derive the card values from one set of orders.
    ///
    /// Count, value and average all come from `orders`. Money is summed in
    /// cents.
    pub fn from_orders(orders: &[Order]) -> Self {
        let total_orders = orders.len();
        let cents: i64 = orders
            .iter()
            .map(|o| (o.total * 100.0).round() as i64)
            .sum();
        let total_value = cents as f64 / 100.0;
        let average_value = if total_orders == 0 {
            0.0
        } else {
            ((total_value / total_orders as f64) * 100.0).round() / 100.0
        };

        Self {
            total_orders,
            total_value,
            average_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, total: f64) -> DailySales {
        DailySales {
            date: date.to_string(),
            total,
        }
    }

    fn order(total: f64) -> Order {
        Order {
            total,
            ..Default::default()
        }
    }

    #[test]
    fn test_metrics_from_orders() {
        let orders = vec![order(6000.0), order(4000.0), order(0.0)];
        let metrics = OrderMetrics::from_orders(&orders);
        assert_eq!(metrics.total_orders, 3);
        assert_eq!(metrics.total_value, 10000.0);
        assert_eq!(metrics.average_value, 3333.33);
    }

    #[test]
    fn test_metrics_without_orders() {
        let metrics = OrderMetrics::from_orders(&[]);
        assert_eq!(metrics, OrderMetrics::default());
    }

    #[test]
    fn test_cents_summation() {
        let orders = vec![order(0.1), order(0.2)];
        let metrics = OrderMetrics::from_orders(&orders);
        assert_eq!(metrics.total_value, 0.3);
        assert_eq!(metrics.average_value, 0.15);
    }

    #[test]
    fn test_daily_sales_json() {
        let parsed: Vec<DailySales> =
            serde_json::from_str(r#"[{"date":"2024-11-01","total":150.5}]"#).unwrap();
        assert_eq!(parsed, vec![day("2024-11-01", 150.5)]);
    }
}
