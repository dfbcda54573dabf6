use serde::{Deserialize, Serialize};

use crate::domain::a001_product::Product;
use crate::domain::common::AggregateId;

/// Order identifier as issued by the API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl AggregateId for OrderId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Order as returned by `GET /orders` and `GET /orders/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: OrderId,

    /// Creation timestamp, RFC 3339 when set by the API
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub total: f64,

    #[serde(default)]
    pub products: Vec<Product>,
}

impl Order {
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

/// Body of `POST /orders` and `PATCH /orders/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderDto {
    /// Selected product ids in the order they were picked
    pub products: Vec<String>,
    /// Sum of the selected product prices
    pub total: f64,
}

impl OrderDto {
    /// Checks shared by create and update. An existing order may be emptied.
    pub fn validate(&self) -> Result<(), String> {
        if !self.total.is_finite() || self.total < 0.0 {
            return Err("Total inválido".into());
        }
        Ok(())
    }

    /// A new order needs at least one product
    pub fn validate_new(&self) -> Result<(), String> {
        if self.products.is_empty() {
            return Err("Selecione ao menos um produto".into());
        }
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_deserializes() {
        let json = r#"{"_id":"o1","date":"2024-11-05T13:45:00.000Z","total":80.0,"products":[{"_id":"p1","name":"Caneca","price":50.0},{"_id":"p2","name":"Prato","price":30.0}]}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id.as_str(), "o1");
        assert_eq!(order.product_count(), 2);
        assert_eq!(order.products[0].price, 50.0);
    }

    #[test]
    fn test_dto_shape() {
        let dto = OrderDto {
            products: vec!["p1".into()],
            total: 50.0,
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            serde_json::json!({"products": ["p1"], "total": 50.0})
        );
    }

    #[test]
    fn test_new_order_requires_products() {
        let empty = OrderDto::default();
        assert!(empty.validate_new().is_err());

        let ok = OrderDto {
            products: vec!["p1".into()],
            total: 12.0,
        };
        assert!(ok.validate_new().is_ok());
    }

    #[test]
    fn test_existing_order_can_be_emptied() {
        let empty = OrderDto {
            products: vec![],
            total: 0.0,
        };
        assert!(empty.validate().is_ok());
    }

    #[test]
    fn test_negative_total_rejected() {
        let dto = OrderDto {
            products: vec!["p1".into()],
            total: -1.0,
        };
        assert!(dto.validate().is_err());
        assert!(dto.validate_new().is_err());
    }
}
