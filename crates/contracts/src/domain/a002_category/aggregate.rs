use serde::{Deserialize, Serialize};

use crate::domain::a001_product::Product;
use crate::domain::common::AggregateId;

/// Category identifier as issued by the API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl AggregateId for CategoryId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Category as returned by `GET /categories` and `GET /categories/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: CategoryId,

    pub name: String,

    /// Linked products, populated by `GET /categories/{id}`
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Category {
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

/// Body of `POST /categories` and `PATCH /categories/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CategoryDto {
    pub name: String,
    /// Selected product ids in the order they were picked
    pub products: Vec<String>,
}

impl CategoryDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Nome é obrigatório".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_with_populated_products() {
        let json = r#"{"_id":"c1","name":"Cozinha","products":[{"_id":"p1","name":"Caneca"},{"_id":"p2","name":"Prato"}]}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id.as_str(), "c1");
        assert_eq!(category.product_count(), 2);
        assert_eq!(category.products[1].name, "Prato");
    }

    #[test]
    fn test_dto_serializes_product_ids() {
        let dto = CategoryDto {
            name: "Cozinha".into(),
            products: vec!["p2".into(), "p1".into()],
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value, serde_json::json!({"name": "Cozinha", "products": ["p2", "p1"]}));
    }

    #[test]
    fn test_dto_requires_name() {
        let dto = CategoryDto {
            name: " ".into(),
            products: Vec::new(),
        };
        assert!(dto.validate().is_err());
    }
}
