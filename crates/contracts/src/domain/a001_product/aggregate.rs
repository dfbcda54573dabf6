use serde::{Deserialize, Serialize};

use crate::domain::a002_category::Category;
use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Product identifier as issued by the API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl AggregateId for ProductId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Product as returned by `GET /products` and `GET /products/{id}`.
///
/// Nested copies (inside a category or an order) may carry only `_id` and
/// `name`, so every other field falls back to its default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    /// Number of categories the product is linked to
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

// ============================================================================
// Form
// ============================================================================

/// Product editor state submitted as `multipart/form-data`.
///
/// `price` keeps the raw text typed by the user; it is parsed on validation.
/// The optional image file is attached by the frontend, it has no JSON form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    /// Selected category ids in the order they were picked
    pub categories: Vec<String>,
}

impl ProductForm {
    /// Seed the form from an existing product (edit mode)
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: format!("{:.2}", product.price),
            categories: product
                .categories
                .iter()
                .map(|c| c.id.as_string())
                .collect(),
        }
    }

    /// Validate required fields
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Nome é obrigatório".into());
        }
        if self.description.trim().is_empty() {
            return Err("Descrição é obrigatória".into());
        }
        parse_price(&self.price)?;
        Ok(())
    }

    /// Text fields of the multipart body in submission order.
    ///
    /// `categories` is sent as a JSON array string, which is what the API
    /// expects for multipart uploads.
    pub fn multipart_fields(&self) -> Result<Vec<(&'static str, String)>, String> {
        self.validate()?;
        let price = parse_price(&self.price)?;
        let categories = serde_json::to_string(&self.categories).map_err(|e| format!("{e}"))?;

        Ok(vec![
            ("name", self.name.trim().to_string()),
            ("description", self.description.trim().to_string()),
            ("price", price.to_string()),
            ("categories", categories),
        ])
    }
}

/// Parse a price typed in the form. Accepts `12.5` and `12,50`.
pub fn parse_price(raw: &str) -> Result<f64, String> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return Err("Preço é obrigatório".into());
    }
    let value: f64 = normalized
        .parse()
        .map_err(|_| format!("Preço inválido: {}", raw.trim()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("Preço inválido: {}", raw.trim()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProductForm {
        ProductForm {
            name: " Caneca ".into(),
            description: "Cerâmica 300ml".into(),
            price: "29,90".into(),
            categories: vec!["c2".into(), "c1".into()],
        }
    }

    #[test]
    fn test_product_deserializes_from_api_shape() {
        let json = r#"{
            "_id": "p1",
            "name": "Caneca",
            "description": "Cerâmica",
            "price": 29.9,
            "categories": [{"_id": "c1", "name": "Cozinha"}],
            "imageUrl": "https://cdn.example/p1.png"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "p1");
        assert_eq!(product.category_count(), 1);
        assert_eq!(product.categories[0].name, "Cozinha");
        assert_eq!(product.image_url.as_deref(), Some("https://cdn.example/p1.png"));
    }

    #[test]
    fn test_nested_product_only_needs_id_and_name() {
        let product: Product = serde_json::from_str(r#"{"_id":"p9","name":"Prato"}"#).unwrap();
        assert_eq!(product.price, 0.0);
        assert!(product.categories.is_empty());
        assert!(product.image_url.is_none());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12.5").unwrap(), 12.5);
        assert_eq!(parse_price(" 29,90 ").unwrap(), 29.9);
        assert!(parse_price("").is_err());
        assert!(parse_price("abc").is_err());
        assert!(parse_price("-1").is_err());
    }

    #[test]
    fn test_validate_required_fields() {
        assert!(form().validate().is_ok());

        let mut f = form();
        f.name = "  ".into();
        assert_eq!(f.validate().unwrap_err(), "Nome é obrigatório");

        let mut f = form();
        f.description.clear();
        assert_eq!(f.validate().unwrap_err(), "Descrição é obrigatória");

        let mut f = form();
        f.price.clear();
        assert_eq!(f.validate().unwrap_err(), "Preço é obrigatório");
    }

    #[test]
    fn test_multipart_fields_keep_selection_order() {
        let fields = form().multipart_fields().unwrap();
        assert_eq!(fields[0], ("name", "Caneca".to_string()));
        assert_eq!(fields[2], ("price", "29.9".to_string()));
        assert_eq!(fields[3], ("categories", r#"["c2","c1"]"#.to_string()));
    }

    #[test]
    fn test_from_product_collects_category_ids() {
        let product = Product {
            id: ProductId("p1".into()),
            name: "Caneca".into(),
            description: "Cerâmica".into(),
            price: 10.0,
            categories: vec![
                Category {
                    id: crate::domain::a002_category::CategoryId("c1".into()),
                    name: "Cozinha".into(),
                    products: Vec::new(),
                },
            ],
            image_url: None,
        };
        let form = ProductForm::from_product(&product);
        assert_eq!(form.price, "10.00");
        assert_eq!(form.categories, vec!["c1".to_string()]);
    }
}
