use crate::shared::api_utils::{ApiError, RestResource};
use crate::shared::dual_list::DualList;
use contracts::domain::a001_product::{Product, ProductForm};
use contracts::domain::a002_category::Category;

/// Everything the editor needs before it becomes interactive
#[derive(Debug, Clone, Default)]
pub struct EditorSeed {
    pub product: Option<Product>,
    pub categories: Vec<Category>,
}

impl EditorSeed {
    /// Form fields, current image and category partition
    pub fn into_parts(self) -> (ProductForm, Option<String>, DualList<Category>) {
        match self.product {
            Some(product) => {
                let form = ProductForm::from_product(&product);
                let list = DualList::initialize(self.categories, product.categories);
                (form, product.image_url, list)
            }
            None => (
                ProductForm::default(),
                None,
                DualList::initialize(self.categories, Vec::new()),
            ),
        }
    }
}

/// Load the product (edit mode) and the full category list
pub async fn load(
    products: &RestResource<Product>,
    categories: &RestResource<Category>,
    id: Option<&str>,
) -> Result<EditorSeed, ApiError> {
    let product = match id {
        Some(id) => Some(products.get(id).await?),
        None => None,
    };
    let categories = categories.all().await?;
    Ok(EditorSeed { product, categories })
}

/// Multipart fields to submit, categories in the order they were picked
pub fn submission(
    form: &ProductForm,
    list: &DualList<Category>,
) -> Result<Vec<(&'static str, String)>, String> {
    let mut form = form.clone();
    form.categories = list.to_identifier_list();
    form.multipart_fields()
}

pub fn save_failure(is_edit: bool) -> &'static str {
    if is_edit {
        "Erro ao atualizar produto"
    } else {
        "Erro ao criar produto"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::ProductId;
    use contracts::domain::a002_category::CategoryId;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: CategoryId(id.into()),
            name: name.into(),
            products: Vec::new(),
        }
    }

    fn universe() -> Vec<Category> {
        vec![
            category("c1", "Cozinha"),
            category("c2", "Sala"),
            category("c3", "Jardim"),
        ]
    }

    #[test]
    fn test_create_mode_offers_every_category() {
        let seed = EditorSeed {
            product: None,
            categories: universe(),
        };
        let (form, image, list) = seed.into_parts();
        assert_eq!(form, ProductForm::default());
        assert!(image.is_none());
        assert_eq!(list.available().len(), 3);
        assert!(list.selected().is_empty());
    }

    #[test]
    fn test_edit_mode_preselects_product_categories() {
        let product = Product {
            id: ProductId("p1".into()),
            name: "Caneca".into(),
            description: "Cerâmica".into(),
            price: 29.9,
            categories: vec![category("c2", "Sala")],
            image_url: Some("https://cdn.example/p1.png".into()),
        };
        let seed = EditorSeed {
            product: Some(product),
            categories: universe(),
        };
        let (form, image, list) = seed.into_parts();
        assert_eq!(form.name, "Caneca");
        assert_eq!(form.price, "29.90");
        assert_eq!(image.as_deref(), Some("https://cdn.example/p1.png"));
        assert_eq!(list.to_identifier_list(), vec!["c2".to_string()]);
        let available: Vec<&str> = list.available().iter().map(|c| c.id.0.as_str()).collect();
        assert_eq!(available, vec!["c1", "c3"]);
    }

    #[test]
    fn test_submission_uses_selection_order() {
        let mut list = DualList::initialize(universe(), Vec::new());
        let all = universe();
        list.add(&all[2]);
        list.add(&all[0]);

        let form = ProductForm {
            name: "Vaso".into(),
            description: "Barro".into(),
            price: "15".into(),
            categories: vec!["stale".into()],
        };
        let fields = submission(&form, &list).unwrap();
        let categories = fields.iter().find(|(k, _)| *k == "categories").unwrap();
        assert_eq!(categories.1, r#"["c3","c1"]"#);
    }

    #[test]
    fn test_submission_rejects_invalid_form() {
        let list = DualList::initialize(universe(), Vec::new());
        let form = ProductForm {
            name: "Vaso".into(),
            description: "Barro".into(),
            price: "quinze".into(),
            categories: Vec::new(),
        };
        assert!(submission(&form, &list).is_err());
    }
}
