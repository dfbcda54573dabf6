use crate::shared::api_utils::{ApiError, RestResource};
use crate::shared::dual_list::DualList;
use contracts::domain::a001_product::Product;
use contracts::domain::a002_category::{Category, CategoryDto};

/// Category being edited (None when creating) and every product
pub async fn load(
    categories: &RestResource<Category>,
    products: &RestResource<Product>,
    id: Option<&str>,
) -> Result<(Option<Category>, Vec<Product>), ApiError> {
    let category = match id {
        Some(id) => Some(categories.get(id).await?),
        None => None,
    };
    let products = products.all().await?;
    Ok((category, products))
}

/// Name field and product partition of a loaded category
pub fn seed(category: Option<Category>, universe: Vec<Product>) -> (String, DualList<Product>) {
    match category {
        Some(category) => (category.name, DualList::initialize(universe, category.products)),
        None => (String::new(), DualList::initialize(universe, Vec::new())),
    }
}

pub fn submission(name: &str, list: &DualList<Product>) -> Result<CategoryDto, String> {
    let dto = CategoryDto {
        name: name.trim().to_string(),
        products: list.to_identifier_list(),
    };
    dto.validate()?;
    Ok(dto)
}

pub fn save_failure(is_edit: bool) -> &'static str {
    if is_edit {
        "Erro ao atualizar a categoria"
    } else {
        "Erro ao criar a categoria"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::ProductId;
    use contracts::domain::a002_category::CategoryId;

    fn product(id: &str) -> Product {
        Product {
            id: ProductId(id.into()),
            name: format!("Produto {id}"),
            ..Default::default()
        }
    }

    #[test]
    fn test_seed_edit_mode() {
        let category = Category {
            id: CategoryId("c1".into()),
            name: "Cozinha".into(),
            products: vec![product("p2")],
        };
        let (name, list) = seed(Some(category), vec![product("p1"), product("p2"), product("p3")]);
        assert_eq!(name, "Cozinha");
        assert_eq!(list.to_identifier_list(), vec!["p2".to_string()]);
        assert_eq!(list.available().len(), 2);
    }

    #[test]
    fn test_submission_serializes_selected_ids() {
        let (_, mut list) = seed(None, vec![product("p1"), product("p2")]);
        list.add(&product("p2"));
        let dto = submission("  Sala ", &list).unwrap();
        assert_eq!(dto.name, "Sala");
        assert_eq!(dto.products, vec!["p2".to_string()]);
    }

    #[test]
    fn test_submission_requires_name() {
        let (_, list) = seed(None, Vec::new());
        assert!(submission("", &list).is_err());
    }
}
