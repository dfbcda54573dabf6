use crate::shared::api_utils::{ApiError, RestResource};
use crate::shared::dual_list::DualList;
use contracts::domain::a001_product::Product;
use contracts::domain::a003_order::{Order, OrderDto};

pub async fn load(
    orders: &RestResource<Order>,
    products: &RestResource<Product>,
    id: Option<&str>,
) -> Result<(Option<Order>, Vec<Product>), ApiError> {
    let order = match id {
        Some(id) => Some(orders.get(id).await?),
        None => None,
    };
    let products = products.all().await?;
    Ok((order, products))
}

pub fn seed(order: Option<Order>, universe: Vec<Product>) -> DualList<Product> {
    let preselected = order.map(|o| o.products).unwrap_or_default();
    DualList::initialize(universe, preselected)
}

/// Body of `POST /orders` / `PATCH /orders/{id}` with the total of the selection.
///
/// Only a new order is required to carry products.
pub fn submission(list: &DualList<Product>, is_edit: bool) -> Result<OrderDto, String> {
    let dto = OrderDto {
        products: list.to_identifier_list(),
        total: list.running_total(),
    };
    if is_edit {
        dto.validate()?;
    } else {
        dto.validate_new()?;
    }
    Ok(dto)
}

pub fn save_failure(is_edit: bool) -> &'static str {
    if is_edit {
        "Erro ao atualizar pedido."
    } else {
        "Erro ao criar pedido."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::ProductId;
    use contracts::domain::a003_order::OrderId;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: ProductId(id.into()),
            name: format!("Produto {id}"),
            price,
            ..Default::default()
        }
    }

    #[test]
    fn test_submission_total_follows_selection() {
        let order = Order {
            id: OrderId("o1".into()),
            date: "2024-11-05T13:45:00.000Z".into(),
            total: 80.0,
            products: vec![product("p1", 50.0), product("p2", 30.0)],
        };
        let universe = vec![product("p1", 50.0), product("p2", 30.0), product("p3", 12.5)];
        let mut list = seed(Some(order), universe);

        let dto = submission(&list, true).unwrap();
        assert_eq!(dto.total, 80.0);

        list.remove(&product("p2", 30.0));
        list.add(&product("p3", 12.5));
        let dto = submission(&list, true).unwrap();
        assert_eq!(dto.products, vec!["p1".to_string(), "p3".to_string()]);
        assert_eq!(dto.total, 62.5);
    }

    #[test]
    fn test_empty_order_is_rejected() {
        let list = seed(None, vec![product("p1", 10.0)]);
        assert_eq!(
            submission(&list, false).unwrap_err(),
            "Selecione ao menos um produto"
        );
    }

    #[test]
    fn test_edit_may_remove_every_product() {
        let order = Order {
            id: OrderId("o1".into()),
            date: "2024-11-05T13:45:00.000Z".into(),
            total: 50.0,
            products: vec![product("p1", 50.0)],
        };
        let mut list = seed(Some(order), vec![product("p1", 50.0)]);
        list.remove(&product("p1", 50.0));

        let dto = submission(&list, true).unwrap();
        assert!(dto.products.is_empty());
        assert_eq!(dto.total, 0.0);
    }
}
