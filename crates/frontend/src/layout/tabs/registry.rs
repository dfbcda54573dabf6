//! Tab content registry - the only mapping from `TabKey` to a View

use super::TabKey;
use crate::dashboards::d400_order_summary::ui::OrderSummaryDashboard;
use crate::domain::a001_product::ui::details::ProductDetails;
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_category::ui::details::CategoryDetails;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_order::ui::details::OrderDetails;
use crate::domain::a003_order::ui::list::OrderList;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Renders the content of a tab.
///
/// Editors receive `on_close`, which closes their tab and re-opens the list.
pub fn render_tab_content(key: TabKey, tabs_store: AppGlobalContext) -> AnyView {
    log::debug!("mounting tab '{}'", key.as_key());
    let on_close = {
        let key = key.clone();
        Callback::new(move |_| tabs_store.close_editor(&key))
    };

    match key {
        TabKey::Dashboard => view! { <OrderSummaryDashboard /> }.into_any(),

        // a001: Products
        TabKey::ProductList => view! { <ProductList /> }.into_any(),
        TabKey::ProductNew => view! { <ProductDetails id=None on_close=on_close /> }.into_any(),
        TabKey::ProductEdit(id) => {
            view! { <ProductDetails id=Some(id) on_close=on_close /> }.into_any()
        }

        // a002: Categories
        TabKey::CategoryList => view! { <CategoryList /> }.into_any(),
        TabKey::CategoryNew => view! { <CategoryDetails id=None on_close=on_close /> }.into_any(),
        TabKey::CategoryEdit(id) => {
            view! { <CategoryDetails id=Some(id) on_close=on_close /> }.into_any()
        }

        // a003: Orders
        TabKey::OrderList => view! { <OrderList /> }.into_any(),
        TabKey::OrderNew => view! { <OrderDetails id=None on_close=on_close /> }.into_any(),
        TabKey::OrderEdit(id) => view! { <OrderDetails id=Some(id) on_close=on_close /> }.into_any(),
    }
}
