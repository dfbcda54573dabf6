use super::model;
use crate::config::AppConfig;
use crate::shared::api_utils::RestResource;
use crate::shared::dialogs::alert;
use crate::shared::dual_list::DualList;
use contracts::domain::a001_product::Product;
use contracts::domain::a003_order::Order;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct OrderDetailsVm {
    id: StoredValue<Option<String>>,
    orders_api: StoredValue<RestResource<Order>>,
    products_api: StoredValue<RestResource<Product>>,
    pub products: RwSignal<DualList<Product>>,
    /// Sum of the selected prices, recomputed from the selection
    pub total: Memo<f64>,
    pub error: RwSignal<Option<String>>,
    pub validation: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,
    pub is_saving: RwSignal<bool>,
}

impl OrderDetailsVm {
    pub fn new(config: &AppConfig, id: Option<String>) -> Self {
        let base = config.api_base();
        let products = RwSignal::new(DualList::default());
        let vm = Self {
            id: StoredValue::new(id),
            orders_api: StoredValue::new(RestResource::new(base.clone(), "orders")),
            products_api: StoredValue::new(RestResource::new(base, "products")),
            products,
            total: Memo::new(move |_| products.with(|list| list.running_total())),
            error: RwSignal::new(None),
            validation: RwSignal::new(None),
            is_loading: RwSignal::new(true),
            is_saving: RwSignal::new(false),
        };
        vm.load();
        vm
    }

    pub fn is_edit(&self) -> bool {
        self.id.with_value(Option::is_some)
    }

    fn load(&self) {
        let this = *self;
        let id = self.id.get_value();
        let orders = self.orders_api.get_value();
        let products = self.products_api.get_value();

        spawn_local(async move {
            match model::load(&orders, &products, id.as_deref()).await {
                Ok((order, universe)) => {
                    this.products.try_set(model::seed(order, universe));
                }
                Err(e) => {
                    log::error!("order editor: failed to load data: {}", e);
                    this.error.try_set(Some("Erro ao carregar os dados.".to_string()));
                }
            }
            this.is_loading.try_set(false);
        });
    }

    pub fn save(&self, on_saved: Callback<()>) {
        if self.is_saving.get_untracked() || self.is_loading.get_untracked() {
            return;
        }
        let is_edit = self.is_edit();
        let dto = match self.products.with_untracked(|list| model::submission(list, is_edit)) {
            Ok(dto) => dto,
            Err(msg) => {
                self.validation.set(Some(msg));
                return;
            }
        };
        self.validation.set(None);
        self.is_saving.set(true);

        let this = *self;
        let id = self.id.get_value();
        let orders = self.orders_api.get_value();

        spawn_local(async move {
            let result = match id.as_deref() {
                Some(id) => orders.update(id, &dto).await,
                None => orders.create(&dto).await,
            };
            this.is_saving.try_set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("order editor: save failed: {}", e);
                    alert(model::save_failure(id.is_some()));
                }
            }
        });
    }
}
