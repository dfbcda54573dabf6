use super::model;
use crate::config::AppConfig;
use crate::shared::api_utils::RestResource;
use crate::shared::dialogs::alert;
use crate::shared::dual_list::DualList;
use contracts::domain::a001_product::Product;
use contracts::domain::a002_category::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct CategoryDetailsVm {
    id: StoredValue<Option<String>>,
    categories_api: StoredValue<RestResource<Category>>,
    products_api: StoredValue<RestResource<Product>>,
    pub name: RwSignal<String>,
    pub products: RwSignal<DualList<Product>>,
    pub error: RwSignal<Option<String>>,
    pub validation: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,
    pub is_saving: RwSignal<bool>,
}

impl CategoryDetailsVm {
    pub fn new(config: &AppConfig, id: Option<String>) -> Self {
        let base = config.api_base();
        let vm = Self {
            id: StoredValue::new(id),
            categories_api: StoredValue::new(RestResource::new(base.clone(), "categories")),
            products_api: StoredValue::new(RestResource::new(base, "products")),
            name: RwSignal::new(String::new()),
            products: RwSignal::new(DualList::default()),
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
        let categories = self.categories_api.get_value();
        let products = self.products_api.get_value();

        spawn_local(async move {
            match model::load(&categories, &products, id.as_deref()).await {
                Ok((category, universe)) => {
                    let (name, list) = model::seed(category, universe);
                    this.name.try_set(name);
                    this.products.try_set(list);
                }
                Err(e) => {
                    log::error!("category editor: failed to load data: {}", e);
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
        let dto = match self
            .products
            .with_untracked(|list| self.name.with_untracked(|name| model::submission(name, list)))
        {
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
        let categories = self.categories_api.get_value();

        spawn_local(async move {
            let result = match id.as_deref() {
                Some(id) => categories.update(id, &dto).await,
                None => categories.create(&dto).await,
            };
            this.is_saving.try_set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("category editor: save failed: {}", e);
                    alert(model::save_failure(id.is_some()));
                }
            }
        });
    }
}
