use super::model;
use crate::config::AppConfig;
use crate::shared::api_utils::{build_form_data, RestResource};
use crate::shared::dialogs::alert;
use crate::shared::dual_list::DualList;
use contracts::domain::a001_product::{Product, ProductForm};
use contracts::domain::a002_category::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{File, Url};

/// ViewModel of the product editor
#[derive(Clone, Copy)]
pub struct ProductDetailsVm {
    id: StoredValue<Option<String>>,
    products: StoredValue<RestResource<Product>>,
    categories_api: StoredValue<RestResource<Category>>,
    file: StoredValue<Option<File>, LocalStorage>,
    pub form: RwSignal<ProductForm>,
    pub categories: RwSignal<DualList<Category>>,
    pub image_preview: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub validation: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,
    pub is_saving: RwSignal<bool>,
}

impl ProductDetailsVm {
    pub fn new(config: &AppConfig, id: Option<String>) -> Self {
        let base = config.api_base();
        let vm = Self {
            id: StoredValue::new(id),
            products: StoredValue::new(RestResource::new(base.clone(), "products")),
            categories_api: StoredValue::new(RestResource::new(base, "categories")),
            file: StoredValue::new_local(None),
            form: RwSignal::new(ProductForm::default()),
            categories: RwSignal::new(DualList::default()),
            image_preview: RwSignal::new(None),
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
        let products = self.products.get_value();
        let categories = self.categories_api.get_value();

        spawn_local(async move {
            match model::load(&products, &categories, id.as_deref()).await {
                Ok(seed) => {
                    let (form, image, list) = seed.into_parts();
                    this.form.try_set(form);
                    this.image_preview.try_set(image);
                    this.categories.try_set(list);
                }
                Err(e) => {
                    log::error!("product editor: failed to load data: {}", e);
                    this.error.try_set(Some("Erro ao carregar os dados.".to_string()));
                }
            }
            this.is_loading.try_set(false);
        });
    }

    /// Remember the chosen image and show it instead of the stored one
    pub fn set_file(&self, file: Option<File>) {
        let Some(file) = file else {
            return;
        };
        match Url::create_object_url_with_blob(&file) {
            Ok(url) => {
                self.release_preview();
                self.image_preview.set(Some(url));
            }
            Err(e) => log::warn!("no preview for {}: {:?}", file.name(), e),
        }
        self.file.set_value(Some(file));
    }

    /// Revoke the object URL of a locally picked image
    pub fn release_preview(&self) {
        if let Some(Some(url)) = self.image_preview.try_get_untracked() {
            if url.starts_with("blob:") {
                let _ = Url::revoke_object_url(&url);
            }
        }
    }

    pub fn save(&self, on_saved: Callback<()>) {
        if self.is_saving.get_untracked() || self.is_loading.get_untracked() {
            return;
        }
        let fields = match self
            .categories
            .with_untracked(|list| self.form.with_untracked(|form| model::submission(form, list)))
        {
            Ok(fields) => fields,
            Err(msg) => {
                self.validation.set(Some(msg));
                return;
            }
        };
        self.validation.set(None);

        let is_edit = self.is_edit();
        let body = match self
            .file
            .with_value(|file| build_form_data(&fields, file.as_ref()))
        {
            Ok(body) => body,
            Err(e) => {
                log::error!("product editor: cannot build request: {}", e);
                alert(model::save_failure(is_edit));
                return;
            }
        };

        self.is_saving.set(true);
        let this = *self;
        let id = self.id.get_value();
        let products = self.products.get_value();

        spawn_local(async move {
            let result = match id.as_deref() {
                Some(id) => products.update_multipart(id, body).await,
                None => products.create_multipart(body).await,
            };
            this.is_saving.try_set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("product editor: save failed: {}", e);
                    alert(model::save_failure(is_edit));
                }
            }
        });
    }
}
