use super::view_model::OrderDetailsVm;
use crate::config::AppConfig;
use crate::shared::dual_list::DualListEditor;
use crate::shared::icons::{icon, Icon};
use crate::shared::number_format::format_currency;
use crate::shared::page_frame::{PageCategory, PageFrame};
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrderDetails(id: Option<String>, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let vm = OrderDetailsVm::new(&config, id);

    let title = if vm.is_edit() {
        "Editar Pedido"
    } else {
        "Novo Pedido"
    };

    view! {
        <PageFrame page_id="a003_order--detail" category=PageCategory::Detail>
            <div class="page__header">
                <div class="page__header-left">
                    <h2>{title}</h2>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        {icon(Icon::Close)}
                        " Cancelar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save(on_close)
                        disabled=Signal::derive(move || vm.is_loading.get() || vm.is_saving.get())
                    >
                        {move || if vm.is_saving.get() { "Salvando..." } else { "Salvar" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || vm.error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}
                {move || vm.validation.get().map(|msg| view! {
                    <div class="form__error">{msg}</div>
                })}

                <Show
                    when=move || !vm.is_loading.get()
                    fallback=|| view! { <div class="page__loading"><Spinner /></div> }
                >
                    <DualListEditor
                        list=vm.products
                        available_title="Produtos Disponíveis"
                        selected_title="Produtos Selecionados"
                        detail_title="Preço"
                        detail=Callback::new(|p: Product| format_currency(p.price))
                    />
                    <div class="order-total">
                        {move || format!("Total: {}", format_currency(vm.total.get()))}
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
