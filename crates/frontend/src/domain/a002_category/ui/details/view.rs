use super::view_model::CategoryDetailsVm;
use crate::config::AppConfig;
use crate::shared::dual_list::DualListEditor;
use crate::shared::icons::{icon, Icon};
use crate::shared::page_frame::{PageCategory, PageFrame};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CategoryDetails(id: Option<String>, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let vm = CategoryDetailsVm::new(&config, id);

    let title = if vm.is_edit() {
        "Editar Categoria"
    } else {
        "Adicionar Categoria"
    };

    view! {
        <PageFrame page_id="a002_category--detail" category=PageCategory::Detail>
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

                <Show
                    when=move || !vm.is_loading.get()
                    fallback=|| view! { <div class="page__loading"><Spinner /></div> }
                >
                    <div class="form__group">
                        <label class="form__label">"Nome da Categoria"</label>
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || vm.name.get()
                            on:input=move |ev| vm.name.set(event_target_value(&ev))
                        />
                        {move || vm.validation.get().map(|msg| view! {
                            <div class="form__error">{msg}</div>
                        })}
                    </div>

                    <DualListEditor
                        list=vm.products
                        available_title="Produtos Disponíveis"
                        selected_title="Produtos Selecionados"
                    />
                </Show>
            </div>
        </PageFrame>
    }
}
