use super::view_model::ProductDetailsVm;
use crate::config::AppConfig;
use crate::layout::notice::{Notice, NoticeService};
use crate::shared::dual_list::DualListEditor;
use crate::shared::icons::{icon, Icon};
use crate::shared::page_frame::{PageCategory, PageFrame};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProductDetails(id: Option<String>, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let notices = use_context::<NoticeService>().expect("NoticeService not found in context");

    let vm = ProductDetailsVm::new(&config, id);
    on_cleanup(move || vm.release_preview());

    let title = if vm.is_edit() {
        "Editar Produto"
    } else {
        "Adicionar Produto"
    };

    let on_saved = Callback::new(move |_| {
        if !vm.is_edit() {
            notices.show(Notice::info("Produto criado com sucesso!"));
        }
        on_close.run(());
    });

    view! {
        <PageFrame page_id="a001_product--detail" category=PageCategory::Detail>
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
                        on_click=move |_| vm.save(on_saved)
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
                    <div class="form__row">
                        <div class="form__group">
                            <label class="form__label">"Nome do Produto"</label>
                            <input
                                class="form__input"
                                type="text"
                                prop:value=move || vm.form.with(|f| f.name.clone())
                                on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group form__group--wide">
                            <label class="form__label">"Descrição"</label>
                            <input
                                class="form__input"
                                type="text"
                                prop:value=move || vm.form.with(|f| f.description.clone())
                                on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Preço"</label>
                            <input
                                class="form__input"
                                type="text"
                                inputmode="decimal"
                                prop:value=move || vm.form.with(|f| f.price.clone())
                                on:input=move |ev| vm.form.update(|f| f.price = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Imagem do Produto"</label>
                        <input
                            class="form__file"
                            type="file"
                            accept="image/*"
                            on:change=move |ev| {
                                let input = event_target::<web_sys::HtmlInputElement>(&ev);
                                vm.set_file(input.files().and_then(|files| files.get(0)));
                            }
                        />
                        {move || vm.image_preview.get().map(|src| view! {
                            <img class="form__image-preview" src=src alt="Imagem do Produto" />
                        })}
                    </div>

                    <DualListEditor
                        list=vm.categories
                        available_title="Categorias Disponíveis"
                        selected_title="Categorias Selecionadas"
                    />
                </Show>
            </div>
        </PageFrame>
    }
}
