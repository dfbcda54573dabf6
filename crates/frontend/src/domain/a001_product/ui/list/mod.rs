use crate::config::AppConfig;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::notice::NoticeService;
use crate::layout::tabs::TabKey;
use crate::shared::api_utils::RestResource;
use crate::shared::icons::{icon, Icon};
use crate::shared::number_format::format_currency;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::paging::{CollectionFooter, CollectionStatus, DeleteMessages, PagedCollection};
use contracts::domain::a001_product::Product;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::*;

pub const DELETE_MESSAGES: DeleteMessages = DeleteMessages {
    confirm_title: "Excluir produto",
    confirm_text: "Deseja realmente excluir o produto?",
    conflict: "Produto vinculado a um pedido e não pode ser excluído",
    failure: "Erro inesperado ao tentar excluir o produto.",
};

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let notices = use_context::<NoticeService>().expect("NoticeService not found in context");

    let collection = PagedCollection::new(
        RestResource::<Product>::new(config.api_base(), "products"),
        config.listing.initial_page_size,
        DELETE_MESSAGES,
        notices,
    );
    collection.start();

    view! {
        <PageFrame page_id="a001_product--list" category=PageCategory::List>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Produtos"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| tabs_store.open(TabKey::ProductNew)
                    >
                        {icon(Icon::Plus)}
                        " Adicionar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| collection.refresh()
                    >
                        {icon(Icon::Refresh)}
                        " Atualizar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <CollectionStatus collection=collection />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Nome"</TableHeaderCell>
                                <TableHeaderCell>"Descrição"</TableHeaderCell>
                                <TableHeaderCell>"Preço"</TableHeaderCell>
                                <TableHeaderCell>"Categorias"</TableHeaderCell>
                                <TableHeaderCell>"Ação"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || collection.rows().into_iter().map(|product| {
                                let id = product.id.as_string();
                                let edit_id = id.clone();
                                let name = product.name.clone();
                                let description = product.description.clone();
                                let price = format_currency(product.price);
                                let category_count = product.category_count();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{description.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="table__cell--right">{price.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{category_count}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__actions">
                                                <button
                                                    class="icon-button icon-button--primary"
                                                    title="Editar"
                                                    on:click=move |_| tabs_store.open(TabKey::ProductEdit(edit_id.clone()))
                                                >
                                                    {icon(Icon::Edit)}
                                                </button>
                                                <button
                                                    class="icon-button icon-button--danger"
                                                    title="Excluir"
                                                    on:click=move |_| collection.request_delete(id.clone())
                                                >
                                                    {icon(Icon::Delete)}
                                                </button>
                                            </div>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>

                <CollectionFooter
                    collection=collection
                    page_size_options=config.listing.page_size_options.clone()
                />
            </div>
        </PageFrame>
    }
}
