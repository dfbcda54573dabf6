use crate::config::AppConfig;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::notice::NoticeService;
use crate::layout::tabs::TabKey;
use crate::shared::api_utils::RestResource;
use crate::shared::icons::{icon, Icon};
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::paging::{CollectionFooter, CollectionStatus, DeleteMessages, PagedCollection};
use contracts::domain::a002_category::Category;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::*;

pub const DELETE_MESSAGES: DeleteMessages = DeleteMessages {
    confirm_title: "Excluir categoria",
    confirm_text: "Deseja realmente excluir a categoria?",
    conflict: "Categoria vinculada a produtos e não pode ser excluída",
    failure: "Erro ao excluir a categoria.",
};

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let notices = use_context::<NoticeService>().expect("NoticeService not found in context");

    let collection = PagedCollection::new(
        RestResource::<Category>::new(config.api_base(), "categories"),
        config.listing.initial_page_size,
        DELETE_MESSAGES,
        notices,
    );
    collection.start();

    view! {
        <PageFrame page_id="a002_category--list" category=PageCategory::List>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Categorias"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| tabs_store.open(TabKey::CategoryNew)
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
                                <TableHeaderCell>"Produtos"</TableHeaderCell>
                                <TableHeaderCell>"Ação"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || collection.rows().into_iter().map(|category| {
                                let id = category.id.as_string();
                                let edit_id = id.clone();
                                let name = category.name.clone();
                                let product_count = category.product_count();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{product_count}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__actions">
                                                <button
                                                    class="icon-button icon-button--primary"
                                                    title="Editar"
                                                    on:click=move |_| tabs_store.open(TabKey::CategoryEdit(edit_id.clone()))
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
