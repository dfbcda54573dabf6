use crate::config::AppConfig;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::notice::NoticeService;
use crate::layout::tabs::TabKey;
use crate::shared::api_utils::RestResource;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::{icon, Icon};
use crate::shared::number_format::format_money;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::paging::{CollectionFooter, CollectionStatus, DeleteMessages, PagedCollection};
use contracts::domain::a003_order::Order;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::*;

pub const DELETE_MESSAGES: DeleteMessages = DeleteMessages {
    confirm_title: "Excluir Pedido",
    confirm_text: "Deseja realmente excluir o Pedido ?",
    conflict: "Pedido não pode ser excluído",
    failure: "Erro ao excluir o pedido.",
};

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let notices = use_context::<NoticeService>().expect("NoticeService not found in context");

    let collection = PagedCollection::new(
        RestResource::<Order>::new(config.api_base(), "orders"),
        config.listing.initial_page_size,
        DELETE_MESSAGES,
        notices,
    );
    collection.start();

    view! {
        <PageFrame page_id="a003_order--list" category=PageCategory::List>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Pedidos"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| tabs_store.open(TabKey::OrderNew)
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
                                <TableHeaderCell>"ID"</TableHeaderCell>
                                <TableHeaderCell>"Data do Pedido"</TableHeaderCell>
                                <TableHeaderCell>"Total do Pedido"</TableHeaderCell>
                                <TableHeaderCell>"Produtos"</TableHeaderCell>
                                <TableHeaderCell>"Ação"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || collection.rows().into_iter().map(|order| {
                                let id = order.id.as_string();
                                let edit_id = id.clone();
                                let id_text = id.clone();
                                let date = format_datetime(&order.date);
                                let total = format_money(order.total);
                                let product_count = order.product_count();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <code class="table__id">{id_text.clone()}</code>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{date.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="table__cell--right">{total.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{product_count}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__actions">
                                                <button
                                                    class="icon-button icon-button--primary"
                                                    title="Editar"
                                                    on:click=move |_| tabs_store.open(TabKey::OrderEdit(edit_id.clone()))
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
