use super::PagedCollection;
use crate::shared::components::{ConfirmDialog, PaginationControls};
use leptos::prelude::*;
use serde::de::DeserializeOwned;

/// Error box and loading bar above a paginated table
#[component]
pub fn CollectionStatus<T>(collection: PagedCollection<T>) -> impl IntoView
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let error = move || collection.with(|m| m.paging.error().map(str::to_string));
    let loading = move || collection.with(|m| m.paging.is_loading());

    view! {
        {move || error().map(|e| view! {
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{e}</span>
            </div>
        })}
        <Show when=loading>
            <div class="loading-bar" role="progressbar"></div>
        </Show>
    }
}

/// Pagination controls plus the delete confirmation of a collection
#[component]
pub fn CollectionFooter<T>(
    collection: PagedCollection<T>,
    page_size_options: Vec<usize>,
) -> impl IntoView
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let messages = collection.with(|m| m.messages().clone());

    view! {
        <PaginationControls
            current_page=Signal::derive(move || collection.with(|m| m.paging.index))
            total_pages=Signal::derive(move || collection.with(|m| m.paging.total_pages()))
            range_label=Signal::derive(move || collection.with(|m| m.paging.range_label()))
            page_size=Signal::derive(move || collection.with(|m| m.paging.size))
            on_page_change=Callback::new(move |page| collection.set_page(page))
            on_page_size_change=Callback::new(move |size| collection.set_page_size(size))
            page_size_options=page_size_options
            disabled=Signal::derive(move || collection.with(|m| m.paging.is_loading()))
        />
        <ConfirmDialog
            open=Signal::derive(move || collection.is_confirm_open() || collection.is_deleting())
            title=messages.confirm_title
            text=messages.confirm_text
            on_confirm=Callback::new(move |_| collection.confirm_delete())
            on_cancel=Callback::new(move |_| collection.cancel_delete())
            busy=Signal::derive(move || collection.is_deleting())
        />
    }
}
