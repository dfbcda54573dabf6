use super::tab::Tab;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::render_tab_content;
use leptos::prelude::*;

/// Tab strip plus the content of the active tab.
///
/// Only the active tab is mounted, so switching back to a list reloads it.
#[component]
pub fn Center() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let active = Memo::new(move |_| tabs_store.active_key());

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <div class="tabs">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <Tab tab=tab /> }
                />
            </div>
            <div class="tabs__item">
                {move || active.get().map(|key| render_tab_content(key, tabs_store))}
            </div>
        </div>
    }
}
