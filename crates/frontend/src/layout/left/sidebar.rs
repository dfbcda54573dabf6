//! Sidebar with the navigation drawer entries

use crate::layout::global_context::AppGlobalContext;
use crate::layout::menu::MenuEntry;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {MenuEntry::ALL
                .into_iter()
                .map(|entry| {
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                ctx.active_key().map(|k| entry.is_active_for(&k)).unwrap_or(false)
                            }
                            style:padding-left="12px"
                            on:click=move |_| ctx.open(entry.tab())
                        >
                            <div class="app-sidebar__item-content">
                                {icon(entry.icon())}
                                <span>{entry.label()}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
