//! TopHeader component - application top bar with the sidebar toggle

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::{icon, Icon};
use leptos::prelude::*;

pub const APP_TITLE: &str = "My Admin Panel";

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar menu" } else { "Mostrar menu" }
                >
                    {icon(Icon::Menu)}
                </button>
                <span class="top-header__title">{APP_TITLE}</span>
            </div>
        </div>
    }
}
