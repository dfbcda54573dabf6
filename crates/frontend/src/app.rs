use crate::config::AppConfig;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::notice::NoticeService;
use crate::layout::Shell;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Read by every screen to build its API resources
    provide_context(config);

    // Provide the AppGlobalContext store to the whole app via context.
    let tabs_store = AppGlobalContext::new();
    provide_context(tabs_store);

    provide_context(NoticeService::new());

    tabs_store.init_router_integration();

    view! {
        <ConfigProvider>
            <Shell />
        </ConfigProvider>
    }
}
