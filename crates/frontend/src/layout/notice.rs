use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a notice stays on screen
pub const NOTICE_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Error,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Info,
        }
    }
}

/// Non-blocking notices at the bottom of the screen.
///
/// A newer notice replaces the current one and restarts the timer.
#[derive(Clone, Copy)]
pub struct NoticeService {
    current: RwSignal<Option<Notice>>,
    generation: StoredValue<u64>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            generation: StoredValue::new(0),
        }
    }

    pub fn show(&self, notice: Notice) {
        let generation = self.generation.get_value() + 1;
        self.generation.set_value(generation);
        self.current.set(Some(notice));

        let this = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_DURATION_MS).await;
            if this.generation.try_get_value() == Some(generation) {
                this.current.try_set(None);
            }
        });
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    pub fn current(&self) -> Option<Notice> {
        self.current.get()
    }
}

impl Default for NoticeService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the notice of the [`NoticeService`] in context
#[component]
pub fn NoticeHost() -> impl IntoView {
    let notices = use_context::<NoticeService>().expect("NoticeService not provided in context");

    view! {
        {move || {
            notices.current().map(|notice| {
                let class = match notice.level {
                    NoticeLevel::Info => "notice notice--info",
                    NoticeLevel::Error => "notice notice--error",
                };
                view! {
                    <div class=class role="status">
                        <span class="notice__text">{notice.text}</span>
                        <button class="notice__close" on:click=move |_| notices.dismiss()>"×"</button>
                    </div>
                }
            })
        }}
    }
}
