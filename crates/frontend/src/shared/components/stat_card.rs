use crate::shared::icons::{icon, Icon};
use leptos::prelude::*;

/// Colour variant of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTone {
    Blue,
    Green,
    Red,
}

impl CardTone {
    fn class(self) -> &'static str {
        match self {
            CardTone::Blue => "stat-card stat-card--blue",
            CardTone::Green => "stat-card stat-card--green",
            CardTone::Red => "stat-card stat-card--red",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    icon_kind: Icon,
    tone: CardTone,
    /// Formatted value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || value.get().unwrap_or_else(|| "—".to_string());

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=tone.class()>
            <div class="stat-card__icon">
                {icon(icon_kind)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
