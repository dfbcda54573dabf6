use super::{DualList, ListItem};
use crate::shared::icons::{icon, Icon};
use leptos::prelude::*;

/// Two side-by-side tables over a shared [`DualList`].
///
/// Clicking a row of the left table selects the item, clicking a row of the
/// right table releases it. `detail` renders an optional second column (price).
#[component]
pub fn DualListEditor<T>(
    list: RwSignal<DualList<T>>,
    #[prop(into)] available_title: String,
    #[prop(into)] selected_title: String,
    #[prop(optional, into)] detail_title: Option<String>,
    #[prop(optional)] detail: Option<Callback<T, String>>,
) -> impl IntoView
where
    T: ListItem + Clone + Send + Sync + 'static,
{
    let detail_header = detail_title.clone();
    let render_side = move |title: String, selected_side: bool| {
        let header = detail_header.clone();
        let rows = move || {
            let items: Vec<T> = list.with(|l| {
                if selected_side {
                    l.selected().to_vec()
                } else {
                    l.available().to_vec()
                }
            });
            if items.is_empty() {
                return view! {
                    <tr class="table__row table__row--empty">
                        <td class="table__cell" colspan="2">"Nenhum item"</td>
                    </tr>
                }
                .into_any();
            }
            items
                .into_iter()
                .map(|item| {
                    let label = item.label();
                    let extra = detail.map(|d| d.run(item.clone()));
                    let on_click = move |_| {
                        list.update(|l| {
                            if selected_side {
                                l.remove(&item);
                            } else {
                                l.add(&item);
                            }
                        });
                    };
                    view! {
                        <tr class="table__row dual-list__row" on:click=on_click>
                            <td class="table__cell">{label}</td>
                            {extra.map(|text| view! { <td class="table__cell table__cell--right">{text}</td> })}
                        </tr>
                    }
                })
                .collect_view()
                .into_any()
        };

        view! {
            <div class="dual-list__side">
                <div class="dual-list__title">
                    {if selected_side { icon(Icon::ArrowLeft) } else { icon(Icon::ArrowRight) }}
                    <span>{title}</span>
                    <span class="dual-list__count">
                        {move || list.with(|l| if selected_side { l.selected().len() } else { l.available().len() })}
                    </span>
                </div>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Nome"</th>
                            {header.map(|h| view! { <th class="table__header-cell table__cell--right">{h}</th> })}
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        }
    };

    view! {
        <div class="dual-list">
            {render_side(available_title, false)}
            {render_side(selected_title, true)}
        </div>
    }
}
