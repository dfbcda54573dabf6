use leptos::ev;
use leptos::prelude::*;

/// Confirmation prompt shown over the page.
///
/// Escape and a click on the overlay count as "Cancelar". While `busy` is set
/// both buttons are disabled.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] text: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(into, optional)] busy: Signal<bool>,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" && open.get_untracked() && !busy.get_untracked() {
            on_cancel.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let cancel = move |_| {
        if !busy.get_untracked() {
            on_cancel.run(());
        }
    };

    // Prevent click propagation from the dialog to the overlay
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let title = StoredValue::new(title);
    let text = StoredValue::new(text);

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=cancel>
                <div class="modal modal--confirm" role="alertdialog" on:click=stop_propagation>
                    <div class="modal-header">
                        <h2 class="modal-title">{title.get_value()}</h2>
                    </div>
                    <div class="modal-body">
                        <p>{text.get_value()}</p>
                    </div>
                    <div class="modal-actions">
                        <button
                            class="button button--secondary"
                            on:click=cancel
                            disabled=move || busy.get()
                        >
                            "Cancelar"
                        </button>
                        <button
                            class="button button--danger"
                            on:click=move |_| on_confirm.run(())
                            disabled=move || busy.get()
                        >
                            "Confirmar"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
