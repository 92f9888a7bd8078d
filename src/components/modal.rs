//! Modal dialog container shared by editing forms and pickers.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use leptos::prelude::*;

use crate::util::modal::{is_dismiss_key, lock_body_scroll, unlock_body_scroll};

/// Backdrop plus dialog. Backdrop click, the close button, and Escape all run
/// `on_close`; clicks inside the dialog stay inside it. Body scrolling is
/// locked while any modal is mounted, including nested ones.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    lock_body_scroll();
    on_cleanup(unlock_body_scroll);

    let dialog_class = match class {
        Some(extra) => format!("dialog {extra}"),
        None => "dialog".to_owned(),
    };
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let label = title.clone();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class=dialog_class
                role="dialog"
                aria-modal="true"
                aria-label=label
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="dialog__header">
                    <h2>{title}</h2>
                    <button class="dialog__close" on:click=on_close_click title="Close">
                        "✕"
                    </button>
                </div>
                <div class="dialog__body">{children()}</div>
            </div>
        </div>
    }
}
