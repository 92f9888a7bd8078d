//! On/off switches and expand/collapse headings.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use leptos::prelude::*;

use crate::hooks::toggle::use_toggle;

/// Stable DOM id for a toggle input, derived from its label so server and
/// client renders agree.
pub fn toggle_dom_id(label: &str) -> String {
    let slug = label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect::<String>();
    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "toggle".to_owned()
    } else {
        format!("toggle-{slug}")
    }
}

pub fn disclosure_glyph(expanded: bool) -> &'static str {
    if expanded { "▾" } else { "▸" }
}

/// Labelled switch bound to `value`.
#[component]
pub fn Toggle(
    #[prop(into)] label: String,
    value: RwSignal<bool>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    let id = id.unwrap_or_else(|| toggle_dom_id(&label));

    view! {
        <span class="toggle" class:toggle--on=move || value.get() class:toggle--disabled=disabled>
            <input
                id=id.clone()
                class="toggle__input"
                type="checkbox"
                role="switch"
                disabled=disabled
                prop:checked=move || value.get()
                on:change=move |ev| value.set(event_target_checked(&ev))
            />
            <label class="toggle__label" for=id>
                {label}
            </label>
        </span>
    }
}

/// Heading that shows or hides its children.
#[component]
pub fn Disclosure(
    #[prop(into)] heading: String,
    #[prop(optional)] initially_expanded: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let expanded = use_toggle(initially_expanded);

    view! {
        <section class="disclosure" class:disclosure--expanded=move || expanded.get()>
            <button
                class="disclosure__heading"
                aria-expanded=move || expanded.get().to_string()
                on:click=move |_| expanded.toggle()
            >
                <span class="disclosure__glyph" aria-hidden="true">
                    {move || disclosure_glyph(expanded.get())}
                </span>
                {heading}
            </button>
            <Show when=move || expanded.get()>
                <div class="disclosure__body">{children()}</div>
            </Show>
        </section>
    }
}
