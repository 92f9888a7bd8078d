//! Root application component with context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::toggle::Toggle;
use crate::hooks::toggle::use_persisted_toggle;
use crate::state::ui::UiState;

fn initial_ui_state(dark_mode: bool, margins_visible: bool) -> UiState {
    UiState {
        dark_mode,
        margins_visible,
    }
}

/// Flip the theme from a click handler; reads untracked.
fn toggle_dark_mode(ui: RwSignal<UiState>) {
    let current = ui.get_untracked().dark_mode;
    let next = crate::util::dark_mode::toggle(current);
    ui.update(|u| u.dark_mode = next);
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared `UiState` context, restores the stored dark-mode
/// preference, and renders the view-settings bar. Page content is mounted
/// into `#civil-main` by the host application's router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let dark_mode = crate::util::dark_mode::read_preference();
    crate::util::dark_mode::apply(dark_mode);

    let margins = use_persisted_toggle("margins", UiState::default().margins_visible);
    let ui = RwSignal::new(initial_ui_state(dark_mode, margins.get_untracked()));
    provide_context(ui);

    Effect::new(move || {
        let visible = margins.get();
        ui.update(|u| u.margins_visible = visible);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/civil-ui.css"/>
        <Title text="Civil"/>

        <header class="view-settings">
            <Toggle label="Margins" value=margins.signal()/>
            <span class="view-settings__spacer"></span>
            <button
                class="btn view-settings__dark-toggle"
                on:click=move |_| toggle_dark_mode(ui)
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
        </header>
        <main
            id="civil-main"
            class="civil-main"
            class:civil-main--no-margins=move || !ui.get().margins_visible
        ></main>
    }
}
