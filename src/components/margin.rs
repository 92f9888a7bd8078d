//! Annotations rendered in the page margins beside deck content.
//!
//! DESIGN
//! ======
//! Margins are secondary content: every margin component hides itself when
//! `UiState::margins_visible` is off, and renders normally when no `UiState`
//! context has been provided.

#[cfg(test)]
#[path = "margin_test.rs"]
mod margin_test;

use leptos::prelude::*;

use crate::components::links::DeckLink;
use crate::net::types::{DeckKind, RefKind};
use crate::state::ui::UiState;

/// Which margin an annotation sits in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarginSide {
    #[default]
    Left,
    Right,
}

pub fn margin_class(side: MarginSide) -> &'static str {
    match side {
        MarginSide::Left => "margin margin--left",
        MarginSide::Right => "margin margin--right",
    }
}

fn margins_visible() -> impl Fn() -> bool + Copy + Send + Sync + 'static {
    let ui = use_context::<RwSignal<UiState>>();
    move || ui.map_or(true, |ui| ui.get().margins_visible)
}

/// Free-form margin annotation with an optional heading.
#[component]
pub fn MarginNote(
    #[prop(optional)] side: MarginSide,
    #[prop(optional, into)] heading: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let visible = margins_visible();

    view! {
        <Show when=visible>
            <aside class=margin_class(side)>
                {heading.clone().map(|h| view! { <h3 class="margin__heading">{h}</h3> })}
                <div class="margin__body">{children()}</div>
            </aside>
        </Show>
    }
}

/// Left-margin marker for a reference to another deck: the reference glyph,
/// a link to the deck, and the note's annotation if it has one.
#[component]
pub fn MarginRef(
    ref_kind: RefKind,
    kind: DeckKind,
    #[prop(into)] id: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] annotation: Option<String>,
) -> impl IntoView {
    let visible = margins_visible();
    let class = format!("{} margin-ref margin-ref--{}", margin_class(MarginSide::Left), ref_kind.css_modifier());

    view! {
        <Show when=visible>
            <aside class=class.clone()>
                <span class="margin-ref__glyph" title=ref_kind.label()>
                    {ref_kind.glyph()}
                </span>
                <DeckLink kind=kind id=id.clone() name=name.clone() ref_kind=ref_kind/>
                {annotation.clone().map(|a| view! { <p class="margin-ref__annotation">{a}</p> })}
            </aside>
        </Show>
    }
}
