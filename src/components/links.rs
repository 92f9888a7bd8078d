//! Internal deck links and outbound links.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use leptos::prelude::*;

use crate::net::types::{DeckKind, RefKind};

/// Page path for a deck.
pub fn deck_href(kind: DeckKind, id: &str) -> String {
    format!("/{}/{id}", kind.path_segment())
}

fn deck_link_class(kind: DeckKind, ref_kind: Option<RefKind>) -> String {
    let mut class = format!("deck-link deck-link--{}", kind.name());
    if let Some(ref_kind) = ref_kind {
        class.push_str(" deck-link--");
        class.push_str(ref_kind.css_modifier());
    }
    class
}

/// Text for an outbound link with no explicit label: the host without a
/// leading `www.`, or the raw URL when it does not parse.
pub fn external_label(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed
                .host_str()
                .map(|host| host.strip_prefix("www.").unwrap_or(host).to_owned())
        })
        .unwrap_or_else(|| url.to_owned())
}

/// Link to a deck page, styled by deck kind and optional reference kind.
#[component]
pub fn DeckLink(
    kind: DeckKind,
    #[prop(into)] id: String,
    #[prop(into)] name: String,
    #[prop(optional)] ref_kind: Option<RefKind>,
) -> impl IntoView {
    let href = deck_href(kind, &id);
    let class = deck_link_class(kind, ref_kind);
    let title = ref_kind.map(RefKind::label);

    view! {
        <a class=class href=href title=title>
            {name}
        </a>
    }
}

/// Link that opens outside the application in a new tab.
#[component]
pub fn ExternalLink(#[prop(into)] url: String, #[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let text = label.unwrap_or_else(|| external_label(&url));

    view! {
        <a class="external-link" href=url target="_blank" rel="noopener noreferrer">
            {text}
            <span class="external-link__marker" aria-hidden="true">"↗"</span>
        </a>
    }
}
