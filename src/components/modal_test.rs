#![cfg(feature = "ssr")]

use super::*;

#[test]
fn modal_renders_title_as_heading_and_label() {
    let owner = Owner::new();
    owner.set();
    let html = view! {
        <Modal title="Edit note" on_close=Callback::new(|()| {})>
            <p>"Body"</p>
        </Modal>
    }
    .to_html();

    assert!(html.contains("aria-label=\"Edit note\""));
    assert!(html.contains("<h2>Edit note</h2>"));
    assert!(html.contains("<p>Body</p>"));
    assert!(html.contains("class=\"dialog\""));
}

#[test]
fn modal_appends_extra_class() {
    let owner = Owner::new();
    owner.set();
    let html = view! {
        <Modal title="Pick" on_close=Callback::new(|()| {}) class="dialog--picker">
            <p>"Body"</p>
        </Modal>
    }
    .to_html();

    assert!(html.contains("class=\"dialog dialog--picker\""));
}
