use super::*;

#[test]
fn margin_side_default_is_left() {
    assert_eq!(MarginSide::default(), MarginSide::Left);
}

#[test]
fn margin_class_reflects_side() {
    assert_eq!(margin_class(MarginSide::Left), "margin margin--left");
    assert_eq!(margin_class(MarginSide::Right), "margin margin--right");
}

#[test]
fn margins_visible_without_context() {
    let owner = Owner::new();
    owner.set();
    assert!(margins_visible()());
}

#[test]
fn margins_follow_ui_state_context() {
    let owner = Owner::new();
    owner.set();
    let ui = RwSignal::new(UiState::default());
    provide_context(ui);
    let visible = margins_visible();
    assert!(visible());
    ui.update(|u| u.margins_visible = false);
    assert!(!visible());
}
