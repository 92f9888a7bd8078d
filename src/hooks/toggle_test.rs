use super::*;

#[test]
fn use_toggle_starts_with_initial_value() {
    let owner = Owner::new();
    owner.set();
    assert!(use_toggle(true).signal().get_untracked());
    assert!(!use_toggle(false).signal().get_untracked());
}

#[test]
fn toggle_flips_value() {
    let owner = Owner::new();
    owner.set();
    let handle = use_toggle(false);
    handle.toggle();
    assert!(handle.get_untracked());
    handle.toggle();
    assert!(!handle.get_untracked());
}

#[test]
fn set_overrides_value() {
    let owner = Owner::new();
    owner.set();
    let handle = use_toggle(false);
    handle.set(true);
    handle.set(true);
    assert!(handle.get_untracked());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn stored_or_default_falls_back_without_browser() {
    assert!(stored_or_default("margins", true));
    assert!(!stored_or_default("margins", false));
}
