use super::*;

// =============================================================
// DeckKind
// =============================================================

#[test]
fn deck_kind_path_segments_are_plural() {
    assert_eq!(DeckKind::Article.path_segment(), "articles");
    assert_eq!(DeckKind::Person.path_segment(), "people");
    assert_eq!(DeckKind::Idea.path_segment(), "ideas");
    assert_eq!(DeckKind::Timeline.path_segment(), "timelines");
    assert_eq!(DeckKind::Quote.path_segment(), "quotes");
    assert_eq!(DeckKind::Dialogue.path_segment(), "dialogues");
}

#[test]
fn deck_kind_serializes_snake_case() {
    assert_eq!(serde_json::to_value(DeckKind::Person).unwrap(), serde_json::json!("person"));
    let kind: DeckKind = serde_json::from_value(serde_json::json!("timeline")).unwrap();
    assert_eq!(kind, DeckKind::Timeline);
}

#[test]
fn deck_kind_rejects_unknown_tag() {
    assert!(serde_json::from_value::<DeckKind>(serde_json::json!("podcast")).is_err());
}

// =============================================================
// RefKind
// =============================================================

#[test]
fn ref_kind_default_is_generic_ref() {
    assert_eq!(RefKind::default(), RefKind::Ref);
}

#[test]
fn ref_kind_serializes_snake_case() {
    assert_eq!(
        serde_json::to_value(RefKind::RefInContrast).unwrap(),
        serde_json::json!("ref_in_contrast")
    );
}

#[test]
fn ref_kind_glyphs_are_distinct() {
    let kinds = [
        RefKind::Ref,
        RefKind::RefToParent,
        RefKind::RefToChild,
        RefKind::RefInContrast,
        RefKind::RefCritical,
    ];
    for (i, a) in kinds.iter().enumerate() {
        for (j, b) in kinds.iter().enumerate() {
            if i != j {
                assert_ne!(a.glyph(), b.glyph());
                assert_ne!(a.css_modifier(), b.css_modifier());
            }
        }
    }
}
