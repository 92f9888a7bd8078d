//! Shared vocabulary for decks and the references between them.
//!
//! DESIGN
//! ======
//! Serialized names match the backend's `snake_case` tags so these enums can
//! be embedded directly in response payloads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Kind of deck a page or link points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckKind {
    Article,
    Person,
    Idea,
    Timeline,
    Quote,
    Dialogue,
}

impl DeckKind {
    /// URL path segment used by both page routes and API endpoints.
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Article => "articles",
            Self::Person => "people",
            Self::Idea => "ideas",
            Self::Timeline => "timelines",
            Self::Quote => "quotes",
            Self::Dialogue => "dialogues",
        }
    }

    /// Lowercase singular name, used for CSS modifiers and labels.
    pub fn name(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Person => "person",
            Self::Idea => "idea",
            Self::Timeline => "timeline",
            Self::Quote => "quote",
            Self::Dialogue => "dialogue",
        }
    }
}

/// How a note refers to another deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefKind {
    #[default]
    Ref,
    RefToParent,
    RefToChild,
    RefInContrast,
    RefCritical,
}

impl RefKind {
    /// Short margin glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Ref => "→",
            Self::RefToParent => "↑",
            Self::RefToChild => "↓",
            Self::RefInContrast => "⇄",
            Self::RefCritical => "!",
        }
    }

    /// Human-readable label for tooltips and screen readers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ref => "Generic reference",
            Self::RefToParent => "Reference to a broader concept",
            Self::RefToChild => "Reference to a narrower concept",
            Self::RefInContrast => "Reference in contrast",
            Self::RefCritical => "Critical reference",
        }
    }

    /// CSS modifier, e.g. `ref-to-parent`.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Ref => "ref",
            Self::RefToParent => "ref-to-parent",
            Self::RefToChild => "ref-to-child",
            Self::RefInContrast => "ref-in-contrast",
            Self::RefCritical => "ref-critical",
        }
    }
}
