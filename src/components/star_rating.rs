//! Impact rating shown as a fixed row of stars.

#[cfg(test)]
#[path = "star_rating_test.rs"]
mod star_rating_test;

use leptos::prelude::*;

/// Highest impact a deck can be rated.
pub const MAX_IMPACT: u8 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarFill {
    Full,
    Empty,
}

impl StarFill {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Full => "★",
            Self::Empty => "☆",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Full => "impact__star impact__star--full",
            Self::Empty => "impact__star impact__star--empty",
        }
    }
}

/// Exactly `max` stars, the first `value` of them filled. Values above
/// `max` are clamped.
pub fn star_fills(value: u8, max: u8) -> Vec<StarFill> {
    let filled = value.min(max);
    (0..max)
        .map(|i| if i < filled { StarFill::Full } else { StarFill::Empty })
        .collect()
}

/// Rating after clicking star `clicked` (1-based). Clicking the current
/// rating clears it.
pub fn next_rating(current: u8, clicked: u8) -> u8 {
    let clicked = clicked.min(MAX_IMPACT);
    if clicked == current.min(MAX_IMPACT) { 0 } else { clicked }
}

pub fn impact_title(value: u8) -> String {
    match value.min(MAX_IMPACT) {
        0 => "No impact rating".to_owned(),
        1 => "Impact: 1 star".to_owned(),
        n => format!("Impact: {n} stars"),
    }
}

/// Read-only impact display.
#[component]
pub fn ImpactStars(#[prop(into)] impact: Signal<u8>) -> impl IntoView {
    view! {
        <span class="impact" title=move || impact_title(impact.get())>
            {move || {
                star_fills(impact.get(), MAX_IMPACT)
                    .into_iter()
                    .map(|fill| view! { <span class=fill.class()>{fill.glyph()}</span> })
                    .collect_view()
            }}
        </span>
    }
}

/// Clickable impact rating bound to `value`.
#[component]
pub fn ImpactInput(value: RwSignal<u8>) -> impl IntoView {
    view! {
        <span class="impact impact--input" role="radiogroup" aria-label="Impact">
            {move || {
                let current = value.get();
                star_fills(current, MAX_IMPACT)
                    .into_iter()
                    .zip(1..=MAX_IMPACT)
                    .map(|(fill, position)| {
                        let checked = if position == current { "true" } else { "false" };
                        view! {
                            <button
                                class=fill.class()
                                role="radio"
                                aria-checked=checked
                                title=impact_title(position)
                                on:click=move |_| value.update(|v| *v = next_rating(*v, position))
                            >
                                {fill.glyph()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </span>
    }
}
