//! Viewport-entry animation wrapper

use leptos::html::Div;
use leptos::prelude::*;
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::motion::{self, Transition};

/// Entrance effect applied when the wrapper first becomes visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealEffect {
    /// Fade in while rising a few pixels
    #[default]
    Rise,
    /// Fade in while growing from 90% scale
    Grow,
    Fade,
}

impl RevealEffect {
    pub fn class(&self) -> &'static str {
        match self {
            RevealEffect::Rise => "reveal--rise",
            RevealEffect::Grow => "reveal--grow",
            RevealEffect::Fade => "reveal--fade",
        }
    }
}

/// How far inside the viewport the wrapper must be before it plays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealViewport {
    /// Plays as soon as any pixel is visible
    #[default]
    Edge,
    /// 50px inside the viewport; used by venture cards
    Card,
    /// 100px inside the viewport; used by section headers and rows
    Section,
}

impl RevealViewport {
    /// `rootMargin` handed to the intersection observer.
    pub fn root_margin(&self) -> &'static str {
        match self {
            RevealViewport::Edge => "0px",
            RevealViewport::Card => "-50px",
            RevealViewport::Section => "-100px",
        }
    }
}

/// Plays its entrance transition once, the first time any part of it
/// intersects the viewport. Scrolling away does not replay it, and the
/// observer is stopped once it has played.
#[component]
pub fn Reveal(
    /// Additional CSS class
    #[prop(optional, into)]
    class: String,
    #[prop(optional)] effect: RevealEffect,
    #[prop(optional)] viewport: RevealViewport,
    /// Defaults to `motion::REVEAL`
    #[prop(optional)]
    transition: Option<Transition>,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let revealed = RwSignal::new(false);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::<web_sys::Element, web_sys::Element>::default()
            .root_margin(viewport.root_margin()),
    );

    Effect::new(move |_| {
        if revealed.get() {
            stop();
        }
    });

    let style = transition.unwrap_or(motion::REVEAL).style(&["opacity", "transform"]);

    view! {
        <div
            node_ref=target
            class=move || {
                let state = if revealed.get() { "reveal--visible" } else { "" };
                format!("reveal {} {} {}", effect.class(), state, class)
            }
            style=style
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_margins() {
        assert_eq!(RevealViewport::default().root_margin(), "0px");
        assert_eq!(RevealViewport::Card.root_margin(), "-50px");
        assert_eq!(RevealViewport::Section.root_margin(), "-100px");
    }

    #[test]
    fn test_effect_classes() {
        assert_eq!(RevealEffect::default().class(), "reveal--rise");
        assert_eq!(RevealEffect::Grow.class(), "reveal--grow");
        assert_eq!(RevealEffect::Fade.class(), "reveal--fade");
    }
}
