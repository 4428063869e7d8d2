//! Motion presets
//!
//! The page animates through CSS transitions and keyframe animations; this
//! module describes their timing as data (duration, delay, easing) so every
//! component, and the keyframes named in the stylesheet, use the same values.

use std::time::Duration;

/// Timing curve of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Fast start, long settle: `cubic-bezier(0.16, 1, 0.3, 1)`
    OutExpo,
    EaseInOut,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::OutExpo => "cubic-bezier(0.16, 1, 0.3, 1)",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// Duration, delay and easing applied to a set of properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration_ms: u32, easing: Easing) -> Self {
        Self { duration_ms, delay_ms: 0, easing }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// CSS `transition` value animating each of `properties`.
    pub fn css(&self, properties: &[&str]) -> String {
        properties
            .iter()
            .map(|property| {
                if self.delay_ms == 0 {
                    format!("{} {}ms {}", property, self.duration_ms, self.easing.css())
                } else {
                    format!(
                        "{} {}ms {} {}ms",
                        property,
                        self.duration_ms,
                        self.easing.css(),
                        self.delay_ms
                    )
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.duration_ms))
    }

    /// Inline timing for a keyframe animation whose name comes from CSS.
    pub fn animation_style(&self) -> String {
        format!(
            "animation-duration: {}ms; animation-timing-function: {}; animation-delay: {}ms;",
            self.duration_ms,
            self.easing.css(),
            self.delay_ms
        )
    }

    /// Full inline `style` declaration for `properties`.
    pub fn style(&self, properties: &[&str]) -> String {
        format!("transition: {}; will-change: {};", self.css(properties), properties.join(", "))
    }
}

/// Chevron rotation, and detail panel open/close (kept mounted for the
/// duration of the close animation).
pub const CARD: Transition = Transition::new(300, Easing::OutExpo);
/// Section and card entrance when scrolled into view.
pub const REVEAL: Transition = Transition::new(500, Easing::OutExpo);
pub const HERO_PHOTO: Transition = Transition::new(700, Easing::OutExpo);
pub const HERO_TEXT: Transition = Transition::new(700, Easing::OutExpo).delayed(200);
pub const SOCIAL_ROW: Transition = Transition::new(500, Easing::OutExpo).delayed(100);
pub const SCROLL_HINT: Transition = Transition::new(1000, Easing::OutExpo).delayed(1000);
/// One cycle of the scroll hint's looping bob.
pub const SCROLL_BOB: Transition = Transition::new(2000, Easing::EaseInOut);
