//! Decorative star field

use leptos::prelude::*;

use crate::stars::{self, STAR_COUNT};

/// Low-opacity dots scattered once per mount. Re-renders of the parent do
/// not move them because the component body only runs on mount.
#[component]
pub fn StarField() -> impl IntoView {
    let stars = stars::scatter(&mut rand::thread_rng(), STAR_COUNT);

    view! {
        <div class="star-field" aria-hidden="true">
            {stars
                .into_iter()
                .map(|star| view! { <div class="star-field__star" style=star.style()></div> })
                .collect_view()}
        </div>
    }
}
