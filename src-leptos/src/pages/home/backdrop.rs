//! Fixed background: blurred glows and the star field

use leptos::prelude::*;

use crate::components::StarField;

#[component]
pub fn Backdrop() -> impl IntoView {
    view! {
        <div class="backdrop" aria-hidden="true">
            <div class="backdrop__glow backdrop__glow--top"></div>
            <div class="backdrop__glow backdrop__glow--right"></div>
            <div class="backdrop__glow backdrop__glow--left"></div>
        </div>
        <StarField />
    }
}
