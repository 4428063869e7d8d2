//! Page footer

use leptos::prelude::*;

use crate::formatters::{copyright_line, current_year};

#[component]
pub fn Footer(#[prop(into)] holder: String) -> impl IntoView {
    view! {
        <footer class="footer">
            <p>{copyright_line(current_year(), &holder)}</p>
        </footer>
    }
}
