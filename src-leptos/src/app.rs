//! Main App component with routing

use crate::pages::Home;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use portfolio_types::SiteContent;

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let content = SiteContent::default();
    // Built-in content is checked once; a bad entry still renders.
    if let Err(err) = content.validate_content() {
        log::warn!("Site content failed validation: {}", err);
    }

    let title = content.profile.name.clone();
    let description = content.profile.tagline();
    provide_context(content);

    view! {
        <Title text=title />
        <Meta name="description" content=description />
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <Home /> }>
                    <Route path=path!("/") view=Home />
                </Routes>
            </main>
        </Router>
    }
}
