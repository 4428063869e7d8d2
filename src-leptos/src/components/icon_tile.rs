//! Venture icon tile

use leptos::prelude::*;
use portfolio_types::IconSource;

/// Text shown when an image icon fails to load.
pub fn fallback_badge(title: &str) -> String {
    title
        .chars()
        .find(|c| !c.is_whitespace())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Fixed-size square showing either an image or a text badge.
#[component]
pub fn IconTile(icon: IconSource, #[prop(into)] title: String) -> impl IntoView {
    match icon {
        IconSource::Badge(text) => view! {
            <div class="icon-tile icon-tile--badge">{text}</div>
        }
        .into_any(),
        IconSource::Image(src) => {
            let broken = RwSignal::new(false);
            let fallback = fallback_badge(&title);

            view! {
                <div class=move || {
                    if broken.get() { "icon-tile icon-tile--badge" } else { "icon-tile icon-tile--image" }
                }>
                    {move || {
                        if broken.get() {
                            return fallback.clone().into_any();
                        }
                        let src_attr = src.clone();
                        let src_log = src.clone();
                        view! {
                            <img
                                src=src_attr
                                alt=title.clone()
                                on:error=move |_| {
                                    log::warn!("Icon failed to load: {}", src_log);
                                    broken.set(true);
                                }
                            />
                        }
                        .into_any()
                    }}
                </div>
            }
            .into_any()
        }
    }
}
