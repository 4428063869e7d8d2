//! Ventures section

use leptos::prelude::*;
use portfolio_types::{SectionCopy, VentureEntry};

use super::layout::HomeLayout;
use crate::components::{ProjectCard, Reveal, RevealViewport};

#[component]
pub fn Ventures(copy: SectionCopy, entries: Vec<VentureEntry>) -> impl IntoView {
    view! {
        <section class="section section--ventures">
            <Reveal class="section__header" viewport=RevealViewport::Section>
                <h2 class="section__title">{copy.title}</h2>
                <p class="section__subtitle">{copy.subtitle}</p>
            </Reveal>

            <div class="ventures">
                <For
                    each=move || entries.clone()
                    key=HomeLayout::venture_key
                    children=move |entry: VentureEntry| view! { <ProjectCard entry=entry /> }
                />
            </div>
        </section>
    }
}
