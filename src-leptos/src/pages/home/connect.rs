//! Social links section

use leptos::prelude::*;
use portfolio_types::SectionCopy;

use crate::components::{Reveal, RevealViewport, SocialButton, SocialButtonView};
use crate::motion;

#[component]
pub fn Connect(copy: SectionCopy, buttons: Vec<SocialButtonView>) -> impl IntoView {
    view! {
        <section class="section section--connect">
            <div class="section__inner">
                <Reveal class="section__header" viewport=RevealViewport::Section>
                    <h2 class="section__title">{copy.title}</h2>
                    <p class="section__subtitle">{copy.subtitle}</p>
                </Reveal>

                <Reveal
                    class="socials"
                    viewport=RevealViewport::Section
                    transition=motion::SOCIAL_ROW
                >
                    <For
                        each=move || buttons.clone()
                        key=SocialButtonView::key
                        children=move |button: SocialButtonView| {
                            view! { <SocialButton button=button /> }
                        }
                    />
                </Reveal>
            </div>
        </section>
    }
}
