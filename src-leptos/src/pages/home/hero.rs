//! Hero section: photo, name, tagline, bio and scroll hint

use leptos::prelude::*;
use portfolio_types::Profile;

use crate::components::{Reveal, RevealEffect};
use crate::motion;

#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    let tagline = profile.tagline();
    let Profile { name, bio, photo_url, photo_alt, .. } = profile;

    view! {
        <section class="hero">
            <Reveal class="hero__photo" effect=RevealEffect::Grow transition=motion::HERO_PHOTO>
                <div class="hero__photo-glow"></div>
                <div class="hero__photo-frame">
                    <img src=photo_url alt=photo_alt />
                </div>
            </Reveal>

            <Reveal class="hero__intro" transition=motion::HERO_TEXT>
                <h1 class="hero__name">
                    <span>{name}</span>
                </h1>
                <div class="hero__tagline">
                    <div class="hero__pulse"></div>
                    <span>{tagline}</span>
                </div>
                <p class="hero__bio">{bio}</p>
            </Reveal>

            <Reveal class="hero__scroll-hint" effect=RevealEffect::Fade transition=motion::SCROLL_HINT>
                <div class="scroll-hint" style=motion::SCROLL_BOB.animation_style()>
                    <div class="scroll-hint__dot"></div>
                </div>
            </Reveal>
        </section>
    }
}
