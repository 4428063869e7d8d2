//! Home page: the whole site

mod backdrop;
mod connect;
mod footer;
mod hero;
mod layout;
mod ventures;

use backdrop::Backdrop;
use connect::Connect;
use footer::Footer;
use hero::Hero;
use ventures::Ventures;

pub use layout::HomeLayout;

use leptos::prelude::*;
use portfolio_types::SiteContent;

/// Assembles the page from the site content in context.
///
/// Stateless: every interactive bit lives inside the cards it renders.
#[component]
pub fn Home() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let HomeLayout { ventures, socials } = HomeLayout::new(&content);

    view! {
        <div class="page">
            <Backdrop />
            <div class="page__content">
                <Hero profile=content.profile.clone() />
                <Ventures copy=content.ventures_section.clone() entries=ventures />
                <Connect copy=content.socials_section.clone() buttons=socials />
                <Footer holder=content.copyright_holder.clone() />
            </div>
        </div>
    }
}
