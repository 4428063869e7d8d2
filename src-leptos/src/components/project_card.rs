//! Expandable venture card

use leptos::prelude::*;
use portfolio_types::VentureEntry;

use super::card_view::{CardSummary, CardView, DetailPanel};
use super::glyphs::{self, GlyphIcon};
use super::{IconTile, Reveal, RevealViewport};
use crate::motion;
use crate::state::CardExpansion;

/// One venture, collapsed to its summary row until clicked.
///
/// The expansion flag lives in this instance only and starts collapsed on
/// every mount.
#[component]
pub fn ProjectCard(entry: VentureEntry) -> impl IntoView {
    let state = RwSignal::new(CardExpansion::new());
    let CardSummary { icon, title: heading, hint } = CardView::summary(&entry);
    let icon_alt = heading.clone();
    let detail = CardView::detail_panel(&entry);
    let title = entry.title.clone();
    let card = Memo::new(move |_| CardView::render(&entry, state.get()));
    let expanded = Signal::derive(move || card.get().detail.is_some());

    let toggle = move |_: leptos::ev::MouseEvent| {
        state.update(CardExpansion::toggle);
        log::debug!("Card '{}' expanded={}", title, state.get_untracked().is_expanded());
    };

    view! {
        <Reveal class="project-card" viewport=RevealViewport::Card>
            <div class="project-card__glow"></div>
            <div class="project-card__body">
                <div class="project-card__summary" on:click=toggle>
                    <div class="project-card__heading">
                        <IconTile icon=icon title=icon_alt />
                        <div>
                            <h3 class="project-card__title">{heading}</h3>
                            <p class="project-card__hint">{hint}</p>
                        </div>
                    </div>
                    <div
                        class="project-card__chevron"
                        style=move || {
                            format!(
                                "transform: rotate({}deg); {}",
                                card.get().chevron_degrees,
                                motion::CARD.style(&["transform"]),
                            )
                        }
                    >
                        <GlyphIcon glyph=glyphs::CHEVRON_DOWN />
                    </div>
                </div>
                <AnimatedShow
                    when=expanded
                    show_class="project-card__panel project-card__panel--open"
                    hide_class="project-card__panel project-card__panel--closing"
                    hide_delay=motion::CARD.duration()
                >
                    <CardDetail detail=detail.clone() />
                </AnimatedShow>
            </div>
        </Reveal>
    }
}

#[component]
fn CardDetail(detail: DetailPanel) -> impl IntoView {
    let DetailPanel { description, link, cta } = detail;

    view! {
        <div class="project-card__detail" style=motion::CARD.animation_style()>
            <div class="project-card__detail-inner">
                <p class="project-card__description">{description}</p>
                <a
                    href=link.href.clone()
                    target=link.target()
                    rel=link.rel()
                    class="project-card__cta"
                >
                    {cta}
                    <GlyphIcon glyph=glyphs::EXTERNAL_LINK class="glyph--small" />
                </a>
            </div>
        </div>
    }
}
