//! Pure view model of a venture card
//!
//! `CardView::render` is the whole of the card's rendering logic: the
//! `ProjectCard` component only maps this struct to markup, re-running it
//! whenever the card's expansion flag changes. The panel is mounted while
//! `detail` is `Some` and its content is `CardView::detail_panel`.

use portfolio_types::{IconSource, OutboundLink, VentureEntry};

use crate::state::CardExpansion;

/// Helper text under the card title.
pub const SUMMARY_HINT: &str = "Click to learn more";
/// Label of the outbound button in the detail panel.
pub const DETAIL_CTA: &str = "Visit Website";

/// Always-visible row: icon, title and hint. The click target for toggling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSummary {
    pub icon: IconSource,
    pub title: String,
    pub hint: &'static str,
}

/// Content shown only while the card is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub description: String,
    pub link: OutboundLink,
    pub cta: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub summary: CardSummary,
    pub chevron_degrees: u16,
    /// `Some` iff the card is expanded
    pub detail: Option<DetailPanel>,
}

impl CardView {
    pub fn render(entry: &VentureEntry, state: CardExpansion) -> Self {
        Self {
            summary: Self::summary(entry),
            chevron_degrees: state.chevron_degrees(),
            detail: state.is_expanded().then(|| Self::detail_panel(entry)),
        }
    }

    pub fn detail_panel(entry: &VentureEntry) -> DetailPanel {
        DetailPanel {
            description: entry.description.clone(),
            link: entry.outbound_link(),
            cta: DETAIL_CTA,
        }
    }

    pub fn summary(entry: &VentureEntry) -> CardSummary {
        CardSummary { icon: entry.icon_source(), title: entry.title.clone(), hint: SUMMARY_HINT }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const NEXUS_DESCRIPTION: &str = "A venture capital firm focused on early-stage investments.";
    const CONCORD_LOGO: &str = "https://cdn.example.com/public/e6dfb04db_concordlogo.png";

    fn nexus() -> VentureEntry {
        VentureEntry::new("Nexus VC", NEXUS_DESCRIPTION, "https://a16z.com", "N")
    }

    fn concord() -> VentureEntry {
        VentureEntry::new("Concord Wallet", "Wallet.", "https://www.concordx.ai", CONCORD_LOGO)
    }

    fn after_toggles(entry: &VentureEntry, n: usize) -> CardView {
        let mut state = CardExpansion::new();
        for _ in 0..n {
            state.toggle();
        }
        CardView::render(entry, state)
    }

    #[test]
    fn test_collapsed_card_hides_description() {
        let view = after_toggles(&nexus(), 0);
        assert_eq!(view.summary.icon, IconSource::Badge("N".to_string()));
        assert!(view.detail.is_none());
        assert_eq!(view.summary.title, "Nexus VC");
        assert_eq!(view.summary.hint, SUMMARY_HINT);
        assert_eq!(view.chevron_degrees, 0);
    }

    #[test]
    fn test_one_toggle_shows_description_and_link() {
        let view = after_toggles(&nexus(), 1);
        let detail = view.detail.as_ref().unwrap();
        assert_eq!(detail.description, NEXUS_DESCRIPTION);
        assert_eq!(detail.link.href, "https://a16z.com");
        assert_eq!(detail.cta, DETAIL_CTA);
        assert_eq!(*detail, CardView::detail_panel(&nexus()));
        assert_eq!(view.chevron_degrees, 180);
    }

    #[test]
    fn test_two_toggles_collapse_again() {
        let view = after_toggles(&nexus(), 2);
        assert!(view.detail.is_none());
        assert_eq!(view, after_toggles(&nexus(), 0));
    }

    #[test]
    fn test_detail_present_iff_expanded() {
        for n in 0..8 {
            let view = after_toggles(&nexus(), n);
            assert_eq!(view.detail.is_some(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn test_image_icon_has_no_badge() {
        let view = after_toggles(&concord(), 0);
        assert_eq!(view.summary.icon, IconSource::Image(CONCORD_LOGO.to_string()));
        assert!(!matches!(view.summary.icon, IconSource::Badge(_)));
    }

    #[test]
    fn test_detail_link_is_outbound() {
        let view = after_toggles(&concord(), 1);
        let link = view.detail.unwrap().link;
        assert_eq!(link.href, "https://www.concordx.ai");
        assert_eq!(link.target(), "_blank");
        assert_eq!(link.rel(), "noopener noreferrer");
    }

    #[test]
    fn test_summary_is_independent_of_state() {
        assert_eq!(after_toggles(&nexus(), 0).summary, after_toggles(&nexus(), 1).summary);
    }
}
