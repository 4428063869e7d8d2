//! Data wiring for the home page

use portfolio_types::{SiteContent, VentureEntry};

use crate::components::SocialButtonView;

/// Keyed, ordered sequences the home page renders.
///
/// Ventures are keyed by title and social buttons by label; both keep the
/// input order, which is the display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeLayout {
    pub ventures: Vec<VentureEntry>,
    pub socials: Vec<SocialButtonView>,
}

impl HomeLayout {
    pub fn new(content: &SiteContent) -> Self {
        Self {
            ventures: content.ventures.clone(),
            socials: content.socials.iter().map(SocialButtonView::from).collect(),
        }
    }

    pub fn venture_key(entry: &VentureEntry) -> String {
        entry.title.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use crate::components::CardView;
    use crate::state::CardExpansion;

    #[test]
    fn test_four_socials_give_four_buttons_in_order() {
        let layout = HomeLayout::new(&SiteContent::default());
        let keys: Vec<String> = layout.socials.iter().map(SocialButtonView::key).collect();
        assert_eq!(keys, ["LinkedIn", "X (Twitter)", "GitHub", "Substack"]);
    }

    #[test]
    fn test_one_card_per_venture_in_order() {
        let layout = HomeLayout::new(&SiteContent::default());
        let keys: Vec<String> = layout.ventures.iter().map(HomeLayout::venture_key).collect();
        assert_eq!(keys, ["Nexus VC", "Concord Wallet", "BlackBird Protocol"]);
    }

    #[test]
    fn test_keys_are_unique() {
        let layout = HomeLayout::new(&SiteContent::default());
        let ventures: HashSet<_> = layout.ventures.iter().map(HomeLayout::venture_key).collect();
        let socials: HashSet<_> = layout.socials.iter().map(SocialButtonView::key).collect();
        assert_eq!(ventures.len(), layout.ventures.len());
        assert_eq!(socials.len(), layout.socials.len());
    }

    #[test]
    fn test_all_rendered_links_are_outbound() {
        let layout = HomeLayout::new(&SiteContent::default());

        let mut expanded = CardExpansion::new();
        expanded.toggle();
        let venture_links = layout
            .ventures
            .iter()
            .filter_map(|entry| CardView::render(entry, expanded).detail)
            .map(|detail| detail.link);
        let social_links = layout.socials.iter().map(|button| button.link.clone());

        let links: Vec<_> = venture_links.chain(social_links).collect();
        assert_eq!(links.len(), 7);
        assert_eq!(links[0].href, "https://a16z.com");
        for link in links {
            assert_eq!(link.target(), "_blank", "{}", link.href);
            assert_eq!(link.rel(), "noopener noreferrer", "{}", link.href);
        }
    }
}
