//! Built-in page content, compiled into the bundle.

use super::{SectionCopy, SiteContent};
use crate::models::{Profile, SocialEntry, SocialIcon, VentureEntry};

const ASSET_BASE: &str =
    "https://qtrypzzcjebvfcihiynt.supabase.co/storage/v1/object/public/base44-prod/public/69508b18de85ab348da9315c";

const BIO: &str = "Passionate about building scalable and transformative technology primarily at the \
intersection of web3 and finance. I am an individualist, stoic, pragmatician, liberatarian, and \
freedom maxxer. I am interested in building projects in web3 that are philisophically aligned with \
sovereign, efficient, democratized, and secure values. I am interested in history, all things \
blockchain/web3, health + fitness especially as it relates to biohacking/health tech. and privacy \
technology. I am currently advisor to a specialized investment platform, Nexus VC, as well as the \
founder of Concord Systems, a full-service smart custody platform for Crypto seeking IRA’s, and \
cofounder of BlackBird Protocol, a novel ZK ethereum rollup that addresses issues previously ignored \
by other ZK chains that improves scalability, efficiency and security. If you are working in \
crypto/privacy I am always open to collaboration. Michigan Wolverine… Go Blue!";

pub(super) fn site_content() -> SiteContent {
    SiteContent {
        profile: Profile {
            name: "David Monroe Rashid".to_string(),
            roles: ["Builder", "Founder", "Investor", "Advisor"]
                .iter()
                .map(|r| r.to_string())
                .collect(),
            bio: BIO.to_string(),
            photo_url: format!("{ASSET_BASE}/b92661444_IMG_3317.png"),
            photo_alt: "Profile".to_string(),
        },
        ventures_section: SectionCopy::new(
            "Ventures & Projects",
            "A collection of companies and protocols I've helped build and launch.",
        ),
        ventures: ventures(),
        socials_section: SectionCopy::new("Let's Connect", "Find me across the internet"),
        socials: socials(),
        copyright_holder: "David Rashid".to_string(),
    }
}

fn ventures() -> Vec<VentureEntry> {
    vec![
        VentureEntry::new(
            "Nexus VC",
            "A venture capital firm focused on early-stage investments in emerging technology \
             sectors. Nexus VC partners with visionary founders building transformative solutions \
             across AI, blockchain, and deep tech.",
            "https://a16z.com",
            "N",
        ),
        VentureEntry::new(
            "Concord Wallet",
            "A next-generation digital wallet designed for seamless cryptocurrency management. \
             Concord Wallet combines institutional-grade security with an intuitive user \
             experience for both retail and professional users.",
            "https://www.concordx.ai",
            format!("{ASSET_BASE}/e6dfb04db_concordlogo.png"),
        ),
        VentureEntry::new(
            "BlackBird Protocol",
            "A decentralized protocol enabling secure, private transactions across multiple \
             blockchain networks. BlackBird Protocol leverages cutting-edge cryptography to \
             ensure data integrity and user privacy.",
            "https://ethereum.org",
            "B",
        ),
    ]
}

fn socials() -> Vec<SocialEntry> {
    vec![
        SocialEntry::new(
            "https://www.linkedin.com/in/david2003august22",
            SocialIcon::LinkedIn,
            "LinkedIn",
        ),
        SocialEntry::new("https://x.com/domarementem", SocialIcon::X, "X (Twitter)"),
        SocialEntry::new("https://github.com", SocialIcon::GitHub, "GitHub"),
        SocialEntry::new("https://substack.com/@davidmrashid", SocialIcon::Substack, "Substack"),
    ]
}
