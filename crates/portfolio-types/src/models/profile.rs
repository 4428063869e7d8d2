//! Hero profile model.

use serde::{Deserialize, Serialize};

/// Person shown in the hero section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Full display name
    pub name: String,
    /// Roles shown under the name
    pub roles: Vec<String>,
    /// Free-form biography paragraph
    pub bio: String,
    /// Profile photo URL
    pub photo_url: String,
    /// Alternate text for the photo
    #[serde(default = "default_photo_alt")]
    pub photo_alt: String,
}

impl Profile {
    /// Roles joined into the one-line tagline ("Builder • Founder").
    pub fn tagline(&self) -> String {
        self.roles.join(" • ")
    }
}

fn default_photo_alt() -> String {
    "Profile".to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tagline_joins_roles() {
        let profile = Profile {
            name: "Jane".to_string(),
            roles: vec!["Builder".to_string(), "Founder".to_string()],
            bio: String::new(),
            photo_url: String::new(),
            photo_alt: default_photo_alt(),
        };
        assert_eq!(profile.tagline(), "Builder • Founder");
    }

    #[test]
    fn test_missing_photo_alt_defaults() {
        let json = r#"{"name":"Jane","roles":[],"bio":"","photo_url":""}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.photo_alt, "Profile");
        assert_eq!(profile.tagline(), "");
    }
}
