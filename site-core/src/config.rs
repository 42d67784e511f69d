//! Site configuration.
//!
//! Ships embedded as `content/site.toml`. Every section is optional; missing
//! keys fall back to the values the site launched with.

use crate::SiteError;
use crate::carousel::CarouselConfig;
use crate::metadata::PageMeta;
use crate::relay::RelayConfig;
use serde::Deserialize;

/// Raw TOML compiled into the binary.
pub const EMBEDDED_SITE_TOML: &str = include_str!("../content/site.toml");

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteIdentity,
    pub relay: RelayConfig,
    pub carousel: CarouselConfig,
    pub pages: Pages,
    pub contact: ContactDetails,
}

/// Brand strings shared by every page's head tags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteIdentity {
    pub name: String,
    /// Twitter/X handle including the `@`.
    pub twitter_handle: String,
    /// Social preview image, relative to the page origin.
    pub og_image_path: String,
}

impl Default for SiteIdentity {
    fn default() -> Self {
        Self {
            name: "Touchstone Digital Solutions".into(),
            twitter_handle: "@touchstone_ds".into(),
            og_image_path: "/og-image.jpg".into(),
        }
    }
}

/// Head metadata per routed page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pages {
    pub home: PageMeta,
    pub contact: PageMeta,
}

impl Default for Pages {
    fn default() -> Self {
        Self {
            home: PageMeta {
                title: "Touchstone Digital Solutions - Interactive Digital Halls of Fame".into(),
                description: "Transform how you celebrate achievement with Touchstone Digital \
                              Solutions' interactive digital Halls of Fame for schools, teams, \
                              and communities."
                    .into(),
                path: "/".into(),
            },
            contact: PageMeta {
                title: "Contact Us | Touchstone Digital Solutions".into(),
                description: "Get in touch with the Touchstone team to discuss your digital \
                              recognition system needs, request a demo, or learn more about our \
                              services."
                    .into(),
                path: "/contact/".into(),
            },
        }
    }
}

/// Reachability details shown on the contact page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    pub email: String,
    /// Phone number as printed, e.g. `(603) 361-7541`.
    pub phone_display: String,
    pub location: Vec<String>,
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            email: "info@touchstone-ds.com".into(),
            phone_display: "(603) 361-7541".into(),
            location: vec![
                "Bedford, NH".into(),
                "United States".into(),
                "New Hampshire".into(),
            ],
        }
    }
}

impl ContactDetails {
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link built from the digits of [`Self::phone_display`].
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone_display
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

impl SiteConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, SiteError> {
        let config: Self = toml::from_str(content)?;
        config.carousel.validate()?;
        Ok(config)
    }

    /// Load the embedded config.
    /// Returns default config if it is invalid.
    pub fn embedded() -> Self {
        match Self::from_toml_str(EMBEDDED_SITE_TOML) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "embedded site.toml rejected, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_parses() {
        let config = SiteConfig::from_toml_str(EMBEDDED_SITE_TOML).expect("embedded toml");
        assert_eq!(config.site.name, "Touchstone Digital Solutions");
        assert_eq!(config.pages.contact.path, "/contact/");
        assert_eq!(config.carousel.visible_count, 3);
    }

    #[test]
    fn embedded_matches_defaults() {
        assert_eq!(SiteConfig::embedded(), SiteConfig::default());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
[carousel]
pause_on_auto_advance = false

[relay]
endpoint = "https://relay.example/form"
"#,
        )
        .expect("partial toml");

        assert!(!config.carousel.pause_on_auto_advance);
        assert_eq!(config.carousel.auto_advance_ms, 5_000);
        assert_eq!(config.relay.endpoint, "https://relay.example/form");
        assert_eq!(config.relay.template, "table");
        assert_eq!(config.site, SiteIdentity::default());
    }

    #[test]
    fn malformed_config_is_an_error() {
        let err = SiteConfig::from_toml_str("[carousel]\nauto_advance_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn zero_carousel_settings_are_rejected() {
        for key in ["visible_count", "auto_advance_ms", "resume_after_ms"] {
            let toml = format!("[carousel]\n{key} = 0\npause_on_auto_advance = false");
            let err = SiteConfig::from_toml_str(&toml).unwrap_err();
            match err {
                SiteError::ZeroSetting { key: rejected } => {
                    assert_eq!(rejected, format!("carousel.{key}"));
                }
                other => panic!("unexpected error for {key}: {other}"),
            }
        }
    }

    #[test]
    fn accepted_config_always_lets_the_timeline_settle() {
        use crate::carousel::Carousel;
        use crate::timeline::Timeline;
        use std::time::Duration;

        let config = SiteConfig::from_toml_str(
            "[carousel]\nauto_advance_ms = 1\npause_on_auto_advance = false",
        )
        .expect("one millisecond is a valid period");
        let mut carousel = Carousel::new(6, config.carousel);
        let mut timeline = Timeline::mount(&carousel);

        timeline.advance(&mut carousel, Duration::from_secs(1));
        assert_eq!(timeline.now(), Duration::from_secs(1));
        // 1000 ticks over a 4-position cycle
        assert_eq!(carousel.start_index(), 0);
    }

    #[test]
    fn phone_href_strips_formatting() {
        assert_eq!(ContactDetails::default().phone_href(), "tel:6033617541");
        assert_eq!(
            ContactDetails::default().mailto_href(),
            "mailto:info@touchstone-ds.com"
        );
    }
}
