//! Document head tags per page.

use crate::config::SiteIdentity;
use serde::Deserialize;

/// Static copy for one page's head.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// Route path with trailing slash, e.g. `/contact/`.
    pub path: String,
}

/// Which attribute names a `<meta>` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    /// `<meta name=...>` (description, twitter cards)
    Name,
    /// `<meta property=...>` (Open Graph)
    Property,
}

impl MetaKey {
    pub fn attribute(self) -> &'static str {
        match self {
            MetaKey::Name => "name",
            MetaKey::Property => "property",
        }
    }
}

/// One element to place in `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    Title(String),
    Meta {
        key: MetaKey,
        name: &'static str,
        content: String,
    },
    Link {
        rel: &'static str,
        href: String,
    },
}

impl HeadTag {
    fn name(name: &'static str, content: impl Into<String>) -> Self {
        HeadTag::Meta {
            key: MetaKey::Name,
            name,
            content: content.into(),
        }
    }

    fn property(name: &'static str, content: impl Into<String>) -> Self {
        HeadTag::Meta {
            key: MetaKey::Property,
            name,
            content: content.into(),
        }
    }
}

impl PageMeta {
    pub fn canonical_url(&self, origin: &str) -> String {
        format!("{}{}", origin.trim_end_matches('/'), self.path)
    }

    /// Title, description, canonical link, Open Graph and Twitter card tags.
    pub fn head_tags(&self, site: &SiteIdentity, origin: &str) -> Vec<HeadTag> {
        let url = self.canonical_url(origin);
        let image = format!("{}{}", origin.trim_end_matches('/'), site.og_image_path);

        vec![
            HeadTag::Title(self.title.clone()),
            HeadTag::name("description", &self.description),
            HeadTag::Link {
                rel: "canonical",
                href: url.clone(),
            },
            HeadTag::property("og:title", &self.title),
            HeadTag::property("og:description", &self.description),
            HeadTag::property("og:url", url),
            HeadTag::property("og:type", "website"),
            HeadTag::property("og:image", image.clone()),
            HeadTag::property("og:site_name", &site.name),
            HeadTag::name("twitter:card", "summary_large_image"),
            HeadTag::name("twitter:site", &site.twitter_handle),
            HeadTag::name("twitter:title", &self.title),
            HeadTag::name("twitter:description", &self.description),
            HeadTag::name("twitter:image", image),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Pages;
    use pretty_assertions::assert_eq;

    fn content_of<'a>(tags: &'a [HeadTag], wanted: &str) -> Option<&'a str> {
        tags.iter().find_map(|tag| match tag {
            HeadTag::Meta { name, content, .. } if *name == wanted => Some(content.as_str()),
            _ => None,
        })
    }

    #[test]
    fn contact_page_tags() {
        let pages = Pages::default();
        let tags = pages
            .contact
            .head_tags(&SiteIdentity::default(), "https://touchstone-ds.com");

        assert_eq!(tags.len(), 14);
        assert_eq!(
            tags[0],
            HeadTag::Title("Contact Us | Touchstone Digital Solutions".into())
        );
        assert_eq!(
            tags[2],
            HeadTag::Link {
                rel: "canonical",
                href: "https://touchstone-ds.com/contact/".into(),
            }
        );
        assert_eq!(
            content_of(&tags, "og:url"),
            Some("https://touchstone-ds.com/contact/")
        );
        assert_eq!(
            content_of(&tags, "twitter:image"),
            Some("https://touchstone-ds.com/og-image.jpg")
        );
        assert_eq!(content_of(&tags, "twitter:site"), Some("@touchstone_ds"));
    }

    #[test]
    fn og_tags_use_property_attribute() {
        let tags = Pages::default()
            .home
            .head_tags(&SiteIdentity::default(), "http://localhost:8080");
        for tag in &tags {
            if let HeadTag::Meta { key, name, .. } = tag {
                let expected = if name.starts_with("og:") {
                    MetaKey::Property
                } else {
                    MetaKey::Name
                };
                assert_eq!(*key, expected, "{name}");
            }
        }
    }

    #[test]
    fn origin_trailing_slash_is_not_doubled() {
        let home = Pages::default().home;
        assert_eq!(home.canonical_url("https://a.test/"), "https://a.test/");
        assert_eq!(home.canonical_url("https://a.test"), "https://a.test/");
    }
}
