//! Literal site copy, injected as data.
//!
//! Testimonials and section headings come from `content/catalog.json` rather
//! than living in component code. Components look copy up by section id.

use crate::SiteError;
use serde::Deserialize;
use std::collections::BTreeMap;

pub const EMBEDDED_CATALOG_JSON: &str = include_str!("../content/catalog.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub quote: String,
    pub author: String,
    pub role: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

/// What to draw above a testimonial's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Avatar<'a> {
    /// Organisation logo, drawn uncropped.
    Logo(&'a str),
    /// Portrait, drawn in a circle.
    Image(&'a str),
    /// No picture; a circle with the author's first letter.
    Initial(char),
}

impl Testimonial {
    pub fn avatar(&self) -> Avatar<'_> {
        if let Some(logo) = self.logo.as_deref() {
            Avatar::Logo(logo)
        } else if let Some(image) = self.image.as_deref() {
            Avatar::Image(image)
        } else {
            Avatar::Initial(self.author.chars().next().unwrap_or('?'))
        }
    }
}

/// Heading and blurb of one page section.
///
/// Headings render as `lead <accent> tail`, with the accent highlighted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SectionCopy {
    pub eyebrow: Option<String>,
    pub lead: String,
    pub accent: String,
    pub tail: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContentCatalog {
    pub testimonials: Vec<Testimonial>,
    pub sections: BTreeMap<String, SectionCopy>,
}

impl ContentCatalog {
    pub fn from_json_str(content: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load the embedded catalog; an empty catalog if it is invalid.
    pub fn embedded() -> Self {
        match Self::from_json_str(EMBEDDED_CATALOG_JSON) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(error = %e, "embedded catalog.json rejected");
                Self::default()
            }
        }
    }

    pub fn section(&self, id: &str) -> Result<&SectionCopy, SiteError> {
        self.sections
            .get(id)
            .ok_or_else(|| SiteError::MissingSection(id.to_string()))
    }

    /// Section copy, or blank copy (logged) when the id is unknown.
    pub fn section_or_blank(&self, id: &str) -> SectionCopy {
        match self.section(id) {
            Ok(copy) => copy.clone(),
            Err(e) => {
                tracing::warn!(error = %e, "rendering section without copy");
                SectionCopy::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = ContentCatalog::from_json_str(EMBEDDED_CATALOG_JSON).expect("catalog");
        assert_eq!(catalog.testimonials.len(), 6);
        assert_eq!(catalog.testimonials[0].author, "Seton Hall Prep (NJ)");
        for id in ["hero", "solutions", "testimonials", "how_it_works", "cta", "contact_form"] {
            assert!(catalog.section(id).is_ok(), "missing section {id}");
        }
    }

    #[test]
    fn testimonial_ids_are_unique() {
        let catalog = ContentCatalog::embedded();
        let mut ids: Vec<_> = catalog.testimonials.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.testimonials.len());
    }

    #[test]
    fn avatar_prefers_logo_then_image_then_initial() {
        let mut t = Testimonial {
            id: "x".into(),
            quote: "q".into(),
            author: "Brown University (RI)".into(),
            role: "AD".into(),
            image: Some("/people/ad.jpg".into()),
            logo: Some("/clients/brown.png".into()),
        };
        assert_eq!(t.avatar(), Avatar::Logo("/clients/brown.png"));

        t.logo = None;
        assert_eq!(t.avatar(), Avatar::Image("/people/ad.jpg"));

        t.image = None;
        assert_eq!(t.avatar(), Avatar::Initial('B'));
    }

    #[test]
    fn unknown_section_is_reported() {
        let catalog = ContentCatalog::default();
        let err = catalog.section("pricing").unwrap_err();
        assert_eq!(err.to_string(), "content catalog is missing section `pricing`");
        assert_eq!(catalog.section_or_blank("pricing"), SectionCopy::default());
    }

    #[test]
    fn optional_fields_default() {
        let catalog = ContentCatalog::from_json_str(
            r#"{"testimonials":[{"id":"a","quote":"q","author":"Ann","role":"r"}]}"#,
        )
        .expect("minimal catalog");
        assert_eq!(catalog.testimonials[0].avatar(), Avatar::Initial('A'));
        assert!(catalog.sections.is_empty());
    }
}
