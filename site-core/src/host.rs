//! Host environment seam.
//!
//! Pages touch global browser state (scroll position, `<head>`, the page
//! origin) only through [`HostEnvironment`], so that behaviour can be checked
//! against a recording fake.

use crate::config::SiteIdentity;
use crate::metadata::{HeadTag, PageMeta};

/// Height of the fixed navigation bar. Anchor scrolls stop this far above
/// their target so the heading is not hidden behind it.
pub const NAV_OFFSET_PX: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

/// Global state a page needs from its host.
pub trait HostEnvironment {
    /// Scheme, host and port of the current page, without a trailing slash.
    fn origin(&self) -> String;

    /// Path of the current page, e.g. `/` or `/contact`.
    fn pathname(&self) -> String;

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);

    /// Distance from the document top to the element with `id`.
    fn element_offset_top(&self, id: &str) -> Option<f64>;

    fn set_title(&self, title: &str);

    /// Insert `tag` into `<head>` or update the existing tag with the same key.
    fn upsert_head_tag(&self, tag: &HeadTag);
}

/// Write every head tag of `meta` for the current origin.
pub fn apply_page_meta(host: &impl HostEnvironment, site: &SiteIdentity, meta: &PageMeta) {
    let origin = host.origin();
    for tag in meta.head_tags(site, &origin) {
        match &tag {
            HeadTag::Title(title) => host.set_title(title),
            _ => host.upsert_head_tag(&tag),
        }
    }
}

pub fn scroll_to_top(host: &impl HostEnvironment) {
    host.scroll_to(0.0, ScrollBehavior::Instant);
}

/// Element id targeted by an in-page link (`#gallery` -> `gallery`).
///
/// `/#gallery` also counts while `current_path` is `/`; trailing slashes are
/// ignored when comparing paths.
pub fn anchor_target<'a>(href: &'a str, current_path: &str) -> Option<&'a str> {
    let (path, id) = href.split_once('#')?;
    if !path.is_empty() && path.trim_end_matches('/') != current_path.trim_end_matches('/') {
        return None;
    }
    Some(id).filter(|id| !id.is_empty())
}

/// Smooth-scroll to the section an in-page link points at.
///
/// Returns `false` (and leaves the page alone) when `href` is not an in-page
/// link or its target does not exist, so the caller can let the browser
/// handle the click.
pub fn scroll_to_anchor(host: &impl HostEnvironment, href: &str) -> bool {
    let Some(id) = anchor_target(href, &host.pathname()) else {
        return false;
    };
    let Some(top) = host.element_offset_top(id) else {
        tracing::debug!(id, "anchor target not on page");
        return false;
    };
    host.scroll_to(top - NAV_OFFSET_PX, ScrollBehavior::Smooth);
    true
}
