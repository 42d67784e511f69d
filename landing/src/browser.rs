//! Browser side of the host environment seam.

use leptos::prelude::*;
use touchstone_core::config::SiteConfig;
use touchstone_core::host::{self, HostEnvironment, ScrollBehavior};
use touchstone_core::metadata::{HeadTag, PageMeta};
use wasm_bindgen::JsCast;

/// `window` / `document` of the running page.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

impl BrowserHost {
    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }
}

impl HostEnvironment for BrowserHost {
    fn origin(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default()
    }

    fn pathname(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_default()
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match behavior {
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        window.scroll_to_with_scroll_to_options(&options);
    }

    fn element_offset_top(&self, id: &str) -> Option<f64> {
        let element = Self::document()?.get_element_by_id(id)?;
        let element = element.dyn_into::<web_sys::HtmlElement>().ok()?;
        Some(f64::from(element.offset_top()))
    }

    fn set_title(&self, title: &str) {
        if let Some(document) = Self::document() {
            document.set_title(title);
        }
    }

    fn upsert_head_tag(&self, tag: &HeadTag) {
        let Some(document) = Self::document() else {
            return;
        };
        let (element_name, selector, attributes) = match tag {
            HeadTag::Title(title) => {
                document.set_title(title);
                return;
            }
            HeadTag::Meta { key, name, content } => (
                "meta",
                format!(r#"meta[{}="{}"]"#, key.attribute(), name),
                [(key.attribute(), *name), ("content", content.as_str())],
            ),
            HeadTag::Link { rel, href } => (
                "link",
                format!(r#"link[rel="{rel}"]"#),
                [("rel", *rel), ("href", href.as_str())],
            ),
        };

        let element = match document.query_selector(&selector) {
            Ok(Some(existing)) => existing,
            _ => {
                let Some(head) = document.head() else {
                    return;
                };
                let created = match document.create_element(element_name) {
                    Ok(created) => created,
                    Err(e) => {
                        tracing::warn!(error = ?e, selector = %selector, "cannot create head tag");
                        return;
                    }
                };
                if let Err(e) = head.append_child(&created) {
                    tracing::warn!(error = ?e, selector = %selector, "cannot append head tag");
                    return;
                }
                created
            }
        };

        for (attribute, value) in attributes {
            if let Err(e) = element.set_attribute(attribute, value) {
                tracing::warn!(error = ?e, attribute, "cannot set head tag attribute");
            }
        }
    }
}

/// Write the page's title and head tags once the page has mounted.
pub fn use_page_meta(select: fn(&SiteConfig) -> &PageMeta) {
    let config = expect_context::<SiteConfig>();
    Effect::new(move || host::apply_page_meta(&BrowserHost, &config.site, select(&config)));
}

/// Jump to the top of the document when the page mounts.
pub fn use_scroll_to_top() {
    Effect::new(move || host::scroll_to_top(&BrowserHost));
}

/// Smooth-scroll in-page `#anchor` links past the fixed nav while mounted.
pub fn use_smooth_anchor_scroll() {
    let listener = window_event_listener(leptos::ev::click, |ev| {
        let Some(anchor) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|target| target.closest("a").ok().flatten())
        else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        if host::scroll_to_anchor(&BrowserHost, &href) {
            ev.prevent_default();
        }
    });
    on_cleanup(move || listener.remove());
}
