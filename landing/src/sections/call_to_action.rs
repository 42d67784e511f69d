use super::SectionHeader;
use leptos::prelude::*;
use touchstone_core::config::SiteConfig;

#[component]
pub fn CallToAction() -> impl IntoView {
    let phone_href = expect_context::<SiteConfig>().contact.phone_href();
    view! {
        <section class="cta">
            <div class="container">
                <SectionHeader id="cta" />
                <div class="cta-actions">
                    <a href="/contact" class="btn btn-primary">"Contact Us"</a>
                    <a href=phone_href class="btn btn-secondary">"Call Us"</a>
                </div>
            </div>
        </section>
    }
}
