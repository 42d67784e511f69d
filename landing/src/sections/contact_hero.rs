use leptos::prelude::*;
use touchstone_core::config::SiteConfig;
use touchstone_core::content::ContentCatalog;

#[component]
pub fn ContactHero() -> impl IntoView {
    let copy = expect_context::<ContentCatalog>().section_or_blank("contact_hero");
    let phone_href = expect_context::<SiteConfig>().contact.phone_href();
    view! {
        <section class="hero hero-compact">
            <div class="container">
                <div class="hero-content">
                    {copy.eyebrow.map(|badge| view! { <div class="hero-badge">{badge}</div> })}
                    <h1 class="hero-title">
                        <span class="hero-title-accent">{copy.accent}</span>
                    </h1>
                    <p class="hero-description">{copy.description}</p>
                    <div class="hero-actions">
                        <a href="#contact-form" class="btn btn-primary">"Send Message"</a>
                        <a href=phone_href class="btn btn-secondary">"Call Us"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
