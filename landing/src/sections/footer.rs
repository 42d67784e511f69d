use leptos::prelude::*;
use touchstone_core::config::SiteConfig;

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let contact = config.contact;

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-logo">
                        <img src="/logo.svg" alt="Touchstone" />
                    </span>
                    <span class="footer-title">{config.site.name}</span>
                </div>
                <div class="footer-links">
                    <a href="/#solutions" class="footer-link">"Solutions"</a>
                    <a href="/#testimonials" class="footer-link">"Testimonials"</a>
                    <a href="/contact" class="footer-link">"Contact"</a>
                    <a href=contact.mailto_href() class="footer-link">{contact.email.clone()}</a>
                    <a href=contact.phone_href() class="footer-link">
                        {contact.phone_display.clone()}
                    </a>
                </div>
                <p class="footer-copyright">
                    "© 2025 Touchstone Digital Solutions. All rights reserved."
                </p>
            </div>
        </footer>
    }
}
