// Contact page - relay-backed form plus direct contact details
use crate::browser::{use_page_meta, use_scroll_to_top};
use crate::sections::{ContactForm, ContactHero, ContactInfo, SectionHeader};
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    use_page_meta(|config| &config.pages.contact);
    use_scroll_to_top();

    view! {
        <ContactHero />
        <div class="container contact-body" id="contact-form">
            <SectionHeader id="contact_form" />
            <div class="contact-grid">
                <div class="contact-card">
                    <h2 class="contact-card-title">"Send Us a Message"</h2>
                    <ContactForm />
                </div>
                <ContactInfo />
            </div>
        </div>
    }
}
