use leptos::prelude::*;
use touchstone_core::config::SiteConfig;

/// Email, phone and location sidebar next to the contact form.
#[component]
pub fn ContactInfo() -> impl IntoView {
    let contact = expect_context::<SiteConfig>().contact;
    let mailto = contact.mailto_href();
    let tel = contact.phone_href();

    view! {
        <aside class="contact-info">
            <h2 class="contact-info-title">"Contact Information"</h2>
            <div class="contact-info-item">
                <h3>"Email"</h3>
                <a href=mailto>{contact.email}</a>
            </div>
            <div class="contact-info-item">
                <h3>"Phone"</h3>
                <a href=tel>{contact.phone_display}</a>
            </div>
            <div class="contact-info-item">
                <h3>"Location"</h3>
                {contact
                    .location
                    .into_iter()
                    .map(|line| view! { <p>{line}</p> })
                    .collect::<Vec<_>>()}
            </div>
        </aside>
    }
}
