// Home page - hero, solutions, client testimonials and the closing CTA
use crate::browser::{use_page_meta, use_smooth_anchor_scroll};
use crate::sections::{CallToAction, Hero, HowItWorks, Solutions, Testimonials};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    use_page_meta(|config| &config.pages.home);
    use_smooth_anchor_scroll();

    view! {
        <Hero />
        <div id="solutions">
            <Solutions />
        </div>
        <div id="testimonials">
            <Testimonials />
        </div>
        <div id="contact">
            <HowItWorks />
        </div>
        <div id="cta">
            <CallToAction />
        </div>
    }
}
