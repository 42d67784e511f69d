use leptos::prelude::*;
use touchstone_core::content::ContentCatalog;

#[component]
pub fn Hero() -> impl IntoView {
    let copy = expect_context::<ContentCatalog>().section_or_blank("hero");
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-content">
                    {copy.eyebrow.map(|badge| {
                        view! {
                            <div class="hero-badge">
                                <span class="hero-badge-dot"></span>
                                {badge}
                            </div>
                        }
                    })}
                    <h1 class="hero-title">
                        {copy.lead}
                        " "
                        <span class="hero-title-accent">{copy.accent}</span>
                    </h1>
                    <p class="hero-description">{copy.description}</p>
                    <div class="hero-actions">
                        <a href="/contact" class="btn btn-primary">
                            "Schedule a Demo"
                        </a>
                        <a href="#testimonials" class="btn btn-secondary">
                            "Hear from our clients →"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
