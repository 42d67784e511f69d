use super::SectionHeader;
use leptos::prelude::*;

#[component]
pub fn Solutions() -> impl IntoView {
    view! {
        <section class="solutions">
            <div class="container">
                <SectionHeader id="solutions" />
                <div class="features-grid">
                    <FeatureCard
                        title="Digital Hall of Fame"
                        description="Inductees, biographies, photos and video on an interactive touchscreen instead of a crowded wall."
                    />
                    <FeatureCard
                        title="Trophy Case & Records"
                        description="Every championship and record board, searchable by sport, season and athlete."
                    />
                    <FeatureCard
                        title="Alumni Recognition"
                        description="A web companion so alumni can revisit their achievements from anywhere."
                    />
                    <FeatureCard
                        title="Managed Onboarding"
                        description="We digitize your archives, build the content and train your staff to keep it current."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card">
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </div>
    }
}
