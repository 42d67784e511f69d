use super::SectionHeader;
use leptos::prelude::*;

/// Onboarding steps, in order.
const STEPS: &[(&str, &str)] = &[
    ("Discover", "We learn your program's history and what you want visitors to feel."),
    ("Design", "Our team builds the content and layout with you, screen by screen."),
    ("Install", "Hardware is mounted, configured and tested on site."),
    ("Grow", "Add inductees and records yourself, or let us keep it current."),
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="how-it-works">
            <div class="container">
                <SectionHeader id="how_it_works" />
                <ol class="steps">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(idx, (title, body))| {
                            view! {
                                <li class="step">
                                    <span class="step-number">{idx + 1}</span>
                                    <h3 class="step-title">{*title}</h3>
                                    <p class="step-body">{*body}</p>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ol>
            </div>
        </section>
    }
}
