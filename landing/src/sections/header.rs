use leptos::prelude::*;
use touchstone_core::content::{ContentCatalog, SectionCopy};

/// Eyebrow, heading and blurb for section `id` of the content catalog.
#[component]
pub fn SectionHeader(id: &'static str) -> impl IntoView {
    let copy = expect_context::<ContentCatalog>().section_or_blank(id);
    let SectionCopy {
        eyebrow,
        lead,
        accent,
        tail,
        description,
    } = copy;

    view! {
        <div class="section-header">
            {eyebrow.map(|eyebrow| view! { <p class="section-eyebrow">{eyebrow}</p> })}
            <h2 class="section-title">
                {lead}
                " "
                <span class="text-gradient">{accent}</span>
                " "
                {tail}
            </h2>
            <p class="section-description">{description}</p>
        </div>
    }
}
