use leptos::prelude::*;
use touchstone_core::config::SiteConfig;

const LINKS: &[(&str, &str)] = &[
    ("/#solutions", "Solutions"),
    ("/#testimonials", "Testimonials"),
    ("/#contact", "How It Works"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = move |_| set_menu_open.set(false);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand" on:click=close_menu>
                    <div class="nav-logo">
                        <img src="/logo.svg" alt="Touchstone" />
                    </div>
                    <span class="nav-title">{config.site.name}</span>
                </a>
                <div class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
                    {LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=*href class="nav-link" on:click=close_menu>
                                    {*label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <a href="/contact" class="nav-cta" on:click=close_menu>
                        "Contact Us"
                    </a>
                </div>
                <button
                    class=move || if menu_open.get() { "nav-toggle active" } else { "nav-toggle" }
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "Close" } else { "Menu" }}
                </button>
            </div>
        </nav>
    }
}
