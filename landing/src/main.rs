// Touchstone Digital Solutions site - Leptos 0.8 CSR

mod browser;
mod logging;
mod pages;
mod relay;
mod sections;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::{ContactPage, HomePage};
use sections::{Footer, Nav};
use touchstone_core::config::SiteConfig;
use touchstone_core::content::ContentCatalog;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    provide_context(SiteConfig::embedded());
    provide_context(ContentCatalog::embedded());

    view! {
        <Router>
            <Nav />
            <main>
                <Routes fallback=|| view! { <HomePage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
