//! Bliksem Cafe App
//!
//! Router shell: navigation, routed page, footer.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_location,
    path,
};
use leptos_viewport::{bind_window_viewport, create_viewport_signals};

use crate::components::{Footer, Navigation};
use crate::config::SiteConfig;
use crate::context::SiteContext;
use crate::pages::{AboutPage, BookPage, LandingPage, MenuPage, NotFoundPage};

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();

    let viewport = create_viewport_signals();
    bind_window_viewport(viewport);
    provide_context(SiteContext::new(config, viewport));

    view! {
        <Title text="BliksemCafe" />
        <Router>
            <RouteWatcher />
            <Navigation />
            <main class="site-main">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/menu") view=MenuPage />
                    <Route path=path!("/book") view=BookPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// Log navigation and start each page at the top
#[component]
fn RouteWatcher() -> impl IntoView {
    let location = use_location();

    Effect::new(move |prev: Option<String>| {
        let path = location.pathname.get();
        if prev.as_deref() != Some(path.as_str()) {
            log::info!("route {}", path);
            if prev.is_some() {
                if let Some(win) = web_sys::window() {
                    win.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
        }
        path
    });
}

/// Log lines listed under the startup error
const ERROR_LOG_TAIL: usize = 20;

/// Shown instead of the app when the embedded configuration is broken
#[component]
pub fn ConfigErrorPage(message: String) -> impl IntoView {
    let log_lines: Vec<String> = rolling_logger::logger()
        .map(|logger| logger.tail(ERROR_LOG_TAIL).iter().map(|e| e.line()).collect())
        .unwrap_or_default();

    view! {
        <div class="config-error">
            <h1>"Something went wrong"</h1>
            <p>"The site could not start. Please try again later."</p>
            <pre>{message}</pre>
            {(!log_lines.is_empty()).then(|| view! {
                <ul class="log-tail">
                    {log_lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                </ul>
            })}
        </div>
    }
}
