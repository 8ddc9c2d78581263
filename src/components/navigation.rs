//! Navigation Component
//!
//! Fixed header that turns opaque once scrolled, plus the mobile menu overlay.

use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

use crate::components::BrandMark;
use crate::context::use_site;
use crate::nav::{is_current, HeaderStyle, MobileMenu, NAV_LINKS};

#[component]
pub fn Navigation() -> impl IntoView {
    let site = use_site();
    let location = use_location();
    let pathname = location.pathname;

    let threshold = site.scroll_threshold();
    let scroll_y = site.viewport.scroll_y_read;
    let header = Memo::new(move |_| HeaderStyle::for_scroll(scroll_y.get(), threshold));

    let (menu, set_menu) = signal(MobileMenu::default());
    let menu_open = move || menu.with(|m| m.open);

    // Close the overlay whenever the route changes
    Effect::new(move |_| {
        let path = pathname.get();
        set_menu.update(|m| m.on_route(&path));
    });

    let tagline = site.with_config(|c| c.brand.tagline.trim_end_matches('.').to_string());

    view! {
        <header
            class=move || if header.get().scrolled { "site-header scrolled" } else { "site-header" }
            style=move || header.get().css()
        >
            <nav class="site-nav">
                <A href="/" attr:class="logo-link">
                    <BrandMark />
                </A>

                <ul class="nav-links">
                    {NAV_LINKS.iter().map(|link| {
                        let link = *link;
                        let active = move || is_current(&link, &pathname.get());
                        view! {
                            <li>
                                <A
                                    href=link.path
                                    attr:class=move || if active() { "nav-link active" } else { "nav-link" }
                                >
                                    {link.label}
                                    <Show when=active>
                                        <span class="nav-indicator"></span>
                                    </Show>
                                </A>
                            </li>
                        }
                    }).collect_view()}
                    <li>
                        <A href="/book" attr:class="nav-cta">"Book a Table"</A>
                    </li>
                </ul>

                <button
                    class=move || if menu_open() { "hamburger open" } else { "hamburger" }
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu.update(|m| m.toggle())
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
        </header>

        <Show when=menu_open>
            <div class="mobile-menu">
                <ul>
                    {NAV_LINKS.iter().enumerate().map(|(i, link)| {
                        let link = *link;
                        view! {
                            <li style=format!("animation-delay: {}ms;", i * 80)>
                                <A
                                    href=link.path
                                    attr:class=move || {
                                        if is_current(&link, &pathname.get()) { "mobile-link active" } else { "mobile-link" }
                                    }
                                >
                                    {link.label}
                                </A>
                            </li>
                        }
                    }).collect_view()}
                </ul>
                <div class="mobile-menu-tagline">{format!("⚡ \u{a0} {}", tagline.clone())}</div>
            </div>
        </Show>
    }
}
