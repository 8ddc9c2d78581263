//! Menu Page
//!
//! Category tabs over the static catalog. Switching tabs fades the old grid
//! out before the new one is swapped in.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::catalog::{MenuTransition, DIETARY_NOTE};
use crate::components::{CategoryTabBar, MenuItemGrid};
use crate::context::use_site;

/// Length of the grid's exit transition
const TAB_EXIT_MS: u32 = 200;

#[component]
pub fn MenuPage() -> impl IntoView {
    let hero_image = use_site().config().images.menu_hero;
    let menu = RwSignal::new(MenuTransition::default());
    let target = Memo::new(move |_| menu.with(|m| m.target()));
    let shown = Memo::new(move |_| menu.with(|m| m.shown()));
    let leaving = Memo::new(move |_| menu.with(|m| m.is_leaving()));

    let on_select = Callback::new(move |id: &'static str| {
        let mut starts_exit = false;
        menu.update(|m| starts_exit = m.click(id));
        log::info!("menu category {}", id);
        if starts_exit {
            spawn_local(async move {
                TimeoutFuture::new(TAB_EXIT_MS).await;
                menu.update(|m| m.settle());
            });
        }
    });

    view! {
        <Title text="Menu · BliksemCafe" />
        <div class="page menu">
            <section class="page-hero short">
                <img src=hero_image alt="Coffee beans — the foundation of our menu" />
                <div class="hero-overlay"></div>
                <div class="page-hero-content container">
                    <p class="eyebrow fade-up">"Seasonal menu"</p>
                    <h1 class="page-title rise">"The Menu"</h1>
                </div>
            </section>

            <CategoryTabBar selection=target on_select=on_select />

            <section class="section menu-items">
                <div class="container">
                    <div class=move || if leaving.get() { "menu-panel leaving" } else { "menu-panel" }>
                        {move || view! { <MenuItemGrid selection=shown.get() /> }}
                    </div>
                    <p class="dietary-note">{DIETARY_NOTE}</p>
                </div>
            </section>

            <section class="section booking-cta compact centered">
                <p class="eyebrow muted">"Ready to visit?"</p>
                <h2 class="display-heading">"Reserve your table today."</h2>
                <A href="/book" attr:class="btn-outline">"Make a reservation"</A>
            </section>
        </div>
    }
}
