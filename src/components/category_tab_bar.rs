//! Category Tab Bar Component
//!
//! Sticky tab bar for switching between menu categories.

use leptos::prelude::*;

use crate::catalog::{MenuSelection, MENU};

/// Category Tab Bar component
#[component]
pub fn CategoryTabBar(
    #[prop(into)] selection: Signal<MenuSelection>,
    #[prop(into)] on_select: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <div class="category-tab-bar">
            <div class="container">
                <div class="category-tabs">
                    {MENU.iter().map(|cat| {
                        let id = cat.id;
                        let is_active = move || selection.with(|s| s.is_active(id));
                        let tab_class = move || {
                            if is_active() { "category-tab active" } else { "category-tab" }
                        };

                        view! {
                            <button
                                class=tab_class
                                on:click=move |_| on_select.run(id)
                            >
                                {cat.label}
                                <Show when=is_active>
                                    <div class="tab-indicator"></div>
                                </Show>
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
