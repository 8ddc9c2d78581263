//! Menu Item Grid Component
//!
//! Intro line and two-column item grid for one category.

use leptos::prelude::*;

use crate::catalog::MenuSelection;

#[component]
pub fn MenuItemGrid(selection: MenuSelection) -> impl IntoView {
    let category = selection.active();
    let needs_filler = selection.needs_filler();

    view! {
        <div class="menu-category" data-category=category.id>
            <div class="menu-intro">
                <p>{category.intro}</p>
            </div>

            <div class="menu-grid">
                {category.items.iter().enumerate().map(|(i, item)| view! {
                    <div class="menu-item" style=format!("animation-delay: {}ms;", i * 60)>
                        <div class="menu-item-head">
                            <div>
                                <h3 class="menu-item-name">{item.name}</h3>
                                {item.note.map(|note| view! { <p class="menu-item-note">{note}</p> })}
                            </div>
                            <span class="menu-item-price">{item.price}</span>
                        </div>
                        <p class="menu-item-description">{item.description}</p>
                    </div>
                }).collect_view()}
                {needs_filler.then(|| view! { <div class="menu-item filler"></div> })}
            </div>
        </div>
    }
}
