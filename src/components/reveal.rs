//! Reveal Component
//!
//! Fades and lifts its children in the first time they scroll into view.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_viewport::element_top;

use crate::context::use_site;
use crate::motion::{should_reveal, stagger_delay_ms};

#[component]
pub fn Reveal(
    /// Position among staggered siblings
    #[prop(optional)]
    index: usize,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let viewport = use_site().viewport;
    let node_ref = NodeRef::<Div>::new();
    let (visible, set_visible) = signal(false);

    Effect::new(move |_| {
        viewport.scroll_y_read.track();
        let height = viewport.height_read.get();
        if visible.get_untracked() {
            return;
        }
        if let Some(el) = node_ref.get() {
            if should_reveal(element_top(&el), height) {
                set_visible.set(true);
            }
        }
    });

    view! {
        <div
            node_ref=node_ref
            class=move || format!("reveal {}{}", class, if visible.get() { " visible" } else { "" })
            style=format!("transition-delay: {}ms;", stagger_delay_ms(index))
        >
            {children()}
        </div>
    }
}
