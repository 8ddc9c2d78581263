use leptos::prelude::*;

use crate::content::MARQUEE_ITEMS;

/// Gold band of words scrolling sideways. The list is rendered twice so the
/// CSS loop can restart without a visible seam.
#[component]
pub fn Marquee() -> impl IntoView {
    let block = || {
        MARQUEE_ITEMS
            .iter()
            .map(|item| {
                view! {
                    <span class="marquee-item">
                        <span class="marquee-word">{*item}</span>
                        <span class="marquee-diamond">"◆"</span>
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <div class="marquee-band">
            <div class="marquee-track">
                <span class="marquee-block">{block()}</span>
                <span class="marquee-block" aria-hidden="true">{block()}</span>
            </div>
        </div>
    }
}
