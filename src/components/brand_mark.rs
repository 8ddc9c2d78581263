use leptos::prelude::*;

use crate::context::use_site;

/// "BLIKSEM ⚡ CAFE" word mark
#[component]
pub fn BrandMark(#[prop(into, optional)] class: String) -> impl IntoView {
    let (name, suffix) = use_site().with_config(|c| (c.brand.name.clone(), c.brand.suffix.clone()));

    view! {
        <span class=format!("brand-mark {}", class)>
            <span class="brand-word">{name}</span>
            <span class="brand-bolt">"⚡"</span>
            <span class="brand-word">{suffix}</span>
        </span>
    }
}
