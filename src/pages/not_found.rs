use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// 404 page
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Not found · BliksemCafe" />
        <div class="page not-found centered">
            <p class="eyebrow">"404"</p>
            <h1 class="page-title">"This table doesn’t exist."</h1>
            <p class="body-text">"The page you were looking for has moved, or was never poured."</p>
            <A href="/" attr:class="btn-outline">"Back to the café"</A>
        </div>
    }
}
