//! Landing Page
//!
//! Parallax hero, marquee, intro, features, atmosphere, menu preview, booking CTA.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::{Marquee, Reveal};
use crate::config::Images;
use crate::content::{
    ATMOSPHERE_BODY, ATMOSPHERE_HEADING, BOOKING_CTA_BODY, FEATURES, LANDING_INTRO,
    LANDING_INTRO_HEADING, MENU_PREVIEW,
};
use crate::context::use_site;
use crate::markdown::parse_markdown_inline;
use crate::models::FeatureImage;
use crate::motion::hero_parallax_transform;

fn feature_image(images: &Images, image: FeatureImage) -> String {
    match image {
        FeatureImage::Latte => images.latte.clone(),
        FeatureImage::Interior => images.interior.clone(),
        FeatureImage::Pastry => images.pastry.clone(),
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let site = use_site();
    let config = site.config();
    let viewport = site.viewport;
    let parallax = move || {
        hero_parallax_transform(viewport.scroll_y_read.get(), viewport.height_read.get())
    };

    let features = FEATURES
        .iter()
        .map(|f| (*f, feature_image(&config.images, f.image)))
        .collect::<Vec<_>>();

    view! {
        <Title text="BliksemCafe — Struck by the perfect cup" />
        <div class="page landing">
            <section class="landing-hero">
                <div class="hero-parallax" style=parallax>
                    <img src=config.images.landing_hero.clone() alt="BliksemCafe interior at dusk" />
                </div>
                <div class="hero-overlay"></div>

                <div class="hero-content">
                    <p class="eyebrow fade-up">{config.brand.established.clone()}</p>
                    <h1 class="hero-title rise">{config.brand.name.clone()}</h1>
                    <div class="hero-bolt flash">"⚡"</div>
                    <h1 class="hero-subtitle rise delayed">{config.brand.suffix.clone()}</h1>
                    <div class="gold-rule grow"></div>
                    <p class="hero-tagline fade-up delayed">{config.brand.tagline.clone()}</p>
                    <div class="hero-ctas fade-up delayed-more">
                        <A href="/menu" attr:class="btn-solid">"Explore the Menu"</A>
                        <A href="/book" attr:class="btn-outline light">"Reserve a Table"</A>
                    </div>
                </div>

                <div class="scroll-indicator">
                    <span>"Scroll"</span>
                    <div class="scroll-line"></div>
                </div>
            </section>

            <Marquee />

            <section class="section intro">
                <div class="container narrow centered">
                    <Reveal>
                        <p class="eyebrow">"A sanctuary for the senses"</p>
                    </Reveal>
                    <Reveal index=1>
                        <h2 class="display-heading" inner_html=parse_markdown_inline(LANDING_INTRO_HEADING)></h2>
                    </Reveal>
                    <Reveal index=2>
                        <div class="gold-rule short centered"></div>
                        <p class="body-text">{LANDING_INTRO}</p>
                    </Reveal>
                </div>
            </section>

            <section class="section features">
                <div class="container feature-grid">
                    {features.into_iter().enumerate().map(|(i, (feature, src))| view! {
                        <Reveal index=i class="feature-card">
                            <div class="feature-image">
                                <img src=src alt=feature.alt loading="lazy" />
                                <div class="image-fade"></div>
                            </div>
                            <div class="feature-text">
                                <div class="gold-rule tiny"></div>
                                <h3 class="card-heading">{feature.label}</h3>
                                <p class="body-text small">{feature.description}</p>
                            </div>
                        </Reveal>
                    }).collect_view()}
                </div>
            </section>

            <section class="atmosphere">
                <img src=config.images.atmosphere.clone() alt="The BliksemCafe atmosphere — warm and intimate" loading="lazy" />
                <div class="atmosphere-overlay"></div>
                <div class="atmosphere-content container">
                    <Reveal class="atmosphere-text">
                        <p class="eyebrow">"The space"</p>
                        <h2 class="display-heading" inner_html=parse_markdown_inline(ATMOSPHERE_HEADING)></h2>
                        <div class="gold-rule short"></div>
                        <p class="body-text">{ATMOSPHERE_BODY}</p>
                        <A href="/about" attr:class="text-link">
                            "Our story"
                            <span class="text-link-rule"></span>
                        </A>
                    </Reveal>
                </div>
            </section>

            <section class="section menu-preview">
                <div class="container">
                    <div class="centered">
                        <Reveal>
                            <p class="eyebrow">"A taste of what awaits"</p>
                            <h2 class="display-heading">"From our menu"</h2>
                        </Reveal>
                    </div>
                    <div class="preview-grid">
                        {MENU_PREVIEW.iter().enumerate().map(|(i, item)| view! {
                            <Reveal index=i class="preview-card">
                                <p class="eyebrow small">{item.category}</p>
                                <h3 class="card-heading">{item.name}</h3>
                                <p class="body-text small">{item.description}</p>
                                <div class="preview-price">
                                    <span class="price">{item.price}</span>
                                </div>
                            </Reveal>
                        }).collect_view()}
                    </div>
                    <div class="centered">
                        <A href="/menu" attr:class="text-link">
                            "View the full menu"
                            <span class="text-link-rule wide"></span>
                        </A>
                    </div>
                </div>
            </section>

            <section class="section booking-cta centered">
                <Reveal>
                    <span class="cta-bolt">"⚡"</span>
                    <h2 class="display-heading large">"Reserve your table."</h2>
                    <p class="body-text">{BOOKING_CTA_BODY}</p>
                    <A href="/book" attr:class="btn-outline">"Make a reservation"</A>
                </Reveal>
            </section>
        </div>
    }
}
