//! About Page
//!
//! Founders' story, pull-quote and values.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::Reveal;
use crate::content::{
    ABOUT_HERO_HEADING, FOUNDERS_QUOTE, FOUNDERS_SIGNATURE, PULL_QUOTE, STORY, STORY_HEADING, VALUES,
};
use crate::context::use_site;
use crate::markdown::{parse_markdown, parse_markdown_inline};

#[component]
pub fn AboutPage() -> impl IntoView {
    let images = use_site().config().images;

    view! {
        <Title text="Our story · BliksemCafe" />
        <div class="page about">
            <section class="page-hero tall">
                <img src=images.about_hero alt="BliksemCafe — warm coffee being poured" />
                <div class="hero-overlay soft"></div>
                <div class="page-hero-content container">
                    <p class="eyebrow fade-up">"Our story"</p>
                    <h1 class="page-title rise" inner_html=parse_markdown_inline(ABOUT_HERO_HEADING)></h1>
                </div>
            </section>

            <section class="section">
                <div class="container narrow">
                    <Reveal>
                        <blockquote class="founders-quote">
                            <p>{FOUNDERS_QUOTE}</p>
                            <footer>{FOUNDERS_SIGNATURE}</footer>
                        </blockquote>
                    </Reveal>
                </div>
            </section>

            <section class="section story">
                <div class="container two-column">
                    <Reveal class="story-image">
                        <img src=images.barista alt="A BliksemCafe barista at work" loading="lazy" />
                        <div class="gold-offset"></div>
                    </Reveal>
                    <Reveal index=1 class="story-text">
                        <p class="eyebrow">"How it began"</p>
                        <h2 class="display-heading" inner_html=parse_markdown_inline(STORY_HEADING)></h2>
                        <div class="gold-rule short"></div>
                        <div class="prose" inner_html=parse_markdown(STORY)></div>
                    </Reveal>
                </div>
            </section>

            <section class="section pull-quote centered">
                <Reveal>
                    <div class="gold-rule vertical"></div>
                    <p class="eyebrow">"What we believe"</p>
                    <p class="pull-quote-text" inner_html=parse_markdown_inline(PULL_QUOTE)></p>
                    <div class="gold-rule vertical"></div>
                </Reveal>
            </section>

            <section class="section values">
                <div class="container">
                    <div class="centered">
                        <h2 class="display-heading">"How we work"</h2>
                    </div>
                    <div class="values-grid">
                        {VALUES.iter().enumerate().map(|(i, value)| view! {
                            <Reveal index=i class="value-card">
                                <p class="value-number">{value.number}</p>
                                <div class="gold-rule tiny"></div>
                                <h3 class="card-heading">{value.title}</h3>
                                <p class="body-text small">{value.body}</p>
                            </Reveal>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            <section class="full-bleed">
                <img src=images.window_seat alt="A quiet corner at BliksemCafe" loading="lazy" />
                <div class="full-bleed-overlay">
                    <Reveal class="centered">
                        <p class="eyebrow">"Come as you are"</p>
                        <h2 class="display-heading">"The chair is waiting for you."</h2>
                    </Reveal>
                </div>
            </section>

            <section class="section centered">
                <Reveal class="dual-cta">
                    <A href="/menu" attr:class="btn-solid">"See the menu"</A>
                    <A href="/book" attr:class="btn-outline light">"Reserve a table"</A>
                </Reveal>
            </section>
        </div>
    }
}
