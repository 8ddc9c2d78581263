//! Bliksem Cafe Frontend Entry Point

mod app;
mod catalog;
mod components;
mod config;
mod content;
mod context;
mod error;
mod links;
mod markdown;
mod models;
mod motion;
mod nav;
mod pages;
mod reservation;
mod store;

use app::{App, ConfigErrorPage};
use config::SiteConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // Without a logger the site still works, just silently.
    let _ = rolling_logger::init(log::Level::Info, 200);

    match SiteConfig::load() {
        Ok(config) => {
            log::info!("starting {}", config.brand.full_name);
            mount_to_body(move || view! { <App config=config /> });
        }
        Err(err) => {
            log::error!("{}", err);
            let message = err.to_string();
            mount_to_body(move || view! { <ConfigErrorPage message=message /> });
        }
    }
}
