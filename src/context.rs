//! Site Context
//!
//! Configuration and viewport signals provided via Leptos Context API.

use leptos::prelude::*;
use leptos_viewport::ViewportSignals;

use crate::config::SiteConfig;

/// Site-wide read-only state provided via context
#[derive(Clone, Copy)]
pub struct SiteContext {
    config: StoredValue<SiteConfig>,
    /// Scroll offset and viewport height
    pub viewport: ViewportSignals,
}

impl SiteContext {
    pub fn new(config: SiteConfig, viewport: ViewportSignals) -> Self {
        Self {
            config: StoredValue::new(config),
            viewport,
        }
    }

    /// Read from the configuration without cloning it
    pub fn with_config<R>(&self, f: impl FnOnce(&SiteConfig) -> R) -> R {
        self.config.with_value(f)
    }

    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }

    pub fn scroll_threshold(&self) -> f64 {
        self.with_config(|c| c.behaviour.scroll_threshold_px)
    }
}

pub fn use_site() -> SiteContext {
    expect_context::<SiteContext>()
}
