//! Leptos Viewport Observer
//!
//! Scroll position and viewport height as reactive signals.
//! The browser window is one `ViewportSource`; tests inject a `FixedViewport`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Anything that can report the current scroll offset and viewport height
pub trait ViewportSource {
    /// Vertical scroll offset in CSS pixels
    fn scroll_y(&self) -> f64;
    /// Visible viewport height in CSS pixels
    fn inner_height(&self) -> f64;
}

/// The browser window
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowViewport;

impl ViewportSource for WindowViewport {
    fn scroll_y(&self) -> f64 {
        web_sys::window()
            .and_then(|win| win.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn inner_height(&self) -> f64 {
        web_sys::window()
            .and_then(|win| win.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }
}

/// A viewport frozen at fixed values
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedViewport {
    pub scroll_y: f64,
    pub height: f64,
}

impl FixedViewport {
    pub fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }
}

impl ViewportSource for FixedViewport {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn inner_height(&self) -> f64 {
        self.height
    }
}

/// Viewport state signals
#[derive(Clone, Copy)]
pub struct ViewportSignals {
    pub scroll_y_read: ReadSignal<f64>,
    pub scroll_y_write: WriteSignal<f64>,
    pub height_read: ReadSignal<f64>,
    pub height_write: WriteSignal<f64>,
}

pub fn create_viewport_signals() -> ViewportSignals {
    let (scroll_y_read, scroll_y_write) = signal(0.0f64);
    let (height_read, height_write) = signal(0.0f64);
    ViewportSignals {
        scroll_y_read,
        scroll_y_write,
        height_read,
        height_write,
    }
}

/// Copy the source's current values into the signals.
/// Unchanged values are not re-set, so subscribers only wake on real movement.
pub fn sample<S: ViewportSource>(vp: &ViewportSignals, source: &S) {
    let y = source.scroll_y();
    if vp.scroll_y_read.get_untracked() != y {
        vp.scroll_y_write.set(y);
    }
    let h = source.inner_height();
    if vp.height_read.get_untracked() != h {
        vp.height_write.set(h);
    }
}

/// Bind passive scroll and resize listeners on the window.
/// Listeners live for the whole page visit.
pub fn bind_window_viewport(vp: ViewportSignals) {
    use wasm_bindgen::closure::Closure;

    sample(&vp, &WindowViewport);

    let on_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        sample(&vp, &WindowViewport);
    });

    if let Some(win) = web_sys::window() {
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        for event in ["scroll", "resize"] {
            let _ = win.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                on_change.as_ref().unchecked_ref(),
                &options,
            );
        }
    }
    on_change.forget();
}

/// Top edge of an element relative to the viewport, if it is attached
pub fn element_top(el: &web_sys::Element) -> f64 {
    el.get_bounding_client_rect().top()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_fixed_viewport_reports_values() {
        let vp = FixedViewport::new(120.0, 800.0);
        assert_eq!(vp.scroll_y(), 120.0);
        assert_eq!(vp.inner_height(), 800.0);
    }

    #[test]
    fn test_sample_copies_source_into_signals() {
        let owner = Owner::new();
        owner.with(|| {
            let vp = create_viewport_signals();
            assert_eq!(vp.scroll_y_read.get_untracked(), 0.0);

            sample(&vp, &FixedViewport::new(61.0, 720.0));
            assert_eq!(vp.scroll_y_read.get_untracked(), 61.0);
            assert_eq!(vp.height_read.get_untracked(), 720.0);

            sample(&vp, &FixedViewport::new(0.0, 720.0));
            assert_eq!(vp.scroll_y_read.get_untracked(), 0.0);
        });
    }
}
