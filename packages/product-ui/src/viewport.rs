use dioxus::prelude::*;
use product_core::{visible_count, VisibleCount};

/// Viewport assumed when there is no browser window to measure.
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 1280.0;

/// Number of cards the carousel shows for `source`.
///
/// A responsive source is measured on mount and again on every window `resize` and
/// `orientationchange`. The listeners are removed when the calling component unmounts.
pub fn use_visible_count(source: VisibleCount) -> usize {
    let mut count = use_signal(move || match source {
        VisibleCount::Fixed(count) => count.max(1),
        VisibleCount::Responsive => measure().unwrap_or_else(|| {
            tracing::debug!("no viewport to measure, assuming {FALLBACK_VIEWPORT_WIDTH}px landscape");
            visible_count(FALLBACK_VIEWPORT_WIDTH, false)
        }),
    });

    let on_change = use_callback(move |measured: usize| {
        if *count.peek() != measured {
            count.set(measured);
        }
    });

    let listener = use_hook(move || {
        let listener = match source {
            VisibleCount::Responsive => listen(on_change),
            VisibleCount::Fixed(_) => None,
        };
        std::rc::Rc::new(std::cell::RefCell::new(listener))
    });

    use_drop(move || {
        if let Some(listener) = listener.borrow_mut().take() {
            listener.remove();
        }
    });

    count()
}

#[cfg(target_arch = "wasm32")]
use web::{listen, measure};

#[cfg(not(target_arch = "wasm32"))]
use native::{listen, measure};

#[cfg(target_arch = "wasm32")]
mod web {
    use dioxus::prelude::Callback;
    use product_core::visible_count;
    use wasm_bindgen::{closure::Closure, JsCast};
    use web_sys::Window;

    const VIEWPORT_EVENTS: [&str; 2] = ["resize", "orientationchange"];
    const PORTRAIT_QUERY: &str = "(orientation: portrait)";

    pub(super) struct ViewportListener {
        window: Window,
        handler: Closure<dyn Fn()>,
    }

    impl ViewportListener {
        pub(super) fn remove(self) {
            for event in VIEWPORT_EVENTS {
                if let Err(err) = self
                    .window
                    .remove_event_listener_with_callback(event, self.handler.as_ref().unchecked_ref())
                {
                    tracing::warn!("failed to remove {event} listener: {err:?}");
                }
            }
        }
    }

    fn measure_window(window: &Window) -> Option<usize> {
        let width = window.inner_width().ok()?.as_f64()?;
        let portrait = window
            .match_media(PORTRAIT_QUERY)
            .ok()
            .flatten()
            .is_some_and(|query| query.matches());
        Some(visible_count(width, portrait))
    }

    pub(super) fn measure() -> Option<usize> {
        measure_window(&web_sys::window()?)
    }

    pub(super) fn listen(on_change: Callback<usize>) -> Option<ViewportListener> {
        let window = web_sys::window()?;

        let handler: Closure<dyn Fn()> = Closure::new({
            let window = window.clone();
            move || {
                if let Some(count) = measure_window(&window) {
                    on_change.call(count);
                }
            }
        });

        for event in VIEWPORT_EVENTS {
            if let Err(err) =
                window.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
            {
                tracing::warn!("failed to listen for {event}: {err:?}");
            }
        }

        Some(ViewportListener { window, handler })
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use dioxus::prelude::Callback;

    pub(super) struct ViewportListener;

    impl ViewportListener {
        pub(super) fn remove(self) {}
    }

    pub(super) fn measure() -> Option<usize> {
        None
    }

    pub(super) fn listen(_on_change: Callback<usize>) -> Option<ViewportListener> {
        None
    }
}
