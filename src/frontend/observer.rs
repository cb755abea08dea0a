use crate::chart::reveal::{DEFAULT_VISIBILITY_THRESHOLD, VisibilityEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// The visibility-event channel: one IntersectionObserver instance for the
/// whole chart, reporting `(country, is_visible)` events into a single
/// handler instead of an observer callback per element.
///
/// Dropping the channel disconnects the observer and releases every
/// observation, so re-renders replace the whole observer set at once.
pub struct VisibilityChannel {
    observer: IntersectionObserver,
    // Keeps the JS callback alive for the observer's lifetime.
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl VisibilityChannel {
    /// Create the observer with the default visibility threshold. Bar
    /// identity travels on the element's `data-country` attribute.
    pub fn new(mut on_event: impl FnMut(VisibilityEvent) + 'static) -> Result<Self, String> {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let Some(country) = entry.target().get_attribute("data-country") else {
                    continue;
                };
                on_event(VisibilityEvent {
                    country,
                    is_visible: entry.is_intersecting(),
                });
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(DEFAULT_VISIBILITY_THRESHOLD));

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|_| "failed to create IntersectionObserver".to_string())?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    pub fn unobserve(&self, element: &Element) {
        self.observer.unobserve(element);
    }
}

impl Drop for VisibilityChannel {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
