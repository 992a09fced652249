use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{DomRect, Element, Window};
use yew::NodeRef;

pub fn height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

pub fn width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

pub fn scroll_y() -> Option<f64> {
    web_sys::window()?.scroll_y().ok()
}

/// Bounding rectangle of a mounted node, relative to the viewport.
pub fn element_rect(node: &NodeRef) -> Option<DomRect> {
    node.cast::<Element>().map(|el| el.get_bounding_client_rect())
}

/// Callback registered on the window for a set of events.
/// Removed from the window when dropped.
pub struct WindowListener {
    window: Window,
    events: &'static [&'static str],
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(events: &'static [&'static str], callback: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        for event in events {
            let _ = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }
        Some(Self { window, events, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        for event in self.events {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
    }
}
