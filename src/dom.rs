use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, ScrollBehavior, ScrollToOptions, Window};

/// Something that carries CSS classes. Implemented for DOM elements, and for
/// plain in-memory fakes in tests.
pub trait ClassTarget {
    fn has_class(&self, name: &str) -> bool;
    fn set_class(&self, name: &str, on: bool);

    /// Flips `name` and returns whether it is now present.
    fn toggle_class(&self, name: &str) -> bool {
        let on = !self.has_class(name);
        self.set_class(name, on);
        on
    }
}

impl ClassTarget for Element {
    fn has_class(&self, name: &str) -> bool {
        self.class_list().contains(name)
    }

    fn set_class(&self, name: &str, on: bool) {
        let _ = self.class_list().toggle_with_force(name, on);
    }
}

impl<T: ClassTarget + ?Sized> ClassTarget for Rc<T> {
    fn has_class(&self, name: &str) -> bool {
        (**self).has_class(name)
    }

    fn set_class(&self, name: &str, on: bool) {
        (**self).set_class(name, on)
    }
}

/// Typed access to the current page. Every behaviour resolves its elements
/// through this once, at mount time.
#[derive(Clone)]
pub struct Page {
    window: Window,
    document: Document,
}

impl Page {
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    pub fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    /// `innerHeight`, or the root element's client height when the window
    /// reports nothing usable.
    pub fn viewport_height(&self) -> f64 {
        let inner = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        if inner > 0.0 {
            return inner;
        }
        self.document
            .document_element()
            .map(|root| root.client_height() as f64)
            .unwrap_or(0.0)
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    pub fn scroll_smoothly_to(&self, top: f64) {
        let mut options = ScrollToOptions::new();
        options.top(top);
        options.behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// An event listener that stays registered for as long as this value lives.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        if let Err(err) =
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to register {} listener: {:?}", event, err);
        }
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
