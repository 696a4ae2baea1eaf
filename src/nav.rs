use std::rc::Rc;

use crate::dom::{ClassTarget, Listener, Page};
use crate::reveal::ACTIVE;

/// Open/close state of the mobile menu, shared by the button and the panel.
pub struct NavToggle<T> {
    button: T,
    panel: T,
}

impl<T: ClassTarget> NavToggle<T> {
    pub fn new(button: T, panel: T) -> Self {
        Self { button, panel }
    }

    pub fn toggle(&self) {
        self.panel.toggle_class(ACTIVE);
        self.button.toggle_class(ACTIVE);
    }

    pub fn close(&self) {
        self.panel.set_class(ACTIVE, false);
        self.button.set_class(ACTIVE, false);
    }

    pub fn is_open(&self) -> bool {
        self.panel.has_class(ACTIVE)
    }
}

pub struct MobileNav {
    _listeners: Vec<Listener>,
}

impl MobileNav {
    pub fn mount(page: &Page) -> Option<Self> {
        let button = page.query(".hamburger")?;
        let panel = page.query(".nav-links")?;
        let toggle = Rc::new(NavToggle::new(button.clone(), panel));

        let mut listeners = Vec::new();
        {
            let toggle = toggle.clone();
            listeners.push(Listener::new(&button, "click", move |_| toggle.toggle()));
        }
        for link in page.query_all(".nav-links a") {
            let toggle = toggle.clone();
            listeners.push(Listener::new(&link, "click", move |_| toggle.close()));
        }
        Some(Self {
            _listeners: listeners,
        })
    }
}
