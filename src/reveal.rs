use log::debug;
use web_sys::Element;

use crate::config::PageSettings;
use crate::dom::{ClassTarget, Listener, Page};

pub const ACTIVE: &str = "active";
const HERO_MARKER: &str = "hero-element";

/// An element whose top edge can be measured against the viewport.
pub trait RevealTarget: ClassTarget {
    fn top(&self) -> f64;
}

impl RevealTarget for Element {
    fn top(&self) -> f64 {
        self.get_bounding_client_rect().top()
    }
}

pub fn within_reveal_zone(top: f64, viewport_height: f64, ratio: f64) -> bool {
    top <= viewport_height * ratio
}

/// The revealable elements of a page. Activation is one-way.
pub struct RevealSet<T> {
    elements: Vec<T>,
    ratio: f64,
}

impl<T: RevealTarget> RevealSet<T> {
    pub fn new(elements: Vec<T>, ratio: f64) -> Self {
        Self { elements, ratio }
    }

    /// Activates every pending element inside the zone and returns how many
    /// changed.
    pub fn sweep(&self, viewport_height: f64) -> usize {
        let mut activated = 0;
        for element in self.elements.iter().filter(|e| !e.has_class(ACTIVE)) {
            if within_reveal_zone(element.top(), viewport_height, self.ratio) {
                element.set_class(ACTIVE, true);
                activated += 1;
            }
        }
        activated
    }

    pub fn pending(&self) -> usize {
        self.elements.iter().filter(|e| !e.has_class(ACTIVE)).count()
    }
}

fn is_hero(element: &Element) -> bool {
    element.class_list().contains(HERO_MARKER)
        || element.closest(".hero").ok().flatten().is_some()
}

pub struct RevealOnScroll {
    _scroll: Listener,
}

impl RevealOnScroll {
    pub fn mount(page: &Page, settings: &PageSettings) -> Option<Self> {
        let elements: Vec<Element> = page
            .query_all(".reveal-fade")
            .into_iter()
            .filter(|element| !is_hero(element))
            .collect();
        if elements.is_empty() {
            return None;
        }

        let set = RevealSet::new(elements, settings.reveal_ratio);
        let shown = set.sweep(page.viewport_height());
        debug!("Reveal: {} shown on load, {} waiting", shown, set.pending());

        let scroll_page = page.clone();
        let scroll = Listener::new(page.window(), "scroll", move |_| {
            set.sweep(scroll_page.viewport_height());
        });
        Some(Self { _scroll: scroll })
    }
}
