use crate::config::PageSettings;
use crate::dom::{ClassTarget, Listener, Page};

pub const SCROLLED: &str = "scrolled";

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub struct HeaderStyle<T> {
    header: T,
    threshold: f64,
}

impl<T: ClassTarget> HeaderStyle<T> {
    pub fn new(header: T, threshold: f64) -> Self {
        Self { header, threshold }
    }

    pub fn apply(&self, scroll_y: f64) {
        self.header
            .set_class(SCROLLED, is_scrolled(scroll_y, self.threshold));
    }
}

pub struct HeaderScroll {
    _scroll: Listener,
}

impl HeaderScroll {
    pub fn mount(page: &Page, settings: &PageSettings) -> Option<Self> {
        let header = page.query("header")?;
        let style = HeaderStyle::new(header, settings.header_threshold);
        // A reload can land mid-page.
        style.apply(page.scroll_y());

        let scroll_page = page.clone();
        let scroll = Listener::new(page.window(), "scroll", move |_| {
            style.apply(scroll_page.scroll_y());
        });
        Some(Self { _scroll: scroll })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::testing::FakeElement;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(100.0, 100.0));
        assert!(is_scrolled(100.5, 100.0));
        assert!(!is_scrolled(0.0, 100.0));
    }

    #[test]
    fn style_follows_scroll_position_both_ways() {
        let style = HeaderStyle::new(FakeElement::default(), 100.0);
        style.apply(250.0);
        assert!(style.header.has_class(SCROLLED));
        style.apply(250.0);
        assert!(style.header.has_class(SCROLLED));
        style.apply(40.0);
        assert!(!style.header.has_class(SCROLLED));
    }
}
