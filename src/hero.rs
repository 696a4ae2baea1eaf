use log::info;

use crate::config::PageSettings;
use crate::dom::{ClassTarget, Page};
use crate::reveal::ACTIVE;
use crate::timeline::Timeline;

/// Offsets (ms after mount) at which each hero element is revealed.
pub fn hero_offsets(count: usize, delay_ms: u32, stagger_ms: u32) -> Vec<u32> {
    (0..count as u32).map(|i| delay_ms + stagger_ms * i).collect()
}

/// Staggered reveal of the hero block, in document order.
pub struct HeroSequence {
    timeline: Timeline,
}

impl HeroSequence {
    pub fn new<T>(elements: Vec<T>, settings: &PageSettings) -> Self
    where
        T: ClassTarget + 'static,
    {
        let offsets = hero_offsets(
            elements.len(),
            settings.hero_delay_ms,
            settings.hero_stagger_ms,
        );
        let timeline = elements
            .into_iter()
            .zip(offsets)
            .fold(Timeline::new(), |timeline, (element, at)| {
                timeline.at(at, move || element.set_class(ACTIVE, true))
            });
        Self { timeline }
    }

    pub fn mount(page: &Page, settings: &PageSettings) -> Option<Self> {
        let elements = page.query_all(".hero .reveal-fade");
        if elements.is_empty() {
            return None;
        }
        let sequence = Self::new(elements, settings);
        info!("Hero sequence: {} elements", sequence.timeline.len());
        sequence.restart();
        Some(sequence)
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn restart(&self) {
        self.timeline.start();
    }

    pub fn cancel(&self) {
        self.timeline.cancel();
    }
}
