
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:8080"  // Review service when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production
}

/// Tunables for the page behaviours. Everything is fixed at compile time.
#[derive(Clone, Debug, PartialEq)]
pub struct PageSettings {
    /// Fraction of the viewport height an element's top must be above to reveal.
    pub reveal_ratio: f64,
    /// Vertical scroll offset (px) past which the header gets `scrolled`.
    pub header_threshold: f64,
    /// Space (px) kept free above an anchor target for the fixed header.
    pub anchor_offset: f64,
    pub hero_delay_ms: u32,
    pub hero_stagger_ms: u32,
    pub fallback_delay_ms: u32,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            reveal_ratio: 0.8,
            header_threshold: 100.0,
            anchor_offset: 80.0,
            hero_delay_ms: 500,
            hero_stagger_ms: 300,
            fallback_delay_ms: 1_000,
        }
    }
}
