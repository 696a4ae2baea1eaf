use log::debug;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::PageSettings;
use crate::dom::{Listener, Page};

/// The element id an in-page link points at, percent-decoded. `None` for
/// links that are not fragments and for a bare `#`.
pub fn fragment_id(href: &str) -> Option<String> {
    let raw = href.strip_prefix('#')?;
    if raw.is_empty() {
        return None;
    }
    Some(
        urlencoding::decode(raw)
            .map(|id| id.into_owned())
            .unwrap_or_else(|_| raw.to_string()),
    )
}

pub fn scroll_destination(offset_top: f64, header_offset: f64) -> f64 {
    offset_top - header_offset
}

/// Outcome of a click on an in-page link.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorClick {
    pub prevent_default: bool,
    pub scroll_to: Option<f64>,
}

/// Decides what a click on a `#fragment` link does. `resolve` maps an element
/// id to that element's `offsetTop`. The browser jump is always suppressed;
/// the page only scrolls when the fragment names an existing element.
pub fn on_anchor_click(
    href: Option<&str>,
    resolve: impl Fn(&str) -> Option<f64>,
    header_offset: f64,
) -> AnchorClick {
    let scroll_to = href
        .and_then(fragment_id)
        .and_then(|id| {
            let top = resolve(&id);
            if top.is_none() {
                debug!("Anchor #{} has no target", id);
            }
            top
        })
        .map(|top| scroll_destination(top, header_offset));
    AnchorClick {
        prevent_default: true,
        scroll_to,
    }
}

/// Smooth scrolling for `a[href^="#"]` links.
pub struct AnchorScroll {
    _listeners: Vec<Listener>,
}

impl AnchorScroll {
    pub fn mount(page: &Page, settings: &PageSettings) -> Option<Self> {
        let anchors = page.query_all("a[href^=\"#\"]");
        if anchors.is_empty() {
            return None;
        }

        let listeners = anchors
            .into_iter()
            .map(|anchor| {
                let page = page.clone();
                let offset = settings.anchor_offset;
                let link = anchor.clone();
                Listener::new(&anchor, "click", move |event| {
                    let href = link.get_attribute("href");
                    let click = on_anchor_click(
                        href.as_deref(),
                        |id| {
                            page.by_id(id)
                                .and_then(|target| target.dyn_into::<HtmlElement>().ok())
                                .map(|target| target.offset_top() as f64)
                        },
                        offset,
                    );
                    if click.prevent_default {
                        event.prevent_default();
                    }
                    if let Some(top) = click.scroll_to {
                        page.scroll_smoothly_to(top);
                    }
                })
            })
            .collect();
        Some(Self {
            _listeners: listeners,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fragment() {
        assert_eq!(fragment_id("#sobre").as_deref(), Some("sobre"));
    }

    #[test]
    fn bare_hash_and_non_fragments_are_ignored() {
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("/contato#form"), None);
        assert_eq!(fragment_id(""), None);
    }

    #[test]
    fn fragment_is_percent_decoded() {
        assert_eq!(fragment_id("#avalia%C3%A7%C3%B5es").as_deref(), Some("avaliações"));
    }

    fn sections(id: &str) -> Option<f64> {
        match id {
            "contato" => Some(1500.0),
            "avaliações" => Some(640.0),
            _ => None,
        }
    }

    #[test]
    fn click_on_existing_target_scrolls_below_header() {
        let click = on_anchor_click(Some("#contato"), sections, 80.0);
        assert!(click.prevent_default);
        assert_eq!(click.scroll_to, Some(1420.0));

        let click = on_anchor_click(Some("#avalia%C3%A7%C3%B5es"), sections, 80.0);
        assert_eq!(click.scroll_to, Some(560.0));
    }

    #[test]
    fn click_on_missing_target_only_suppresses_the_jump() {
        let click = on_anchor_click(Some("#nada"), sections, 80.0);
        assert!(click.prevent_default);
        assert_eq!(click.scroll_to, None);
    }

    #[test]
    fn bare_hash_and_missing_href_do_not_scroll() {
        for href in [Some("#"), None] {
            let click = on_anchor_click(href, |_| panic!("nothing to resolve"), 80.0);
            assert!(click.prevent_default);
            assert_eq!(click.scroll_to, None);
        }
    }

    #[test]
    fn destination_leaves_room_for_header() {
        assert_eq!(scroll_destination(1200.0, 80.0), 1120.0);
        assert_eq!(scroll_destination(30.0, 80.0), -50.0);
    }
}
