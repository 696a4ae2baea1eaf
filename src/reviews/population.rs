use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::AppHandle;

use crate::config::PageSettings;
use crate::dom::Page;
use crate::reviews::api::fetch_reviews;
use crate::reviews::board::{ListView, ReviewBoard, Update};
use crate::reviews::models::Category;
use crate::reviews::render::{ReviewList, ReviewListProps};

/// A review container on the page, re-rendered wholesale on every update.
struct ListMount {
    category: Category,
    root: Element,
    app: Option<AppHandle<ReviewList>>,
}

impl ListMount {
    fn find(page: &Page, category: Category) -> Option<Self> {
        let root = page.by_id(category.container_id())?;
        Some(Self {
            category,
            root,
            app: None,
        })
    }

    fn show(&mut self, view: ListView) {
        let root = &self.root;
        prepare(self.app.take(), || root.set_inner_html(""), AppHandle::destroy);
        let props = ReviewListProps {
            category: self.category,
            view,
        };
        self.app = Some(
            yew::Renderer::<ReviewList>::with_root_and_props(self.root.clone(), props).render(),
        );
    }
}

/// Readies a container for a fresh render. The page's placeholder markup is
/// cleared only before the first mount; after that the previous app is
/// destroyed and removes its own nodes.
fn prepare<A>(previous: Option<A>, clear: impl FnOnce(), destroy: impl FnOnce(A)) {
    match previous {
        Some(app) => destroy(app),
        None => clear(),
    }
}

struct Lists {
    board: ReviewBoard,
    mounts: Vec<ListMount>,
}

impl Lists {
    fn apply(&mut self, update: Update) {
        match self.mounts.iter_mut().find(|m| m.category == update.category) {
            Some(mount) => {
                debug!("Rendering {} {} list entries", update.view.len(), update.category.query_value());
                mount.show(update.view);
            }
            None => debug!("No #{} on this page", update.category.container_id()),
        }
    }
}

/// Fills `#positive-list` and `#negative-list` from the review service, with
/// the static examples as a fallback.
pub struct ReviewPopulation {
    _lists: Rc<RefCell<Lists>>,
}

impl ReviewPopulation {
    pub fn start(page: &Page, settings: &PageSettings) -> Self {
        let mounts: Vec<ListMount> = Category::ALL
            .into_iter()
            .filter_map(|category| ListMount::find(page, category))
            .collect();
        let positive_present = mounts.iter().any(|m| m.category == Category::Positive);
        let lists = Rc::new(RefCell::new(Lists {
            board: ReviewBoard::new(),
            mounts,
        }));

        for category in Category::ALL {
            let lists = lists.clone();
            spawn_local(async move {
                let result = fetch_reviews(category).await;
                let mut lists = lists.borrow_mut();
                if let Some(update) = lists.board.on_fetched(category, result) {
                    lists.apply(update);
                }
                if lists.board.is_settled() {
                    debug!("Both review requests have answered");
                }
            });
        }

        {
            let lists = lists.clone();
            let delay = settings.fallback_delay_ms;
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                let mut lists = lists.borrow_mut();
                let updates = lists.board.on_deadline(positive_present);
                if !updates.is_empty() {
                    info!("No positive reviews after {}ms, showing examples", delay);
                }
                for update in updates {
                    lists.apply(update);
                }
            });
        }

        Self { _lists: lists }
    }
}
