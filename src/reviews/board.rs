use log::{info, warn};

use crate::reviews::api::ReviewError;
use crate::reviews::models::{examples, Category, ExampleReview, Review};

/// What a list container should show.
#[derive(Clone, Debug, PartialEq)]
pub enum ListView {
    Reviews(Vec<Review>),
    Examples(&'static [ExampleReview]),
}

impl ListView {
    pub fn len(&self) -> usize {
        match self {
            ListView::Reviews(reviews) => reviews.len(),
            ListView::Examples(examples) => examples.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListState {
    Pending,
    Loaded,
    Failed,
    Fallback,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Update {
    pub category: Category,
    pub view: ListView,
}

/// Decides what each review list shows as fetch results and the fallback
/// deadline arrive, in whatever order they come.
///
/// A real result always wins: it is shown even after the fallback, and the
/// fallback never replaces it.
#[derive(Debug)]
pub struct ReviewBoard {
    states: [ListState; 2],
}

impl ReviewBoard {
    pub fn new() -> Self {
        Self {
            states: [ListState::Pending; 2],
        }
    }

    pub fn state(&self, category: Category) -> ListState {
        self.states[category.index()]
    }

    pub fn on_fetched(
        &mut self,
        category: Category,
        result: Result<Vec<Review>, ReviewError>,
    ) -> Option<Update> {
        match result {
            Ok(reviews) => {
                if self.state(category) == ListState::Fallback {
                    info!("Replacing {} examples with {} reviews", category.query_value(), reviews.len());
                }
                self.states[category.index()] = ListState::Loaded;
                Some(Update {
                    category,
                    view: ListView::Reviews(reviews),
                })
            }
            Err(err) => {
                warn!("Failed to load {} reviews: {}", category.query_value(), err);
                if self.state(category) == ListState::Pending {
                    self.states[category.index()] = ListState::Failed;
                }
                None
            }
        }
    }

    /// Called once the fallback delay has passed. Nothing changes when the
    /// page has no positive list, or when it already holds real reviews.
    pub fn on_deadline(&mut self, positive_present: bool) -> Vec<Update> {
        if !positive_present || self.state(Category::Positive) == ListState::Loaded {
            return Vec::new();
        }
        let mut updates = Vec::new();
        for category in Category::ALL {
            if self.state(category) == ListState::Loaded {
                continue;
            }
            self.states[category.index()] = ListState::Fallback;
            updates.push(Update {
                category,
                view: ListView::Examples(examples(category)),
            });
        }
        updates
    }

    pub fn is_settled(&self) -> bool {
        self.states.iter().all(|state| *state != ListState::Pending)
    }
}

impl Default for ReviewBoard {
    fn default() -> Self {
        Self::new()
    }
}
