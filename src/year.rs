use chrono::{Datelike, Local};

use crate::dom::Page;

pub fn year_text<D: Datelike>(date: &D) -> String {
    date.year().to_string()
}

/// Writes the current year into `#current-year`. Returns false when the page
/// has no such placeholder.
pub fn stamp_current_year(page: &Page) -> bool {
    let Some(element) = page.by_id("current-year") else {
        return false;
    };
    element.set_text_content(Some(&year_text(&Local::now())));
    true
}
