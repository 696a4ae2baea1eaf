use log::{error, info, Level};

use page_controller::config::PageSettings;
use page_controller::controller::PageController;
use page_controller::dom::Page;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting page controller");
    let Some(page) = Page::current() else {
        error!("No window or document, nothing to mount");
        return;
    };
    let controller = PageController::mount(&page, &PageSettings::default());
    // Listeners and timers stay registered for the lifetime of the page.
    std::mem::forget(controller);
}
