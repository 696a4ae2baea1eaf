use log::info;
use yew::AppHandle;

use crate::anchor::AnchorScroll;
use crate::config::PageSettings;
use crate::dom::Page;
use crate::header::HeaderScroll;
use crate::hero::HeroSequence;
use crate::nav::MobileNav;
use crate::reveal::RevealOnScroll;
use crate::reviews::form::{mount_review_form, ReviewForm};
use crate::reviews::population::ReviewPopulation;
use crate::year::stamp_current_year;

/// Every page behaviour, mounted once. A behaviour whose elements are missing
/// from the page is simply absent. Dropping the controller unregisters all
/// listeners and stops pending animations.
pub struct PageController {
    pub reveal: Option<RevealOnScroll>,
    pub hero: Option<HeroSequence>,
    pub nav: Option<MobileNav>,
    pub header: Option<HeaderScroll>,
    pub anchors: Option<AnchorScroll>,
    pub reviews: ReviewPopulation,
    pub review_form: Option<AppHandle<ReviewForm>>,
}

impl PageController {
    pub fn mount(page: &Page, settings: &PageSettings) -> Self {
        let controller = Self {
            reveal: RevealOnScroll::mount(page, settings),
            nav: MobileNav::mount(page),
            header: HeaderScroll::mount(page, settings),
            reviews: ReviewPopulation::start(page, settings),
            hero: HeroSequence::mount(page, settings),
            anchors: AnchorScroll::mount(page, settings),
            review_form: mount_review_form(page),
        };
        let stamped = stamp_current_year(page);

        info!(
            "Page mounted: reveal={} hero={} nav={} header={} anchors={} form={} year={}",
            controller.reveal.is_some(),
            controller.hero.is_some(),
            controller.nav.is_some(),
            controller.header.is_some(),
            controller.anchors.is_some(),
            controller.review_form.is_some(),
            stamped,
        );
        controller
    }
}
