use std::rc::Rc;

use super::throttle::on_scroll_throttled;
use crate::config::PageConfig;
use crate::dom::{Document, Element};

/// Whether the navbar should use its compact, scrolled style.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Toggle the scrolled class on the fixed navbar as the page scrolls.
pub fn bind<D: Document>(dom: &D, config: &PageConfig) -> bool {
    let Some(navbar) = dom.element_by_id(&config.navbar_id) else {
        return false;
    };

    let frame_dom = dom.clone();
    let class = config.scrolled_class.clone();
    let threshold = config.scroll_threshold;
    let update: Rc<dyn Fn()> = Rc::new(move || {
        navbar.toggle_class(&class, is_scrolled(frame_dom.scroll_y(), threshold));
    });

    update();
    on_scroll_throttled(dom, update);
    true
}
