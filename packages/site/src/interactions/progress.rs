use std::rc::Rc;

use super::throttle::on_scroll_throttled;
use crate::config::PageConfig;
use crate::dom::{Document, Element};

/// How far down the page the reader is, in percent.
pub fn scroll_percent(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Inject the progress bar at the top of `<body>` and keep its width in step
/// with the scroll position.
pub fn bind<D: Document>(dom: &D, config: &PageConfig) -> Option<D::Element> {
    let bar = dom.create_element("div")?;
    bar.set_attribute("class", &config.progress_class);
    bar.set_style("width", "0%");
    dom.prepend_to_body(&bar);

    let frame_dom = dom.clone();
    let frame_bar = bar.clone();
    let update: Rc<dyn Fn()> = Rc::new(move || {
        let percent = scroll_percent(
            frame_dom.scroll_y(),
            frame_dom.scroll_height(),
            frame_dom.viewport_height(),
        );
        frame_bar.set_style("width", &format!("{percent}%"));
    });

    on_scroll_throttled(dom, update);
    Some(bar)
}
