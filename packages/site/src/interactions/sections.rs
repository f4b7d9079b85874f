use std::rc::Rc;

use super::throttle::on_scroll_throttled;
use crate::config::PageConfig;
use crate::dom::{Document, Element, Selector};

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Section under `scroll_y + lookahead`. When sections overlap the last one
/// in document order wins.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, lookahead: f64) -> Option<&str> {
    let position = scroll_y + lookahead;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(position))
        .map(|section| section.id.as_str())
}

/// Highlight the nav link of the section currently in view.
pub fn bind<D: Document>(dom: &D, config: &PageConfig) -> bool {
    let sections = dom.query_all(&Selector::TagAttr("section".into(), "id".into()));
    let links = dom.query_all(&Selector::class(config.nav_link_class.clone()));
    if sections.is_empty() || links.is_empty() {
        return false;
    }

    let frame_dom = dom.clone();
    let active_class = config.active_class.clone();
    let lookahead = config.section_lookahead;
    let update: Rc<dyn Fn()> = Rc::new(move || {
        // Offsets move with layout, so they are read on every frame.
        let bounds: Vec<SectionBounds> = sections
            .iter()
            .filter_map(|section| {
                Some(SectionBounds {
                    id: section.attribute("id")?,
                    top: section.offset_top(),
                    height: section.offset_height(),
                })
            })
            .collect();

        let Some(active) = active_section(&bounds, frame_dom.scroll_y(), lookahead) else {
            return;
        };
        let target = format!("#{active}");
        for link in &links {
            let is_active = link.attribute("href").as_deref() == Some(target.as_str());
            link.toggle_class(&active_class, is_active);
        }
    });

    on_scroll_throttled(dom, update);
    true
}
