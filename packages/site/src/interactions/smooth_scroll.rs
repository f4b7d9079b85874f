use crate::config::PageConfig;
use crate::dom::{fragment_id, Document, Element, EventCtx, EventKind, ScrollBehavior, Selector};

/// Where to scroll so `target_top` lands just below the fixed navbar.
pub fn target_offset(target_top: f64, navbar_height: f64) -> f64 {
    (target_top - navbar_height).max(0.0)
}

/// Close the mobile navigation panel without its closing transition.
/// Returns whether it was open.
pub fn close_panel_now<D: Document>(dom: &D, config: &PageConfig) -> bool {
    let Some(panel) = dom.query_first(&Selector::class(config.collapse_class.clone())) else {
        return false;
    };
    if !panel.has_class(&config.collapse_open_class) {
        return false;
    }

    panel.remove_class(&config.collapse_open_class);
    panel.remove_class("collapsing");
    if let Some(toggler) = dom.query_first(&Selector::class(config.toggler_class.clone())) {
        toggler.add_class("collapsed");
        toggler.set_attribute("aria-expanded", "false");
    }
    true
}

/// Turn in-page nav links into instant jumps that account for the navbar.
pub fn bind<D: Document>(dom: &D, config: &PageConfig) -> usize {
    let links = dom.query_all(&Selector::class(config.nav_link_class.clone()));
    let mut bound = 0;

    for link in links {
        let Some(href) = link.attribute("href") else {
            continue;
        };
        if !href.starts_with('#') {
            continue;
        }

        let dom_handle = dom.clone();
        let config = config.clone();
        dom.listen(
            &link,
            EventKind::Click,
            Box::new(move |ctx: &mut EventCtx| {
                ctx.prevent_default();
                scroll_to_fragment(&dom_handle, &config, &href);
            }),
        );
        bound += 1;
    }
    bound
}

fn scroll_to_fragment<D: Document>(dom: &D, config: &PageConfig, href: &str) {
    let Some(id) = fragment_id(href) else {
        return;
    };

    if id == config.page_top_id {
        close_panel_now(dom, config);
        dom.scroll_to(0.0, ScrollBehavior::Instant);
        return;
    }

    let Some(target) = dom.element_by_id(id) else {
        tracing::debug!("smooth scroll: no target for {href}");
        return;
    };

    // The panel has to be gone before the offset is read, or the navbar
    // height still includes it.
    close_panel_now(dom, config);
    let navbar_height = dom
        .element_by_id(&config.navbar_id)
        .map(|navbar| navbar.offset_height())
        .unwrap_or(0.0);
    dom.scroll_to(
        target_offset(target.offset_top(), navbar_height),
        ScrollBehavior::Instant,
    );
}
