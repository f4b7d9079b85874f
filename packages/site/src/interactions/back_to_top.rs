use crate::config::PageConfig;
use crate::dom::{Document, EventCtx, EventKind, ScrollBehavior, Selector};

pub fn bind<D: Document>(dom: &D, config: &PageConfig) -> bool {
    let href = format!("#{}", config.page_top_id);
    let Some(control) = dom.query_first(&Selector::TagAttrEq("a".into(), "href".into(), href)) else {
        return false;
    };

    let dom_handle = dom.clone();
    dom.listen(
        &control,
        EventKind::Click,
        Box::new(move |ctx: &mut EventCtx| {
            ctx.prevent_default();
            dom_handle.scroll_to(0.0, ScrollBehavior::Smooth);
        }),
    );
    true
}
