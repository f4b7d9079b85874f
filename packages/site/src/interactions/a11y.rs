use crate::config::PageConfig;
use crate::dom::{fragment_id, Document, Element, EventCtx, EventKind, Selector};

/// The skip link moves keyboard focus to its target.
pub fn bind_skip_link<D: Document>(dom: &D, config: &PageConfig) -> bool {
    let Some(link) = dom.query_first(&Selector::class(config.skip_link_class.clone())) else {
        return false;
    };

    let dom_handle = dom.clone();
    let source = link.clone();
    dom.listen(
        &link,
        EventKind::Click,
        Box::new(move |_: &mut EventCtx| {
            let Some(href) = source.attribute("href") else {
                return;
            };
            let Some(id) = fragment_id(&href) else {
                return;
            };
            if let Some(target) = dom_handle.element_by_id(id) {
                target.set_attribute("tabindex", "-1");
                target.focus();
            }
        }),
    );
    true
}

/// Enter on an interactive card follows the card's link.
pub fn bind_cards<D: Document>(dom: &D, config: &PageConfig) -> usize {
    let selector = Selector::Any(
        config
            .card_classes
            .iter()
            .map(|class| Selector::class(class.clone()))
            .collect(),
    );

    let mut bound = 0;
    for card in dom.query_all(&selector) {
        let Some(link) = card.query_first(&Selector::Tag("a".into())) else {
            continue;
        };
        dom.listen(
            &card,
            EventKind::KeyPress,
            Box::new(move |ctx: &mut EventCtx| {
                if ctx.key.as_deref() == Some("Enter") {
                    link.click();
                }
            }),
        );
        bound += 1;
    }
    bound
}
