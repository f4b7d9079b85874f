use crate::config::PageConfig;
use crate::dom::{Document, Element, EventCtx, EventKind, Selector};

/// Block submission of invalid forms and reveal their validation feedback.
pub fn bind<D: Document>(dom: &D, config: &PageConfig) -> usize {
    let forms = dom.query_all(&Selector::class(config.form_class.clone()));
    for form in &forms {
        let target = form.clone();
        let validated = config.validated_class.clone();
        dom.listen(
            form,
            EventKind::Submit,
            Box::new(move |ctx: &mut EventCtx| {
                if !target.check_validity() {
                    ctx.prevent_default();
                    ctx.stop_propagation();
                }
                target.add_class(&validated);
            }),
        );
    }
    forms.len()
}
