use crate::config::PageConfig;
use crate::dom::{Document, Element, ObserverOptions, Selector};

/// Move the deferred source into `src`. Returns false when there was none.
pub fn promote<E: Element>(image: &E, src_attr: &str) -> bool {
    let Some(src) = image.attribute(src_attr) else {
        return false;
    };
    image.set_attribute("src", &src);
    image.remove_attribute(src_attr);
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LazyMode {
    Native,
    Observed,
}

/// Load deferred images now (native lazy loading) or as they near the
/// viewport. Returns the mode used and how many images were found.
pub fn bind<D: Document>(dom: &D, config: &PageConfig) -> (LazyMode, usize) {
    let src_attr = config.lazy_src_attr.clone();
    let images = dom.query_all(&Selector::TagAttr("img".into(), src_attr.clone()));
    let count = images.len();

    if dom.supports_native_lazy_loading() {
        for image in &images {
            promote(image, &src_attr);
        }
        return (LazyMode::Native, count);
    }

    if count > 0 {
        let options = ObserverOptions {
            root_margin: config.lazy_root_margin.clone(),
            threshold: config.lazy_threshold,
        };
        dom.observe_visibility(
            images,
            &options,
            Box::new(move |image: &D::Element| {
                promote(image, &src_attr);
                false
            }),
        );
    }
    (LazyMode::Observed, count)
}
