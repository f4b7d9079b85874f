use crate::config::PageConfig;
use crate::dom::Document;

/// Start the scroll-animation library when the page loaded it. Animations are
/// disabled for readers who prefer reduced motion.
pub fn init<D: Document>(dom: &D, config: &PageConfig) -> bool {
    let mut settings = config.animations.clone();
    settings.disable = settings.disable || dom.prefers_reduced_motion();
    dom.init_scroll_animations(&settings)
}
