//! Page interaction handlers. Each one is bound independently; none of them
//! share state.

pub mod a11y;
pub mod animations;
pub mod back_to_top;
pub mod forms;
pub mod lazy;
pub mod navbar;
pub mod progress;
pub mod sections;
pub mod smooth_scroll;
pub mod throttle;

pub use lazy::LazyMode;
pub use throttle::FrameThrottle;

use crate::config::PageConfig;
use crate::dom::Document;

/// What `PageController::init` found on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct InitSummary {
    pub animations: bool,
    pub navbar: bool,
    pub section_highlight: bool,
    pub smooth_scroll_links: usize,
    pub progress_bar: bool,
    pub lazy_mode: LazyMode,
    pub lazy_images: usize,
    pub back_to_top: bool,
    pub forms: usize,
    pub skip_link: bool,
    pub cards: usize,
}

pub struct PageController;

impl PageController {
    /// Bind every handler to the page. Safe to call on pages that only have
    /// some of the elements; the rest are skipped.
    pub fn init<D: Document>(dom: &D, config: &PageConfig) -> InitSummary {
        let animations = animations::init(dom, config);
        let navbar = navbar::bind(dom, config);
        let section_highlight = sections::bind(dom, config);
        let smooth_scroll_links = smooth_scroll::bind(dom, config);
        let progress_bar = progress::bind(dom, config).is_some();
        let (lazy_mode, lazy_images) = lazy::bind(dom, config);
        let back_to_top = back_to_top::bind(dom, config);
        let forms = forms::bind(dom, config);
        let skip_link = a11y::bind_skip_link(dom, config);
        let cards = a11y::bind_cards(dom, config);

        let summary = InitSummary {
            animations,
            navbar,
            section_highlight,
            smooth_scroll_links,
            progress_bar,
            lazy_mode,
            lazy_images,
            back_to_top,
            forms,
            skip_link,
            cards,
        };
        tracing::info!("site initialized: {summary:?}");
        summary
    }
}
