use std::cell::Cell;
use std::rc::Rc;

use crate::dom::{Document, EventCtx, EventKind};

/// Coalesces bursts of triggers into at most one pending recomputation per
/// animation frame.
#[derive(Debug, Clone, Default)]
pub struct FrameThrottle {
    ticking: Rc<Cell<bool>>,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.ticking.get()
    }

    /// Queue `update` for the next frame unless one is already queued.
    /// Returns whether a frame was requested.
    pub fn schedule<D: Document>(&self, dom: &D, update: Rc<dyn Fn()>) -> bool {
        if self.ticking.get() {
            return false;
        }
        self.ticking.set(true);

        let ticking = Rc::clone(&self.ticking);
        dom.request_frame(Box::new(move || {
            update();
            ticking.set(false);
        }));
        true
    }
}

/// Run `update` at most once per frame while the window scrolls.
pub fn on_scroll_throttled<D: Document>(dom: &D, update: Rc<dyn Fn()>) -> FrameThrottle {
    let throttle = FrameThrottle::new();
    let handle = throttle.clone();
    let frame_dom = dom.clone();
    dom.listen_window(
        EventKind::Scroll,
        Box::new(move |_: &mut EventCtx| {
            handle.schedule(&frame_dom, Rc::clone(&update));
        }),
    );
    throttle
}
