//! In-memory document used by tests and by anything that needs to run the
//! handlers without a browser.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::rc::Rc;

use super::{
    Document, Element, EventCtx, EventHandler, EventKind, ObserverOptions, ScrollBehavior,
    Selector,
};
use crate::config::AnimationSettings;

type SharedHandler = Rc<RefCell<EventHandler>>;
type VisibilityCallback = Rc<RefCell<Box<dyn FnMut(&MemoryElement) -> bool>>>;

struct ElementData {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    text: String,
    inner_html: Option<String>,
    children: Vec<MemoryElement>,
    offset_top: f64,
    offset_height: f64,
    style: BTreeMap<String, String>,
    valid: bool,
    focused: bool,
    clicks: u32,
    listeners: Vec<(EventKind, SharedHandler)>,
}

#[derive(Clone)]
pub struct MemoryElement(Rc<RefCell<ElementData>>);

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        f.debug_struct("MemoryElement")
            .field("tag", &data.tag)
            .field("attributes", &data.attributes)
            .field("classes", &data.classes)
            .field("text", &data.text)
            .finish_non_exhaustive()
    }
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl MemoryElement {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(ElementData {
            tag: tag.to_ascii_lowercase(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            text: String::new(),
            inner_html: None,
            children: Vec::new(),
            offset_top: 0.0,
            offset_height: 0.0,
            style: BTreeMap::new(),
            valid: true,
            focused: false,
            clicks: 0,
            listeners: Vec::new(),
        })))
    }

    pub fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        Element::set_attribute(&self, name, value);
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_bounds(self, top: f64, height: f64) -> Self {
        {
            let mut data = self.0.borrow_mut();
            data.offset_top = top;
            data.offset_height = height;
        }
        self
    }

    pub fn with_child(self, child: MemoryElement) -> Self {
        self.append(child);
        self
    }

    /// Make a form fail constraint validation.
    pub fn invalid(self) -> Self {
        self.0.borrow_mut().valid = false;
        self
    }

    pub fn append(&self, child: MemoryElement) {
        self.0.borrow_mut().children.push(child);
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    /// Markup last assigned through `set_inner_html`, if any.
    pub fn inner_html(&self) -> Option<String> {
        self.0.borrow().inner_html.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().style.get(property).cloned()
    }

    pub fn is_focused(&self) -> bool {
        self.0.borrow().focused
    }

    pub fn click_count(&self) -> u32 {
        self.0.borrow().clicks
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.0
            .borrow()
            .listeners
            .iter()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    fn matches(&self, selector: &Selector) -> bool {
        let data = self.0.borrow();
        let tag_is = |tag: &str| data.tag.eq_ignore_ascii_case(tag);
        match selector {
            Selector::Id(id) => data.attributes.get("id") == Some(id),
            Selector::Class(class) => data.classes.iter().any(|c| c == class),
            Selector::Tag(tag) => tag_is(tag),
            Selector::Attr(name) => data.attributes.contains_key(name),
            Selector::TagAttr(tag, name) => tag_is(tag) && data.attributes.contains_key(name),
            Selector::TagAttrEq(tag, name, value) => {
                tag_is(tag) && data.attributes.get(name) == Some(value)
            }
            Selector::Any(options) => options.iter().any(|option| self.matches(option)),
        }
    }

    /// Descendants matching `selector`, in document order.
    fn collect(&self, selector: &Selector, out: &mut Vec<MemoryElement>) {
        let children = self.0.borrow().children.clone();
        for child in children {
            if child.matches(selector) {
                out.push(child.clone());
            }
            child.collect(selector, out);
        }
    }

    fn listen(&self, kind: EventKind, handler: EventHandler) {
        self.0
            .borrow_mut()
            .listeners
            .push((kind, Rc::new(RefCell::new(handler))));
    }

    fn dispatch(&self, kind: EventKind, ctx: EventCtx) -> EventCtx {
        let handlers: Vec<SharedHandler> = self
            .0
            .borrow()
            .listeners
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        dispatch_to(&handlers, ctx)
    }
}

fn dispatch_to(handlers: &[SharedHandler], mut ctx: EventCtx) -> EventCtx {
    for handler in handlers {
        let mut handler = handler.borrow_mut();
        (*handler)(&mut ctx);
    }
    ctx
}

impl Element for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        let data = self.0.borrow();
        if name == "class" {
            return (!data.classes.is_empty()).then(|| data.classes.join(" "));
        }
        data.attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let mut data = self.0.borrow_mut();
        if name == "class" {
            data.classes = value.split_whitespace().map(str::to_string).collect();
            return;
        }
        data.attributes.insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&self, name: &str) {
        let mut data = self.0.borrow_mut();
        if name == "class" {
            data.classes.clear();
            return;
        }
        data.attributes.remove(name);
    }

    fn set_text(&self, text: &str) {
        let mut data = self.0.borrow_mut();
        data.text = text.to_string();
        data.inner_html = None;
        data.children.clear();
    }

    fn set_inner_html(&self, html: &str) {
        let mut data = self.0.borrow_mut();
        data.text = html.to_string();
        data.inner_html = Some(html.to_string());
        data.children.clear();
    }

    fn add_class(&self, class: &str) {
        let mut data = self.0.borrow_mut();
        if !data.classes.iter().any(|c| c == class) {
            data.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn offset_top(&self) -> f64 {
        self.0.borrow().offset_top
    }

    fn offset_height(&self) -> f64 {
        self.0.borrow().offset_height
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0
            .borrow_mut()
            .style
            .insert(property.to_string(), value.to_string());
    }

    fn focus(&self) {
        self.0.borrow_mut().focused = true;
    }

    fn click(&self) {
        self.0.borrow_mut().clicks += 1;
        self.dispatch(EventKind::Click, EventCtx::default());
    }

    fn query_first(&self, selector: &Selector) -> Option<Self> {
        let mut found = Vec::new();
        self.collect(selector, &mut found);
        found.into_iter().next()
    }

    fn check_validity(&self) -> bool {
        self.0.borrow().valid
    }
}

struct MemoryObserver {
    targets: Vec<MemoryElement>,
    options: ObserverOptions,
    on_visible: VisibilityCallback,
}

struct DocState {
    path: String,
    lang: Option<String>,
    body: MemoryElement,
    scroll_y: f64,
    viewport_height: f64,
    scroll_height: f64,
    scrolls: Vec<(f64, ScrollBehavior)>,
    window_listeners: Vec<(EventKind, SharedHandler)>,
    frames: VecDeque<Box<dyn FnOnce()>>,
    native_lazy: bool,
    observers: Vec<MemoryObserver>,
    reduced_motion: bool,
    animation_library: bool,
    animations: Option<AnimationSettings>,
}

/// A document rooted at a `<body>`, with a scrollable window around it.
#[derive(Clone)]
pub struct MemoryDocument(Rc<RefCell<DocState>>);

impl fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0.borrow();
        f.debug_struct("MemoryDocument")
            .field("path", &state.path)
            .field("lang", &state.lang)
            .field("scroll_y", &state.scroll_y)
            .finish_non_exhaustive()
    }
}

impl MemoryDocument {
    pub fn new(path: &str) -> Self {
        Self(Rc::new(RefCell::new(DocState {
            path: path.to_string(),
            lang: None,
            body: MemoryElement::new("body"),
            scroll_y: 0.0,
            viewport_height: 800.0,
            scroll_height: 800.0,
            scrolls: Vec::new(),
            window_listeners: Vec::new(),
            frames: VecDeque::new(),
            native_lazy: false,
            observers: Vec::new(),
            reduced_motion: false,
            animation_library: false,
            animations: None,
        })))
    }

    pub fn body(&self) -> MemoryElement {
        self.0.borrow().body.clone()
    }

    pub fn append(&self, element: MemoryElement) -> MemoryElement {
        self.body().append(element.clone());
        element
    }

    pub fn lang(&self) -> Option<String> {
        self.0.borrow().lang.clone()
    }

    pub fn set_viewport(&self, viewport_height: f64, scroll_height: f64) {
        let mut state = self.0.borrow_mut();
        state.viewport_height = viewport_height;
        state.scroll_height = scroll_height;
    }

    pub fn set_native_lazy_loading(&self, supported: bool) {
        self.0.borrow_mut().native_lazy = supported;
    }

    pub fn set_reduced_motion(&self, reduced: bool) {
        self.0.borrow_mut().reduced_motion = reduced;
    }

    /// Pretend the scroll-animation library script was loaded.
    pub fn load_animation_library(&self) {
        self.0.borrow_mut().animation_library = true;
    }

    pub fn animation_settings(&self) -> Option<AnimationSettings> {
        self.0.borrow().animations.clone()
    }

    /// Every `scroll_to` issued so far.
    pub fn scroll_history(&self) -> Vec<(f64, ScrollBehavior)> {
        self.0.borrow().scrolls.clone()
    }

    /// Move the window and fire the scroll listeners.
    pub fn scroll(&self, y: f64) {
        let handlers: Vec<SharedHandler> = {
            let mut state = self.0.borrow_mut();
            state.scroll_y = y;
            state
                .window_listeners
                .iter()
                .filter(|(k, _)| *k == EventKind::Scroll)
                .map(|(_, handler)| Rc::clone(handler))
                .collect()
        };
        dispatch_to(&handlers, EventCtx::default());
    }

    pub fn pending_frames(&self) -> usize {
        self.0.borrow().frames.len()
    }

    /// Run the callbacks queued for the next frame. Returns how many ran.
    pub fn run_frames(&self) -> usize {
        let frames: Vec<Box<dyn FnOnce()>> = self.0.borrow_mut().frames.drain(..).collect();
        let count = frames.len();
        for frame in frames {
            frame();
        }
        count
    }

    pub fn click(&self, element: &MemoryElement) -> EventCtx {
        element.0.borrow_mut().clicks += 1;
        element.dispatch(EventKind::Click, EventCtx::default())
    }

    pub fn submit(&self, form: &MemoryElement) -> EventCtx {
        form.dispatch(EventKind::Submit, EventCtx::default())
    }

    pub fn key_press(&self, element: &MemoryElement, key: &str) -> EventCtx {
        element.dispatch(EventKind::KeyPress, EventCtx::with_key(key))
    }

    /// Bring `element` into the observed viewport region. Returns whether any
    /// observer was watching it.
    pub fn reveal(&self, element: &MemoryElement) -> bool {
        let watching: Vec<(usize, VisibilityCallback)> = self
            .0
            .borrow()
            .observers
            .iter()
            .enumerate()
            .filter(|(_, observer)| observer.targets.contains(element))
            .map(|(index, observer)| (index, Rc::clone(&observer.on_visible)))
            .collect();

        for (index, callback) in &watching {
            let keep = {
                let mut callback = callback.borrow_mut();
                (*callback)(element)
            };
            if !keep {
                self.0.borrow_mut().observers[*index]
                    .targets
                    .retain(|target| target != element);
            }
        }
        !watching.is_empty()
    }

    pub fn observed_count(&self) -> usize {
        self.0
            .borrow()
            .observers
            .iter()
            .map(|observer| observer.targets.len())
            .sum()
    }

    pub fn observer_options(&self) -> Vec<ObserverOptions> {
        self.0
            .borrow()
            .observers
            .iter()
            .map(|observer| observer.options.clone())
            .collect()
    }
}

impl MemoryDocument {
    fn find(&self, selector: &Selector) -> Vec<MemoryElement> {
        let mut found = Vec::new();
        self.body().collect(selector, &mut found);
        found
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn query_all(&self, selector: &Selector) -> Vec<MemoryElement> {
        // querySelectorAll throws on these, and the browser binding then
        // finds nothing.
        if !selector.is_valid_css() {
            return Vec::new();
        }
        self.find(selector)
    }

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.find(&Selector::id(id)).into_iter().next()
    }

    fn location_path(&self) -> String {
        self.0.borrow().path.clone()
    }

    fn set_document_lang(&self, lang: &str) {
        self.0.borrow_mut().lang = Some(lang.to_string());
    }

    fn scroll_y(&self) -> f64 {
        self.0.borrow().scroll_y
    }

    fn viewport_height(&self) -> f64 {
        self.0.borrow().viewport_height
    }

    fn scroll_height(&self) -> f64 {
        self.0.borrow().scroll_height
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        let mut state = self.0.borrow_mut();
        state.scroll_y = top;
        state.scrolls.push((top, behavior));
    }

    fn create_element(&self, tag: &str) -> Option<MemoryElement> {
        Some(MemoryElement::new(tag))
    }

    fn prepend_to_body(&self, element: &MemoryElement) {
        self.body()
            .0
            .borrow_mut()
            .children
            .insert(0, element.clone());
    }

    fn listen(&self, target: &MemoryElement, kind: EventKind, handler: EventHandler) {
        target.listen(kind, handler);
    }

    fn listen_window(&self, kind: EventKind, handler: EventHandler) {
        self.0
            .borrow_mut()
            .window_listeners
            .push((kind, Rc::new(RefCell::new(handler))));
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        self.0.borrow_mut().frames.push_back(callback);
    }

    fn supports_native_lazy_loading(&self) -> bool {
        self.0.borrow().native_lazy
    }

    fn observe_visibility(
        &self,
        targets: Vec<MemoryElement>,
        options: &ObserverOptions,
        on_visible: Box<dyn FnMut(&MemoryElement) -> bool>,
    ) {
        self.0.borrow_mut().observers.push(MemoryObserver {
            targets,
            options: options.clone(),
            on_visible: Rc::new(RefCell::new(on_visible)),
        });
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.0.borrow().reduced_motion
    }

    fn init_scroll_animations(&self, settings: &AnimationSettings) -> bool {
        let mut state = self.0.borrow_mut();
        if !state.animation_library {
            return false;
        }
        state.animations = Some(settings.clone());
        true
    }
}
