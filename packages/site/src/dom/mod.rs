//! The slice of the browser document the site scripts touch.
//!
//! Handlers are written against [`Document`] and [`Element`] so they run the
//! same against the real page (`crate::web`) and against [`MemoryDocument`].

pub mod memory;

pub use memory::{MemoryDocument, MemoryElement};

use crate::config::AnimationSettings;

/// Typed subset of CSS selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Class(String),
    Tag(String),
    Attr(String),
    TagAttr(String, String),
    TagAttrEq(String, String, String),
    Any(Vec<Selector>),
}

impl Selector {
    pub fn id(id: impl Into<String>) -> Self {
        Selector::Id(id.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Selector::Class(class.into())
    }

    pub fn attr(name: impl Into<String>) -> Self {
        Selector::Attr(name.into())
    }

    /// Whether `to_css` is something `querySelectorAll` accepts. Ids and
    /// classes are written unescaped, so they must be CSS identifiers.
    pub fn is_valid_css(&self) -> bool {
        match self {
            Selector::Id(name) | Selector::Class(name) => is_css_identifier(name),
            Selector::Tag(name) | Selector::Attr(name) | Selector::TagAttr(_, name) => {
                is_css_identifier(name)
            }
            Selector::TagAttrEq(_, name, _) => is_css_identifier(name),
            Selector::Any(options) => !options.is_empty() && options.iter().all(Selector::is_valid_css),
        }
    }

    pub fn to_css(&self) -> String {
        match self {
            Selector::Id(id) => format!("#{id}"),
            Selector::Class(class) => format!(".{class}"),
            Selector::Tag(tag) => tag.clone(),
            Selector::Attr(name) => format!("[{name}]"),
            Selector::TagAttr(tag, name) => format!("{tag}[{name}]"),
            Selector::TagAttrEq(tag, name, value) => format!("{tag}[{name}=\"{value}\"]"),
            Selector::Any(options) => options
                .iter()
                .map(Selector::to_css)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

fn is_css_identifier(name: &str) -> bool {
    let body = name.strip_prefix('-').unwrap_or(name);
    let Some(first) = body.chars().next() else {
        return false;
    };
    if first.is_ascii_digit() {
        return false;
    }
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii())
}

/// Element id named by an in-page `href` such as `#contact`. Anything that
/// is not a plain fragment yields `None`.
///
/// Ids are looked up with [`Document::element_by_id`], never through a
/// selector: `#2024-news` is a valid id but not a valid CSS selector.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Submit,
    KeyPress,
    Scroll,
}

impl EventKind {
    pub fn dom_name(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Submit => "submit",
            EventKind::KeyPress => "keypress",
            EventKind::Scroll => "scroll",
        }
    }
}

/// What a handler sees of an event, and what it asked the browser to do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCtx {
    pub key: Option<String>,
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl EventCtx {
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::default()
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

pub type EventHandler = Box<dyn FnMut(&mut EventCtx)>;

#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    pub root_margin: String,
    pub threshold: f64,
}

pub trait Element: Clone + 'static {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);

    fn set_text(&self, text: &str);
    fn set_inner_html(&self, html: &str);

    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    fn offset_top(&self) -> f64;
    fn offset_height(&self) -> f64;

    fn set_style(&self, property: &str, value: &str);
    fn focus(&self);
    fn click(&self);

    fn query_first(&self, selector: &Selector) -> Option<Self>;

    /// Native constraint validation; elements that are not forms are valid.
    fn check_validity(&self) -> bool;

    fn toggle_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

pub trait Document: Clone + 'static {
    type Element: Element;

    fn query_all(&self, selector: &Selector) -> Vec<Self::Element>;

    fn query_first(&self, selector: &Selector) -> Option<Self::Element> {
        self.query_all(selector).into_iter().next()
    }

    fn element_by_id(&self, id: &str) -> Option<Self::Element> {
        self.query_first(&Selector::id(id))
    }

    fn location_path(&self) -> String;
    fn set_document_lang(&self, lang: &str);

    fn scroll_y(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn scroll_height(&self) -> f64;
    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);

    fn create_element(&self, tag: &str) -> Option<Self::Element>;
    fn prepend_to_body(&self, element: &Self::Element);

    fn listen(&self, target: &Self::Element, kind: EventKind, handler: EventHandler);
    fn listen_window(&self, kind: EventKind, handler: EventHandler);

    /// Run `callback` before the next repaint.
    fn request_frame(&self, callback: Box<dyn FnOnce()>);

    fn supports_native_lazy_loading(&self) -> bool;

    /// Call `on_visible` for each target that enters the viewport region.
    /// Returning `false` stops observing that target.
    fn observe_visibility(
        &self,
        targets: Vec<Self::Element>,
        options: &ObserverOptions,
        on_visible: Box<dyn FnMut(&Self::Element) -> bool>,
    );

    fn prefers_reduced_motion(&self) -> bool;

    /// Initialize the scroll-animation library if the page loaded it.
    fn init_scroll_animations(&self, settings: &AnimationSettings) -> bool;
}
