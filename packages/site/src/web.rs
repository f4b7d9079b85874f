//! Browser bindings: the real document behind [`Document`], `localStorage`
//! behind [`PreferenceStore`], and the boot sequence.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::{AnimationSettings, SiteConfig};
use crate::dom::{
    Document, Element, EventCtx, EventHandler, EventKind, ObserverOptions, ScrollBehavior,
    Selector,
};
use crate::i18n::{HttpFetcher, Localizer, PreferenceStore, TableResolver, TranslationTable};
use crate::interactions::PageController;
use crate::task::spawn_local;

#[derive(Clone)]
pub struct WebElement(web_sys::Element);

impl WebElement {
    pub fn raw(&self) -> &web_sys::Element {
        &self.0
    }

    fn html(&self) -> Option<&web_sys::HtmlElement> {
        self.0.dyn_ref::<web_sys::HtmlElement>()
    }
}

fn collect(list: web_sys::NodeList) -> Vec<WebElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(WebElement)
        .collect()
}

impl Element for WebElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(e) = self.0.set_attribute(name, value) {
            tracing::warn!("dom: set_attribute {name} failed: {e:?}");
        }
    }

    fn remove_attribute(&self, name: &str) {
        let _ = self.0.remove_attribute(name);
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn offset_top(&self) -> f64 {
        self.html().map(|el| el.offset_top() as f64).unwrap_or(0.0)
    }

    fn offset_height(&self) -> f64 {
        self.html().map(|el| el.offset_height() as f64).unwrap_or(0.0)
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(el) = self.html() {
            let _ = el.style().set_property(property, value);
        }
    }

    fn focus(&self) {
        if let Some(el) = self.html() {
            let _ = el.focus();
        }
    }

    fn click(&self) {
        if let Some(el) = self.html() {
            el.click();
        }
    }

    fn query_first(&self, selector: &Selector) -> Option<Self> {
        self.0
            .query_selector(&selector.to_css())
            .ok()
            .flatten()
            .map(WebElement)
    }

    fn check_validity(&self) -> bool {
        self.0
            .dyn_ref::<web_sys::HtmlFormElement>()
            .map(|form| form.check_validity())
            .unwrap_or(true)
    }
}

#[derive(Clone)]
pub struct WebDocument {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl WebDocument {
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn origin(&self) -> Option<String> {
        self.window.location().origin().ok()
    }

    fn add_listener(target: &web_sys::EventTarget, kind: EventKind, mut handler: EventHandler) {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let mut ctx = EventCtx {
                key: event
                    .dyn_ref::<web_sys::KeyboardEvent>()
                    .map(|key| key.key()),
                ..EventCtx::default()
            };
            handler(&mut ctx);
            if ctx.default_prevented {
                event.prevent_default();
            }
            if ctx.propagation_stopped {
                event.stop_propagation();
            }
        });

        let result = if kind == EventKind::Scroll {
            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(true);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                kind.dom_name(),
                callback.as_ref().unchecked_ref(),
                &options,
            )
        } else {
            target.add_event_listener_with_callback(
                kind.dom_name(),
                callback.as_ref().unchecked_ref(),
            )
        };
        if let Err(e) = result {
            tracing::warn!("dom: cannot listen for {}: {e:?}", kind.dom_name());
        }
        // Listeners live as long as the page.
        callback.forget();
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn query_all(&self, selector: &Selector) -> Vec<WebElement> {
        match self.document.query_selector_all(&selector.to_css()) {
            Ok(list) => collect(list),
            Err(e) => {
                tracing::warn!("dom: bad selector {}: {e:?}", selector.to_css());
                Vec::new()
            }
        }
    }

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn location_path(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn set_document_lang(&self, lang: &str) {
        if let Some(root) = self.document.document_element() {
            let _ = root.set_attribute("lang", lang);
        }
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_height(&self) -> f64 {
        self.document
            .document_element()
            .map(|root| root.scroll_height() as f64)
            .unwrap_or(0.0)
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match behavior {
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn create_element(&self, tag: &str) -> Option<WebElement> {
        self.document.create_element(tag).ok().map(WebElement)
    }

    fn prepend_to_body(&self, element: &WebElement) {
        if let Some(body) = self.document.body() {
            let _ = body.prepend_with_node_1(element.raw());
        }
    }

    fn listen(&self, target: &WebElement, kind: EventKind, handler: EventHandler) {
        Self::add_listener(target.raw(), kind, handler);
    }

    fn listen_window(&self, kind: EventKind, handler: EventHandler) {
        Self::add_listener(&self.window, kind, handler);
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        let callback = Closure::once_into_js(move || callback());
        if let Err(e) = self
            .window
            .request_animation_frame(callback.unchecked_ref())
        {
            tracing::warn!("dom: requestAnimationFrame failed: {e:?}");
        }
    }

    fn supports_native_lazy_loading(&self) -> bool {
        let global = js_sys::global();
        js_sys::Reflect::get(&global, &JsValue::from_str("HTMLImageElement"))
            .and_then(|ctor| js_sys::Reflect::get(&ctor, &JsValue::from_str("prototype")))
            .and_then(|proto| js_sys::Reflect::has(&proto, &JsValue::from_str("loading")))
            .unwrap_or(false)
    }

    fn observe_visibility(
        &self,
        targets: Vec<WebElement>,
        options: &ObserverOptions,
        mut on_visible: Box<dyn FnMut(&WebElement) -> bool>,
    ) {
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if !on_visible(&WebElement(target.clone())) {
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_root_margin(&options.root_margin);
        init.set_threshold(&JsValue::from_f64(options.threshold));

        match web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => {
                for target in &targets {
                    observer.observe(target.raw());
                }
                callback.forget();
            }
            Err(e) => tracing::warn!("dom: IntersectionObserver unavailable: {e:?}"),
        }
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    fn init_scroll_animations(&self, settings: &AnimationSettings) -> bool {
        let Ok(aos) = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("AOS")) else {
            return false;
        };
        if aos.is_undefined() || aos.is_null() {
            return false;
        }
        let Some(init) = js_sys::Reflect::get(&aos, &JsValue::from_str("init"))
            .ok()
            .and_then(|init| init.dyn_into::<js_sys::Function>().ok())
        else {
            return false;
        };

        let options = js_sys::Object::new();
        let fields: [(&str, JsValue); 6] = [
            ("duration", JsValue::from(settings.duration)),
            ("easing", JsValue::from_str(&settings.easing)),
            ("once", JsValue::from_bool(settings.once)),
            ("offset", JsValue::from(settings.offset)),
            ("delay", JsValue::from(settings.delay)),
            ("disable", JsValue::from_bool(settings.disable)),
        ];
        for (name, value) in fields {
            let _ = js_sys::Reflect::set(&options, &JsValue::from_str(name), &value);
        }
        init.call1(&aos, &options).is_ok()
    }
}

/// The page's `localStorage`. Storage can be disabled (private browsing,
/// sandboxed frames); reads then see nothing and writes are dropped.
#[derive(Debug, Clone, Default)]
pub struct LocalStoragePreferences;

impl LocalStoragePreferences {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    tracing::warn!("prefs: cannot store {key}: {e:?}");
                }
            }
            None => tracing::warn!("prefs: localStorage unavailable"),
        }
    }
}

thread_local! {
    static BOOTED: Cell<bool> = const { Cell::new(false) };
}

/// Start both the localization engine and the page handlers on the current
/// page. `bundled` tables are registered ahead of any fetch. Later calls are
/// ignored.
pub fn boot(config: SiteConfig, bundled: Vec<(String, TranslationTable)>) {
    if BOOTED.with(|booted| booted.replace(true)) {
        return;
    }

    let Some(dom) = WebDocument::from_window() else {
        tracing::error!("boot: no window/document available");
        return;
    };

    let resolver = TableResolver::with_fetcher(HttpFetcher::new(dom.origin()));
    for (cache_key, table) in bundled {
        resolver.register(cache_key, table);
    }

    PageController::init(&dom, &config.page);

    let localizer = Rc::new(Localizer::new(
        dom,
        LocalStoragePreferences,
        resolver,
        config.i18n,
    ));
    spawn_local(async move {
        localizer.initialize().await;
    });
}
