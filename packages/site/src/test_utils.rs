//! Fixtures shared by the unit and integration tests: a canned fetcher and a
//! page with the usual translation bindings and toggles.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;

use crate::config::I18nConfig;
use crate::dom::{Element, MemoryDocument, MemoryElement};
use crate::error::LocalizationError;
use crate::i18n::{Localizer, MemoryPreferences, TableFetcher, TableResolver, TranslationTable};

/// Serves fixed bodies by URL; anything else is a 404.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    bodies: HashMap<String, String>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.bodies.insert(url.to_string(), body.to_string());
        self
    }

    /// URLs requested so far, shared between clones.
    pub fn requests(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.requests)
    }
}

#[async_trait(?Send)]
impl TableFetcher for StaticFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, LocalizationError> {
        self.requests.borrow_mut().push(url.to_string());
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| LocalizationError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

pub const ES_TABLE: &str = r#"{
    "nav": { "home": "Inicio", "services": "Servicios" },
    "hero": { "title": "Soluciones <strong>TI</strong>" },
    "contact": { "name": "Tu nombre" }
}"#;

pub const EN_TABLE: &str = r#"{
    "nav": { "home": "Home", "services": "Services" },
    "hero": { "title": "IT <strong>solutions</strong>" },
    "contact": { "name": "Your name" }
}"#;

pub fn table(raw: &str) -> TranslationTable {
    TranslationTable::from_json(raw).expect("fixture table is valid JSON")
}

/// Handles to the interesting elements of [`localized_page`].
#[derive(Debug, Clone)]
pub struct LocalizedPage {
    pub doc: MemoryDocument,
    pub home: MemoryElement,
    pub services: MemoryElement,
    pub untranslated: MemoryElement,
    pub hero: MemoryElement,
    pub name_input: MemoryElement,
    pub toggles: Vec<MemoryElement>,
}

impl LocalizedPage {
    pub fn toggle(&self, id: &str) -> MemoryElement {
        self.toggles
            .iter()
            .find(|toggle| toggle.attribute("id").as_deref() == Some(id))
            .cloned()
            .unwrap_or_else(|| panic!("no toggle {id}"))
    }
}

/// A page rendered in Spanish with text, HTML and placeholder bindings and
/// the given toggle ids.
pub fn localized_page(path: &str, toggle_ids: &[&str]) -> LocalizedPage {
    let doc = MemoryDocument::new(path);

    let home = MemoryElement::new("a")
        .with_attr("data-i18n", "nav.home")
        .with_text("Inicio");
    let services = MemoryElement::new("a")
        .with_attr("data-i18n", "nav.services")
        .with_text("Servicios");
    let untranslated = MemoryElement::new("a")
        .with_attr("data-i18n", "nav.blog")
        .with_text("Blog");
    let toggles: Vec<MemoryElement> = toggle_ids
        .iter()
        .map(|id| MemoryElement::new("a").with_id(id).with_attr("href", "#"))
        .collect();

    let mut nav = MemoryElement::new("nav")
        .with_id("mainNav")
        .with_child(home.clone())
        .with_child(services.clone())
        .with_child(untranslated.clone());
    for toggle in &toggles {
        nav = nav.with_child(toggle.clone());
    }
    doc.append(nav);

    let hero = doc.append(
        MemoryElement::new("h1")
            .with_attr("data-i18n-html", "hero.title")
            .with_text("Soluciones <strong>TI</strong>"),
    );
    let name_input = MemoryElement::new("input")
        .with_attr("data-i18n-placeholder", "contact.name")
        .with_attr("placeholder", "Tu nombre");
    doc.append(
        MemoryElement::new("form")
            .with_class("needs-validation")
            .with_child(name_input.clone()),
    );

    LocalizedPage {
        doc,
        home,
        services,
        untranslated,
        hero,
        name_input,
        toggles,
    }
}

/// Default desktop and mobile toggle ids.
pub const ALL_TOGGLES: [&str; 4] = ["langEs", "langEn", "langEsMobile", "langEnMobile"];

pub type TestLocalizer = Localizer<MemoryDocument, MemoryPreferences>;

pub fn localizer(
    page: &LocalizedPage,
    prefs: MemoryPreferences,
    resolver: TableResolver,
) -> Rc<TestLocalizer> {
    Rc::new(Localizer::new(
        page.doc.clone(),
        prefs,
        resolver,
        I18nConfig::default(),
    ))
}

/// Resolver that serves the default-variant fixtures over the fake fetcher.
pub fn fixture_resolver() -> TableResolver {
    TableResolver::with_fetcher(
        StaticFetcher::new()
            .with("/i18n/es.json", ES_TABLE)
            .with("/i18n/en.json", EN_TABLE),
    )
}
