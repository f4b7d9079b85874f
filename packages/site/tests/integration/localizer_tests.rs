use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use site::dom::{Element, EventKind};
use site::i18n::{PreferenceStore, TableFetcher, TableResolver};
use site::test_utils::{
    fixture_resolver, localized_page, localizer, table, StaticFetcher, ALL_TOGGLES, EN_TABLE,
    ES_TABLE,
};
use site::{ApplyReport, Lang, LocalizationError, MemoryPreferences};
use tokio::task::LocalSet;

const STORAGE_KEY: &str = "advansys-lang";

async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

#[test]
fn apply_sets_resolved_elements_and_keeps_the_rest() {
    let page = localized_page("/", &ALL_TOGGLES);
    let loc = localizer(&page, MemoryPreferences::new(), TableResolver::registered());

    let report = loc.apply_translations(&table(EN_TABLE));

    assert_eq!(
        report,
        ApplyReport {
            text: 2,
            html: 1,
            placeholder: 1,
            missing: 1,
        }
    );
    assert_eq!(page.home.text(), "Home");
    assert_eq!(page.services.text(), "Services");
    assert_eq!(page.untranslated.text(), "Blog");
    assert_eq!(
        page.hero.inner_html().as_deref(),
        Some("IT <strong>solutions</strong>")
    );
    assert_eq!(
        page.name_input.attribute("placeholder").as_deref(),
        Some("Your name")
    );
}

#[test]
fn passes_do_not_block_each_other() {
    let page = localized_page("/", &ALL_TOGGLES);
    let loc = localizer(&page, MemoryPreferences::new(), TableResolver::registered());

    let report = loc.apply_translations(&table(
        r#"{ "hero": { "title": "<em>Hi</em>" }, "contact": { "name": "Name" } }"#,
    ));

    assert_eq!(report.text, 0);
    assert_eq!(report.missing, 3);
    assert_eq!(page.home.text(), "Inicio");
    assert_eq!(page.hero.inner_html().as_deref(), Some("<em>Hi</em>"));
    assert_eq!(
        page.name_input.attribute("placeholder").as_deref(),
        Some("Name")
    );
}

#[tokio::test]
async fn switch_persists_and_round_trips() {
    let page = localized_page("/", &ALL_TOGGLES);
    let prefs = MemoryPreferences::new();
    let loc = localizer(&page, prefs.clone(), fixture_resolver());

    let report = loc.switch_language(Lang::En).await.expect("tables resolve");
    assert_eq!(report.applied(), 4);
    assert_eq!(prefs.get(STORAGE_KEY).as_deref(), Some("en"));
    assert_eq!(page.doc.lang().as_deref(), Some("en"));

    // A fresh engine over the same storage sees the stored choice.
    let reloaded = localizer(&page, prefs.clone(), TableResolver::registered());
    assert_eq!(reloaded.current_language(), Lang::En);
}

#[tokio::test]
async fn switching_twice_matches_switching_once() {
    let page = localized_page("/", &ALL_TOGGLES);
    let prefs = MemoryPreferences::new();
    let loc = localizer(&page, prefs.clone(), fixture_resolver());

    loc.switch_language(Lang::En).await;
    loc.switch_language(Lang::Es).await;
    let once = (
        page.home.text(),
        page.hero.inner_html(),
        page.name_input.attribute("placeholder"),
        prefs.get(STORAGE_KEY),
    );

    loc.switch_language(Lang::Es).await;
    let twice = (
        page.home.text(),
        page.hero.inner_html(),
        page.name_input.attribute("placeholder"),
        prefs.get(STORAGE_KEY),
    );

    assert_eq!(once, twice);
    assert_eq!(page.home.text(), "Inicio");
    assert_eq!(loc.resolver().fetch_count(), 2);
}

#[tokio::test]
async fn toggle_state_covers_every_instance() {
    for ids in [
        vec![],
        vec!["langEs", "langEn"],
        ALL_TOGGLES.to_vec(),
    ] {
        let page = localized_page("/", &ids);
        let loc = localizer(&page, MemoryPreferences::new(), fixture_resolver());

        loc.switch_language(Lang::En).await;

        assert_eq!(loc.update_toggle_state(Lang::En), ids.len());
        for toggle in &page.toggles {
            let id = toggle.attribute("id").unwrap_or_default();
            assert_eq!(toggle.has_class("active"), id.starts_with("langEn"), "{id}");
        }
    }
}

#[tokio::test]
async fn failed_lookup_leaves_the_page_alone() {
    let page = localized_page("/", &ALL_TOGGLES);
    let prefs = MemoryPreferences::new();
    let loc = localizer(&page, prefs.clone(), TableResolver::registered());

    assert_eq!(loc.switch_language(Lang::En).await, None);

    assert_eq!(page.home.text(), "Inicio");
    assert_eq!(
        page.hero.inner_html(),
        None,
        "hero was never rewritten"
    );
    assert_eq!(prefs.get(STORAGE_KEY).as_deref(), Some("en"));
    assert!(page.toggle("langEn").has_class("active"));
}

#[tokio::test]
async fn unknown_stored_language_falls_back_to_default() {
    let page = localized_page("/", &ALL_TOGGLES);
    let prefs = MemoryPreferences::new().with(STORAGE_KEY, "fr");
    let loc = localizer(&page, prefs, fixture_resolver());
    assert_eq!(loc.current_language(), Lang::Es);
}

#[tokio::test]
async fn initialize_in_default_language_only_marks_toggles() {
    let page = localized_page("/", &ALL_TOGGLES);
    let loc = localizer(&page, MemoryPreferences::new(), fixture_resolver());

    let report = loc.clone().initialize().await;

    assert_eq!(report, None);
    assert_eq!(loc.resolver().fetch_count(), 0);
    assert_eq!(page.home.text(), "Inicio");
    assert!(page.toggle("langEs").has_class("active"));
    assert!(page.toggle("langEsMobile").has_class("active"));
    assert!(!page.toggle("langEn").has_class("active"));
    for toggle in &page.toggles {
        assert_eq!(toggle.listener_count(EventKind::Click), 1);
    }
}

#[tokio::test]
async fn initialize_applies_stored_language() {
    let page = localized_page("/", &ALL_TOGGLES);
    let prefs = MemoryPreferences::new().with(STORAGE_KEY, "en");
    let loc = localizer(&page, prefs, fixture_resolver());

    let report = loc.clone().initialize().await;

    assert_eq!(report.map(|r| r.applied()), Some(4));
    assert_eq!(page.home.text(), "Home");
    assert_eq!(page.doc.lang().as_deref(), Some("en"));
    assert!(page.toggle("langEnMobile").has_class("active"));
    assert!(!page.toggle("langEs").has_class("active"));
}

#[tokio::test]
async fn clicking_a_toggle_switches_language() {
    LocalSet::new()
        .run_until(async {
            let page = localized_page("/", &ALL_TOGGLES);
            let prefs = MemoryPreferences::new();
            let loc = localizer(&page, prefs.clone(), fixture_resolver());
            loc.clone().initialize().await;

            let ctx = page.doc.click(&page.toggle("langEnMobile"));
            assert!(ctx.default_prevented);
            settle().await;

            assert_eq!(page.home.text(), "Home");
            assert_eq!(prefs.get(STORAGE_KEY).as_deref(), Some("en"));
            assert!(page.toggle("langEn").has_class("active"));
            assert!(page.toggle("langEnMobile").has_class("active"));
            assert!(!page.toggle("langEsMobile").has_class("active"));

            page.doc.click(&page.toggle("langEs"));
            settle().await;
            assert_eq!(page.home.text(), "Inicio");
        })
        .await;
}

#[tokio::test]
async fn named_variant_fetches_its_own_tables() {
    let page = localized_page("/sico/", &ALL_TOGGLES);
    let fetcher = StaticFetcher::new().with(
        "/i18n/sico-en.json",
        r#"{ "nav": { "home": "SICO home" } }"#,
    );
    let requests = fetcher.requests();
    let loc = localizer(
        &page,
        MemoryPreferences::new(),
        TableResolver::with_fetcher(fetcher),
    );

    assert_eq!(loc.page_variant().name, "sico");
    loc.switch_language(Lang::En).await;
    loc.switch_language(Lang::En).await;

    assert_eq!(page.home.text(), "SICO home");
    assert_eq!(requests.borrow().as_slice(), ["/i18n/sico-en.json"]);
}

#[tokio::test]
async fn registered_tables_prewarm_the_cache() {
    let page = localized_page("/", &ALL_TOGGLES);
    let fetcher = StaticFetcher::new().with("/i18n/en.json", EN_TABLE);
    let requests = fetcher.requests();
    let resolver = TableResolver::with_fetcher(fetcher);
    resolver.register("es", table(ES_TABLE));
    let loc = localizer(&page, MemoryPreferences::new(), resolver);

    loc.switch_language(Lang::Es).await;
    assert!(requests.borrow().is_empty());

    loc.switch_language(Lang::En).await;
    assert_eq!(requests.borrow().len(), 1);
}

/// Answers each URL after a fixed delay.
struct SlowFetcher {
    delays: HashMap<String, u64>,
    inner: StaticFetcher,
}

#[async_trait(?Send)]
impl TableFetcher for SlowFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, LocalizationError> {
        if let Some(ms) = self.delays.get(url) {
            tokio::time::sleep(Duration::from_millis(*ms)).await;
        }
        self.inner.fetch_text(url).await
    }
}

#[tokio::test]
async fn overlapping_switches_keep_the_last_completed() {
    let page = localized_page("/", &ALL_TOGGLES);
    let prefs = MemoryPreferences::new();
    let fetcher = SlowFetcher {
        delays: HashMap::from([
            ("/i18n/en.json".to_string(), 60),
            ("/i18n/es.json".to_string(), 5),
        ]),
        inner: StaticFetcher::new()
            .with("/i18n/es.json", ES_TABLE)
            .with("/i18n/en.json", EN_TABLE),
    };
    let loc = localizer(&page, prefs.clone(), TableResolver::with_fetcher(fetcher));

    let (slow, fast) = tokio::join!(
        loc.switch_language(Lang::En),
        loc.switch_language(Lang::Es)
    );
    assert!(slow.is_some());
    assert!(fast.is_some());

    // English was requested first but finished last, and everything
    // follows it.
    assert_eq!(page.home.text(), "Home");
    assert!(page.toggle("langEn").has_class("active"));
    assert!(!page.toggle("langEs").has_class("active"));
    assert_eq!(page.doc.lang().as_deref(), Some("en"));
    assert_eq!(prefs.get(STORAGE_KEY).as_deref(), Some("en"));

    // A reload over the same storage comes back in English.
    let reloaded = localizer(&page, prefs.clone(), TableResolver::registered());
    assert_eq!(reloaded.current_language(), Lang::En);
}

#[tokio::test]
async fn repeated_clicks_share_one_fetch() {
    let page = localized_page("/", &ALL_TOGGLES);
    let inner = StaticFetcher::new().with("/i18n/en.json", EN_TABLE);
    let requests = inner.requests();
    let fetcher = SlowFetcher {
        delays: HashMap::from([("/i18n/en.json".to_string(), 20)]),
        inner,
    };
    let loc = localizer(&page, MemoryPreferences::new(), TableResolver::with_fetcher(fetcher));

    let (first, second) = tokio::join!(
        loc.switch_language(Lang::En),
        loc.switch_language(Lang::En)
    );

    assert_eq!(first, second);
    assert_eq!(loc.resolver().fetch_count(), 1);
    assert_eq!(requests.borrow().len(), 1);
    assert_eq!(page.home.text(), "Home");
}
