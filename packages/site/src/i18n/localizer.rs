use std::rc::Rc;

use super::prefs::PreferenceStore;
use super::source::TableResolver;
use super::table::TranslationTable;
use super::variant::PageVariant;
use crate::config::I18nConfig;
use crate::dom::{Document, Element, EventCtx, EventKind, Selector};
use crate::task::spawn_local;
use crate::types::Lang;

/// How many bound elements one application touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub text: usize,
    pub html: usize,
    pub placeholder: usize,
    /// Bound elements whose key did not resolve and were left alone.
    pub missing: usize,
}

impl ApplyReport {
    pub fn applied(&self) -> usize {
        self.text + self.html + self.placeholder
    }
}

/// Rewrites the marked elements of a page in the selected language and keeps
/// the language toggles and the stored preference in step with it.
pub struct Localizer<D: Document, P: PreferenceStore> {
    dom: D,
    prefs: P,
    resolver: TableResolver,
    config: I18nConfig,
}

impl<D, P> Localizer<D, P>
where
    D: Document,
    P: PreferenceStore + 'static,
{
    pub fn new(dom: D, prefs: P, resolver: TableResolver, config: I18nConfig) -> Self {
        Self {
            dom,
            prefs,
            resolver,
            config,
        }
    }

    pub fn config(&self) -> &I18nConfig {
        &self.config
    }

    pub fn resolver(&self) -> &TableResolver {
        &self.resolver
    }

    pub fn page_variant(&self) -> PageVariant {
        PageVariant::resolve(&self.dom.location_path(), &self.config)
    }

    /// Table for `lang` on the current page, or `None` after logging why not.
    pub async fn translations(&self, lang: Lang) -> Option<Rc<TranslationTable>> {
        let variant = self.page_variant();
        match self.resolver.table(&variant, lang).await {
            Ok(table) => Some(table),
            Err(e) => {
                tracing::error!("i18n: {e}");
                None
            }
        }
    }

    /// Write every resolvable key into its element. Text, HTML and
    /// placeholder targets are independent passes.
    pub fn apply_translations(&self, table: &TranslationTable) -> ApplyReport {
        let mut report = ApplyReport::default();

        report.text = self.apply_pass(
            table,
            &self.config.text_attr,
            &mut report.missing,
            |el, value| el.set_text(value),
        );
        // Tables ship with the site; nothing user-supplied reaches this pass.
        report.html = self.apply_pass(
            table,
            &self.config.html_attr,
            &mut report.missing,
            |el, value| el.set_inner_html(value),
        );
        report.placeholder = self.apply_pass(
            table,
            &self.config.placeholder_attr,
            &mut report.missing,
            |el, value| el.set_attribute("placeholder", value),
        );

        tracing::debug!(
            "i18n: applied {} text, {} html, {} placeholder ({} missing)",
            report.text,
            report.html,
            report.placeholder,
            report.missing
        );
        report
    }

    fn apply_pass(
        &self,
        table: &TranslationTable,
        attr: &str,
        missing: &mut usize,
        write: impl Fn(&D::Element, &str),
    ) -> usize {
        let mut applied = 0;
        for element in self.dom.query_all(&Selector::attr(attr)) {
            let Some(key) = element.attribute(attr) else {
                continue;
            };
            match table.resolve(&key) {
                Some(value) => {
                    write(&element, &value);
                    applied += 1;
                }
                None => {
                    tracing::debug!("i18n: no value for {attr}=\"{key}\"");
                    *missing += 1;
                }
            }
        }
        applied
    }

    /// Persist `lang`, translate the page into it and update the toggles.
    ///
    /// Returns `None` when no table could be resolved; the page then keeps
    /// its current text.
    ///
    /// Switches may overlap. Whichever one applies its table last also
    /// writes the stored preference and the document language again, so the
    /// text, toggles, `lang` and storage always agree afterwards.
    pub async fn switch_language(&self, lang: Lang) -> Option<ApplyReport> {
        self.remember(lang);

        let report = match self.translations(lang).await {
            Some(table) => {
                self.remember(lang);
                let report = self.apply_translations(&table);
                tracing::info!("i18n: switched to {lang} ({} elements)", report.applied());
                Some(report)
            }
            None => None,
        };

        self.update_toggle_state(lang);
        report
    }

    fn remember(&self, lang: Lang) {
        self.prefs.set(&self.config.storage_key, lang.code());
        self.dom.set_document_lang(lang.code());
    }

    /// Mark every control instance for `lang` active and clear the rest.
    /// Returns how many instances were found.
    pub fn update_toggle_state(&self, lang: Lang) -> usize {
        let mut found = 0;
        for toggle in &self.config.toggles {
            for id in &toggle.ids {
                let Some(control) = self.dom.element_by_id(id) else {
                    continue;
                };
                control.toggle_class(&self.config.active_class, toggle.lang == lang);
                found += 1;
            }
        }
        found
    }

    /// Stored preference, or the default language when unset or unknown.
    pub fn current_language(&self) -> Lang {
        self.prefs
            .get(&self.config.storage_key)
            .and_then(|code| Lang::from_code(&code))
            .unwrap_or(self.config.default_lang)
    }

    /// Wire every toggle control instance to `switch_language`.
    pub fn bind_toggles(this: &Rc<Self>) -> usize {
        let mut bound = 0;
        for toggle in &this.config.toggles {
            for id in &toggle.ids {
                let Some(control) = this.dom.element_by_id(id) else {
                    continue;
                };
                let lang = toggle.lang;
                let localizer = Rc::clone(this);
                this.dom.listen(
                    &control,
                    EventKind::Click,
                    Box::new(move |ctx: &mut EventCtx| {
                        ctx.prevent_default();
                        let localizer = Rc::clone(&localizer);
                        spawn_local(async move {
                            localizer.switch_language(lang).await;
                        });
                    }),
                );
                bound += 1;
            }
        }
        bound
    }

    /// Bind the toggles and bring the page into the stored language.
    ///
    /// The server renders the default language, so when that is the current
    /// one only the toggle state is refreshed.
    pub async fn initialize(self: Rc<Self>) -> Option<ApplyReport> {
        let bound = Self::bind_toggles(&self);
        let lang = self.current_language();
        tracing::info!("i18n: initializing in {lang} ({bound} toggle controls)");

        if lang != self.config.default_lang {
            self.switch_language(lang).await
        } else {
            self.update_toggle_state(lang);
            None
        }
    }
}
