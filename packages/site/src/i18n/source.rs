use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::{FutureExt, LocalBoxFuture, Shared};

use super::table::TranslationTable;
use super::variant::PageVariant;
use crate::error::LocalizationError;
use crate::types::Lang;

/// Trait for anything that can retrieve a translation document by URL.
#[async_trait(?Send)]
pub trait TableFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, LocalizationError>;
}

/// Fetches translation documents over HTTP.
///
/// In the browser reqwest goes through `fetch`, which still needs absolute
/// URLs, so relative table paths are joined onto `origin`.
pub struct HttpFetcher {
    client: reqwest::Client,
    origin: Option<String>,
}

impl HttpFetcher {
    pub fn new(origin: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            origin,
        }
    }

    fn absolute(&self, url: &str) -> String {
        match &self.origin {
            Some(origin) if url.starts_with('/') => {
                format!("{}{}", origin.trim_end_matches('/'), url)
            }
            _ => url.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl TableFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, LocalizationError> {
        let url = self.absolute(url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LocalizationError::Fetch {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocalizationError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| LocalizationError::Fetch {
            url,
            message: e.to_string(),
        })
    }
}

/// Maps (page variant, language) to a translation table.
///
/// Tables are cached by cache key. Bundled tables are registered up front;
/// everything else is fetched once and kept. Lookups that miss while a fetch
/// for the same key is running wait on that fetch.
pub struct TableResolver {
    cache: RefCell<HashMap<String, Rc<TranslationTable>>>,
    in_flight: RefCell<HashMap<String, PendingTable>>,
    fetcher: Option<Rc<dyn TableFetcher>>,
    fetches: Cell<usize>,
}

type PendingTable = Shared<LocalBoxFuture<'static, Result<Rc<TranslationTable>, LocalizationError>>>;

impl TableResolver {
    /// Resolver that only knows registered tables.
    pub fn registered() -> Self {
        Self {
            cache: RefCell::new(HashMap::new()),
            in_flight: RefCell::new(HashMap::new()),
            fetcher: None,
            fetches: Cell::new(0),
        }
    }

    pub fn with_fetcher(fetcher: impl TableFetcher + 'static) -> Self {
        Self {
            fetcher: Some(Rc::new(fetcher)),
            ..Self::registered()
        }
    }

    pub fn register(&self, cache_key: impl Into<String>, table: TranslationTable) {
        self.cache
            .borrow_mut()
            .insert(cache_key.into(), Rc::new(table));
    }

    pub fn is_cached(&self, cache_key: &str) -> bool {
        self.cache.borrow().contains_key(cache_key)
    }

    /// Number of documents requested from the fetcher so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }

    pub async fn table(
        &self,
        variant: &PageVariant,
        lang: Lang,
    ) -> Result<Rc<TranslationTable>, LocalizationError> {
        let cache_key = variant.cache_key(lang);
        if let Some(table) = self.cache.borrow().get(&cache_key) {
            return Ok(Rc::clone(table));
        }

        let running = self.in_flight.borrow().get(&cache_key).cloned();
        let pending = match running {
            Some(pending) => pending,
            None => {
                let pending = self.start_fetch(variant, lang, &cache_key)?;
                self.in_flight
                    .borrow_mut()
                    .insert(cache_key.clone(), pending.clone());
                pending
            }
        };

        let result = pending.clone().await;

        {
            let mut in_flight = self.in_flight.borrow_mut();
            if in_flight
                .get(&cache_key)
                .is_some_and(|current| Shared::ptr_eq(current, &pending))
            {
                in_flight.remove(&cache_key);
            }
        }
        if let Ok(table) = &result {
            self.cache
                .borrow_mut()
                .insert(cache_key, Rc::clone(table));
        }
        result
    }

    fn start_fetch(
        &self,
        variant: &PageVariant,
        lang: Lang,
        cache_key: &str,
    ) -> Result<PendingTable, LocalizationError> {
        let Some(fetcher) = &self.fetcher else {
            return Err(LocalizationError::TableNotFound {
                cache_key: cache_key.to_string(),
            });
        };

        let url = variant.table_url(lang);
        self.fetches.set(self.fetches.get() + 1);
        tracing::debug!("i18n: fetching {url}");

        let fetcher = Rc::clone(fetcher);
        let fetch = async move {
            let raw = fetcher.fetch_text(&url).await?;
            let table = TranslationTable::from_json(&raw).map_err(|source| {
                LocalizationError::Parse {
                    url,
                    source: Arc::new(source),
                }
            })?;
            Ok::<_, LocalizationError>(Rc::new(table))
        };
        Ok(fetch.boxed_local().shared())
    }
}
