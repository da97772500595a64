// src/browser/chromium.rs

use super::{ElementHandle, PageSession};
use crate::{
    config::AppConfig,
    constants,
    cookies::CookieRecord,
    error::{AppError, AppResult},
};
use anyhow::anyhow;
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::network::{CookieParam, CookieSameSite, TimeSinceEpoch};
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use dashmap::DashMap;
use futures::StreamExt;
use log::debug;
use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};
use tokio::sync::Mutex as TokioMutex;
use url::Url;

/// Headless Chrome/Chromium driver behind the [`PageSession`] seam.
///
/// One browser, one page. Element handles index into a registry that is
/// cleared on every navigation, so references captured on one document cannot
/// leak onto the next.
pub struct ChromiumSession {
    browser: TokioMutex<Browser>,
    page: Page,
    elements: DashMap<u64, Arc<Element>>,
    next_handle: AtomicU64,
}

impl ChromiumSession {
    pub async fn launch(config: &AppConfig) -> AppResult<Self> {
        let mut builder = BrowserConfig::builder();
        if !config.headless {
            builder = builder.with_head();
        }
        let browser_config = builder.build().map_err(AppError::BrowserLaunch)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| AppError::BrowserLaunch(e.to_string()))?;

        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("browser handler event error: {e}");
                    break;
                }
            }
        });

        let page = browser.new_page("about:blank").await?;

        Ok(Self {
            browser: TokioMutex::new(browser),
            page,
            elements: DashMap::new(),
            next_handle: AtomicU64::new(1),
        })
    }

    fn register(&self, element: Element) -> ElementHandle {
        let id = self.next_handle.fetch_add(1, Ordering::Relaxed);
        self.elements.insert(id, Arc::new(element));
        ElementHandle(id)
    }

    fn resolve(&self, handle: ElementHandle) -> AppResult<Arc<Element>> {
        self.elements
            .get(&handle.0)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| {
                AppError::Other(anyhow!(
                    "element handle {} is stale (the page navigated since it was captured)",
                    handle.0
                ))
            })
    }

    fn invalidate_handles(&self) {
        self.elements.clear();
    }
}

fn parse_same_site(value: &str) -> Option<CookieSameSite> {
    match value {
        "Strict" | "strict" => Some(CookieSameSite::Strict),
        "Lax" | "lax" => Some(CookieSameSite::Lax),
        "None" | "no_restriction" | "none" => Some(CookieSameSite::None),
        _ => None,
    }
}

fn to_cookie_param(record: &CookieRecord) -> AppResult<CookieParam> {
    let mut builder = CookieParam::builder()
        .name(&record.name)
        .value(&record.value);
    if let Some(domain) = &record.domain {
        builder = builder.domain(domain);
    }
    if let Some(path) = &record.path {
        builder = builder.path(path);
    }
    if let Some(secure) = record.secure {
        builder = builder.secure(secure);
    }
    if let Some(http_only) = record.http_only {
        builder = builder.http_only(http_only);
    }
    if let Some(expires) = record.expires {
        builder = builder.expires(TimeSinceEpoch::new(expires));
    }
    if let Some(same_site) = record.same_site.as_deref().and_then(parse_same_site) {
        builder = builder.same_site(same_site);
    }
    builder.build().map_err(|reason| AppError::Cookie {
        name: record.name.clone(),
        reason,
    })
}

#[async_trait]
impl PageSession for ChromiumSession {
    async fn goto(&self, url: &Url) -> AppResult<()> {
        self.invalidate_handles();
        self.page.goto(url.as_str()).await?;
        Ok(())
    }

    async fn current_url(&self) -> AppResult<Option<Url>> {
        match self.page.url().await? {
            Some(raw) => Ok(Some(raw.parse()?)),
            None => Ok(None),
        }
    }

    async fn set_cookies(&self, cookies: &[CookieRecord]) -> AppResult<()> {
        let params = cookies
            .iter()
            .map(to_cookie_param)
            .collect::<AppResult<Vec<_>>>()?;
        self.page.set_cookies(params).await?;
        Ok(())
    }

    async fn find(&self, selector: &str) -> AppResult<Option<ElementHandle>> {
        match self.page.find_element(selector).await {
            Ok(element) => Ok(Some(self.register(element))),
            Err(_) => Ok(None),
        }
    }

    async fn find_all(&self, selector: &str) -> AppResult<Vec<ElementHandle>> {
        let elements = self.page.find_elements(selector).await.unwrap_or_default();
        Ok(elements
            .into_iter()
            .map(|element| self.register(element))
            .collect())
    }

    async fn find_in(
        &self,
        parent: ElementHandle,
        selector: &str,
    ) -> AppResult<Option<ElementHandle>> {
        let parent = self.resolve(parent)?;
        match parent.find_element(selector).await {
            Ok(element) => Ok(Some(self.register(element))),
            Err(_) => Ok(None),
        }
    }

    async fn find_all_in(
        &self,
        parent: ElementHandle,
        selector: &str,
    ) -> AppResult<Vec<ElementHandle>> {
        let parent = self.resolve(parent)?;
        let elements = parent.find_elements(selector).await.unwrap_or_default();
        Ok(elements
            .into_iter()
            .map(|element| self.register(element))
            .collect())
    }

    async fn inner_text(&self, element: ElementHandle) -> AppResult<Option<String>> {
        let element = self.resolve(element)?;
        Ok(element.inner_text().await?)
    }

    async fn attribute(&self, element: ElementHandle, name: &str) -> AppResult<Option<String>> {
        let element = self.resolve(element)?;
        Ok(element.attribute(name).await?)
    }

    async fn click(&self, element: ElementHandle) -> AppResult<()> {
        let element = self.resolve(element)?;
        element.click().await?;
        Ok(())
    }

    async fn wait_for_navigation(&self, timeout: Duration) -> AppResult<bool> {
        let result = tokio::time::timeout(timeout, self.page.wait_for_navigation()).await;
        // whatever happened, the old document is gone
        self.invalidate_handles();
        match result {
            Ok(Ok(_)) => Ok(true),
            Ok(Err(e)) => Err(e.into()),
            Err(_elapsed) => Ok(false),
        }
    }

    async fn wait_for(
        &self,
        selector: &str,
        timeout: Duration,
    ) -> AppResult<Option<ElementHandle>> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            if let Ok(element) = self.page.find_element(selector).await {
                return Ok(Some(self.register(element)));
            }
            if tokio::time::Instant::now() >= deadline {
                debug!("wait_for '{}' timed out after {:?}", selector, timeout);
                return Ok(None);
            }
            tokio::time::sleep(Duration::from_millis(constants::ELEMENT_POLL_INTERVAL_MS)).await;
        }
    }

    async fn close(&self) -> AppResult<()> {
        let mut browser = self.browser.lock().await;
        browser.close().await?;
        browser.wait().await.ok();
        Ok(())
    }
}
