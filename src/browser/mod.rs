// src/browser/mod.rs

pub mod chromium;

pub use chromium::ChromiumSession;

use crate::{cookies::CookieRecord, error::AppResult};
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// Opaque reference to an element of the current document.
///
/// Handles are only valid until the next navigation; the driver invalidates
/// its registry whenever the document changes, so a stale handle can never be
/// dereferenced against the wrong page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(pub u64);

/// The narrow slice of browser automation the extractors need.
///
/// Every extraction function receives the session explicitly; nothing in the
/// crate touches ambient browser state. The bounded waits never fail on
/// timeout: `wait_for` resolves to `None`, `wait_for_navigation` to `false`,
/// and the caller decides whether that is fatal.
#[async_trait]
pub trait PageSession: Send + Sync {
    /// Navigate the single shared page to `url`.
    async fn goto(&self, url: &Url) -> AppResult<()>;

    /// URL the page currently shows, if any navigation happened yet.
    async fn current_url(&self) -> AppResult<Option<Url>>;

    /// Inject the persisted authentication cookies, before any navigation.
    async fn set_cookies(&self, cookies: &[CookieRecord]) -> AppResult<()>;

    /// First match for `selector` in the whole document.
    async fn find(&self, selector: &str) -> AppResult<Option<ElementHandle>>;

    /// All matches for `selector` in the whole document, in document order.
    async fn find_all(&self, selector: &str) -> AppResult<Vec<ElementHandle>>;

    /// First match for `selector` below `parent`.
    async fn find_in(&self, parent: ElementHandle, selector: &str)
    -> AppResult<Option<ElementHandle>>;

    /// All matches for `selector` below `parent`, in document order.
    async fn find_all_in(
        &self,
        parent: ElementHandle,
        selector: &str,
    ) -> AppResult<Vec<ElementHandle>>;

    /// Rendered text content of the element.
    async fn inner_text(&self, element: ElementHandle) -> AppResult<Option<String>>;

    /// Attribute value, `None` when the attribute is absent.
    async fn attribute(&self, element: ElementHandle, name: &str) -> AppResult<Option<String>>;

    /// Trigger the element's primary activation (a trusted click).
    async fn click(&self, element: ElementHandle) -> AppResult<()>;

    /// Wait until the page transition settles. `false` on timeout.
    async fn wait_for_navigation(&self, timeout: Duration) -> AppResult<bool>;

    /// Wait until `selector` appears. `None` on timeout.
    async fn wait_for(&self, selector: &str, timeout: Duration)
    -> AppResult<Option<ElementHandle>>;

    /// Tear the browser down. Best effort; called once at the end of a run.
    async fn close(&self) -> AppResult<()>;
}
