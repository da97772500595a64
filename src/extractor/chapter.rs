// src/extractor/chapter.rs

use super::utils;
use crate::{
    ScrapeContext,
    browser::ElementHandle,
    constants::{self, selectors},
    error::{AppError, AppResult},
    models::Chapter,
    ui,
};
use log::{debug, warn};
use std::sync::atomic::Ordering;
use url::Url;

/// Extracts the video chapters of one section.
///
/// Resolving a download link navigates the shared page away from the
/// curriculum, so items are addressed by positional index and re-queried
/// fresh for every step instead of holding handles across navigations.
pub struct ChapterExtractor {
    context: ScrapeContext,
}

impl ChapterExtractor {
    pub fn new(context: ScrapeContext) -> Self {
        Self { context }
    }

    pub async fn extract_chapters(&self, section_index: usize) -> AppResult<Vec<Chapter>> {
        let item_count = self.item_count(section_index).await?;
        debug!(
            "section #{} has {} list items",
            section_index + 1,
            item_count
        );

        let pbar = ui::new_tasks_progress_bar(item_count as u64, "scanning");
        let mut chapters = Vec::new();
        for item_index in 0..item_count {
            if self.context.cancellation_token.load(Ordering::Relaxed) {
                pbar.finish_and_clear();
                return Err(AppError::UserInterrupt);
            }

            let item = utils::locate_item(&self.context, section_index, item_index).await?;
            if !self.is_video_item(item).await? {
                self.context.tracker.record_skipped();
                pbar.inc(1);
                continue;
            }

            let name = self.chapter_name(item).await?;
            let download_url = self.resolve_download_url(item).await?;
            match &download_url {
                Some(url) => {
                    debug!("chapter '{}' resolved to {}", name, url);
                    self.context.tracker.record_resolved();
                }
                None => {
                    warn!("chapter '{}' yielded no download link", name);
                    self.context.tracker.record_unresolved(&name);
                }
            }
            chapters.push(Chapter { name, download_url });
            pbar.inc(1);

            self.context.throttle.pause().await;
        }
        pbar.finish_and_clear();
        Ok(chapters)
    }

    async fn item_count(&self, section_index: usize) -> AppResult<usize> {
        let section = utils::locate_section(&self.context, section_index).await?;
        Ok(self
            .context
            .session
            .find_all_in(section, selectors::CHAPTER_ITEM)
            .await?
            .len())
    }

    /// A list item is a video lecture iff its icon reference carries the
    /// video sentinel. Items without an icon are not videos.
    async fn is_video_item(&self, item: ElementHandle) -> AppResult<bool> {
        let session = &self.context.session;
        let Some(icon) = session.find_in(item, selectors::CHAPTER_ICON).await? else {
            return Ok(false);
        };
        let icon_ref = session.attribute(icon, constants::ICON_REF_ATTR).await?;
        Ok(icon_ref.as_deref() == Some(constants::VIDEO_ICON_REF))
    }

    /// Display name of the item. A missing name element degrades to an empty
    /// string; the item is still a chapter.
    async fn chapter_name(&self, item: ElementHandle) -> AppResult<String> {
        let session = &self.context.session;
        match session.find_in(item, selectors::CHAPTER_NAME).await? {
            Some(element) => Ok(session
                .inner_text(element)
                .await?
                .unwrap_or_default()
                .trim()
                .to_string()),
            None => Ok(String::new()),
        }
    }

    /// Clicks the item's activation link, follows the navigation and waits
    /// for the download anchor of the lecture page. Every failure mode in
    /// here resolves to `None`; a single unresolvable chapter never aborts
    /// the run.
    async fn resolve_download_url(&self, item: ElementHandle) -> AppResult<Option<Url>> {
        let session = &self.context.session;
        let config = &self.context.config;

        let Some(link) = session.find_in(item, selectors::CHAPTER_LINK).await? else {
            warn!("chapter item has no activation link");
            return Ok(None);
        };
        session.click(link).await?;

        if !session.wait_for_navigation(config.navigation_timeout).await? {
            warn!("navigation after chapter click timed out");
            return Ok(None);
        }

        let Some(anchor) = session
            .wait_for(selectors::DOWNLOAD_LINK, config.element_timeout)
            .await?
        else {
            return Ok(None);
        };
        let Some(href) = session.attribute(anchor, constants::HREF_ATTR).await? else {
            return Ok(None);
        };

        match config.members_url.join(&href) {
            Ok(url) => Ok(Some(url)),
            Err(e) => {
                warn!("download href '{}' does not resolve to a URL: {}", href, e);
                Ok(None)
            }
        }
    }
}
