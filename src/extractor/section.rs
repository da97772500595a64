// src/extractor/section.rs

use super::{chapter::ChapterExtractor, utils};
use crate::{
    ScrapeContext,
    constants::selectors,
    error::{AppError, AppResult},
    models::Section,
    ui,
};
use log::{debug, info};

/// Enumerates the section containers of the curriculum in document order.
/// Sections are never filtered; a section whose items are all non-video
/// (an all-quiz section) simply ends up with an empty chapter list.
pub struct SectionExtractor {
    context: ScrapeContext,
}

impl SectionExtractor {
    pub fn new(context: ScrapeContext) -> Self {
        Self { context }
    }

    pub async fn extract_sections(&self) -> AppResult<Vec<Section>> {
        let section_count = self
            .context
            .session
            .find_all(selectors::SECTION)
            .await?
            .len();
        info!("found {} section containers", section_count);

        let chapter_extractor = ChapterExtractor::new(self.context.clone());
        let mut sections = Vec::with_capacity(section_count);
        for index in 0..section_count {
            let name = self.section_name(index).await?;
            ui::print_sub_header(&format!("Section {:02}: {}", index + 1, name));

            let chapters = chapter_extractor.extract_chapters(index).await?;
            debug!("section '{}' yielded {} video chapters", name, chapters.len());
            self.context.tracker.record_section();
            sections.push(Section { name, chapters });
        }
        Ok(sections)
    }

    /// Section title. Unlike chapter names, a missing title element is a
    /// structural failure: the output paths cannot be derived without it.
    async fn section_name(&self, index: usize) -> AppResult<String> {
        let session = &self.context.session;
        let section = utils::locate_section(&self.context, index).await?;
        let title = session
            .find_in(section, selectors::SECTION_TITLE)
            .await?
            .ok_or_else(|| AppError::MissingElement {
                selector: selectors::SECTION_TITLE.to_string(),
            })?;
        Ok(session
            .inner_text(title)
            .await?
            .unwrap_or_default()
            .trim()
            .to_string())
    }
}
