// src/extractor/course.rs

use super::{section::SectionExtractor, utils};
use crate::{
    ScrapeContext,
    constants::selectors,
    error::{AppError, AppResult},
    models::Course,
    ui,
};
use log::info;

/// Top of the extraction pipeline: navigates to the course page, reads the
/// course title and drives the section extractor.
pub struct CourseExtractor {
    context: ScrapeContext,
}

impl CourseExtractor {
    pub fn new(context: ScrapeContext) -> Self {
        Self { context }
    }

    pub async fn extract(&self) -> AppResult<Course> {
        info!("navigating to course page {}", self.context.config.course_url);
        utils::ensure_course_page(&self.context).await?;

        let name = self.course_name().await?;
        info!("course title: '{}'", name);
        ui::info(&format!("Course: {}", name));

        let sections = SectionExtractor::new(self.context.clone())
            .extract_sections()
            .await?;
        Ok(Course { name, sections })
    }

    /// Course title, waited for with a bounded timeout since the curriculum
    /// is rendered client side. Missing title is a hard failure.
    async fn course_name(&self) -> AppResult<String> {
        let session = &self.context.session;
        let title = session
            .wait_for(selectors::COURSE_TITLE, self.context.config.element_timeout)
            .await?
            .ok_or_else(|| AppError::MissingElement {
                selector: selectors::COURSE_TITLE.to_string(),
            })?;
        Ok(session
            .inner_text(title)
            .await?
            .unwrap_or_default()
            .trim()
            .to_string())
    }
}
