// src/extractor/utils.rs

use crate::{
    ScrapeContext,
    browser::ElementHandle,
    constants::selectors,
    error::{AppError, AppResult},
};
use log::debug;

/// Re-anchors the session on the course curriculum page.
///
/// Element handles do not survive navigation, so after every chapter
/// resolution the extractors come back through here before touching the next
/// item. The course title is the structural anchor: if it never appears the
/// page is not the curriculum and the run cannot continue.
pub(crate) async fn ensure_course_page(context: &ScrapeContext) -> AppResult<()> {
    let course_url = &context.config.course_url;
    let on_course_page = context
        .session
        .current_url()
        .await?
        .is_some_and(|url| url.as_str().trim_end_matches('/') == course_url.as_str().trim_end_matches('/'));
    if on_course_page {
        return Ok(());
    }

    debug!("re-anchoring on course page {}", course_url);
    context.session.goto(course_url).await?;
    context
        .session
        .wait_for(selectors::COURSE_TITLE, context.config.element_timeout)
        .await?
        .ok_or_else(|| AppError::MissingElement {
            selector: selectors::COURSE_TITLE.to_string(),
        })?;
    Ok(())
}

/// Fresh handle to section container `index`, re-queried from the live
/// document.
pub(crate) async fn locate_section(
    context: &ScrapeContext,
    index: usize,
) -> AppResult<ElementHandle> {
    ensure_course_page(context).await?;
    let sections = context.session.find_all(selectors::SECTION).await?;
    sections
        .get(index)
        .copied()
        .ok_or_else(|| AppError::MissingElement {
            selector: format!("{} #{}", selectors::SECTION, index + 1),
        })
}

/// Fresh handle to list item `item_index` inside section `section_index`.
pub(crate) async fn locate_item(
    context: &ScrapeContext,
    section_index: usize,
    item_index: usize,
) -> AppResult<ElementHandle> {
    let section = locate_section(context, section_index).await?;
    let items = context
        .session
        .find_all_in(section, selectors::CHAPTER_ITEM)
        .await?;
    items
        .get(item_index)
        .copied()
        .ok_or_else(|| AppError::MissingElement {
            selector: format!(
                "{} #{} in section #{}",
                selectors::CHAPTER_ITEM,
                item_index + 1,
                section_index + 1
            ),
        })
}
