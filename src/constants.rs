// src/constants.rs

pub const UI_WIDTH: usize = 88;
pub const CONFIG_DIR_NAME: &str = concat!(".", clap::crate_name!());
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = concat!(clap::crate_name!(), ".log");
pub const LOG_FALLBACK_FILE_NAME: &str = "fallback.log";
pub const VIDEO_FILE_EXT: &str = "mp4";

pub const DEFAULT_THROTTLE_MS: u64 = 500;
pub const DEFAULT_NAVIGATION_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ELEMENT_TIMEOUT_SECS: u64 = 10;
/// Poll interval used while waiting for an element to appear.
pub const ELEMENT_POLL_INTERVAL_MS: u64 = 250;

/// Environment variables honored when the matching CLI flag is absent.
pub mod env_keys {
    pub const MEMBERS_URL: &str = "MEMBERS_URL";
    pub const COURSE: &str = "COURSE";
    pub const COOKIES_PATH: &str = "COOKIES_PATH";
    pub const ARIA2C_OUTPUT: &str = "ARIA2C_OUTPUT";
}

/// DOM anchors of the course curriculum page and the lecture page.
pub mod selectors {
    pub const COURSE_TITLE: &str = ".course-sidebar-head h2";
    pub const SECTION: &str = "div.course-section";
    pub const SECTION_TITLE: &str = "div.section-title";
    pub const CHAPTER_ITEM: &str = "ul.section-list li.section-item";
    pub const CHAPTER_NAME: &str = "span.lecture-name";
    pub const CHAPTER_LINK: &str = "a.item[href]";
    pub const CHAPTER_ICON: &str = "svg use";
    pub const DOWNLOAD_LINK: &str = "a.download";
}

/// A list item is a video lecture iff its icon reference equals this value.
pub const VIDEO_ICON_REF: &str = "#icon__Video";
pub const ICON_REF_ATTR: &str = "xlink:href";
pub const HREF_ATTR: &str = "href";
