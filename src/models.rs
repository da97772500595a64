// src/models.rs

use url::Url;

/// One video lecture of a course section.
///
/// `download_url` is `None` when the lecture page never revealed a download
/// link (navigation or element wait timed out). The empty-string rendering of
/// that state exists only in [`crate::manifest::ManifestEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub name: String,
    pub download_url: Option<Url>,
}

/// A named group of chapters, in display order. A section without any video
/// lecture (an all-quiz section, for example) keeps an empty chapter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub chapters: Vec<Chapter>,
}

/// Root of one extraction run. Lives only for the duration of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub name: String,
    pub sections: Vec<Section>,
}

/// One line pair of the aria2c input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub download_url: String,
    pub output_path: String,
}
