// src/manifest.rs

use crate::{
    constants,
    error::AppResult,
    models::{Course, ManifestEntry},
    naming,
};
use log::debug;
use std::{fs, io::Write, path::Path};
use tempfile::NamedTempFile;

/// Walks the extracted course tree in document order and derives one entry
/// per chapter. Chapters that never resolved a download link are kept with
/// an empty URL line; the external downloader deals with those.
pub fn build_manifest(course: &Course) -> Vec<ManifestEntry> {
    let course_dir = naming::to_slug(&course.name);
    let mut entries = Vec::new();
    for (index, section) in course.sections.iter().enumerate() {
        let section_dir = format!(
            "{:02}_{}",
            index + 1,
            naming::normalize_section_name(&section.name).into_inner()
        );
        for chapter in &section.chapters {
            let stem = naming::normalize_chapter_name(&chapter.name).into_inner();
            entries.push(ManifestEntry {
                download_url: chapter
                    .download_url
                    .as_ref()
                    .map(|url| url.to_string())
                    .unwrap_or_default(),
                output_path: format!(
                    "{}/{}/{}.{}",
                    course_dir,
                    section_dir,
                    stem,
                    constants::VIDEO_FILE_EXT
                ),
            });
        }
    }
    entries
}

/// aria2c input-file format: the URL line, then an indented `out=` line with
/// the relative destination. Entries are joined with single newlines, no
/// blank separators.
pub fn render_manifest(entries: &[ManifestEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}\n out=./{}", entry.download_url, entry.output_path))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes the rendered manifest through a temp file in the destination
/// directory and persists it atomically, so a crashed run never leaves a
/// half-written manifest behind.
pub fn write_manifest(path: &Path, entries: &[ManifestEntry]) -> AppResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(render_manifest(entries).as_bytes())?;
    tmp.persist(path)?;
    debug!("manifest with {} entries written to {:?}", entries.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Chapter, Section};
    use url::Url;

    fn chapter(name: &str, url: Option<&str>) -> Chapter {
        Chapter {
            name: name.to_string(),
            download_url: url.map(|u| Url::parse(u).unwrap()),
        }
    }

    fn two_section_course() -> Course {
        Course {
            name: "My Course".to_string(),
            sections: vec![
                Section {
                    name: "Basics (10 lectures)".to_string(),
                    chapters: vec![chapter("1- Intro (5m)", Some("https://x/a.mp4"))],
                },
                Section {
                    name: "Advanced (3 lectures)".to_string(),
                    chapters: vec![chapter("2- Deep Dive (8m)", Some("https://x/b.mp4"))],
                },
            ],
        }
    }

    #[test]
    fn test_build_manifest_paths_and_order() {
        let entries = build_manifest(&two_section_course());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].download_url, "https://x/a.mp4");
        assert_eq!(entries[0].output_path, "my_course/01_basics/1_intro.mp4");
        assert_eq!(entries[1].output_path, "my_course/02_advanced/2_deep_dive.mp4");
    }

    #[test]
    fn test_render_manifest_matches_aria2c_format() {
        let rendered = render_manifest(&build_manifest(&two_section_course()));
        assert_eq!(
            rendered,
            "https://x/a.mp4\n out=./my_course/01_basics/1_intro.mp4\n\
             https://x/b.mp4\n out=./my_course/02_advanced/2_deep_dive.mp4"
        );
    }

    #[test]
    fn test_empty_section_keeps_index_continuity() {
        let course = Course {
            name: "C".to_string(),
            sections: vec![
                Section {
                    name: "First (1 lecture)".to_string(),
                    chapters: vec![chapter("1- A (1m)", Some("https://x/a.mp4"))],
                },
                Section {
                    name: "Quizzes Only (3 quizzes)".to_string(),
                    chapters: vec![],
                },
                Section {
                    name: "Third (1 lecture)".to_string(),
                    chapters: vec![chapter("2- B (1m)", Some("https://x/b.mp4"))],
                },
            ],
        };
        let entries = build_manifest(&course);
        // the empty section contributes nothing but still consumes index 02
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].output_path, "c/01_first/1_a.mp4");
        assert_eq!(entries[1].output_path, "c/03_third/2_b.mp4");
    }

    #[test]
    fn test_unresolved_chapter_keeps_its_path() {
        let course = Course {
            name: "C".to_string(),
            sections: vec![Section {
                name: "S (1 lecture)".to_string(),
                chapters: vec![chapter("1- Gone (2m)", None)],
            }],
        };
        let entries = build_manifest(&course);
        assert_eq!(entries[0].download_url, "");
        assert_eq!(entries[0].output_path, "c/01_s/1_gone.mp4");
        assert_eq!(render_manifest(&entries), "\n out=./c/01_s/1_gone.mp4");
    }

    #[test]
    fn test_section_index_is_zero_padded() {
        let sections: Vec<Section> = (0..12)
            .map(|i| Section {
                name: format!("S{} (1 lecture)", i + 1),
                chapters: vec![chapter("1- A (1m)", Some("https://x/a.mp4"))],
            })
            .collect();
        let course = Course {
            name: "C".to_string(),
            sections,
        };
        let entries = build_manifest(&course);
        assert!(entries[0].output_path.starts_with("c/01_"));
        assert!(entries[11].output_path.starts_with("c/12_"));
    }

    #[test]
    fn test_unmatched_names_pass_through() {
        let course = Course {
            name: "C".to_string(),
            sections: vec![Section {
                name: "No Meta".to_string(),
                chapters: vec![chapter("Freeform Title", Some("https://x/a.mp4"))],
            }],
        };
        let entries = build_manifest(&course);
        assert_eq!(entries[0].output_path, "c/01_No Meta/Freeform Title.mp4");
    }

    #[test]
    fn test_write_manifest_creates_file_atomically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("links.txt");
        let entries = build_manifest(&two_section_course());

        write_manifest(&path, &entries).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, render_manifest(&entries));
        // no stray temp file left behind
        let names: Vec<_> = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names.len(), 1);
    }
}
