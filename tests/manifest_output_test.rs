// tests/manifest_output_test.rs

use std::fs;
use teachable_dl::{
    manifest,
    models::{Chapter, Course, Section},
};
use url::Url;

fn demo_course() -> Course {
    Course {
        name: "My Course".to_string(),
        sections: vec![
            Section {
                name: "Basics (10 lectures)".to_string(),
                chapters: vec![Chapter {
                    name: "1- Intro (5m)".to_string(),
                    download_url: Some(Url::parse("https://x/a.mp4").unwrap()),
                }],
            },
            Section {
                name: "Advanced (3 lectures)".to_string(),
                chapters: vec![Chapter {
                    name: "2- Deep Dive (8m)".to_string(),
                    download_url: Some(Url::parse("https://x/b.mp4").unwrap()),
                }],
            },
        ],
    }
}

#[test]
fn test_written_manifest_is_byte_exact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("links.txt");

    let entries = manifest::build_manifest(&demo_course());
    manifest::write_manifest(&path, &entries).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "https://x/a.mp4\n out=./my_course/01_basics/1_intro.mp4\n\
         https://x/b.mp4\n out=./my_course/02_advanced/2_deep_dive.mp4"
    );
}

#[test]
fn test_unresolved_chapter_writes_empty_url_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("links.txt");

    let mut course = demo_course();
    course.sections[1].chapters[0].download_url = None;

    let entries = manifest::build_manifest(&course);
    manifest::write_manifest(&path, &entries).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], " out=./my_course/02_advanced/2_deep_dive.mp4");
}

#[test]
fn test_overwrites_existing_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("links.txt");
    fs::write(&path, "stale content").unwrap();

    let entries = manifest::build_manifest(&demo_course());
    manifest::write_manifest(&path, &entries).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("stale content"));
    assert!(content.starts_with("https://x/a.mp4"));
}
