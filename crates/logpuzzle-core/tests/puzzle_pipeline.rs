//! Integration test: scan a log file, then fetch with a fake retriever.
//!
//! Builds a small Apache-style log on disk, runs the scan pipeline, and
//! feeds the result to the fetch loop with an in-memory retriever, asserting
//! on the produced files and index.

use logpuzzle_core::fetch::{self, FetchError, Retriever};
use logpuzzle_core::retry::RetryPolicy;
use logpuzzle_core::scan;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::tempdir;

/// Serves canned bodies by URL; unknown URLs fail with HTTP 404.
struct FakeRetriever {
    bodies: HashMap<String, Vec<u8>>,
}

impl FakeRetriever {
    fn new(entries: &[(&str, &[u8])]) -> Self {
        let bodies = entries
            .iter()
            .map(|(url, body)| (url.to_string(), body.to_vec()))
            .collect();
        Self { bodies }
    }
}

impl Retriever for FakeRetriever {
    fn retrieve(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        match self.bodies.get(url) {
            Some(body) => Ok(body.clone()),
            None => Err(FetchError::Http(404)),
        }
    }
}

fn fast_policy() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 2,
        base_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(2),
    }
}

fn write_log(dir: &std::path::Path, lines: &[&str]) -> PathBuf {
    let path = dir.join("apache_example.com");
    let mut f = fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(f, "{}", line).unwrap();
    }
    path
}

#[test]
fn scan_orders_and_deduplicates_across_lines() {
    let dir = tempdir().unwrap();
    let log = write_log(
        dir.path(),
        &[
            r#"1.2.3.4 - - [06/Aug/2007:00:13:48 -0700] "GET /p/puzzle-x-aaac.jpg HTTP/1.0" 302 528"#,
            r#"1.2.3.4 - - [06/Aug/2007:00:13:49 -0700] "GET /p/puzzle-x-aaab.jpg HTTP/1.0" 200 100"#,
            r#"1.2.3.4 - - [06/Aug/2007:00:13:50 -0700] "GET /index.html HTTP/1.0" 200 100"#,
            r#"1.2.3.4 - - [06/Aug/2007:00:13:51 -0700] "GET /p/puzzle-x-aaac.jpg HTTP/1.0" 200 100"#,
        ],
    );

    let urls = scan::read_urls(&log).unwrap();
    assert_eq!(
        urls,
        vec![
            "http://example.com/p/puzzle-x-aaab.jpg",
            "http://example.com/p/puzzle-x-aaac.jpg",
        ]
    );
}

#[test]
fn fetch_three_urls_into_empty_directory() {
    let dir = tempdir().unwrap();
    let dest = dir.path().join("img");
    let urls: Vec<String> = vec![
        "http://example.com/p/puzzle-x-aaaa.jpg".into(),
        "http://example.com/p/puzzle-x-aaab.jpg".into(),
        "http://example.com/p/puzzle-x-aaac.jpg".into(),
    ];
    let retriever = FakeRetriever::new(&[
        ("http://example.com/p/puzzle-x-aaaa.jpg", b"AAAA".as_slice()),
        ("http://example.com/p/puzzle-x-aaab.jpg", b"BBBB".as_slice()),
        ("http://example.com/p/puzzle-x-aaac.jpg", b"CCCC".as_slice()),
    ]);

    let report = fetch::download_images(&urls, &dest, &retriever, &fast_policy()).unwrap();
    assert_eq!(report.saved.len(), 3);
    assert!(report.failed.is_empty());

    assert_eq!(fs::read(dest.join("img0.jpg")).unwrap(), b"AAAA");
    assert_eq!(fs::read(dest.join("img1.jpg")).unwrap(), b"BBBB");
    assert_eq!(fs::read(dest.join("img2.jpg")).unwrap(), b"CCCC");

    let index = fs::read_to_string(dest.join(fetch::INDEX_NAME)).unwrap();
    assert_eq!(
        index,
        "<html><body><img src=\"img0.jpg\"><img src=\"img1.jpg\"><img src=\"img2.jpg\"></body></html>\n"
    );

    // Exactly the three images plus the index, nothing else.
    let mut names: Vec<String> = fs::read_dir(&dest)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["img0.jpg", "img1.jpg", "img2.jpg", "index.html"]);
}

#[test]
fn fetch_keeps_preexisting_files() {
    let dir = tempdir().unwrap();
    let dest = dir.path().join("img");
    fs::create_dir_all(&dest).unwrap();
    fs::write(dest.join("notes.txt"), b"keep me").unwrap();

    let urls: Vec<String> = vec!["http://example.com/p/puzzle-x-aaaa.jpg".into()];
    let retriever = FakeRetriever::new(&[(
        "http://example.com/p/puzzle-x-aaaa.jpg",
        b"AAAA".as_slice(),
    )]);

    fetch::download_images(&urls, &dest, &retriever, &fast_policy()).unwrap();

    assert_eq!(fs::read(dest.join("notes.txt")).unwrap(), b"keep me");
    assert!(dest.join("img0.jpg").exists());
}

#[test]
fn failed_url_is_skipped_and_left_out_of_index() {
    let dir = tempdir().unwrap();
    let dest = dir.path().join("img");
    let urls: Vec<String> = vec![
        "http://example.com/p/puzzle-x-aaaa.jpg".into(),
        "http://example.com/p/puzzle-x-gone.jpg".into(),
        "http://example.com/p/puzzle-x-aaac.jpg".into(),
    ];
    let retriever = FakeRetriever::new(&[
        ("http://example.com/p/puzzle-x-aaaa.jpg", b"AAAA".as_slice()),
        ("http://example.com/p/puzzle-x-aaac.jpg", b"CCCC".as_slice()),
    ]);

    let report = fetch::download_images(&urls, &dest, &retriever, &fast_policy()).unwrap();
    assert_eq!(report.saved.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "http://example.com/p/puzzle-x-gone.jpg");

    // The failed URL held slot 1; its name is never reused.
    assert!(dest.join("img0.jpg").exists());
    assert!(!dest.join("img1.jpg").exists());
    assert!(dest.join("img2.jpg").exists());

    let index = fs::read_to_string(dest.join(fetch::INDEX_NAME)).unwrap();
    assert_eq!(
        index,
        "<html><body><img src=\"img0.jpg\"><img src=\"img2.jpg\"></body></html>\n"
    );
}

#[test]
fn jpeg_urls_keep_their_extension() {
    let dir = tempdir().unwrap();
    let dest = dir.path().join("img");
    let urls: Vec<String> = vec!["http://example.com/p/puzzle-x-aaaa.jpeg".into()];
    let retriever = FakeRetriever::new(&[(
        "http://example.com/p/puzzle-x-aaaa.jpeg",
        b"AAAA".as_slice(),
    )]);

    fetch::download_images(&urls, &dest, &retriever, &fast_policy()).unwrap();
    assert!(dest.join("img0.jpeg").exists());
}
