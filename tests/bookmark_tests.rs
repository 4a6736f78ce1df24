// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use homedash::bookmarks::{parse_bookmark_document, BookmarkList};
use homedash::errors::DashError;
use homedash::models::Bookmark;

const EXPORT: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
<DL><p>
    <DT><H3 ADD_DATE="1700000000">Toolbar</H3>
    <DL><p>
        <DT><A HREF="https://www.rust-lang.org/" ADD_DATE="1700000001">Rust</A>
        <DT><A HREF="http://example.com/?a=1&amp;b=2">Example &amp; Co</A>
        <DT><A HREF="ftp://files.example.com/">FTP mirror</A>
        <DT><A HREF="https://empty.example.com/">   </A>
        <DT><A>No target</A>
        <DT><a href='https://docs.rs'><b>Docs</b>.rs</a>
        <DT><A HREF="https://www.rust-lang.org/">Rust</A>
    </DL><p>
</DL><p>
"#;

fn bm(name: &str, url: &str) -> Bookmark {
    Bookmark {
        name: name.into(),
        url: url.into(),
    }
}

#[test]
fn add_requires_name_and_url() {
    let mut list = BookmarkList::default();
    assert!(!list.add("", "http://x.com"));
    assert!(!list.add("X", ""));
    assert!(list.is_empty());
    assert!(list.add("X", "http://x.com"));
    assert_eq!(list.as_slice(), &[bm("X", "http://x.com")]);
}

#[test]
fn remove_and_swap_validate_indices() {
    let mut list = BookmarkList::new(vec![bm("a", "http://a"), bm("b", "http://b")]);
    list.swap(0, 1).unwrap();
    assert_eq!(list.as_slice()[0].name, "b");

    let err = list.swap(0, 2).unwrap_err();
    assert!(matches!(err, DashError::IndexOutOfRange { index: 2, .. }));
    assert_eq!(list.as_slice()[0].name, "b");

    assert!(list.remove(5).is_err());
    assert_eq!(list.remove(0).unwrap().name, "b");
    assert_eq!(list.len(), 1);
}

#[test]
fn parses_browser_export() {
    let found = parse_bookmark_document(EXPORT);
    assert_eq!(
        found,
        vec![
            bm("Rust", "https://www.rust-lang.org/"),
            bm("Example & Co", "http://example.com/?a=1&b=2"),
            bm("Docs.rs", "https://docs.rs"),
            bm("Rust", "https://www.rust-lang.org/"),
        ]
    );
}

#[test]
fn import_appends_or_reports_nothing_found() {
    let mut list = BookmarkList::new(vec![bm("Mine", "https://mine.example")]);
    let n = list.import_document(EXPORT).unwrap();
    assert_eq!(n, 4);
    assert_eq!(list.len(), 5);
    assert_eq!(list.as_slice()[0].name, "Mine");

    let err = list
        .import_document("<html><body><p>nothing here</p></body></html>")
        .unwrap_err();
    assert!(matches!(err, DashError::NoBookmarksFound));
    assert_eq!(list.len(), 5);
}

#[test]
fn anchors_inside_comments_are_skipped() {
    let markup = r#"<DL>
<!-- <DT><A HREF="https://hidden.example">Hidden</A> -->
<DT><A HREF="https://shown.example">Shown</A>
<!-- trailing
<a href="https://also-hidden.example">Also hidden</a>
-->
</DL>"#;
    assert_eq!(
        parse_bookmark_document(markup),
        vec![bm("Shown", "https://shown.example")]
    );
}
