// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::errors::{check_index, DashError, Result};
use crate::models::Bookmark;

static ANCHOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<a\b([^>]*)>(.*?)</a\s*>").expect("anchor regex"));
static HREF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)\bhref\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#).expect("href regex")
});
static COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment regex"));
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("tag regex"));
static ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").expect("entity regex")
});

/// Displayed bookmark grid, in tile order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkList(Vec<Bookmark>);

impl BookmarkList {
    pub fn new(items: Vec<Bookmark>) -> Self {
        Self(items)
    }

    pub fn as_slice(&self) -> &[Bookmark] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bookmark> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends when both name and url are non-empty. Returns whether it did.
    pub fn add(&mut self, name: &str, url: &str) -> bool {
        if name.is_empty() || url.is_empty() {
            return false;
        }
        self.0.push(Bookmark {
            name: name.to_string(),
            url: url.to_string(),
        });
        true
    }

    pub fn remove(&mut self, index: usize) -> Result<Bookmark> {
        check_index("bookmark", index, self.0.len())?;
        Ok(self.0.remove(index))
    }

    /// Exchanges two tiles (drag-and-drop reorder).
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        check_index("bookmark", i, self.0.len())?;
        check_index("bookmark", j, self.0.len())?;
        self.0.swap(i, j);
        Ok(())
    }

    /// Parses a browser bookmark export and appends what it finds.
    pub fn import_document(&mut self, markup: &str) -> Result<usize> {
        let found = parse_bookmark_document(markup);
        if found.is_empty() {
            return Err(DashError::NoBookmarksFound);
        }
        let n = found.len();
        self.0.extend(found);
        tracing::info!(imported = n, total = self.0.len(), "bookmarks imported");
        Ok(n)
    }
}

impl<'a> IntoIterator for &'a BookmarkList {
    type Item = &'a Bookmark;
    type IntoIter = std::slice::Iter<'a, Bookmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Extracts every `<a href>` whose visible text is non-empty and whose target
/// starts with `http`. Duplicates are kept; everything but anchors is ignored.
pub fn parse_bookmark_document(markup: &str) -> Vec<Bookmark> {
    let mut out = Vec::new();
    let markup = COMMENT.replace_all(markup, "");
    for anchor in ANCHOR.captures_iter(&markup) {
        let attrs = anchor.get(1).map_or("", |m| m.as_str());
        let Some(href) = HREF.captures(attrs).and_then(|c| {
            c.get(1)
                .or_else(|| c.get(2))
                .or_else(|| c.get(3))
                .map(|m| m.as_str())
        }) else {
            continue;
        };
        let url = decode_entities(href.trim());
        let inner = anchor.get(2).map_or("", |m| m.as_str());
        let name = decode_entities(&TAG.replace_all(inner, ""));
        let name = name.trim();
        if !name.is_empty() && url.starts_with("http") {
            out.push(Bookmark {
                name: name.to_string(),
                url,
            });
        }
    }
    tracing::debug!(anchors = out.len(), "parsed bookmark document");
    out
}

fn decode_entities(s: &str) -> String {
    ENTITY
        .replace_all(s, |caps: &Captures| {
            let body = &caps[1];
            let decoded = if let Some(hex) = body
                .strip_prefix("#x")
                .or_else(|| body.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                match body {
                    "amp" => Some('&'),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    "nbsp" => Some('\u{a0}'),
                    _ => None,
                }
            };
            match decoded {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
