// src/specs/search.rs
//! Scraping *spec* for the search endpoint (`search.fcgi`).
//!
//! The endpoint answers in one of three shapes:
//! - a **disambiguation list** of `div.search-item` entries, one per candidate profile;
//! - a **"0 hits"** page when nothing matched;
//! - a **redirect straight to a profile** when the name is unique.
//!
//! This module only classifies the page and lifts candidates out of it.
//! Choosing among candidates is `resolve`'s job.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::config::consts::{SEARCH_ITEM_CLASS, ZERO_HITS_PATTERN};
use crate::core::html::{any_tag_text_matches, elements_with_class, first_href, text_of};
use crate::core::sanitize::fold;

static ZERO_HITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ZERO_HITS_PATTERN).expect("static regex"));

/// One search result, ready for matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Lowercased, whitespace-collapsed text of the whole entry.
    pub text: String,
    /// Relative profile path.
    pub locator: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchPage {
    /// Several (or one) entries to choose from.
    Candidates(Vec<Candidate>),
    /// The site reported zero hits.
    NoHits,
    /// No result list: the document is itself a profile page.
    Profile,
}

pub fn read(doc: &Html) -> SearchPage {
    let mut items = elements_with_class(doc, SEARCH_ITEM_CLASS).peekable();
    if items.peek().is_some() {
        let candidates = items
            .filter_map(|item| {
                let Some(href) = first_href(item) else {
                    logd!("search item without a link skipped");
                    return None;
                };
                Some(Candidate { text: fold(&text_of(item)), locator: s!(href.trim()) })
            })
            .collect();
        return SearchPage::Candidates(candidates);
    }

    if is_zero_hits(doc) {
        return SearchPage::NoHits;
    }
    SearchPage::Profile
}

/// Any `<p>` announcing "0 hits". "10 hits" does not count.
fn is_zero_hits(doc: &Html) -> bool {
    any_tag_text_matches(doc, "p", &ZERO_HITS)
}
