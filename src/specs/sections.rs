// src/specs/sections.rs
//! Scraping *spec* for the stat tables on profile, game-log and splits pages.
//!
//! Every table has a section id (`passing`, `rushing`, `gamelog`, …). The site renders
//! the primary table directly and defers the rest into HTML comments, so lookup is:
//!
//! 1. an element with that `id` in the live DOM;
//! 2. otherwise the first comment whose text contains `id="<section>"`, re-parsed.
//!
//! Whatever is found is zero-filled before it leaves this module.

use std::fmt;
use std::str::FromStr;

use scraper::Html;

use crate::core::html::{self, comments, element_by_id, table_within};
use crate::core::net::Fetch;
use crate::core::table::StatTable;
use crate::error::{Result, ScrapeError};

/// Per-career stat categories shown on a profile page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Passing,
    RushingReceiving,
    PuntingKicking,
    Returns,
    Defense,
    Scoring,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Passing,
        Category::RushingReceiving,
        Category::PuntingKicking,
        Category::Returns,
        Category::Defense,
        Category::Scoring,
    ];

    /// `id` of the table on the profile page.
    pub fn section_id(self) -> &'static str {
        match self {
            Category::Passing => "passing",
            Category::RushingReceiving => "rushing",
            Category::PuntingKicking => "punting",
            Category::Returns => "punt_ret",
            Category::Defense => "defense",
            Category::Scoring => "scoring",
        }
    }

    /// Human wording, as in "no passing stats".
    pub fn label(self) -> &'static str {
        match self {
            Category::Passing => "passing",
            Category::RushingReceiving => "rushing or receiving",
            Category::PuntingKicking => "punting or kicking",
            Category::Returns => "return",
            Category::Defense => "defensive",
            Category::Scoring => "scoring",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section_id())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "passing" => Ok(Category::Passing),
            "rushing" | "receiving" | "rushing_receiving" => Ok(Category::RushingReceiving),
            "punting" | "kicking" | "punting_kicking" => Ok(Category::PuntingKicking),
            "returns" | "punt_ret" => Ok(Category::Returns),
            "defense" => Ok(Category::Defense),
            "scoring" => Ok(Category::Scoring),
            other => Err(format!("Unknown section: {other}")),
        }
    }
}

/// Where a section's table was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Visible,
    Comment,
}

/// Fetch `url` and pull the `section_id` table out of it, zero-filled.
pub fn fetch_section<F: Fetch>(fetcher: &F, url: &str, section_id: &str) -> Result<StatTable> {
    let page = fetcher.get(url)?;
    let doc = html::parse_document(&page.body);
    let (table, source) = locate(&doc, section_id).ok_or_else(|| ScrapeError::SectionUnavailable {
        section: s!(section_id),
    })?;
    logd!("section {section_id}: {} rows ({source:?}) from {url}", table.len());
    Ok(table.zero_filled())
}

/// Find and parse a section's table: live DOM first, then comments. Not zero-filled.
pub fn locate(doc: &Html, section_id: &str) -> Option<(StatTable, Source)> {
    if let Some(table) = element_by_id(doc, section_id).and_then(table_within) {
        return Some((StatTable::from_element(table), Source::Visible));
    }

    let marker = format!(r#"id="{section_id}""#);
    let hidden = comments(doc).find(|c| c.contains(&marker))?;
    let frag = html::parse_fragment(hidden);
    let table = element_by_id(&frag, section_id)
        .and_then(table_within)
        .or_else(|| html::elements(&frag).find(|e| e.value().name() == "table"))?;
    Some((StatTable::from_element(table), Source::Comment))
}
