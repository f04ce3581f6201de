// src/specs/profile.rs
//! Scraping *spec* for a player profile page (`/cfb/players/<slug>.html`).
//!
//! Ground truth on the page:
//! - the **Overview** link in the player nav: its `href` is the canonical locator and
//!   its text is "Given Family Overview";
//! - the **poptip annotation** (`a.poptip.default[data-tip]`): "School YYYY-YYYY",
//!   the canonical team and career span.
//!
//! The annotation grammar is isolated in [`parse_annotation`].

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::config::consts::{ANNOTATION_ATTR, ANNOTATION_SELECTOR, OVERVIEW_PATTERN};
use crate::core::html::{self, anchor_matching, sel, text_of};
use crate::core::sanitize::normalize_ws;

static OVERVIEW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(OVERVIEW_PATTERN).expect("static regex"));

/// What a profile page says about its player. Every part may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    /// `href` of the Overview link.
    pub locator: Option<String>,
    /// Text of the Overview link, e.g. "Julian Edelman Overview".
    pub heading: Option<String>,
    /// Plain text of the team/years annotation.
    pub annotation: Option<String>,
}

/// Canonical team and career span read from the annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    pub affiliation: String,
    pub active_years: String,
}

pub fn read(doc: &Html) -> Profile {
    let overview = anchor_matching(doc, &OVERVIEW);
    let locator = overview
        .and_then(|a| a.value().attr("href"))
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(String::from);
    let heading = overview.map(text_of).filter(|t| !t.is_empty());

    let selector = sel(ANNOTATION_SELECTOR);
    let annotation = doc
        .select(&selector)
        .find_map(|a| a.value().attr(ANNOTATION_ATTR))
        .map(tip_text)
        .filter(|t| !t.is_empty());

    Profile { locator, heading, annotation }
}

/// `data-tip` values may carry markup (`Kent State<br>2005-2008`); keep the text only.
fn tip_text(raw: &str) -> String {
    let frag = html::parse_fragment(raw);
    let text = frag.root_element().text().collect::<Vec<_>>().join(" ");
    normalize_ws(&text)
}

/// Parse "`<affiliation tokens...> <year-or-range>`".
///
/// Tokens are whitespace-separated. The last token is the career span and must be
/// `YYYY` or `YYYY-YYYY`; everything before it is the affiliation (at least one token).
///
/// ```
/// use cfb_scrape::specs::profile::parse_annotation;
///
/// let a = parse_annotation("Kent State 2006-2008").unwrap();
/// assert_eq!(a.affiliation, "Kent State");
/// assert_eq!(a.active_years, "2006-2008");
/// ```
pub fn parse_annotation(text: &str) -> Option<Annotation> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let (years, team) = tokens.split_last()?;
    if team.is_empty() || !is_years_token(years) {
        return None;
    }
    Some(Annotation { affiliation: team.join(" "), active_years: s!(*years) })
}

fn is_years_token(t: &str) -> bool {
    let is_year = |s: &str| !s.is_empty() && s.len() <= 4 && s.chars().all(|c| c.is_ascii_digit());
    match t.split_once('-') {
        Some((a, b)) => is_year(a) && is_year(b),
        None => is_year(t),
    }
}

/// First two name tokens of an Overview heading ("Julian Edelman Overview").
pub fn heading_name(heading: &str) -> Option<(String, String)> {
    let mut tokens = heading.split_whitespace().filter(|t| *t != "Overview");
    let given = tokens.next()?;
    let family = tokens.next()?;
    Some((s!(given), s!(family)))
}
