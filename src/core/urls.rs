// src/core/urls.rs
//
// URL shapes the site expects. These must match the live site exactly.

use crate::config::consts::{GAMELOG_SEGMENT, SEARCH_PATH, SPLITS_SEGMENT};
use super::sanitize::strip_extension;

/// `{origin}/cfb/search/search.fcgi?search={given}+{family}`
pub fn search(origin: &str, given: &str, family: &str) -> String {
    format!("{origin}{SEARCH_PATH}?search={given}+{family}")
}

/// `{origin}{locator}`
pub fn profile(origin: &str, locator: &str) -> String {
    join!(origin, locator)
}

/// `{origin}{locator minus extension}/gamelog/{year}`
pub fn gamelog(origin: &str, locator: &str, year: u16) -> String {
    year_page(origin, locator, GAMELOG_SEGMENT, year)
}

/// `{origin}{locator minus extension}/splits/{year}`
pub fn splits(origin: &str, locator: &str, year: u16) -> String {
    year_page(origin, locator, SPLITS_SEGMENT, year)
}

fn year_page(origin: &str, locator: &str, segment: &str, year: u16) -> String {
    format!("{origin}{}/{segment}/{year}", strip_extension(locator))
}
