// src/config/consts.rs

// Net config
pub const ORIGIN: &str = "https://www.sports-reference.com";
pub const SEARCH_PATH: &str = "/cfb/search/search.fcgi";
pub const USER_AGENT: &str = concat!("cfb_scrape/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 30;
pub const MAX_REDIRECTS: usize = 5;

// Search page
pub const SEARCH_ITEM_CLASS: &str = "search-item";
pub const ZERO_HITS_PATTERN: &str = r"\b0 hits\b";
pub const OVERVIEW_PATTERN: &str = r"(.*)Overview";

// Profile page
pub const ANNOTATION_SELECTOR: &str = "a.poptip.default[data-tip]";
pub const ANNOTATION_ATTR: &str = "data-tip";

// Per-year pages
pub const GAMELOG_SEGMENT: &str = "gamelog";
pub const SPLITS_SEGMENT: &str = "splits";
