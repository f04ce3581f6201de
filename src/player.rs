// src/player.rs
//
// The facade callers hold: one resolved identity, one fetcher, and a memo slot per
// stat category. Summary accessors take `&mut self`, so a `Player` is only ever
// read and filled by one caller at a time; share it across threads behind a lock.

use std::collections::HashMap;

use crate::config::options::ClientOptions;
use crate::core::net::{Fetch, HttpFetcher};
use crate::core::table::StatTable;
use crate::core::urls;
use crate::error::{Result, ScrapeError};
use crate::identity::{Correction, Identity, Query};
use crate::resolve::{self, Resolution};
use crate::specs::sections::{self, Category};

const GAMELOG_SECTION: &str = "gamelog";
const SPLITS_SECTION: &str = "splits";

pub struct Player<F: Fetch = HttpFetcher> {
    identity: Identity,
    corrections: Vec<Correction>,
    fetcher: F,
    origin: String,
    summaries: HashMap<Category, StatTable>,
}

impl Player<HttpFetcher> {
    /// Look a player up on the live site with default client settings.
    pub fn search(query: &Query) -> Result<Self> {
        Self::search_with(query, &ClientOptions::default())
    }

    pub fn search_with(query: &Query, opts: &ClientOptions) -> Result<Self> {
        let fetcher = HttpFetcher::new(opts)?;
        Player::with_fetcher(fetcher, &opts.origin, query)
    }
}

impl<F: Fetch> Player<F> {
    /// Resolve `query` through `fetcher` against `origin`.
    pub fn with_fetcher(fetcher: F, origin: &str, query: &Query) -> Result<Self> {
        let origin = origin.trim_end_matches('/');
        let Resolution { identity, corrections } = resolve::resolve(&fetcher, origin, query)?;
        Ok(Self {
            identity,
            corrections,
            fetcher,
            origin: s!(origin),
            summaries: HashMap::new(),
        })
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Changes resolution made to the query, in the order they were applied.
    pub fn corrections(&self) -> &[Correction] {
        &self.corrections
    }

    /// Whether `category` has already been fetched.
    pub fn is_cached(&self, category: Category) -> bool {
        self.summaries.contains_key(&category)
    }

    /// Career table for `category`. Fetched on first call, then served from memory.
    /// A failed fetch leaves the slot empty.
    pub fn summary(&mut self, category: Category) -> Result<&StatTable> {
        if !self.summaries.contains_key(&category) {
            let url = urls::profile(&self.origin, self.identity.locator());
            let table = sections::fetch_section(&self.fetcher, &url, category.section_id())
                .inspect_err(|e| {
                    if matches!(e, ScrapeError::SectionUnavailable { .. }) {
                        logw!("No {} stats available for {}.", category.label(), self.identity.full_name());
                    }
                })?;
            self.summaries.insert(category, table);
        }
        Ok(&self.summaries[&category])
    }

    pub fn passing_summary(&mut self) -> Result<&StatTable> {
        self.summary(Category::Passing)
    }

    pub fn rushing_receiving_summary(&mut self) -> Result<&StatTable> {
        self.summary(Category::RushingReceiving)
    }

    pub fn punting_kicking_summary(&mut self) -> Result<&StatTable> {
        self.summary(Category::PuntingKicking)
    }

    pub fn return_summary(&mut self) -> Result<&StatTable> {
        self.summary(Category::Returns)
    }

    pub fn defense_summary(&mut self) -> Result<&StatTable> {
        self.summary(Category::Defense)
    }

    pub fn scoring_summary(&mut self) -> Result<&StatTable> {
        self.summary(Category::Scoring)
    }

    /// Game-by-game log for one season. Not cached.
    pub fn game_logs(&self, year: u16) -> Result<StatTable> {
        self.identity.check_year(year)?;
        let url = urls::gamelog(&self.origin, self.identity.locator(), year);
        sections::fetch_section(&self.fetcher, &url, GAMELOG_SECTION)
    }

    /// Situational splits for one season. Not cached.
    pub fn season_splits(&self, year: u16) -> Result<StatTable> {
        self.identity.check_year(year)?;
        let url = urls::splits(&self.origin, self.identity.locator(), year);
        sections::fetch_section(&self.fetcher, &url, SPLITS_SECTION)
    }
}
