// src/resolve.rs
//
// Query → Identity.
//
// Two phases, both pure with respect to the caller's data:
//   1. pick a profile (search list or direct hit) → `Provisional`
//   2. read the profile's canonical annotation → `Delta`
// and `merge` the two into the final `Identity` plus the list of corrections.

use url::Url;

use crate::config::consts::SEARCH_PATH;
use crate::core::html;
use crate::core::net::Fetch;
use crate::core::sanitize::fold;
use crate::core::urls;
use crate::error::{Result, ScrapeError};
use crate::identity::{Correction, Identity, Query};
use crate::specs::profile::{self, Profile};
use crate::specs::search::{self, Candidate, SearchPage};

/// A resolved player and every change made to the caller's input on the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub identity: Identity,
    pub corrections: Vec<Correction>,
}

/// How well a search candidate fits the query. `Exact` outranks `Relaxed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchRank {
    /// Name and team match, years do not.
    Relaxed,
    /// Name, team and years all match.
    Exact,
}

/// Identity as chosen from search, before the profile has been consulted.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Provisional {
    given_name: String,
    family_name: String,
    affiliation: String,
    active_years: String,
    locator: String,
}

impl Provisional {
    fn from_query(query: &Query, locator: String) -> Self {
        Self {
            given_name: query.given_name.clone(),
            family_name: query.family_name.clone(),
            affiliation: query.affiliation.clone(),
            active_years: query.active_years.clone(),
            locator,
        }
    }
}

/// Canonical values read from the profile. `None` means "keep the provisional value".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Delta {
    name: Option<(String, String)>,
    affiliation: Option<String>,
    active_years: Option<String>,
}

/// Whether the profile heading may rename the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NameCheck {
    Skip,
    Apply,
}

pub fn resolve<F: Fetch>(fetcher: &F, origin: &str, query: &Query) -> Result<Resolution> {
    logf!("Searching for {query}...");
    let search_url = urls::search(origin, &query.given_name, &query.family_name);
    let page = fetcher.get(&search_url)?;
    let doc = html::parse_document(&page.body);

    let mut corrections = Vec::new();

    let (provisional, delta) = match search::read(&doc) {
        SearchPage::NoHits => {
            logd!("search reported zero hits");
            return Err(not_found(query));
        }

        SearchPage::Candidates(candidates) => {
            logd!("search returned {} candidates", candidates.len());
            let (rank, chosen) = choose(query, &candidates).ok_or_else(|| not_found(query))?;
            if rank == MatchRank::Relaxed {
                let c = Correction::YearsIgnored { requested: query.active_years.clone() };
                logw!("{c}");
                corrections.push(c);
            }
            let provisional = Provisional::from_query(query, chosen.locator.clone());

            let profile_page = fetcher.get(&urls::profile(origin, &provisional.locator))?;
            let profile_doc = html::parse_document(&profile_page.body);
            let delta = correction_delta(query, &profile::read(&profile_doc), NameCheck::Skip);
            (provisional, delta)
        }

        SearchPage::Profile => {
            let found = profile::read(&doc);
            let locator = direct_hit_locator(&found, &page.url)
                .ok_or_else(|| ScrapeError::malformed(&page.url, "profile page without an Overview link"))?;
            logd!("search redirected straight to {locator}");
            let provisional = Provisional::from_query(query, locator);
            let delta = correction_delta(query, &found, NameCheck::Apply);
            (provisional, delta)
        }
    };

    let (identity, changes) = merge(provisional, delta);
    for c in &changes {
        logw!("{c}");
    }
    corrections.extend(changes);

    logf!("Found {identity}.");
    Ok(Resolution { identity, corrections })
}

fn not_found(query: &Query) -> ScrapeError {
    ScrapeError::NotFound { query: query.to_string() }
}

/// Rank one candidate against the query, or `None` when name or team miss.
pub fn rank(query: &Query, candidate: &Candidate) -> Option<MatchRank> {
    let name = fold(&query.full_name());
    let team = fold(&query.affiliation);
    if !candidate.text.contains(&name) || !candidate.text.contains(&team) {
        return None;
    }
    if candidate.text.contains(query.active_years.trim()) {
        Some(MatchRank::Exact)
    } else {
        Some(MatchRank::Relaxed)
    }
}

/// Best candidate: any exact match beats any relaxed match wherever they appear;
/// among equals the first one listed wins.
pub fn choose<'a>(query: &Query, candidates: &'a [Candidate]) -> Option<(MatchRank, &'a Candidate)> {
    let mut best: Option<(MatchRank, &Candidate)> = None;
    for c in candidates {
        let Some(r) = rank(query, c) else { continue };
        if best.is_none_or(|(b, _)| r > b) {
            best = Some((r, c));
        }
    }
    best
}

/// Locator of a profile reached directly: the Overview link, else the page's own
/// path when the search actually redirected somewhere. Only the path is kept;
/// query and fragment never reach the locator.
fn direct_hit_locator(found: &Profile, final_url: &str) -> Option<String> {
    let page = Url::parse(final_url).ok();
    if let Some(href) = &found.locator {
        let joined = page.as_ref().and_then(|p| p.join(href).ok());
        return Some(joined.map_or_else(|| href.clone(), |u| s!(u.path())));
    }
    let page = page?;
    let path = page.path();
    (!path.starts_with(SEARCH_PATH) && path.len() > 1).then(|| s!(path))
}

fn correction_delta(query: &Query, found: &Profile, names: NameCheck) -> Delta {
    let mut delta = Delta::default();

    match found.annotation.as_deref() {
        Some(text) if text.contains(&format!("{} {}", query.affiliation, query.active_years)) => {}
        Some(text) => match profile::parse_annotation(text) {
            Some(a) => {
                delta.affiliation = Some(a.affiliation);
                delta.active_years = Some(a.active_years);
            }
            None => logw!("Unreadable team/years annotation \"{text}\"; keeping {query}."),
        },
        None => logw!("No team/years annotation on profile; keeping {query}."),
    }

    if names == NameCheck::Apply {
        if let Some(heading) = found.heading.as_deref() {
            let expected = format!("{} Overview", query.full_name());
            if !heading.contains(&expected) {
                delta.name = profile::heading_name(heading);
            }
        }
    }

    delta
}

/// Apply `delta` over `p`. Only real changes are reported.
fn merge(p: Provisional, delta: Delta) -> (Identity, Vec<Correction>) {
    let mut changes = Vec::new();

    let (given, family) = match delta.name {
        Some((g, f)) if g != p.given_name || f != p.family_name => {
            changes.push(Correction::NameChanged {
                from: format!("{} {}", p.given_name, p.family_name),
                to: format!("{g} {f}"),
            });
            (g, f)
        }
        _ => (p.given_name, p.family_name),
    };

    let affiliation = match delta.affiliation {
        Some(a) if a != p.affiliation => {
            changes.push(Correction::AffiliationChanged { from: p.affiliation, to: a.clone() });
            a
        }
        _ => p.affiliation,
    };

    let active_years = match delta.active_years {
        Some(y) if y != p.active_years => {
            changes.push(Correction::YearsChanged { from: p.active_years, to: y.clone() });
            y
        }
        _ => p.active_years,
    };

    (Identity::new(given, family, affiliation, active_years, p.locator), changes)
}
