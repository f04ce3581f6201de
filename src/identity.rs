// src/identity.rs
//
// Caller query, resolved identity, and the corrections that turn one into the other.

use std::fmt;

use crate::error::{Result, ScrapeError};

/// What the caller believes about a player. Any field but the name may be wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub given_name: String,
    pub family_name: String,
    /// Team or school.
    pub affiliation: String,
    /// `"YYYY"` or `"YYYY-YYYY"`.
    pub active_years: String,
}

impl Query {
    pub fn new(given_name: &str, family_name: &str, affiliation: &str, active_years: &str) -> Self {
        Self {
            given_name: s!(given_name.trim()),
            family_name: s!(family_name.trim()),
            affiliation: s!(affiliation.trim()),
            active_years: s!(active_years.trim()),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.full_name(), self.affiliation, self.active_years)
    }
}

/// A player as the site records them. Built only by resolution; read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    given_name: String,
    family_name: String,
    affiliation: String,
    active_years: String,
    locator: String,
}

impl Identity {
    pub(crate) fn new(
        given_name: String,
        family_name: String,
        affiliation: String,
        active_years: String,
        locator: String,
    ) -> Self {
        debug_assert!(!locator.is_empty());
        Self { given_name, family_name, affiliation, active_years, locator }
    }

    pub fn given_name(&self) -> &str { &self.given_name }
    pub fn family_name(&self) -> &str { &self.family_name }
    pub fn affiliation(&self) -> &str { &self.affiliation }
    pub fn active_years(&self) -> &str { &self.active_years }

    /// Relative path of the profile page, e.g. `/cfb/players/julian-edelman-1.html`.
    pub fn locator(&self) -> &str { &self.locator }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }

    /// Inclusive career span, only when `active_years` is an explicit range.
    pub fn year_span(&self) -> Option<(u16, u16)> {
        year_span(&self.active_years)
    }

    /// Per-year pages exist only for seasons inside an explicit range.
    pub fn check_year(&self, year: u16) -> Result<()> {
        match self.year_span() {
            Some((start, end)) if (start..=end).contains(&year) => Ok(()),
            _ => Err(ScrapeError::YearOutOfRange {
                year,
                active_years: self.active_years.clone(),
            }),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.full_name(), self.affiliation, self.active_years)
    }
}

/// `"2005-2008"` → `(2005, 2008)`. A bare year, or anything unparsable, is `None`.
pub fn year_span(active_years: &str) -> Option<(u16, u16)> {
    let (start, end) = active_years.trim().split_once('-')?;
    Some((start.trim().parse().ok()?, end.trim().parse().ok()?))
}

/// A change resolution made to what the caller supplied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Correction {
    /// A candidate was chosen on name and team only.
    YearsIgnored { requested: String },
    NameChanged { from: String, to: String },
    AffiliationChanged { from: String, to: String },
    YearsChanged { from: String, to: String },
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Correction::YearsIgnored { requested } => {
                write!(f, "Years {requested} do not match any result; chose match by name and team.")
            }
            Correction::NameChanged { from, to } => write!(f, "Name changed from {from} to {to}."),
            Correction::AffiliationChanged { from, to } => write!(f, "Team changed from {from} to {to}."),
            Correction::YearsChanged { from, to } => write!(f, "Years changed from {from} to {to}."),
        }
    }
}
