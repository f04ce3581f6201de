// tests/extract_flow.rs
//
// Stat tables through `Player`: memoization, comment-hidden sections, per-year pages.

mod common;

use cfb_scrape::{Category, Cell, Player, Query, ScrapeError, StaticFetcher};
use common::*;

fn fetcher() -> StaticFetcher {
    StaticFetcher::new()
        .page(
            &search_url("Julian", "Edelman"),
            &search_page(&[search_item("Julian Edelman", "2006-2008", "Kent State", LOCATOR)]),
        )
        .page(&profile_url(), &edelman_profile())
        .page(&format!("{ORIGIN}/cfb/players/julian-edelman-1/gamelog/2007"), GAMELOG_2007)
        .page(&format!("{ORIGIN}/cfb/players/julian-edelman-1/splits/2008"), SPLITS_2008)
}

fn player(f: &StaticFetcher) -> Player<&StaticFetcher> {
    Player::with_fetcher(f, ORIGIN, &Query::new("Julian", "Edelman", "Kent State", "2006-2008")).unwrap()
}

#[test]
fn summary_is_fetched_once() {
    let f = fetcher();
    let mut p = player(&f);
    let after_resolve = f.request_count();

    let first = p.passing_summary().unwrap().clone();
    let second = p.passing_summary().unwrap().clone();

    assert_eq!(first, second);
    assert_eq!(f.request_count(), after_resolve + 1);
    assert!(p.is_cached(Category::Passing));
}

#[test]
fn visible_summary_is_zero_filled() {
    let f = fetcher();
    let mut p = player(&f);
    let t = p.passing_summary().unwrap();

    assert_eq!(t.columns(), ["Year", "School", "Cmp", "Att", "Pct", "Yds"]);
    assert_eq!(t.len(), 4);
    assert_eq!(t.get(2, "Pct"), Some(&Cell::ZERO));
    assert_eq!(t.get(1, "Yds"), Some(&Cell::Number(1859.0)));
    assert_eq!(t.get(3, "Year"), Some(&Cell::Text("Career".into())));
}

#[test]
fn comment_hidden_summary_is_found() {
    let f = fetcher();
    let mut p = player(&f);
    let t = p.rushing_receiving_summary().unwrap();

    assert_eq!(t.columns(), ["Year", "School", "Rushing Att", "Rushing Yds", "Receiving Rec", "Receiving Yds"]);
    assert_eq!(t.get(0, "Rushing Yds"), Some(&Cell::Number(385.0)));
    assert_eq!(t.get(0, "Receiving Rec"), Some(&Cell::ZERO));
    assert!(!t.has_empty());
}

#[test]
fn defense_lands_in_its_own_slot() {
    let f = fetcher();
    let mut p = player(&f);
    let solo = p.defense_summary().unwrap().get(0, "Solo").cloned();

    assert_eq!(solo, Some(Cell::Number(2.0)));
    assert!(p.is_cached(Category::Defense));
    for other in [Category::Passing, Category::Scoring, Category::Returns] {
        assert!(!p.is_cached(other));
    }
}

#[test]
fn unavailable_section_is_not_cached() {
    let f = fetcher();
    let mut p = player(&f);
    let before = f.request_count();

    for _ in 0..2 {
        match p.scoring_summary() {
            Err(ScrapeError::SectionUnavailable { section }) => assert_eq!(section, "scoring"),
            other => panic!("expected SectionUnavailable, got {other:?}"),
        }
    }
    assert!(!p.is_cached(Category::Scoring));
    assert_eq!(f.request_count(), before + 2);

    assert!(matches!(p.punting_kicking_summary(), Err(ScrapeError::SectionUnavailable { .. })));
    assert!(matches!(p.return_summary(), Err(ScrapeError::SectionUnavailable { .. })));
}

#[test]
fn game_log_for_a_season_in_range() {
    let f = fetcher();
    let p = player(&f);

    let t = p.game_logs(2007).unwrap();
    assert_eq!(t.columns(), ["Date", "Opp", "Cmp"]);
    assert_eq!(t.get(1, "Cmp"), Some(&Cell::ZERO));
    assert_eq!(
        f.requests().last().map(String::as_str),
        Some("http://cfb.test/cfb/players/julian-edelman-1/gamelog/2007")
    );

    // Per-year pages are not memoized.
    let before = f.request_count();
    p.game_logs(2007).unwrap();
    assert_eq!(f.request_count(), before + 1);
}

#[test]
fn splits_for_a_season_in_range() {
    let f = fetcher();
    let p = player(&f);

    let t = p.season_splits(2008).unwrap();
    assert_eq!(t.get(0, "Value"), Some(&Cell::Text("Home".into())));
    assert_eq!(t.get(0, "G"), Some(&Cell::Number(6.0)));
}

#[test]
fn year_out_of_range_fetches_nothing() {
    let f = fetcher();
    let p = player(&f);
    let before = f.request_count();

    assert!(matches!(p.game_logs(2009), Err(ScrapeError::YearOutOfRange { year: 2009, .. })));
    assert!(matches!(p.season_splits(2005), Err(ScrapeError::YearOutOfRange { year: 2005, .. })));
    assert_eq!(f.request_count(), before);
}

#[test]
fn missing_per_year_page_is_a_fetch_error() {
    let f = fetcher();
    let p = player(&f);
    assert!(matches!(p.season_splits(2006), Err(ScrapeError::Fetch(_))));
}

#[test]
fn unavailable_section_leaves_cached_ones_alone() {
    let f = fetcher();
    let mut p = player(&f);

    let passing = p.passing_summary().unwrap().clone();
    assert!(matches!(p.scoring_summary(), Err(ScrapeError::SectionUnavailable { .. })));

    assert!(p.is_cached(Category::Passing));
    let before = f.request_count();
    assert_eq!(p.passing_summary().unwrap(), &passing);
    assert_eq!(f.request_count(), before);
}

#[test]
fn summary_after_a_failure_still_succeeds() {
    let f = fetcher();
    let mut p = player(&f);

    assert!(matches!(p.scoring_summary(), Err(ScrapeError::SectionUnavailable { .. })));
    let t = p.rushing_receiving_summary().unwrap();
    assert_eq!(t.get(1, "Receiving Rec"), Some(&Cell::Number(1.0)));
    assert!(p.is_cached(Category::RushingReceiving));
    assert!(!p.is_cached(Category::Scoring));
}

#[test]
fn single_season_player_has_no_per_year_pages() {
    let f = StaticFetcher::new()
        .page(
            &search_url("Julian", "Edelman"),
            &search_page(&[search_item("Julian Edelman", "2019", "Kent State", LOCATOR)]),
        )
        .page(&profile_url(), &profile_page("Kent State 2019", "Julian Edelman"));
    let p = Player::with_fetcher(&f, ORIGIN, &Query::new("Julian", "Edelman", "Kent State", "2019")).unwrap();
    assert_eq!(p.identity().active_years(), "2019");
    let before = f.request_count();

    assert!(matches!(p.game_logs(2019), Err(ScrapeError::YearOutOfRange { year: 2019, .. })));
    assert!(matches!(p.season_splits(2019), Err(ScrapeError::YearOutOfRange { year: 2019, .. })));
    assert_eq!(f.request_count(), before);
}

#[test]
fn redirect_with_query_string_yields_clean_per_year_urls() {
    let bare_profile = r#"<html><body>
        <p><a class="poptip default" data-tip="Kent State 2006-2008" href="/cfb/schools/kent-state/">Kent State</a></p>
      </body></html>"#;
    let f = StaticFetcher::new()
        .redirect(
            &search_url("Julian", "Edelman"),
            &format!("{ORIGIN}/cfb/players/julian-edelman-1?ref=search.v2"),
            bare_profile,
        )
        .page(&format!("{ORIGIN}/cfb/players/julian-edelman-1/gamelog/2007"), GAMELOG_2007);
    let p = Player::with_fetcher(&f, ORIGIN, &Query::new("Julian", "Edelman", "Kent State", "2006-2008")).unwrap();

    assert_eq!(p.identity().locator(), "/cfb/players/julian-edelman-1");
    p.game_logs(2007).unwrap();
    assert_eq!(
        f.requests().last().map(String::as_str),
        Some("http://cfb.test/cfb/players/julian-edelman-1/gamelog/2007")
    );
}
