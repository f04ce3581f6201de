// tests/common/mod.rs
//
// Canned sports-reference pages shared by the integration suites.
#![allow(dead_code)]

pub const ORIGIN: &str = "http://cfb.test";
pub const LOCATOR: &str = "/cfb/players/julian-edelman-1.html";

pub fn search_url(given: &str, family: &str) -> String {
    format!("{ORIGIN}/cfb/search/search.fcgi?search={given}+{family}")
}

pub fn profile_url() -> String {
    format!("{ORIGIN}{LOCATOR}")
}

pub fn search_item(name: &str, years: &str, school: &str, locator: &str) -> String {
    format!(
        r#"<div class="search-item">
             <div class="search-item-name"><strong><a href="{locator}">{name}</a></strong> ({years})</div>
             <div class="search-item-team">{school}</div>
             <div class="search-item-url">{locator}</div>
           </div>"#
    )
}

pub fn search_page(items: &[String]) -> String {
    format!(
        r#"<html><body><div id="players"><h2>{} Hits</h2><div class="search-results">{}</div></div></body></html>"#,
        items.len(),
        items.concat()
    )
}

pub const ZERO_HITS: &str =
    r#"<html><body><div class="search-results"><p>Found 0 hits that match your search.</p></div></body></html>"#;

const PASSING: &str = r#"<table class="stats_table" id="passing">
  <thead><tr><th>Year</th><th>School</th><th>Cmp</th><th>Att</th><th>Pct</th><th>Yds</th></tr></thead>
  <tbody>
    <tr><th>2006</th><td>Kent State</td><td>4</td><td>9</td><td>44.4</td><td>21</td></tr>
    <tr><th>2007</th><td>Kent State</td><td>172</td><td>313</td><td>55.0</td><td>1,859</td></tr>
    <tr><th>2008</th><td>Kent State</td><td>175</td><td>321</td><td></td><td>1,820</td></tr>
  </tbody>
  <tfoot><tr><th>Career</th><td>Kent State</td><td>351</td><td>643</td><td>54.6</td><td>3,700</td></tr></tfoot>
</table>"#;

const RUSHING: &str = r#"<table class="stats_table" id="rushing">
  <thead>
    <tr class="over_header"><th colspan="2"></th><th colspan="2">Rushing</th><th colspan="2">Receiving</th></tr>
    <tr><th>Year</th><th>School</th><th>Att</th><th>Yds</th><th>Rec</th><th>Yds</th></tr>
  </thead>
  <tbody>
    <tr><th>2006</th><td>Kent State</td><td>70</td><td>385</td><td></td><td></td></tr>
    <tr><th>2007</th><td>Kent State</td><td>175</td><td>824</td><td>1</td><td>21</td></tr>
  </tbody>
</table>"#;

const DEFENSE: &str = r#"<table class="stats_table" id="defense">
  <thead><tr><th>Year</th><th>School</th><th>Solo</th><th>Ast</th></tr></thead>
  <tbody><tr><th>2008</th><td>Kent State</td><td>2</td><td></td></tr></tbody>
</table>"#;

/// Profile page: passing is live, rushing and defense sit inside comments.
pub fn profile_page(annotation: &str, heading: &str) -> String {
    format!(
        r#"<html><body>
          <div id="info">
            <h1><span>{heading}</span></h1>
            <p><strong>School:</strong> <a class="poptip default" data-tip="{annotation}" href="/cfb/schools/kent-state/">Kent State</a></p>
          </div>
          <div id="all_passing" class="table_wrapper">{PASSING}</div>
          <div id="all_rushing" class="table_wrapper setup_commented commented"><!--
            <div class="table_container" id="div_rushing">{RUSHING}</div>
          --></div>
          <div id="all_defense" class="table_wrapper setup_commented commented"><!--
            <div class="table_container" id="div_defense">{DEFENSE}</div>
          --></div>
          <div id="bottom_nav">
            <a href="{LOCATOR}">{heading} Overview</a>
            <a href="/cfb/players/julian-edelman-1/gamelog/2008">2008 Game Log</a>
          </div>
        </body></html>"#
    )
}

pub fn edelman_profile() -> String {
    profile_page("Kent State 2006-2008", "Julian Edelman")
}

pub const GAMELOG_2007: &str = r#"<html><body><div id="all_gamelog"><!--
  <table id="gamelog"><thead><tr><th>Date</th><th>Opp</th><th>Cmp</th></tr></thead>
  <tbody><tr><td>2007-09-01</td><td>Iowa State</td><td>14</td></tr>
         <tr><td>2007-09-08</td><td>Ohio State</td><td></td></tr></tbody></table>
--></div></body></html>"#;

pub const SPLITS_2008: &str = r#"<html><body>
  <table id="splits"><thead><tr><th>Split</th><th>Value</th><th>G</th></tr></thead>
  <tbody><tr><td>Place</td><td>Home</td><td>6</td></tr></tbody></table>
</body></html>"#;
