// src/cli.rs
use std::io::{self, Write};
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::config::options::ClientOptions;
use crate::csv::{self, Delim};
use crate::error::ScrapeError;
use crate::identity::Query;
use crate::player::Player;
use crate::specs::sections::Category;

/// Look up a college football player and print their stat tables.
#[derive(Debug, Parser)]
#[command(name = "cfb_scrape", version)]
pub struct Args {
    /// Given name, e.g. "Julian"
    pub given: String,
    /// Family name, e.g. "Edelman"
    pub family: String,
    /// School, e.g. "Kent State"
    pub affiliation: String,
    /// Active years, "YYYY" or "YYYY-YYYY"
    pub years: String,

    /// Career section to print (passing, rushing, punting, returns, defense, scoring). Repeatable.
    #[arg(short, long = "section", value_name = "NAME")]
    pub sections: Vec<Category>,
    /// Print every career section, skipping those the player has none of
    #[arg(short, long)]
    pub all: bool,
    /// Print the game log for YEAR
    #[arg(long, value_name = "YEAR")]
    pub gamelog: Option<u16>,
    /// Print the season splits for YEAR
    #[arg(long, value_name = "YEAR")]
    pub splits: Option<u16>,

    #[arg(long, default_value = "csv")]
    pub format: Delim,
    #[arg(long)]
    pub no_headers: bool,

    /// Site origin
    #[arg(long, value_name = "URL")]
    pub origin: Option<String>,
    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// More logging (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    fn client_options(&self) -> ClientOptions {
        let mut opts = ClientOptions::default();
        if let Some(origin) = &self.origin {
            opts = opts.with_origin(origin);
        }
        if let Some(secs) = self.timeout {
            opts = opts.with_timeout(Duration::from_secs(secs));
        }
        opts
    }

    /// Sections to print, in a stable order. No selection means all of them.
    fn categories(&self) -> Vec<Category> {
        if self.all || (self.sections.is_empty() && self.gamelog.is_none() && self.splits.is_none()) {
            return Category::ALL.to_vec();
        }
        let mut out = self.sections.clone();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Whether a missing career section is skipped instead of failing the run.
    fn lenient(&self) -> bool {
        self.all || self.sections.is_empty()
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose);

    let query = Query::new(&args.given, &args.family, &args.affiliation, &args.years);
    let mut player = Player::search_with(&query, &args.client_options())
        .wrap_err_with(|| format!("Could not resolve {query}"))?;

    eprintln!("{}", player.identity());
    for c in player.corrections() {
        eprintln!("  {c}");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let headers = !args.no_headers;

    for category in args.categories() {
        match player.summary(category) {
            Ok(table) => {
                writeln!(out, "# {category}")?;
                csv::write_table(&mut out, table, headers, args.format)?;
            }
            Err(ScrapeError::SectionUnavailable { .. }) if args.lenient() => {
                eprintln!("No {} stats.", category.label());
            }
            Err(e) => return Err(e).wrap_err_with(|| format!("Section {category}")),
        }
    }

    if let Some(year) = args.gamelog {
        let table = player.game_logs(year).wrap_err_with(|| format!("Game log {year}"))?;
        writeln!(out, "# gamelog {year}")?;
        csv::write_table(&mut out, &table, headers, args.format)?;
    }

    if let Some(year) = args.splits {
        let table = player.season_splits(year).wrap_err_with(|| format!("Splits {year}"))?;
        writeln!(out, "# splits {year}")?;
        csv::write_table(&mut out, &table, headers, args.format)?;
    }

    Ok(())
}
