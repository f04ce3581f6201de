// src/lib.rs
//! Resolve a college football player against sports-reference.com and read their
//! stat tables, including the ones the site hides inside HTML comments.
//!
//! ```no_run
//! use cfb_scrape::{Player, Query};
//!
//! let query = Query::new("Julian", "Edelman", "Kent State", "2006-2008");
//! let mut player = Player::search(&query)?;
//! for c in player.corrections() {
//!     println!("{c}");
//! }
//! let rushing = player.rushing_receiving_summary()?;
//! println!("{} seasons", rushing.len());
//! # Ok::<(), cfb_scrape::ScrapeError>(())
//! ```

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod identity;
pub mod player;
pub mod resolve;
pub mod specs;

pub use crate::config::options::ClientOptions;
pub use crate::core::net::{Fetch, HttpFetcher, Page};
#[doc(hidden)]
pub use crate::core::net::StaticFetcher;
pub use crate::core::table::{Cell, StatTable};
pub use crate::error::{FetchError, ScrapeError};
pub use crate::identity::{Correction, Identity, Query};
pub use crate::player::Player;
pub use crate::specs::sections::Category;
