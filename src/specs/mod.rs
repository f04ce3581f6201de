// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific reading rules for sports-reference.com. Each spec covers one kind
//! of page and encodes *where the ground truth lives in the HTML* and *how to pull
//! it out*, nothing more.
//!
//! ## What lives here
//! - **Pure HTML reading** of already-fetched documents (`search`, `profile`) or of a
//!   single fetched page (`sections::fetch_section`).
//! - **Selector choice & precedence**, e.g. live DOM before comment-hidden markup.
//!
//! ## What does **not** live here
//! - **Matching and correction logic**: `resolve` decides which candidate is the
//!   player and what to change about the query.
//! - **Caching**: `Player` owns the memo slots.
//!
//! ## Typical call chain
//! ```text
//! Player::search → resolve → specs::search::read / specs::profile::read
//! Player::summary → specs::sections::fetch_section → core::table::StatTable
//! ```
//!
//! ## Testing notes
//! Every spec is tested offline against small inline fixtures.
pub mod profile;
pub mod search;
pub mod sections;
