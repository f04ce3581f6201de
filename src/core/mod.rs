// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;
pub mod table;
pub mod urls;

pub use net::{Fetch, HttpFetcher, Page, StaticFetcher};
pub use table::{Cell, StatTable};
