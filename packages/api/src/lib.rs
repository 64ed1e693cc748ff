//! This crate contains the fullstack server functions for the site.

pub mod config;
mod events;

pub use events::{bundled_feed, load_events, parse_feed};
