//! Race content: configuration files and event logs.
//!
//! - Race configuration (data-driven via JSON or TOML)
//! - Event logs (line-oriented text, see [`events`])
//!
//! The text parser in [`events`] is always available; file loaders live
//! behind the default `loaders` feature.

pub mod events;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use events::{EventParseError, parse_events, parse_line};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, EventLoader, LoadResult, RaceContent};
