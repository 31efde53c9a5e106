//! # DateRange Core Library
//!
//! Computes the free time left in a window once a set of busy periods is
//! subtracted from it.
//!
//! ## Architecture
//!
//! - **Interval**: an immutable `[start, end]` pair over any [`Instant`]
//!   (chrono timestamps step by one second, integers by one)
//! - **Gap extraction**: a single sort-and-scan pass that returns the
//!   uncovered spans of a scope in ascending order
//! - **Configuration**: optional TOML settings for minimum gap length and
//!   input validation
//!
//! ## Key Components
//!
//! - [`gaps`]: Pure, infallible gap extraction
//! - [`GapExtractor`]: Configurable extractor with validation
//! - [`GapConfig`]: Extractor configuration

pub mod config;
pub mod error;
pub mod timeline;

pub use config::GapConfig;
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use timeline::{checked_gaps, gaps, GapExtractor, Instant, Interval};
