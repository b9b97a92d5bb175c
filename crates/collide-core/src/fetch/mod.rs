//! Fetching word lists.
//!
//! The aggregator only needs "open this locator as a stream of bytes", so the
//! capability is a trait. `CurlFetcher` is the production implementation;
//! tests substitute in-memory fetchers.

mod client;

pub use client::CurlFetcher;

use std::io::BufRead;

use crate::error::Result;

/// Body of a fetched resource, read line by line by the word-list code.
pub type LineReader = Box<dyn BufRead + Send>;

/// Opens a locator for reading.
///
/// Any transport failure or unsuccessful status must be reported as
/// `CollideError::Unreachable` before the first line is read. Implementations
/// block; async callers run them on the blocking pool.
pub trait FetchLines: Send + Sync {
    fn open(&self, locator: &str) -> Result<LineReader>;
}
