//! Fan-out/fan-in aggregation of candidate word lists.
//!
//! The reference list is loaded first and is fatal on failure. Every candidate
//! with a resolvable name then gets its own task; tasks report through one
//! channel to a single merging loop, bounded by a global deadline measured from
//! the moment the first task is spawned.

mod merge;
mod task;

pub use merge::{ResultMapping, SENTINEL};

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::config::CollideConfig;
use crate::error::{CollideError, Result};
use crate::fetch::FetchLines;
use crate::locator::ResourceDescriptor;
use crate::words::{load_word_set, WordSet};

use merge::collect;
use task::spawn_candidate;

/// Loads the reference set on the blocking pool and waits for it.
async fn load_reference(fetcher: Arc<dyn FetchLines>, locator: &str) -> Result<WordSet> {
    let owned = locator.to_string();
    let joined = tokio::task::spawn_blocking(move || {
        let reader = fetcher.open(&owned)?;
        load_word_set(&owned, reader)
    })
    .await;

    match joined {
        Ok(res) => res,
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(e) => Err(CollideError::unreachable(locator, format!("load task: {}", e))),
    }
}

/// Resolves candidate names; unresolvable locators are logged and skipped.
fn resolve_candidates(candidates: &[String]) -> Vec<ResourceDescriptor> {
    candidates
        .iter()
        .filter_map(|locator| match ResourceDescriptor::parse(locator) {
            Ok(desc) => Some(desc),
            Err(e) => {
                tracing::warn!("dropping candidate: {}", e);
                None
            }
        })
        .collect()
}

/// Compares every candidate against the reference list and returns the mapping.
///
/// Fails if the reference list cannot be loaded (no candidate is fetched in
/// that case) or if the deadline passes before every resolvable candidate has
/// reported. Per-candidate failures appear as [`SENTINEL`].
pub async fn aggregate_mapping(
    fetcher: Arc<dyn FetchLines>,
    reference: &str,
    candidates: &[String],
    deadline: Duration,
) -> Result<ResultMapping> {
    let words = load_reference(Arc::clone(&fetcher), reference).await?;
    tracing::info!(reference, words = words.len(), "reference list loaded");
    let words = Arc::new(words);

    let descriptors = resolve_candidates(candidates);
    let expected = descriptors.len();
    if expected == 0 {
        return Ok(ResultMapping::new());
    }

    let started = Instant::now();
    let (tx, mut rx) = mpsc::channel(expected);
    for desc in descriptors {
        spawn_candidate(Arc::clone(&fetcher), Arc::clone(&words), desc, tx.clone());
    }
    drop(tx);

    match tokio::time::timeout_at(started + deadline, collect(&mut rx, expected)).await {
        Ok(mapping) => Ok(mapping),
        Err(_) => {
            tracing::error!(
                expected,
                "aggregation timed out after {:.1}s",
                deadline.as_secs_f64()
            );
            Err(CollideError::Timeout {
                secs: deadline.as_secs_f64(),
            })
        }
    }
}

/// Like [`aggregate_mapping`] but returns the mapping encoded as a JSON object.
pub async fn aggregate(
    fetcher: Arc<dyn FetchLines>,
    reference: &str,
    candidates: &[String],
    deadline: Duration,
) -> Result<String> {
    let mapping = aggregate_mapping(fetcher, reference, candidates, deadline).await?;
    Ok(serde_json::to_string(&mapping)?)
}

/// Runs one aggregation with the locators and deadline from `cfg`.
pub async fn run_configured(fetcher: Arc<dyn FetchLines>, cfg: &CollideConfig) -> Result<String> {
    aggregate(fetcher, &cfg.reference, &cfg.candidates, cfg.deadline()).await
}
