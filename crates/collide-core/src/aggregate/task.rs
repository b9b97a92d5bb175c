//! Per-candidate counting task.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::fetch::FetchLines;
use crate::locator::ResourceDescriptor;
use crate::words::{count_shared, WordSet};

use super::merge::{ResultEntry, SENTINEL};

/// Spawns the fetch + count for one candidate and reports to `tx`.
///
/// Fetch and validation failures become `SENTINEL`. If the receiver is gone
/// (deadline already passed) the report is dropped.
pub(crate) fn spawn_candidate(
    fetcher: Arc<dyn FetchLines>,
    reference: Arc<WordSet>,
    desc: ResourceDescriptor,
    tx: mpsc::Sender<ResultEntry>,
) {
    tokio::spawn(async move {
        let locator = desc.locator.clone();
        let outcome = tokio::task::spawn_blocking(move || {
            let reader = fetcher.open(&locator)?;
            count_shared(&reference, &locator, reader)
        })
        .await;

        let count = match outcome {
            Ok(Ok(n)) => {
                tracing::info!(name = %desc.name, count = n, "candidate counted");
                i64::try_from(n).unwrap_or(i64::MAX)
            }
            Ok(Err(e)) => {
                tracing::warn!(name = %desc.name, "candidate failed: {}", e);
                SENTINEL
            }
            Err(e) => {
                tracing::warn!(name = %desc.name, "candidate task join: {}", e);
                SENTINEL
            }
        };

        let entry = ResultEntry {
            name: desc.name,
            count,
        };
        if tx.send(entry).await.is_err() {
            tracing::debug!(locator = %desc.locator, "result arrived after aggregation ended");
        }
    });
}
