//! Single-consumer merge point for candidate results.

use std::collections::BTreeMap;

use tokio::sync::mpsc;

/// Count reported for a candidate whose fetch or validation failed.
pub const SENTINEL: i64 = -1;

/// Final name → count mapping. Keys serialize in ascending order.
pub type ResultMapping = BTreeMap<String, i64>;

/// One candidate's report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResultEntry {
    pub name: String,
    pub count: i64,
}

/// Drains `rx` until the mapping holds `expected` distinct names.
///
/// Two candidates reporting the same name leave the mapping one key short, so
/// it never completes. If every sender is gone before completion this never
/// resolves; the caller's deadline decides the outcome.
pub(crate) async fn collect(rx: &mut mpsc::Receiver<ResultEntry>, expected: usize) -> ResultMapping {
    let mut mapping = ResultMapping::new();
    while mapping.len() < expected {
        match rx.recv().await {
            Some(entry) => {
                tracing::debug!(name = %entry.name, count = entry.count, "merged result");
                mapping.insert(entry.name, entry.count);
            }
            None => {
                tracing::warn!(
                    merged = mapping.len(),
                    expected,
                    "all result senders dropped before completion"
                );
                std::future::pending::<()>().await;
            }
        }
    }
    mapping
}
