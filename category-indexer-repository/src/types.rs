//! Request and response types for search index operations.

use serde::{Deserialize, Serialize};

use category_indexer_shared::CategoryRecord;

/// Acknowledgment returned by the search service for a bulk save.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SaveObjectsResponse {
    /// The asynchronous indexing task created by the write.
    #[serde(rename = "taskID", default)]
    pub task_id: Option<u64>,
    /// The object ids the service accepted.
    #[serde(rename = "objectIDs", default)]
    pub object_ids: Vec<String>,
}

/// A single operation inside a batch request.
#[derive(Debug, Clone, Serialize)]
pub struct BatchOperation<'a> {
    /// Batch action name, `updateObject` replaces the whole record.
    pub action: &'static str,
    /// The record to write.
    pub body: &'a CategoryRecord,
}

/// Body of a bulk write request.
#[derive(Debug, Clone, Serialize)]
pub struct BatchRequest<'a> {
    pub requests: Vec<BatchOperation<'a>>,
}

impl<'a> BatchRequest<'a> {
    /// Build an upsert batch with one `updateObject` operation per record.
    pub fn upsert(records: &'a [CategoryRecord]) -> Self {
        Self {
            requests: records
                .iter()
                .map(|body| BatchOperation {
                    action: "updateObject",
                    body,
                })
                .collect(),
        }
    }
}
