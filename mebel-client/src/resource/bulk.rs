//! Bulk delete
//!
//! One delete per selected row, all in flight together. The caller gets a
//! per-row report once every delete has settled, and the list is refreshed
//! exactly once after that.

use futures::future::join_all;
use serde::de::DeserializeOwned;

use super::reader::{ReadResult, ResourceReader};
use super::writer::ResourceWriter;
use crate::ClientError;
use crate::client::HttpClient;

/// Outcome of a bulk delete
#[derive(Debug, Default)]
pub struct BulkReport {
    /// Ids deleted, in input order
    pub succeeded: Vec<String>,
    /// Ids that failed with their errors, in input order
    pub failed: Vec<(String, ClientError)>,
}

impl BulkReport {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }

    /// Ids that still exist on the server
    pub fn failed_ids(&self) -> Vec<&str> {
        self.failed.iter().map(|(id, _)| id.as_str()).collect()
    }
}

impl<C, R> ResourceWriter<C, R>
where
    C: HttpClient,
    R: DeserializeOwned,
{
    /// Delete every id concurrently and wait for all of them
    pub async fn delete_many<I, S>(&self, ids: I) -> BulkReport
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        let results = join_all(ids.iter().map(|id| self.delete(id))).await;

        let mut report = BulkReport::default();
        for (id, result) in ids.into_iter().zip(results) {
            match result {
                Ok(_) => report.succeeded.push(id),
                Err(e) => {
                    tracing::warn!(endpoint = %self.endpoint(), id = %id, error = %e, "Bulk delete item failed");
                    report.failed.push((id, e));
                }
            }
        }
        tracing::info!(
            endpoint = %self.endpoint(),
            succeeded = report.succeeded.len(),
            failed = report.failed.len(),
            "Bulk delete settled"
        );
        report
    }
}

/// Delete `ids`, then reload `reader` once, whatever the individual outcomes
pub async fn delete_many_then_refresh<C, R, T, I, S>(
    writer: &ResourceWriter<C, R>,
    reader: &ResourceReader<C, T>,
    ids: I,
) -> (BulkReport, ReadResult)
where
    C: HttpClient,
    R: DeserializeOwned,
    T: DeserializeOwned,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let report = writer.delete_many(ids).await;
    let refreshed = reader.reload().await;
    (report, refreshed)
}
