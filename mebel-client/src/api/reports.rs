//! Sales report service

use std::sync::Arc;

use shared::models::{ReportQuery, ReportRow};

use super::Collection;
use crate::client::HttpClient;
use crate::resource::{ReadResult, ResourceReader};
use crate::{ClientError, ClientResult};

pub const SALES_REPORT: &str = "admin/reports/sales";

/// `admin/reports`
pub struct ReportApi<C> {
    collection: Collection<C>,
}

impl<C: HttpClient> ReportApi<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            collection: Collection::new(client, SALES_REPORT),
        }
    }

    /// Report reader filtered by `query`; refetch with
    /// [`ReportQuery::to_params`] to change the filter
    pub fn sales(&self, query: &ReportQuery) -> ClientResult<ResourceReader<C, Vec<ReportRow>>> {
        query.validate()?;
        Ok(self.collection.reader().with_params(query.to_params()))
    }

    /// Apply a new filter to an existing report reader
    pub async fn refilter(
        &self,
        reader: &ResourceReader<C, Vec<ReportRow>>,
        query: &ReportQuery,
    ) -> ReadResult {
        query
            .validate()
            .map_err(|e| Arc::new(ClientError::from(e)))?;
        reader.refetch(query.to_params()).await
    }
}
