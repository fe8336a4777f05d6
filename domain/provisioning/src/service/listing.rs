use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

use crate::exception::ProvisioningResult;
use crate::model::entity::{DraftToken, RequestSummary};
use crate::model::vo::{Page, SearchFilter};

#[derive(Debug, Clone, Serialize)]
pub struct RequestListing {
    pub page: Page<RequestSummary>,
    /// Distinct delivery dates of all requests, ascending, filter or not.
    pub date_options: Vec<NaiveDate>,
    pub filter: SearchFilter,
}

#[async_trait]
pub trait ListingService: Send + Sync {
    async fn list(&self, page: usize) -> ProvisioningResult<RequestListing>;

    /// Searches with `filter`, or with the filter remembered for `token`
    /// when `None`. A given filter replaces the remembered one.
    async fn search(
        &self,
        token: DraftToken,
        filter: Option<SearchFilter>,
        page: usize,
    ) -> ProvisioningResult<RequestListing>;
}
