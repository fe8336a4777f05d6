use std::sync::Arc;

use async_trait::async_trait;
use domain_provisioning::{
    exception::ProvisioningResult,
    model::{
        entity::{Draft, DraftSlot, DraftToken},
        vo::{Page, SearchFilter, PER_PAGE},
    },
    repository::{DraftRepo, ProvisioningRequestRepo},
    service::{ListingService, RequestListing},
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct ListingServiceImpl {
    request_repo: Arc<dyn ProvisioningRequestRepo>,
    draft_repo: Arc<dyn DraftRepo>,
    #[builder(default = PER_PAGE)]
    per_page: usize,
}

impl ListingServiceImpl {
    /// Date options always span every request, whatever the filter.
    async fn listing(&self, filter: SearchFilter, page: usize) -> ProvisioningResult<RequestListing> {
        let rows = self.request_repo.search(&filter).await?;
        let date_options = self.request_repo.delivery_dates().await?;
        Ok(RequestListing {
            page: Page::slice(&rows, page, self.per_page),
            date_options,
            filter,
        })
    }
}

#[async_trait]
impl ListingService for ListingServiceImpl {
    async fn list(&self, page: usize) -> ProvisioningResult<RequestListing> {
        self.listing(SearchFilter::default(), page).await
    }

    async fn search(
        &self,
        token: DraftToken,
        filter: Option<SearchFilter>,
        page: usize,
    ) -> ProvisioningResult<RequestListing> {
        let filter = match filter {
            Some(filter) => {
                self.draft_repo.save(token, &Draft::Search(filter.clone())).await?;
                filter
            }
            None => match self.draft_repo.load(token, DraftSlot::Search).await? {
                Some(Draft::Search(filter)) => filter,
                _ => SearchFilter::default(),
            },
        };
        tracing::debug!("Searching requests with {filter:?}.");
        self.listing(filter, page).await
    }
}
