use async_trait::async_trait;
use chrono::NaiveDate;

use crate::model::entity::{NewProvisioningRequest, ProvisioningRequest, RequestSummary};
use crate::model::vo::{ColumnAssignment, SearchFilter, UpdateFlag};

#[async_trait]
pub trait ProvisioningRequestRepo: Send + Sync {
    async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<ProvisioningRequest>>;

    /// Matching requests, newest id first.
    async fn search(&self, filter: &SearchFilter) -> anyhow::Result<Vec<RequestSummary>>;

    /// Stores a new request with the next free id and `update` flag.
    ///
    /// The id is `max(id) + 1`, read and written under one lock so concurrent
    /// inserts never share an id.
    /// Distinct delivery dates over all requests, ascending.
    async fn delivery_dates(&self) -> anyhow::Result<Vec<NaiveDate>>;

    async fn insert(&self, request: &NewProvisioningRequest) -> anyhow::Result<i64>;

    /// Writes only the given whitelisted columns of row `id`.
    async fn update_columns(&self, id: i64, assignments: &[ColumnAssignment])
        -> anyhow::Result<()>;

    async fn set_update_flag(&self, id: i64, flag: UpdateFlag) -> anyhow::Result<()>;
}
