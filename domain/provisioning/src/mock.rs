use std::collections::HashSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;

use crate::{
    model::{
        entity::{
            Company, Draft, DraftSlot, DraftToken, NewProvisioningRequest, ProvisioningRequest,
            RequestSummary,
        },
        vo::{ColumnAssignment, SearchFilter, UpdateFlag},
    },
    repository::{ActiveProjectRepo, CompanyRepo, DraftRepo, ProvisioningRequestRepo},
};

mock! {
    pub ProvisioningRequestRepo {}
    #[async_trait]
    impl ProvisioningRequestRepo for ProvisioningRequestRepo {
        async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<ProvisioningRequest>>;
        async fn search(&self, filter: &SearchFilter) -> anyhow::Result<Vec<RequestSummary>>;
        async fn delivery_dates(&self) -> anyhow::Result<Vec<NaiveDate>>;
        async fn insert(&self, request: &NewProvisioningRequest) -> anyhow::Result<i64>;
        async fn update_columns(
            &self,
            id: i64,
            assignments: &[ColumnAssignment],
        ) -> anyhow::Result<()>;
        async fn set_update_flag(&self, id: i64, flag: UpdateFlag) -> anyhow::Result<()>;
    }
}

mock! {
    pub CompanyRepo {}
    #[async_trait]
    impl CompanyRepo for CompanyRepo {
        async fn get_all(&self) -> anyhow::Result<Vec<Company>>;
    }
}

mock! {
    pub DraftRepo {}
    #[async_trait]
    impl DraftRepo for DraftRepo {
        async fn save(&self, token: DraftToken, draft: &Draft) -> anyhow::Result<()>;
        async fn load(&self, token: DraftToken, slot: DraftSlot) -> anyhow::Result<Option<Draft>>;
        async fn discard(&self, token: DraftToken, slot: DraftSlot) -> anyhow::Result<()>;
    }
}

mock! {
    pub ActiveProjectRepo {}
    #[async_trait]
    impl ActiveProjectRepo for ActiveProjectRepo {
        async fn get_active_ids(&self) -> anyhow::Result<HashSet<String>>;
    }
}
