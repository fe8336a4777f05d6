use async_trait::async_trait;

use crate::model::entity::Company;

#[async_trait]
pub trait CompanyRepo: Send + Sync {
    async fn get_all(&self) -> anyhow::Result<Vec<Company>>;
}
