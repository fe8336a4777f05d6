use async_trait::async_trait;

use crate::model::vo::CompositeName;

#[async_trait]
pub trait NameUniquenessService: Send + Sync {
    /// Message for the first `{name}-{env}` that is already an active project,
    /// checking `envs` in order.
    async fn find_collision(
        &self,
        name: &CompositeName,
        envs: &[String],
    ) -> anyhow::Result<Option<String>>;
}
