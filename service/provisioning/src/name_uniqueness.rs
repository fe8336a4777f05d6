use std::sync::Arc;

use async_trait::async_trait;
use domain_provisioning::{
    model::vo::CompositeName, repository::ActiveProjectRepo, service::NameUniquenessService,
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct NameUniquenessServiceImpl {
    active_project_repo: Arc<dyn ActiveProjectRepo>,
}

#[async_trait]
impl NameUniquenessService for NameUniquenessServiceImpl {
    async fn find_collision(
        &self,
        name: &CompositeName,
        envs: &[String],
    ) -> anyhow::Result<Option<String>> {
        if envs.is_empty() {
            return Ok(None);
        }
        let active = self.active_project_repo.get_active_ids().await?;
        let collision = envs.iter().map(|env| name.with_env(env)).find(|id| active.contains(id));
        if let Some(id) = &collision {
            tracing::info!("Project id {id} is already taken.");
        }
        Ok(collision.map(|id| format!("{id}: project name is already in use.")))
    }
}
