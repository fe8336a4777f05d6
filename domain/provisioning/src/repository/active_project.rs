use std::collections::HashSet;

use async_trait::async_trait;

/// External registry of cloud projects that currently exist.
#[async_trait]
pub trait ActiveProjectRepo: Send + Sync {
    /// De-duplicated ids of all active projects.
    async fn get_active_ids(&self) -> anyhow::Result<HashSet<String>>;
}
