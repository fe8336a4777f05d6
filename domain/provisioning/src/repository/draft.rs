use async_trait::async_trait;

use crate::model::entity::{Draft, DraftSlot, DraftToken};

/// Server side form state between the steps of a flow.
///
/// Implementations expire drafts on their own; a draft older than the
/// configured lifetime reads as absent.
#[async_trait]
pub trait DraftRepo: Send + Sync {
    async fn save(&self, token: DraftToken, draft: &Draft) -> anyhow::Result<()>;
    async fn load(&self, token: DraftToken, slot: DraftSlot) -> anyhow::Result<Option<Draft>>;
    async fn discard(&self, token: DraftToken, slot: DraftSlot) -> anyhow::Result<()>;
}
