use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use domain_provisioning::{
    model::entity::{Draft, DraftSlot, DraftToken},
    repository::DraftRepo,
};
use redis::Cmd;
use typed_builder::TypedBuilder;

use crate::infrastructure::database::{RedisClient, RedisConnection};

const DRAFT_KEY_PREFIX: &str = "portal_draft_";

fn draft_key(token: DraftToken, slot: DraftSlot) -> String {
    format!("{DRAFT_KEY_PREFIX}{token}_{slot}")
}

/// Drafts shared by every instance behind the same redis, expiring through
/// `SET .. EX`.
#[derive(TypedBuilder)]
pub struct RedisDraftRepo {
    client: Arc<RedisClient>,
    ttl_secs: u64,
}

impl RedisDraftRepo {
    async fn run<T, F>(&self, f: F) -> anyhow::Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut RedisConnection) -> anyhow::Result<T>
            + Send
            + 'static,
    {
        let client = self.client.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = client.get_connection()?;
            connection.check_open()?;
            f(&mut connection)
        })
        .await
        .context("Redis task panicked")?
    }
}

#[async_trait]
impl DraftRepo for RedisDraftRepo {
    async fn save(&self, token: DraftToken, draft: &Draft) -> anyhow::Result<()> {
        let key = draft_key(token, draft.slot());
        let value = serde_json::to_string(draft)?;
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value).arg("EX").arg(self.ttl_secs.max(1));
        self.run(move |connection| Ok(connection.query::<()>(&cmd)?)).await
    }

    async fn load(&self, token: DraftToken, slot: DraftSlot) -> anyhow::Result<Option<Draft>> {
        let cmd = Cmd::get(draft_key(token, slot));
        let value = self.run(move |connection| Ok(connection.query::<Option<String>>(&cmd)?)).await?;
        match value {
            Some(value) => {
                let draft = serde_json::from_str::<Draft>(&value)
                    .with_context(|| format!("Corrupt {slot} draft of {token}"))?;
                Ok((draft.slot() == slot).then_some(draft))
            }
            None => Ok(None),
        }
    }

    async fn discard(&self, token: DraftToken, slot: DraftSlot) -> anyhow::Result<()> {
        let cmd = Cmd::del(draft_key(token, slot));
        self.run(move |connection| Ok(connection.query::<()>(&cmd)?)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_separate_tokens_and_slots() {
        let token = DraftToken::generate();
        let search = draft_key(token, DraftSlot::Search);
        assert_eq!(search, format!("portal_draft_{token}_search"));
        assert_ne!(search, draft_key(token, DraftSlot::AdminEdit));
        assert_ne!(search, draft_key(DraftToken::generate(), DraftSlot::Search));
    }
}
