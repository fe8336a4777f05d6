use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use domain_provisioning::{
    model::entity::{Draft, DraftSlot, DraftToken},
    repository::DraftRepo,
};

/// Process-local drafts, for single instance deployments.
pub struct MemoryDraftRepo {
    drafts: DashMap<(DraftToken, DraftSlot), (Instant, Draft)>,
    ttl: Duration,
}

impl MemoryDraftRepo {
    pub fn new(ttl: Duration) -> Self {
        Self {
            drafts: DashMap::new(),
            ttl,
        }
    }

    fn purge_expired(&self) {
        let now = Instant::now();
        self.drafts.retain(|_, (expires_at, _)| *expires_at > now);
    }
}

#[async_trait]
impl DraftRepo for MemoryDraftRepo {
    async fn save(&self, token: DraftToken, draft: &Draft) -> anyhow::Result<()> {
        self.purge_expired();
        self.drafts.insert(
            (token, draft.slot()),
            (Instant::now() + self.ttl, draft.clone()),
        );
        Ok(())
    }

    async fn load(&self, token: DraftToken, slot: DraftSlot) -> anyhow::Result<Option<Draft>> {
        let key = (token, slot);
        match self.drafts.get(&key) {
            None => return Ok(None),
            Some(entry) => {
                let (expires_at, draft) = entry.value();
                if *expires_at > Instant::now() {
                    return Ok(Some(draft.clone()));
                }
            }
        }
        self.drafts.remove(&key);
        Ok(None)
    }

    async fn discard(&self, token: DraftToken, slot: DraftSlot) -> anyhow::Result<()> {
        self.drafts.remove(&(token, slot));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use domain_provisioning::model::vo::SearchFilter;

    use super::*;

    fn search(name: &str) -> Draft {
        Draft::Search(SearchFilter {
            name: name.into(),
            desired_delivery_date: None,
        })
    }

    #[tokio::test]
    async fn slots_are_independent() {
        let repo = MemoryDraftRepo::new(Duration::from_secs(60));
        let token = DraftToken::generate();
        repo.save(token, &search("taro")).await.unwrap();
        assert_eq!(repo.load(token, DraftSlot::Search).await.unwrap(), Some(search("taro")));
        assert_eq!(repo.load(token, DraftSlot::Registration).await.unwrap(), None);
        assert_eq!(
            repo.load(DraftToken::generate(), DraftSlot::Search).await.unwrap(),
            None
        );

        repo.save(token, &search("hanako")).await.unwrap();
        assert_eq!(
            repo.load(token, DraftSlot::Search).await.unwrap(),
            Some(search("hanako"))
        );
        repo.discard(token, DraftSlot::Search).await.unwrap();
        assert_eq!(repo.load(token, DraftSlot::Search).await.unwrap(), None);
    }

    #[tokio::test]
    async fn expired_drafts_are_gone() {
        let repo = MemoryDraftRepo::new(Duration::ZERO);
        let token = DraftToken::generate();
        repo.save(token, &search("taro")).await.unwrap();
        assert_eq!(repo.load(token, DraftSlot::Search).await.unwrap(), None);
        assert!(repo.drafts.is_empty());
    }
}
