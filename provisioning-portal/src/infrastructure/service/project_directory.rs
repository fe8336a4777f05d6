use std::collections::HashSet;

use async_trait::async_trait;
use domain_provisioning::repository::ActiveProjectRepo;
use serde::Deserialize;
use typed_builder::TypedBuilder;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SearchProjectsResponse {
    #[serde(default)]
    projects: Vec<ProjectEntry>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ProjectEntry {
    project_id: String,
}

/// Active project ids from the Cloud Resource Manager `projects:search` API.
#[derive(TypedBuilder)]
pub struct ResourceManagerProjects {
    client: reqwest::Client,
    endpoint: String,
    query: String,
    #[builder(default)]
    access_token: String,
    /// Sent as `x-goog-user-project` when non-empty.
    #[builder(default)]
    quota_project: String,
}

impl ResourceManagerProjects {
    async fn fetch_page(&self, page_token: Option<&str>) -> anyhow::Result<SearchProjectsResponse> {
        let mut request = self.client.get(&self.endpoint).query(&[("query", self.query.as_str())]);
        if let Some(page_token) = page_token {
            request = request.query(&[("pageToken", page_token)]);
        }
        if !self.access_token.is_empty() {
            request = request.bearer_auth(&self.access_token);
        }
        if !self.quota_project.is_empty() {
            request = request.header("x-goog-user-project", &self.quota_project);
        }
        Ok(request.send().await?.error_for_status()?.json().await?)
    }
}

#[async_trait]
impl ActiveProjectRepo for ResourceManagerProjects {
    async fn get_active_ids(&self) -> anyhow::Result<HashSet<String>> {
        let mut ids = HashSet::new();
        let mut page_token: Option<String> = None;
        loop {
            let page = self.fetch_page(page_token.as_deref()).await?;
            ids.extend(page.projects.into_iter().map(|p| p.project_id));
            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }
        tracing::debug!("Fetched {} active project ids.", ids.len());
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_project_ids_and_page_token() {
        let page: SearchProjectsResponse = serde_json::from_str(
            r#"{
                "projects": [
                    {"name": "projects/1", "projectId": "acme-corp-proj1-dev", "state": "ACTIVE"},
                    {"name": "projects/2", "projectId": "acme-corp-proj1-prd", "state": "ACTIVE"}
                ],
                "nextPageToken": "abc"
            }"#,
        )
        .unwrap();
        assert_eq!(page.projects.len(), 2);
        assert_eq!(page.projects[1].project_id, "acme-corp-proj1-prd");
        assert_eq!(page.next_page_token.as_deref(), Some("abc"));
    }

    #[test]
    fn empty_result_has_no_projects() {
        let page: SearchProjectsResponse = serde_json::from_str("{}").unwrap();
        assert!(page.projects.is_empty());
        assert!(page.next_page_token.is_none());
    }
}
