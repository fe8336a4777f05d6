use domain_provisioning::model::vo::LinkTemplates;
use getset::Getters;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use super::telemetry::TelemetryConfig;

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("identifier pattern"));

#[derive(Clone, Deserialize, Debug, Getters)]
#[getset(get = "pub")]
pub struct PortalConfig {
    #[serde(default)]
    telemetry: TelemetryConfig,
    #[serde(default)]
    host: HostConfig,
    store: StoreConfig,
    session: SessionConfig,
    #[serde(default)]
    draft: DraftConfig,
    #[serde(default)]
    redis: RedisConfig,
    #[serde(default)]
    project_source: ProjectSourceConfig,
    #[serde(default)]
    links: LinkTemplates,
}

impl PortalConfig {
    pub fn from_config(config: config::Config) -> anyhow::Result<Self> {
        let config = config.try_deserialize::<PortalConfig>()?;
        config.store.validate()?;
        if config.session.secret_key.is_empty() {
            anyhow::bail!("session.secret_key must not be empty.");
        }
        Ok(config)
    }
}

#[derive(Deserialize, Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct HostConfig {
    #[serde(default = "HostConfig::default_address")]
    bind_address: String,
    #[serde(default = "HostConfig::default_port")]
    bind_port: u16,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            bind_address: Self::default_address(),
            bind_port: Self::default_port(),
        }
    }
}

impl HostConfig {
    fn default_address() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        8080
    }
}

/// Location of the request table and the company lookup table.
///
/// Table names are spliced into SQL, so they are restricted to
/// `[A-Za-z0-9_]`.
#[derive(Deserialize, Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct StoreConfig {
    url: String,
    /// Billing project of the deployment, also sent as quota project to the
    /// project source.
    project: String,
    /// Schema holding both tables.
    dataset: String,
    table: String,
    #[serde(default = "StoreConfig::default_company_table")]
    company_table: String,
}

impl StoreConfig {
    fn default_company_table() -> String {
        "company_list".to_string()
    }

    fn validate(&self) -> anyhow::Result<()> {
        for (key, value) in [
            ("store.dataset", &self.dataset),
            ("store.table", &self.table),
            ("store.company_table", &self.company_table),
        ] {
            if !IDENTIFIER.is_match(value) {
                anyhow::bail!("{key} must match [A-Za-z0-9_]+, got {value:?}.");
            }
        }
        Ok(())
    }

    pub fn request_table(&self) -> String {
        format!("{}.{}", self.dataset, self.table)
    }

    pub fn qualified_company_table(&self) -> String {
        format!("{}.{}", self.dataset, self.company_table)
    }
}

#[derive(Deserialize, Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct SessionConfig {
    secret_key: String,
}

#[derive(Default, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DraftBackend {
    #[default]
    Memory,
    Redis,
}

#[derive(Deserialize, Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct DraftConfig {
    #[serde(default)]
    backend: DraftBackend,
    #[serde(default = "DraftConfig::default_ttl_secs")]
    ttl_secs: u64,
}

impl DraftConfig {
    fn default_ttl_secs() -> u64 {
        30 * 60
    }
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            backend: Default::default(),
            ttl_secs: Self::default_ttl_secs(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct RedisConfig {
    #[serde(default = "RedisConfig::default_urls")]
    urls: Vec<String>,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            urls: Self::default_urls(),
        }
    }
}

impl RedisConfig {
    fn default_urls() -> Vec<String> {
        vec!["redis://localhost:6379".to_string()]
    }
}

/// Where active project ids are read from.
#[derive(Deserialize, Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct ProjectSourceConfig {
    #[serde(default = "ProjectSourceConfig::default_endpoint")]
    endpoint: String,
    #[serde(default = "ProjectSourceConfig::default_query")]
    query: String,
    /// Bearer token; sent only when non-empty.
    #[serde(default)]
    access_token: String,
    #[serde(default = "ProjectSourceConfig::default_timeout_secs")]
    timeout_secs: u64,
}

impl ProjectSourceConfig {
    fn default_endpoint() -> String {
        "https://cloudresourcemanager.googleapis.com/v3/projects:search".to_string()
    }

    fn default_query() -> String {
        "state:ACTIVE".to_string()
    }

    fn default_timeout_secs() -> u64 {
        30
    }
}

impl Default for ProjectSourceConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::default_endpoint(),
            query: Self::default_query(),
            access_token: Default::default(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

pub fn build_config() -> anyhow::Result<config::Config> {
    let args: Vec<String> = std::env::args().collect();
    let mut config = config::Config::builder().add_source(
        config::File::with_name("config")
            .required(false)
            .format(config::FileFormat::Yaml),
    );
    for arg in args {
        if arg.ends_with("yaml") || arg.ends_with("yml") {
            config = config.add_source(
                config::File::from(std::path::Path::new(arg.as_str()))
                    .format(config::FileFormat::Yaml)
                    .required(false),
            );
        }
    }
    config = config.add_source(
        config::Environment::with_prefix("PORTAL")
            .separator("__")
            .try_parsing(true)
            .list_separator(";")
            .with_list_parse_key("redis.urls"),
    );
    Ok(config.build()?)
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    fn parse(yaml: &str) -> anyhow::Result<PortalConfig> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
            .build()?;
        PortalConfig::from_config(config)
    }

    #[test]
    fn minimal_config_takes_defaults() {
        let config = parse(indoc! {"
            store:
              url: postgres://localhost/portal
              project: billing-proj
              dataset: portal
              table: requests
            session:
              secret_key: s3cret
        "})
        .unwrap();
        assert_eq!(config.store().request_table(), "portal.requests");
        assert_eq!(config.store().qualified_company_table(), "portal.company_list");
        assert_eq!(*config.host().bind_port(), 8080);
        assert_eq!(*config.draft().backend(), DraftBackend::Memory);
        assert_eq!(*config.draft().ttl_secs(), 1800);
        assert_eq!(config.project_source().query(), "state:ACTIVE");
        assert_eq!(config.links(), &LinkTemplates::default());
    }

    #[test]
    fn missing_store_fails() {
        assert!(parse("session:\n  secret_key: s3cret\n").is_err());
    }

    #[test]
    fn table_names_are_identifiers() {
        let err = parse(indoc! {"
            store:
              url: postgres://localhost/portal
              project: billing-proj
              dataset: portal
              table: requests; DROP TABLE x
            session:
              secret_key: s3cret
        "})
        .unwrap_err();
        assert!(err.to_string().contains("store.table"));
    }

    #[test]
    fn links_and_redis_are_overridable() {
        let config = parse(indoc! {"
            store:
              url: postgres://localhost/portal
              project: billing-proj
              dataset: portal
              table: requests
            session:
              secret_key: s3cret
            draft:
              backend: redis
            redis:
              urls: [redis://a:6379, redis://b:6379]
            links:
              api: https://example.com/api/
        "})
        .unwrap();
        assert_eq!(*config.draft().backend(), DraftBackend::Redis);
        assert_eq!(config.redis().urls().len(), 2);
        assert_eq!(config.links().api, "https://example.com/api/");
        assert_eq!(config.links().standard, LinkTemplates::default().standard);
    }
}
