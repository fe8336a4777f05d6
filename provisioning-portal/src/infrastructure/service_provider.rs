use std::sync::Arc;
use std::time::Duration;

use domain_provisioning::{
    repository::DraftRepo,
    service::{AdminEditService, ListingService, RegistrationService},
};
use getset::Getters;
use service_provisioning::{
    AdminEditServiceImpl, ListingServiceImpl, NameUniquenessServiceImpl, RegistrationServiceImpl,
};

use super::{
    config::{DraftBackend, PortalConfig},
    database::{Database, OrmRepo, RedisClient, StoreTables},
    repository::{MemoryDraftRepo, RedisDraftRepo},
    service::ResourceManagerProjects,
    session::DraftSigner,
    templates::Templates,
};

/// Everything a request handler needs, built once at startup and shared
/// through `web::Data`.
#[derive(Getters)]
#[getset(get = "pub")]
pub struct ServiceProvider {
    config: PortalConfig,
    templates: Templates,
    draft_signer: DraftSigner,
    registration_service: Arc<dyn RegistrationService>,
    admin_edit_service: Arc<dyn AdminEditService>,
    listing_service: Arc<dyn ListingService>,
}

impl ServiceProvider {
    pub async fn build(config: PortalConfig) -> anyhow::Result<Self> {
        let db = Arc::new(Database::connect(config.store().url()).await?);
        let orm_repo = Arc::new(
            OrmRepo::builder()
                .db(db)
                .tables(StoreTables {
                    requests: config.store().request_table(),
                    companies: config.store().qualified_company_table(),
                })
                .build(),
        );

        let draft_repo: Arc<dyn DraftRepo> = match config.draft().backend() {
            DraftBackend::Memory => Arc::new(MemoryDraftRepo::new(Duration::from_secs(
                *config.draft().ttl_secs(),
            ))),
            DraftBackend::Redis => Arc::new(
                RedisDraftRepo::builder()
                    .client(Arc::new(RedisClient::open(config.redis().urls())?))
                    .ttl_secs(*config.draft().ttl_secs())
                    .build(),
            ),
        };

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(*config.project_source().timeout_secs()))
            .build()?;
        let projects = Arc::new(
            ResourceManagerProjects::builder()
                .client(http_client)
                .endpoint(config.project_source().endpoint().clone())
                .query(config.project_source().query().clone())
                .access_token(config.project_source().access_token().clone())
                .quota_project(config.store().project().clone())
                .build(),
        );
        let name_uniqueness_service = Arc::new(
            NameUniquenessServiceImpl::builder()
                .active_project_repo(projects)
                .build(),
        );

        let registration_service = Arc::new(
            RegistrationServiceImpl::builder()
                .request_repo(orm_repo.clone())
                .company_repo(orm_repo.clone())
                .draft_repo(draft_repo.clone())
                .build(),
        );
        let admin_edit_service = Arc::new(
            AdminEditServiceImpl::builder()
                .request_repo(orm_repo.clone())
                .company_repo(orm_repo.clone())
                .draft_repo(draft_repo.clone())
                .name_uniqueness_service(name_uniqueness_service)
                .link_templates(config.links().clone())
                .build(),
        );
        let listing_service = Arc::new(
            ListingServiceImpl::builder()
                .request_repo(orm_repo)
                .draft_repo(draft_repo)
                .build(),
        );

        Ok(Self {
            templates: Templates::new()?,
            draft_signer: DraftSigner::new(config.session().secret_key()),
            registration_service,
            admin_edit_service,
            listing_service,
            config,
        })
    }
}
