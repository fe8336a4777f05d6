use std::sync::Arc;

use async_trait::async_trait;
use domain_provisioning::{
    exception::{ProvisioningException, ProvisioningResult},
    model::{
        entity::{Company, Draft, DraftSlot, DraftToken, NewProvisioningRequest, RegistrationDraft},
        vo::{FormFields, StepOutcome},
    },
    repository::{CompanyRepo, DraftRepo, ProvisioningRequestRepo},
    rule::{validate_project_detail, validate_registration},
    service::RegistrationService,
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct RegistrationServiceImpl {
    request_repo: Arc<dyn ProvisioningRequestRepo>,
    company_repo: Arc<dyn CompanyRepo>,
    draft_repo: Arc<dyn DraftRepo>,
}

impl RegistrationServiceImpl {
    async fn load_draft(&self, token: DraftToken) -> ProvisioningResult<RegistrationDraft> {
        match self.draft_repo.load(token, DraftSlot::Registration).await? {
            Some(Draft::Registration(draft)) => Ok(draft),
            _ => Err(ProvisioningException::DraftExpired {
                slot: DraftSlot::Registration,
            }),
        }
    }

    async fn store(&self, token: DraftToken) -> ProvisioningResult<i64> {
        let draft = self.load_draft(token).await?;
        let project = draft.project.ok_or(ProvisioningException::DraftExpired {
            slot: DraftSlot::Registration,
        })?;
        let request = NewProvisioningRequest::from_forms(
            &draft.personal,
            &project,
            chrono::Local::now().date_naive(),
        )?;
        Ok(self.request_repo.insert(&request).await?)
    }

    async fn discard(&self, token: DraftToken) {
        if let Err(e) = self.draft_repo.discard(token, DraftSlot::Registration).await {
            tracing::warn!("Cannot discard registration draft {token}: {e:?}");
        }
    }
}

#[async_trait]
impl RegistrationService for RegistrationServiceImpl {
    async fn start(&self, token: DraftToken) -> ProvisioningResult<()> {
        self.draft_repo.discard(token, DraftSlot::Registration).await?;
        Ok(())
    }

    async fn companies(&self) -> ProvisioningResult<Vec<Company>> {
        Ok(self.company_repo.get_all().await?)
    }

    async fn submit_personal(
        &self,
        token: DraftToken,
        form: FormFields,
    ) -> ProvisioningResult<StepOutcome<FormFields>> {
        let errors = validate_registration(&form);
        if !errors.is_empty() {
            return Ok(StepOutcome::Rejected { errors, form });
        }
        let draft = Draft::Registration(RegistrationDraft {
            personal: form.clone(),
            project: None,
        });
        self.draft_repo.save(token, &draft).await?;
        Ok(StepOutcome::Proceed(form))
    }

    async fn submit_project(
        &self,
        token: DraftToken,
        mut form: FormFields,
    ) -> ProvisioningResult<StepOutcome<FormFields>> {
        form.collapse("type");
        let errors = validate_project_detail(&form);
        if !errors.is_empty() {
            return Ok(StepOutcome::Rejected { errors, form });
        }
        let mut draft = self.load_draft(token).await?;
        let mut merged = draft.personal.clone();
        merged.merge(&form);
        draft.project = Some(form);
        self.draft_repo.save(token, &Draft::Registration(draft)).await?;
        Ok(StepOutcome::Proceed(merged))
    }

    async fn complete(&self, token: DraftToken) -> ProvisioningResult<i64> {
        let stored = self.store(token).await;
        self.discard(token).await;
        let id = stored?;
        tracing::info!("Stored provisioning request {id}.");
        Ok(id)
    }
}
