use std::sync::Arc;

use async_trait::async_trait;
use domain_provisioning::{
    exception::{ProvisioningException, ProvisioningResult},
    model::{
        entity::{
            AdminEditDraft, Company, Draft, DraftSlot, DraftToken, ProvisioningRequest,
            RequestDetail,
        },
        vo::{AdminEdit, CompositeName, FormFields, LinkTemplates, StepOutcome, UpdateFlag, UsePurpose},
    },
    repository::{CompanyRepo, DraftRepo, ProvisioningRequestRepo},
    rule::validate_admin,
    service::{edit_notice, AdminEditService, EditView, NameUniquenessService},
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct AdminEditServiceImpl {
    request_repo: Arc<dyn ProvisioningRequestRepo>,
    company_repo: Arc<dyn CompanyRepo>,
    draft_repo: Arc<dyn DraftRepo>,
    name_uniqueness_service: Arc<dyn NameUniquenessService>,
    #[builder(default)]
    link_templates: LinkTemplates,
}

impl AdminEditServiceImpl {
    async fn load_request(&self, id: i64) -> ProvisioningResult<ProvisioningRequest> {
        self.request_repo
            .get_by_id(id)
            .await?
            .ok_or(ProvisioningException::RequestNotFound { id })
    }

    async fn load_editable(&self, id: i64) -> ProvisioningResult<ProvisioningRequest> {
        let request = self.load_request(id).await?;
        if request.update_flag == UpdateFlag::Deleted {
            return Err(ProvisioningException::RequestDeleted { id });
        }
        Ok(request)
    }

    async fn decorate(&self, request: ProvisioningRequest) -> ProvisioningResult<RequestDetail> {
        let companies = self.company_repo.get_all().await?;
        let company_name = Company::name_of(&companies, request.company_id);
        Ok(RequestDetail {
            request,
            company_name,
        })
    }

    async fn discard(&self, token: DraftToken) {
        if let Err(e) = self.draft_repo.discard(token, DraftSlot::AdminEdit).await {
            tracing::warn!("Cannot discard admin edit draft {token}: {e:?}");
        }
    }

    async fn check(
        &self,
        token: DraftToken,
        id: i64,
        mut form: FormFields,
    ) -> ProvisioningResult<StepOutcome<AdminEdit>> {
        let request = self.load_editable(id).await?;
        let envs = form.collapse("env");
        let mut errors = validate_admin(&form);

        let first_provisioning = request.update_flag.is_awaiting_provisioning();
        if first_provisioning {
            let name = CompositeName::new(
                form.get("manage_company_name"),
                form.get("organization_name"),
                form.get("project_name_gcp"),
            );
            if let Some(collision) = self.name_uniqueness_service.find_collision(&name, &envs).await? {
                errors.push(collision);
            }
        }

        if !errors.is_empty() {
            form.set("update_flag", request.update_flag.as_str());
            if first_provisioning {
                form.remove("use_purpose");
                form.remove("env");
            }
            return Ok(StepOutcome::Rejected { errors, form });
        }

        let purpose = UsePurpose::parse(form.get("use_purpose")).ok_or_else(|| {
            anyhow::anyhow!("Use purpose {} passed validation unparsed.", form.get("use_purpose"))
        })?;
        let edit = AdminEdit::from_form(purpose, &form, envs);
        let draft = Draft::AdminEdit(AdminEditDraft {
            request_id: id,
            edit: Some(edit.clone()),
        });
        self.draft_repo.save(token, &draft).await?;
        Ok(StepOutcome::Proceed(edit))
    }

    async fn write(&self, token: DraftToken, id: i64) -> ProvisioningResult<String> {
        let expired = || ProvisioningException::DraftExpired {
            slot: DraftSlot::AdminEdit,
        };
        let draft = match self.draft_repo.load(token, DraftSlot::AdminEdit).await? {
            Some(Draft::AdminEdit(draft)) => draft,
            _ => return Err(expired()),
        };
        if draft.request_id != id {
            return Err(ProvisioningException::DraftMismatch {
                id,
                draft_id: draft.request_id,
            });
        }
        let edit = draft.edit.ok_or_else(expired)?;

        let request = self.load_request(id).await?;
        let flag = request
            .update_flag
            .after_admin_edit()
            .ok_or(ProvisioningException::RequestDeleted { id })?;
        self.request_repo.update_columns(id, &edit.assignments(flag)).await?;
        tracing::info!(
            "Request {id} provisioned as {} with flag {flag}.",
            edit.composite_name()
        );
        Ok(self.link_templates.build(Some(edit.purpose()), &edit.composite_name()))
    }
}

#[async_trait]
impl AdminEditService for AdminEditServiceImpl {
    async fn open(&self, token: DraftToken, id: i64) -> ProvisioningResult<EditView> {
        let request = self.load_editable(id).await?;
        let notice = edit_notice(request.update_flag);
        let detail = self.decorate(request).await?;
        let draft = Draft::AdminEdit(AdminEditDraft {
            request_id: id,
            edit: None,
        });
        self.draft_repo.save(token, &draft).await?;
        Ok(EditView { detail, notice })
    }

    async fn confirm(
        &self,
        token: DraftToken,
        id: i64,
        form: FormFields,
    ) -> ProvisioningResult<StepOutcome<AdminEdit>> {
        let outcome = self.check(token, id, form).await;
        if outcome.is_err() {
            self.discard(token).await;
        }
        outcome
    }

    async fn apply(&self, token: DraftToken, id: i64) -> ProvisioningResult<String> {
        let link = self.write(token, id).await;
        self.discard(token).await;
        link
    }

    async fn detail(&self, id: i64) -> ProvisioningResult<RequestDetail> {
        let request = self.load_request(id).await?;
        self.decorate(request).await
    }

    async fn delete(&self, id: i64) -> ProvisioningResult<String> {
        let request = self.load_request(id).await?;
        if request.update_flag != UpdateFlag::Deleted {
            self.request_repo.set_update_flag(id, UpdateFlag::Deleted).await?;
            tracing::info!("Request {id} logically deleted.");
        }
        Ok(self.link_templates.build(request.purpose(), &request.composite_name()))
    }
}
