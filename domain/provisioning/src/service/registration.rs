use async_trait::async_trait;

use crate::exception::ProvisioningResult;
use crate::model::entity::{Company, DraftToken};
use crate::model::vo::{FormFields, StepOutcome};

/// Self-service registration wizard: personal step, project step, submit.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Drops any registration in progress for `token`.
    async fn start(&self, token: DraftToken) -> ProvisioningResult<()>;

    async fn companies(&self) -> ProvisioningResult<Vec<Company>>;

    /// Personal step. Proceeds with the accepted fields.
    async fn submit_personal(
        &self,
        token: DraftToken,
        form: FormFields,
    ) -> ProvisioningResult<StepOutcome<FormFields>>;

    /// Project step. Proceeds with both steps merged, for confirmation.
    async fn submit_project(
        &self,
        token: DraftToken,
        form: FormFields,
    ) -> ProvisioningResult<StepOutcome<FormFields>>;

    /// Stores the confirmed registration and returns its id.
    async fn complete(&self, token: DraftToken) -> ProvisioningResult<i64>;
}
