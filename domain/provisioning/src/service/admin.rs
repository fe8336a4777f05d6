use async_trait::async_trait;

use crate::exception::ProvisioningResult;
use crate::model::entity::{DraftToken, RequestDetail};
use crate::model::vo::{AdminEdit, FormFields, StepOutcome, UpdateFlag};

/// Shown while a request still waits for its first provisioning.
pub const EDIT_LOCK_NOTICE: &str = "* Cannot be changed after registration";

pub fn edit_notice(flag: UpdateFlag) -> Option<&'static str> {
    flag.is_awaiting_provisioning().then_some(EDIT_LOCK_NOTICE)
}

/// The admin edit page of one request.
#[derive(Debug, Clone)]
pub struct EditView {
    pub detail: RequestDetail,
    pub notice: Option<&'static str>,
}

/// Administrator edit and logical delete of stored requests.
#[async_trait]
pub trait AdminEditService: Send + Sync {
    /// Loads request `id` and opens a fresh edit draft for it.
    async fn open(&self, token: DraftToken, id: i64) -> ProvisioningResult<EditView>;

    /// Validates an edit. Accepted edits are kept in the draft until
    /// [`AdminEditService::apply`].
    async fn confirm(
        &self,
        token: DraftToken,
        id: i64,
        form: FormFields,
    ) -> ProvisioningResult<StepOutcome<AdminEdit>>;

    /// Writes the confirmed edit and returns the follow-up link.
    async fn apply(&self, token: DraftToken, id: i64) -> ProvisioningResult<String>;

    /// Request `id` with its company name, deleted or not.
    async fn detail(&self, id: i64) -> ProvisioningResult<RequestDetail>;

    /// Marks request `id` deleted and returns its link.
    async fn delete(&self, id: i64) -> ProvisioningResult<String>;
}
