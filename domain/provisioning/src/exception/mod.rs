use thiserror::Error;

use crate::model::entity::DraftSlot;

pub type ProvisioningResult<T> = Result<T, ProvisioningException>;

#[derive(Error, Debug)]
pub enum ProvisioningException {
    #[error("There is no provisioning request with id: {id}.")]
    RequestNotFound { id: i64 },

    #[error("The {slot} draft is missing or expired, the step has to be started again.")]
    DraftExpired { slot: DraftSlot },

    #[error("The draft belongs to request {draft_id}, not to request {id}.")]
    DraftMismatch { id: i64, draft_id: i64 },

    #[error("Request {id} is deleted and can no longer be edited.")]
    RequestDeleted { id: i64 },

    #[error("Provisioning internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for ProvisioningException {
    fn from(e: anyhow::Error) -> Self {
        ProvisioningException::InternalError { source: e }
    }
}
