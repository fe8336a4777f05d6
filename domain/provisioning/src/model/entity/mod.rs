mod company;
pub mod draft;
mod provisioning_request;

#[rustfmt::skip]
pub use {
    company::{Company, UNKNOWN_COMPANY},
    draft::{AdminEditDraft, Draft, DraftSlot, DraftToken, RegistrationDraft},
    provisioning_request::{
        NewProvisioningRequest, ProvisioningRequest, RequestDetail, RequestSummary,
    },
};
