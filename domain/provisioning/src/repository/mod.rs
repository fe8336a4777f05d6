mod active_project;
mod company;
mod draft;
mod provisioning_request;

#[rustfmt::skip]
pub use {
    active_project::ActiveProjectRepo,
    company::CompanyRepo,
    draft::DraftRepo,
    provisioning_request::ProvisioningRequestRepo,
};
