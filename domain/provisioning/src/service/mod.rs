mod admin;
mod listing;
mod name_uniqueness;
mod registration;

#[rustfmt::skip]
pub use {
    admin::{edit_notice, AdminEditService, EditView, EDIT_LOCK_NOTICE},
    listing::{ListingService, RequestListing},
    name_uniqueness::NameUniquenessService,
    registration::RegistrationService,
};
