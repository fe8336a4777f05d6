mod admin;
mod listing;
mod name_uniqueness;
mod registration;

#[rustfmt::skip]
pub use {
    admin::AdminEditServiceImpl,
    listing::ListingServiceImpl,
    name_uniqueness::NameUniquenessServiceImpl,
    registration::RegistrationServiceImpl,
};
