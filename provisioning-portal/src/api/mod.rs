pub mod admin;
pub mod draft_session;
pub mod error;
mod form;
pub mod listing;
pub mod registration;
mod view;
