//! Field rules of the three forms.
//!
//! Every rule set reports all failing fields, in a fixed order, as
//! human-readable messages. An empty list means the form is valid.

mod admin;
pub mod patterns;
mod registration;

#[rustfmt::skip]
pub use {
    admin::validate_admin,
    registration::{validate_project_detail, validate_registration},
};

const NOT_ENTERED: &str = "is not entered correctly.";

fn not_entered(label: &str) -> String {
    format!("{label} {NOT_ENTERED}")
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}
