mod admin_edit;
mod composite_name;
mod form;
mod identifier;
mod link;
mod outcome;
pub mod page;
mod search;
mod update_flag;
mod use_purpose;

#[rustfmt::skip]
pub use {
    admin_edit::{AdminColumn, AdminEdit, ColumnAssignment},
    composite_name::CompositeName,
    form::FormFields,
    identifier::next_id_after,
    link::LinkTemplates,
    outcome::StepOutcome,
    page::{Page, PER_PAGE},
    search::SearchFilter,
    update_flag::UpdateFlag,
    use_purpose::{PurposeSettings, UsePurpose},
};
