use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::{AdminEdit, FormFields, SearchFilter};

/// Identifies the drafts of one browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftToken(pub Uuid);

impl DraftToken {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for DraftToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Which flow a draft belongs to. A token holds at most one draft per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DraftSlot {
    Registration,
    AdminEdit,
    Search,
}

impl DraftSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftSlot::Registration => "registration",
            DraftSlot::AdminEdit => "admin_edit",
            DraftSlot::Search => "search",
        }
    }
}

impl fmt::Display for DraftSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-service registration progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub personal: FormFields,
    pub project: Option<FormFields>,
}

/// Admin edit in progress on one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminEditDraft {
    pub request_id: i64,
    /// Set once the edit passed validation and waits for the final submit.
    pub edit: Option<AdminEdit>,
}

/// Short-lived form state kept between the steps of a flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Draft {
    Registration(RegistrationDraft),
    AdminEdit(AdminEditDraft),
    Search(SearchFilter),
}

impl Draft {
    pub fn slot(&self) -> DraftSlot {
        match self {
            Draft::Registration(_) => DraftSlot::Registration,
            Draft::AdminEdit(_) => DraftSlot::AdminEdit,
            Draft::Search(_) => DraftSlot::Search,
        }
    }
}
