use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Filter of the request search view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    /// Substring of the requester name; empty matches everyone.
    pub name: String,
    pub desired_delivery_date: Option<NaiveDate>,
}

impl SearchFilter {
    pub fn is_unfiltered(&self) -> bool {
        self.name.is_empty() && self.desired_delivery_date.is_none()
    }
}
