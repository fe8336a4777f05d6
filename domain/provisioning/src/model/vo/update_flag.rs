use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle marker of a provisioning request row.
///
/// Only ever moves forward: `update` → `operate`/`operate_complete` → `DLT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateFlag {
    /// Submitted, waiting for an administrator.
    #[serde(rename = "update")]
    Update,
    #[serde(rename = "operate")]
    Operate,
    #[serde(rename = "operate_complete")]
    OperateComplete,
    /// Logically deleted. Terminal.
    #[serde(rename = "DLT")]
    Deleted,
}

impl UpdateFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateFlag::Update => "update",
            UpdateFlag::Operate => "operate",
            UpdateFlag::OperateComplete => "operate_complete",
            UpdateFlag::Deleted => "DLT",
        }
    }

    fn stage(self) -> u8 {
        match self {
            UpdateFlag::Update => 0,
            UpdateFlag::Operate | UpdateFlag::OperateComplete => 1,
            UpdateFlag::Deleted => 2,
        }
    }

    /// Whether `next` is reachable from `self` without moving backwards.
    pub fn can_advance_to(self, next: UpdateFlag) -> bool {
        match (self, next) {
            (UpdateFlag::OperateComplete, UpdateFlag::Operate) => false,
            (UpdateFlag::Deleted, next) => next == UpdateFlag::Deleted,
            (current, next) => next.stage() >= current.stage(),
        }
    }

    /// Flag a row carries after an administrator saved an edit.
    ///
    /// `None` when the row is deleted and may no longer be edited.
    pub fn after_admin_edit(self) -> Option<UpdateFlag> {
        match self {
            UpdateFlag::Update | UpdateFlag::Operate => Some(UpdateFlag::Operate),
            UpdateFlag::OperateComplete => Some(UpdateFlag::OperateComplete),
            UpdateFlag::Deleted => None,
        }
    }

    pub fn is_awaiting_provisioning(self) -> bool {
        self == UpdateFlag::Update
    }
}

impl fmt::Display for UpdateFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdateFlag {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "update" => UpdateFlag::Update,
            "operate" => UpdateFlag::Operate,
            "operate_complete" => UpdateFlag::OperateComplete,
            "DLT" => UpdateFlag::Deleted,
            _ => anyhow::bail!("Unknown update flag: {s}"),
        })
    }
}
