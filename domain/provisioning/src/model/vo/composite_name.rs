use std::fmt;

use serde::{Deserialize, Serialize};

/// `{company}-{organization}-{project}` short-code key of a provisioned project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeName {
    pub company: String,
    pub organization: String,
    pub project: String,
}

impl CompositeName {
    pub fn new(company: &str, organization: &str, project: &str) -> Self {
        Self {
            company: company.to_owned(),
            organization: organization.to_owned(),
            project: project.to_owned(),
        }
    }

    /// Project id of the environment `env`, e.g. `acme-corp-proj1-dev`.
    pub fn with_env(&self, env: &str) -> String {
        format!("{self}-{env}")
    }
}

impl fmt::Display for CompositeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.company, self.organization, self.project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_hyphens() {
        let name = CompositeName::new("acme", "corp", "proj1");
        assert_eq!(name.to_string(), "acme-corp-proj1");
        assert_eq!(name.with_env("dev"), "acme-corp-proj1-dev");
    }
}
