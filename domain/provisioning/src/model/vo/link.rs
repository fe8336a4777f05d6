use serde::{Deserialize, Serialize};

use super::{CompositeName, UsePurpose};

/// Base URLs of the infrastructure repositories, one per template family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTemplates {
    /// Shared by `standard` and `wp`.
    #[serde(default = "LinkTemplates::default_standard")]
    pub standard: String,
    #[serde(default = "LinkTemplates::default_static_site")]
    pub static_site: String,
    #[serde(default = "LinkTemplates::default_api")]
    pub api: String,
    #[serde(default = "LinkTemplates::default_secure")]
    pub secure: String,
}

impl LinkTemplates {
    fn default_standard() -> String {
        "https://github.com/mec-mcg/mcg_multicloud_gcp_dev/tree/stg/".to_string()
    }
    fn default_static_site() -> String {
        "https://github.com/mec-mcg/mcg_multicloud_gcp_static_dev/tree/stg/".to_string()
    }
    fn default_api() -> String {
        "https://github.com/mec-mcg/mcg_multicloud_gcp_api_dev/tree/stg/".to_string()
    }
    fn default_secure() -> String {
        "https://github.com/mec-mcg/mcg_multicloud_gcp_secure_dev/tree/stg/kpt/".to_string()
    }

    pub fn base(&self, purpose: UsePurpose) -> &str {
        match purpose {
            UsePurpose::Standard | UsePurpose::Wp => &self.standard,
            UsePurpose::Static => &self.static_site,
            UsePurpose::Api => &self.api,
            UsePurpose::Secure => &self.secure,
        }
    }

    /// Follow-up link of a provisioned project.
    ///
    /// Without a known purpose there is no base and the bare name comes back.
    pub fn build(&self, purpose: Option<UsePurpose>, name: &CompositeName) -> String {
        let base = purpose.map(|p| self.base(p)).unwrap_or_default();
        format!("{base}{name}")
    }
}

impl Default for LinkTemplates {
    fn default() -> Self {
        Self {
            standard: Self::default_standard(),
            static_site: Self::default_static_site(),
            api: Self::default_api(),
            secure: Self::default_secure(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name() -> CompositeName {
        CompositeName::new("acme", "corp", "proj1")
    }

    #[test]
    fn secure_link_has_kpt_segment() {
        let link = LinkTemplates::default().build(Some(UsePurpose::Secure), &name());
        assert!(link.ends_with("secure_dev/tree/stg/kpt/acme-corp-proj1"));
        assert!(link.starts_with("https://"));
    }

    #[test]
    fn standard_and_wp_share_a_base() {
        let templates = LinkTemplates::default();
        assert_eq!(
            templates.build(Some(UsePurpose::Standard), &name()),
            templates.build(Some(UsePurpose::Wp), &name())
        );
        assert_ne!(
            templates.build(Some(UsePurpose::Static), &name()),
            templates.build(Some(UsePurpose::Api), &name())
        );
    }

    #[test]
    fn unknown_purpose_yields_bare_name() {
        assert_eq!(LinkTemplates::default().build(None, &name()), "acme-corp-proj1");
    }
}
