use serde::{Deserialize, Serialize};

pub const UNKNOWN_COMPANY: &str = "Unknown company";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub company_id: i64,
    pub company_name: String,
}

impl Company {
    /// Parses the company select value, which is either `3` or `3: Acme`.
    pub fn parse_form_id(value: &str) -> Option<i64> {
        value.split(':').next()?.trim().parse().ok()
    }

    /// Name of `company_id` in `companies`, or [`UNKNOWN_COMPANY`].
    pub fn name_of(companies: &[Company], company_id: i64) -> String {
        companies
            .iter()
            .find(|c| c.company_id == company_id)
            .map(|c| c.company_name.clone())
            .unwrap_or_else(|| UNKNOWN_COMPANY.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_select_values() {
        assert_eq!(Company::parse_form_id("3: Acme Inc."), Some(3));
        assert_eq!(Company::parse_form_id("12"), Some(12));
        assert_eq!(Company::parse_form_id("Acme"), None);
        assert_eq!(Company::parse_form_id(""), None);
    }

    #[test]
    fn unknown_ids_fall_back() {
        let companies = vec![Company {
            company_id: 1,
            company_name: "Acme".into(),
        }];
        assert_eq!(Company::name_of(&companies, 1), "Acme");
        assert_eq!(Company::name_of(&companies, 2), UNKNOWN_COMPANY);
    }
}
