use chrono::NaiveDate;

use super::patterns::{EMAIL, TEL};
use super::{char_len, not_entered};
use crate::model::entity::Company;
use crate::model::vo::FormFields;

const MAX_LEN: usize = 100;

fn is_blank_or_long(value: &str) -> bool {
    value.is_empty() || char_len(value) > MAX_LEN
}

/// Personal information step of the self-service registration.
pub fn validate_registration(form: &FormFields) -> Vec<String> {
    let mut errors = vec![];

    if is_blank_or_long(form.get("username")) {
        errors.push(not_entered("Name"));
    }

    let email = form.get("email");
    if !EMAIL.is_match(email) || char_len(email) > MAX_LEN {
        errors.push(not_entered("Email address"));
    }

    let tel = form.get("tel_number");
    if !TEL.is_match(tel) || char_len(tel) > MAX_LEN {
        errors.push(not_entered("Phone number"));
    }

    if NaiveDate::parse_from_str(form.get("regist_date"), "%Y-%m-%d").is_err() {
        errors.push(not_entered("Desired delivery date"));
    }

    if is_blank_or_long(form.get("belonging_department")) {
        errors.push(not_entered("Department"));
    }

    if Company::parse_form_id(form.get("company_id")).is_none() {
        errors.push(not_entered("Company"));
    }

    errors
}

/// Project information step of the self-service registration.
pub fn validate_project_detail(form: &FormFields) -> Vec<String> {
    [
        ("project_name", "Project name"),
        ("system_name", "System name"),
        ("type", "Usage type"),
    ]
    .into_iter()
    .filter(|(field, _)| form.get(field).is_empty())
    .map(|(_, label)| not_entered(label))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> FormFields {
        [
            ("username", "Taro Yamada"),
            ("email", "a@b.co"),
            ("tel_number", "03-1234-5678"),
            ("regist_date", "2026-11-01"),
            ("belonging_department", "Infrastructure"),
            ("company_id", "1: Acme"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn accepts_complete_registration() {
        assert!(validate_registration(&valid()).is_empty());
    }

    #[test]
    fn every_missing_required_field_is_reported() {
        for field in [
            "username",
            "email",
            "tel_number",
            "regist_date",
            "belonging_department",
            "company_id",
        ] {
            let mut form = valid();
            form.remove(field);
            assert_eq!(validate_registration(&form).len(), 1, "missing {field}");
        }
        assert_eq!(validate_registration(&FormFields::new()).len(), 6);
    }

    #[test]
    fn rejects_bad_formats() {
        let mut form = valid();
        form.set("email", "not-an-email");
        form.set("tel_number", "+81 3 1234");
        form.set("username", "x".repeat(101));
        let errors = validate_registration(&form);
        assert_eq!(
            errors,
            vec![
                "Name is not entered correctly.",
                "Email address is not entered correctly.",
                "Phone number is not entered correctly.",
            ]
        );
    }

    #[test]
    fn hundred_chars_is_the_limit() {
        let mut form = valid();
        form.set("belonging_department", "部".repeat(100));
        assert!(validate_registration(&form).is_empty());
    }

    #[test]
    fn project_detail_requires_all_three() {
        let form: FormFields = [("project_name", "P"), ("system_name", ""), ("memo", "m")]
            .into_iter()
            .collect();
        assert_eq!(
            validate_project_detail(&form),
            vec![
                "System name is not entered correctly.",
                "Usage type is not entered correctly.",
            ]
        );
    }
}
