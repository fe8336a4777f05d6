use super::patterns::{
    is_cidr, is_cidr_list, is_connector_cidr, ALPHA_NUM, ALPHA_NUM_HYPHEN, DOMAIN, GROUP_EMAIL,
};
use super::{char_len, not_entered};
use crate::model::vo::{FormFields, UsePurpose};

const MAX_CODE_LEN: usize = 8;

/// Short codes that make up the composite name.
const CODES: [(&str, &str); 3] = [
    ("manage_company_name", "Company code"),
    ("project_name_gcp", "Project code"),
    ("organization_name", "Organization code"),
];

/// Administrator edit of a request.
///
/// `use_purpose` is parsed once and selects which of the purpose specific
/// fields are checked.
pub fn validate_admin(form: &FormFields) -> Vec<String> {
    let mut errors = vec![];

    for (field, label) in CODES {
        if !ALPHA_NUM.is_match(form.get(field)) {
            errors.push(format!("{label} may only contain lowercase letters and digits."));
        }
    }
    for (field, label) in [
        ("group_name", "Admin Google group name"),
        ("user_group_name", "User Google group name"),
    ] {
        if !ALPHA_NUM_HYPHEN.is_match(form.get(field)) {
            errors.push(format!(
                "{label} may only contain lowercase letters, digits and hyphens."
            ));
        }
    }
    for (field, label) in [
        ("group_email", "Admin Google group email"),
        ("user_group_email", "User Google group email"),
    ] {
        if !GROUP_EMAIL.is_match(form.get(field)) {
            errors.push(not_entered(label));
        }
    }

    for (field, label) in CODES {
        if char_len(form.get(field)) > MAX_CODE_LEN {
            errors.push(format!("{label} is longer than {MAX_CODE_LEN} characters."));
        }
    }

    if form.get("env").is_empty() {
        errors.push(not_entered("Environment"));
    }
    let raw_purpose = form.get("use_purpose");
    let purpose = UsePurpose::parse(raw_purpose);
    if purpose.is_none() {
        errors.push(not_entered("Use purpose"));
    }

    purpose_rules(purpose, form, &mut errors);
    errors
}

fn purpose_rules(purpose: Option<UsePurpose>, form: &FormFields, errors: &mut Vec<String>) {
    let hosts_site = purpose.is_some_and(|p| p.hosts_site());

    if !hosts_site && !is_cidr(form.get("subnet_info")) {
        errors.push("Subnet range must be a single a.b.c.d/n network.".to_string());
    }

    if purpose.is_some_and(|p| p.restricts_clients()) {
        let client_cidr = form.get("client_cidr").replace(' ', "");
        if !client_cidr.is_empty() && !is_cidr_list(&client_cidr) {
            errors.push(
                "Client IP restriction must be a comma separated list of a.b.c.d/n networks."
                    .to_string(),
            );
        }
    }

    if purpose == Some(UsePurpose::Secure) {
        let connector = form.get("connector_cidr");
        if !connector.is_empty() && connector != "None" && !is_connector_cidr(connector) {
            errors.push(
                "VPC connector range must be empty or an a.b.c.d/28 network.".to_string(),
            );
        }
    }

    if hosts_site && !DOMAIN.is_match(form.get("domain_name")) {
        errors.push("Domain name is invalid.".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(purpose: &str) -> FormFields {
        [
            ("manage_company_name", "acme"),
            ("organization_name", "corp"),
            ("project_name_gcp", "proj1"),
            ("group_name", "acme-admins"),
            ("group_email", "admins@acme.co"),
            ("user_group_name", "acme-users"),
            ("user_group_email", "users@acme.co"),
            ("env", "dev,prd"),
            ("use_purpose", purpose),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn standard_requires_subnet() {
        let mut form = base("standard");
        assert_eq!(
            validate_admin(&form),
            vec!["Subnet range must be a single a.b.c.d/n network."]
        );
        form.push("subnet_info", "10.1.0.0/24");
        assert!(validate_admin(&form).is_empty());
        form.set("subnet_info", "10.0.0.0/31");
        assert_eq!(validate_admin(&form).len(), 1);
    }

    #[test]
    fn wp_requires_domain_not_subnet() {
        let mut form = base("wp");
        assert_eq!(validate_admin(&form), vec!["Domain name is invalid."]);
        form.push("domain_name", "blog.acme.co.jp");
        assert!(validate_admin(&form).is_empty());
    }

    #[test]
    fn secure_checks_client_and_connector_ranges() {
        let mut form = base("secure");
        form.push("subnet_info", "10.1.0.0/24");
        form.push("client_cidr", "1.2.3.4/32, 5.6.7.0/24");
        form.push("connector_cidr", "None");
        assert!(validate_admin(&form).is_empty());

        form.set("connector_cidr", "10.8.0.0/24");
        form.set("client_cidr", "1.2.3.4");
        assert_eq!(
            validate_admin(&form),
            vec![
                "Client IP restriction must be a comma separated list of a.b.c.d/n networks.",
                "VPC connector range must be empty or an a.b.c.d/28 network.",
            ]
        );

        form.set("connector_cidr", "10.8.0.0/28");
        form.set("client_cidr", "");
        assert!(validate_admin(&form).is_empty());
    }

    #[test]
    fn client_cidr_is_ignored_for_standard() {
        let mut form = base("standard");
        form.push("subnet_info", "10.1.0.0/24");
        form.push("client_cidr", "garbage");
        assert!(validate_admin(&form).is_empty());
    }

    #[test]
    fn long_invalid_code_reports_pattern_and_length() {
        let mut form = base("static");
        form.push("domain_name", "acme.com");
        form.set("manage_company_name", "ACME-corporation");
        assert_eq!(
            validate_admin(&form),
            vec![
                "Company code may only contain lowercase letters and digits.",
                "Company code is longer than 8 characters.",
            ]
        );
    }

    #[test]
    fn group_emails_match_anywhere() {
        let mut form = base("standard");
        form.push("subnet_info", "10.1.0.0/24");
        form.set("group_email", "Admins <admins@acme.co>");
        assert!(validate_admin(&form).is_empty());

        form.set("user_group_email", "users");
        assert_eq!(
            validate_admin(&form),
            vec!["User Google group email is not entered correctly."]
        );
    }

    #[test]
    fn missing_and_unknown_purpose() {
        let mut form = base("");
        form.set("env", "");
        form.push("subnet_info", "10.1.0.0/24");
        assert_eq!(
            validate_admin(&form),
            vec![
                "Environment is not entered correctly.",
                "Use purpose is not entered correctly.",
            ]
        );

        form.set("env", "dev");
        form.set("use_purpose", "mainframe");
        assert_eq!(validate_admin(&form), vec!["Use purpose is not entered correctly."]);
    }
}
