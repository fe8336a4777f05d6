use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Company;
use crate::model::vo::{CompositeName, FormFields, UpdateFlag, UsePurpose};

/// One submitted provisioning request and, once edited, its admin settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisioningRequest {
    pub id: i64,
    pub name: String,
    pub tel: String,
    pub email: String,
    pub belonging_department: String,
    pub desired_delivery_date: NaiveDate,
    pub company_id: i64,
    pub project_name: String,
    pub system_name: String,
    /// Comma-joined usage tags.
    #[serde(rename = "type")]
    pub r#type: String,
    pub memo: String,
    pub insert_date: NaiveDate,
    pub update_flag: UpdateFlag,
    pub manage_company_name: Option<String>,
    pub organization_name: Option<String>,
    pub project_name_gcp: Option<String>,
    pub env: Option<String>,
    pub use_purpose: Option<String>,
    pub subnet_info: Option<String>,
    pub client_cidr: Option<String>,
    pub group_name: Option<String>,
    pub group_email: Option<String>,
    pub user_group_name: Option<String>,
    pub user_group_email: Option<String>,
    pub domain_name: Option<String>,
    pub vpc_access_conn: Option<String>,
    pub connector_cidr: Option<String>,
}

impl ProvisioningRequest {
    pub fn composite_name(&self) -> CompositeName {
        CompositeName::new(
            self.manage_company_name.as_deref().unwrap_or_default(),
            self.organization_name.as_deref().unwrap_or_default(),
            self.project_name_gcp.as_deref().unwrap_or_default(),
        )
    }

    pub fn purpose(&self) -> Option<UsePurpose> {
        self.use_purpose.as_deref().and_then(UsePurpose::parse)
    }

    /// The row as form fields, used to prefill the admin edit page.
    pub fn to_form(&self) -> FormFields {
        let mut form: FormFields = [
            ("id", self.id.to_string()),
            ("name", self.name.clone()),
            ("tel", self.tel.clone()),
            ("email", self.email.clone()),
            ("belonging_department", self.belonging_department.clone()),
            ("desired_delivery_date", self.desired_delivery_date.to_string()),
            ("company_id", self.company_id.to_string()),
            ("project_name", self.project_name.clone()),
            ("system_name", self.system_name.clone()),
            ("type", self.r#type.clone()),
            ("memo", self.memo.clone()),
            ("insert_date", self.insert_date.to_string()),
            ("update_flag", self.update_flag.to_string()),
        ]
        .into_iter()
        .collect();
        let admin = [
            ("manage_company_name", &self.manage_company_name),
            ("organization_name", &self.organization_name),
            ("project_name_gcp", &self.project_name_gcp),
            ("env", &self.env),
            ("use_purpose", &self.use_purpose),
            ("subnet_info", &self.subnet_info),
            ("client_cidr", &self.client_cidr),
            ("group_name", &self.group_name),
            ("group_email", &self.group_email),
            ("user_group_name", &self.user_group_name),
            ("user_group_email", &self.user_group_email),
            ("domain_name", &self.domain_name),
            ("vpc_access_conn", &self.vpc_access_conn),
            ("connector_cidr", &self.connector_cidr),
        ];
        for (name, value) in admin {
            if let Some(value) = value {
                form.push(name, value.as_str());
            }
        }
        form
    }
}

/// A request as submitted by the self-service flow, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProvisioningRequest {
    pub name: String,
    pub tel: String,
    pub email: String,
    pub belonging_department: String,
    pub desired_delivery_date: NaiveDate,
    pub company_id: i64,
    pub project_name: String,
    pub system_name: String,
    pub r#type: String,
    pub memo: String,
    pub insert_date: NaiveDate,
}

impl NewProvisioningRequest {
    /// Combines the two validated registration steps.
    pub fn from_forms(
        personal: &FormFields,
        project: &FormFields,
        insert_date: NaiveDate,
    ) -> anyhow::Result<Self> {
        let desired_delivery_date =
            NaiveDate::parse_from_str(personal.get("regist_date"), "%Y-%m-%d")
                .with_context(|| format!("Bad delivery date: {}", personal.get("regist_date")))?;
        let company_id = Company::parse_form_id(personal.get("company_id"))
            .with_context(|| format!("Bad company id: {}", personal.get("company_id")))?;
        Ok(Self {
            name: personal.get("username").to_owned(),
            tel: personal.get("tel_number").to_owned(),
            email: personal.get("email").to_owned(),
            belonging_department: personal.get("belonging_department").to_owned(),
            desired_delivery_date,
            company_id,
            project_name: project.get("project_name").to_owned(),
            system_name: project.get("system_name").to_owned(),
            r#type: project.get("type").to_owned(),
            memo: project.get("memo").to_owned(),
            insert_date,
        })
    }

    /// Initial row once the store allocated `id`.
    pub fn into_request(self, id: i64) -> ProvisioningRequest {
        ProvisioningRequest {
            id,
            name: self.name,
            tel: self.tel,
            email: self.email,
            belonging_department: self.belonging_department,
            desired_delivery_date: self.desired_delivery_date,
            company_id: self.company_id,
            project_name: self.project_name,
            system_name: self.system_name,
            r#type: self.r#type,
            memo: self.memo,
            insert_date: self.insert_date,
            update_flag: UpdateFlag::Update,
            manage_company_name: None,
            organization_name: None,
            project_name_gcp: None,
            env: None,
            use_purpose: None,
            subnet_info: None,
            client_cidr: None,
            group_name: None,
            group_email: None,
            user_group_name: None,
            user_group_email: None,
            domain_name: None,
            vpc_access_conn: None,
            connector_cidr: None,
        }
    }
}

/// Columns shown in the request list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSummary {
    pub id: i64,
    pub name: String,
    pub desired_delivery_date: NaiveDate,
    pub tel: String,
    pub email: String,
    pub belonging_department: String,
    pub project_name: String,
    #[serde(rename = "type")]
    pub r#type: String,
    pub project_name_gcp: Option<String>,
    pub update_flag: UpdateFlag,
}

impl From<&ProvisioningRequest> for RequestSummary {
    fn from(r: &ProvisioningRequest) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            desired_delivery_date: r.desired_delivery_date,
            tel: r.tel.clone(),
            email: r.email.clone(),
            belonging_department: r.belonging_department.clone(),
            project_name: r.project_name.clone(),
            r#type: r.r#type.clone(),
            project_name_gcp: r.project_name_gcp.clone(),
            update_flag: r.update_flag,
        }
    }
}

/// A request decorated with its company name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestDetail {
    #[serde(flatten)]
    pub request: ProvisioningRequest,
    pub company_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn personal() -> FormFields {
        [
            ("username", "Taro"),
            ("email", "taro@example.co"),
            ("tel_number", "03-1234-5678"),
            ("regist_date", "2026-11-01"),
            ("belonging_department", "Infra"),
            ("company_id", "4: Acme"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn builds_request_from_both_steps() {
        let project: FormFields =
            [("project_name", "P"), ("system_name", "S"), ("type", "web,batch"), ("memo", "")]
                .into_iter()
                .collect();
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let request = NewProvisioningRequest::from_forms(&personal(), &project, today).unwrap();
        assert_eq!(request.company_id, 4);
        assert_eq!(request.r#type, "web,batch");

        let row = request.into_request(9);
        assert_eq!(row.update_flag, UpdateFlag::Update);
        assert_eq!(row.purpose(), None);
        assert_eq!(row.composite_name().to_string(), "--");
    }

    #[test]
    fn rejects_unparsable_date() {
        let mut form = personal();
        form.set("regist_date", "11/01/2026");
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert!(NewProvisioningRequest::from_forms(&form, &FormFields::new(), today).is_err());
    }
}
