use serde::{Deserialize, Serialize};

use super::{CompositeName, FormFields, PurposeSettings, UpdateFlag, UsePurpose};

/// Columns an administrator edit is allowed to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminColumn {
    ManageCompanyName,
    OrganizationName,
    ProjectNameGcp,
    GroupName,
    GroupEmail,
    UserGroupName,
    UserGroupEmail,
    Env,
    UsePurpose,
    SubnetInfo,
    ClientCidr,
    DomainName,
    VpcAccessConn,
    ConnectorCidr,
    UpdateFlag,
}

impl AdminColumn {
    pub const ALL: [AdminColumn; 15] = [
        AdminColumn::ManageCompanyName,
        AdminColumn::OrganizationName,
        AdminColumn::ProjectNameGcp,
        AdminColumn::GroupName,
        AdminColumn::GroupEmail,
        AdminColumn::UserGroupName,
        AdminColumn::UserGroupEmail,
        AdminColumn::Env,
        AdminColumn::UsePurpose,
        AdminColumn::SubnetInfo,
        AdminColumn::ClientCidr,
        AdminColumn::DomainName,
        AdminColumn::VpcAccessConn,
        AdminColumn::ConnectorCidr,
        AdminColumn::UpdateFlag,
    ];

    pub fn column_name(&self) -> &'static str {
        match self {
            AdminColumn::ManageCompanyName => "manage_company_name",
            AdminColumn::OrganizationName => "organization_name",
            AdminColumn::ProjectNameGcp => "project_name_gcp",
            AdminColumn::GroupName => "group_name",
            AdminColumn::GroupEmail => "group_email",
            AdminColumn::UserGroupName => "user_group_name",
            AdminColumn::UserGroupEmail => "user_group_email",
            AdminColumn::Env => "env",
            AdminColumn::UsePurpose => "use_purpose",
            AdminColumn::SubnetInfo => "subnet_info",
            AdminColumn::ClientCidr => "client_cidr",
            AdminColumn::DomainName => "domain_name",
            AdminColumn::VpcAccessConn => "vpc_access_conn",
            AdminColumn::ConnectorCidr => "connector_cidr",
            AdminColumn::UpdateFlag => "update_flag",
        }
    }
}

/// One `column = value` pair of a partial update. `None` writes NULL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAssignment {
    pub column: AdminColumn,
    pub value: Option<String>,
}

impl ColumnAssignment {
    pub fn value(column: AdminColumn, value: impl Into<String>) -> Self {
        Self {
            column,
            value: Some(value.into()),
        }
    }

    /// The form literal `None` stands for an empty column.
    pub fn nullable(column: AdminColumn, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            column,
            value: (value != "None").then_some(value),
        }
    }
}

/// A validated administrator edit of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminEdit {
    pub manage_company_name: String,
    pub organization_name: String,
    pub project_name_gcp: String,
    pub group_name: String,
    pub group_email: String,
    pub user_group_name: String,
    pub user_group_email: String,
    /// Selected environments, in submission order.
    pub envs: Vec<String>,
    pub settings: PurposeSettings,
}

impl AdminEdit {
    /// Builds the edit from a form that passed the admin rules.
    pub fn from_form(purpose: UsePurpose, form: &FormFields, envs: Vec<String>) -> Self {
        let field = |name: &str| form.get(name).to_owned();
        Self {
            manage_company_name: field("manage_company_name"),
            organization_name: field("organization_name"),
            project_name_gcp: field("project_name_gcp"),
            group_name: field("group_name"),
            group_email: field("group_email"),
            user_group_name: field("user_group_name"),
            user_group_email: field("user_group_email"),
            envs,
            settings: PurposeSettings::from_form(purpose, form),
        }
    }

    pub fn composite_name(&self) -> CompositeName {
        CompositeName::new(
            &self.manage_company_name,
            &self.organization_name,
            &self.project_name_gcp,
        )
    }

    pub fn purpose(&self) -> UsePurpose {
        self.settings.purpose()
    }

    /// Whitelisted column writes for this edit, ending with the new flag.
    pub fn assignments(&self, flag: UpdateFlag) -> Vec<ColumnAssignment> {
        let mut columns = vec![
            ColumnAssignment::value(AdminColumn::ManageCompanyName, &self.manage_company_name),
            ColumnAssignment::value(AdminColumn::OrganizationName, &self.organization_name),
            ColumnAssignment::value(AdminColumn::ProjectNameGcp, &self.project_name_gcp),
            ColumnAssignment::value(AdminColumn::GroupName, &self.group_name),
            ColumnAssignment::value(AdminColumn::GroupEmail, &self.group_email),
            ColumnAssignment::value(AdminColumn::UserGroupName, &self.user_group_name),
            ColumnAssignment::value(AdminColumn::UserGroupEmail, &self.user_group_email),
            ColumnAssignment::value(AdminColumn::Env, self.envs.join(",")),
        ];
        columns.extend(self.settings.assignments());
        columns.push(ColumnAssignment::value(AdminColumn::UpdateFlag, flag.as_str()));
        columns
    }
}
