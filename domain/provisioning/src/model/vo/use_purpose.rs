use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{AdminColumn, ColumnAssignment, FormFields};

/// Infrastructure template a request is provisioned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsePurpose {
    Standard,
    Wp,
    Static,
    Api,
    Secure,
}

impl UsePurpose {
    pub const ALL: [UsePurpose; 5] = [
        UsePurpose::Standard,
        UsePurpose::Wp,
        UsePurpose::Static,
        UsePurpose::Api,
        UsePurpose::Secure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UsePurpose::Standard => "standard",
            UsePurpose::Wp => "wp",
            UsePurpose::Static => "static",
            UsePurpose::Api => "api",
            UsePurpose::Secure => "secure",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }

    /// Site hosting purposes get a domain instead of a subnet.
    pub fn hosts_site(&self) -> bool {
        matches!(self, UsePurpose::Wp | UsePurpose::Static)
    }

    pub fn restricts_clients(&self) -> bool {
        matches!(self, UsePurpose::Api | UsePurpose::Secure)
    }
}

impl fmt::Display for UsePurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UsePurpose {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| anyhow::anyhow!("Unknown use purpose: {s}"))
    }
}

/// Purpose specific admin fields, one variant per [`UsePurpose`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "use_purpose", rename_all = "snake_case")]
pub enum PurposeSettings {
    Standard {
        subnet_info: String,
    },
    Wp {
        domain_name: String,
    },
    Static {
        domain_name: String,
    },
    /// `client_cidr` is present only when submitted, stored without spaces.
    Api {
        subnet_info: String,
        client_cidr: Option<String>,
    },
    Secure {
        subnet_info: String,
        client_cidr: Option<String>,
        /// Present only when submitted; the literal `None` clears the column.
        vpc_access_conn: Option<String>,
        connector_cidr: Option<String>,
    },
}

impl PurposeSettings {
    /// Picks the fields of `purpose` out of an already validated form.
    pub fn from_form(purpose: UsePurpose, form: &FormFields) -> Self {
        let subnet_info = || form.get("subnet_info").to_owned();
        let domain_name = || form.get("domain_name").to_owned();
        let client_cidr = || form.get_opt("client_cidr").map(|v| v.replace(' ', ""));
        match purpose {
            UsePurpose::Standard => PurposeSettings::Standard {
                subnet_info: subnet_info(),
            },
            UsePurpose::Wp => PurposeSettings::Wp {
                domain_name: domain_name(),
            },
            UsePurpose::Static => PurposeSettings::Static {
                domain_name: domain_name(),
            },
            UsePurpose::Api => PurposeSettings::Api {
                subnet_info: subnet_info(),
                client_cidr: client_cidr(),
            },
            UsePurpose::Secure => PurposeSettings::Secure {
                subnet_info: subnet_info(),
                client_cidr: client_cidr(),
                vpc_access_conn: form.get_opt("vpc_access_conn").map(str::to_owned),
                connector_cidr: form.get_opt("connector_cidr").map(str::to_owned),
            },
        }
    }

    pub fn purpose(&self) -> UsePurpose {
        match self {
            PurposeSettings::Standard { .. } => UsePurpose::Standard,
            PurposeSettings::Wp { .. } => UsePurpose::Wp,
            PurposeSettings::Static { .. } => UsePurpose::Static,
            PurposeSettings::Api { .. } => UsePurpose::Api,
            PurposeSettings::Secure { .. } => UsePurpose::Secure,
        }
    }

    /// Column writes carried by this variant, `use_purpose` included.
    pub fn assignments(&self) -> Vec<ColumnAssignment> {
        let mut columns = vec![ColumnAssignment::value(
            AdminColumn::UsePurpose,
            self.purpose().as_str(),
        )];
        match self {
            PurposeSettings::Standard { subnet_info } => {
                columns.push(ColumnAssignment::value(AdminColumn::SubnetInfo, subnet_info));
            }
            PurposeSettings::Wp { domain_name } | PurposeSettings::Static { domain_name } => {
                columns.push(ColumnAssignment::value(AdminColumn::DomainName, domain_name));
            }
            PurposeSettings::Api {
                subnet_info,
                client_cidr,
            } => {
                columns.push(ColumnAssignment::value(AdminColumn::SubnetInfo, subnet_info));
                if let Some(cidr) = client_cidr {
                    columns.push(ColumnAssignment::value(AdminColumn::ClientCidr, cidr));
                }
            }
            PurposeSettings::Secure {
                subnet_info,
                client_cidr,
                vpc_access_conn,
                connector_cidr,
            } => {
                columns.push(ColumnAssignment::value(AdminColumn::SubnetInfo, subnet_info));
                if let Some(cidr) = client_cidr {
                    columns.push(ColumnAssignment::value(AdminColumn::ClientCidr, cidr));
                }
                if let Some(conn) = vpc_access_conn {
                    columns.push(ColumnAssignment::nullable(AdminColumn::VpcAccessConn, conn));
                }
                if let Some(cidr) = connector_cidr {
                    columns.push(ColumnAssignment::nullable(AdminColumn::ConnectorCidr, cidr));
                }
            }
        }
        columns
    }
}
