#![allow(dead_code)]

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use domain_provisioning::{
    model::{
        entity::{
            Company, Draft, DraftSlot, DraftToken, NewProvisioningRequest, ProvisioningRequest,
            RequestSummary,
        },
        vo::{next_id_after, AdminColumn, ColumnAssignment, SearchFilter, UpdateFlag},
    },
    repository::{ActiveProjectRepo, CompanyRepo, DraftRepo, ProvisioningRequestRepo},
};
use service_provisioning::{
    AdminEditServiceImpl, ListingServiceImpl, NameUniquenessServiceImpl, RegistrationServiceImpl,
};

#[derive(Default)]
pub struct MemoryRequests {
    pub rows: Mutex<Vec<ProvisioningRequest>>,
}

#[async_trait]
impl ProvisioningRequestRepo for MemoryRequests {
    async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<ProvisioningRequest>> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn search(&self, filter: &SearchFilter) -> anyhow::Result<Vec<RequestSummary>> {
        let rows = self.rows.lock().unwrap();
        let mut found = rows
            .iter()
            .filter(|r| r.name.contains(&filter.name))
            .filter(|r| filter.desired_delivery_date.map_or(true, |d| r.desired_delivery_date == d))
            .map(RequestSummary::from)
            .collect::<Vec<_>>();
        found.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(found)
    }

    async fn delivery_dates(&self) -> anyhow::Result<Vec<NaiveDate>> {
        let rows = self.rows.lock().unwrap();
        let dates = rows.iter().map(|r| r.desired_delivery_date).collect::<BTreeSet<_>>();
        Ok(dates.into_iter().collect())
    }

    async fn insert(&self, request: &NewProvisioningRequest) -> anyhow::Result<i64> {
        let mut rows = self.rows.lock().unwrap();
        let id = next_id_after(rows.iter().map(|r| r.id).max());
        rows.push(request.clone().into_request(id));
        Ok(id)
    }

    async fn update_columns(
        &self,
        id: i64,
        assignments: &[ColumnAssignment],
    ) -> anyhow::Result<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| anyhow::anyhow!("no row {id}"))?;
        for assignment in assignments {
            let value = assignment.value.clone();
            match assignment.column {
                AdminColumn::ManageCompanyName => row.manage_company_name = value,
                AdminColumn::OrganizationName => row.organization_name = value,
                AdminColumn::ProjectNameGcp => row.project_name_gcp = value,
                AdminColumn::GroupName => row.group_name = value,
                AdminColumn::GroupEmail => row.group_email = value,
                AdminColumn::UserGroupName => row.user_group_name = value,
                AdminColumn::UserGroupEmail => row.user_group_email = value,
                AdminColumn::Env => row.env = value,
                AdminColumn::UsePurpose => row.use_purpose = value,
                AdminColumn::SubnetInfo => row.subnet_info = value,
                AdminColumn::ClientCidr => row.client_cidr = value,
                AdminColumn::DomainName => row.domain_name = value,
                AdminColumn::VpcAccessConn => row.vpc_access_conn = value,
                AdminColumn::ConnectorCidr => row.connector_cidr = value,
                AdminColumn::UpdateFlag => {
                    row.update_flag = value.unwrap_or_default().parse()?;
                }
            }
        }
        Ok(())
    }

    async fn set_update_flag(&self, id: i64, flag: UpdateFlag) -> anyhow::Result<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| anyhow::anyhow!("no row {id}"))?;
        row.update_flag = flag;
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryDrafts {
    pub drafts: Mutex<HashMap<(DraftToken, DraftSlot), Draft>>,
}

#[async_trait]
impl DraftRepo for MemoryDrafts {
    async fn save(&self, token: DraftToken, draft: &Draft) -> anyhow::Result<()> {
        self.drafts.lock().unwrap().insert((token, draft.slot()), draft.clone());
        Ok(())
    }

    async fn load(&self, token: DraftToken, slot: DraftSlot) -> anyhow::Result<Option<Draft>> {
        Ok(self.drafts.lock().unwrap().get(&(token, slot)).cloned())
    }

    async fn discard(&self, token: DraftToken, slot: DraftSlot) -> anyhow::Result<()> {
        self.drafts.lock().unwrap().remove(&(token, slot));
        Ok(())
    }
}

pub struct Companies;

#[async_trait]
impl CompanyRepo for Companies {
    async fn get_all(&self) -> anyhow::Result<Vec<Company>> {
        Ok(vec![
            Company {
                company_id: 1,
                company_name: "Acme".into(),
            },
            Company {
                company_id: 2,
                company_name: "Globex".into(),
            },
        ])
    }
}

#[derive(Default)]
pub struct ActiveProjects {
    pub ids: HashSet<String>,
}

#[async_trait]
impl ActiveProjectRepo for ActiveProjects {
    async fn get_active_ids(&self) -> anyhow::Result<HashSet<String>> {
        Ok(self.ids.clone())
    }
}

pub struct Portal {
    pub requests: Arc<MemoryRequests>,
    pub drafts: Arc<MemoryDrafts>,
    pub registration: RegistrationServiceImpl,
    pub admin: AdminEditServiceImpl,
    pub listing: ListingServiceImpl,
}

pub fn portal(active_ids: &[&str]) -> Portal {
    let requests = Arc::new(MemoryRequests::default());
    let drafts = Arc::new(MemoryDrafts::default());
    let companies = Arc::new(Companies);
    let active = Arc::new(ActiveProjects {
        ids: active_ids.iter().map(|s| s.to_string()).collect(),
    });
    let uniqueness = Arc::new(NameUniquenessServiceImpl::builder().active_project_repo(active).build());
    Portal {
        registration: RegistrationServiceImpl::builder()
            .request_repo(requests.clone())
            .company_repo(companies.clone())
            .draft_repo(drafts.clone())
            .build(),
        admin: AdminEditServiceImpl::builder()
            .request_repo(requests.clone())
            .company_repo(companies)
            .draft_repo(drafts.clone())
            .name_uniqueness_service(uniqueness)
            .build(),
        listing: ListingServiceImpl::builder()
            .request_repo(requests.clone())
            .draft_repo(drafts.clone())
            .build(),
        requests,
        drafts,
    }
}
