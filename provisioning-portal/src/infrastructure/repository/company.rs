use async_trait::async_trait;
use domain_provisioning::{model::entity::Company, repository::CompanyRepo};
use sea_orm::ConnectionTrait;

use crate::infrastructure::database::{orm::column, OrmRepo};

#[async_trait]
impl CompanyRepo for OrmRepo {
    async fn get_all(&self) -> anyhow::Result<Vec<Company>> {
        let sql = format!(
            "SELECT company_id, company_name FROM {} ORDER BY company_id",
            self.tables.companies
        );
        self.db
            .get_connection()
            .query_all(OrmRepo::statement(&sql, vec![]))
            .await?
            .iter()
            .map(|row| {
                Ok(Company {
                    company_id: column(row, "company_id")?,
                    company_name: column(row, "company_name")?,
                })
            })
            .collect()
    }
}
