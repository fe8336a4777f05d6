use async_trait::async_trait;
use chrono::NaiveDate;
use domain_provisioning::{
    model::{
        entity::{NewProvisioningRequest, ProvisioningRequest, RequestSummary},
        vo::{next_id_after, ColumnAssignment, SearchFilter, UpdateFlag},
    },
    repository::ProvisioningRequestRepo,
};
use sea_orm::{ConnectionTrait, DatabaseBackend, QueryResult, Statement, TransactionTrait, Value};

use crate::infrastructure::database::{orm::column, OrmRepo};

const SUMMARY_COLUMNS: &str = "id, name, desired_delivery_date, tel, email, \
    belonging_department, project_name, \"type\", project_name_gcp, update_flag";

fn request_from_row(row: &QueryResult) -> anyhow::Result<ProvisioningRequest> {
    Ok(ProvisioningRequest {
        id: column(row, "id")?,
        name: column(row, "name")?,
        tel: column(row, "tel")?,
        email: column(row, "email")?,
        belonging_department: column(row, "belonging_department")?,
        desired_delivery_date: column(row, "desired_delivery_date")?,
        company_id: column(row, "company_id")?,
        project_name: column(row, "project_name")?,
        system_name: column(row, "system_name")?,
        r#type: column(row, "type")?,
        memo: column::<Option<String>>(row, "memo")?.unwrap_or_default(),
        insert_date: column(row, "insert_date")?,
        update_flag: column::<String>(row, "update_flag")?.parse()?,
        manage_company_name: column(row, "manage_company_name")?,
        organization_name: column(row, "organization_name")?,
        project_name_gcp: column(row, "project_name_gcp")?,
        env: column(row, "env")?,
        use_purpose: column(row, "use_purpose")?,
        subnet_info: column(row, "subnet_info")?,
        client_cidr: column(row, "client_cidr")?,
        group_name: column(row, "group_name")?,
        group_email: column(row, "group_email")?,
        user_group_name: column(row, "user_group_name")?,
        user_group_email: column(row, "user_group_email")?,
        domain_name: column(row, "domain_name")?,
        vpc_access_conn: column(row, "vpc_access_conn")?,
        connector_cidr: column(row, "connector_cidr")?,
    })
}

fn summary_from_row(row: &QueryResult) -> anyhow::Result<RequestSummary> {
    Ok(RequestSummary {
        id: column(row, "id")?,
        name: column(row, "name")?,
        desired_delivery_date: column(row, "desired_delivery_date")?,
        tel: column(row, "tel")?,
        email: column(row, "email")?,
        belonging_department: column(row, "belonging_department")?,
        project_name: column(row, "project_name")?,
        r#type: column(row, "type")?,
        project_name_gcp: column(row, "project_name_gcp")?,
        update_flag: column::<String>(row, "update_flag")?.parse()?,
    })
}

/// Newest first, optionally narrowed by name substring and delivery date.
fn search_statement(table: &str, filter: &SearchFilter) -> Statement {
    let mut sql = format!("SELECT {SUMMARY_COLUMNS} FROM {table}");
    let mut conditions = vec![];
    let mut values: Vec<Value> = vec![];
    if !filter.name.is_empty() {
        values.push(format!("%{}%", filter.name).into());
        conditions.push(format!("name LIKE ${}", values.len()));
    }
    if let Some(date) = filter.desired_delivery_date {
        values.push(date.into());
        conditions.push(format!("desired_delivery_date = ${}", values.len()));
    }
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    sql.push_str(" ORDER BY id DESC");
    OrmRepo::statement(&sql, values)
}

fn insert_statement(table: &str, id: i64, request: &NewProvisioningRequest) -> Statement {
    let sql = format!(
        "INSERT INTO {table} (id, name, tel, email, belonging_department, \
         desired_delivery_date, company_id, project_name, system_name, \"type\", memo, \
         insert_date, update_flag) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)"
    );
    OrmRepo::statement(
        &sql,
        vec![
            id.into(),
            request.name.clone().into(),
            request.tel.clone().into(),
            request.email.clone().into(),
            request.belonging_department.clone().into(),
            request.desired_delivery_date.into(),
            request.company_id.into(),
            request.project_name.clone().into(),
            request.system_name.clone().into(),
            request.r#type.clone().into(),
            request.memo.clone().into(),
            request.insert_date.into(),
            UpdateFlag::Update.as_str().into(),
        ],
    )
}

/// `UPDATE .. SET` over whitelisted columns only; values are always bound.
fn update_statement(table: &str, id: i64, assignments: &[ColumnAssignment]) -> Statement {
    let mut values: Vec<Value> = Vec::with_capacity(assignments.len() + 1);
    let sets = assignments
        .iter()
        .map(|assignment| {
            values.push(assignment.value.clone().into());
            format!("{} = ${}", assignment.column.column_name(), values.len())
        })
        .collect::<Vec<_>>()
        .join(", ");
    values.push(id.into());
    let sql = format!("UPDATE {table} SET {sets} WHERE id = ${}", values.len());
    OrmRepo::statement(&sql, values)
}

#[async_trait]
impl ProvisioningRequestRepo for OrmRepo {
    async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<ProvisioningRequest>> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", self.tables.requests);
        self.db
            .get_connection()
            .query_one(OrmRepo::statement(&sql, vec![id.into()]))
            .await?
            .as_ref()
            .map(request_from_row)
            .transpose()
    }

    async fn search(&self, filter: &SearchFilter) -> anyhow::Result<Vec<RequestSummary>> {
        self.db
            .get_connection()
            .query_all(search_statement(&self.tables.requests, filter))
            .await?
            .iter()
            .map(summary_from_row)
            .collect()
    }

    async fn delivery_dates(&self) -> anyhow::Result<Vec<NaiveDate>> {
        let sql = format!(
            "SELECT DISTINCT desired_delivery_date FROM {} ORDER BY desired_delivery_date",
            self.tables.requests
        );
        self.db
            .get_connection()
            .query_all(OrmRepo::statement(&sql, vec![]))
            .await?
            .iter()
            .map(|row| column(row, "desired_delivery_date"))
            .collect()
    }

    async fn insert(&self, request: &NewProvisioningRequest) -> anyhow::Result<i64> {
        let table = &self.tables.requests;
        let trans = self.db.get_connection().begin().await?;
        trans
            .execute(Statement::from_string(
                DatabaseBackend::Postgres,
                format!("LOCK TABLE {table} IN SHARE ROW EXCLUSIVE MODE"),
            ))
            .await?;
        let max_id = trans
            .query_one(Statement::from_string(
                DatabaseBackend::Postgres,
                format!("SELECT MAX(id) AS max_id FROM {table}"),
            ))
            .await?
            .map(|row| column::<Option<i64>>(&row, "max_id"))
            .transpose()?
            .flatten();
        let id = next_id_after(max_id);
        trans.execute(insert_statement(table, id, request)).await?;
        trans.commit().await?;
        Ok(id)
    }

    async fn update_columns(
        &self,
        id: i64,
        assignments: &[ColumnAssignment],
    ) -> anyhow::Result<()> {
        if assignments.is_empty() {
            return Ok(());
        }
        let result = self
            .db
            .get_connection()
            .execute(update_statement(&self.tables.requests, id, assignments))
            .await?;
        if result.rows_affected() == 0 {
            anyhow::bail!("Request {id} vanished before its update.");
        }
        Ok(())
    }

    async fn set_update_flag(&self, id: i64, flag: UpdateFlag) -> anyhow::Result<()> {
        let sql = format!(
            "UPDATE {} SET update_flag = $1 WHERE id = $2",
            self.tables.requests
        );
        self.db
            .get_connection()
            .execute(OrmRepo::statement(&sql, vec![flag.as_str().into(), id.into()]))
            .await?;
        Ok(())
    }
}
