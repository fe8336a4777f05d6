//! Template contexts.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use domain_provisioning::{
    model::{
        entity::{Company, RequestDetail, RequestSummary},
        vo::{AdminColumn, AdminEdit, FormFields, SearchFilter, UpdateFlag, UsePurpose},
    },
    service::{edit_notice, RequestListing},
};
use serde::Serialize;

pub const USAGE_TYPES: [&str; 5] = ["web", "api", "batch", "analytics", "other"];
pub const ENVIRONMENTS: [&str; 3] = ["dev", "stg", "prd"];

#[derive(Serialize)]
pub struct Choice {
    value: String,
    label: String,
    selected: bool,
    checked: bool,
}

impl Choice {
    fn new(value: impl Into<String>, label: impl Into<String>, on: bool) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected: on,
            checked: on,
        }
    }
}

fn checked(options: &[&str], joined: &str) -> Vec<Choice> {
    let picked = joined.split(',').collect::<Vec<_>>();
    options.iter().map(|o| Choice::new(*o, *o, picked.contains(o))).collect()
}

#[derive(Serialize)]
pub struct PersonalView {
    errors: Vec<String>,
    form: BTreeMap<String, String>,
    companies: Vec<Choice>,
}

impl PersonalView {
    pub fn new(errors: Vec<String>, form: &FormFields, companies: &[Company]) -> Self {
        let current = Company::parse_form_id(form.get("company_id"));
        let companies = companies
            .iter()
            .map(|c| {
                let value = format!("{}: {}", c.company_id, c.company_name);
                Choice::new(value, c.company_name.clone(), current == Some(c.company_id))
            })
            .collect();
        Self {
            errors,
            form: form.to_map(),
            companies,
        }
    }
}

#[derive(Serialize)]
pub struct ProjectView {
    errors: Vec<String>,
    form: BTreeMap<String, String>,
    usage_types: Vec<Choice>,
}

impl ProjectView {
    pub fn new(errors: Vec<String>, form: &FormFields) -> Self {
        let form = form.to_map();
        let usage_types = checked(&USAGE_TYPES, form.get("type").map_or("", String::as_str));
        Self {
            errors,
            form,
            usage_types,
        }
    }
}

#[derive(Serialize)]
pub struct EditFormView {
    errors: Vec<String>,
    id: i64,
    notice: Option<&'static str>,
    company_name: String,
    form: BTreeMap<String, String>,
    envs: Vec<Choice>,
    purposes: Vec<Choice>,
}

impl EditFormView {
    /// `company_name` comes from the stored row, everything else from `form`.
    pub fn new(
        errors: Vec<String>,
        id: i64,
        form: &FormFields,
        company_name: String,
        notice: Option<&'static str>,
    ) -> Self {
        let form = form.to_map();
        let field = |name: &str| form.get(name).map_or("", String::as_str);
        let envs = checked(&ENVIRONMENTS, field("env"));
        let purposes = UsePurpose::ALL
            .iter()
            .map(|p| Choice::new(p.as_str(), p.as_str(), field("use_purpose") == p.as_str()))
            .collect();
        Self {
            errors,
            id,
            notice,
            company_name,
            envs,
            purposes,
            form,
        }
    }

    pub fn opened(detail: &RequestDetail, notice: Option<&'static str>) -> Self {
        Self::new(
            vec![],
            detail.request.id,
            &detail.request.to_form(),
            detail.company_name.clone(),
            notice,
        )
    }

    /// Re-rendered after a rejected edit: the stored row with the posted
    /// admin fields in place of the stored ones.
    pub fn rejected(errors: Vec<String>, detail: &RequestDetail, posted: &FormFields) -> Self {
        let mut form = detail.request.to_form();
        for column in AdminColumn::ALL {
            if column != AdminColumn::UpdateFlag || posted.contains("update_flag") {
                form.remove(column.column_name());
            }
        }
        form.merge(posted);
        let notice = form.get("update_flag").parse::<UpdateFlag>().ok().and_then(edit_notice);
        Self::new(errors, detail.request.id, &form, detail.company_name.clone(), notice)
    }
}

#[derive(Serialize)]
pub struct EditConfirmView<'a> {
    id: i64,
    composite_name: String,
    envs: String,
    edit: &'a AdminEdit,
}

impl<'a> EditConfirmView<'a> {
    pub fn new(id: i64, edit: &'a AdminEdit) -> Self {
        Self {
            id,
            composite_name: edit.composite_name().to_string(),
            envs: edit.envs.join(","),
            edit,
        }
    }
}

#[derive(Serialize)]
pub struct DetailView {
    id: i64,
    company_name: String,
    form: BTreeMap<String, String>,
}

impl From<&RequestDetail> for DetailView {
    fn from(detail: &RequestDetail) -> Self {
        Self {
            id: detail.request.id,
            company_name: detail.company_name.clone(),
            form: detail.request.to_form().to_map(),
        }
    }
}

#[derive(Serialize)]
struct ListRow<'a> {
    #[serde(flatten)]
    summary: &'a RequestSummary,
    editable: bool,
}

#[derive(Serialize)]
pub struct ListView<'a> {
    path: &'static str,
    rows: Vec<ListRow<'a>>,
    total: usize,
    page: usize,
    pages: usize,
    prev: Option<usize>,
    next: Option<usize>,
    date_options: Vec<Choice>,
    filter: &'a SearchFilter,
}

impl<'a> ListView<'a> {
    pub fn new(path: &'static str, listing: &'a RequestListing) -> Self {
        let page = &listing.page;
        let pages = page.pages().max(1);
        let rows = page
            .items
            .iter()
            .map(|summary| ListRow {
                summary,
                editable: summary.update_flag != UpdateFlag::Deleted,
            })
            .collect();
        let date_options = listing
            .date_options
            .iter()
            .map(|date| {
                let value = date.format("%Y-%m-%d").to_string();
                let on = listing.filter.desired_delivery_date == Some(*date);
                Choice::new(value.clone(), value, on)
            })
            .collect();
        Self {
            path,
            rows,
            total: page.total,
            page: page.page,
            pages,
            prev: (page.page > 1).then(|| page.page - 1),
            next: (page.page < pages).then(|| page.page + 1),
            date_options,
            filter: &listing.filter,
        }
    }
}

/// Empty or malformed dates mean no date filter.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use domain_provisioning::model::{entity::NewProvisioningRequest, vo::Page};
    use serde_json::Value;

    use super::*;
    use crate::infrastructure::templates::{Page as Template, Templates};

    fn summary(id: i64, flag: UpdateFlag) -> RequestSummary {
        RequestSummary {
            id,
            name: "Taro".into(),
            desired_delivery_date: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
            tel: "03".into(),
            email: "a@b.co".into(),
            belonging_department: "infra".into(),
            project_name: "p".into(),
            r#type: "web".into(),
            project_name_gcp: None,
            update_flag: flag,
        }
    }

    #[test]
    fn companies_keep_selection() {
        let form: FormFields = [("company_id", "2: Globex")].into_iter().collect();
        let companies = [
            Company {
                company_id: 1,
                company_name: "Acme".into(),
            },
            Company {
                company_id: 2,
                company_name: "Globex".into(),
            },
        ];
        let view = serde_json::to_value(PersonalView::new(vec![], &form, &companies)).unwrap();
        assert_eq!(view["companies"][0]["value"], "1: Acme");
        assert_eq!(view["companies"][0]["selected"], false);
        assert_eq!(view["companies"][1]["selected"], true);
    }

    fn detail(flag: UpdateFlag) -> RequestDetail {
        let mut request = NewProvisioningRequest {
            name: "Taro Yamada".into(),
            tel: "03-1234-5678".into(),
            email: "taro@acme.co".into(),
            belonging_department: "Infrastructure".into(),
            desired_delivery_date: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
            company_id: 1,
            project_name: "Billing".into(),
            system_name: "billing-api".into(),
            r#type: "web".into(),
            memo: "".into(),
            insert_date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
        }
        .into_request(7);
        request.update_flag = flag;
        request.use_purpose = Some("api".into());
        request.env = Some("stg".into());
        request.manage_company_name = Some("old".into());
        RequestDetail {
            request,
            company_name: "Acme".into(),
        }
    }

    #[test]
    fn rejected_edit_shows_notice_while_awaiting_provisioning() {
        let posted: FormFields =
            [("update_flag", "update"), ("env", "dev,prd")].into_iter().collect();
        let view =
            serde_json::to_value(EditFormView::rejected(vec![], &detail(UpdateFlag::Update), &posted))
                .unwrap();
        assert_eq!(view["notice"], "* Cannot be changed after registration");
        assert_eq!(view["envs"][0]["checked"], true);
        assert_eq!(view["envs"][1]["checked"], false);
        assert_eq!(view["envs"][2]["checked"], true);

        let posted: FormFields = [("update_flag", "operate")].into_iter().collect();
        let view = serde_json::to_value(EditFormView::rejected(
            vec![],
            &detail(UpdateFlag::Operate),
            &posted,
        ))
        .unwrap();
        assert_eq!(view["notice"], Value::Null);
    }

    #[test]
    fn rejected_edit_keeps_stored_row_and_posted_inputs() {
        let posted: FormFields = [("update_flag", "update"), ("manage_company_name", "acme")]
            .into_iter()
            .collect();
        let view = EditFormView::rejected(
            vec!["Company code is invalid.".into()],
            &detail(UpdateFlag::Update),
            &posted,
        );
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["form"]["name"], "Taro Yamada");
        assert_eq!(json["form"]["manage_company_name"], "acme");
        assert_eq!(json["form"]["use_purpose"], Value::Null);
        assert_eq!(json["envs"][1]["checked"], false);

        let html = Templates::new().unwrap().render(Template::Edit, &view).unwrap();
        assert!(html.contains("<tr><th>ID</th><td>7</td></tr>"));
        assert!(html.contains("<tr><th>Name</th><td>Taro Yamada</td></tr>"));
        assert!(html.contains("<tr><th>Company</th><td>Acme</td></tr>"));
    }

    #[test]
    fn list_pages_and_hides_edit_of_deleted_rows() {
        let rows = vec![summary(2, UpdateFlag::Deleted), summary(1, UpdateFlag::Update)];
        let listing = RequestListing {
            page: Page::slice(&rows, 1, 1),
            date_options: vec![NaiveDate::from_ymd_opt(2026, 11, 1).unwrap()],
            filter: SearchFilter::default(),
        };
        let view = serde_json::to_value(ListView::new("/userlist", &listing)).unwrap();
        assert_eq!(view["rows"][0]["id"], 2);
        assert_eq!(view["rows"][0]["editable"], false);
        assert_eq!(view["rows"][0]["update_flag"], "DLT");
        assert_eq!(view["prev"], Value::Null);
        assert_eq!(view["next"], 2);
        assert_eq!(view["date_options"][0]["value"], "2026-11-01");
    }

    #[test]
    fn dates_parse_leniently() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("11/01/2026"), None);
        assert_eq!(parse_date("2026-11-01"), NaiveDate::from_ymd_opt(2026, 11, 1));
    }
}
