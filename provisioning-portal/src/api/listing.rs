use actix_web::{get, post, web, HttpResponse};
use domain_provisioning::model::vo::SearchFilter;
use serde::Deserialize;

use super::{
    draft_session::DraftSession,
    error::{PortalError, PortalResult},
    form::parse_form,
    view::{parse_date, ListView},
};
use crate::infrastructure::{templates::Page, ServiceProvider};

#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(default = "PageQuery::first")]
    page: usize,
}

impl PageQuery {
    fn first() -> usize {
        1
    }
}

#[get("/userlist")]
pub async fn list(
    sp: web::Data<ServiceProvider>,
    session: DraftSession,
    query: web::Query<PageQuery>,
) -> PortalResult<HttpResponse> {
    let listing = sp.listing_service().list(query.page).await.map_err(PortalError::admin)?;
    let html = sp
        .templates()
        .render(Page::List, &ListView::new("/userlist", &listing))
        .map_err(PortalError::admin)?;
    Ok(session.html(html))
}

async fn render_search(
    sp: &ServiceProvider,
    session: &DraftSession,
    filter: Option<SearchFilter>,
    page: usize,
) -> PortalResult<HttpResponse> {
    let listing = sp
        .listing_service()
        .search(session.token(), filter, page)
        .await
        .map_err(PortalError::admin)?;
    let html = sp
        .templates()
        .render(Page::List, &ListView::new("/userlist_search", &listing))
        .map_err(PortalError::admin)?;
    Ok(session.html(html))
}

/// Pages through the remembered search.
#[get("/userlist_search")]
pub async fn search_page(
    sp: web::Data<ServiceProvider>,
    session: DraftSession,
    query: web::Query<PageQuery>,
) -> PortalResult<HttpResponse> {
    render_search(&sp, &session, None, query.page).await
}

#[post("/userlist_search")]
pub async fn search(
    sp: web::Data<ServiceProvider>,
    session: DraftSession,
    query: web::Query<PageQuery>,
    body: web::Bytes,
) -> PortalResult<HttpResponse> {
    let form = parse_form(&body);
    let filter = SearchFilter {
        name: form.get("text_data").trim().to_string(),
        desired_delivery_date: parse_date(form.get("date")),
    };
    render_search(&sp, &session, Some(filter), query.page).await
}
