use actix_web::{get, post, web, HttpResponse};
use domain_provisioning::model::vo::StepOutcome;
use serde_json::json;

use super::{
    draft_session::DraftSession,
    error::{PortalError, PortalResult},
    form::parse_form,
    view::{DetailView, EditConfirmView, EditFormView},
};
use crate::infrastructure::{templates::Page, ServiceProvider};

#[get("/userlist_edit/{id}")]
pub async fn edit_form(
    sp: web::Data<ServiceProvider>,
    session: DraftSession,
    id: web::Path<i64>,
) -> PortalResult<HttpResponse> {
    let id = id.into_inner();
    let view = sp
        .admin_edit_service()
        .open(session.token(), id)
        .await
        .map_err(PortalError::admin)?;
    let html = sp
        .templates()
        .render(Page::Edit, &EditFormView::opened(&view.detail, view.notice))
        .map_err(PortalError::admin)?;
    Ok(session.html(html))
}

#[post("/userlist_edit/{id}")]
pub async fn confirm_edit(
    sp: web::Data<ServiceProvider>,
    session: DraftSession,
    id: web::Path<i64>,
    body: web::Bytes,
) -> PortalResult<HttpResponse> {
    let id = id.into_inner();
    let outcome = sp
        .admin_edit_service()
        .confirm(session.token(), id, parse_form(&body))
        .await
        .map_err(PortalError::admin)?;
    let html = match outcome {
        StepOutcome::Proceed(edit) => sp
            .templates()
            .render(Page::EditConfirm, &EditConfirmView::new(id, &edit)),
        StepOutcome::Rejected { errors, form } => {
            let detail = sp.admin_edit_service().detail(id).await.map_err(PortalError::admin)?;
            sp.templates()
                .render(Page::Edit, &EditFormView::rejected(errors, &detail, &form))
        }
    }
    .map_err(PortalError::admin)?;
    Ok(session.html(html))
}

#[post("/userlist_update/{id}")]
pub async fn apply_edit(
    sp: web::Data<ServiceProvider>,
    session: DraftSession,
    id: web::Path<i64>,
) -> PortalResult<HttpResponse> {
    let link = sp
        .admin_edit_service()
        .apply(session.token(), id.into_inner())
        .await
        .map_err(PortalError::admin)?;
    let html = sp
        .templates()
        .render(Page::Complete, &json!({ "link": link }))
        .map_err(PortalError::admin)?;
    Ok(session.html(html))
}

#[get("/userlist_delete/{id}")]
pub async fn delete_form(
    sp: web::Data<ServiceProvider>,
    session: DraftSession,
    id: web::Path<i64>,
) -> PortalResult<HttpResponse> {
    let detail = sp
        .admin_edit_service()
        .detail(id.into_inner())
        .await
        .map_err(PortalError::admin)?;
    let html = sp
        .templates()
        .render(Page::Delete, &DetailView::from(&detail))
        .map_err(PortalError::admin)?;
    Ok(session.html(html))
}

#[post("/userlist_delete/{id}")]
pub async fn delete(
    sp: web::Data<ServiceProvider>,
    session: DraftSession,
    id: web::Path<i64>,
) -> PortalResult<HttpResponse> {
    let link = sp
        .admin_edit_service()
        .delete(id.into_inner())
        .await
        .map_err(PortalError::admin)?;
    let html = sp
        .templates()
        .render(Page::Complete, &json!({ "link": link }))
        .map_err(PortalError::admin)?;
    Ok(session.html(html))
}
