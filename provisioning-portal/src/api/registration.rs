use actix_web::{get, http::header, post, web, HttpResponse};
use domain_provisioning::model::vo::{FormFields, StepOutcome};
use serde_json::json;

use super::{
    draft_session::DraftSession,
    error::{PortalError, PortalResult},
    form::parse_form,
    view::{PersonalView, ProjectView},
};
use crate::infrastructure::{templates::Page, ServiceProvider};

/// Landing page; drops any half-finished registration.
#[get("/")]
pub async fn landing(
    sp: web::Data<ServiceProvider>,
    session: DraftSession,
) -> PortalResult<HttpResponse> {
    sp.registration_service().start(session.token()).await.map_err(PortalError::normal)?;
    let html = sp.templates().render(Page::Landing, &json!({})).map_err(PortalError::normal)?;
    Ok(session.html(html))
}

#[get("/user_req")]
pub async fn personal_form(
    sp: web::Data<ServiceProvider>,
    session: DraftSession,
) -> PortalResult<HttpResponse> {
    let companies = sp.registration_service().companies().await.map_err(PortalError::normal)?;
    let view = PersonalView::new(vec![], &FormFields::new(), &companies);
    let html = sp.templates().render(Page::Personal, &view).map_err(PortalError::normal)?;
    Ok(session.html(html))
}

#[post("/user_req")]
pub async fn submit_personal(
    sp: web::Data<ServiceProvider>,
    session: DraftSession,
    body: web::Bytes,
) -> PortalResult<HttpResponse> {
    let form = parse_form(&body);
    let outcome = sp
        .registration_service()
        .submit_personal(session.token(), form)
        .await
        .map_err(PortalError::normal)?;
    let html = match outcome {
        StepOutcome::Proceed(_) => sp
            .templates()
            .render(Page::Project, &ProjectView::new(vec![], &FormFields::new())),
        StepOutcome::Rejected { errors, form } => {
            let companies =
                sp.registration_service().companies().await.map_err(PortalError::normal)?;
            sp.templates().render(Page::Personal, &PersonalView::new(errors, &form, &companies))
        }
    }
    .map_err(PortalError::normal)?;
    Ok(session.html(html))
}

#[get("/add")]
pub async fn project_form() -> HttpResponse {
    HttpResponse::Found().insert_header((header::LOCATION, "/")).finish()
}

#[post("/add")]
pub async fn submit_project(
    sp: web::Data<ServiceProvider>,
    session: DraftSession,
    body: web::Bytes,
) -> PortalResult<HttpResponse> {
    let form = parse_form(&body);
    let outcome = sp
        .registration_service()
        .submit_project(session.token(), form)
        .await
        .map_err(PortalError::normal)?;
    let html = match outcome {
        StepOutcome::Proceed(merged) => sp
            .templates()
            .render(Page::Confirm, &json!({ "form": merged.to_map() })),
        StepOutcome::Rejected { errors, form } => sp
            .templates()
            .render(Page::Project, &ProjectView::new(errors, &form)),
    }
    .map_err(PortalError::normal)?;
    Ok(session.html(html))
}

#[post("/regist")]
pub async fn register(
    sp: web::Data<ServiceProvider>,
    session: DraftSession,
) -> PortalResult<HttpResponse> {
    let id = sp.registration_service().complete(session.token()).await.map_err(PortalError::normal)?;
    let html = sp
        .templates()
        .render(Page::Registered, &json!({ "id": id }))
        .map_err(PortalError::normal)?;
    Ok(session.html(html))
}
