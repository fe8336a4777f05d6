use std::fmt;

use actix_web::{http::header::ContentType, http::StatusCode, HttpResponse, ResponseError};
use domain_provisioning::exception::ProvisioningException;
use once_cell::sync::Lazy;
use serde_json::json;

use crate::infrastructure::templates::{Page, Templates};

pub type PortalResult<T> = Result<T, PortalError>;

/// Which flow failed, selecting the title of the error page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Normal,
    Admin,
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Flow::Normal => "registration",
            Flow::Admin => "administration",
        })
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{flow} failed: {source}")]
pub struct PortalError {
    flow: Flow,
    #[source]
    source: ProvisioningException,
}

impl PortalError {
    pub fn normal(e: impl Into<ProvisioningException>) -> Self {
        Self {
            flow: Flow::Normal,
            source: e.into(),
        }
    }

    pub fn admin(e: impl Into<ProvisioningException>) -> Self {
        Self {
            flow: Flow::Admin,
            source: e.into(),
        }
    }

    fn title(&self) -> &'static str {
        match self.flow {
            Flow::Normal => "The request could not be completed",
            Flow::Admin => "The administration task could not be completed",
        }
    }

    fn message(&self) -> String {
        match (&self.source, self.flow) {
            (ProvisioningException::RequestNotFound { id }, _) => {
                format!("Request {id} does not exist.")
            }
            (ProvisioningException::DraftExpired { .. }, _) => {
                "The form has expired. Please start again.".to_string()
            }
            (ProvisioningException::InternalError { .. }, _) => {
                "Please try again later.".to_string()
            }
            (e, _) => e.to_string(),
        }
    }
}

static ERROR_PAGES: Lazy<Option<Templates>> = Lazy::new(|| match Templates::new() {
    Ok(templates) => Some(templates),
    Err(e) => {
        tracing::error!("Cannot build error page templates: {e:?}");
        None
    }
});

impl ResponseError for PortalError {
    fn status_code(&self) -> StatusCode {
        match self.source {
            ProvisioningException::RequestNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match &self.source {
            ProvisioningException::InternalError { source } => {
                tracing::error!("{} failed: {source:?}", self.flow)
            }
            ProvisioningException::RequestNotFound { .. } => tracing::info!("{self}"),
            _ => tracing::warn!("{self}"),
        }
        let message = self.message();
        let body = ERROR_PAGES
            .as_ref()
            .and_then(|templates| {
                templates
                    .render(Page::Error, &json!({"title": self.title(), "message": message}))
                    .ok()
            })
            .unwrap_or_else(|| format!("{}: {message}", self.title()));
        HttpResponse::build(self.status_code()).content_type(ContentType::html()).body(body)
    }
}
