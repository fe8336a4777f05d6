use std::future::{ready, Ready};

use actix_web::{
    cookie::{Cookie, SameSite},
    dev::Payload,
    http::header::ContentType,
    web, FromRequest, HttpRequest, HttpResponse,
};
use domain_provisioning::model::entity::DraftToken;

use crate::infrastructure::{session::DraftSigner, ServiceProvider};

/// Draft token of the calling browser.
///
/// A request without a valid signed cookie gets a fresh token, which is
/// handed back on the response.
#[derive(Debug, Clone)]
pub struct DraftSession {
    token: DraftToken,
    cookie: Option<String>,
}

impl DraftSession {
    pub fn token(&self) -> DraftToken {
        self.token
    }

    pub fn html(&self, body: String) -> HttpResponse {
        let mut response = HttpResponse::Ok();
        response.content_type(ContentType::html());
        if let Some(value) = &self.cookie {
            response.cookie(
                Cookie::build(DraftSigner::COOKIE, value.clone())
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Lax)
                    .finish(),
            );
        }
        response.body(body)
    }
}

impl FromRequest for DraftSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let Some(sp) = req.app_data::<web::Data<ServiceProvider>>() else {
            return ready(Err(actix_web::error::ErrorInternalServerError(
                "Service provider is not registered.",
            )));
        };
        let signer = sp.draft_signer();
        let verified = req
            .cookie(DraftSigner::COOKIE)
            .and_then(|cookie| signer.verify(cookie.value()));
        ready(Ok(match verified {
            Some(token) => DraftSession {
                token,
                cookie: None,
            },
            None => {
                let token = DraftToken::generate();
                tracing::debug!("Issuing draft token {token}.");
                DraftSession {
                    token,
                    cookie: Some(signer.sign(token)),
                }
            }
        }))
    }
}
