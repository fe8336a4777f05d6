use actix_web::web::Bytes;
use domain_provisioning::model::vo::FormFields;

/// Decodes an `application/x-www-form-urlencoded` body, keeping repeated
/// fields such as checkbox groups.
pub fn parse_form(body: &Bytes) -> FormFields {
    url::form_urlencoded::parse(body).into_owned().collect()
}
