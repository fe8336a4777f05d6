use once_cell::sync::Lazy;
use regex::Regex;

/// Network that must never be handed out.
pub const RESERVED_CIDR: &str = "10.0.0.0/31";

pub static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.\-]+@[\w.\-]+\.[A-Za-z]+").expect("email pattern"));
/// Group addresses only need to contain an address somewhere.
pub static GROUP_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.\-]+@[\w.\-]+\.[A-Za-z]+").expect("group email pattern"));
pub static TEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9\-]+$").expect("tel pattern"));
pub static ALPHA_NUM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+$").expect("alpha_num pattern"));
pub static ALPHA_NUM_HYPHEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9\-]+$").expect("alpha_num_hyphen pattern"));
static CIDR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+\.\d+/\d+$").expect("cidr pattern"));
static CIDR_28: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+\.\d+/28$").expect("cidr/28 pattern"));
pub static DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]([a-z0-9.\-]*[a-z0-9])?(\.[a-z]{2,})+$").expect("domain pattern")
});

/// Single `a.b.c.d/n`, never the reserved network.
pub fn is_cidr(value: &str) -> bool {
    CIDR.is_match(value) && value != RESERVED_CIDR
}

/// Comma separated [`is_cidr`] list; one trailing comma is tolerated.
pub fn is_cidr_list(value: &str) -> bool {
    let value = value.strip_suffix(',').unwrap_or(value);
    !value.is_empty() && value.split(',').all(is_cidr)
}

/// VPC connector range, always a `/28`.
pub fn is_connector_cidr(value: &str) -> bool {
    CIDR_28.is_match(value) && value != RESERVED_CIDR
}
