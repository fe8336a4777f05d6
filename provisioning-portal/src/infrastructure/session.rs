use domain_provisioning::model::entity::DraftToken;
use uuid::Uuid;

const KEY_CONTEXT: &str = "provisioning-portal 2024 draft token signing";

/// Signs draft tokens handed out in the `portal_draft` cookie.
///
/// Cookie value is `{uuid}.{hex keyed blake3 of the uuid}`; anything that
/// fails verification is treated as no cookie at all.
#[derive(Clone)]
pub struct DraftSigner {
    key: [u8; 32],
}

impl DraftSigner {
    pub const COOKIE: &'static str = "portal_draft";

    pub fn new(secret_key: &str) -> Self {
        Self {
            key: blake3::derive_key(KEY_CONTEXT, secret_key.as_bytes()),
        }
    }

    fn mac(&self, token: DraftToken) -> blake3::Hash {
        blake3::keyed_hash(&self.key, token.0.as_bytes())
    }

    pub fn sign(&self, token: DraftToken) -> String {
        format!("{}.{}", token.0, self.mac(token).to_hex())
    }

    pub fn verify(&self, value: &str) -> Option<DraftToken> {
        let (id, signature) = value.split_once('.')?;
        let token = DraftToken(Uuid::parse_str(id).ok()?);
        let signature = blake3::Hash::from_hex(signature).ok()?;
        // `Hash` equality is constant time.
        (self.mac(token) == signature).then_some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_token_verifies() {
        let signer = DraftSigner::new("s3cret");
        let token = DraftToken::generate();
        assert_eq!(signer.verify(&signer.sign(token)), Some(token));
    }

    #[test]
    fn forged_tokens_are_rejected() {
        let signer = DraftSigner::new("s3cret");
        let token = DraftToken::generate();
        let signed = signer.sign(token);

        let other = DraftSigner::new("other");
        assert_eq!(other.verify(&signed), None);

        let (_, signature) = signed.split_once('.').unwrap();
        let swapped = format!("{}.{signature}", DraftToken::generate());
        assert_eq!(signer.verify(&swapped), None);

        assert_eq!(signer.verify(&token.to_string()), None);
        assert_eq!(signer.verify("garbage.00"), None);
    }
}
