//! Scheme classifier - recognises codes from their prefix alone.
//!
//! Handles BOLT11 invoices, LUD-17 scheme URLs and bech32 `lnurl1` strings
//! whose decoded URL carries a `tag` query parameter. Anything that would need
//! an HTTP round trip to the LNURL service is reported as an error.

use async_trait::async_trait;
use url::Url;

use super::error::ClassificationError;
use super::traits::{ClassifyOutcome, CodeClassifier};
use super::types::Classification;

const LIGHTNING_URI_PREFIX: &str = "lightning:";

/// Human-readable parts of BOLT11 invoices (mainnet, testnet/signet, simnet).
/// Regtest (`lnbcrt`) and signet (`lntbs`) share a prefix with the first two.
const BOLT11_PREFIXES: [&str; 3] = ["lnbc", "lntb", "lnsb"];

/// LUD-17 schemes and the request type each one implies.
const LUD17_SCHEMES: [(&str, Classification); 4] = [
    ("lnurlp://", Classification::LnurlPay),
    ("lnurlw://", Classification::LnurlWithdraw),
    ("lnurlc://", Classification::LnurlChannel),
    ("keyauth://", Classification::LnurlAuth),
];

/// Stateless prefix/scheme classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemeClassifier;

impl SchemeClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous core of [`CodeClassifier::classify`].
    pub fn classify_str(&self, raw: &str, label: &str) -> ClassifyOutcome {
        let code = normalize(raw);
        if code.is_empty() {
            return Ok(None);
        }

        if BOLT11_PREFIXES.iter().any(|prefix| code.starts_with(prefix)) && code.contains('1') {
            return Ok(Some(Classification::Bolt11));
        }

        if let Some((_, variant)) = LUD17_SCHEMES
            .iter()
            .find(|(scheme, _)| code.starts_with(scheme))
        {
            return Ok(Some(*variant));
        }

        if code.starts_with("lnurl1") {
            let url = decode_lnurl(&code)
                .ok_or_else(|| ClassificationError::new(format!("{}: invalid LNURL encoding", label)))?;
            return classify_lnurl_url(&url, label).map(Some);
        }

        Ok(None)
    }
}

#[async_trait]
impl CodeClassifier for SchemeClassifier {
    fn name(&self) -> &'static str {
        "scheme"
    }

    async fn classify(&self, raw: &str, label: &str) -> ClassifyOutcome {
        self.classify_str(raw, label)
    }
}

/// Trim, strip a `lightning:` URI prefix and lowercase.
///
/// Bech32 strings are case-insensitive and QR codes usually carry them in
/// upper case to use the alphanumeric encoding mode.
fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let stripped = match trimmed.get(..LIGHTNING_URI_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(LIGHTNING_URI_PREFIX) => {
            &trimmed[LIGHTNING_URI_PREFIX.len()..]
        }
        _ => trimmed,
    };
    stripped.trim().to_ascii_lowercase()
}

fn decode_lnurl(code: &str) -> Option<String> {
    let (hrp, data) = bech32::decode(code).ok()?;
    if hrp.to_lowercase() != "lnurl" {
        return None;
    }
    String::from_utf8(data).ok()
}

fn classify_lnurl_url(raw_url: &str, label: &str) -> Result<Classification, ClassificationError> {
    let url = Url::parse(raw_url)
        .map_err(|e| ClassificationError::new(format!("{}: invalid LNURL target: {}", label, e)))?;

    let tag = url
        .query_pairs()
        .find(|(key, _)| key == "tag")
        .map(|(_, value)| value.into_owned());

    match tag.as_deref() {
        Some("login") => Ok(Classification::LnurlAuth),
        Some("payRequest") => Ok(Classification::LnurlPay),
        Some("withdrawRequest") => Ok(Classification::LnurlWithdraw),
        Some("channelRequest") => Ok(Classification::LnurlChannel),
        _ => Err(ClassificationError::new(format!(
            "{}: LNURL requires a remote lookup",
            label
        ))),
    }
}
