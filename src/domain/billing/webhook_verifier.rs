//! Webhook signature verification.
//!
//! Stripe signs each delivery with HMAC-SHA256 over `"{timestamp}.{body}"`
//! using the endpoint's signing secret, and sends the result in the
//! `Stripe-Signature` header as `t=<unix>,v1=<hex>`. Verification runs over
//! the exact raw body bytes, before any JSON parsing, so a forged or
//! tampered delivery never reaches business logic.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::stripe_event::StripeEvent;
use super::webhook_errors::WebhookError;

/// Deliveries older than this are rejected as possible replays.
const MAX_EVENT_AGE_SECS: i64 = 300;

/// Tolerated clock skew for timestamps from the future.
const MAX_CLOCK_SKEW_SECS: i64 = 60;

/// Parsed `Stripe-Signature` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookSignature {
    /// Unix timestamp the signature was generated at.
    pub timestamp: i64,
    /// HMAC-SHA256 signature bytes (the `v1` scheme).
    pub signature: Vec<u8>,
}

impl WebhookSignature {
    /// Parses a `t=<unix>,v1=<hex>[,...]` header.
    ///
    /// Unknown keys are skipped for forward compatibility. Missing `t` or
    /// `v1`, or malformed values, yield `WebhookError::ParseError`.
    pub fn parse(header: &str) -> Result<Self, WebhookError> {
        let mut timestamp = None;
        let mut signature = None;

        for part in header.split(',') {
            let Some((key, value)) = part.split_once('=') else {
                return Err(WebhookError::ParseError(
                    "malformed signature header".to_string(),
                ));
            };
            match key.trim() {
                "t" => {
                    timestamp = Some(value.parse::<i64>().map_err(|_| {
                        WebhookError::ParseError("invalid signature timestamp".to_string())
                    })?);
                }
                "v1" => {
                    signature = Some(hex::decode(value).map_err(|_| {
                        WebhookError::ParseError("signature is not valid hex".to_string())
                    })?);
                }
                _ => {}
            }
        }

        match (timestamp, signature) {
            (Some(timestamp), Some(signature)) => Ok(Self {
                timestamp,
                signature,
            }),
            (None, _) => Err(WebhookError::ParseError(
                "signature header missing timestamp".to_string(),
            )),
            (_, None) => Err(WebhookError::ParseError(
                "signature header missing v1 signature".to_string(),
            )),
        }
    }
}

/// Verifies webhook deliveries against the configured signing secret.
pub struct WebhookVerifier {
    secret: String,
}

impl WebhookVerifier {
    /// Creates a verifier for the given signing secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Authenticates a delivery and parses it into an event.
    ///
    /// Order matters: header parse, timestamp window, HMAC comparison
    /// (constant time), and only then JSON parsing of the payload.
    pub fn verify_and_parse(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<StripeEvent, WebhookError> {
        let parsed = WebhookSignature::parse(signature_header)?;

        self.check_timestamp(parsed.timestamp)?;

        let expected = self.compute_signature(parsed.timestamp, payload);
        if !constant_time_eq(&expected, &parsed.signature) {
            return Err(WebhookError::InvalidSignature);
        }

        serde_json::from_slice(payload).map_err(|e| WebhookError::ParseError(e.to_string()))
    }

    fn check_timestamp(&self, timestamp: i64) -> Result<(), WebhookError> {
        let age = chrono::Utc::now().timestamp() - timestamp;
        if age > MAX_EVENT_AGE_SECS {
            return Err(WebhookError::TimestampOutOfRange);
        }
        if age < -MAX_CLOCK_SKEW_SECS {
            return Err(WebhookError::InvalidTimestamp);
        }
        Ok(())
    }

    fn compute_signature(&self, timestamp: i64, payload: &[u8]) -> Vec<u8> {
        let mut mac = Hmac::<Sha256>::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }
}

/// Constant-time byte comparison; length mismatch short-circuits, which leaks
/// nothing useful since signature length is fixed by the scheme.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && bool::from(a.ct_eq(b))
}

/// Signs a payload the way the provider would. Test fixtures only.
#[cfg(test)]
pub fn sign_payload(secret: &str, timestamp: i64, payload: &[u8]) -> String {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(format!("{}.", timestamp).as_bytes());
    mac.update(payload);
    format!("t={},v1={}", timestamp, hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "whsec_test_secret";

    const TEST_EVENT: &str = r#"{
        "id": "evt_sig_test",
        "type": "checkout.session.completed",
        "created": 1704067200,
        "data": { "object": {} },
        "livemode": false
    }"#;

    // ══════════════════════════════════════════════════════════════
    // Header parsing
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn parses_well_formed_header() {
        let header = format!("t=1704067200,v1={}", "ab".repeat(32));
        let parsed = WebhookSignature::parse(&header).unwrap();
        assert_eq!(parsed.timestamp, 1704067200);
        assert_eq!(parsed.signature.len(), 32);
    }

    #[test]
    fn skips_unknown_header_keys() {
        let header = format!("t=1704067200,v1={},v0=legacy,scheme=x", "cd".repeat(32));
        assert!(WebhookSignature::parse(&header).is_ok());
    }

    #[test]
    fn rejects_header_without_timestamp() {
        let header = format!("v1={}", "ab".repeat(32));
        assert!(matches!(
            WebhookSignature::parse(&header),
            Err(WebhookError::ParseError(_))
        ));
    }

    #[test]
    fn rejects_header_without_signature() {
        assert!(matches!(
            WebhookSignature::parse("t=1704067200"),
            Err(WebhookError::ParseError(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_timestamp() {
        let header = format!("t=soon,v1={}", "ab".repeat(32));
        assert!(WebhookSignature::parse(&header).is_err());
    }

    #[test]
    fn rejects_non_hex_signature() {
        assert!(WebhookSignature::parse("t=1704067200,v1=zzzz").is_err());
    }

    #[test]
    fn rejects_part_without_equals() {
        assert!(WebhookSignature::parse("t1704067200").is_err());
    }

    // ══════════════════════════════════════════════════════════════
    // Signature verification
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn accepts_genuine_signature() {
        let verifier = WebhookVerifier::new(TEST_SECRET);
        let ts = chrono::Utc::now().timestamp();
        let header = sign_payload(TEST_SECRET, ts, TEST_EVENT.as_bytes());

        let event = verifier
            .verify_and_parse(TEST_EVENT.as_bytes(), &header)
            .unwrap();
        assert_eq!(event.id, "evt_sig_test");
    }

    #[test]
    fn rejects_garbage_signature() {
        let verifier = WebhookVerifier::new(TEST_SECRET);
        let ts = chrono::Utc::now().timestamp();
        let header = format!("t={},v1={}", ts, "00".repeat(32));

        let result = verifier.verify_and_parse(TEST_EVENT.as_bytes(), &header);
        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    #[test]
    fn rejects_signature_from_wrong_secret() {
        let verifier = WebhookVerifier::new("whsec_other");
        let ts = chrono::Utc::now().timestamp();
        let header = sign_payload(TEST_SECRET, ts, TEST_EVENT.as_bytes());

        let result = verifier.verify_and_parse(TEST_EVENT.as_bytes(), &header);
        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    #[test]
    fn rejects_tampered_body() {
        let verifier = WebhookVerifier::new(TEST_SECRET);
        let ts = chrono::Utc::now().timestamp();
        let header = sign_payload(TEST_SECRET, ts, TEST_EVENT.as_bytes());
        let tampered = TEST_EVENT.replace("evt_sig_test", "evt_forged");

        let result = verifier.verify_and_parse(tampered.as_bytes(), &header);
        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    #[test]
    fn rejects_signature_computed_for_other_timestamp() {
        let verifier = WebhookVerifier::new(TEST_SECRET);
        let ts = chrono::Utc::now().timestamp();
        let header = sign_payload(TEST_SECRET, ts, TEST_EVENT.as_bytes());
        // Same signature presented under a different timestamp.
        let shifted = header.replacen(&format!("t={}", ts), &format!("t={}", ts - 10), 1);

        let result = verifier.verify_and_parse(TEST_EVENT.as_bytes(), &shifted);
        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    // ══════════════════════════════════════════════════════════════
    // Replay window
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn rejects_stale_delivery() {
        let verifier = WebhookVerifier::new(TEST_SECRET);
        let ts = chrono::Utc::now().timestamp() - MAX_EVENT_AGE_SECS - 30;
        let header = sign_payload(TEST_SECRET, ts, TEST_EVENT.as_bytes());

        let result = verifier.verify_and_parse(TEST_EVENT.as_bytes(), &header);
        assert!(matches!(result, Err(WebhookError::TimestampOutOfRange)));
    }

    #[test]
    fn accepts_delivery_within_window() {
        let verifier = WebhookVerifier::new(TEST_SECRET);
        let ts = chrono::Utc::now().timestamp() - 120;
        let header = sign_payload(TEST_SECRET, ts, TEST_EVENT.as_bytes());

        assert!(verifier
            .verify_and_parse(TEST_EVENT.as_bytes(), &header)
            .is_ok());
    }

    #[test]
    fn tolerates_small_future_skew() {
        let verifier = WebhookVerifier::new(TEST_SECRET);
        let ts = chrono::Utc::now().timestamp() + 30;
        let header = sign_payload(TEST_SECRET, ts, TEST_EVENT.as_bytes());

        assert!(verifier
            .verify_and_parse(TEST_EVENT.as_bytes(), &header)
            .is_ok());
    }

    #[test]
    fn rejects_delivery_from_the_future() {
        let verifier = WebhookVerifier::new(TEST_SECRET);
        let ts = chrono::Utc::now().timestamp() + MAX_CLOCK_SKEW_SECS + 60;
        let header = sign_payload(TEST_SECRET, ts, TEST_EVENT.as_bytes());

        let result = verifier.verify_and_parse(TEST_EVENT.as_bytes(), &header);
        assert!(matches!(result, Err(WebhookError::InvalidTimestamp)));
    }

    // ══════════════════════════════════════════════════════════════
    // Payload parsing happens only after authentication
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn signed_but_unparseable_payload_is_a_parse_error() {
        let verifier = WebhookVerifier::new(TEST_SECRET);
        let payload = b"not json at all";
        let ts = chrono::Utc::now().timestamp();
        let header = sign_payload(TEST_SECRET, ts, payload);

        let result = verifier.verify_and_parse(payload, &header);
        assert!(matches!(result, Err(WebhookError::ParseError(_))));
    }

    #[test]
    fn unsigned_unparseable_payload_fails_on_signature_first() {
        let verifier = WebhookVerifier::new(TEST_SECRET);
        let ts = chrono::Utc::now().timestamp();
        let header = format!("t={},v1={}", ts, "11".repeat(32));

        let result = verifier.verify_and_parse(b"not json at all", &header);
        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }
}
