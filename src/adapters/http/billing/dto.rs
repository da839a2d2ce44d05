//! Request/response DTOs for billing endpoints.

use serde::Serialize;

/// Acknowledgement body the payment provider expects.
#[derive(Debug, Serialize)]
pub struct WebhookAckResponse {
    pub received: bool,
}

impl WebhookAckResponse {
    pub fn received() -> Self {
        Self { received: true }
    }
}

/// Entitlement snapshot for the polling UI.
#[derive(Debug, Serialize)]
pub struct EntitlementResponse {
    pub is_pro: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_serializes_to_the_provider_contract() {
        let json = serde_json::to_string(&WebhookAckResponse::received()).unwrap();
        assert_eq!(json, r#"{"received":true}"#);
    }

    #[test]
    fn entitlement_serializes_flag() {
        let json = serde_json::to_string(&EntitlementResponse { is_pro: false }).unwrap();
        assert_eq!(json, r#"{"is_pro":false}"#);
    }
}
