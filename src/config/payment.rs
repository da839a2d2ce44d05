//! Payment configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Payment configuration (Stripe)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentConfig {
    /// Stripe API key
    pub stripe_api_key: String,

    /// Stripe webhook signing secret
    pub stripe_webhook_secret: String,
}

impl PaymentConfig {
    /// Check if using Stripe test mode
    pub fn is_test_mode(&self) -> bool {
        self.stripe_api_key.starts_with("sk_test_")
    }

    /// Validate payment configuration
    ///
    /// Absence of either secret is fatal at startup; the webhook handler
    /// never performs its own configuration checks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.stripe_api_key.is_empty() {
            return Err(ValidationError::MissingRequired("STRIPE_API_KEY"));
        }
        if self.stripe_webhook_secret.is_empty() {
            return Err(ValidationError::MissingRequired("STRIPE_WEBHOOK_SECRET"));
        }

        if !self.stripe_api_key.starts_with("sk_") {
            return Err(ValidationError::InvalidStripeKey);
        }
        if !self.stripe_webhook_secret.starts_with("whsec_") {
            return Err(ValidationError::InvalidStripeWebhookSecret);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config_passes() {
        let config = PaymentConfig {
            stripe_api_key: "sk_test_abc".to_string(),
            stripe_webhook_secret: "whsec_xyz".to_string(),
        };
        assert!(config.validate().is_ok());
        assert!(config.is_test_mode());
    }

    #[test]
    fn missing_api_key_fails() {
        let config = PaymentConfig {
            stripe_webhook_secret: "whsec_xyz".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_webhook_secret_fails() {
        let config = PaymentConfig {
            stripe_api_key: "sk_test_abc".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn wrong_key_prefix_fails() {
        let config = PaymentConfig {
            stripe_api_key: "pk_test_abc".to_string(),
            stripe_webhook_secret: "whsec_xyz".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn wrong_secret_prefix_fails() {
        let config = PaymentConfig {
            stripe_api_key: "sk_test_abc".to_string(),
            stripe_webhook_secret: "secret_xyz".to_string(),
        };
        assert!(config.validate().is_err());
    }
}
