//! SMS dispatch through the Twilio Messages API.

use async_trait::async_trait;
use std::time::Duration;

use super::map_transport_error;
use crate::providers::alerting::AlertDispatcher;
use crate::providers::config::ProviderConfig;
use crate::providers::error::{ProviderError, ProviderResult};

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

/// Alert dispatcher backed by Twilio SMS.
pub struct TwilioDispatcher {
    client: reqwest::Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

impl TwilioDispatcher {
    pub fn from_config(config: &ProviderConfig) -> ProviderResult<Self> {
        if config.twilio.account_sid.is_empty() || config.twilio.from_number.is_empty() {
            return Err(ProviderError::ConfigurationError(
                "twilio.account_sid and twilio.from_number must be configured".to_string(),
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.twilio.timeout_seconds))
            .build()
            .map_err(|e| ProviderError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            account_sid: config.twilio.account_sid.clone(),
            auth_token: config.twilio_auth_token()?,
            from_number: config.twilio.from_number.clone(),
        })
    }
}

#[async_trait]
impl AlertDispatcher for TwilioDispatcher {
    async fn send(&self, recipient: &str, message: &str) -> ProviderResult<()> {
        let url = format!(
            "{}/Accounts/{}/Messages.json",
            TWILIO_API_BASE, self.account_sid
        );
        let params = [
            ("To", recipient),
            ("From", self.from_number.as_str()),
            ("Body", message),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .send()
            .await
            .map_err(|e| map_transport_error("sms dispatch", e))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ProviderError::AuthError(
                "Twilio rejected credentials".to_string(),
            ));
        }
        if !status.is_success() {
            return Err(ProviderError::QueryError(format!(
                "Twilio returned {}",
                status
            )));
        }
        // The delivery acknowledgment body is not inspected further
        Ok(())
    }
}
