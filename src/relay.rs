use std::sync::Arc;
use std::time::Duration;

use crate::config::RelayConfig;
use crate::contact::{GatewayError, RelayRequest, SimulatedGateway, SubmissionGateway, TemplateParams};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts contact messages to the transactional email relay's REST API.
#[derive(Debug, Clone)]
pub struct EmailRelay {
    client: reqwest::Client,
    config: RelayConfig,
}

impl EmailRelay {
    pub fn new(config: RelayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }
}

impl SubmissionGateway for EmailRelay {
    async fn send(&self, params: TemplateParams) -> Result<(), GatewayError> {
        let body = RelayRequest::new(&self.config, &params);
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "contact relay unreachable");
                GatewayError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "contact relay refused message");
            return Err(GatewayError::Status(status.as_u16()));
        }
        tracing::info!(subject = %params.subject, "contact message relayed");
        Ok(())
    }
}

/// The gateway the server hands to the contact server function.
#[derive(Debug, Clone)]
pub enum ContactRelay {
    Email(Arc<EmailRelay>),
    Simulated(Arc<SimulatedGateway>),
}

impl ContactRelay {
    pub fn from_config(config: Option<RelayConfig>) -> Result<Self, GatewayError> {
        match config {
            Some(config) => {
                tracing::info!(endpoint = %config.endpoint, "contact relay enabled");
                Ok(Self::Email(Arc::new(EmailRelay::new(config)?)))
            }
            None => {
                tracing::warn!("contact relay not configured, messages will only be logged");
                Ok(Self::Simulated(Arc::new(SimulatedGateway::new())))
            }
        }
    }
}

impl SubmissionGateway for ContactRelay {
    async fn send(&self, params: TemplateParams) -> Result<(), GatewayError> {
        match self {
            ContactRelay::Email(relay) => relay.send(params).await,
            ContactRelay::Simulated(sim) => sim.send(params).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_relay_is_simulated() {
        let relay = ContactRelay::from_config(None).unwrap();
        assert!(matches!(relay, ContactRelay::Simulated(_)));
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_transport_error() {
        let config = RelayConfig {
            endpoint: "http://127.0.0.1:9/send".to_string(),
            service_id: "s".to_string(),
            template_id: "t".to_string(),
            public_key: "p".to_string(),
            private_key: None,
        };
        let relay = ContactRelay::from_config(Some(config)).unwrap();
        let params = TemplateParams {
            from_name: "Alan".to_string(),
            from_email: "alan@example.com".to_string(),
            phone: "1234567".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        };
        assert!(matches!(
            relay.send(params).await,
            Err(GatewayError::Transport(_))
        ));
    }
}
