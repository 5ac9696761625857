use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::validate::FormState;
use crate::config::RelayConfig;

/// The five values handed to the email relay, under the names its message
/// template expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl From<&FormState> for TemplateParams {
    fn from(state: &FormState) -> Self {
        Self {
            from_name: state.name.clone(),
            from_email: state.email.clone(),
            phone: state.phone.clone(),
            subject: state.subject.clone(),
            message: state.message.clone(),
        }
    }
}

impl From<&TemplateParams> for FormState {
    fn from(params: &TemplateParams) -> Self {
        Self {
            name: params.from_name.clone(),
            phone: params.phone.clone(),
            email: params.from_email.clone(),
            subject: params.subject.clone(),
            message: params.message.clone(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("relay returned HTTP {0}")]
    Status(u16),
    #[error("couldn't reach relay: {0}")]
    Transport(String),
    #[error("message rejected: {0}")]
    Rejected(String),
    #[error("server error: {0}")]
    Server(String),
}

/// Anything that can deliver a contact message. One call per accepted
/// submission; implementations don't retry.
#[allow(async_fn_in_trait)]
pub trait SubmissionGateway {
    async fn send(&self, params: TemplateParams) -> Result<(), GatewayError>;
}

/// Stand-in relay that accepts everything (or fails every time, if built with
/// [`SimulatedGateway::failing`]). Counts calls.
#[derive(Debug, Default)]
pub struct SimulatedGateway {
    calls: AtomicUsize,
    fail_with: Option<GatewayError>,
}

impl SimulatedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(err: GatewayError) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_with: Some(err),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SubmissionGateway for SimulatedGateway {
    async fn send(&self, params: TemplateParams) -> Result<(), GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        log::info!(
            "simulated relay: message from {} <{}> ({})",
            params.from_name,
            params.from_email,
            params.subject
        );
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

/// JSON body of the relay's REST send endpoint.
#[derive(Debug, Serialize)]
pub struct RelayRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<&'a str>,
    pub template_params: &'a TemplateParams,
}

impl<'a> RelayRequest<'a> {
    pub fn new(config: &'a RelayConfig, params: &'a TemplateParams) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            access_token: config.private_key.as_deref(),
            template_params: params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> TemplateParams {
        TemplateParams {
            from_name: "Alan".to_string(),
            from_email: "alan@example.com".to_string(),
            phone: "+989911582801".to_string(),
            subject: "Hi".to_string(),
            message: "Hello there".to_string(),
        }
    }

    fn config(private_key: Option<&str>) -> RelayConfig {
        RelayConfig {
            endpoint: "https://relay.test/send".to_string(),
            service_id: "service_x".to_string(),
            template_id: "template_y".to_string(),
            public_key: "pub_z".to_string(),
            private_key: private_key.map(str::to_string),
        }
    }

    #[test]
    fn test_params_follow_template_names() {
        let mut state = FormState::default();
        state.name = "Alan".to_string();
        state.email = "alan@example.com".to_string();
        state.phone = "+989911582801".to_string();
        state.subject = "Hi".to_string();
        state.message = "Hello there".to_string();

        let p = TemplateParams::from(&state);
        assert_eq!(p, params());
        assert_eq!(FormState::from(&p), state);
    }

    #[test]
    fn test_relay_request_body() {
        let cfg = config(Some("secret"));
        let p = params();
        let body = serde_json::to_value(RelayRequest::new(&cfg, &p)).unwrap();
        assert_eq!(body["service_id"], "service_x");
        assert_eq!(body["template_id"], "template_y");
        assert_eq!(body["user_id"], "pub_z");
        assert_eq!(body["accessToken"], "secret");
        assert_eq!(body["template_params"]["from_name"], "Alan");
        assert_eq!(body["template_params"]["from_email"], "alan@example.com");
        assert_eq!(body["template_params"]["phone"], "+989911582801");
    }

    #[test]
    fn test_relay_request_omits_missing_token() {
        let cfg = config(None);
        let p = params();
        let body = serde_json::to_value(RelayRequest::new(&cfg, &p)).unwrap();
        assert!(body.get("accessToken").is_none());
    }

    #[tokio::test]
    async fn test_simulated_gateway_counts_calls() {
        let ok = SimulatedGateway::new();
        assert_eq!(ok.send(params()).await, Ok(()));
        assert_eq!(ok.send(params()).await, Ok(()));
        assert_eq!(ok.calls(), 2);

        let bad = SimulatedGateway::failing(GatewayError::Transport("offline".into()));
        assert_eq!(
            bad.send(params()).await,
            Err(GatewayError::Transport("offline".into()))
        );
        assert_eq!(bad.calls(), 1);
    }
}
