use thiserror::Error;

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

const ENDPOINT_VAR: &str = "CONTACT_RELAY_ENDPOINT";
const SERVICE_VAR: &str = "CONTACT_RELAY_SERVICE_ID";
const TEMPLATE_VAR: &str = "CONTACT_RELAY_TEMPLATE_ID";
const PUBLIC_KEY_VAR: &str = "CONTACT_RELAY_PUBLIC_KEY";
const PRIVATE_KEY_VAR: &str = "CONTACT_RELAY_PRIVATE_KEY";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("contact relay is partially configured, missing {0}")]
    Missing(&'static str),
}

/// Credentials for the transactional email relay. These are deployment
/// settings and only ever live on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
}

impl RelayConfig {
    /// Reads relay settings through `lookup`. `Ok(None)` means the relay is
    /// not configured at all; a partial configuration is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Option<Self>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let service_id = get(SERVICE_VAR);
        let template_id = get(TEMPLATE_VAR);
        let public_key = get(PUBLIC_KEY_VAR);
        if service_id.is_none() && template_id.is_none() && public_key.is_none() {
            return Ok(None);
        }

        Ok(Some(Self {
            endpoint: get(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_RELAY_ENDPOINT.to_string()),
            service_id: service_id.ok_or(ConfigError::Missing(SERVICE_VAR))?,
            template_id: template_id.ok_or(ConfigError::Missing(TEMPLATE_VAR))?,
            public_key: public_key.ok_or(ConfigError::Missing(PUBLIC_KEY_VAR))?,
            private_key: get(PRIVATE_KEY_VAR),
        }))
    }

    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_unconfigured() {
        assert_eq!(RelayConfig::from_lookup(lookup(&[])), Ok(None));
        // blank values count as unset
        assert_eq!(
            RelayConfig::from_lookup(lookup(&[(SERVICE_VAR, "  ")])),
            Ok(None)
        );
    }

    #[test]
    fn test_full_config() {
        let cfg = RelayConfig::from_lookup(lookup(&[
            (SERVICE_VAR, "service_1"),
            (TEMPLATE_VAR, "template_1"),
            (PUBLIC_KEY_VAR, "pk"),
            (PRIVATE_KEY_VAR, "sk"),
        ]))
        .unwrap()
        .expect("should be configured");
        assert_eq!(cfg.endpoint, DEFAULT_RELAY_ENDPOINT);
        assert_eq!(cfg.service_id, "service_1");
        assert_eq!(cfg.template_id, "template_1");
        assert_eq!(cfg.public_key, "pk");
        assert_eq!(cfg.private_key.as_deref(), Some("sk"));
    }

    #[test]
    fn test_endpoint_override_and_optional_private_key() {
        let cfg = RelayConfig::from_lookup(lookup(&[
            (ENDPOINT_VAR, "http://localhost:9000/send"),
            (SERVICE_VAR, "s"),
            (TEMPLATE_VAR, "t"),
            (PUBLIC_KEY_VAR, "p"),
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(cfg.endpoint, "http://localhost:9000/send");
        assert_eq!(cfg.private_key, None);
    }

    #[test]
    fn test_partial_config_is_an_error() {
        let res = RelayConfig::from_lookup(lookup(&[(SERVICE_VAR, "s"), (PUBLIC_KEY_VAR, "p")]));
        assert_eq!(res, Err(ConfigError::Missing(TEMPLATE_VAR)));
    }
}
