use crate::DEFAULT_ACCEPT_UPSTREAM_CLAIMS;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Mount the endpoint that reconciles claims verified by an upstream
    /// service. It trusts its caller, so it is off unless asked for.
    pub accept_upstream_claims: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            accept_upstream_claims: DEFAULT_ACCEPT_UPSTREAM_CLAIMS,
        }
    }
}
