use serde::Deserialize;

/// Body for the launch-data endpoints
#[derive(Debug, Deserialize)]
pub struct AuthenticateRequest {
    /// Raw launch data exactly as the Mini-App received it.
    /// Also accepted as `initData`, the WebApp property name.
    #[serde(default, alias = "initData")]
    pub init_data: String,
}
