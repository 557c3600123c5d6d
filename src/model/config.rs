use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTH_URL: &str =
    "https://functions.poehali.dev/b7206b81-5298-4fc2-9ee6-9b991a2a20ae";
pub const DEFAULT_POSTS_URL: &str =
    "https://functions.poehali.dev/698f6493-0d34-41fb-b635-8517ebf159d3";

/// Contents of `config.json` in the data directory. Every field is optional;
/// missing fields fall through to env vars and built-in defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_url: Option<String>,
}

/// Fully resolved base URLs for the two remote services.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub auth_url: String,
    pub posts_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            posts_url: DEFAULT_POSTS_URL.to_string(),
        }
    }
}
