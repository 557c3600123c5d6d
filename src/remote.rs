use anyhow::{Context, Result};

use crate::model::{AuthResponse, CreatedPost, Endpoints, LikeCount, Post};

mod api;
mod auth;
mod http_client;
mod posts;
mod types;

pub use self::api::SocialApi;
use self::http_client::ErrorDetail;
use self::types::{AuthRequest, PostsRequest};

/// Blocking client for the auth and posts endpoints. Holds no per-call state;
/// build once and reuse.
pub struct RemoteClient {
    endpoints: Endpoints,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("fih/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build reqwest client")?;
        Ok(Self { endpoints, client })
    }
}
