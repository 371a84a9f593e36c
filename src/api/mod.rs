//! Backend API Client
//!
//! HTTP bindings to the goal service, organized by resource.

mod goals;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::Goal;

pub use goals::{CREATE_FALLBACK, DELETE_FALLBACK, LIST_FALLBACK};

/// Operations the page controller needs from the backend
#[allow(async_fn_in_trait)]
pub trait GoalApi {
    async fn create_goal(&self, goal_text: &str) -> Result<Goal, ApiError>;
    async fn list_goals(&self) -> Result<Vec<Goal>, ApiError>;
    async fn delete_goal(&self, goal_id: u32) -> Result<(), ApiError>;
}

/// reqwest-backed client. Cheap to clone; clones share one connection pool
/// and, natively, one cookie jar.
#[derive(Debug, Clone)]
pub struct GoalClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl GoalClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: build_http_client(),
        }
    }

    /// Attach the session cookie to a request
    fn with_credentials(request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();
        request
    }
}

#[cfg(target_arch = "wasm32")]
fn build_http_client() -> reqwest::Client {
    // Browser fetch owns cookies; see `with_credentials`.
    reqwest::Client::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client() -> reqwest::Client {
    match reqwest::Client::builder().cookie_store(true).build() {
        Ok(client) => client,
        Err(e) => {
            log::warn!(
                "[GoalClient] Cookie store unavailable, sessions will not persist: {}",
                e
            );
            reqwest::Client::new()
        }
    }
}
