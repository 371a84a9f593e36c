//! Goal Endpoints
//!
//! `POST /goals`, `GET /goals`, `DELETE /goals/{id}`.

use reqwest::Response;
use serde::Deserialize;

use super::{GoalApi, GoalClient};
use crate::error::ApiError;
use crate::models::{Goal, NewGoal};

pub const CREATE_FALLBACK: &str = "Failed to create goal";
pub const LIST_FALLBACK: &str = "Failed to fetch goals";
pub const DELETE_FALLBACK: &str = "Failed to delete goal";

/// Error payload of a failed mutation. `detail` is a string for
/// application errors but a list of objects for validation errors.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Turn a non-success response into an error carrying the server's
/// `detail` string, or `fallback` when there is none to show.
async fn detail_error(response: Response, fallback: &str) -> ApiError {
    let status = response.status().as_u16();
    let detail = match response.json::<ErrorBody>().await {
        Ok(body) => body
            .detail
            .as_ref()
            .and_then(|d| d.as_str())
            .filter(|d| !d.trim().is_empty())
            .map(str::to_string),
        Err(e) => {
            log::debug!(
                "[GoalClient] Unreadable error body for status {}: {}",
                status,
                e
            );
            None
        }
    };
    ApiError::server(status, detail.unwrap_or_else(|| fallback.to_string()))
}

impl GoalApi for GoalClient {
    async fn create_goal(&self, goal_text: &str) -> Result<Goal, ApiError> {
        let request = self
            .http
            .post(self.config.goals_url())
            .json(&NewGoal { goal_text });
        let response = Self::with_credentials(request).send().await?;

        if !response.status().is_success() {
            return Err(detail_error(response, CREATE_FALLBACK).await);
        }
        let goal: Goal = response.json().await?;
        log::info!(
            "[GoalClient] Created goal {} with {} tasks",
            goal.id,
            goal.tasks.len()
        );
        Ok(goal)
    }

    async fn list_goals(&self) -> Result<Vec<Goal>, ApiError> {
        let request = self.http.get(self.config.goals_url());
        let response = Self::with_credentials(request).send().await?;

        if !response.status().is_success() {
            // The list endpoint's error body is never inspected.
            return Err(ApiError::server(response.status().as_u16(), LIST_FALLBACK));
        }
        let goals: Vec<Goal> = response.json().await?;
        log::debug!("[GoalClient] Fetched {} goals", goals.len());
        Ok(goals)
    }

    async fn delete_goal(&self, goal_id: u32) -> Result<(), ApiError> {
        let request = self.http.delete(self.config.goal_url(goal_id));
        let response = Self::with_credentials(request).send().await?;

        if !response.status().is_success() {
            return Err(detail_error(response, DELETE_FALLBACK).await);
        }
        log::info!("[GoalClient] Deleted goal {}", goal_id);
        Ok(())
    }
}
