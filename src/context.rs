//! Application Context
//!
//! The page controller: sole owner of the goal board, provided to components
//! via the Leptos Context API.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{GoalApi, GoalClient};
use crate::error::ApiError;
use crate::store::{GoalBoard, GoalStore};

/// Board state plus the backend it mirrors
#[derive(Clone)]
pub struct AppContext<A> {
    /// Read-only for components; change it through the methods below
    pub board: GoalStore,
    api: A,
}

/// The context type the browser app provides
pub type PageContext = AppContext<GoalClient>;

/// Get the page context provided by `App`
pub fn use_page_context() -> PageContext {
    expect_context::<PageContext>()
}

impl<A: GoalApi> AppContext<A> {
    pub fn new(api: A) -> Self {
        Self {
            board: Store::new(GoalBoard::new()),
            api,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// First list fetch. Failures end in the empty state and are only logged.
    pub async fn load_goals(&self) {
        let result = self.api.list_goals().await;
        match &result {
            Ok(goals) => log::info!("[GoalBoard] Loaded {} goals", goals.len()),
            Err(e) => log::error!("[GoalBoard] Failed to load goals: {}", e),
        }
        self.board.update(|board| board.finish_initial_load(result));
    }

    /// Create a goal from the draft and put it at the head of the list
    pub async fn submit(&self) {
        let Some(goal_text) = self.board.write().begin_submit() else {
            return;
        };
        let result = self.api.create_goal(&goal_text).await;
        if let Err(e) = &result {
            log::warn!("[GoalBoard] Create failed: {}", e);
        }
        self.board.update(|board| board.finish_submit(result));
    }

    /// Delete on the server, then locally. On failure the board is untouched
    /// and the caller decides how to tell the user.
    pub async fn delete_goal(&self, goal_id: u32) -> Result<(), ApiError> {
        if let Err(e) = self.api.delete_goal(goal_id).await {
            log::warn!("[GoalBoard] Delete of goal {} failed: {}", goal_id, e);
            return Err(e);
        }
        self.board.update(|board| board.remove_goal(goal_id));
        Ok(())
    }

    pub fn set_draft(&self, text: String) {
        self.board.update(|board| board.set_draft(text));
    }
}
