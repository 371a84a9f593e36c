//! Goal Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All mutation goes
//! through the transition methods on [`GoalBoard`].

use reactive_stores::Store;

use crate::error::ApiError;
use crate::models::Goal;

/// Page state: the local mirror of the user's goals plus form flags
#[derive(Clone, Debug, Default, Store)]
pub struct GoalBoard {
    /// Newest first by insertion, not by timestamp
    pub goals: Vec<Goal>,
    /// Pending text in the goal input
    pub draft_text: String,
    /// A create request is in flight
    pub is_submitting: bool,
    /// The first list fetch has not settled yet
    pub is_initial_loading: bool,
    /// Message of the last failed create
    pub last_error: Option<String>,
}

impl GoalBoard {
    pub fn new() -> Self {
        Self {
            is_initial_loading: true,
            ..Default::default()
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting && !self.draft_text.trim().is_empty()
    }

    /// No goals and nothing pending that could produce one on screen
    pub fn is_empty_state(&self) -> bool {
        !self.is_initial_loading && !self.is_submitting && self.goals.is_empty()
    }

    pub fn set_draft(&mut self, text: String) {
        self.draft_text = text;
    }

    /// Settle the first list fetch. A failure leaves the list as it was.
    pub fn finish_initial_load(&mut self, result: Result<Vec<Goal>, ApiError>) {
        self.is_initial_loading = false;
        let Ok(fetched) = result else {
            return;
        };
        // Goals created while the fetch was in flight stay on top.
        let mut goals: Vec<Goal> = self
            .goals
            .drain(..)
            .filter(|local| !fetched.iter().any(|g| g.id == local.id))
            .collect();
        goals.extend(fetched);
        self.goals = goals;
    }

    /// Start a create. Returns the text to send, or `None` if the draft is
    /// blank or another create is still running.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.is_submitting = true;
        self.last_error = None;
        Some(self.draft_text.clone())
    }

    pub fn finish_submit(&mut self, result: Result<Goal, ApiError>) {
        self.is_submitting = false;
        match result {
            Ok(goal) => {
                self.goals.retain(|g| g.id != goal.id);
                self.goals.insert(0, goal);
                self.draft_text.clear();
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
            }
        }
    }

    pub fn remove_goal(&mut self, goal_id: u32) {
        self.goals.retain(|g| g.id != goal_id);
    }

    pub fn contains(&self, goal_id: u32) -> bool {
        self.goals.iter().any(|g| g.id == goal_id)
    }
}

/// Type alias for the store
pub type GoalStore = Store<GoalBoard>;
