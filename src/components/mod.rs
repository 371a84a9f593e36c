//! UI Components
//!
//! Leptos components for the goal page.

mod complexity_badge;
mod delete_confirm_button;
mod goal_card;
mod goal_form;
mod goal_list;

pub use complexity_badge::ComplexityBadge;
pub use delete_confirm_button::DeleteConfirmButton;
pub use goal_card::{delete_with_feedback, GoalCard};
pub use goal_form::GoalForm;
pub use goal_list::GoalList;
