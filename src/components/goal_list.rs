//! Goal List Component
//!
//! "Your Goals" section: counter, loading placeholders, empty state and cards.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use leptos::prelude::*;

use crate::components::GoalCard;
use crate::context::use_page_context;
use crate::models::Goal;
use crate::plan::goal_count_label;
use crate::store::GoalBoardStoreFields;

/// Number of skeleton cards shown during the first load
const SKELETON_CARDS: usize = 2;

/// Id plus a content hash, so a goal replaced under the same id gets a fresh card
fn card_key(goal: &Goal) -> (u32, u64) {
    let mut hasher = DefaultHasher::new();
    goal.hash(&mut hasher);
    (goal.id, hasher.finish())
}

/// Goal list view
#[component]
pub fn GoalList() -> impl IntoView {
    let board = use_page_context().board;

    view! {
        <section class="goal-list">
            <div class="goal-list-header">
                <h2>"Your Goals"</h2>
                <span class="goal-count">
                    {move || board.goals().with(|goals| goal_count_label(goals.len()))}
                </span>
            </div>

            // Placeholder for the goal being broken down
            <Show when=move || board.is_submitting().get()>
                <div class="goal-card skeleton pending">
                    <div class="skeleton-line wide" />
                    <div class="skeleton-line" />
                    <div class="skeleton-line" />
                </div>
            </Show>

            {move || if board.is_initial_loading().get() {
                view! {
                    <div class="goal-skeletons">
                        {(0..SKELETON_CARDS)
                            .map(|_| view! { <div class="goal-card skeleton" /> })
                            .collect_view()}
                    </div>
                }.into_any()
            } else {
                view! {
                    <Show when=move || board.with(|b| b.is_empty_state())>
                        <div class="empty-state">
                            <p class="empty-title">"No goals yet"</p>
                            <p>"Type a goal above to get started!"</p>
                        </div>
                    </Show>
                    <For
                        each=move || board.goals().get()
                        key=card_key
                        children=move |goal| view! { <GoalCard goal=goal /> }
                    />
                }.into_any()
            }}
        </section>
    }
}
