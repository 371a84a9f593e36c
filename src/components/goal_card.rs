//! Goal Card Component
//!
//! One goal with its badge, creation date, action plan and delete control.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::GoalApi;
use crate::components::{ComplexityBadge, DeleteConfirmButton};
use crate::context::{use_page_context, AppContext};
use crate::models::Goal;
use crate::notify::{BrowserNotifier, Notifier};
use crate::plan::{display_date, ordered_tasks};

/// Delete a goal on behalf of its card.
///
/// `deleting` stays set while the request runs so repeated clicks do nothing.
/// On failure the user is told and the flag resets so they can retry; the
/// goal is still on the board. On success the card goes away with the goal.
pub async fn delete_with_feedback<A: GoalApi>(
    ctx: &AppContext<A>,
    goal_id: u32,
    deleting: RwSignal<bool>,
    notifier: &impl Notifier,
) {
    if deleting.get_untracked() {
        return;
    }
    deleting.set(true);
    if let Err(e) = ctx.delete_goal(goal_id).await {
        notifier.notify(&format!("Failed to delete goal: {}", e));
        deleting.set(false);
    }
}

/// A single goal card
#[component]
pub fn GoalCard(goal: Goal) -> impl IntoView {
    let ctx = use_page_context();
    let deleting = RwSignal::new(false);

    let id = goal.id;
    let title = goal.goal_text.clone();
    let score = goal.complexity_score;
    let tier = goal.complexity_tier();
    let created = display_date(&goal);
    let tasks = ordered_tasks(&goal.tasks);

    let on_confirm = Callback::new(move |()| {
        let ctx = ctx.clone();
        spawn_local(async move {
            delete_with_feedback(&ctx, id, deleting, &BrowserNotifier).await;
        });
    });

    view! {
        <article class="goal-card" class:deleting=move || deleting.get()>
            <header class="goal-card-header">
                <h3 class="goal-title">{title}</h3>
                <div class="goal-actions">
                    <ComplexityBadge tier=tier score=score />
                    <DeleteConfirmButton
                        button_class="delete-btn"
                        disabled=deleting
                        on_confirm=on_confirm
                    />
                </div>
            </header>
            <p class="goal-date">"Created " {created}</p>
            <section class="action-plan">
                <h4>"Action Plan"</h4>
                <ol class="task-list">
                    {tasks.into_iter().map(|task| view! {
                        <li class="task-row">
                            <span class="task-order">{task.order}</span>
                            <p class="task-text">{task.task_text}</p>
                        </li>
                    }).collect_view()}
                </ol>
            </section>
        </article>
    }
}
