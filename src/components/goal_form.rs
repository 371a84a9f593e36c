//! Goal Form Component
//!
//! Text input for a new goal plus the inline error line.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_page_context;
use crate::models::GOAL_TEXT_MAX_LEN;
use crate::store::GoalBoardStoreFields;

/// Form for submitting a new goal
#[component]
pub fn GoalForm() -> impl IntoView {
    let ctx = use_page_context();
    let board = ctx.board;

    let submit_ctx = ctx.clone();
    let submit_goal = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let ctx = submit_ctx.clone();
        spawn_local(async move {
            ctx.submit().await;
        });
    };

    let input_ctx = ctx.clone();

    view! {
        <form class="goal-form" on:submit=submit_goal>
            <div class="goal-form-row">
                <input
                    type="text"
                    placeholder="e.g., 'Launch a startup' or 'Learn Python'"
                    maxlength=GOAL_TEXT_MAX_LEN.to_string()
                    prop:value=move || board.draft_text().get()
                    prop:disabled=move || board.is_submitting().get()
                    on:input=move |ev| input_ctx.set_draft(event_target_value(&ev))
                />
                <button
                    type="submit"
                    disabled=move || !board.with(|b| b.can_submit())
                >
                    {move || if board.is_submitting().get() { "Processing" } else { "Break It" }}
                </button>
            </div>
            {move || board.last_error().get().map(|message| view! {
                <p class="form-error">"Error: " {message}</p>
            })}
        </form>
    }
}
