//! Smart Goal Breaker App
//!
//! Page layout: header, goal form and the list of goals.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::GoalClient;
use crate::components::{GoalForm, GoalList};
use crate::config::ApiConfig;
use crate::context::PageContext;

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    let ctx = PageContext::new(GoalClient::new(config));

    // Provide context to all children
    provide_context(ctx.clone());

    // Load goals once on mount
    Effect::new(move |_| {
        let ctx = ctx.clone();
        spawn_local(async move {
            ctx.load_goals().await;
        });
    });

    view! {
        <main class="app-layout">
            <header class="hero">
                <h1>"Smart Goal Breaker"</h1>
                <p class="tagline">"Turn your vague ambitions into actionable steps with AI."</p>
            </header>

            <GoalForm />

            <GoalList />
        </main>
    }
}
